// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::geometry::Point2;
use crate::kernel::orient2d;
use crate::numeric::BigFloat;

/// Numeric-phase test: `p` is within `eps` of segment `a b`.
///
/// Collinear means `|cross| <= eps`; in range means the projection lies in
/// `[-eps, |b - a|^2 + eps]`.
pub fn is_point_on_segment(
    p: &Point2<BigFloat>,
    a: &Point2<BigFloat>,
    b: &Point2<BigFloat>,
    eps: f64,
) -> bool {
    let ap = p - a;
    let ab = b - a;

    if ap.cross(&ab).abs() > eps {
        return false;
    }

    let dot = ap.dot(&ab);
    if dot < -eps {
        return false;
    }
    let len2 = &ab.dot(&ab) + &BigFloat::with_prec(dot.prec(), eps);
    dot <= len2
}

/// Numeric-phase test: `p` lies inside the convex polygon `poly` and farther
/// than `eps` (in orientation value) from every edge line. Works for either
/// winding.
pub fn strictly_inside_convex(p: &Point2<BigFloat>, poly: &[Point2<BigFloat>], eps: f64) -> bool {
    if poly.len() < 3 {
        return false;
    }
    let mut side = 0i8;
    for (i, a) in poly.iter().enumerate() {
        let b = &poly[(i + 1) % poly.len()];
        let o = orient2d::<BigFloat>(a, b, p);
        let s = if o > eps {
            1
        } else if o < -eps {
            -1
        } else {
            return false;
        };
        if side == 0 {
            side = s;
        } else if side != s {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn pt(x: f64, y: f64) -> Point2<BigFloat> {
        Point2::new(BigFloat::with_prec(128, x), BigFloat::with_prec(128, y))
    }

    #[test]
    fn test_point_on_segment() {
        let a = pt(0.0, 0.0);
        let b = pt(2.0, 2.0);

        assert!(is_point_on_segment(&pt(1.0, 1.0), &a, &b, 1e-30));
        assert!(is_point_on_segment(&pt(2.0, 2.0), &a, &b, 1e-30));
        assert!(!is_point_on_segment(&pt(3.0, 3.0), &a, &b, 1e-30));
        assert!(!is_point_on_segment(&pt(1.0, 1.5), &a, &b, 1e-30));
    }

    #[test]
    fn inside_square_either_winding() {
        let ccw = [pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0), pt(0.0, 1.0)];
        let cw: Vec<_> = ccw.iter().rev().cloned().collect();
        let centre = pt(0.5, 0.5);
        assert!(strictly_inside_convex(&centre, &ccw, 1e-30));
        assert!(strictly_inside_convex(&centre, &cw, 1e-30));
        // boundary and outside points are not strictly inside
        assert!(!strictly_inside_convex(&pt(1.0, 0.5), &ccw, 1e-30));
        assert!(!strictly_inside_convex(&pt(1.5, 0.5), &ccw, 1e-30));
    }
}
