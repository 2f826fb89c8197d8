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

use crate::geometry::point_2::Point2;
use crate::numeric::BigFloat;

/// An axis-aligned bounding box over numeric-phase coordinates.
#[derive(Clone, Debug)]
pub struct Aabb2 {
    pub min: Point2<BigFloat>,
    pub max: Point2<BigFloat>,
}

impl Aabb2 {
    /// Build the smallest AABB containing two points.
    pub fn from_segment(a: &Point2<BigFloat>, b: &Point2<BigFloat>) -> Self {
        Aabb2 {
            min: Point2 {
                x: a.x.min(&b.x).clone(),
                y: a.y.min(&b.y).clone(),
            },
            max: Point2 {
                x: a.x.max(&b.x).clone(),
                y: a.y.max(&b.y).clone(),
            },
        }
    }

    /// Smallest AABB containing every point; `None` for an empty slice.
    pub fn from_points(points: &[Point2<BigFloat>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bb = Aabb2 {
            min: first.clone(),
            max: first.clone(),
        };
        for p in rest {
            if p.x < bb.min.x {
                bb.min.x = p.x.clone();
            }
            if p.x > bb.max.x {
                bb.max.x = p.x.clone();
            }
            if p.y < bb.min.y {
                bb.min.y = p.y.clone();
            }
            if p.y > bb.max.y {
                bb.max.y = p.y.clone();
            }
        }
        Some(bb)
    }

    /// Does this AABB intersect `other` once both are grown by `margin`?
    pub fn intersects(&self, other: &Aabb2, margin: f64) -> bool {
        let m = BigFloat::with_prec(self.min.x.prec(), margin);
        let separated = self.max.x < &other.min.x - &m
            || other.max.x < &self.min.x - &m
            || self.max.y < &other.min.y - &m
            || other.max.y < &self.min.y - &m;
        !separated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn pt(x: f64, y: f64) -> Point2<BigFloat> {
        Point2::new(BigFloat::with_prec(128, x), BigFloat::with_prec(128, y))
    }

    #[test]
    fn touching_boxes_intersect() {
        let a = Aabb2::from_points(&[pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap();
        let b = Aabb2::from_points(&[pt(1.0, 0.5), pt(2.0, 3.0)]).unwrap();
        assert!(a.intersects(&b, 1e-30));
        assert!(b.intersects(&a, 1e-30));
    }

    #[test]
    fn margin_bridges_tiny_gaps_only() {
        let a = Aabb2::from_segment(&pt(0.0, 0.0), &pt(1.0, 1.0));
        let b = Aabb2::from_segment(&pt(1.0 + 1e-12, 0.0), &pt(2.0, 1.0));
        assert!(!a.intersects(&b, 1e-30));
        assert!(a.intersects(&b, 1e-9));
    }

    #[test]
    fn empty_point_set_has_no_box() {
        assert!(Aabb2::from_points(&[]).is_none());
    }
}
