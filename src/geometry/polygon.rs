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

use crate::error::EvalError;
use crate::geometry::{Point2, Segment2};
use crate::numeric::{BigFloat, LazyExact, PiAngle};

/// Inradius of a regular `n`-gon with unit edges: `1 / (2 tan(pi/n))`.
pub fn inradius(n: usize) -> LazyExact {
    let t = PiAngle::from_ratio(1, n as i64).tan();
    &LazyExact::one() / &(&LazyExact::from_i64(2) * &t)
}

/// Circumradius of a regular `n`-gon with unit edges: `1 / (2 sin(pi/n))`.
pub fn circumradius(n: usize) -> LazyExact {
    let s = PiAngle::from_ratio(1, n as i64).sin();
    &LazyExact::one() / &(&LazyExact::from_i64(2) * &s)
}

/// A convex polygon as an ordered vertex list of delayed coordinates.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Point2<LazyExact>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point2<LazyExact>>) -> Self {
        Self { vertices }
    }

    /// Regular unit-edge `gon`-gon around `center`; vertex `k` sits at angle
    /// `angle + pi/gon + 2*pi*k/gon`.
    pub fn regular(gon: usize, center: &Point2<LazyExact>, angle: &PiAngle) -> Self {
        let r = circumradius(gon);
        let n = gon as i64;
        let vertices = (0..n)
            .map(|k| {
                let theta = angle + &PiAngle::from_ratio(2 * k + 1, n);
                Point2 {
                    x: &center.x + &(&r * &theta.cos()),
                    y: &center.y + &(&r * &theta.sin()),
                }
            })
            .collect();
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1` (wrapping).
    pub fn edge(&self, i: usize) -> Segment2<LazyExact> {
        let n = self.vertices.len();
        Segment2::new(&self.vertices[i % n], &self.vertices[(i + 1) % n])
    }

    pub fn approx(&self, bits: u32) -> Result<Vec<Point2<BigFloat>>, EvalError> {
        self.vertices.iter().map(|v| v.approx(bits)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::Rational;
    use test_log::test;

    #[test]
    fn square_radii() {
        assert_eq!(inradius(4).as_rational(), Some(&Rational::from((1, 2))));
        let r = circumradius(4).approx(128).unwrap().to_f64();
        assert!((r - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-15);
    }

    #[test]
    fn hexagon_radii() {
        let ir = inradius(6).approx(128).unwrap().to_f64();
        assert!((ir - 3f64.sqrt() / 2.0).abs() < 1e-15);
        // sin(pi/6) == 1/2, so the circumradius is exactly 1
        assert_eq!(circumradius(6).as_rational(), Some(&Rational::from(1)));
    }

    #[test]
    fn regular_square_has_unit_edges() {
        let sq = Polygon::regular(4, &Point2::new(0, 0), &PiAngle::zero());
        assert_eq!(sq.len(), 4);
        let (x, y) = sq.vertices[0].to_f64().unwrap();
        assert!((x - 0.5).abs() < 1e-15 && (y - 0.5).abs() < 1e-15);
        for i in 0..4 {
            let d = sq.edge(i).direction();
            let len2 = d.dot(&d).approx(128).unwrap().to_f64();
            assert!((len2 - 1.0).abs() < 1e-15);
        }
    }
}
