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

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rug::Float;

/// Arbitrary-precision float used by the numeric phase.
///
/// Reference arithmetic completes at the larger of the two operand
/// precisions, so mixed-precision expressions never silently round down.
#[derive(Clone, Debug)]
pub struct BigFloat(pub Float);

impl BigFloat {
    pub fn with_prec(bits: u32, v: f64) -> Self {
        BigFloat(Float::with_val(bits, v))
    }

    pub fn prec(&self) -> u32 {
        self.0.prec()
    }

    pub fn abs(&self) -> BigFloat {
        BigFloat(self.0.clone().abs())
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    /// Returns -1, 0, or +1.
    pub fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Some(Ordering::Greater) => 1,
            Some(Ordering::Less) => -1,
            _ => 0,
        }
    }

    pub fn min<'a>(&'a self, other: &'a BigFloat) -> &'a BigFloat {
        if other.0 < self.0 { other } else { self }
    }

    pub fn max<'a>(&'a self, other: &'a BigFloat) -> &'a BigFloat {
        if other.0 > self.0 { other } else { self }
    }

    #[inline]
    fn bits(&self, rhs: &BigFloat) -> u32 {
        self.0.prec().max(rhs.0.prec())
    }
}

impl<'a, 'b> Add<&'b BigFloat> for &'a BigFloat {
    type Output = BigFloat;
    fn add(self, rhs: &'b BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.bits(rhs), &self.0 + &rhs.0))
    }
}

impl<'a, 'b> Sub<&'b BigFloat> for &'a BigFloat {
    type Output = BigFloat;
    fn sub(self, rhs: &'b BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.bits(rhs), &self.0 - &rhs.0))
    }
}

impl<'a, 'b> Mul<&'b BigFloat> for &'a BigFloat {
    type Output = BigFloat;
    fn mul(self, rhs: &'b BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.bits(rhs), &self.0 * &rhs.0))
    }
}

impl<'a, 'b> Div<&'b BigFloat> for &'a BigFloat {
    type Output = BigFloat;
    fn div(self, rhs: &'b BigFloat) -> BigFloat {
        BigFloat(Float::with_val(self.bits(rhs), &self.0 / &rhs.0))
    }
}

impl Add for BigFloat {
    type Output = BigFloat;
    fn add(self, rhs: BigFloat) -> BigFloat {
        &self + &rhs
    }
}

impl Sub for BigFloat {
    type Output = BigFloat;
    fn sub(self, rhs: BigFloat) -> BigFloat {
        &self - &rhs
    }
}

impl Mul for BigFloat {
    type Output = BigFloat;
    fn mul(self, rhs: BigFloat) -> BigFloat {
        &self * &rhs
    }
}

impl Neg for BigFloat {
    type Output = BigFloat;
    fn neg(self) -> BigFloat {
        BigFloat(-self.0)
    }
}

impl<'a> Neg for &'a BigFloat {
    type Output = BigFloat;
    fn neg(self) -> BigFloat {
        BigFloat(-self.0.clone())
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &BigFloat) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &BigFloat) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl PartialEq<f64> for BigFloat {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<f64> for BigFloat {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}
