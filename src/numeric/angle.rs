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

use std::ops::{Add, Neg, Sub};

use rug::Rational;

use crate::numeric::lazy_exact::{LazyExact, Trig};

/// An angle stored exactly as `coefficient * pi`.
///
/// Every angle the unfolding needs (`-pi`, `2*pi*k/n`, `pi/n`) is a rational
/// multiple of `pi`, so angle arithmetic never rounds. Only `sin`/`cos`/`tan`
/// leave the rationals, and they return exact values where one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PiAngle(Rational);

impl PiAngle {
    pub fn zero() -> Self {
        PiAngle(Rational::new())
    }

    /// `pi`
    pub fn half_turn() -> Self {
        PiAngle(Rational::from(1))
    }

    /// `num/den * pi`; `den` must be non-zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "PiAngle::from_ratio: zero denominator");
        PiAngle(Rational::from((num, den)))
    }

    pub fn coefficient(&self) -> &Rational {
        &self.0
    }

    pub fn scale(&self, k: i64) -> Self {
        PiAngle(self.0.clone() * Rational::from(k))
    }

    pub fn to_degrees(&self) -> f64 {
        (self.0.clone() * Rational::from(180)).to_f64()
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_f64() * std::f64::consts::PI
    }

    /// Coefficient reduced into `[0, 2)`.
    pub fn reduced(&self) -> Rational {
        let two = Rational::from(2);
        let turns = (self.0.clone() / two.clone()).floor();
        self.0.clone() - turns * two
    }

    pub fn sin(&self) -> LazyExact {
        let r = self.reduced();
        match exact_sin(&r) {
            Some(v) => v,
            None => LazyExact::trig(Trig::Sin, r),
        }
    }

    pub fn cos(&self) -> LazyExact {
        // cos(x) = sin(x + pi/2)
        let shifted = PiAngle(self.0.clone() + Rational::from((1, 2)));
        let r = shifted.reduced();
        match exact_sin(&r) {
            Some(v) => v,
            None => LazyExact::trig(Trig::Cos, self.reduced()),
        }
    }

    pub fn tan(&self) -> LazyExact {
        let r = self.reduced();
        // period pi
        let k = whole_multiple(&r, 4).map(|k| k % 4);
        match k {
            Some(0) => LazyExact::zero(),
            Some(1) => LazyExact::one(),
            Some(3) => LazyExact::from_i64(-1),
            _ => LazyExact::trig(Trig::Tan, r),
        }
    }
}

/// `r * n` when that is an integer.
fn whole_multiple(r: &Rational, n: i64) -> Option<i64> {
    let k = r.clone() * Rational::from(n);
    if *k.denom() == 1 {
        k.numer().to_i64()
    } else {
        None
    }
}

/// `sin(r * pi)` for `r` in `[0, 2)` when the value is rational.
fn exact_sin(r: &Rational) -> Option<LazyExact> {
    match whole_multiple(r, 6)? {
        0 | 6 => Some(LazyExact::zero()),
        1 | 5 => Some(LazyExact::from_ratio(1, 2)),
        3 => Some(LazyExact::one()),
        7 | 11 => Some(LazyExact::from_ratio(-1, 2)),
        9 => Some(LazyExact::from_i64(-1)),
        _ => None,
    }
}

impl Add for PiAngle {
    type Output = PiAngle;
    fn add(self, rhs: PiAngle) -> PiAngle {
        PiAngle(self.0 + rhs.0)
    }
}

impl<'a, 'b> Add<&'b PiAngle> for &'a PiAngle {
    type Output = PiAngle;
    fn add(self, rhs: &'b PiAngle) -> PiAngle {
        PiAngle(Rational::from(&self.0 + &rhs.0))
    }
}

impl Sub for PiAngle {
    type Output = PiAngle;
    fn sub(self, rhs: PiAngle) -> PiAngle {
        PiAngle(self.0 - rhs.0)
    }
}

impl<'a, 'b> Sub<&'b PiAngle> for &'a PiAngle {
    type Output = PiAngle;
    fn sub(self, rhs: &'b PiAngle) -> PiAngle {
        PiAngle(Rational::from(&self.0 - &rhs.0))
    }
}

impl Neg for PiAngle {
    type Output = PiAngle;
    fn neg(self) -> PiAngle {
        PiAngle(-self.0)
    }
}
