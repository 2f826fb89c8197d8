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
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use num_traits::ToPrimitive;
use once_cell::sync::OnceCell;
use rug::{Float, Rational, float::Constant};

use crate::config::Tolerances;
use crate::error::EvalError;
use crate::numeric::big_float::BigFloat;

/// A delayed scalar expression over rationals and trigonometric values of
/// rational multiples of `pi`.
///
/// - Nodes are immutable and shared via Arc, so the per-face expressions of
///   an unfolding form a DAG rather than a tree
/// - Purely rational sub-expressions are folded on construction and stay exact
/// - Anything involving a trigonometric leaf is evaluated with MPFR on demand,
///   at whatever precision the caller asks for, and memoized
#[derive(Clone)]
pub struct LazyExact(Arc<Node>);

struct Node {
    kind: Kind,
    // Two precision slots: the fast phase and the working precision.
    low: OnceCell<Float>,
    high: OnceCell<Float>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trig {
    Sin,
    Cos,
    Tan,
}

enum Kind {
    Exact(Rational),
    /// `f(q * pi)`
    Trig(Trig, Rational),
    Add(LazyExact, LazyExact),
    Sub(LazyExact, LazyExact),
    Mul(LazyExact, LazyExact),
    Div(LazyExact, LazyExact),
    Neg(LazyExact),
}

impl LazyExact {
    /* ========= Constructors ========= */

    pub fn from_rational(r: Rational) -> Self {
        Self::new(Kind::Exact(r))
    }

    pub fn from_i64(v: i64) -> Self {
        Self::from_rational(Rational::from(v))
    }

    /// `num / den`; `den` must be non-zero.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        assert!(den != 0, "LazyExact::from_ratio: zero denominator");
        Self::from_rational(Rational::from((num, den)))
    }

    pub fn zero() -> Self {
        Self::from_i64(0)
    }

    pub fn one() -> Self {
        Self::from_i64(1)
    }

    /// Unevaluated `f(turns * pi)`. Callers that can produce a rational value
    /// should do so instead; see `PiAngle`.
    pub(crate) fn trig(f: Trig, turns: Rational) -> Self {
        Self::new(Kind::Trig(f, turns))
    }

    #[inline]
    fn new(kind: Kind) -> Self {
        LazyExact(Arc::new(Node {
            kind,
            low: OnceCell::new(),
            high: OnceCell::new(),
        }))
    }

    /* ========= Basic queries ========= */

    /// The exact value, when the expression folded down to a rational.
    pub fn as_rational(&self) -> Option<&Rational> {
        match &self.0.kind {
            Kind::Exact(r) => Some(r),
            _ => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.as_rational().is_some()
    }

    /// Numeric value at `bits` of precision, memoized per node.
    pub fn approx(&self, bits: u32) -> Result<BigFloat, EvalError> {
        if let Some(v) = self.cached(bits) {
            return Ok(BigFloat(v));
        }
        let v = self.evaluate(bits, true)?;
        if self.0.low.set(v.clone()).is_err() {
            let _ = self.0.high.set(v.clone());
        }
        Ok(BigFloat(v))
    }

    /// Like `approx`, but leaves the memo slots alone. Used for one-off
    /// reads (logging, `to_f64`) so they do not take a slot the classifier
    /// precisions need.
    pub fn peek(&self, bits: u32) -> Result<BigFloat, EvalError> {
        match self.cached(bits) {
            Some(v) => Ok(BigFloat(v)),
            None => self.evaluate(bits, false).map(BigFloat),
        }
    }

    /// Sign with a precision ladder:
    /// - rational: exact sign
    /// - |v| > fast_eps at fast precision: sign(v)
    /// - else re-evaluate at working precision; |v| < exact_eps counts as zero
    ///
    /// Returns -1, 0, or +1.
    pub fn sign(&self, tol: &Tolerances) -> Result<i8, EvalError> {
        if let Some(r) = self.as_rational() {
            return Ok(ordering_sign(r.cmp0()));
        }
        let fast = self.approx(tol.fast_bits)?;
        if fast.abs() > tol.fast_eps {
            return Ok(fast.sign());
        }
        let exact = self.approx(tol.exact_bits)?;
        if exact.abs() < tol.exact_eps {
            Ok(0)
        } else {
            Ok(exact.sign())
        }
    }

    pub fn is_negligible(&self, tol: &Tolerances) -> Result<bool, EvalError> {
        Ok(self.sign(tol)? == 0)
    }

    /* ========= Internal helpers ========= */

    fn cached(&self, bits: u32) -> Option<Float> {
        [&self.0.low, &self.0.high]
            .into_iter()
            .filter_map(|cell| cell.get())
            .find(|v| v.prec() == bits)
            .cloned()
    }

    fn evaluate(&self, bits: u32, memo: bool) -> Result<Float, EvalError> {
        let at = |x: &LazyExact| if memo { x.approx(bits) } else { x.peek(bits) };
        let v = match &self.0.kind {
            Kind::Exact(r) => Float::with_val(bits, r),
            Kind::Trig(f, q) => {
                let mut x = Float::with_val(bits, Constant::Pi);
                x *= q;
                match f {
                    Trig::Sin => x.sin(),
                    Trig::Cos => x.cos(),
                    Trig::Tan => x.tan(),
                }
            }
            Kind::Add(a, b) => Float::with_val(bits, &at(a)?.0 + &at(b)?.0),
            Kind::Sub(a, b) => Float::with_val(bits, &at(a)?.0 - &at(b)?.0),
            Kind::Mul(a, b) => Float::with_val(bits, &at(a)?.0 * &at(b)?.0),
            Kind::Div(a, b) => {
                let denom = at(b)?.0;
                if denom.is_zero() {
                    return Err(EvalError::DivisionByZero);
                }
                Float::with_val(bits, &at(a)?.0 / &denom)
            }
            Kind::Neg(x) => -at(x)?.0,
        };
        if !v.is_finite() {
            return Err(EvalError::NonFinite);
        }
        Ok(v)
    }
}

fn ordering_sign(o: Ordering) -> i8 {
    match o {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn is_zero(r: &Rational) -> bool {
    r.cmp0() == Ordering::Equal
}

/* ========= Folding constructors ========= */

fn add(a: &LazyExact, b: &LazyExact) -> LazyExact {
    match (a.as_rational(), b.as_rational()) {
        (Some(x), Some(y)) => LazyExact::from_rational(Rational::from(x + y)),
        (Some(x), None) if is_zero(x) => b.clone(),
        (None, Some(y)) if is_zero(y) => a.clone(),
        _ => LazyExact::new(Kind::Add(a.clone(), b.clone())),
    }
}

fn sub(a: &LazyExact, b: &LazyExact) -> LazyExact {
    if Arc::ptr_eq(&a.0, &b.0) {
        return LazyExact::zero();
    }
    match (a.as_rational(), b.as_rational()) {
        (Some(x), Some(y)) => LazyExact::from_rational(Rational::from(x - y)),
        (None, Some(y)) if is_zero(y) => a.clone(),
        (Some(x), None) if is_zero(x) => neg(b),
        _ => LazyExact::new(Kind::Sub(a.clone(), b.clone())),
    }
}

fn mul(a: &LazyExact, b: &LazyExact) -> LazyExact {
    match (a.as_rational(), b.as_rational()) {
        (Some(x), Some(y)) => LazyExact::from_rational(Rational::from(x * y)),
        (Some(x), _) | (_, Some(x)) if is_zero(x) => LazyExact::zero(),
        (Some(x), None) if *x == 1 => b.clone(),
        (None, Some(y)) if *y == 1 => a.clone(),
        _ => LazyExact::new(Kind::Mul(a.clone(), b.clone())),
    }
}

fn div(a: &LazyExact, b: &LazyExact) -> LazyExact {
    match (a.as_rational(), b.as_rational()) {
        // An exact zero divisor stays unevaluated and fails at evaluation time.
        (Some(x), Some(y)) if !is_zero(y) => LazyExact::from_rational(Rational::from(x / y)),
        (None, Some(y)) if *y == 1 => a.clone(),
        _ => LazyExact::new(Kind::Div(a.clone(), b.clone())),
    }
}

fn neg(a: &LazyExact) -> LazyExact {
    match a.as_rational() {
        Some(x) => LazyExact::from_rational(Rational::from(-x)),
        None => LazyExact::new(Kind::Neg(a.clone())),
    }
}

/* ========= Operator overloads (build expression DAGs) ========= */

impl Add for LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: LazyExact) -> LazyExact {
        add(&self, &rhs)
    }
}

impl<'a, 'b> Add<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: &'b LazyExact) -> LazyExact {
        add(self, rhs)
    }
}

impl Sub for LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: LazyExact) -> LazyExact {
        sub(&self, &rhs)
    }
}

impl<'a, 'b> Sub<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: &'b LazyExact) -> LazyExact {
        sub(self, rhs)
    }
}

impl Mul for LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: LazyExact) -> LazyExact {
        mul(&self, &rhs)
    }
}

impl<'a, 'b> Mul<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: &'b LazyExact) -> LazyExact {
        mul(self, rhs)
    }
}

impl Div for LazyExact {
    type Output = LazyExact;
    fn div(self, rhs: LazyExact) -> LazyExact {
        div(&self, &rhs)
    }
}

impl<'a, 'b> Div<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn div(self, rhs: &'b LazyExact) -> LazyExact {
        div(self, rhs)
    }
}

impl Neg for LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        neg(&self)
    }
}

impl<'a> Neg for &'a LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        neg(self)
    }
}

/* ========= Conversions ========= */

impl From<i32> for LazyExact {
    fn from(v: i32) -> Self {
        Self::from_i64(v as i64)
    }
}

impl From<i64> for LazyExact {
    fn from(v: i64) -> Self {
        Self::from_i64(v)
    }
}

impl From<Rational> for LazyExact {
    fn from(v: Rational) -> Self {
        Self::from_rational(v)
    }
}

impl ToPrimitive for LazyExact {
    fn to_f64(&self) -> Option<f64> {
        self.peek(53).ok().map(|v| v.to_f64())
    }

    fn to_i64(&self) -> Option<i64> {
        self.to_f64().and_then(|v| v.to_i64())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_f64().and_then(|v| v.to_u64())
    }
}

/* ========= Debug ========= */

impl fmt::Debug for LazyExact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Exact(r) => write!(f, "LazyExact(exact={})", r),
            _ => match self.to_f64() {
                Some(a) => write!(f, "LazyExact(approx={:.9}, exact=<lazy>)", a),
                None => write!(f, "LazyExact(<unevaluable>)"),
            },
        }
    }
}
