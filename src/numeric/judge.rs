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

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::{EvalFallback, Tolerances};
use crate::error::EvalError;
use crate::numeric::lazy_exact::LazyExact;

/// Tolerance-aware predicates over delayed expressions for the exact
/// fallback path.
///
/// Range predicates (`non_negative`, `within_unit`) never fail. When an operand
/// cannot be evaluated the configured fallback answer is used, a warning is
/// logged and the shared counter is bumped, so callers can report how often
/// the guess was made. In the overlap classifier this happens for a
/// zero-length edge, whose collinear span cannot be evaluated.
pub struct Judge<'a> {
    tol: &'a Tolerances,
    fallback: EvalFallback,
    fallbacks: &'a AtomicUsize,
}

impl<'a> Judge<'a> {
    pub fn new(tol: &'a Tolerances, fallback: EvalFallback, fallbacks: &'a AtomicUsize) -> Self {
        Self {
            tol,
            fallback,
            fallbacks,
        }
    }

    pub fn tolerances(&self) -> &Tolerances {
        self.tol
    }

    pub fn sign(&self, x: &LazyExact) -> Result<i8, EvalError> {
        x.sign(self.tol)
    }

    pub fn is_negligible(&self, x: &LazyExact) -> Result<bool, EvalError> {
        x.is_negligible(self.tol)
    }

    /// `x >= 0`, where anything within `exact_eps` of zero counts.
    pub fn non_negative(&self, x: &LazyExact, site: &str) -> bool {
        let verdict = x.sign(self.tol).map(|s| s >= 0);
        self.settle(verdict, site)
    }

    /// `0 <= t <= 1` up to `exact_eps` at both ends.
    pub fn within_unit(&self, t: &LazyExact, site: &str) -> bool {
        self.non_negative(t, site) && self.non_negative(&(&LazyExact::one() - t), site)
    }

    /// `t` sits on 0 or 1.
    pub fn at_unit_end(&self, t: &LazyExact) -> Result<bool, EvalError> {
        Ok(self.is_negligible(t)? || self.is_negligible(&(t - &LazyExact::one()))?)
    }

    fn settle(&self, verdict: Result<bool, EvalError>, site: &str) -> bool {
        match verdict {
            Ok(v) => v,
            Err(err) => {
                let answer = self.fallback.answer();
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                log::warn!(
                    "exact evaluation failed at {site}: {err}; falling back to {:?} ({answer})",
                    self.fallback
                );
                answer
            }
        }
    }
}
