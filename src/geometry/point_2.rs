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

use std::ops::{Add, Mul, Sub};

use crate::error::EvalError;
use crate::numeric::{BigFloat, LazyExact};

#[derive(Debug, Clone, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<T> Point2<T>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// z-component of `self x other`, treating both as vectors.
    pub fn cross(&self, other: &Point2<T>) -> T {
        &(&self.x * &other.y) - &(&self.y * &other.x)
    }

    pub fn dot(&self, other: &Point2<T>) -> T {
        &(&self.x * &other.x) + &(&self.y * &other.y)
    }
}

impl<'a, 'b, T> Add<&'b Point2<T>> for &'a Point2<T>
where
    for<'c> &'c T: Add<&'c T, Output = T>,
{
    type Output = Point2<T>;
    fn add(self, rhs: &'b Point2<T>) -> Point2<T> {
        Point2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl<'a, 'b, T> Sub<&'b Point2<T>> for &'a Point2<T>
where
    for<'c> &'c T: Sub<&'c T, Output = T>,
{
    type Output = Point2<T>;
    fn sub(self, rhs: &'b Point2<T>) -> Point2<T> {
        Point2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl Point2<LazyExact> {
    pub fn approx(&self, bits: u32) -> Result<Point2<BigFloat>, EvalError> {
        Ok(Point2 {
            x: self.x.approx(bits)?,
            y: self.y.approx(bits)?,
        })
    }

    pub fn to_f64(&self) -> Result<(f64, f64), EvalError> {
        Ok((self.x.peek(53)?.to_f64(), self.y.peek(53)?.to_f64()))
    }
}
