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
use crate::numeric::{Judge, LazyExact};

/// How two closed segments meet, decided on delayed expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentContact {
    Disjoint,
    /// Single point, interior to both segments.
    Crossing,
    /// Single point that is an endpoint of at least one segment.
    Point {
        endpoint_of_a: bool,
        endpoint_of_b: bool,
    },
    /// Collinear overlap of positive length.
    Overlapping,
}

/// Parametric intersection of `seg1 = P1 + t d1` and `seg2 = Q1 + s d2`.
///
/// Non-parallel segments are solved for `t, s` by Cramer's rule and
/// classified by where the parameters land. Parallel segments (determinant
/// negligible at working precision) are disjoint unless collinear, in which
/// case the overlap of `seg2` projected onto `seg1` is measured.
pub fn segment_contact(
    seg1: &Segment2<LazyExact>,
    seg2: &Segment2<LazyExact>,
    judge: &Judge<'_>,
) -> Result<SegmentContact, EvalError> {
    let d1 = seg1.direction();
    let d2 = seg2.direction();
    let w = &seg2.a - &seg1.a;
    let det = d1.cross(&d2);

    if judge.is_negligible(&det)? {
        return collinear_contact(seg1, seg2, &d1, &w, judge);
    }

    let t = &w.cross(&d2) / &det;
    let s = &w.cross(&d1) / &det;

    if !(judge.within_unit(&t, "segment parameter t") && judge.within_unit(&s, "segment parameter s"))
    {
        return Ok(SegmentContact::Disjoint);
    }

    let endpoint_of_a = judge.at_unit_end(&t)?;
    let endpoint_of_b = judge.at_unit_end(&s)?;
    if !endpoint_of_a && !endpoint_of_b {
        return Ok(SegmentContact::Crossing);
    }
    Ok(SegmentContact::Point {
        endpoint_of_a,
        endpoint_of_b,
    })
}

fn collinear_contact(
    seg1: &Segment2<LazyExact>,
    seg2: &Segment2<LazyExact>,
    d1: &Point2<LazyExact>,
    w: &Point2<LazyExact>,
    judge: &Judge<'_>,
) -> Result<SegmentContact, EvalError> {
    // Parallel lines that are not the same line never meet.
    if !judge.is_negligible(&w.cross(d1))? {
        return Ok(SegmentContact::Disjoint);
    }

    // Parameters of seg2's endpoints along seg1.
    let len2 = d1.dot(d1);
    let u0 = &w.dot(d1) / &len2;
    let u1 = &(&seg2.b - &seg1.a).dot(d1) / &len2;

    // Range checks come first: a zero-length seg1 leaves u0, u1 unevaluable
    // and the configured fallback decides whether the spans meet.
    let one = LazyExact::one();
    let reaches_start = judge.non_negative(&u0, "collinear span end")
        || judge.non_negative(&u1, "collinear span end");
    let reaches_end = reaches_start
        && (judge.non_negative(&(&one - &u0), "collinear span start")
            || judge.non_negative(&(&one - &u1), "collinear span start"));
    if !reaches_end {
        return Ok(SegmentContact::Disjoint);
    }

    let (lo, hi) = if judge.sign(&(&u1 - &u0))? >= 0 {
        (u0.clone(), u1.clone())
    } else {
        (u1.clone(), u0.clone())
    };

    // Clip [lo, hi] to seg1's [0, 1].
    let start = if judge.sign(&lo)? > 0 { lo } else { LazyExact::zero() };
    let end = if judge.sign(&(&hi - &one))? < 0 { hi } else { one };

    if judge.sign(&(&end - &start))? > 0 {
        return Ok(SegmentContact::Overlapping);
    }

    let endpoint_of_a = judge.at_unit_end(&start)?;
    let endpoint_of_b =
        judge.is_negligible(&(&start - &u0))? || judge.is_negligible(&(&start - &u1))?;
    Ok(SegmentContact::Point {
        endpoint_of_a,
        endpoint_of_b,
    })
}
