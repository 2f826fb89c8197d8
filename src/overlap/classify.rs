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

use crate::config::ExactConfig;
use crate::error::EvalError;
use crate::geometry::{Aabb2, Point2, Polygon, SegmentContact, segment_contact};
use crate::kernel::{is_point_on_segment, orient2d, strictly_inside_convex};
use crate::numeric::{BigFloat, Judge};
use crate::overlap::kind::OverlapKind;

/// Decides whether two placed faces overlap and how.
///
/// Polygons whose bounding boxes are apart are rejected outright. Every
/// remaining edge pair is screened numerically at `fast_bits`: boxes that are
/// apart are skipped and a clear proper crossing is `face-face` at once.
/// Pairs whose orientation values sit within `fast_eps` of zero, or where an
/// endpoint lies on the other edge, go through the exact parametric
/// intersection. The strongest kind over all pairs is reported.
///
/// Shareable across threads; the fallback counter is atomic.
#[derive(Debug, Default)]
pub struct OverlapClassifier {
    config: ExactConfig,
    fallbacks: AtomicUsize,
}

impl OverlapClassifier {
    pub fn new(config: ExactConfig) -> Self {
        Self {
            config,
            fallbacks: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &ExactConfig {
        &self.config
    }

    /// Range predicates that had to guess because evaluation failed.
    pub fn fallback_count(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn overlaps(&self, a: &Polygon, b: &Polygon) -> Result<bool, EvalError> {
        Ok(self.classify(a, b)?.is_some())
    }

    pub fn classify(&self, a: &Polygon, b: &Polygon) -> Result<Option<OverlapKind>, EvalError> {
        let tol = &self.config.tolerances;
        let eps = tol.fast_eps;
        let judge = Judge::new(tol, self.config.eval_fallback, &self.fallbacks);

        let pa = a.approx(tol.fast_bits)?;
        let pb = b.approx(tol.fast_bits)?;
        if !bounds_overlap(&pa, &pb, eps) {
            return Ok(None);
        }
        let (na, nb) = (pa.len(), pb.len());

        let mut best: Option<OverlapKind> = None;
        for i in 0..na {
            let (a1, a2) = (&pa[i], &pa[(i + 1) % na]);
            let box_a = Aabb2::from_segment(a1, a2);
            for j in 0..nb {
                let (b1, b2) = (&pb[j], &pb[(j + 1) % nb]);
                if !box_a.intersects(&Aabb2::from_segment(b1, b2), eps) {
                    continue;
                }

                let d1 = orient2d::<BigFloat>(a1, a2, b1);
                let d2 = orient2d::<BigFloat>(a1, a2, b2);
                let d3 = orient2d::<BigFloat>(b1, b2, a1);
                let d4 = orient2d::<BigFloat>(b1, b2, a2);
                if &d1 * &d2 < -eps && &d3 * &d4 < -eps {
                    return Ok(Some(OverlapKind::FaceFace));
                }

                if !is_ambiguous([&d1, &d2, &d3, &d4], [a1, a2], [b1, b2], eps) {
                    continue;
                }
                let found = match segment_contact(&a.edge(i), &b.edge(j), &judge)? {
                    SegmentContact::Disjoint => continue,
                    SegmentContact::Crossing => OverlapKind::FaceFace,
                    SegmentContact::Overlapping => OverlapKind::EdgeEdge,
                    SegmentContact::Point {
                        endpoint_of_a: true,
                        endpoint_of_b: true,
                    } => OverlapKind::VertexVertex,
                    SegmentContact::Point { .. } => OverlapKind::EdgeVertex,
                };
                log::trace!("edges a{i}/b{j}: exact contact {found}");
                if found == OverlapKind::FaceFace {
                    return Ok(Some(found));
                }
                best = Some(OverlapKind::strongest(best, found));
            }
        }

        if best.is_none() && self.config.detect_containment && nested(&pa, &pb, eps) {
            log::trace!("no edge contact, one face inside the other");
            return Ok(Some(OverlapKind::FaceFace));
        }
        Ok(best)
    }
}

/// Whole-polygon box test, grown by `eps`. Empty polygons never overlap.
pub fn bounds_overlap(pa: &[Point2<BigFloat>], pb: &[Point2<BigFloat>], eps: f64) -> bool {
    match (Aabb2::from_points(pa), Aabb2::from_points(pb)) {
        (Some(box_a), Some(box_b)) => box_a.intersects(&box_b, eps),
        _ => false,
    }
}

fn is_ambiguous(
    orients: [&BigFloat; 4],
    [a1, a2]: [&Point2<BigFloat>; 2],
    [b1, b2]: [&Point2<BigFloat>; 2],
    eps: f64,
) -> bool {
    orients.iter().any(|d| d.abs() <= eps)
        || is_point_on_segment(b1, a1, a2, eps)
        || is_point_on_segment(b2, a1, a2, eps)
        || is_point_on_segment(a1, b1, b2, eps)
        || is_point_on_segment(a2, b1, b2, eps)
}

fn nested(pa: &[Point2<BigFloat>], pb: &[Point2<BigFloat>], eps: f64) -> bool {
    pb.iter().any(|p| strictly_inside_convex(p, pa, eps))
        || pa.iter().any(|p| strictly_inside_convex(p, pb, eps))
}
