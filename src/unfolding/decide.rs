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

use std::fmt;

use crate::config::ExactConfig;
use crate::error::{EvalError, ReconstructError};
use crate::geometry::Polygon;
use crate::overlap::{OverlapClassifier, OverlapKind};
use crate::polyhedron::PolyhedronStructure;
use crate::unfolding::chain::VertexChain;
use crate::unfolding::placement::FacePlacement;
use crate::unfolding::reconstruct::reconstruct;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason {
    Valid,
    TooFewFaces,
    EndpointVertexChain,
    NoEndpointOverlap,
    SpuriousOverlap,
    ReconstructionFailed(ReconstructError),
    EvaluationFailed(EvalError),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Valid => f.write_str("valid"),
            Reason::TooFewFaces => f.write_str("too few faces"),
            Reason::EndpointVertexChain => f.write_str("endpoint vertex chain"),
            Reason::NoEndpointOverlap => f.write_str("no endpoint overlap"),
            Reason::SpuriousOverlap => f.write_str("spurious overlap"),
            Reason::ReconstructionFailed(e) => write!(f, "reconstruction failed: {e}"),
            Reason::EvaluationFailed(e) => write!(f, "evaluation failed: {e}"),
        }
    }
}

/// First non-adjacent pair found overlapping, in scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpuriousOverlap {
    pub i: usize,
    pub j: usize,
    pub kind: OverlapKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub reason: Reason,
    pub endpoint_kind: Option<OverlapKind>,
    pub spurious: Option<SpuriousOverlap>,
}

impl Decision {
    fn rejected(reason: Reason) -> Self {
        Self {
            reason,
            endpoint_kind: None,
            spurious: None,
        }
    }

    pub fn keep(&self) -> bool {
        self.reason == Reason::Valid
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.reason, self.endpoint_kind, self.spurious) {
            (Reason::Valid, Some(kind), _) => write!(f, "KEEP (endpoint: {kind})"),
            (Reason::SpuriousOverlap, _, Some(sp)) => {
                write!(f, "REMOVE (spurious {} at [{}, {}])", sp.kind, sp.i, sp.j)
            }
            (reason, _, _) => write!(f, "REMOVE ({reason})"),
        }
    }
}

/// Accepts an unfolding when its first and last faces overlap and no other
/// pair of faces does, except pairs that meet around a common polyhedron
/// vertex.
#[derive(Debug)]
pub struct RecordDecider<'a> {
    poly: &'a PolyhedronStructure,
    classifier: OverlapClassifier,
}

impl<'a> RecordDecider<'a> {
    pub fn new(poly: &'a PolyhedronStructure, config: ExactConfig) -> Self {
        Self {
            poly,
            classifier: OverlapClassifier::new(config),
        }
    }

    pub fn classifier(&self) -> &OverlapClassifier {
        &self.classifier
    }

    pub fn decide(&self, faces: &[FacePlacement]) -> Decision {
        if faces.len() < 2 {
            return Decision::rejected(Reason::TooFewFaces);
        }
        let placements = match reconstruct(self.poly, faces) {
            Ok(p) => p,
            Err(e) => return Decision::rejected(Reason::ReconstructionFailed(e)),
        };

        let face_ids: Vec<_> = placements.iter().map(|p| p.face_id).collect();
        let chain = VertexChain::new(self.poly, &face_ids);
        let last = placements.len() - 1;
        if chain.shares(0, last) {
            return Decision::rejected(Reason::EndpointVertexChain);
        }

        let polygons: Vec<Polygon> = placements.iter().map(|p| p.polygon()).collect();
        self.scan(&chain, &polygons)
            .unwrap_or_else(|e| Decision::rejected(Reason::EvaluationFailed(e)))
    }

    fn scan(&self, chain: &VertexChain, polygons: &[Polygon]) -> Result<Decision, EvalError> {
        let last = polygons.len() - 1;
        let Some(endpoint) = self.classifier.classify(&polygons[0], &polygons[last])? else {
            return Ok(Decision::rejected(Reason::NoEndpointOverlap));
        };

        for i in 0..polygons.len() {
            for j in i + 1..polygons.len() {
                if (i, j) == (0, last) || chain.shares(i, j) {
                    continue;
                }
                if let Some(kind) = self.classifier.classify(&polygons[i], &polygons[j])? {
                    return Ok(Decision {
                        reason: Reason::SpuriousOverlap,
                        endpoint_kind: Some(endpoint),
                        spurious: Some(SpuriousOverlap { i, j, kind }),
                    });
                }
            }
        }

        Ok(Decision {
            reason: Reason::Valid,
            endpoint_kind: Some(endpoint),
            spurious: None,
        })
    }
}
