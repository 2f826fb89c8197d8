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

use crate::polyhedron::{FaceId, PolyhedronStructure, VertexId};

/// Polyhedron vertex sets along an unfolding's face sequence.
#[derive(Clone, Debug)]
pub struct VertexChain {
    sets: Vec<Vec<VertexId>>,
}

impl VertexChain {
    /// Every id in `face_ids` must be a face of `poly`.
    pub fn new(poly: &PolyhedronStructure, face_ids: &[FaceId]) -> Self {
        let sets = face_ids
            .iter()
            .map(|&f| {
                let mut vs = poly.face_vertices(f).to_vec();
                vs.sort_unstable();
                vs.dedup();
                vs
            })
            .collect();
        Self { sets }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Do placements `i..=j` all touch one common polyhedron vertex?
    pub fn shares(&self, i: usize, j: usize) -> bool {
        debug_assert!(i <= j && j < self.sets.len());
        let mut common = self.sets[i].clone();
        for set in &self.sets[i + 1..=j] {
            common.retain(|v| set.binary_search(v).is_ok());
            if common.is_empty() {
                return false;
            }
        }
        !common.is_empty()
    }
}
