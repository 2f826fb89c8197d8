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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::StructureError;
use crate::polyhedron::union_find::UnionFind;
use crate::polyhedron::{EdgeId, FaceId, VertexId};

/// One `{edge_id, face_id}` entry of a face's neighbor list, as written in
/// the structure document. `face_id` is signed so that bad input can be
/// reported instead of failing to parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborSpec {
    pub edge_id: EdgeId,
    pub face_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSpec {
    pub gon: usize,
    pub neighbors: Vec<NeighborSpec>,
}

/// A validated face: local edge `k` is `edges[k]`, shared with `neighbors[k]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub gon: usize,
    pub edges: Vec<EdgeId>,
    pub neighbors: Vec<FaceId>,
}

impl Face {
    pub fn local_index_of(&self, edge: EdgeId) -> Option<usize> {
        self.edges.iter().position(|&e| e == edge)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSlot {
    pub face: FaceId,
    pub local: usize,
}

/// An edge with the two face slots it occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharedEdge {
    pub id: EdgeId,
    pub first: EdgeSlot,
    pub second: EdgeSlot,
}

impl SharedEdge {
    pub fn flipped(self) -> Self {
        Self {
            id: self.id,
            first: self.second,
            second: self.first,
        }
    }
}

/// Global vertex ids for every face corner.
///
/// Corner `(f, k)` sits between local edges `k` and `k + 1` of face `f`. An
/// edge at slot `(f, i)` and `(g, j)` glues corner `(f, i)` to
/// `(g, j - 1)` and `(f, i - 1)` to `(g, j)`. Ids are numbered by first
/// corner in face-major order, so they depend only on the partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexIncidence {
    offsets: Vec<usize>,
    labels: Vec<VertexId>,
    num_vertices: usize,
}

impl VertexIncidence {
    /// Edges may come in any order and with either slot first.
    pub fn build(faces: &[Face], edges: &[SharedEdge]) -> Self {
        let mut offsets = Vec::with_capacity(faces.len() + 1);
        let mut total = 0;
        for face in faces {
            offsets.push(total);
            total += face.gon;
        }
        offsets.push(total);

        // corner index `shift` steps before the slot's own corner
        let corner = |slot: &EdgeSlot, shift: usize| {
            let gon = faces[slot.face].gon;
            offsets[slot.face] + (slot.local + gon - shift) % gon
        };

        let mut uf = UnionFind::new(total);
        for e in edges {
            uf.union(corner(&e.first, 0), corner(&e.second, 1));
            uf.union(corner(&e.first, 1), corner(&e.second, 0));
        }

        let labels = uf.labels();
        let num_vertices = labels.iter().max().map_or(0, |m| m + 1);
        Self {
            offsets,
            labels,
            num_vertices,
        }
    }

    pub fn vertex_of(&self, face: FaceId, corner: usize) -> VertexId {
        self.labels[self.offsets[face] + corner]
    }

    pub fn face_vertices(&self, face: FaceId) -> &[VertexId] {
        &self.labels[self.offsets[face]..self.offsets[face + 1]]
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }
}

/// Combinatorial structure of a closed polyhedron, loaded once per run and
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct PolyhedronStructure {
    faces: Vec<Face>,
    shared_edges: Vec<SharedEdge>,
    incidence: VertexIncidence,
}

impl PolyhedronStructure {
    pub fn from_specs(specs: &[FaceSpec]) -> Result<Self, StructureError> {
        if specs.is_empty() {
            return Err(StructureError::Empty);
        }
        let num_faces = specs.len();
        let mut faces = Vec::with_capacity(num_faces);
        let mut slots: BTreeMap<EdgeId, Vec<EdgeSlot>> = BTreeMap::new();

        for (f, spec) in specs.iter().enumerate() {
            if spec.gon < 3 {
                return Err(StructureError::DegenerateFace {
                    face: f,
                    gon: spec.gon,
                });
            }
            if spec.neighbors.len() != spec.gon {
                return Err(StructureError::GonMismatch {
                    face: f,
                    gon: spec.gon,
                    neighbors: spec.neighbors.len(),
                });
            }
            let mut edges = Vec::with_capacity(spec.gon);
            let mut neighbors = Vec::with_capacity(spec.gon);
            for (local, n) in spec.neighbors.iter().enumerate() {
                if n.face_id < 0 || n.face_id as usize >= num_faces {
                    return Err(StructureError::NeighborOutOfRange {
                        face: f,
                        local,
                        neighbor: n.face_id,
                        num_faces,
                    });
                }
                edges.push(n.edge_id);
                neighbors.push(n.face_id as FaceId);
                slots
                    .entry(n.edge_id)
                    .or_default()
                    .push(EdgeSlot { face: f, local });
            }
            faces.push(Face {
                gon: spec.gon,
                edges,
                neighbors,
            });
        }

        let mut shared_edges = Vec::with_capacity(slots.len());
        for (id, found) in slots {
            let [first, second] = found[..] else {
                return Err(StructureError::EdgeMultiplicity {
                    edge: id,
                    count: found.len(),
                });
            };
            for (here, there) in [(first, second), (second, first)] {
                let named = faces[here.face].neighbors[here.local];
                if named != there.face {
                    return Err(StructureError::InconsistentNeighbor {
                        edge: id,
                        face: here.face,
                        other: there.face,
                        named,
                    });
                }
            }
            shared_edges.push(SharedEdge { id, first, second });
        }

        let incidence = VertexIncidence::build(&faces, &shared_edges);
        log::debug!(
            "polyhedron structure: {} faces, {} edges, {} vertices",
            faces.len(),
            shared_edges.len(),
            incidence.num_vertices()
        );
        Ok(Self {
            faces,
            shared_edges,
            incidence,
        })
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.incidence.num_vertices()
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    pub fn shared_edges(&self) -> &[SharedEdge] {
        &self.shared_edges
    }

    pub fn incidence(&self) -> &VertexIncidence {
        &self.incidence
    }

    pub fn vertex_of(&self, face: FaceId, corner: usize) -> VertexId {
        self.incidence.vertex_of(face, corner)
    }

    pub fn face_vertices(&self, face: FaceId) -> &[VertexId] {
        self.incidence.face_vertices(face)
    }
}
