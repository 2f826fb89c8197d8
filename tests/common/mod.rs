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

#![allow(dead_code)]

use std::collections::BTreeMap;

use rotunfold::polyhedron::{EdgeId, FaceId, FaceSpec, NeighborSpec, PolyhedronStructure};
use rotunfold::unfolding::FacePlacement;

/// Face specs from vertex cycles that all wind the same way, so every edge
/// is walked in opposite directions by its two faces. Edge ids are handed
/// out in order of first appearance.
pub fn faces_from_cycles(cycles: &[Vec<usize>]) -> Vec<FaceSpec> {
    let key = |a: usize, b: usize| (a.min(b), a.max(b));
    let mut ids: BTreeMap<(usize, usize), EdgeId> = BTreeMap::new();
    let mut owners: BTreeMap<(usize, usize), Vec<FaceId>> = BTreeMap::new();
    let mut order = Vec::new();
    for (f, c) in cycles.iter().enumerate() {
        for k in 0..c.len() {
            let e = key(c[k], c[(k + 1) % c.len()]);
            if !ids.contains_key(&e) {
                ids.insert(e, order.len() as EdgeId);
                order.push(e);
            }
            owners.entry(e).or_default().push(f);
        }
    }
    cycles
        .iter()
        .enumerate()
        .map(|(f, c)| {
            let neighbors = (0..c.len())
                .map(|k| {
                    let e = key(c[k], c[(k + 1) % c.len()]);
                    let other = owners[&e].iter().copied().find(|&g| g != f).unwrap();
                    NeighborSpec {
                        edge_id: ids[&e],
                        face_id: other as i64,
                    }
                })
                .collect();
            FaceSpec {
                gon: c.len(),
                neighbors,
            }
        })
        .collect()
}

pub fn cube_specs() -> Vec<FaceSpec> {
    faces_from_cycles(&[
        vec![0, 2, 3, 1],
        vec![4, 5, 7, 6],
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
        vec![0, 1, 5, 4],
        vec![2, 6, 7, 3],
    ])
}

/// Triangular prism: faces 0 and 1 are the triangles, 2..=4 the squares.
pub fn prism_specs() -> Vec<FaceSpec> {
    faces_from_cycles(&[
        vec![0, 2, 1],
        vec![3, 4, 5],
        vec![0, 1, 4, 3],
        vec![1, 2, 5, 4],
        vec![2, 0, 3, 5],
    ])
}

pub const TORUS_N: usize = 4;

/// Flat square torus, `TORUS_N x TORUS_N` unit squares. Square `(i, j)` is
/// face `j * TORUS_N + i`.
pub fn torus_specs() -> Vec<FaceSpec> {
    let n = TORUS_N;
    let v = |i: usize, j: usize| (j % n) * n + (i % n);
    let cycles: Vec<Vec<usize>> = (0..n * n)
        .map(|f| {
            let (i, j) = (f % n, f / n);
            vec![v(i, j), v(i, j + 1), v(i + 1, j + 1), v(i + 1, j)]
        })
        .collect();
    faces_from_cycles(&cycles)
}

pub fn torus() -> PolyhedronStructure {
    PolyhedronStructure::from_specs(&torus_specs()).unwrap()
}

pub fn torus_face(i: i64, j: i64) -> FaceId {
    let n = TORUS_N as i64;
    (j.rem_euclid(n) * n + i.rem_euclid(n)) as FaceId
}

pub fn shared_edge(poly: &PolyhedronStructure, f: FaceId, g: FaceId) -> EdgeId {
    let face = poly.face(f).unwrap();
    let hits: Vec<_> = (0..face.gon).filter(|&k| face.neighbors[k] == g).collect();
    assert_eq!(hits.len(), 1, "faces {f} and {g} must share exactly one edge");
    face.edges[hits[0]]
}

/// Placements walking `faces` in order, each entering through the edge it
/// shares with its predecessor.
pub fn walk(poly: &PolyhedronStructure, faces: &[FaceId]) -> Vec<FacePlacement> {
    let gon = |f: FaceId| poly.face(f).unwrap().gon;
    let mut out = vec![FacePlacement::new(gon(faces[0]), faces[0], -1)];
    for w in faces.windows(2) {
        out.push(FacePlacement::new(gon(w[1]), w[1], shared_edge(poly, w[0], w[1])));
    }
    out
}

pub fn torus_walk(cells: &[(i64, i64)]) -> Vec<FacePlacement> {
    let poly = torus();
    let ids: Vec<_> = cells.iter().map(|&(i, j)| torus_face(i, j)).collect();
    walk(&poly, &ids)
}

pub fn record_line(faces: &[FacePlacement]) -> String {
    serde_json::json!({ "faces": faces }).to_string()
}
