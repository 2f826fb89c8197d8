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

mod common;

use std::io::Write;

use common::{cube_specs, faces_from_cycles, prism_specs, torus_specs};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rotunfold::Error;
use rotunfold::error::StructureError;
use rotunfold::io::load_polyhedron;
use rotunfold::polyhedron::{NeighborSpec, PolyhedronStructure, VertexIncidence};
use test_log::test;

fn faces_per_vertex(poly: &PolyhedronStructure) -> Vec<usize> {
    let mut count = vec![0; poly.num_vertices()];
    for f in 0..poly.num_faces() {
        for &v in poly.face_vertices(f) {
            count[v] += 1;
        }
    }
    count
}

#[test]
fn test_cube_incidence() {
    let poly = PolyhedronStructure::from_specs(&cube_specs()).unwrap();
    assert_eq!(poly.num_faces(), 6);
    assert_eq!(poly.shared_edges().len(), 12);
    assert_eq!(poly.num_vertices(), 8);
    assert!(faces_per_vertex(&poly).iter().all(|&c| c == 3));
    // first face, first corner
    assert_eq!(poly.vertex_of(0, 0), 0);
}

#[test]
fn test_torus_and_prism_incidence() {
    let torus = PolyhedronStructure::from_specs(&torus_specs()).unwrap();
    assert_eq!(torus.num_vertices(), 16);
    assert!(faces_per_vertex(&torus).iter().all(|&c| c == 4));

    let prism = PolyhedronStructure::from_specs(&prism_specs()).unwrap();
    assert_eq!(prism.num_vertices(), 6);
    assert_eq!(prism.shared_edges().len(), 9);
    assert!(faces_per_vertex(&prism).iter().all(|&c| c == 3));
}

#[test]
fn test_corners_across_an_edge_agree() {
    let poly = PolyhedronStructure::from_specs(&cube_specs()).unwrap();
    for e in poly.shared_edges() {
        let (f, i) = (e.first.face, e.first.local);
        let (g, j) = (e.second.face, e.second.local);
        let gon_f = poly.face(f).unwrap().gon;
        let gon_g = poly.face(g).unwrap().gon;
        assert_eq!(poly.vertex_of(f, i), poly.vertex_of(g, (j + gon_g - 1) % gon_g));
        assert_eq!(poly.vertex_of(f, (i + gon_f - 1) % gon_f), poly.vertex_of(g, j));
    }
}

#[test]
fn test_incidence_ignores_edge_order() {
    let poly = PolyhedronStructure::from_specs(&torus_specs()).unwrap();
    let reference = VertexIncidence::build(poly.faces(), poly.shared_edges());
    assert_eq!(&reference, poly.incidence());

    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..32 {
        let mut edges = poly.shared_edges().to_vec();
        edges.shuffle(&mut rng);
        for e in edges.iter_mut() {
            if rng.random_bool(0.5) {
                *e = e.flipped();
            }
        }
        let permuted = VertexIncidence::build(poly.faces(), &edges);
        assert_eq!(permuted, reference);
    }
}

#[test]
fn test_rejects_empty_and_degenerate() {
    assert_eq!(PolyhedronStructure::from_specs(&[]).unwrap_err(), StructureError::Empty);

    let mut specs = cube_specs();
    specs[3].gon = 2;
    specs[3].neighbors.truncate(2);
    assert_eq!(
        PolyhedronStructure::from_specs(&specs).unwrap_err(),
        StructureError::DegenerateFace { face: 3, gon: 2 }
    );
}

#[test]
fn test_rejects_gon_mismatch() {
    let mut specs = cube_specs();
    specs[1].gon = 5;
    assert_eq!(
        PolyhedronStructure::from_specs(&specs).unwrap_err(),
        StructureError::GonMismatch {
            face: 1,
            gon: 5,
            neighbors: 4
        }
    );
}

#[test]
fn test_rejects_neighbor_out_of_range() {
    let mut specs = cube_specs();
    specs[2].neighbors[1].face_id = 6;
    assert!(matches!(
        PolyhedronStructure::from_specs(&specs).unwrap_err(),
        StructureError::NeighborOutOfRange {
            face: 2,
            local: 1,
            neighbor: 6,
            num_faces: 6
        }
    ));

    specs[2].neighbors[1].face_id = -1;
    assert!(matches!(
        PolyhedronStructure::from_specs(&specs).unwrap_err(),
        StructureError::NeighborOutOfRange { neighbor: -1, .. }
    ));
}

#[test]
fn test_rejects_edge_multiplicity() {
    let mut specs = cube_specs();
    // reuse edge 0 a third time
    specs[5].neighbors[0].edge_id = 0;
    let err = PolyhedronStructure::from_specs(&specs).unwrap_err();
    assert!(matches!(err, StructureError::EdgeMultiplicity { .. }), "{err}");
}

#[test]
fn test_rejects_inconsistent_neighbor() {
    // Two triangles glued along all three edges, but one entry names itself.
    let mut specs = faces_from_cycles(&[vec![0, 1, 2], vec![0, 2, 1]]);
    specs[0].neighbors[2] = NeighborSpec {
        edge_id: specs[0].neighbors[2].edge_id,
        face_id: 0,
    };
    let err = PolyhedronStructure::from_specs(&specs).unwrap_err();
    assert!(matches!(
        err,
        StructureError::InconsistentNeighbor {
            face: 0,
            other: 1,
            named: 0,
            ..
        }
    ));
}

#[test]
fn test_load_json_and_adj_agree() {
    let specs = cube_specs();
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("polyhedron.json");
    let doc = serde_json::json!({ "schema_version": 1, "faces": specs });
    std::fs::write(&json_path, doc.to_string()).unwrap();

    let adj_path = dir.path().join("cube.adj");
    let mut adj = std::fs::File::create(&adj_path).unwrap();
    writeln!(adj, "NF{}", specs.len()).unwrap();
    for s in &specs {
        let edges: Vec<String> = s.neighbors.iter().map(|n| n.edge_id.to_string()).collect();
        let faces: Vec<String> = s.neighbors.iter().map(|n| n.face_id.to_string()).collect();
        writeln!(adj, "N{}", s.gon).unwrap();
        writeln!(adj, "V0 0 0 0").unwrap();
        writeln!(adj, "E{}", edges.join(" ")).unwrap();
        writeln!(adj, "F{}", faces.join(" ")).unwrap();
    }
    drop(adj);

    let from_json = load_polyhedron(&json_path).unwrap();
    let from_adj = load_polyhedron(&adj_path).unwrap();
    assert_eq!(from_json.faces(), from_adj.faces());
    assert_eq!(from_json.incidence(), from_adj.incidence());
}

#[test]
fn test_load_reports_bad_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r#"{"faces": [{"gon": 3}]}"#).unwrap();
    assert!(matches!(
        load_polyhedron(&path).unwrap_err(),
        Error::PolyhedronDocument { .. }
    ));

    let path = dir.path().join("open.json");
    let mut specs = cube_specs();
    specs.pop();
    std::fs::write(&path, serde_json::json!({ "faces": specs }).to_string()).unwrap();
    assert!(matches!(
        load_polyhedron(&path).unwrap_err(),
        Error::MalformedStructure(_)
    ));

    assert!(matches!(
        load_polyhedron(dir.path().join("missing.json")).unwrap_err(),
        Error::Io(_)
    ));
}
