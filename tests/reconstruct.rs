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

use common::{prism_specs, torus, torus_walk, walk};
use rotunfold::error::ReconstructError;
use rotunfold::polyhedron::PolyhedronStructure;
use rotunfold::unfolding::{ExactPlacement, FacePlacement, VertexChain, reconstruct};
use rug::Rational;
use test_log::test;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn assert_center(p: &ExactPlacement, x: f64, y: f64) {
    let (cx, cy) = p.center.to_f64().unwrap();
    assert!(close(cx, x) && close(cy, y), "center ({cx}, {cy}), expected ({x}, {y})");
}

#[test]
fn test_square_chain_matches_worked_example() {
    let poly = torus();
    let faces = torus_walk(&[(0, 0), (1, 0), (1, 1)]);
    let placed = reconstruct(&poly, &faces).unwrap();

    assert_center(&placed[0], 0.0, 0.0);
    assert_eq!(placed[0].angle_deg(), 0.0);
    assert_center(&placed[1], 1.0, 0.0);
    assert_eq!(placed[1].angle_deg(), -180.0);
    assert_center(&placed[2], 1.0, 1.0);
    // -450 degrees, i.e. -90
    assert_eq!(placed[2].angle.reduced(), Rational::from((3, 2)));

    let expected = [(1.5, 0.5), (1.5, 1.5), (0.5, 1.5), (0.5, 0.5)];
    let square = placed[2].polygon();
    // vertex 0 sits at angle + pi/4
    let got: Vec<(f64, f64)> = square.vertices.iter().map(|v| v.to_f64().unwrap()).collect();
    for ((x, y), (ex, ey)) in got.iter().zip(expected) {
        assert!(close(*x, ex) && close(*y, ey), "({x}, {y}) vs ({ex}, {ey})");
    }
}

#[test]
fn test_first_two_placements_are_fixed() {
    let poly = PolyhedronStructure::from_specs(&prism_specs()).unwrap();
    let faces = walk(&poly, &[0, 2]);
    let placed = reconstruct(&poly, &faces).unwrap();
    // ir(3) + ir(4) = sqrt(3)/6 + 1/2
    assert_center(&placed[1], 3f64.sqrt() / 6.0 + 0.5, 0.0);
    assert_eq!(placed[1].angle.coefficient(), &Rational::from(-1));
    // the y coordinate never left the rationals
    assert_eq!(placed[1].center.y.as_rational(), Some(&Rational::new()));
}

#[test]
fn test_mixed_gon_chain() {
    let poly = PolyhedronStructure::from_specs(&prism_specs()).unwrap();
    let faces = walk(&poly, &[0, 2, 3, 1]);
    let placed = reconstruct(&poly, &faces).unwrap();
    let ir3 = 3f64.sqrt() / 6.0;

    assert_center(&placed[2], ir3 + 0.5, 1.0);
    assert_eq!(placed[2].angle.coefficient(), &Rational::from((-5, 2)));
    assert_center(&placed[3], 2.0 * ir3 + 1.0, 1.0);
    assert_eq!(placed[3].angle.coefficient(), &Rational::from(-5));
    assert_eq!(placed[3].polygon().len(), 3);
}

#[test]
fn test_reconstruction_errors() {
    let poly = torus();
    let faces = torus_walk(&[(0, 0), (1, 0), (1, 1)]);

    assert_eq!(
        reconstruct(&poly, &faces[..1]).unwrap_err(),
        ReconstructError::TooFewFaces { count: 1 }
    );

    let mut unknown = faces.clone();
    unknown[1].face_id = 99;
    assert_eq!(
        reconstruct(&poly, &unknown).unwrap_err(),
        ReconstructError::UnknownFace {
            index: 1,
            face_id: 99
        }
    );

    let mut wrong_gon = faces.clone();
    wrong_gon[2].gon = 6;
    assert!(matches!(
        reconstruct(&poly, &wrong_gon).unwrap_err(),
        ReconstructError::GonMismatch {
            index: 2,
            placed: 6,
            actual: 4,
            ..
        }
    ));

    let mut lost = faces.clone();
    lost[2].edge_id = 1_000;
    assert_eq!(
        reconstruct(&poly, &lost).unwrap_err(),
        ReconstructError::EdgeNotFound {
            index: 2,
            face_id: faces[1].face_id,
            entry: faces[1].edge_id,
            target: 1_000
        }
    );
}

#[test]
fn test_informational_fields_do_not_matter() {
    let poly = torus();
    let faces = torus_walk(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
    let noisy: Vec<FacePlacement> = faces
        .iter()
        .map(|p| FacePlacement {
            x: 17.0,
            y: -3.25,
            angle_deg: 42.0,
            ..p.clone()
        })
        .collect();
    let a = reconstruct(&poly, &faces).unwrap();
    let b = reconstruct(&poly, &noisy).unwrap();
    for (p, q) in a.iter().zip(&b) {
        assert_eq!(p.angle, q.angle);
        assert_eq!(p.center.to_f64().unwrap(), q.center.to_f64().unwrap());
    }
}

#[test]
fn test_vertex_chain_is_monotone() {
    let poly = torus();
    let faces = torus_walk(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1), (0, 2)]);
    let ids: Vec<_> = faces.iter().map(|p| p.face_id).collect();
    let chain = VertexChain::new(&poly, &ids);
    assert_eq!(chain.len(), ids.len());

    for i in 0..ids.len() {
        assert!(chain.shares(i, i));
        for j in i + 1..ids.len() {
            if chain.shares(i, j) {
                assert!(chain.shares(i, j - 1), "[{i}, {j}] shares but [{i}, {}] does not", j - 1);
                assert!(chain.shares(i + 1, j), "[{i}, {j}] shares but [{}, {j}] does not", i + 1);
            }
        }
    }
    // neighbours always share their edge's endpoints
    for i in 0..ids.len() - 1 {
        assert!(chain.shares(i, i + 1));
    }
    // (1,0), (2,0), (2,1), (1,1) meet at grid point (2,1)
    assert!(chain.shares(1, 4));
    assert!(!chain.shares(0, 4));
}
