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

use crate::error::ReconstructError;
use crate::geometry::{Point2, inradius};
use crate::numeric::{LazyExact, PiAngle};
use crate::polyhedron::{EdgeId, Face, PolyhedronStructure};
use crate::unfolding::placement::{ExactPlacement, FacePlacement};

/// Informational positions further off than this are worth a debug line.
const DRIFT_TOLERANCE: f64 = 1e-3;

/// Steps (1-based, wrapping) from `entry` to `exit` around `face`'s
/// adjacency list, in increasing local index. `None` if either edge is not
/// on the face.
pub fn step_count(face: &Face, entry: EdgeId, exit: EdgeId) -> Option<usize> {
    let pos = face.local_index_of(entry)?;
    (1..=face.gon).find(|step| face.edges[(pos + step) % face.gon] == exit)
}

/// Rebuild every placement of an unfolding exactly.
///
/// Placement 0 sits at the origin with angle 0 and placement 1 at
/// `(ir(g0) + ir(g1), 0)` with angle `-pi`. Each later placement turns from
/// its predecessor by `cnt * 2pi / gon` where `cnt` is the step count from
/// the predecessor's entry edge to the edge it shares with this one.
pub fn reconstruct(
    poly: &PolyhedronStructure,
    faces: &[FacePlacement],
) -> Result<Vec<ExactPlacement>, ReconstructError> {
    if faces.len() < 2 {
        return Err(ReconstructError::TooFewFaces { count: faces.len() });
    }
    for (index, p) in faces.iter().enumerate() {
        let face = poly.face(p.face_id).ok_or(ReconstructError::UnknownFace {
            index,
            face_id: p.face_id,
        })?;
        if face.gon != p.gon {
            return Err(ReconstructError::GonMismatch {
                index,
                face_id: p.face_id,
                placed: p.gon,
                actual: face.gon,
            });
        }
    }

    let mut radii: BTreeMap<usize, LazyExact> = BTreeMap::new();
    let mut ir = |gon: usize| radii.entry(gon).or_insert_with(|| inradius(gon)).clone();

    let mut out = Vec::with_capacity(faces.len());
    out.push(ExactPlacement {
        gon: faces[0].gon,
        face_id: faces[0].face_id,
        center: Point2::new(0, 0),
        angle: PiAngle::zero(),
    });
    out.push(ExactPlacement {
        gon: faces[1].gon,
        face_id: faces[1].face_id,
        center: Point2::new(&ir(faces[0].gon) + &ir(faces[1].gon), 0),
        angle: -PiAngle::half_turn(),
    });

    for index in 2..faces.len() {
        let (prev_in, cur_in) = (&faces[index - 1], &faces[index]);
        let prev = &out[index - 1];
        let prev_face = poly
            .face(prev_in.face_id)
            .ok_or(ReconstructError::UnknownFace {
                index: index - 1,
                face_id: prev_in.face_id,
            })?;
        let cnt = step_count(prev_face, prev_in.edge_id, cur_in.edge_id).ok_or(
            ReconstructError::EdgeNotFound {
                index,
                face_id: prev_in.face_id,
                entry: prev_in.edge_id,
                target: cur_in.edge_id,
            },
        )?;

        let theta = &prev.angle - &PiAngle::from_ratio(2 * cnt as i64, prev.gon as i64);
        let delta = &ir(prev.gon) + &ir(cur_in.gon);
        let center = Point2 {
            x: &prev.center.x + &(&delta * &theta.cos()),
            y: &prev.center.y + &(&delta * &theta.sin()),
        };
        let angle = &theta - &PiAngle::half_turn();
        out.push(ExactPlacement {
            gon: cur_in.gon,
            face_id: cur_in.face_id,
            center,
            angle,
        });
    }

    if log::log_enabled!(log::Level::Debug) {
        report_drift(faces, &out);
    }
    Ok(out)
}

fn report_drift(faces: &[FacePlacement], exact: &[ExactPlacement]) {
    for (index, (given, rebuilt)) in faces.iter().zip(exact).enumerate() {
        let Ok((x, y)) = rebuilt.center.to_f64() else {
            continue;
        };
        let turn = (rebuilt.angle_deg() - given.angle_deg).rem_euclid(360.0);
        let angle_off = turn.min(360.0 - turn);
        if (x - given.x).abs() > DRIFT_TOLERANCE
            || (y - given.y).abs() > DRIFT_TOLERANCE
            || angle_off > DRIFT_TOLERANCE
        {
            log::debug!(
                "placement {index} (face {}): recorded ({}, {}, {}deg), exact ({x:.6}, {y:.6}, {:.6}deg)",
                given.face_id,
                given.x,
                given.y,
                given.angle_deg,
                rebuilt.angle_deg()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn square(edges: [EdgeId; 4]) -> Face {
        Face {
            gon: 4,
            edges: edges.to_vec(),
            neighbors: vec![0; 4],
        }
    }

    #[test]
    fn step_count_wraps() {
        let f = square([10, 11, 12, 13]);
        assert_eq!(step_count(&f, 10, 11), Some(1));
        assert_eq!(step_count(&f, 12, 10), Some(2));
        assert_eq!(step_count(&f, 13, 12), Some(3));
        assert_eq!(step_count(&f, 11, 11), Some(4));
    }

    #[test]
    fn step_count_missing_edges() {
        let f = square([10, 11, 12, 13]);
        assert_eq!(step_count(&f, 10, 99), None);
        assert_eq!(step_count(&f, 99, 10), None);
    }
}
