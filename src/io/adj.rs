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

use std::io::{self, BufRead};

use crate::polyhedron::{EdgeId, FaceSpec, NeighborSpec};

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn numbers<T: std::str::FromStr>(rest: &str, what: &str, lineno: usize) -> io::Result<Vec<T>> {
    rest.split_whitespace()
        .map(|tok| {
            tok.parse()
                .map_err(|_| invalid(format!("ADJ: line {lineno}: bad {what} '{tok}'")))
        })
        .collect()
}

#[derive(Default)]
struct PendingFace {
    gon: usize,
    edges: Vec<EdgeId>,
    faces: Vec<i64>,
}

/// Read the legacy adjacency format.
/// Format:
///   NF<num faces>
///   N<gon>            starts the next face
///   V<vertex ids>     ignored; incidence is always derived
///   E<edge ids>       in local edge order
///   F<neighbor ids>   in local edge order
/// Blank lines and `#` comments are skipped.
pub fn read_adj<R: BufRead>(reader: R) -> io::Result<Vec<FaceSpec>> {
    let mut declared: Option<usize> = None;
    let mut pending: Vec<PendingFace> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("NF") {
            let n = rest
                .trim()
                .parse()
                .map_err(|_| invalid(format!("ADJ: line {lineno}: bad face count")))?;
            declared = Some(n);
            continue;
        }
        if let Some(rest) = line.strip_prefix('N') {
            let gon = rest
                .trim()
                .parse()
                .map_err(|_| invalid(format!("ADJ: line {lineno}: bad gon")))?;
            pending.push(PendingFace {
                gon,
                ..Default::default()
            });
            continue;
        }
        if line.starts_with('V') {
            continue;
        }

        let current = pending
            .last_mut()
            .ok_or_else(|| invalid(format!("ADJ: line {lineno}: data before the first N line")))?;
        if let Some(rest) = line.strip_prefix('E') {
            current.edges = numbers(rest, "edge id", lineno)?;
        } else if let Some(rest) = line.strip_prefix('F') {
            current.faces = numbers(rest, "face id", lineno)?;
        } else {
            log::debug!("ADJ: line {lineno}: skipping unrecognised record");
        }
    }

    if let Some(n) = declared {
        if n != pending.len() {
            return Err(invalid(format!(
                "ADJ: NF declares {n} faces but {} are listed",
                pending.len()
            )));
        }
    }

    pending
        .into_iter()
        .enumerate()
        .map(|(f, face)| {
            if face.edges.len() != face.faces.len() {
                return Err(invalid(format!(
                    "ADJ: face {f} lists {} edges but {} neighbors",
                    face.edges.len(),
                    face.faces.len()
                )));
            }
            let neighbors = face
                .edges
                .into_iter()
                .zip(face.faces)
                .map(|(edge_id, face_id)| NeighborSpec { edge_id, face_id })
                .collect();
            Ok(FaceSpec {
                gon: face.gon,
                neighbors,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    const TETRA: &str = "\
NF4
# face 0
N3
V0 1 2
E0 1 2
F1 2 3
N3
E0 3 4
F0 2 3
N3
E1 5 3
F0 3 1
N3
E2 4 5
F0 1 2
";

    #[test]
    fn reads_faces_in_order() {
        let specs = read_adj(TETRA.as_bytes()).unwrap();
        assert_eq!(specs.len(), 4);
        assert_eq!(specs[2].gon, 3);
        assert_eq!(
            specs[2].neighbors,
            vec![
                NeighborSpec { edge_id: 1, face_id: 0 },
                NeighborSpec { edge_id: 5, face_id: 3 },
                NeighborSpec { edge_id: 3, face_id: 1 },
            ]
        );
    }

    #[test]
    fn face_count_must_match() {
        let text = TETRA.replacen("NF4", "NF5", 1);
        let err = read_adj(text.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn edge_line_needs_a_face() {
        assert!(read_adj("NF1\nE0 1 2\n".as_bytes()).is_err());
    }

    #[test]
    fn bad_numbers_are_reported() {
        let err = read_adj("N3\nE0 x 2\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
