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

use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::io::adj::read_adj;
use crate::polyhedron::{FaceSpec, PolyhedronStructure};

#[derive(Deserialize)]
struct Document {
    faces: Vec<FaceSpec>,
}

/// Face specs from a `polyhedron.json` document. Keys other than `faces`
/// (e.g. `schema_version`, `name`) are ignored.
pub fn parse_polyhedron(text: &str) -> serde_json::Result<Vec<FaceSpec>> {
    let doc: Document = serde_json::from_str(text)?;
    Ok(doc.faces)
}

/// Load and validate a polyhedron structure. Files ending in `.adj` are read
/// in the legacy adjacency format, anything else as JSON.
pub fn load_polyhedron<P: AsRef<Path>>(path: P) -> Result<PolyhedronStructure> {
    let path = path.as_ref();
    let document_error = |reason: String| Error::PolyhedronDocument {
        path: path.to_path_buf(),
        reason,
    };

    let is_adj = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("adj"));
    let specs = if is_adj {
        let reader = BufReader::new(File::open(path)?);
        read_adj(reader).map_err(|e| document_error(e.to_string()))?
    } else {
        let text = fs::read_to_string(path)?;
        parse_polyhedron(&text).map_err(|e| document_error(e.to_string()))?
    };

    let poly = PolyhedronStructure::from_specs(&specs)?;
    log::info!(
        "loaded polyhedron {}: {} faces, {} edges, {} vertices",
        path.display(),
        poly.num_faces(),
        poly.shared_edges().len(),
        poly.num_vertices()
    );
    Ok(poly)
}
