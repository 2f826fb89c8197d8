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

use std::{io, path::PathBuf};

use crate::polyhedron::{EdgeId, FaceId};

/// Structural defects in a polyhedron description. Any of these aborts the
/// run before a single record is looked at.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("polyhedron has no faces")]
    Empty,

    #[error("face {face} has gon {gon}; a face needs at least 3 edges")]
    DegenerateFace { face: FaceId, gon: usize },

    #[error("face {face} declares gon {gon} but lists {neighbors} neighbors")]
    GonMismatch {
        face: FaceId,
        gon: usize,
        neighbors: usize,
    },

    #[error("face {face} edge {local} points at face {neighbor}, outside 0..{num_faces}")]
    NeighborOutOfRange {
        face: FaceId,
        local: usize,
        neighbor: i64,
        num_faces: usize,
    },

    #[error("edge {edge} appears {count} times; every edge must be shared by exactly two face slots")]
    EdgeMultiplicity { edge: EdgeId, count: usize },

    #[error("edge {edge} joins faces {face} and {other}, but face {face} names {named} as its neighbor")]
    InconsistentNeighbor {
        edge: EdgeId,
        face: FaceId,
        other: FaceId,
        named: FaceId,
    },
}

/// Failure to rebuild exact placements for one record. Rejects the record,
/// never the run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReconstructError {
    #[error("unfolding has {count} faces; at least 2 are needed")]
    TooFewFaces { count: usize },

    #[error("placement {index} references face {face_id}, which the polyhedron does not have")]
    UnknownFace { index: usize, face_id: FaceId },

    #[error("placement {index} says face {face_id} has gon {placed}, the polyhedron says {actual}")]
    GonMismatch {
        index: usize,
        face_id: FaceId,
        placed: usize,
        actual: usize,
    },

    #[error("edge {target} not reachable from edge {entry} around face {face_id} (placement {index})")]
    EdgeNotFound {
        index: usize,
        face_id: FaceId,
        entry: EdgeId,
        target: EdgeId,
    },
}

/// Failure while evaluating a delayed expression numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("non-finite result")]
    NonFinite,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed polyhedron structure: {0}")]
    MalformedStructure(#[from] StructureError),

    #[error("parse error at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read polyhedron document {}: {reason}", path.display())]
    PolyhedronDocument { path: PathBuf, reason: String },

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("output path {} is the input path; the input stream is read-only", .0.display())]
    InPlaceOutput(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
