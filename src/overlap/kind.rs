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

use serde::{Deserialize, Serialize};

/// How two placed faces touch. Ordered by `priority`; vertex and edge-vertex
/// contacts tie at the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapKind {
    VertexVertex,
    EdgeVertex,
    EdgeEdge,
    FaceFace,
}

impl OverlapKind {
    pub fn priority(self) -> u8 {
        match self {
            OverlapKind::VertexVertex | OverlapKind::EdgeVertex => 1,
            OverlapKind::EdgeEdge => 2,
            OverlapKind::FaceFace => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OverlapKind::VertexVertex => "vertex-vertex",
            OverlapKind::EdgeVertex => "edge-vertex",
            OverlapKind::EdgeEdge => "edge-edge",
            OverlapKind::FaceFace => "face-face",
        }
    }

    /// The stronger of two kinds; on a tie the one already held wins.
    pub fn strongest(held: Option<Self>, found: Self) -> Self {
        match held {
            Some(h) if h.priority() >= found.priority() => h,
            _ => found,
        }
    }
}

impl fmt::Display for OverlapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
