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

use serde::{Deserialize, Serialize};

use crate::geometry::{Point2, Polygon};
use crate::numeric::{LazyExact, PiAngle};
use crate::polyhedron::{EdgeId, FaceId};

fn no_edge() -> EdgeId {
    -1
}

/// One step of an unfolding as it appears in a candidate record.
///
/// `x`, `y` and `angle_deg` are the approximate position produced upstream.
/// They are carried for diagnostics only; every decision uses the exact
/// reconstruction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacePlacement {
    pub gon: usize,
    pub face_id: FaceId,
    /// Edge shared with the previous placement; meaningless for the first.
    #[serde(default = "no_edge")]
    pub edge_id: EdgeId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub angle_deg: f64,
}

impl FacePlacement {
    pub fn new(gon: usize, face_id: FaceId, edge_id: EdgeId) -> Self {
        Self {
            gon,
            face_id,
            edge_id,
            x: 0.0,
            y: 0.0,
            angle_deg: 0.0,
        }
    }
}

/// A placement with its center and orientation as delayed expressions.
#[derive(Clone, Debug)]
pub struct ExactPlacement {
    pub gon: usize,
    pub face_id: FaceId,
    pub center: Point2<LazyExact>,
    pub angle: PiAngle,
}

impl ExactPlacement {
    pub fn polygon(&self) -> Polygon {
        Polygon::regular(self.gon, &self.center, &self.angle)
    }

    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn optional_fields_default() {
        let p: FacePlacement = serde_json::from_str(r#"{"gon":4,"face_id":7}"#).unwrap();
        assert_eq!(p, FacePlacement::new(4, 7, -1));
    }

    #[test]
    fn informational_fields_are_read() {
        let p: FacePlacement = serde_json::from_str(
            r#"{"gon":3,"edge_id":12,"face_id":2,"x":1.5,"y":-0.25,"angle_deg":-90.0}"#,
        )
        .unwrap();
        assert_eq!(p.edge_id, 12);
        assert_eq!((p.x, p.y, p.angle_deg), (1.5, -0.25, -90.0));
    }
}
