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

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Working precisions and the epsilon used at each comparison site.
///
/// `fast_bits`/`fast_eps` gate the numeric phase of the classifier: bounding
/// boxes, orientation signs and the on-segment test. `exact_bits`/`exact_eps`
/// gate the fallback: a delayed expression whose magnitude stays below
/// `exact_eps` at `exact_bits` is treated as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    pub fast_bits: u32,
    pub exact_bits: u32,
    pub fast_eps: f64,
    pub exact_eps: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            // ~80 decimal digits
            fast_bits: 266,
            exact_bits: 1024,
            fast_eps: 1e-30,
            exact_eps: 1e-50,
        }
    }
}

/// What a range predicate answers when its operands cannot be evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalFallback {
    /// Treat the parameter as inside the range, i.e. report contact.
    #[default]
    AssumeInRange,
    AssumeOutOfRange,
}

impl EvalFallback {
    pub fn answer(self) -> bool {
        matches!(self, EvalFallback::AssumeInRange)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExactConfig {
    pub tolerances: Tolerances,
    pub eval_fallback: EvalFallback,
    pub detect_containment: bool,
    /// Worker threads for record decisions; `None` or `Some(1)` runs inline.
    pub jobs: Option<usize>,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            tolerances: Tolerances::default(),
            eval_fallback: EvalFallback::default(),
            detect_containment: true,
            jobs: None,
        }
    }
}

impl ExactConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::Config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn parallelism(&self) -> usize {
        self.jobs.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn partial_documents_keep_defaults() {
        let cfg = ExactConfig::from_json_str(r#"{"tolerances":{"exact_bits":2048},"jobs":4}"#)
            .unwrap();
        assert_eq!(cfg.tolerances.exact_bits, 2048);
        assert_eq!(cfg.tolerances.fast_bits, 266);
        assert_eq!(cfg.eval_fallback, EvalFallback::AssumeInRange);
        assert!(cfg.detect_containment);
        assert_eq!(cfg.parallelism(), 4);
    }

    #[test]
    fn fallback_names_are_kebab_case() {
        let cfg =
            ExactConfig::from_json_str(r#"{"eval_fallback":"assume-out-of-range"}"#).unwrap();
        assert_eq!(cfg.eval_fallback, EvalFallback::AssumeOutOfRange);
        assert!(!cfg.eval_fallback.answer());
    }

    #[test]
    fn unknown_fallback_is_a_config_error() {
        let err = ExactConfig::from_json_str(r#"{"eval_fallback":"guess"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
