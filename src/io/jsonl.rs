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
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use rayon::prelude::*;
use serde::Deserialize;
use serde_json::{Map, Value, json};

use crate::config::ExactConfig;
use crate::error::{Error, Result};
use crate::polyhedron::PolyhedronStructure;
use crate::unfolding::{Decision, FacePlacement, RecordDecider};

/// One candidate unfolding: the original JSON object, untouched, plus its
/// parsed `faces` array.
#[derive(Clone, Debug)]
pub struct Record {
    /// 1-based line number in the input stream.
    pub line: usize,
    pub fields: Map<String, Value>,
    pub faces: Vec<FacePlacement>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub input: usize,
    pub kept: usize,
    pub removed: usize,
    /// Range predicates decided by the configured fallback.
    pub eval_fallbacks: usize,
}

/// Parse every non-blank line. The first line that is not a JSON object
/// with a well-formed (or absent) `faces` array fails the whole read.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let parse_error = |source| Error::Parse {
            line: lineno,
            source,
        };

        let fields: Map<String, Value> = serde_json::from_str(&line).map_err(parse_error)?;
        let faces = match fields.get("faces") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => Vec::<FacePlacement>::deserialize(v).map_err(parse_error)?,
        };
        records.push(Record {
            line: lineno,
            fields,
            faces,
        });
    }
    Ok(records)
}

/// Decide every record and write the survivors, in input order, to `out`.
pub fn filter_records<W: Write>(
    poly: &PolyhedronStructure,
    config: &ExactConfig,
    records: Vec<Record>,
    out: W,
) -> Result<FilterSummary> {
    let decider = RecordDecider::new(poly, config.clone());
    let jobs = config.parallelism();

    let decisions: Vec<Decision> = if jobs > 1 {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
        pool.install(|| {
            records
                .par_iter()
                .map(|r| decider.decide(&r.faces))
                .collect()
        })
    } else {
        records.iter().map(|r| decider.decide(&r.faces)).collect()
    };

    let mut out = BufWriter::new(out);
    let total = records.len();
    let mut summary = FilterSummary {
        input: total,
        ..Default::default()
    };

    for (n, (record, decision)) in records.into_iter().zip(decisions).enumerate() {
        log::info!("record {}/{total} (line {}): {decision}", n + 1, record.line);
        let (true, Some(kind)) = (decision.keep(), decision.endpoint_kind) else {
            continue;
        };
        let mut fields = record.fields;
        fields.insert("exact_overlap".to_string(), json!({ "kind": kind.as_str() }));
        serde_json::to_writer(&mut out, &fields).map_err(io::Error::from)?;
        out.write_all(b"\n")?;
        summary.kept += 1;
    }
    out.flush()?;

    summary.removed = summary.input - summary.kept;
    summary.eval_fallbacks = decider.classifier().fallback_count();
    Ok(summary)
}

/// `read_records` followed by `filter_records`.
pub fn filter_stream<R: BufRead, W: Write>(
    poly: &PolyhedronStructure,
    config: &ExactConfig,
    input: R,
    output: W,
) -> Result<FilterSummary> {
    let records = read_records(input)?;
    filter_records(poly, config, records, output)
}

/// Filter `input` into `output`. The input is fully parsed before `output`
/// is created, so a malformed stream leaves no output behind; once parsing
/// succeeds the output file always exists, even when nothing survives.
pub fn filter_file(
    poly: &PolyhedronStructure,
    config: &ExactConfig,
    input: &Path,
    output: &Path,
) -> Result<FilterSummary> {
    if same_file(input, output) {
        return Err(Error::InPlaceOutput(output.to_path_buf()));
    }
    let records = read_records(BufReader::new(File::open(input)?))?;
    log::info!("{}: {} records", input.display(), records.len());
    let out = File::create(output)?;
    filter_records(poly, config, records, out)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}
