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

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rotunfold::ExactConfig;
use rotunfold::io::{filter_file, load_polyhedron};

#[derive(Parser)]
#[command(name = "rotunfold")]
#[command(about = "Exact overlap filtering for rotational unfoldings of convex polyhedra", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Keep only unfoldings whose end faces overlap and nothing else does
    Exact {
        /// Polyhedron structure (polyhedron.json, or a legacy .adj file)
        #[arg(long)]
        polyhedron: PathBuf,

        /// Candidate unfoldings, one JSON record per line
        #[arg(short, long)]
        input: PathBuf,

        /// Surviving records; must differ from the input
        #[arg(short, long)]
        output: PathBuf,

        /// JSON configuration file; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Worker threads for record decisions
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Precision in bits of the numeric screening phase
        #[arg(long)]
        fast_bits: Option<u32>,

        /// Precision in bits of the exact fallback
        #[arg(long)]
        exact_bits: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Exact {
            polyhedron,
            input,
            output,
            config,
            jobs,
            fast_bits,
            exact_bits,
        } => {
            let mut cfg = match &config {
                Some(path) => ExactConfig::load(path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => ExactConfig::default(),
            };
            if jobs.is_some() {
                cfg.jobs = jobs;
            }
            if let Some(bits) = fast_bits {
                cfg.tolerances.fast_bits = bits;
            }
            if let Some(bits) = exact_bits {
                cfg.tolerances.exact_bits = bits;
            }
            log::debug!("configuration: {cfg:?}");

            let poly = load_polyhedron(&polyhedron)
                .with_context(|| format!("loading polyhedron {}", polyhedron.display()))?;

            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }

            let summary = filter_file(&poly, &cfg, &input, &output)
                .with_context(|| format!("filtering {}", input.display()))?;
            if summary.eval_fallbacks > 0 {
                log::warn!(
                    "{} range checks used the configured fallback",
                    summary.eval_fallbacks
                );
            }

            println!("Input records: {}", summary.input);
            println!("Output records: {}", summary.kept);
            println!("Removed: {}", summary.removed);
        }
    }
    Ok(())
}
