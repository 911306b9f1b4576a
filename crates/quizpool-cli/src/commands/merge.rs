// Dweve Quizpool - Question pool curation and quiz assembly
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Merge command - build the persisted pool file from chapter sources

use super::{aggregate_options, write_output};
use crate::error::{CliError, CliResult};
use colored::Colorize;
use quizpool_core::aggregate::{discover, merge_discovered};
use std::path::{Path, PathBuf};

/// File name of the merged pool, written next to the chapter files.
///
/// It does not match the default chapter pattern, so re-running the merge
/// never ingests its own output.
pub const DEFAULT_OUTPUT_FILE: &str = "mock-test.json";

/// Output path used when `--output` is not given.
pub fn default_output_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_OUTPUT_FILE)
}

/// Merge the chapter files in `dir` into one pool file.
///
/// # Output
///
/// Prints one line per contributing file, a warning per skipped file, and
/// the total number of merged questions.
///
/// # Errors
///
/// Returns `Err` if:
/// - The pattern is not a valid regex
/// - No chapter file in `dir` could be used
/// - The output file cannot be written
pub fn merge(
    dir: &str,
    output: Option<&str>,
    pattern: &str,
    descending: bool,
    compact: bool,
) -> CliResult<()> {
    let dir = Path::new(dir);
    let options = aggregate_options(pattern, descending);
    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(dir));

    // A previous merge output is never a source
    let mut discovery = discover(dir, &options)?;
    discovery
        .sources
        .retain(|source| !same_file(&source.path, &out_path));
    let aggregation = merge_discovered(dir, discovery, options.max_file_size)?;

    for source in &aggregation.sources {
        let name = source
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("Added {} questions from {}", source.questions, name);
    }
    for skipped in &aggregation.skipped {
        eprintln!("{} {}", "warning:".yellow().bold(), skipped);
    }

    let content = if compact {
        serde_json::to_string(&aggregation.records)
    } else {
        serde_json::to_string_pretty(&aggregation.records)
    }
    .map_err(CliError::json_format)?;

    write_output(&content, Some(&out_path))?;

    println!(
        "{} Total questions merged: {}",
        "✓".green().bold(),
        aggregation.records.len()
    );
    println!("  Output: {}", out_path.display());
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
