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

//! CLI command implementations

mod list;
mod merge;
mod quiz;

pub use list::list;
pub use merge::{default_output_path, merge, DEFAULT_OUTPUT_FILE};
pub use quiz::quiz;

use crate::cli::SourceArgs;
use crate::error::{CliError, CliResult};
use quizpool_core::aggregate::max_file_size_from_env;
use quizpool_core::{AggregateOptions, MergeOrder, QuestionBank};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Build aggregation options from command-line flags.
///
/// The per-file size limit comes from `QUIZPOOL_MAX_FILE_SIZE` (bytes), or
/// the default of 100 MB.
pub fn aggregate_options(pattern: &str, descending: bool) -> AggregateOptions {
    AggregateOptions {
        pattern: pattern.to_string(),
        order: if descending {
            MergeOrder::Descending
        } else {
            MergeOrder::Ascending
        },
        max_file_size: max_file_size_from_env(),
    }
}

/// Load and freeze the pool named by `args`.
///
/// Skipped sources are reported on stderr; loading only fails when no
/// usable source remains.
pub fn load_bank(args: &SourceArgs) -> CliResult<QuestionBank> {
    let options = aggregate_options(&args.pattern, args.descending);
    let bank = QuestionBank::load(Path::new(&args.source), &options)?;
    for skipped in bank.skipped() {
        eprintln!("warning: {}", skipped);
    }
    debug!("Loaded {} questions from {}", bank.len(), args.source);
    Ok(bank)
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written or stdout is closed.
pub fn write_output(content: &str, path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => {
            let mut stdout = io::stdout();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.write_all(b"\n"))
                .map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
