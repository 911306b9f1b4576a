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

//! List command - preview the caller-visible question listing

use super::{load_bank, write_output};
use crate::cli::SourceArgs;
use crate::error::{CliError, CliResult};
use colored::Colorize;
use quizpool_core::ListedQuestion;

/// Print the listing of the pool named by `source`.
///
/// `format` is `text` (one line per entry, generic options indented with
/// the correct ones marked) or `json` (the listing as a JSON array).
///
/// # Errors
///
/// Returns `Err` if the pool cannot be loaded or `format` is unknown.
pub fn list(source: &SourceArgs, format: &str) -> CliResult<()> {
    let render: fn(&[ListedQuestion]) -> CliResult<String> = match format {
        "text" => render_text,
        "json" => render_json,
        other => {
            return Err(CliError::invalid_input(format!(
                "unknown format '{}' (expected text or json)",
                other
            )))
        }
    };

    let bank = load_bank(source)?;
    let listing = bank.list_questions();
    write_output(&render(&listing)?, None)
}

fn render_json(listing: &[ListedQuestion]) -> CliResult<String> {
    serde_json::to_string_pretty(listing).map_err(CliError::json_format)
}

fn render_text(listing: &[ListedQuestion]) -> CliResult<String> {
    let mut lines = Vec::with_capacity(listing.len());
    for entry in listing {
        lines.push(format!("{:>5}  {}", entry.id, entry.question));
        for option in entry.options.iter().flatten() {
            let marker = if option.is_answer {
                "✓".green().to_string()
            } else {
                "-".dimmed().to_string()
            };
            lines.push(format!("         {} {}", marker, option.value));
        }
    }
    lines.push(format!("{} questions listed", listing.len()));
    Ok(lines.join("\n"))
}
