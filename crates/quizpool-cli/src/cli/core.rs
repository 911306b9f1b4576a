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

//! Core pool commands: merging sources, listing, and quiz previews.

use crate::commands;
use crate::error::CliResult;
use clap::{Args, Subcommand};
use quizpool_core::aggregate::DEFAULT_SOURCE_PATTERN;

/// Where to load the pool from, and how to order chapters.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Merged pool file, or directory of chapter files
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// File name regex for chapter files; first capture group is the chapter index
    #[arg(long, default_value = DEFAULT_SOURCE_PATTERN)]
    pub pattern: String,

    /// Merge chapters in descending chapter order
    #[arg(long)]
    pub descending: bool,
}

/// Core Quizpool commands.
///
/// # Commands
///
/// - **Merge**: Aggregate chapter files into the persisted pool file
/// - **List**: Show the caller-visible listing with duplicates suppressed
/// - **Quiz**: Assemble a randomized quiz from pool ids
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Merge chapter files into a single pool file
    ///
    /// Reads every file in DIR whose name matches the pattern, orders them by
    /// chapter index, and writes the concatenated records as one JSON array.
    /// Malformed files are skipped with a warning.
    Merge {
        /// Directory of chapter files
        #[arg(value_name = "DIR")]
        dir: String,

        /// Output file path (defaults to DIR/mock-test.json)
        #[arg(short, long)]
        output: Option<String>,

        /// File name regex for chapter files
        #[arg(long, default_value = DEFAULT_SOURCE_PATTERN)]
        pattern: String,

        /// Merge chapters in descending chapter order
        #[arg(long)]
        descending: bool,

        /// Write compact JSON instead of pretty-printed
        #[arg(short, long)]
        compact: bool,
    },

    /// Print the question listing
    ///
    /// Specific questions are shown once, by their first occurrence; generic
    /// questions are all shown, with their options.
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Assemble a randomized quiz
    ///
    /// Prints the resolved questions as JSON, in random order with shuffled
    /// options. Unknown ids are ignored.
    Quiz {
        #[command(flatten)]
        source: SourceArgs,

        /// Comma-separated pool ids (at most 24)
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        ids: Vec<i64>,

        /// Seed for a reproducible shuffle
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> CliResult<()> {
        match self {
            CoreCommands::Merge {
                dir,
                output,
                pattern,
                descending,
                compact,
            } => commands::merge(&dir, output.as_deref(), &pattern, descending, compact),
            CoreCommands::List { source, format } => commands::list(&source, &format),
            CoreCommands::Quiz { source, ids, seed } => commands::quiz(&source, &ids, seed),
        }
    }
}
