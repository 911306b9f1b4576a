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

//! Quizpool Command Line Interface

use clap::Parser;
use quizpool_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Quizpool - question pool curation and quiz assembly
///
/// Merges per-chapter mock test files into a single pool file and previews
/// what the quiz server would list and hand out.
///
/// # Examples
///
/// ```bash
/// # Merge ./mock-tests/Mock Test N.json into ./mock-tests/mock-test.json
/// quizpool merge mock-tests
///
/// # Show the deduplicated listing
/// quizpool list mock-tests/mock-test.json
///
/// # Assemble a reproducible quiz
/// quizpool quiz mock-tests --ids 1,5,9 --seed 42
/// ```
#[derive(Parser)]
#[command(name = "quizpool")]
#[command(author, version, about = "Quizpool - question pool curation and quiz assembly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Diagnostics only, enabled via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
