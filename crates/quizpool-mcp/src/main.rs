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

//! Quiz MCP Server binary.
//!
//! # Usage
//!
//! ```bash
//! # Serve the chapter files in ./mock-tests
//! quizpool-mcp
//!
//! # Serve an already merged pool file
//! quizpool-mcp mock-tests/mock-test.json
//!
//! # Run with debug logging
//! RUST_LOG=debug quizpool-mcp
//! ```
//!
//! # Available Tools
//!
//! - `getQuizQuestions`: List the question pool
//! - `generateQuiz`: Create a randomized quiz from question ids

use clap::Parser;
use quizpool_core::aggregate::{max_file_size_from_env, DEFAULT_SOURCE_PATTERN};
use quizpool_core::{AggregateOptions, MergeOrder, QuestionBank};
use quizpool_mcp::{McpServer, McpServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quizpool-mcp")]
#[command(author = "Dweve B.V.")]
#[command(version)]
#[command(about = "Quiz question pool Model Context Protocol (MCP) Server")]
struct Cli {
    /// Directory of chapter files, or a merged pool file
    #[arg(value_name = "SOURCE", default_value = "mock-tests")]
    source: PathBuf,

    /// File name regex for chapter files; first capture group is the chapter index
    #[arg(long, default_value = DEFAULT_SOURCE_PATTERN)]
    pattern: String,

    /// Merge chapters in descending chapter order
    #[arg(long)]
    descending: bool,

    /// Base URI of the pool resource collection
    #[arg(long, default_value = "quizs://")]
    base_uri: String,

    /// Use the synchronous stdio loop instead of the async runtime
    #[arg(long)]
    sync: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quizpool_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = AggregateOptions {
        pattern: cli.pattern,
        order: if cli.descending {
            MergeOrder::Descending
        } else {
            MergeOrder::Ascending
        },
        max_file_size: max_file_size_from_env(),
    };

    // Build and freeze the pool before serving anything
    let bank = QuestionBank::load(&cli.source, &options)?;
    for skipped in bank.skipped() {
        warn!("{}", skipped);
    }
    info!(
        "Loaded {} questions ({} listed) from {}",
        bank.len(),
        bank.list_questions().len(),
        cli.source.display()
    );

    let config = McpServerConfig {
        resource_base_uri: cli.base_uri,
        ..Default::default()
    };
    let mut server = McpServer::new(config, Arc::new(bank));

    if cli.sync {
        server.run_stdio()?;
    } else {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(async { server.run_stdio_async().await })?;
    }

    Ok(())
}
