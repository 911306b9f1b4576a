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

//! Quiz question pool Model Context Protocol (MCP) Server
//!
//! This crate exposes a frozen [`quizpool_core::QuestionBank`] to AI/LLM
//! clients over MCP:
//!
//! - **List questions** with specific duplicates suppressed (`getQuizQuestions`)
//! - **Generate quizzes** in random order from selected ids (`generateQuiz`)
//! - **Browse the pool** as a resource collection (`quizs://`)

mod error;
mod protocol;
mod server;
pub mod tools;

pub use error::{McpError, McpResult};
pub use protocol::*;
pub use server::{McpServer, McpServerConfig};
pub use tools::{execute_tool, get_tools};

/// MCP Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Server name for MCP protocol
pub const SERVER_NAME: &str = "life-in-uk-quiz";

/// Server description sent as handshake instructions
pub const SERVER_DESCRIPTION: &str =
    "A comprehensive question pool for the Life in the UK citizenship test";

/// Name of the pool resource collection
pub const RESOURCE_NAME: &str = "quizQuestions";
