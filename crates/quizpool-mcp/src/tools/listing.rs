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

//! Question listing tool (`getQuizQuestions`).

use crate::error::McpResult;
use crate::protocol::CallToolResult;
use crate::tools::helpers::structured_result;
use crate::tools::types::QuestionListOutput;
use quizpool_core::QuestionBank;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Execute getQuizQuestions tool.
///
/// Takes no arguments; anything passed is ignored.
pub fn execute_get_quiz_questions(
    _args: Option<JsonValue>,
    bank: &QuestionBank,
) -> McpResult<CallToolResult> {
    let output = QuestionListOutput {
        questions: bank.list_questions(),
    };
    debug!("Listing {} of {} pool entries", output.questions.len(), bank.len());
    structured_result(&output, &output.questions)
}
