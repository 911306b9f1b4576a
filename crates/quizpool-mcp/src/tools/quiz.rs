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

//! Quiz generation tool (`generateQuiz`).

use crate::error::McpResult;
use crate::protocol::CallToolResult;
use crate::tools::helpers::{parse_args, structured_result};
use crate::tools::types::{GenerateQuizArgs, QuizOutput};
use quizpool_core::QuestionBank;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Execute generateQuiz tool.
///
/// Question order and option order are freshly randomized on every call.
pub fn execute_generate_quiz(
    args: Option<JsonValue>,
    bank: &QuestionBank,
) -> McpResult<CallToolResult> {
    let args: GenerateQuizArgs = parse_args(args)?;

    let quiz = bank.assemble_random(&args.question_ids)?;
    debug!(
        "Assembled quiz with {} questions ({} ids unresolved)",
        quiz.questions.len(),
        quiz.unresolved.len()
    );

    let output = QuizOutput {
        questions: quiz.questions,
    };
    structured_result(&output, &output.questions)
}
