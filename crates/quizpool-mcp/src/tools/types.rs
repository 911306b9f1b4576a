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

//! Shared types for MCP tools.

use quizpool_core::{ListedQuestion, QuizQuestion};
use serde::{Deserialize, Serialize};

// ============ Argument Structures ============

#[derive(Debug, Deserialize)]
pub struct GenerateQuizArgs {
    /// Pool ids to draw from. Bounded by `MAX_QUIZ_IDS` in the assembler.
    #[serde(rename = "questionIds")]
    pub question_ids: Vec<i64>,
}

// ============ Output Structures ============

#[derive(Debug, Serialize)]
pub struct QuestionListOutput {
    pub questions: Vec<ListedQuestion>,
}

#[derive(Debug, Serialize)]
pub struct QuizOutput {
    pub questions: Vec<QuizQuestion>,
}
