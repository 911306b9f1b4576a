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

//! Quiz tools for MCP server.
//!
//! Available tools:
//! - `getQuizQuestions`: List the pool with duplicates suppressed
//! - `generateQuiz`: Assemble a randomized quiz from selected question ids

mod helpers;
mod listing;
mod quiz;
#[macro_use]
mod schema_macros;
mod types;

// Re-export public APIs
pub use listing::execute_get_quiz_questions;
pub use quiz::execute_generate_quiz;

use crate::error::{McpError, McpResult};
use crate::protocol::{CallToolResult, Tool};
use quizpool_core::{QuestionBank, MAX_QUIZ_IDS};
use serde_json::Value as JsonValue;

#[cfg(test)]
use serde_json::json;

/// Tool name for the question listing.
pub const LIST_TOOL: &str = "getQuizQuestions";

/// Tool name for quiz assembly.
pub const QUIZ_TOOL: &str = "generateQuiz";

/// Get all available quiz tools.
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: LIST_TOOL.to_string(),
            title: Some("Quiz Questions".to_string()),
            description: "Retrieves all available questions from the Life in the UK mock test question pool, each with a unique ID.".to_string(),
            input_schema: tool_schema! {},
            output_schema: Some(tool_schema! {
                required: ["questions"],
                properties: {
                    questions: schema_array!(tool_schema! {
                        required: ["id", "question"],
                        properties: {
                            id: schema_integer!("Pool id of the question", minimum: 0),
                            question: schema_string!("Question text"),
                            options: answer_options_schema!()
                        }
                    })
                }
            }),
        },
        Tool {
            name: QUIZ_TOOL.to_string(),
            title: Some("Generate Quiz".to_string()),
            description: "Creates a customized mock test from a selection of provided question IDs".to_string(),
            input_schema: tool_schema! {
                required: ["questionIds"],
                properties: {
                    questionIds: schema_integer_array!(
                        "Pool ids of the questions to include; unknown ids are ignored",
                        max_items: MAX_QUIZ_IDS
                    )
                }
            },
            output_schema: Some(tool_schema! {
                required: ["questions"],
                properties: {
                    questions: schema_array!(tool_schema! {
                        required: ["question", "remark", "options"],
                        properties: {
                            question: schema_string!("Question text"),
                            remark: schema_string!("Answering instruction"),
                            options: answer_options_schema!()
                        }
                    })
                }
            }),
        },
    ]
}

/// Execute a tool by name.
pub fn execute_tool(
    name: &str,
    arguments: Option<JsonValue>,
    bank: &QuestionBank,
) -> McpResult<CallToolResult> {
    match name {
        LIST_TOOL => execute_get_quiz_questions(arguments, bank),
        QUIZ_TOOL => execute_generate_quiz(arguments, bank),
        _ => Err(McpError::ToolNotFound(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tools_returns_all_tools() {
        let tools = get_tools();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"getQuizQuestions"));
        assert!(names.contains(&"generateQuiz"));
    }

    #[test]
    fn test_tool_schemas_valid() {
        for tool in &get_tools() {
            assert_eq!(
                tool.input_schema["type"], "object",
                "Tool {} missing object type",
                tool.name
            );
            assert!(
                tool.input_schema.get("properties").is_some(),
                "Tool {} missing properties",
                tool.name
            );
            assert!(tool.output_schema.is_some(), "Tool {} missing output schema", tool.name);
            assert!(!tool.description.is_empty());
        }
    }

    #[test]
    fn test_quiz_tool_bounds_ids() {
        let tools = get_tools();
        let quiz = tools.iter().find(|t| t.name == QUIZ_TOOL).unwrap();
        assert_eq!(
            quiz.input_schema["properties"]["questionIds"]["maxItems"],
            json!(24)
        );
    }

    #[test]
    fn test_execute_tool_unknown() {
        let bank = QuestionBank::from_raw(vec![]);
        let result = execute_tool("unknown_tool", None, &bank);

        if let Err(McpError::ToolNotFound(name)) = result {
            assert_eq!(name, "unknown_tool");
        } else {
            panic!("Expected ToolNotFound error");
        }
    }

    #[test]
    fn test_execute_tool_list() {
        let bank = QuestionBank::from_raw(vec![]);
        let result = execute_tool(LIST_TOOL, None, &bank).unwrap();
        assert_eq!(result.structured_content, Some(json!({ "questions": [] })));
    }
}
