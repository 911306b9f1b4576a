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

//! Helper functions shared across MCP tools.

use crate::error::{McpError, McpResult};
use crate::protocol::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Parse JSON arguments into a typed structure.
pub fn parse_args<T: for<'de> Deserialize<'de>>(args: Option<JsonValue>) -> McpResult<T> {
    let args = args.unwrap_or(JsonValue::Object(serde_json::Map::new()));
    serde_json::from_value(args).map_err(|e| McpError::InvalidArguments(e.to_string()))
}

/// Build a tool result carrying `output` both as structured content and as
/// its JSON text rendering.
pub fn structured_result<T: Serialize>(output: &T, text: &impl Serialize) -> McpResult<CallToolResult> {
    Ok(CallToolResult {
        content: vec![Content::Text {
            text: serde_json::to_string(text)?,
        }],
        structured_content: Some(serde_json::to_value(output)?),
        is_error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_args_valid() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct TestArgs {
            ids: Vec<i64>,
        }

        let parsed: TestArgs = parse_args(Some(json!({ "ids": [1, 2] }))).unwrap();
        assert_eq!(parsed.ids, vec![1, 2]);
    }

    #[test]
    fn test_parse_args_missing_required() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct TestArgs {
            ids: Vec<i64>,
        }

        let result: McpResult<TestArgs> = parse_args(None);
        assert!(matches!(result, Err(McpError::InvalidArguments(_))));
    }

    #[test]
    fn test_structured_result() {
        let output = json!({ "questions": [] });
        let result = structured_result(&output, &output["questions"]).unwrap();

        assert_eq!(result.structured_content, Some(output));
        assert!(result.is_error.is_none());
        match &result.content[0] {
            Content::Text { text } => assert_eq!(text, "[]"),
        }
    }
}
