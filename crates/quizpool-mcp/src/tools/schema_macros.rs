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

//! Declarative macros for JSON schema generation.
//!
//! Tool input and output schemas are built from these rather than from
//! hand-written `json!` blobs:
//!
//! ```text
//! let schema = tool_schema! {
//!     required: ["questionIds"],
//!     properties: {
//!         questionIds: schema_integer_array!("Pool ids", max_items: 24)
//!     }
//! };
//! ```

/// Generate a JSON schema object with type "string" and description.
#[macro_export]
macro_rules! schema_string {
    ($description:expr) => {
        serde_json::json!({
            "type": "string",
            "description": $description
        })
    };
}

/// Generate a JSON schema object with type "boolean".
#[macro_export]
macro_rules! schema_bool {
    ($description:expr) => {
        serde_json::json!({
            "type": "boolean",
            "description": $description
        })
    };
}

/// Generate a JSON schema object with type "integer" and optional constraints.
///
/// # Usage
/// ```text
/// schema_integer!("Question id")
/// schema_integer!("Question id", minimum: 0)
/// ```
#[macro_export]
macro_rules! schema_integer {
    ($description:expr) => {
        serde_json::json!({
            "type": "integer",
            "description": $description
        })
    };
    ($description:expr, minimum: $min:expr) => {
        serde_json::json!({
            "type": "integer",
            "description": $description,
            "minimum": $min
        })
    };
}

/// Generate a JSON schema array of integers with an upper length bound.
#[macro_export]
macro_rules! schema_integer_array {
    ($description:expr, max_items: $max:expr) => {
        serde_json::json!({
            "type": "array",
            "items": { "type": "integer" },
            "maxItems": $max,
            "description": $description
        })
    };
}

/// Generate a JSON schema array whose items follow `$items`.
#[macro_export]
macro_rules! schema_array {
    ($items:expr) => {
        serde_json::json!({
            "type": "array",
            "items": $items
        })
    };
}

/// Generate an object schema with properties and required fields.
///
/// With no arguments, produces an object schema that takes no properties.
///
/// # Usage
/// ```text
/// tool_schema! {}
/// tool_schema! {
///     required: ["questionIds"],
///     properties: {
///         questionIds: schema_integer_array!("Ids", max_items: 24)
///     }
/// }
/// ```
#[macro_export]
macro_rules! tool_schema {
    () => {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    };
    (
        required: [$($req:expr),* $(,)?],
        properties: {
            $($field:ident: $schema:expr),+ $(,)?
        }
    ) => {
        serde_json::json!({
            "type": "object",
            "properties": {
                $(stringify!($field): $schema),+
            },
            "required": [$($req),*]
        })
    };
}

/// Schema of an answer option list (`[{value, isAnswer}]`).
#[macro_export]
macro_rules! answer_options_schema {
    () => {
        $crate::schema_array!($crate::tool_schema! {
            required: ["value", "isAnswer"],
            properties: {
                value: $crate::schema_string!("Displayed choice text"),
                isAnswer: $crate::schema_bool!("Whether this choice is correct")
            }
        })
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_schema_string() {
        let schema = schema_string!("Question text");
        assert_eq!(schema["type"], "string");
        assert_eq!(schema["description"], "Question text");
    }

    #[test]
    fn test_schema_integer_with_minimum() {
        let schema = schema_integer!("Question id", minimum: 0);
        assert_eq!(schema["type"], "integer");
        assert_eq!(schema["minimum"], 0);
    }

    #[test]
    fn test_schema_integer_array() {
        let schema = schema_integer_array!("Question ids", max_items: 24);
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["type"], "integer");
        assert_eq!(schema["maxItems"], 24);
    }

    #[test]
    fn test_empty_tool_schema() {
        let schema = tool_schema! {};
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"].as_object().unwrap().is_empty());
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_tool_schema() {
        let schema = tool_schema! {
            required: ["id"],
            properties: {
                id: schema_integer!("Question id"),
                question: schema_string!("Question text")
            }
        };
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"].as_array().unwrap().len(), 1);
        assert!(schema["properties"].get("id").is_some());
        assert!(schema["properties"].get("question").is_some());
    }

    #[test]
    fn test_answer_options_schema() {
        let schema = answer_options_schema!();
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["properties"]["isAnswer"]["type"], "boolean");
        assert_eq!(schema["items"]["required"][1], "isAnswer");
    }
}
