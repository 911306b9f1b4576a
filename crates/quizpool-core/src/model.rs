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

//! Question records as stored on disk and as held in the canonical pool.

use serde::{Deserialize, Serialize};

/// A single answer choice.
///
/// `is_answer` is never inspected or recomputed; it travels with `value`
/// through every transformation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    #[serde(rename = "isAnswer")]
    pub is_answer: bool,
}

impl AnswerOption {
    pub fn new(value: impl Into<String>, is_answer: bool) -> Self {
        Self {
            value: value.into(),
            is_answer,
        }
    }
}

/// A question record exactly as it appears in a source file.
///
/// This is also the element type of the merged pool file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub options: Vec<AnswerOption>,
}

/// An entry of the canonical pool.
///
/// Invariant: within a pool, `pool[i].id == i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: usize,
    /// Question text, already trimmed.
    pub text: String,
    pub remark: String,
    pub options: Vec<AnswerOption>,
}

impl QuestionRecord {
    /// Build the pool entry at position `id` from a raw record.
    pub fn from_raw(id: usize, raw: RawQuestion) -> Self {
        Self {
            id,
            text: raw.question.trim().to_string(),
            remark: raw.remark,
            options: raw.options,
        }
    }
}

/// Classification of a pool entry for deduplication purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    /// Boilerplate wording reused across chapters; never deduplicated.
    Generic,
    /// Regular content; deduplicated by trimmed text.
    Specific,
}

impl QuestionKind {
    pub fn is_generic(self) -> bool {
        matches!(self, Self::Generic)
    }
}

/// Build the canonical pool from merged raw records.
///
/// Assigns each record its position as id and trims its text.
pub fn build_pool(records: Vec<RawQuestion>) -> Vec<QuestionRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(id, raw)| QuestionRecord::from_raw(id, raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_question_wire_format() {
        let raw: RawQuestion = serde_json::from_value(json!({
            "question": "  What is the capital?  ",
            "remark": "Select ONE answer",
            "options": [
                {"value": "London", "isAnswer": true},
                {"value": "Leeds", "isAnswer": false}
            ]
        }))
        .unwrap();

        assert_eq!(raw.options.len(), 2);
        assert!(raw.options[0].is_answer);

        let back = serde_json::to_value(&raw).unwrap();
        assert_eq!(back["options"][1]["isAnswer"], json!(false));
        assert_eq!(back["question"], json!("  What is the capital?  "));
    }

    #[test]
    fn test_remark_defaults_to_empty() {
        let raw: RawQuestion =
            serde_json::from_value(json!({"question": "Q?", "options": []})).unwrap();
        assert_eq!(raw.remark, "");
    }

    #[test]
    fn test_missing_question_is_rejected() {
        let result: Result<RawQuestion, _> = serde_json::from_value(json!({"remark": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_build_pool_assigns_positions_and_trims() {
        let pool = build_pool(vec![
            RawQuestion {
                question: " First ".to_string(),
                remark: String::new(),
                options: vec![],
            },
            RawQuestion {
                question: "Second\n".to_string(),
                remark: "r".to_string(),
                options: vec![AnswerOption::new("A", true)],
            },
        ]);

        assert_eq!(pool[0].id, 0);
        assert_eq!(pool[0].text, "First");
        assert_eq!(pool[1].id, 1);
        assert_eq!(pool[1].text, "Second");
        assert_eq!(pool[1].remark, "r");
        assert_eq!(pool[1].options, vec![AnswerOption::new("A", true)]);
    }
}
