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

//! Generic-question classification and text deduplication.
//!
//! Two specific entries are the same question iff their trimmed text is
//! identical; options and remarks are not compared. Same-worded but
//! semantically different questions therefore collapse to the first one.

use crate::model::{QuestionKind, QuestionRecord};
use std::collections::HashMap;

/// Boilerplate question texts reused across chapters.
///
/// Every occurrence of these stays visible in listings.
pub const GENERIC_QUESTIONS: &[&str] = &[
    "Which of these statements is correct?",
    "Which of the following statements is correct?",
    "Is the statement below TRUE or FALSE?",
    "Which TWO of these statements are correct?",
];

/// Classification and dedup index of a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canonicalization {
    /// One entry per pool record, in id order.
    pub kinds: Vec<QuestionKind>,
    /// Trimmed specific text -> smallest id with that text.
    pub dedup_index: HashMap<String, usize>,
}

impl Canonicalization {
    /// Whether pool entry `id` should be shown in listings.
    pub fn is_visible(&self, record: &QuestionRecord) -> bool {
        match self.kinds.get(record.id) {
            Some(QuestionKind::Generic) => true,
            Some(QuestionKind::Specific) => {
                self.dedup_index.get(record.text.trim()) == Some(&record.id)
            }
            None => false,
        }
    }
}

pub fn is_generic(text: &str) -> bool {
    GENERIC_QUESTIONS.contains(&text.trim())
}

pub fn classify(pool: &[QuestionRecord]) -> Vec<QuestionKind> {
    pool.iter()
        .map(|record| {
            if is_generic(&record.text) {
                QuestionKind::Generic
            } else {
                QuestionKind::Specific
            }
        })
        .collect()
}

/// Map each specific text to its first occurrence.
pub fn dedup_index(pool: &[QuestionRecord], kinds: &[QuestionKind]) -> HashMap<String, usize> {
    let mut index = HashMap::new();
    for (record, kind) in pool.iter().zip(kinds) {
        if kind.is_generic() {
            continue;
        }
        // Pool order is id order, so the first insert is the smallest id.
        index
            .entry(record.text.trim().to_string())
            .or_insert(record.id);
    }
    index
}

pub fn canonicalize(pool: &[QuestionRecord]) -> Canonicalization {
    let kinds = classify(pool);
    let dedup_index = dedup_index(pool, &kinds);
    Canonicalization { kinds, dedup_index }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_pool, AnswerOption, RawQuestion};

    fn raw(text: &str, answer: &str) -> RawQuestion {
        RawQuestion {
            question: text.to_string(),
            remark: String::new(),
            options: vec![AnswerOption::new(answer, true)],
        }
    }

    #[test]
    fn test_is_generic_ignores_surrounding_whitespace() {
        assert!(is_generic("Which of these statements is correct?"));
        assert!(is_generic("  Which of these statements is correct?\n"));
        assert!(!is_generic("which of these statements is correct?"));
        assert!(!is_generic("What is the capital?"));
    }

    #[test]
    fn test_classify() {
        let pool = build_pool(vec![
            raw("Which of these statements is correct?", "X"),
            raw("What is the capital?", "London"),
        ]);
        assert_eq!(
            classify(&pool),
            vec![QuestionKind::Generic, QuestionKind::Specific]
        );
    }

    #[test]
    fn test_dedup_keeps_smallest_id() {
        let pool = build_pool(vec![
            raw("When was the Magna Carta sealed?", "1215"),
            raw("Who is the patron saint of Wales?", "St David"),
            raw("  When was the Magna Carta sealed?", "1216"),
        ]);
        let canon = canonicalize(&pool);

        assert_eq!(
            canon.dedup_index.get("When was the Magna Carta sealed?"),
            Some(&0)
        );
        assert!(canon.is_visible(&pool[0]));
        assert!(canon.is_visible(&pool[1]));
        assert!(!canon.is_visible(&pool[2]));
    }

    #[test]
    fn test_generic_texts_are_not_indexed() {
        let pool = build_pool(vec![
            raw("Which of these statements is correct?", "X"),
            raw("Which of these statements is correct?", "A"),
        ]);
        let canon = canonicalize(&pool);

        assert!(canon.dedup_index.is_empty());
        assert!(canon.is_visible(&pool[0]));
        assert!(canon.is_visible(&pool[1]));
    }

    #[test]
    fn test_canonicalize_is_deterministic() {
        let pool = build_pool(vec![
            raw("A?", "1"),
            raw("B?", "2"),
            raw("A?", "3"),
            raw("Is the statement below TRUE or FALSE?", "True"),
        ]);
        assert_eq!(canonicalize(&pool), canonicalize(&pool));
    }
}
