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

//! Caller-visible listings of the pool.
//!
//! Specific entries are projected to id and text only, so the listing never
//! leaks their answers. Generic entries keep their options.

use crate::canonical::Canonicalization;
use crate::model::{AnswerOption, QuestionRecord};
use serde::{Deserialize, Serialize};

/// One entry of the question listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedQuestion {
    pub id: usize,
    pub question: String,
    /// Present only for generic entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<AnswerOption>>,
}

/// One entry of the browsable resource collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolResource {
    pub uri: String,
    pub text: String,
}

fn visible<'a>(
    pool: &'a [QuestionRecord],
    canon: &'a Canonicalization,
) -> impl Iterator<Item = &'a QuestionRecord> + 'a {
    pool.iter().filter(move |record| canon.is_visible(record))
}

/// List visible entries in ascending id order.
pub fn list_questions(pool: &[QuestionRecord], canon: &Canonicalization) -> Vec<ListedQuestion> {
    visible(pool, canon)
        .map(|record| {
            let generic = canon
                .kinds
                .get(record.id)
                .is_some_and(|kind| kind.is_generic());
            ListedQuestion {
                id: record.id,
                question: record.text.clone(),
                options: generic.then(|| record.options.clone()),
            }
        })
        .collect()
}

/// List visible entries as resources addressed by `base_uri` + id.
pub fn browse_pool(
    pool: &[QuestionRecord],
    canon: &Canonicalization,
    base_uri: &str,
) -> Vec<PoolResource> {
    visible(pool, canon)
        .map(|record| PoolResource {
            uri: format!("{}{}", base_uri, record.id),
            text: record.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;
    use crate::model::{build_pool, RawQuestion};

    fn raw(text: &str, options: &[(&str, bool)]) -> RawQuestion {
        RawQuestion {
            question: text.to_string(),
            remark: "Select ONE answer".to_string(),
            options: options
                .iter()
                .map(|(v, a)| AnswerOption::new(*v, *a))
                .collect(),
        }
    }

    fn two_file_pool() -> Vec<QuestionRecord> {
        build_pool(vec![
            raw(
                "Which of these statements is correct?",
                &[("X", true), ("Y", false)],
            ),
            raw("What is the capital?", &[("London", true), ("Leeds", false)]),
            raw(
                "Which of these statements is correct?",
                &[("A", true), ("B", false)],
            ),
        ])
    }

    #[test]
    fn test_listing_keeps_generics_and_strips_specifics() {
        let pool = two_file_pool();
        let canon = canonicalize(&pool);
        let listing = list_questions(&pool, &canon);

        let ids: Vec<usize> = listing.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        assert!(listing[0].options.is_some());
        assert!(listing[1].options.is_none());
        assert_eq!(
            listing[2].options.as_deref(),
            Some(&[AnswerOption::new("A", true), AnswerOption::new("B", false)][..])
        );
    }

    #[test]
    fn test_listing_drops_specific_duplicates() {
        let pool = build_pool(vec![
            raw("What is the capital?", &[("London", true)]),
            raw("Who wrote Hamlet?", &[("Shakespeare", true)]),
            raw("What is the capital? ", &[("Cardiff", true)]),
        ]);
        let canon = canonicalize(&pool);
        let ids: Vec<usize> = list_questions(&pool, &canon).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_specific_listing_serializes_without_options() {
        let pool = two_file_pool();
        let canon = canonicalize(&pool);
        let listing = list_questions(&pool, &canon);

        let value = serde_json::to_value(&listing[1]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "question": "What is the capital?"})
        );
    }

    #[test]
    fn test_browse_pool_uris() {
        let pool = two_file_pool();
        let canon = canonicalize(&pool);
        let resources = browse_pool(&pool, &canon, "quizs://");

        assert_eq!(resources.len(), 3);
        assert_eq!(resources[1].uri, "quizs://1");
        assert_eq!(resources[1].text, "What is the capital?");
    }

    #[test]
    fn test_empty_pool() {
        let pool = build_pool(vec![]);
        let canon = canonicalize(&pool);
        assert!(list_questions(&pool, &canon).is_empty());
        assert!(browse_pool(&pool, &canon, "quizs://").is_empty());
    }
}
