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

//! Quiz assembly: resolving requested ids and randomizing order.
//!
//! The assembler works on fresh copies of pool entries. Question order and
//! each question's option order are shuffled independently with an unbiased
//! Fisher-Yates shuffle. `is_answer` moves together with its option, so the
//! set of `(value, is_answer)` pairs of every question is unchanged.

use crate::error::{PoolError, PoolResult};
use crate::model::{AnswerOption, QuestionRecord};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of ids per quiz request.
pub const MAX_QUIZ_IDS: usize = 24;

/// A question as handed out in a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub remark: String,
    pub options: Vec<AnswerOption>,
}

impl From<&QuestionRecord> for QuizQuestion {
    fn from(record: &QuestionRecord) -> Self {
        Self {
            question: record.text.clone(),
            remark: record.remark.clone(),
            options: record.options.clone(),
        }
    }
}

/// An assembled quiz.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssembledQuiz {
    /// Resolved questions in random order.
    pub questions: Vec<QuizQuestion>,
    /// Requested ids with no pool entry, in request order.
    pub unresolved: Vec<i64>,
}

/// Check the request bound without resolving anything.
pub fn validate_request(ids: &[i64]) -> PoolResult<()> {
    if ids.len() > MAX_QUIZ_IDS {
        return Err(PoolError::TooManyIds {
            requested: ids.len(),
            max: MAX_QUIZ_IDS,
        });
    }
    Ok(())
}

fn resolve(pool: &[QuestionRecord], id: i64) -> Option<&QuestionRecord> {
    usize::try_from(id).ok().and_then(|index| pool.get(index))
}

/// Assemble a quiz from `ids`.
///
/// Unknown (including negative) ids are dropped and reported in
/// [`AssembledQuiz::unresolved`]. Duplicate ids resolve once per
/// occurrence.
///
/// # Errors
///
/// Returns [`PoolError::TooManyIds`] if more than [`MAX_QUIZ_IDS`] ids are
/// given. Nothing is resolved in that case.
pub fn assemble_quiz<R: Rng + ?Sized>(
    pool: &[QuestionRecord],
    ids: &[i64],
    rng: &mut R,
) -> PoolResult<AssembledQuiz> {
    validate_request(ids)?;

    let mut quiz = AssembledQuiz::default();
    for &id in ids {
        match resolve(pool, id) {
            Some(record) => quiz.questions.push(QuizQuestion::from(record)),
            None => quiz.unresolved.push(id),
        }
    }

    if !quiz.unresolved.is_empty() {
        debug!("Dropping unresolved question ids: {:?}", quiz.unresolved);
    }

    quiz.questions.shuffle(rng);
    for question in &mut quiz.questions {
        question.options.shuffle(rng);
    }

    Ok(quiz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_pool, RawQuestion};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn pool(size: usize) -> Vec<QuestionRecord> {
        build_pool(
            (0..size)
                .map(|i| RawQuestion {
                    question: format!("Question {}?", i),
                    remark: "Select ONE answer".to_string(),
                    options: vec![
                        AnswerOption::new(format!("right {}", i), true),
                        AnswerOption::new(format!("wrong a {}", i), false),
                        AnswerOption::new(format!("wrong b {}", i), false),
                        AnswerOption::new(format!("wrong c {}", i), false),
                    ],
                })
                .collect(),
        )
    }

    #[test]
    fn test_unresolved_ids_are_dropped() {
        let pool = pool(3);
        let mut rng = StdRng::seed_from_u64(7);
        let quiz = assemble_quiz(&pool, &[0, 1, 2, 99, -1], &mut rng).unwrap();

        assert_eq!(quiz.questions.len(), 3);
        assert_eq!(quiz.unresolved, vec![99, -1]);
    }

    #[test]
    fn test_exactly_max_ids_succeeds() {
        let pool = pool(30);
        let ids: Vec<i64> = (0..MAX_QUIZ_IDS as i64).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let quiz = assemble_quiz(&pool, &ids, &mut rng).unwrap();
        assert_eq!(quiz.questions.len(), MAX_QUIZ_IDS);
    }

    #[test]
    fn test_too_many_ids_fails() {
        let pool = pool(30);
        let ids: Vec<i64> = (0..=MAX_QUIZ_IDS as i64).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let result = assemble_quiz(&pool, &ids, &mut rng);
        assert_eq!(
            result,
            Err(PoolError::TooManyIds {
                requested: 25,
                max: 24
            })
        );
    }

    #[test]
    fn test_answer_flags_survive_shuffle() {
        let pool = pool(10);
        let ids: Vec<i64> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let quiz = assemble_quiz(&pool, &ids, &mut rng).unwrap();

        for question in &quiz.questions {
            let original = pool
                .iter()
                .find(|r| r.text == question.question)
                .expect("question comes from the pool");
            let expected: HashSet<&AnswerOption> = original.options.iter().collect();
            let actual: HashSet<&AnswerOption> = question.options.iter().collect();
            assert_eq!(expected, actual);
            assert_eq!(question.remark, original.remark);
        }
    }

    #[test]
    fn test_pool_is_not_mutated() {
        let pool = pool(5);
        let before = pool.clone();
        let mut rng = StdRng::seed_from_u64(3);
        assemble_quiz(&pool, &[0, 1, 2, 3, 4], &mut rng).unwrap();
        assert_eq!(pool, before);
    }

    #[test]
    fn test_order_is_randomized() {
        let pool = pool(6);
        let ids: Vec<i64> = (0..6).collect();
        let mut rng = StdRng::seed_from_u64(2024);

        let mut question_orders = HashSet::new();
        let mut option_orders = HashSet::new();
        for _ in 0..50 {
            let quiz = assemble_quiz(&pool, &ids, &mut rng).unwrap();
            question_orders.insert(
                quiz.questions
                    .iter()
                    .map(|q| q.question.clone())
                    .collect::<Vec<_>>(),
            );
            option_orders.insert(
                quiz.questions[0]
                    .options
                    .iter()
                    .map(|o| o.value.clone())
                    .collect::<Vec<_>>(),
            );
        }

        assert!(question_orders.len() > 1, "question order never changed");
        assert!(option_orders.len() > 1, "option order never changed");
    }

    #[test]
    fn test_duplicate_ids_resolve_per_occurrence() {
        let pool = pool(2);
        let mut rng = StdRng::seed_from_u64(5);
        let quiz = assemble_quiz(&pool, &[1, 1], &mut rng).unwrap();
        assert_eq!(quiz.questions.len(), 2);
    }

    #[test]
    fn test_empty_request() {
        let pool = pool(2);
        let mut rng = StdRng::seed_from_u64(5);
        let quiz = assemble_quiz(&pool, &[], &mut rng).unwrap();
        assert!(quiz.questions.is_empty());
        assert!(quiz.unresolved.is_empty());
    }
}
