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

//! Quiz command - preview an assembled quiz

use super::{load_bank, write_output};
use crate::cli::SourceArgs;
use crate::error::{CliError, CliResult};
use quizpool_core::{AssembledQuiz, QuestionBank};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Assemble a quiz from `ids` and print it as a JSON array.
///
/// With `seed`, the shuffle is reproducible; otherwise the thread-local RNG
/// is used. Unknown ids are reported on stderr and otherwise ignored.
///
/// # Errors
///
/// Returns `Err` if the pool cannot be loaded or more than 24 ids are given.
pub fn quiz(source: &SourceArgs, ids: &[i64], seed: Option<u64>) -> CliResult<()> {
    let bank = load_bank(source)?;
    let quiz = assemble(&bank, ids, seed)?;

    if !quiz.unresolved.is_empty() {
        let unresolved: Vec<String> = quiz.unresolved.iter().map(i64::to_string).collect();
        eprintln!("warning: ignoring unknown ids: {}", unresolved.join(", "));
    }

    let content = serde_json::to_string_pretty(&quiz.questions).map_err(CliError::json_format)?;
    write_output(&content, None)
}

fn assemble(bank: &QuestionBank, ids: &[i64], seed: Option<u64>) -> CliResult<AssembledQuiz> {
    let quiz = match seed {
        Some(seed) => bank.assemble(ids, &mut StdRng::seed_from_u64(seed))?,
        None => bank.assemble_random(ids)?,
    };
    Ok(quiz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizpool_core::{AnswerOption, PoolError, RawQuestion};

    fn bank() -> QuestionBank {
        QuestionBank::from_raw(
            (0..30)
                .map(|i| RawQuestion {
                    question: format!("Question {}", i),
                    remark: "Select ONE answer".to_string(),
                    options: vec![
                        AnswerOption::new("right", true),
                        AnswerOption::new("wrong", false),
                        AnswerOption::new("also wrong", false),
                    ],
                })
                .collect(),
        )
    }

    #[test]
    fn test_seeded_quiz_is_reproducible() {
        let bank = bank();
        let ids: Vec<i64> = (0..10).collect();
        let first = assemble(&bank, &ids, Some(7)).unwrap();
        let second = assemble(&bank, &ids, Some(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_too_many_ids() {
        let bank = bank();
        let ids: Vec<i64> = (0..25).collect();
        assert!(matches!(
            assemble(&bank, &ids, None),
            Err(CliError::Pool(PoolError::TooManyIds { .. }))
        ));
    }

    #[test]
    fn test_unknown_ids_are_unresolved() {
        let bank = bank();
        let quiz = assemble(&bank, &[1, 99, -4], Some(1)).unwrap();
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.unresolved, vec![99, -4]);
    }
}
