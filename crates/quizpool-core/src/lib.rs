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

//! Question pool curation and quiz assembly.
//!
//! The pipeline, leaf first:
//!
//! - [`aggregate`]: merge per-chapter source files into one ordered pool
//! - [`canonical`]: classify generic questions and deduplicate specific ones
//! - [`query`]: caller-visible listings with duplicates suppressed
//! - [`assemble`]: randomized quizzes from requested ids
//!
//! [`QuestionBank`] ties these together into a frozen, shareable snapshot.
//!
//! # Example
//!
//! ```
//! use quizpool_core::{AnswerOption, QuestionBank, RawQuestion};
//!
//! let bank = QuestionBank::from_raw(vec![RawQuestion {
//!     question: "What is the capital?".to_string(),
//!     remark: "Select ONE answer".to_string(),
//!     options: vec![
//!         AnswerOption::new("London", true),
//!         AnswerOption::new("Leeds", false),
//!     ],
//! }]);
//!
//! assert_eq!(bank.list_questions().len(), 1);
//! let quiz = bank.assemble_random(&[0, 42]).unwrap();
//! assert_eq!(quiz.questions.len(), 1);
//! assert_eq!(quiz.unresolved, vec![42]);
//! ```

pub mod aggregate;
pub mod assemble;
mod bank;
pub mod canonical;
mod error;
mod model;
pub mod query;

pub use aggregate::{
    AggregateOptions, Aggregation, Discovery, MergeOrder, SourceFile, SourceSummary,
};
pub use assemble::{AssembledQuiz, QuizQuestion, MAX_QUIZ_IDS};
pub use bank::QuestionBank;
pub use canonical::{Canonicalization, GENERIC_QUESTIONS};
pub use error::{PoolError, PoolResult};
pub use model::{build_pool, AnswerOption, QuestionKind, QuestionRecord, RawQuestion};
pub use query::{ListedQuestion, PoolResource};
