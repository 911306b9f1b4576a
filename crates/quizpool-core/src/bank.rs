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

//! The frozen question bank.
//!
//! A [`QuestionBank`] is built once, before any request is served, and is
//! read-only afterwards. It holds no interior mutability, so an
//! `Arc<QuestionBank>` can be shared with any number of concurrent readers
//! without locking.

use crate::aggregate::{aggregate, load_pool_file, AggregateOptions, Aggregation};
use crate::assemble::{assemble_quiz, AssembledQuiz};
use crate::canonical::{canonicalize, Canonicalization};
use crate::error::{PoolError, PoolResult};
use crate::model::{build_pool, QuestionKind, QuestionRecord, RawQuestion};
use crate::query::{browse_pool, list_questions, ListedQuestion, PoolResource};
use rand::Rng;
use std::path::Path;

/// Canonical pool plus its canonicalization.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pool: Vec<QuestionRecord>,
    canon: Canonicalization,
    skipped: Vec<PoolError>,
}

impl QuestionBank {
    /// Freeze merged raw records into a bank.
    pub fn from_raw(records: Vec<RawQuestion>) -> Self {
        let pool = build_pool(records);
        let canon = canonicalize(&pool);
        Self {
            pool,
            canon,
            skipped: Vec::new(),
        }
    }

    /// Freeze the output of an aggregation, keeping its skip warnings.
    pub fn from_aggregation(aggregation: Aggregation) -> Self {
        let mut bank = Self::from_raw(aggregation.records);
        bank.skipped = aggregation.skipped;
        bank
    }

    /// Aggregate the chapter sources in `dir` and freeze them.
    pub fn load_dir(dir: &Path, options: &AggregateOptions) -> PoolResult<Self> {
        aggregate(dir, options).map(Self::from_aggregation)
    }

    /// Load an already-merged pool file and freeze it.
    pub fn load_file(path: &Path, max_file_size: u64) -> PoolResult<Self> {
        load_pool_file(path, max_file_size).map(Self::from_aggregation)
    }

    /// Load from `source`: a merged pool file, or a directory of chapters.
    pub fn load(source: &Path, options: &AggregateOptions) -> PoolResult<Self> {
        if source.is_file() {
            Self::load_file(source, options.max_file_size)
        } else {
            Self::load_dir(source, options)
        }
    }

    pub fn pool(&self) -> &[QuestionRecord] {
        &self.pool
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&QuestionRecord> {
        self.pool.get(id)
    }

    pub fn kind(&self, id: usize) -> Option<QuestionKind> {
        self.canon.kinds.get(id).copied()
    }

    pub fn canonicalization(&self) -> &Canonicalization {
        &self.canon
    }

    /// Sources skipped while this bank was loaded.
    pub fn skipped(&self) -> &[PoolError] {
        &self.skipped
    }

    /// Whether entry `id` appears in listings.
    pub fn is_visible(&self, id: usize) -> bool {
        self.get(id).is_some_and(|record| self.canon.is_visible(record))
    }

    pub fn list_questions(&self) -> Vec<ListedQuestion> {
        list_questions(&self.pool, &self.canon)
    }

    pub fn browse(&self, base_uri: &str) -> Vec<PoolResource> {
        browse_pool(&self.pool, &self.canon, base_uri)
    }

    pub fn assemble<R: Rng + ?Sized>(&self, ids: &[i64], rng: &mut R) -> PoolResult<AssembledQuiz> {
        assemble_quiz(&self.pool, ids, rng)
    }

    /// Assemble with the thread-local RNG.
    pub fn assemble_random(&self, ids: &[i64]) -> PoolResult<AssembledQuiz> {
        self.assemble(ids, &mut rand::thread_rng())
    }
}
