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

//! Error types for pool construction and quiz assembly.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while building the question pool or serving a request from it.
///
/// Aggregation-time variants ([`PoolError::NoSourceData`],
/// [`PoolError::MalformedSource`]) are resolved before the pool is frozen.
/// [`PoolError::TooManyIds`] is a per-request rejection and never affects
/// pool state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// No usable source files were found, or every one of them was skipped.
    #[error("No usable question source data found in '{location}'")]
    NoSourceData {
        /// Directory or file that was searched.
        location: PathBuf,
    },

    /// A single source file could not be used and was skipped.
    ///
    /// Non-fatal: the aggregator collects these as warnings and carries on.
    #[error("Malformed source '{path}': {reason}")]
    MalformedSource {
        /// Offending file.
        path: PathBuf,
        /// Why the file was rejected.
        reason: String,
    },

    /// A quiz request named more question ids than allowed.
    #[error("Too many question ids: {requested} requested (max: {max})")]
    TooManyIds {
        /// Number of ids in the request.
        requested: usize,
        /// Upper bound on ids per quiz.
        max: usize,
    },

    /// The source file name pattern is not a valid regex.
    #[error("Invalid source pattern '{pattern}': {message}")]
    InvalidPattern {
        /// Pattern as given.
        pattern: String,
        /// Regex compiler message.
        message: String,
    },
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

impl PoolError {
    /// Create a malformed-source error for `path`.
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedSource {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error aborts pool construction.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NoSourceData { .. } | Self::InvalidPattern { .. })
    }
}
