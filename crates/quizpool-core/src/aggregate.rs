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

//! Pool aggregation: merging per-chapter source files into one ordered pool.
//!
//! # Merge order
//!
//! Source files are discovered in a single directory and ordered by the
//! chapter index embedded in their file name (the first capture group of
//! [`AggregateOptions::pattern`]). Ties are broken by file name, so the
//! merge order is total and reproducible. Records keep their within-file
//! order.
//!
//! # Parallel reading
//!
//! Files are read and parsed in parallel with rayon. Results are collected
//! back in merge order before concatenation, so parallelism never changes
//! the resulting ids.
//!
//! # Failure policy
//!
//! A file that cannot be used is skipped with a warning
//! ([`PoolError::MalformedSource`]). Files are all-or-nothing: one bad
//! element rejects the whole file. If nothing usable remains the
//! aggregation fails with [`PoolError::NoSourceData`].

use crate::error::{PoolError, PoolResult};
use crate::model::RawQuestion;
use rayon::prelude::*;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Default file name pattern for chapter sources.
pub const DEFAULT_SOURCE_PATTERN: &str = r"^Mock Test (\d+)\.json$";

/// Default maximum size of a single source file (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "QUIZPOOL_MAX_FILE_SIZE";

/// Maximum source file size from `QUIZPOOL_MAX_FILE_SIZE`, or the default
/// when unset or unparsable.
pub fn max_file_size_from_env() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Direction of the chapter-index sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeOrder {
    #[default]
    Ascending,
    Descending,
}

/// Options controlling source discovery and reading.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// File name regex; its first capture group is the chapter index.
    pub pattern: String,
    pub order: MergeOrder,
    /// Files larger than this are skipped.
    pub max_file_size: u64,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_SOURCE_PATTERN.to_string(),
            order: MergeOrder::Ascending,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// A discovered chapter source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub chapter: u64,
}

impl SourceFile {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Per-file outcome of a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: PathBuf,
    pub chapter: u64,
    pub questions: usize,
}

/// Result of merging a set of sources.
#[derive(Debug, Clone)]
pub struct Aggregation {
    /// Merged records, in merge order.
    pub records: Vec<RawQuestion>,
    /// Files that contributed, in merge order.
    pub sources: Vec<SourceSummary>,
    /// Files that were skipped, each as a [`PoolError::MalformedSource`].
    pub skipped: Vec<PoolError>,
}

fn compile_pattern(pattern: &str) -> PoolResult<Regex> {
    Regex::new(pattern).map_err(|e| PoolError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

/// Extract the chapter index from a file name.
///
/// Uses the first capture group if the pattern has one, otherwise the
/// first run of digits in the name. `None` means the name does not match;
/// `Some(Err(_))` means it matches but carries no usable index.
fn chapter_index(pattern: &Regex, file_name: &str) -> Option<Result<u64, ParseIntError>> {
    let captures = pattern.captures(file_name)?;
    let digits = match captures.get(1) {
        Some(group) => group.as_str().to_string(),
        None => file_name
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect(),
    };
    Some(digits.parse())
}

/// Sources found in a directory, plus files that matched the pattern but
/// could not be ordered.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Chapter sources in merge order.
    pub sources: Vec<SourceFile>,
    /// Matching files without a usable chapter index, each as a
    /// [`PoolError::MalformedSource`].
    pub rejected: Vec<PoolError>,
}

/// Scan `dir` (non-recursively) for chapter sources.
///
/// Files whose names do not match the pattern are ignored. Files that match
/// but whose chapter index does not fit a `u64` are rejected with a warning.
pub fn discover(dir: &Path, options: &AggregateOptions) -> PoolResult<Discovery> {
    let pattern = compile_pattern(&options.pattern)?;
    let mut discovery = Discovery::default();

    let files = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.path().is_file());

    for entry in files {
        let name = entry.file_name().to_string_lossy().to_string();
        match chapter_index(&pattern, &name) {
            None => {}
            Some(Ok(chapter)) => discovery.sources.push(SourceFile {
                path: entry.path().to_path_buf(),
                chapter,
            }),
            Some(Err(e)) => {
                let rejected =
                    PoolError::malformed(entry.path(), format!("invalid chapter index: {}", e));
                warn!("Skipping source: {}", rejected);
                discovery.rejected.push(rejected);
            }
        }
    }

    let sources = &mut discovery.sources;

    sources.sort_by(|a, b| {
        let by_chapter = match options.order {
            MergeOrder::Ascending => a.chapter.cmp(&b.chapter),
            MergeOrder::Descending => b.chapter.cmp(&a.chapter),
        };
        by_chapter.then_with(|| a.file_name().cmp(&b.file_name()))
    });

    debug!("Discovered {} source files in {}", sources.len(), dir.display());
    Ok(discovery)
}

/// List the chapter sources directly inside `dir`, in merge order.
pub fn discover_sources(dir: &Path, options: &AggregateOptions) -> PoolResult<Vec<SourceFile>> {
    discover(dir, options).map(|discovery| discovery.sources)
}

/// Read one source file as an array of question records.
pub fn read_source(path: &Path, max_file_size: u64) -> PoolResult<Vec<RawQuestion>> {
    let metadata =
        std::fs::metadata(path).map_err(|e| PoolError::malformed(path, e.to_string()))?;
    if metadata.len() > max_file_size {
        return Err(PoolError::malformed(
            path,
            format!(
                "file is too large ({} bytes, max: {} bytes)",
                metadata.len(),
                max_file_size
            ),
        ));
    }

    let content =
        std::fs::read_to_string(path).map_err(|e| PoolError::malformed(path, e.to_string()))?;
    parse_source(path, &content)
}

/// Parse the contents of a source file.
///
/// The document must be a JSON array whose every element has the record
/// shape.
pub fn parse_source(path: &Path, content: &str) -> PoolResult<Vec<RawQuestion>> {
    let value: JsonValue = serde_json::from_str(content)
        .map_err(|e| PoolError::malformed(path, format!("invalid JSON: {}", e)))?;

    let JsonValue::Array(items) = value else {
        return Err(PoolError::malformed(path, "does not contain a JSON array"));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| {
                PoolError::malformed(path, format!("element {} is not a question: {}", index, e))
            })
        })
        .collect()
}

/// Merge already-ordered sources.
///
/// Fails with [`PoolError::NoSourceData`] (reported against `location`)
/// when `sources` is empty or every source is skipped.
pub fn merge_sources(
    location: &Path,
    sources: &[SourceFile],
    max_file_size: u64,
) -> PoolResult<Aggregation> {
    if sources.is_empty() {
        return Err(PoolError::NoSourceData {
            location: location.to_path_buf(),
        });
    }

    // Order-preserving parallel read
    let results: Vec<PoolResult<Vec<RawQuestion>>> = sources
        .par_iter()
        .map(|source| read_source(&source.path, max_file_size))
        .collect();

    let mut aggregation = Aggregation {
        records: Vec::new(),
        sources: Vec::new(),
        skipped: Vec::new(),
    };

    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(questions) => {
                info!(
                    "Added {} questions from {}",
                    questions.len(),
                    source.file_name()
                );
                aggregation.sources.push(SourceSummary {
                    path: source.path.clone(),
                    chapter: source.chapter,
                    questions: questions.len(),
                });
                aggregation.records.extend(questions);
            }
            Err(e) => {
                warn!("Skipping source: {}", e);
                aggregation.skipped.push(e);
            }
        }
    }

    if aggregation.sources.is_empty() {
        return Err(PoolError::NoSourceData {
            location: location.to_path_buf(),
        });
    }

    info!(
        "Total questions merged: {} from {} files ({} skipped)",
        aggregation.records.len(),
        aggregation.sources.len(),
        aggregation.skipped.len()
    );
    Ok(aggregation)
}

/// Merge the sources of a [`Discovery`], carrying its rejected files into
/// [`Aggregation::skipped`].
pub fn merge_discovered(
    location: &Path,
    discovery: Discovery,
    max_file_size: u64,
) -> PoolResult<Aggregation> {
    let mut aggregation = merge_sources(location, &discovery.sources, max_file_size)?;
    aggregation.skipped.splice(0..0, discovery.rejected);
    Ok(aggregation)
}

/// Discover and merge every chapter source in `dir`.
pub fn aggregate(dir: &Path, options: &AggregateOptions) -> PoolResult<Aggregation> {
    let discovery = discover(dir, options)?;
    merge_discovered(dir, discovery, options.max_file_size)
}

/// Load an already-merged pool file.
///
/// The file is treated as a single source; if it is unusable the result is
/// [`PoolError::NoSourceData`].
pub fn load_pool_file(path: &Path, max_file_size: u64) -> PoolResult<Aggregation> {
    let source = SourceFile {
        path: path.to_path_buf(),
        chapter: 0,
    };
    merge_sources(path, std::slice::from_ref(&source), max_file_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn question(text: &str) -> String {
        format!(
            r#"{{"question": "{}", "remark": "", "options": [{{"value": "A", "isAnswer": true}}]}}"#,
            text
        )
    }

    #[test]
    fn test_chapter_index_from_capture() {
        let re = compile_pattern(DEFAULT_SOURCE_PATTERN).unwrap();
        assert_eq!(chapter_index(&re, "Mock Test 12.json"), Some(Ok(12)));
        assert_eq!(chapter_index(&re, "Mock Test 12.json.bak"), None);
        assert_eq!(chapter_index(&re, "mock-test.json"), None);
    }

    #[test]
    fn test_chapter_index_without_capture_uses_first_digits() {
        let re = compile_pattern(r"^chapter-\d+\.json$").unwrap();
        assert_eq!(chapter_index(&re, "chapter-7.json"), Some(Ok(7)));
    }

    #[test]
    fn test_chapter_index_overflow_is_reported() {
        let re = compile_pattern(DEFAULT_SOURCE_PATTERN).unwrap();
        assert!(matches!(
            chapter_index(&re, "Mock Test 99999999999999999999.json"),
            Some(Err(_))
        ));
    }

    #[test]
    fn test_unindexable_source_is_skipped_with_warning() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Mock Test 1.json", &format!("[{}]", question("A1")));
        write(&dir, "Mock Test 99999999999999999999.json", "[]");

        let aggregation = aggregate(dir.path(), &AggregateOptions::default()).unwrap();
        assert_eq!(aggregation.sources.len(), 1);
        assert_eq!(aggregation.skipped.len(), 1);
        assert!(matches!(
            &aggregation.skipped[0],
            PoolError::MalformedSource { path, reason }
                if path.ends_with("Mock Test 99999999999999999999.json")
                    && reason.contains("chapter index")
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let options = AggregateOptions {
            pattern: "(".to_string(),
            ..Default::default()
        };
        let dir = TempDir::new().unwrap();
        let result = discover_sources(dir.path(), &options);
        assert!(matches!(result, Err(PoolError::InvalidPattern { .. })));
    }

    #[test]
    fn test_discover_orders_numerically() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Mock Test 10.json", "[]");
        write(&dir, "Mock Test 2.json", "[]");
        write(&dir, "Mock Test 1.json", "[]");
        write(&dir, "mock-test.json", "[]");
        write(&dir, "notes.txt", "");

        let sources = discover_sources(dir.path(), &AggregateOptions::default()).unwrap();
        let chapters: Vec<u64> = sources.iter().map(|s| s.chapter).collect();
        assert_eq!(chapters, vec![1, 2, 10]);

        let descending = AggregateOptions {
            order: MergeOrder::Descending,
            ..Default::default()
        };
        let sources = discover_sources(dir.path(), &descending).unwrap();
        let chapters: Vec<u64> = sources.iter().map(|s| s.chapter).collect();
        assert_eq!(chapters, vec![10, 2, 1]);
    }

    #[test]
    fn test_aggregate_concatenates_in_order() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "Mock Test 2.json",
            &format!("[{}, {}]", question("B1"), question("B2")),
        );
        write(&dir, "Mock Test 1.json", &format!("[{}]", question("A1")));

        let aggregation = aggregate(dir.path(), &AggregateOptions::default()).unwrap();
        let texts: Vec<&str> = aggregation
            .records
            .iter()
            .map(|q| q.question.as_str())
            .collect();
        assert_eq!(texts, vec!["A1", "B1", "B2"]);
        assert_eq!(aggregation.sources.len(), 2);
        assert_eq!(aggregation.sources[1].questions, 2);
        assert!(aggregation.skipped.is_empty());
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Mock Test 1.json", r#"{"question": "not an array"}"#);
        write(&dir, "Mock Test 2.json", "this is not json");
        write(&dir, "Mock Test 3.json", &format!("[{}]", question("C1")));

        let aggregation = aggregate(dir.path(), &AggregateOptions::default()).unwrap();
        assert_eq!(aggregation.records.len(), 1);
        assert_eq!(aggregation.skipped.len(), 2);
        assert!(aggregation
            .skipped
            .iter()
            .all(|e| matches!(e, PoolError::MalformedSource { .. })));
    }

    #[test]
    fn test_bad_element_rejects_whole_file() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "Mock Test 1.json",
            &format!(r#"[{}, {{"remark": "no question"}}]"#, question("A1")),
        );
        write(&dir, "Mock Test 2.json", &format!("[{}]", question("B1")));

        let aggregation = aggregate(dir.path(), &AggregateOptions::default()).unwrap();
        assert_eq!(aggregation.records.len(), 1);
        assert_eq!(aggregation.records[0].question, "B1");
    }

    #[test]
    fn test_oversized_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Mock Test 1.json", &format!("[{}]", question("A1")));
        write(&dir, "Mock Test 2.json", "[]");

        let options = AggregateOptions {
            max_file_size: 10,
            ..Default::default()
        };
        let aggregation = aggregate(dir.path(), &options).unwrap();
        assert_eq!(aggregation.skipped.len(), 1);
        assert!(aggregation.skipped[0].to_string().contains("too large"));
    }

    #[test]
    fn test_no_sources_found() {
        let dir = TempDir::new().unwrap();
        write(&dir, "readme.md", "nothing here");

        let result = aggregate(dir.path(), &AggregateOptions::default());
        assert!(matches!(result, Err(PoolError::NoSourceData { .. })));
    }

    #[test]
    fn test_all_sources_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Mock Test 1.json", "{}");
        write(&dir, "Mock Test 2.json", "42");

        let result = aggregate(dir.path(), &AggregateOptions::default());
        assert!(matches!(result, Err(PoolError::NoSourceData { .. })));
    }

    #[test]
    fn test_empty_arrays_still_count_as_usable() {
        let dir = TempDir::new().unwrap();
        write(&dir, "Mock Test 1.json", "[]");

        let aggregation = aggregate(dir.path(), &AggregateOptions::default()).unwrap();
        assert!(aggregation.records.is_empty());
        assert_eq!(aggregation.sources.len(), 1);
    }

    #[test]
    fn test_load_pool_file() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "mock-test.json",
            &format!("[{}, {}]", question("A1"), question("A2")),
        );

        let aggregation =
            load_pool_file(&dir.path().join("mock-test.json"), DEFAULT_MAX_FILE_SIZE).unwrap();
        assert_eq!(aggregation.records.len(), 2);

        let missing = load_pool_file(&dir.path().join("missing.json"), DEFAULT_MAX_FILE_SIZE);
        assert!(matches!(missing, Err(PoolError::NoSourceData { .. })));
    }
}
