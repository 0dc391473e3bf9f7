//! Duplicate removal over an owned integer sequence
//!
//! Three strategies are offered. `SimpleLooping` and `OriginalOrder` return
//! values in first-occurrence order and always agree with each other.
//! `DistinctStream` returns the same values in an unspecified order.

use crate::core::sample::sample_values;
use crate::utils::parallel::should_parallelize;
use crate::DedupError;
use indexmap::IndexSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Input length at which the distinct stream switches to rayon workers
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMethod {
    SimpleLooping,
    OriginalOrder,
    DistinctStream,
}

impl DedupMethod {
    pub const ALL: [DedupMethod; 3] = [
        DedupMethod::SimpleLooping,
        DedupMethod::OriginalOrder,
        DedupMethod::DistinctStream,
    ];

    /// Label printed in front of this method's output
    pub fn label(&self) -> &'static str {
        match self {
            DedupMethod::SimpleLooping => "Simple looping: ",
            DedupMethod::OriginalOrder => "Original order: ",
            DedupMethod::DistinctStream => "Distinct stream: ",
        }
    }

    /// Whether output follows first-occurrence order
    pub fn preserves_order(&self) -> bool {
        !matches!(self, DedupMethod::DistinctStream)
    }
}

impl fmt::Display for DedupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DedupMethod::SimpleLooping => "simple-looping",
            DedupMethod::OriginalOrder => "original-order",
            DedupMethod::DistinctStream => "distinct-stream",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResult {
    pub method: DedupMethod,
    pub values: Vec<i32>,
}

/// Output of every method for a single input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedupReport {
    pub original: Vec<i32>,
    pub results: Vec<MethodResult>,
}

impl DedupReport {
    pub fn get(&self, method: DedupMethod) -> Option<&[i32]> {
        self.results
            .iter()
            .find(|r| r.method == method)
            .map(|r| r.values.as_slice())
    }
}

#[derive(Debug, Clone)]
pub struct DeDup {
    values: Vec<i32>,
    parallel_threshold: usize,
}

impl DeDup {
    /// Uses the built-in sample sequence
    pub fn new() -> Self {
        Self::with_values(sample_values())
    }

    pub fn with_values(values: Vec<i32>) -> Self {
        Self {
            values,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Rejects an absent sequence instead of treating it as empty
    pub fn try_from_option(values: Option<Vec<i32>>) -> crate::Result<Self> {
        values.map(Self::with_values).ok_or_else(|| {
            DedupError::InvalidInput("integer sequence is absent".to_string())
        })
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Compare each element against the values accepted so far.
    ///
    /// O(n²) with no auxiliary structure. Output is in first-occurrence order.
    pub fn dedup_by_simple_looping(&self) -> Vec<i32> {
        let mut unique: Vec<i32> = Vec::with_capacity(self.values.len());

        for &value in &self.values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        unique.shrink_to_fit();
        debug!(
            method = %DedupMethod::SimpleLooping,
            input = self.values.len(),
            output = unique.len(),
            "deduplicated"
        );
        unique
    }

    /// Insert into an insertion-ordered set and read it back.
    ///
    /// Same output as `dedup_by_simple_looping` in expected O(n).
    pub fn dedup_with_original_order(&self) -> Vec<i32> {
        let set: IndexSet<i32> = self.values.iter().copied().collect();
        let unique: Vec<i32> = set.into_iter().collect();

        debug!(
            method = %DedupMethod::OriginalOrder,
            input = self.values.len(),
            output = unique.len(),
            "deduplicated"
        );
        unique
    }

    /// Distinct filter over the input treated as an unordered bag.
    ///
    /// The order of the returned values is unspecified. Inputs at or above
    /// the parallel threshold are folded across the rayon pool.
    pub fn dedup_with_distinct_stream(&self) -> Vec<i32> {
        let parallel = should_parallelize(self.values.len(), self.parallel_threshold);

        let set = if parallel {
            self.values
                .par_iter()
                .fold(HashSet::new, |mut set, &value| {
                    set.insert(value);
                    set
                })
                .reduce(HashSet::new, |mut a, mut b| {
                    if a.len() < b.len() {
                        std::mem::swap(&mut a, &mut b);
                    }
                    a.extend(b);
                    a
                })
        } else {
            self.values.iter().copied().collect::<HashSet<i32>>()
        };

        let unique: Vec<i32> = set.into_iter().collect();
        debug!(
            method = %DedupMethod::DistinctStream,
            input = self.values.len(),
            output = unique.len(),
            parallel,
            "deduplicated"
        );
        unique
    }

    pub fn apply(&self, method: DedupMethod) -> Vec<i32> {
        match method {
            DedupMethod::SimpleLooping => self.dedup_by_simple_looping(),
            DedupMethod::OriginalOrder => self.dedup_with_original_order(),
            DedupMethod::DistinctStream => self.dedup_with_distinct_stream(),
        }
    }

    pub fn run_all(&self) -> DedupReport {
        DedupReport {
            original: self.values.clone(),
            results: DedupMethod::ALL
                .iter()
                .map(|&method| MethodResult {
                    method,
                    values: self.apply(method),
                })
                .collect(),
        }
    }
}

impl Default for DeDup {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<i32>> for DeDup {
    fn from(values: Vec<i32>) -> Self {
        Self::with_values(values)
    }
}

impl From<&[i32]> for DeDup {
    fn from(values: &[i32]) -> Self {
        Self::with_values(values.to_vec())
    }
}
