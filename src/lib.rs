use std::{
    fmt::Debug,
    time::{Duration, Instant},
};

mod insertion;
mod util;

pub(crate) trait Sortable: Clone + Debug {}
impl<T: Clone + Debug> Sortable for T {}

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// A sorted copy of the engine's snapshot, paired with the wall-clock time
/// the sort itself took (copying the snapshot is not measured).
pub type SortResult = (Vec<i32>, Duration);

/// Holds one immutable snapshot of the input and exposes the four insertion
/// sort variants over it.
///
/// Every operation sorts its own private copy, so calls never interfere with
/// each other and can be repeated in any order.
#[derive(Debug, Clone)]
pub struct SortEngine {
    snapshot: Vec<i32>,
}

impl SortEngine {
    pub fn new(snapshot: Vec<i32>) -> Self {
        Self { snapshot }
    }

    /// Read-only view of the stored input.
    pub fn snapshot(&self) -> &[i32] {
        &self.snapshot
    }

    /// Adjacent-swap insertion sort.
    pub fn basic_insertion_sort(&self) -> SortResult {
        self.timed(|v| insertion::basic_insertion_sort(v, &i32::lt))
    }

    /// Insertion sort that finds each insertion slot via binary search over
    /// the sorted prefix, then shifts the displaced block in one move.
    pub fn binary_insertion_sort(&self) -> SortResult {
        self.timed(|v| insertion::binary_insertion_sort(v, &i32::lt))
    }

    /// Binary-search insertion sort that inserts two elements per outer
    /// iteration, searching only the remaining suffix for the pair maximum.
    pub fn binary_paired_insertion_sort(&self) -> SortResult {
        self.timed(|v| insertion::binary_paired_insertion_sort(v, &i32::lt))
    }

    /// Paired insertion sort that shifts displaced elements with one
    /// merge-style walk per pair instead of binary searches.
    pub fn paired_insertion_sort(&self) -> SortResult {
        self.timed(|v| insertion::paired_insertion_sort(v, &i32::lt))
    }

    fn timed<F>(&self, sort: F) -> SortResult
    where
        F: FnOnce(&mut [i32]),
    {
        let mut copy = self.snapshot.clone();
        let start = Instant::now();
        sort(&mut copy);
        let elapsed = start.elapsed();
        (copy, elapsed)
    }
}
