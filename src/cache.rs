use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::domain::solution::SimplexResult;
use crate::domain::tableau::{Direction, Tableau};

/// Identity of a solve request. Cells are compared by bit pattern so the key
/// can be hashed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolveKey {
    solver: String,
    direction: Direction,
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    cells: Vec<u64>,
}

impl SolveKey {
    pub fn new(solver: &str, tableau: &Tableau, direction: Direction) -> Self {
        SolveKey {
            solver: solver.to_string(),
            direction,
            row_labels: tableau.row_labels.clone(),
            column_labels: tableau.column_labels.clone(),
            cells: tableau
                .values
                .iter()
                // Row lengths are part of the identity of a ragged grid.
                .flat_map(|row| std::iter::once(row.len() as u64).chain(row.iter().map(|v| v.to_bits())))
                .collect(),
        }
    }
}

/// Memoizes successful solves. Solving is pure, so a hit is always valid.
pub struct SolveCache {
    inner: Option<Mutex<LruCache<SolveKey, SimplexResult>>>,
}

impl SolveCache {
    /// A capacity of zero disables caching.
    pub fn new(capacity: usize) -> Self {
        SolveCache {
            inner: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
        }
    }

    pub fn get(&self, key: &SolveKey) -> Option<SimplexResult> {
        self.inner.as_ref()?.lock().get(key).cloned()
    }

    pub fn put(&self, key: SolveKey, result: SimplexResult) {
        if let Some(cache) = &self.inner {
            cache.lock().put(key, result);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.as_ref().map(|cache| cache.lock().len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
