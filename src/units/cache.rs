//! Memoization for computed style values.
//!
//! Conversion results are cheap to compute but requested constantly during
//! render, so they are cached by the string form of the call arguments. The
//! cache is bounded and owned by its converter; there is no process-wide
//! cache to go stale.

use indexmap::IndexMap;
use std::fmt::Display;

use super::constants::DEFAULT_CACHE_CAPACITY;

/// Separator joining rendered arguments into a cache key.
pub const MEMO_KEY_SEPARATOR: char = '-';

/// Argument tuples that can render themselves into a cache key.
///
/// The key joins the rendered arguments right to left, so `(a, b, c)` becomes
/// `"c-b-a"`. Arguments must have stable renderings: two argument tuples that
/// render identically share a cache slot, which is the caller's contract.
pub trait MemoArgs {
    fn memo_key(&self) -> String;
}

impl<A: Display> MemoArgs for (A,) {
    fn memo_key(&self) -> String {
        self.0.to_string()
    }
}

impl<A: Display, B: Display> MemoArgs for (A, B) {
    fn memo_key(&self) -> String {
        format!("{}{}{}", self.1, MEMO_KEY_SEPARATOR, self.0)
    }
}

impl<A: Display, B: Display, C: Display> MemoArgs for (A, B, C) {
    fn memo_key(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.2,
            self.1,
            self.0,
            sep = MEMO_KEY_SEPARATOR
        )
    }
}

/// A bounded, insertion-ordered cache of computed values.
///
/// When the bound is reached, inserting a new key evicts the oldest entry, so
/// long-running sessions cannot grow the cache without limit.
#[derive(Debug, Clone)]
pub struct MemoCache<V> {
    entries: IndexMap<String, V>,
    capacity: usize,
}

impl<V: Clone> MemoCache<V> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MemoCache {
            entries: IndexMap::new(),
            capacity,
        }
    }

    /// Returns a clone of the cached value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).cloned()
    }

    /// Stores `value` under `key`, evicting the oldest entry when full.
    pub fn insert(&mut self, key: String, value: V) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(key, value);
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with(&mut self, key: String, compute: impl FnOnce() -> V) -> V {
        if let Some(hit) = self.entries.get(&key) {
            return hit.clone();
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V: Clone> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a memoized version of a pure function.
///
/// The standalone counterpart of the converter's internal cache: wraps any
/// function whose argument tuple implements [`MemoArgs`], computing once per
/// distinct key and returning the cached clone afterwards.
pub fn cached<A, V, F>(f: F) -> impl FnMut(&A) -> V
where
    A: MemoArgs,
    V: Clone,
    F: Fn(&A) -> V,
{
    let mut cache = MemoCache::new();
    move |args: &A| {
        let key = args.memo_key();
        cache.get_or_insert_with(key, || f(args))
    }
}
