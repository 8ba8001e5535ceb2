//! Read-through cache for collection queries.
//!
//! # Design
//! - Entries are keyed by the resource path so writes can invalidate exactly one list.
//! - Data is stored behind `Rc` so renders share the decoded collection without cloning.
//! - Invalidation marks an entry stale but keeps the data for display until the refetch lands.
//! - Each invalidation bumps the key's generation; a fetch that started under an older
//!   generation is stored already invalidated so it can never mask a write.

use serde::de::DeserializeOwned;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Cache key derived from a resource path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    /// Key for a resource path.
    #[must_use]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// Underlying resource path.
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A REST collection whose list response can be cached.
pub trait Resource: 'static {
    /// Record type returned by the list endpoint.
    type Record: DeserializeOwned + Clone + 'static;
    /// Collection path.
    const PATH: &'static str;

    /// Cache key for the collection.
    #[must_use]
    fn key() -> QueryKey {
        QueryKey::new(Self::PATH)
    }
}

struct CacheEntry {
    data: Rc<dyn Any>,
    fetched_at_ms: u64,
    invalidated: bool,
}

/// Cached list results keyed by resource.
pub struct QueryCache {
    stale_ms: u64,
    entries: HashMap<QueryKey, CacheEntry>,
    invalidations: HashMap<QueryKey, u64>,
}

impl QueryCache {
    /// Empty cache serving entries younger than `stale_ms`.
    #[must_use]
    pub fn new(stale_ms: u64) -> Self {
        Self {
            stale_ms,
            entries: HashMap::new(),
            invalidations: HashMap::new(),
        }
    }

    /// Cached records when they are inside the freshness window and not invalidated.
    #[must_use]
    pub fn fresh<R: Resource>(&self, now_ms: u64) -> Option<Rc<Vec<R::Record>>> {
        let entry = self.entries.get(&R::key())?;
        if entry.invalidated || now_ms.saturating_sub(entry.fetched_at_ms) >= self.stale_ms {
            return None;
        }
        downcast::<R>(entry)
    }

    /// Last cached records regardless of freshness.
    #[must_use]
    pub fn peek<R: Resource>(&self) -> Option<Rc<Vec<R::Record>>> {
        self.entries.get(&R::key()).and_then(downcast::<R>)
    }

    /// Current generation for `key`; advances on every invalidation.
    #[must_use]
    pub fn generation(&self, key: QueryKey) -> u64 {
        self.invalidation_count(key)
    }

    /// Record a fetch that started at `generation` and return the shared handle.
    ///
    /// When the key was invalidated while the fetch was in flight the records are kept
    /// for display but the entry stays invalidated.
    pub fn store<R: Resource>(
        &mut self,
        records: Vec<R::Record>,
        now_ms: u64,
        generation: u64,
    ) -> Rc<Vec<R::Record>> {
        let key = R::key();
        let superseded = self.generation(key) != generation;
        let data = Rc::new(records);
        let erased: Rc<dyn Any> = data.clone();
        self.entries.insert(
            key,
            CacheEntry {
                data: erased,
                fetched_at_ms: now_ms,
                invalidated: superseded,
            },
        );
        data
    }

    /// Mark a cached list stale so the next read refetches.
    pub fn invalidate(&mut self, key: QueryKey) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.invalidated = true;
        }
        *self.invalidations.entry(key).or_insert(0) += 1;
    }

    /// Number of times `key` has been invalidated.
    #[must_use]
    pub fn invalidation_count(&self, key: QueryKey) -> u64 {
        self.invalidations.get(&key).copied().unwrap_or(0)
    }

    /// Whether `key` currently holds an invalidated entry.
    #[must_use]
    pub fn is_invalidated(&self, key: QueryKey) -> bool {
        self.entries.get(&key).is_some_and(|entry| entry.invalidated)
    }
}

fn downcast<R: Resource>(entry: &CacheEntry) -> Option<Rc<Vec<R::Record>>> {
    Rc::clone(&entry.data).downcast::<Vec<R::Record>>().ok()
}
