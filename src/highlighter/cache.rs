//! Rendered-output cache
//!
//! Bounded map from render inputs to finished [`HighlightResult`]s. Entries
//! leave in insertion order by default; the LRU policy instead refreshes an
//! entry's position on every hit.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::HighlightResult;

/// Default number of cached renders
pub const DEFAULT_CACHE_SIZE: usize = 100;

/// Which entry to drop when the cache is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionPolicy {
    /// Oldest insertion goes first; hits do not refresh
    #[default]
    Fifo,
    /// Least recently used goes first
    Lru,
}

/// Everything a rendered result depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Content fingerprint of the resolved theme
    pub theme: u64,
    pub line_numbers: bool,
    pub wrap_lines: bool,
    pub semantic: bool,
    pub tab_size: Option<usize>,
    /// Hash of the source text
    pub source: u64,
}

/// Hash source text for a [`CacheKey`]
pub fn source_hash(source: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}

struct CacheEntry {
    /// Kept to rule out hash collisions
    source: String,
    result: HighlightResult,
}

/// Bounded result cache
pub struct HighlightCache {
    entries: HashMap<CacheKey, CacheEntry>,
    /// Eviction order, front leaves first
    order: VecDeque<CacheKey>,
    capacity: usize,
    policy: EvictionPolicy,
}

impl HighlightCache {
    /// Create an empty cache; a capacity of 0 disables caching
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            capacity,
            policy,
        }
    }

    /// Look up a render, counting the hit on the stored entry
    ///
    /// Returns a copy whose `cache_hits` includes this hit.
    pub fn lookup(&mut self, key: &CacheKey, source: &str) -> Option<HighlightResult> {
        let Some(entry) = self.entries.get_mut(key) else {
            debug!("highlight cache miss");
            return None;
        };
        if entry.source != source {
            debug!("highlight cache hash collision, treating as miss");
            return None;
        }

        entry.result.stats.cache_hits += 1;
        let result = entry.result.clone();

        if self.policy == EvictionPolicy::Lru {
            self.touch(key);
        }
        debug!(hits = result.stats.cache_hits, "highlight cache hit");
        Some(result)
    }

    /// Store a render, evicting if the cache is full
    pub fn insert(&mut self, key: CacheKey, source: &str, result: HighlightResult) {
        if self.capacity == 0 {
            return;
        }

        let entry = CacheEntry {
            source: source.to_string(),
            result,
        };
        if self.entries.insert(key, entry).is_some() {
            // Replaced a colliding entry in place
            if self.policy == EvictionPolicy::Lru {
                self.touch(&key);
            }
            return;
        }

        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                debug!(policy = ?self.policy, "highlight cache evicted entry");
            }
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(entries = self.entries.len(), "highlight cache cleared");
        }
        self.entries.clear();
        self.order.clear();
    }

    /// Move a key to the back of the eviction order
    fn touch(&mut self, key: &CacheKey) {
        if let Some(pos) = self.order.iter().position(|k| k == key) {
            self.order.remove(pos);
            self.order.push_back(*key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE, EvictionPolicy::default())
    }
}
