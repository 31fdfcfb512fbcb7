//! Caller-owned memoization of allocation passes
//!
//! The engine itself is a pure function and holds no cache. Applications
//! that recompute the same groups repeatedly (for example on every dashboard
//! request) can keep an `AllocationCache` keyed by the full input: the
//! subdivision names and counts, the budget, the unit capacity and the
//! obtainable fraction. Identical inputs always produce identical output,
//! so a hit can be returned as-is.

use portshare_types::{AllocationParams, SubdivisionInput, SubdivisionRecord};
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::engine::allocate;
use crate::error::PortshareResult;

/// Cache key covering every input that can change an allocation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocationCacheKey {
    input_hash: u64,
    total_budget: i64,
    unit_capacity: i64,
    /// Bit pattern of the fraction, for consistent float hashing
    fraction_bits: u64,
}

impl AllocationCacheKey {
    /// Builds the key for one allocation pass.
    pub fn new(records: &[SubdivisionInput], params: &AllocationParams) -> Self {
        let mut hasher = DefaultHasher::new();
        records.len().hash(&mut hasher);
        for record in records {
            record.name.hash(&mut hasher);
            record.homepass.hash(&mut hasher);
        }
        Self {
            input_hash: hasher.finish(),
            total_budget: params.total_budget,
            unit_capacity: params.unit_capacity,
            fraction_bits: params.obtainable_fraction.to_bits(),
        }
    }
}

/// LRU-evicting memoization of fully-populated allocation results.
#[derive(Debug)]
pub struct AllocationCache {
    capacity: usize,
    map: HashMap<AllocationCacheKey, (Vec<SubdivisionRecord>, u64)>,
    access_counter: u64,
    hits: u64,
    misses: u64,
}

impl AllocationCache {
    /// Creates a cache holding at most `capacity` allocation results.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            access_counter: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Runs an allocation pass, serving a cached result when the exact same
    /// inputs were seen before. Errors are never cached.
    pub fn allocate_cached(
        &mut self,
        records: &[SubdivisionInput],
        params: &AllocationParams,
    ) -> PortshareResult<Vec<SubdivisionRecord>> {
        let key = AllocationCacheKey::new(records, params);
        if let Some(cached) = self.get(&key).cloned() {
            return Ok(cached);
        }
        let result = allocate(records, params)?;
        self.put(key, result.clone());
        Ok(result)
    }

    /// Looks up a cached result, refreshing its access time.
    pub fn get(&mut self, key: &AllocationCacheKey) -> Option<&Vec<SubdivisionRecord>> {
        self.access_counter += 1;
        match self.map.get_mut(key) {
            Some((records, stamp)) => {
                *stamp = self.access_counter;
                self.hits += 1;
                Some(&*records)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Inserts a result, evicting the least recently used entry at capacity.
    pub fn put(&mut self, key: AllocationCacheKey, records: Vec<SubdivisionRecord>) {
        if self.capacity == 0 {
            return;
        }
        self.access_counter += 1;
        if self.map.len() >= self.capacity && !self.map.contains_key(&key) {
            self.evict_lru();
        }
        self.map.insert(key, (records, self.access_counter));
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drops every cached result and resets the statistics.
    pub fn clear(&mut self) {
        self.map.clear();
        self.access_counter = 0;
        self.hits = 0;
        self.misses = 0;
    }

    /// Hit/miss statistics since creation or the last `clear`.
    pub fn stats(&self) -> CacheStats {
        CacheStats { capacity: self.capacity, size: self.map.len(), hits: self.hits, misses: self.misses }
    }

    fn evict_lru(&mut self) {
        let lru = self
            .map
            .iter()
            .min_by_key(|(_, (_, stamp))| *stamp)
            .map(|(key, _)| *key);
        if let Some(key) = lru {
            self.map.remove(&key);
        }
    }
}

/// Cache usage statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Maximum number of entries
    pub capacity: usize,
    /// Current number of entries
    pub size: usize,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that fell through to the engine
    pub misses: u64,
}
