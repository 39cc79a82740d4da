//! Thread-shareable handle around [`LruCache`]

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cloneable, lock-guarded LRU cache
///
/// Every operation takes the lock for its whole duration, so callers on
/// different threads always observe a consistent cache. Values are cloned
/// out because no reference may outlive the lock.
pub struct SharedLruCache<K, V> {
    /// The guarded cache
    cache: Arc<Mutex<LruCache<K, V>>>,

    /// Hit/miss/eviction counters
    stats: Arc<CacheStats>,

    /// Cache capacity
    capacity: usize,
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
            capacity: self.capacity,
        }
    }
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries, at least 1
    ///
    /// # Returns
    /// * `Result<SharedLruCache>` - Fails with `InvalidCapacity` for 0
    pub fn new(capacity: usize) -> Result<Self> {
        let cache = LruCache::new(capacity)?;

        Ok(Self {
            cache: Arc::new(Mutex::new(cache)),
            stats: Arc::new(CacheStats::new()),
            capacity,
        })
    }

    /// Get a copy of a value, marking it most recently used
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.cache.lock();
        match cache.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Get a copy of a value without changing the recency order
    pub fn peek(&self, key: &K) -> Option<V> {
        self.cache.lock().peek(key).cloned()
    }

    /// Insert or update a value
    ///
    /// # Returns
    /// * The entry evicted to make room, if any
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        let mut cache = self.cache.lock();
        let is_new = !cache.contains(&key);
        let evicted = cache.put(key, value);

        if is_new {
            self.stats.record_insert();
        }
        if evicted.is_some() {
            self.stats.record_eviction();
        }

        evicted
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&self, key: &K) -> Option<V> {
        self.cache.lock().remove(key)
    }

    /// Drop all entries and reset statistics
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
        self.stats.reset();
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get current number of entries
    pub fn size(&self) -> usize {
        self.cache.lock().size()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
