//! # lrucache
//!
//! Fixed-capacity key-value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to node slot (O(1))
//! - **LRU List**: Doubly-linked list of slots, most recent at the head (O(1))
//! - **Shared handle**: Optional mutex-guarded wrapper with hit/miss statistics
//!
//! ```
//! use lrucache::LruCache;
//!
//! let mut cache = LruCache::new(2)?;
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");
//! cache.put("c", 3); // evicts "b"
//!
//! assert_eq!(cache.peek(&"b"), None);
//! assert_eq!(cache.size(), 2);
//! # Ok::<(), lrucache::Error>(())
//! ```

#![warn(missing_docs)]

mod error;
mod lru;
mod shared;
mod stats;

pub use error::{Error, Result};
pub use lru::{Iter, LruCache};
pub use shared::SharedLruCache;
pub use stats::{CacheStats, StatsSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_scenario() {
        let mut cache = LruCache::new(3).unwrap();
        for i in 0..5 {
            cache.put(i, i);
        }

        assert_eq!(cache.get(&2), Some(&2));
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&0), None);
    }

    #[test]
    fn test_promotion_scenario() {
        let mut cache = LruCache::new(3).unwrap();
        for i in 0..3 {
            cache.put(i, i);
        }
        cache.get(&0);
        cache.put(3, 3);

        assert_eq!(cache.peek(&0), Some(&0));
        assert_eq!(cache.peek(&1), None);
    }

    #[test]
    fn test_remove_scenario() {
        let mut cache = LruCache::new(1).unwrap();
        cache.put(1, 1);
        cache.remove(&1);

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_error_propagates() {
        fn build(capacity: usize) -> Result<LruCache<String, String>> {
            let cache = LruCache::new(capacity)?;
            Ok(cache)
        }

        assert!(build(4).is_ok());
        assert_eq!(build(0).err(), Some(Error::InvalidCapacity(0)));
    }
}
