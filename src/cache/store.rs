//! Memory Cache Module
//!
//! Concurrent key-value store with per-entry TTL. Expired entries are
//! evicted lazily on read and proactively by [`MemoryCache::cleanup_expired`],
//! which an external scheduler is expected to call periodically.

use std::time::Duration;

use dashmap::DashMap;

use crate::cache::CacheEntry;

// == Memory Cache ==
/// Thread-safe expiring cache, generic over a single value type.
///
/// Backed by a sharded concurrent map, so operations on different keys do
/// not contend on one global lock, and whole-cache operations (`clear`,
/// `cleanup_expired`) hold at most one shard lock at a time.
///
/// The cache never spawns threads or timers of its own; to bound memory
/// growth from keys that are never re-read, drive `cleanup_expired` from a
/// periodic task.
#[derive(Debug)]
pub struct MemoryCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<V: Clone> MemoryCache<V> {
    // == Constructor ==
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Set ==
    /// Stores `value` under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any existing entry for the key, replacing both value and
    /// expiry. A zero TTL is permitted and yields an entry that is already
    /// expired. The entry is visible to concurrent readers as soon as the
    /// call returns.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.entries.insert(key.into(), CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Looks up `key`, returning the value if present and not expired.
    ///
    /// An expired entry is removed as a side effect and reported as absent.
    /// The removal re-checks the expiry predicate, so an entry refreshed by
    /// a concurrent `set` between the read and the eviction is kept.
    pub fn get(&self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            Some(entry) => {
                // Guard must be released before mutating the map.
                drop(entry);
                self.entries.remove_if(key, |_, e| e.is_expired());
                None
            }
            None => None,
        }
    }

    // == Delete ==
    /// Removes the entry for `key`; absent keys are a no-op.
    pub fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    // == Clear ==
    /// Removes all entries.
    ///
    /// Not atomic with respect to concurrent `set` calls; each entry
    /// removal is an independent step.
    pub fn clear(&self) {
        self.entries.clear();
    }

    // == Cleanup Expired ==
    /// Sweeps the cache, evicting every entry whose deadline has passed.
    ///
    /// Idempotent and safe to run concurrently with any other operation.
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            if entry.is_expired() {
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    // == Length ==
    /// Current number of entries, including any not yet swept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::thread::sleep;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_cache_new_is_empty() {
        let cache: MemoryCache<String> = MemoryCache::new();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_set_and_get_roundtrip() {
        let cache = MemoryCache::new();

        cache.set("key1", "value1".to_string(), TTL);

        assert_eq!(cache.get("key1"), Some("value1".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_missing_key() {
        let cache: MemoryCache<String> = MemoryCache::new();

        assert_eq!(cache.get("nonexistent"), None);
    }

    #[test]
    fn test_set_overwrites_value_and_ttl() {
        let cache = MemoryCache::new();

        cache.set("key1", "value1".to_string(), TTL);
        cache.set("key1", "value2".to_string(), TTL);

        assert_eq!(cache.get("key1"), Some("value2".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_evicted_on_get() {
        let cache = MemoryCache::new();

        cache.set("key1", "value1".to_string(), Duration::from_millis(1));
        sleep(Duration::from_millis(10));

        assert_eq!(cache.get("key1"), None);
        // Lazy eviction removed the entry, not just hid it.
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let cache = MemoryCache::new();

        cache.set("key1", "value1".to_string(), Duration::ZERO);

        assert_eq!(cache.get("key1"), None);
    }

    #[test]
    fn test_delete_removes_entry() {
        let cache = MemoryCache::new();

        cache.set("key1", "value1".to_string(), TTL);
        cache.delete("key1");

        assert!(cache.is_empty());
        assert_eq!(cache.get("key1"), None);
    }

    #[test]
    fn test_delete_absent_key_is_noop() {
        let cache = MemoryCache::new();
        cache.set("other", "value".to_string(), TTL);

        cache.delete("nonexistent");
        cache.delete("nonexistent");

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = MemoryCache::new();

        for i in 0..10 {
            cache.set(format!("key{i}"), i, TTL);
        }
        cache.clear();

        assert!(cache.is_empty());
        for i in 0..10 {
            assert_eq!(cache.get(&format!("key{i}")), None);
        }
    }

    #[test]
    fn test_cleanup_expired_removes_only_expired() {
        let cache = MemoryCache::new();

        cache.set("dead1", "value".to_string(), Duration::from_millis(1));
        cache.set("dead2", "value".to_string(), Duration::from_millis(1));
        cache.set("alive", "value".to_string(), TTL);

        sleep(Duration::from_millis(10));

        let removed = cache.cleanup_expired();
        assert_eq!(removed, 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("alive"), Some("value".to_string()));
    }

    #[test]
    fn test_cleanup_expired_is_idempotent() {
        let cache = MemoryCache::new();

        cache.set("dead", "value".to_string(), Duration::ZERO);
        sleep(Duration::from_millis(5));

        assert_eq!(cache.cleanup_expired(), 1);
        assert_eq!(cache.cleanup_expired(), 0);
    }

    #[test]
    fn test_concurrent_operations_never_tear_entries() {
        const THREADS: usize = 8;
        const OPS: usize = 10_000;
        const KEYSPACE: usize = 32;

        let cache: Arc<MemoryCache<String>> = Arc::new(MemoryCache::new());

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    for i in 0..OPS {
                        let key = format!("key{}", (t + i) % KEYSPACE);
                        match i % 3 {
                            // Value mirrors the key, so any successful read
                            // can be validated against corruption.
                            0 => cache.set(key.clone(), key.clone(), TTL),
                            1 => {
                                if let Some(value) = cache.get(&key) {
                                    assert_eq!(value, key);
                                }
                            }
                            _ => cache.delete(&key),
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
