// Copyright (c) 2025 Ala Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Thread-safe wrapper around an Ala Trie.
//!
//! The engines assume a single owner. `SharedTrie` puts the whole tree behind
//! one reader-writer lock: any number of concurrent lookups, one writer at a
//! time. Read methods clone values out so no guard escapes.

use parking_lot::{RwLock, RwLockReadGuard};

use super::error::AlaTrieResult;
use super::AlaTrie;

/// An Ala Trie guarded by a single `RwLock`.
#[derive(Debug, Default)]
pub struct SharedTrie<T> {
    inner: RwLock<T>,
}

impl<T: AlaTrie> SharedTrie<T> {
    /// Wraps `trie` for shared use.
    pub fn new(trie: T) -> Self {
        Self {
            inner: RwLock::new(trie),
        }
    }

    /// Inserts `value` under `key`. See [`AlaTrie::add_word`].
    pub fn add_word(&self, key: &str, value: T::Value) -> AlaTrieResult<bool> {
        self.inner.write().add_word(key, value)
    }

    /// Removes `key`. See [`AlaTrie::remove`].
    pub fn remove(&self, key: &str) -> bool {
        self.inner.write().remove(key)
    }

    /// Removes every key starting with `prefix`. See [`AlaTrie::remove_prefix`].
    pub fn remove_prefix(&self, prefix: &str) -> usize {
        self.inner.write().remove_prefix(prefix)
    }

    /// Whether `key` is stored.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Removes every key.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Locks the trie for reading, for callers that need several lookups
    /// against one consistent snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read()
    }

    /// Unwraps the inner trie.
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T> SharedTrie<T>
where
    T: AlaTrie,
    T::Value: Clone,
{
    /// Returns a copy of the value stored under `key`.
    pub fn translate(&self, key: &str) -> Option<T::Value> {
        self.inner.read().translate(key).cloned()
    }

    /// Returns copies of the values of every key starting with `prefix`.
    pub fn auto_complete(&self, prefix: &str) -> Vec<T::Value> {
        self.inner
            .read()
            .auto_complete(prefix)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns copies of every stored `(key, value)` pair.
    pub fn entries(&self) -> Vec<(String, T::Value)> {
        self.inner
            .read()
            .entries()
            .into_iter()
            .map(|(key, value)| (key, value.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::SparseTrie;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier, Mutex};
    use std::thread;

    /// Tests concurrent operations on the trie with multiple threads inserting,
    /// retrieving, and removing values simultaneously to verify thread safety.
    #[test]
    fn test_trie_concurrency() {
        const THREAD_COUNT: usize = 8;
        const OPS_PER_THREAD: usize = 50;
        const TOTAL_KEYS: usize = THREAD_COUNT * OPS_PER_THREAD;

        let trie = Arc::new(SharedTrie::new(SparseTrie::<String>::new()));
        let start_barrier = Arc::new(Barrier::new(THREAD_COUNT + 1)); // +1 for main thread
        let completion_counter = Arc::new(AtomicUsize::new(0));
        let all_keys = Arc::new(Mutex::new(Vec::with_capacity(TOTAL_KEYS)));

        let mut handles = Vec::with_capacity(THREAD_COUNT);
        for thread_id in 0..THREAD_COUNT {
            let trie_ref = Arc::clone(&trie);
            let barrier = Arc::clone(&start_barrier);
            let counter = Arc::clone(&completion_counter);
            let keys_tracker = Arc::clone(&all_keys);

            let handle = thread::spawn(move || -> Result<usize, String> {
                barrier.wait();

                let mut thread_keys = Vec::with_capacity(OPS_PER_THREAD);
                let mut successful_ops = 0;
                for j in 0..OPS_PER_THREAD {
                    let key = format!("key_{}_{}", thread_id, j);
                    let value = format!("value_{}_{}", thread_id, j);

                    trie_ref
                        .add_word(&key, value.clone())
                        .map_err(|e| format!("Thread {thread_id} insert failed for {key}: {e}"))?;
                    if trie_ref.translate(&key).as_ref() != Some(&value) {
                        return Err(format!("Thread {thread_id} failed to verify key {key}"));
                    }
                    thread_keys.push(key);
                    successful_ops += 1;
                }

                keys_tracker
                    .lock()
                    .map_err(|_| format!("Thread {thread_id} couldn't acquire keys mutex"))?
                    .extend(thread_keys);
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(successful_ops)
            });
            handles.push(handle);
        }

        start_barrier.wait();
        for (i, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(ops)) => assert_eq!(ops, OPS_PER_THREAD),
                Ok(Err(e)) => panic!("Thread {} reported error: {}", i, e),
                Err(e) => panic!("Thread {} panicked: {:?}", i, e),
            }
        }
        assert_eq!(completion_counter.load(Ordering::SeqCst), THREAD_COUNT);
        assert_eq!(trie.len(), TOTAL_KEYS);

        // Remove half the keys while reading the other half
        let inserted = all_keys.lock().unwrap().clone();
        let (remove_keys, read_keys): (Vec<_>, Vec<_>) = inserted
            .into_iter()
            .enumerate()
            .partition(|(i, _)| i % 2 == 0);

        let trie_for_remove = Arc::clone(&trie);
        let remove_thread = thread::spawn(move || {
            for (_, key) in remove_keys {
                assert!(trie_for_remove.remove(&key), "Failed to remove key: {key}");
            }
        });
        let trie_for_read = Arc::clone(&trie);
        let read_thread = thread::spawn(move || {
            for (_, key) in read_keys {
                let expected = key.replacen("key", "value", 1);
                assert_eq!(trie_for_read.translate(&key), Some(expected));
            }
        });

        remove_thread.join().unwrap();
        read_thread.join().unwrap();
        assert_eq!(trie.len(), TOTAL_KEYS / 2);
    }

    #[test]
    fn test_read_guard_and_into_inner() {
        let shared = SharedTrie::new(SparseTrie::new());
        shared.add_word("ab", 1).unwrap();
        shared.add_word("ac", 2).unwrap();

        {
            let guard = shared.read();
            assert_eq!(guard.auto_complete("a"), vec![&1, &2]);
        }
        assert_eq!(shared.auto_complete("a"), vec![1, 2]);
        assert_eq!(shared.entries(), vec![("ab".to_string(), 1), ("ac".to_string(), 2)]);
        assert_eq!(shared.remove_prefix("a"), 2);
        assert!(shared.is_empty());

        let inner = shared.into_inner();
        assert_eq!(inner.node_count(), 1);
    }
}
