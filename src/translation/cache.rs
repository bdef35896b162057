/*!
 * Content-fingerprinted memoization of finished translations.
 *
 * Every successful translation is stored under a digest of the request
 * tuple, so identical content never pays for a second backend call. This is
 * a correctness cache, not a working-set cache: entries never expire and
 * are only removed by an explicit bulk purge. Changed source content gets a
 * new fingerprint, so staleness takes care of itself.
 */

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use crate::errors::StoreError;
use crate::store::KeyValueStore;

use super::TextFormat;

/// Namespace prefix for cache keys in the shared key-value store
///
/// Purging deletes exactly the keys under this prefix; everything else the
/// host keeps in the same store is out of reach.
pub const CACHE_KEY_PREFIX: &str = "weblingo:trc:";

/// Compute the store key for a request tuple
///
/// Sha256 over the length-prefixed fields, so no combination of field
/// values can collide by concatenation. The backend id is part of the
/// tuple: two backends translating the same text do not share entries.
pub fn cache_key(
    text: &str,
    source: &str,
    target: &str,
    format: TextFormat,
    backend_id: &str,
) -> String {
    let mut hasher = Sha256::new();
    for field in [text, source, target, format.wire_value(), backend_id] {
        hasher.update((field.len() as u64).to_be_bytes());
        hasher.update(field.as_bytes());
    }
    format!("{}{:x}", CACHE_KEY_PREFIX, hasher.finalize())
}

/// Translation cache over the host-supplied key-value store
pub struct FingerprintCache {
    /// Backing store
    store: Arc<dyn KeyValueStore>,

    /// Cache hit counter
    hits: RwLock<usize>,

    /// Cache miss counter
    misses: RwLock<usize>,
}

impl FingerprintCache {
    /// Create a cache over the given store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            hits: RwLock::new(0),
            misses: RwLock::new(0),
        }
    }

    /// Fetch the translation stored under `key`
    ///
    /// A store failure is treated as a miss; the worst case is one
    /// redundant backend call.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(Some(translation)) => {
                let mut hits = self.hits.write();
                *hits += 1;
                debug!("Cache hit for {}", truncate_key(key));
                Some(translation)
            }
            Ok(None) => {
                let mut misses = self.misses.write();
                *misses += 1;
                debug!("Cache miss for {}", truncate_key(key));
                None
            }
            Err(e) => {
                warn!("Cache read failed for {}: {}", truncate_key(key), e);
                None
            }
        }
    }

    /// Store a finished translation under `key`
    ///
    /// Writes are idempotent (the same key always carries the same value),
    /// so a failed or racing write costs only a future backend call.
    pub fn put(&self, key: &str, translation: &str) {
        if let Err(e) = self.store.set(key, translation) {
            warn!("Cache write failed for {}: {}", truncate_key(key), e);
        } else {
            debug!("Cached translation under {}", truncate_key(key));
        }
    }

    /// Remove every cache entry, returning how many were removed
    pub fn purge_all(&self) -> Result<usize, StoreError> {
        let removed = self.store.delete_by_prefix(CACHE_KEY_PREFIX)?;
        debug!("Purged {} cached translations", removed);
        Ok(removed)
    }

    /// Get cache statistics as (hits, misses, hit rate)
    pub fn stats(&self) -> (usize, usize, f64) {
        let hits = *self.hits.read();
        let misses = *self.misses.read();
        let total = hits + misses;

        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };

        (hits, misses, hit_rate)
    }
}

/// Shorten a cache key for log lines
fn truncate_key(key: &str) -> &str {
    let cut = CACHE_KEY_PREFIX.len() + 12;
    if key.len() > cut && key.is_char_boundary(cut) {
        &key[..cut]
    } else {
        key
    }
}
