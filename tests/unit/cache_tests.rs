/*!
 * Tests for the fingerprint cache
 */

use std::sync::Arc;

use weblingo::store::{KeyValueStore, MemoryStore};
use weblingo::translation::cache::{cache_key, FingerprintCache, CACHE_KEY_PREFIX};
use weblingo::translation::TextFormat;

#[test]
fn test_cacheKey_withIdenticalTuples_shouldBeDeterministic() {
    let a = cache_key("hello", "en", "fr", TextFormat::Text, "libretranslate");
    let b = cache_key("hello", "en", "fr", TextFormat::Text, "libretranslate");

    assert_eq!(a, b);
}

#[test]
fn test_cacheKey_withDifferingFields_shouldDiffer() {
    let base = cache_key("hello", "en", "fr", TextFormat::Text, "libretranslate");

    assert_ne!(
        base,
        cache_key("hello!", "en", "fr", TextFormat::Text, "libretranslate")
    );
    assert_ne!(
        base,
        cache_key("hello", "en", "de", TextFormat::Text, "libretranslate")
    );
    assert_ne!(
        base,
        cache_key("hello", "en", "fr", TextFormat::Html, "libretranslate")
    );
    assert_ne!(
        base,
        cache_key("hello", "en", "fr", TextFormat::Text, "googlefree")
    );
}

#[test]
fn test_cacheKey_withShiftedFieldBoundaries_shouldDiffer() {
    // "ab" + "c" must not collide with "a" + "bc"
    let a = cache_key("ab", "c", "fr", TextFormat::Text, "x");
    let b = cache_key("a", "bc", "fr", TextFormat::Text, "x");

    assert_ne!(a, b);
}

#[test]
fn test_cacheKey_shouldCarryNamespacePrefix() {
    let key = cache_key("hello", "en", "fr", TextFormat::Text, "libretranslate");

    assert!(key.starts_with(CACHE_KEY_PREFIX));
}

#[test]
fn test_getAndPut_shouldRoundTripThroughStore() {
    let store = Arc::new(MemoryStore::new());
    let cache = FingerprintCache::new(store);
    let key = cache_key("hello", "en", "fr", TextFormat::Text, "mock");

    assert_eq!(cache.get(&key), None);

    cache.put(&key, "bonjour");
    assert_eq!(cache.get(&key), Some("bonjour".to_string()));
}

#[test]
fn test_purgeAll_shouldOnlyRemoveNamespacedKeys() {
    let store = Arc::new(MemoryStore::new());
    store.set("settings:langs", "en,fr").unwrap();

    let cache = FingerprintCache::new(store.clone());
    cache.put(
        &cache_key("hello", "en", "fr", TextFormat::Text, "mock"),
        "bonjour",
    );
    cache.put(
        &cache_key("world", "en", "fr", TextFormat::Text, "mock"),
        "monde",
    );

    let removed = cache.purge_all().unwrap();

    assert_eq!(removed, 2);
    assert_eq!(
        store.get("settings:langs").unwrap(),
        Some("en,fr".to_string())
    );
}

#[test]
fn test_stats_shouldTrackHitsAndMisses() {
    let store = Arc::new(MemoryStore::new());
    let cache = FingerprintCache::new(store);
    let key = cache_key("hello", "en", "fr", TextFormat::Text, "mock");

    cache.get(&key); // miss
    cache.put(&key, "bonjour");
    cache.get(&key); // hit
    cache.get(&key); // hit

    let (hits, misses, hit_rate) = cache.stats();
    assert_eq!(hits, 2);
    assert_eq!(misses, 1);
    assert!((hit_rate - 2.0 / 3.0).abs() < f64::EPSILON);
}
