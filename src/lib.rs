/*!
 * # weblingo - On-the-fly web content translation
 *
 * A Rust library for translating rendered web page content through an
 * external translation backend, without damaging words that must never be
 * translated and without paying for the same content twice.
 *
 * ## Features
 *
 * - Mask configured words behind placeholder tokens that survive a
 *   translation round trip, and restore them afterwards
 * - Walk HTML fragments and translate only visible text, leaving tags,
 *   attributes, scripts and styles untouched
 * - Memoize finished translations by content fingerprint in a pluggable
 *   key-value store (in-memory and SQLite stores included)
 * - Talk to several translation backends behind one interface:
 *   - LibreTranslate (self-hosted engine)
 *   - Google (unofficial free endpoint)
 *   - Google Cloud Translation v2 (official API)
 * - Degrade every failure to "return the original text", safe to call
 *   from hot rendering paths
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: The content-safe translation pipeline:
 *   - `translation::core`: Orchestrator and the `translate` entry point
 *   - `translation::cache`: Content-fingerprinted memoization
 *   - `translation::masking`: Excluded-word masking and restoration
 *   - `translation::html`: HTML text-node walker
 * - `providers`: Client implementations for the translation backends
 * - `store`: Key-value persistence behind the cache
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Public modules
pub mod app_config;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod store;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{BackendKind, Config};
pub use errors::{BackendError, StoreError, WalkerError};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
pub use translation::{SoftFailure, TextFormat, TranslationRequest, Translator};
