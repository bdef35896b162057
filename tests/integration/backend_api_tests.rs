/*!
 * Live backend integration tests.
 *
 * These hit real services and are ignored by default; run them with
 * `cargo test -- --ignored` against a local LibreTranslate instance or
 * with network access to the public endpoint.
 */

use std::time::Duration;

use weblingo::providers::google_free::GoogleFree;
use weblingo::providers::libretranslate::LibreTranslate;
use weblingo::providers::TranslationBackend;
use weblingo::translation::TextFormat;

#[tokio::test]
#[ignore] // Requires a LibreTranslate instance on localhost:5000
async fn test_libretranslate_liveTranslation_shouldReturnText() {
    let backend = LibreTranslate::new(
        "http://localhost:5000/translate",
        "",
        Duration::from_secs(120),
    );

    let result = backend
        .translate("Hello, world!", "en", "fr", TextFormat::Text)
        .await
        .expect("LibreTranslate call failed");

    assert!(!result.is_empty());
}

#[tokio::test]
#[ignore] // Requires network access to the public endpoint
async fn test_googleFree_liveTranslation_shouldReturnText() {
    let backend = GoogleFree::new(Duration::from_secs(120));

    let result = backend
        .translate("Hello, world!", "en", "fr", TextFormat::Text)
        .await
        .expect("Google free endpoint call failed");

    assert!(!result.is_empty());
}

#[tokio::test]
#[ignore] // Requires a LibreTranslate instance on localhost:5000
async fn test_libretranslate_livePlaceholderSurvival_shouldKeepToken() {
    let backend = LibreTranslate::new(
        "http://localhost:5000/translate",
        "",
        Duration::from_secs(120),
    );

    let text = "_XLW1A2B3C4D_ sells software.";
    let result = backend
        .translate(text, "en", "fr", TextFormat::Text)
        .await
        .expect("LibreTranslate call failed");

    assert!(result.to_uppercase().contains("_XLW1A2B3C4D_"));
}
