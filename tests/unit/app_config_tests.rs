/*!
 * Tests for configuration handling
 */

use std::str::FromStr;

use weblingo::app_config::{BackendKind, Config};

use crate::common::test_config;

#[test]
fn test_defaultConfig_shouldSelectLibreTranslateWithConventionalEndpoint() {
    let config = Config::default();

    assert_eq!(config.backend.kind, BackendKind::LibreTranslate);
    assert_eq!(
        config.backend.libretranslate_url,
        "http://localhost:5000/translate"
    );
    assert_eq!(config.backend.timeout_secs, 120);
    assert_eq!(config.source_language, "en");
}

#[test]
fn test_defaultConfig_shouldEnableEveryLanguageInTheTable() {
    let config = Config::default();

    assert!(config.is_language_enabled("fr"));
    assert!(config.is_language_enabled("vi"));
    assert!(!config.is_language_enabled("xx"));
}

#[test]
fn test_isLanguageEnabled_shouldNormalizeCaseAndWhitespace() {
    let config = test_config();

    assert!(config.is_language_enabled("FR"));
    assert!(config.is_language_enabled(" fr "));
    assert!(!config.is_language_enabled("ja"));
}

#[test]
fn test_validate_withDefaultConfig_shouldSucceed() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_withGoogleCloudAndNoKey_shouldFail() {
    let mut config = test_config();
    config.backend.kind = BackendKind::GoogleCloud;

    assert!(config.validate().is_err());

    config.backend.google_api_key = "test-api-key".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_withInvalidLanguageCode_shouldFail() {
    let mut config = test_config();
    config.enabled_languages.push("not-a-code".to_string());

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withUnparseableLibreTranslateUrl_shouldFail() {
    let mut config = test_config();
    config.backend.libretranslate_url = "not a url".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_backendKind_fromStrAndDisplay_shouldRoundTrip() {
    for kind in [
        BackendKind::LibreTranslate,
        BackendKind::GoogleFree,
        BackendKind::GoogleCloud,
    ] {
        let parsed = BackendKind::from_str(&kind.to_string()).unwrap();
        assert_eq!(parsed, kind);
    }

    assert!(BackendKind::from_str("deepl").is_err());
}

#[test]
fn test_backendKind_serde_shouldUseLowercaseNames() {
    let value = serde_json::to_value(BackendKind::GoogleFree).unwrap();
    assert_eq!(value, serde_json::json!("googlefree"));

    let parsed: BackendKind = serde_json::from_value(serde_json::json!("libretranslate")).unwrap();
    assert_eq!(parsed, BackendKind::LibreTranslate);
}

#[test]
fn test_configSerde_withMissingFields_shouldFillDefaults() {
    let config: Config = serde_json::from_str("{}").unwrap();

    assert_eq!(config.source_language, "en");
    assert_eq!(config.backend.kind, BackendKind::LibreTranslate);
    assert!(config.excluded_words.is_empty());
}
