/*!
 * Common test utilities for the weblingo test suite
 */


use weblingo::app_config::Config;

/// A configuration suitable for tests: English source, a small set of
/// enabled target languages, no excluded words.
pub fn test_config() -> Config {
    Config {
        source_language: "en".to_string(),
        enabled_languages: vec![
            "en".to_string(),
            "fr".to_string(),
            "de".to_string(),
            "it".to_string(),
        ],
        excluded_words: Vec::new(),
        ..Config::default()
    }
}

/// Same as `test_config` but with excluded words configured
pub fn test_config_with_excluded_words(words: &[&str]) -> Config {
    Config {
        excluded_words: words.iter().map(|w| (*w).to_string()).collect(),
        ..test_config()
    }
}
