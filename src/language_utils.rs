use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for ISO 639-1 language code handling
///
/// The whole pipeline speaks two-letter codes, the same codes the
/// language selector offers to visitors. This module validates them and
/// exposes the table of languages the pipeline knows how to offer.
/// All languages offered by the translation pipeline, as
/// `(code, native name)` pairs in selector display order.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("zh", "Chinese"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("fi", "Finnish"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("el", "Greek"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italiano"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Português"),
    ("ro", "Romanian"),
    ("ru", "Русский"),
    ("sk", "Slovak"),
    ("es", "Español"),
    ("sv", "Swedish"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
];

/// Validate that a language code is a well-formed ISO 639-1 code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 && Language::from_639_1(&normalized_code).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code for comparison and cache keying
///
/// Trims surrounding whitespace and lowercases; does not validate.
pub fn normalize_language_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Check whether two language codes refer to the same language
pub fn language_codes_match(a: &str, b: &str) -> bool {
    normalize_language_code(a) == normalize_language_code(b)
}

/// Look up the display name for a supported language code
pub fn get_language_name(code: &str) -> Option<&'static str> {
    let normalized = normalize_language_code(code);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == normalized)
        .map(|(_, name)| *name)
}

/// Check whether a code is in the supported-language table at all
pub fn is_supported_language(code: &str) -> bool {
    get_language_name(code).is_some()
}
