/*!
 * Excluded-word masking and restoration.
 *
 * Before content goes to a translation backend, every configured excluded
 * word is swapped for a placeholder token the backend has no reason to
 * touch; after the response comes back the tokens are swapped back for the
 * original words. Matching is case-insensitive and bounded by Unicode
 * letters, so "cat" never matches inside "category" but does match next to
 * digits or punctuation.
 */

use std::collections::HashMap;

use log::warn;
use regex::{NoExpand, Regex};
use sha2::{Digest, Sha256};

use super::html;
use super::TextFormat;

/// Mapping from placeholder token to the excluded word's configured surface form
///
/// Tokens are a deterministic function of the word alone, so every occurrence
/// of one word shares one token and one map entry.
pub type PlaceholderMap = HashMap<String, String>;

/// An excluded word prepared for matching
struct PreparedTerm {
    /// The word exactly as configured; restored verbatim on unmask
    surface: String,
    /// Case-insensitive literal pattern for the word
    pattern: Regex,
    /// Placeholder token substituted for every occurrence
    token: String,
}

/// Masks excluded words behind placeholder tokens and restores them
///
/// Built once from the configured word list; `mask` and `unmask` are pure
/// string transformations with no I/O.
pub struct Masker {
    /// Prepared terms, longest first so overlapping words resolve to the
    /// longest match
    terms: Vec<PreparedTerm>,
}

impl Masker {
    /// Prepare a masker from the raw configured word list
    ///
    /// Entries are trimmed; blank entries are dropped. Longer words are
    /// processed before shorter ones, original list order breaking ties, so
    /// a list containing both "New York" and "York" masks "New York" as one
    /// unit.
    pub fn new(raw_terms: &[String]) -> Self {
        let mut cleaned: Vec<&str> = raw_terms
            .iter()
            .map(|term| term.trim())
            .filter(|term| !term.is_empty())
            .collect();
        cleaned.sort_by_key(|term| std::cmp::Reverse(term.chars().count()));

        let terms = cleaned
            .into_iter()
            .filter_map(|term| match term_pattern(term) {
                Ok(pattern) => Some(PreparedTerm {
                    surface: term.to_string(),
                    pattern,
                    token: placeholder_token(term),
                }),
                Err(e) => {
                    warn!("Skipping unusable excluded word '{}': {}", term, e);
                    None
                }
            })
            .collect();

        Self { terms }
    }

    /// Whether there is anything to mask at all
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Replace excluded words in `content` with placeholder tokens
    ///
    /// In `Text` format the whole string is scanned. In `Html` format only
    /// text-node content is scanned, so a word appearing in a tag name or an
    /// attribute value is left alone. Returns the masked content and the
    /// placeholder map needed to undo the substitution; content without any
    /// matching word comes back unchanged with an empty map.
    pub fn mask(&self, content: &str, format: TextFormat) -> (String, PlaceholderMap) {
        let mut placeholders = PlaceholderMap::new();

        if self.is_empty() {
            return (content.to_string(), placeholders);
        }

        let masked = match format {
            TextFormat::Text => self.mask_fragment(content, &mut placeholders),
            TextFormat::Html => {
                let walked = html::rewrite_text_nodes(content, &mut |text| {
                    self.mask_fragment(text, &mut placeholders)
                });
                match walked {
                    Ok(masked) => masked,
                    Err(e) => {
                        // Fall back to masking the raw string as opaque text
                        warn!("HTML walk failed, masking content as plain text: {}", e);
                        placeholders.clear();
                        self.mask_fragment(content, &mut placeholders)
                    }
                }
            }
        };

        (masked, placeholders)
    }

    /// Mask one flat string, recording used tokens in `placeholders`
    fn mask_fragment(&self, text: &str, placeholders: &mut PlaceholderMap) -> String {
        let mut current = text.to_string();

        for term in &self.terms {
            if let Some(masked) = substitute_term(&current, term) {
                current = masked;
                // First registration wins; colliding tokens for
                // case-insensitively equal entries resolve to one mapping.
                placeholders
                    .entry(term.token.clone())
                    .or_insert_with(|| term.surface.clone());
            }
        }

        current
    }

    /// Restore excluded words in translated content
    ///
    /// Every case-insensitive occurrence of each token is replaced with the
    /// word's configured surface form. Backends are known to re-case tokens,
    /// so the lookup tolerates that while the restoration does not re-derive
    /// or re-case anything.
    pub fn unmask(content: &str, placeholders: &PlaceholderMap) -> String {
        let mut current = content.to_string();

        for (token, surface) in placeholders {
            match Regex::new(&format!("(?i){}", regex::escape(token))) {
                Ok(pattern) => {
                    current = pattern
                        .replace_all(&current, NoExpand(surface))
                        .into_owned();
                }
                Err(e) => warn!("Skipping unusable placeholder '{}': {}", token, e),
            }
        }

        current
    }
}

/// Generate the placeholder token for an excluded word
///
/// Deterministic over the case-folded word, so repeated occurrences and
/// re-cased duplicates collapse to one token. The shape (uppercase
/// alphanumerics between underscores, no spaces or fixable punctuation)
/// is one translation engines pass through unmodified.
pub fn placeholder_token(term: &str) -> String {
    let digest = Sha256::digest(term.to_lowercase().as_bytes());
    format!(
        "_XLW{:02X}{:02X}{:02X}{:02X}_",
        digest[0], digest[1], digest[2], digest[3]
    )
}

/// Case-insensitive literal pattern for a term
fn term_pattern(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("(?i){}", regex::escape(term)))
}

/// Replace boundary-valid occurrences of one term, or None if none matched
///
/// The regex crate has no lookaround, so the Unicode-letter boundary rule is
/// enforced here: a candidate match is dropped when the code point
/// immediately before or after it is alphabetic.
fn substitute_term(text: &str, term: &PreparedTerm) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    let mut replaced = false;

    for m in term.pattern.find_iter(text) {
        if preceded_by_letter(text, m.start()) || followed_by_letter(text, m.end()) {
            continue;
        }
        result.push_str(&text[last_end..m.start()]);
        result.push_str(&term.token);
        last_end = m.end();
        replaced = true;
    }

    if !replaced {
        return None;
    }

    result.push_str(&text[last_end..]);
    Some(result)
}

fn preceded_by_letter(text: &str, index: usize) -> bool {
    text[..index]
        .chars()
        .next_back()
        .is_some_and(char::is_alphabetic)
}

fn followed_by_letter(text: &str, index: usize) -> bool {
    text[index..].chars().next().is_some_and(char::is_alphabetic)
}
