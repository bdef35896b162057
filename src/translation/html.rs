/*!
 * HTML text-node walker.
 *
 * Parses an HTML fragment into a DOM tree, applies a transform to every
 * visible text node in document order, and serializes the tree back to a
 * fragment. Parsing is best effort (malformed markup degrades, it never
 * fails), and the parser-synthesized `<html>`/`<head>`/`<body>` wrapper is
 * stripped on the way out so the result composes back into surrounding
 * page markup.
 */

use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{StrTendril, TendrilSink};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::WalkerError;

/// Wrapper markup the document-level parser synthesizes around a fragment
static WRAPPER_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<!DOCTYPE[^>]*>|</?(?:html|head|body)[^>]*>")
        .expect("wrapper tag pattern is valid")
});

/// Apply `transform` to every visible text node of `html`
///
/// Visits text nodes in document order, skipping `<script>` and `<style>`
/// payloads; tag names, attributes and attribute values are never touched.
/// The parse tree lives only for the duration of this call.
pub fn rewrite_text_nodes(
    html: &str,
    transform: &mut dyn FnMut(&str) -> String,
) -> Result<String, WalkerError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())?;

    walk(&dom.document, false, transform);

    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = dom.document.into();
    serialize(&mut buf, &serializable, SerializeOpts::default())?;

    let serialized = String::from_utf8_lossy(&buf);
    Ok(WRAPPER_TAGS.replace_all(&serialized, "").into_owned())
}

/// Whether an element's text payload is code rather than page content
fn is_non_text_payload(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style")
}

/// Recursive walk over the tree, rewriting text nodes in place
fn walk(node: &Handle, inside_skipped: bool, transform: &mut dyn FnMut(&str) -> String) {
    match node.data {
        NodeData::Document => {
            for child in node.children.borrow().iter() {
                walk(child, inside_skipped, transform);
            }
        }
        NodeData::Element { ref name, .. } => {
            let skip = inside_skipped || is_non_text_payload(name.local.as_ref());
            for child in node.children.borrow().iter() {
                walk(child, skip, transform);
            }
        }
        NodeData::Text { ref contents } => {
            if !inside_skipped {
                let original = contents.borrow().to_string();
                let rewritten = transform(&original);
                if rewritten != original {
                    *contents.borrow_mut() = StrTendril::from(rewritten.as_str());
                }
            }
        }
        // Comments, doctypes and processing instructions carry no
        // translatable text
        _ => {}
    }
}
