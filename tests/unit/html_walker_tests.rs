/*!
 * Tests for the HTML text-node walker
 */

use weblingo::translation::html::rewrite_text_nodes;

#[test]
fn test_rewriteTextNodes_withSimpleFragment_shouldTransformTextOnly() {
    let html = "<p>hello <b>world</b></p>";

    let result = rewrite_text_nodes(html, &mut |text| text.to_uppercase()).unwrap();

    assert_eq!(result, "<p>HELLO <b>WORLD</b></p>");
}

#[test]
fn test_rewriteTextNodes_shouldNotEmitDocumentWrapper() {
    let result = rewrite_text_nodes("<p>hi</p>", &mut |text| text.to_string()).unwrap();

    assert_eq!(result, "<p>hi</p>");
    assert!(!result.contains("<html"));
    assert!(!result.contains("<body"));
    assert!(!result.contains("<head"));
    assert!(!result.contains("DOCTYPE"));
}

#[test]
fn test_rewriteTextNodes_withScriptAndStyle_shouldSkipTheirPayloads() {
    let html = "<p>text</p><script>var a = 'text';</script><style>p { color: red }</style>";

    let result = rewrite_text_nodes(html, &mut |text| text.to_uppercase()).unwrap();

    assert!(result.contains("<p>TEXT</p>"));
    assert!(result.contains("var a = 'text';"));
    assert!(result.contains("p { color: red }"));
}

#[test]
fn test_rewriteTextNodes_withAttributes_shouldLeaveThemUntouched() {
    let html = "<a href=\"/cat\" title=\"cat\">cat</a>";

    let result = rewrite_text_nodes(html, &mut |text| text.replace("cat", "dog")).unwrap();

    assert!(result.contains("href=\"/cat\""));
    assert!(result.contains("title=\"cat\""));
    assert!(result.contains(">dog</a>"));
}

#[test]
fn test_rewriteTextNodes_withMalformedHtml_shouldDegradeGracefully() {
    // Unclosed tags and a stray close tag; the parser recovers best-effort
    let html = "<div><p>first<p>second</div></span>";

    let result = rewrite_text_nodes(html, &mut |text| text.to_uppercase()).unwrap();

    assert!(result.contains("FIRST"));
    assert!(result.contains("SECOND"));
}

#[test]
fn test_rewriteTextNodes_withUnicodeText_shouldRoundTripLosslessly() {
    // RTL text plus combining characters
    let html = "<p>שלום עולם</p><p>e\u{301}toile</p>";

    let result = rewrite_text_nodes(html, &mut |text| text.to_string()).unwrap();

    assert!(result.contains("שלום עולם"));
    assert!(result.contains("e\u{301}toile"));
}

#[test]
fn test_rewriteTextNodes_shouldVisitNodesInDocumentOrder() {
    let html = "<p>one</p><div>two<span>three</span>four</div>";
    let mut visited: Vec<String> = Vec::new();

    rewrite_text_nodes(html, &mut |text| {
        visited.push(text.to_string());
        text.to_string()
    })
    .unwrap();

    assert_eq!(visited, vec!["one", "two", "three", "four"]);
}

#[test]
fn test_rewriteTextNodes_withPlainText_shouldPassThrough() {
    let result = rewrite_text_nodes("just words", &mut |text| text.to_uppercase()).unwrap();

    assert_eq!(result, "JUST WORDS");
}
