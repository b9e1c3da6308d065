//! Content-block extraction from lyrics pages.
//!
//! The lyrics site puts the lyrics in an unmarked `div`, so extraction is
//! heuristic: collect every `div` at any depth and keep the one with the
//! longest inner text. On a real lyrics page that is the lyrics block; on
//! anything else it is at least deterministic.

use scraper::{Html, Selector};

use versebench_core::Error;

/// Tag used to locate candidate content blocks.
pub const CONTAINER_TAG: &str = "div";

/// Extract the trimmed inner text of the longest container element.
///
/// Ties break to the first element in document order. A document with no
/// container elements at all is an explicit [`Error::NoContent`], never a
/// silent empty string; an empty string result means the winning element
/// held only whitespace.
pub fn extract_longest_block(html: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(CONTAINER_TAG)
        .map_err(|e| Error::ExtractFailed(format!("invalid selector {:?}: {}", CONTAINER_TAG, e)))?;

    let mut longest: Option<String> = None;
    for element in document.select(&selector) {
        let text: String = element.text().collect();
        // Strictly greater keeps the first maximal element.
        if longest.as_ref().is_none_or(|best| text.len() > best.len()) {
            longest = Some(text);
        }
    }

    match longest {
        Some(text) => Ok(text.trim().to_string()),
        None => Err(Error::NoContent(format!("no <{}> elements in document", CONTAINER_TAG))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_picks_longest_div() {
        let html = r#"
            <html><body>
                <div>short</div>
                <div>this is the longest block of text on the page</div>
                <div>medium length</div>
            </body></html>
        "#;
        let text = extract_longest_block(html).unwrap();
        assert_eq!(text, "this is the longest block of text on the page");
    }

    #[test]
    fn test_extract_trims_whitespace() {
        let html = "<html><body><div>  lyrics here  \n</div></body></html>";
        assert_eq!(extract_longest_block(html).unwrap(), "lyrics here");
    }

    #[test]
    fn test_extract_no_divs_is_explicit_error() {
        let html = "<html><body><p>no containers at all</p></body></html>";
        let result = extract_longest_block(html);
        assert!(matches!(result, Err(Error::NoContent(_))));
    }

    #[test]
    fn test_extract_not_really_html() {
        // The parser wraps stray text in html/body without any div.
        let result = extract_longest_block("not really html");
        assert!(matches!(result, Err(Error::NoContent(_))));
    }

    #[test]
    fn test_extract_nested_divs_outer_wins() {
        // The outer div's inner text includes the nested div's, so it is
        // always at least as long and comes first in document order.
        let html = r#"
            <html><body>
                <div>prefix <div>nested lyrics text</div> suffix</div>
            </body></html>
        "#;
        let text = extract_longest_block(html).unwrap();
        assert!(text.starts_with("prefix"));
        assert!(text.contains("nested lyrics text"));
        assert!(text.ends_with("suffix"));
    }

    #[test]
    fn test_extract_tie_breaks_to_first() {
        let html = "<html><body><div>aaaa</div><div>bbbb</div></body></html>";
        assert_eq!(extract_longest_block(html).unwrap(), "aaaa");
    }

    #[test]
    fn test_extract_whitespace_only_div_yields_empty() {
        let html = "<html><body><div>   \n\t  </div></body></html>";
        assert_eq!(extract_longest_block(html).unwrap(), "");
    }
}
