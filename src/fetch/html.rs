// Paragraph text extraction — pull readable content out of raw HTML.
//
// Deliberately minimal: on the article-style pages this tool targets,
// the body copy lives in <p> elements. Navigation, scripts, and other
// boilerplate live outside them and are ignored wholesale.

use scraper::{Html, Selector};

/// Extract whitespace-normalized text from every `<p>` element, joined
/// with newlines. Returns an empty string when the page has no paragraph
/// text at all.
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("p").expect("p selector is valid");

    let mut paragraphs = Vec::new();
    for element in document.select(&selector) {
        let raw = element.text().collect::<Vec<_>>().join(" ");
        let text = normalize_whitespace(&raw);
        if !text.is_empty() {
            paragraphs.push(text);
        }
    }

    paragraphs.join("\n")
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_paragraphs_only() {
        let html = r#"
        <html><body>
          <nav><a href="/">Home</a></nav>
          <h1>Title</h1>
          <p>First paragraph.</p>
          <p>Second   paragraph with    extra spaces.</p>
          <script>var x = "not content";</script>
        </body></html>
        "#;

        let text = paragraph_text(html);
        assert_eq!(text, "First paragraph.\nSecond paragraph with extra spaces.");
        assert!(!text.contains("Home"));
        assert!(!text.contains("Title"));
        assert!(!text.contains("not content"));
    }

    #[test]
    fn nested_markup_inside_paragraphs_is_flattened() {
        let html = "<p>Rust <em>ownership</em> and <code>borrowing</code></p>";
        assert_eq!(paragraph_text(html), "Rust ownership and borrowing");
    }

    #[test]
    fn page_without_paragraphs_yields_empty() {
        let html = "<html><body><div>only divs here</div></body></html>";
        assert_eq!(paragraph_text(html), "");
    }

    #[test]
    fn empty_paragraphs_are_skipped() {
        let html = "<p>  </p><p>real text</p><p></p>";
        assert_eq!(paragraph_text(html), "real text");
    }
}
