//! Markup helpers: tag stripping, entity decoding and index-page link extraction

use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag pattern"))
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<a\b[^>]*>").expect("valid anchor pattern"))
}

fn attribute_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\b(class|href)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("valid attribute pattern")
    })
}

/// Removes every `<...>` tag, leaving the text between them
pub fn strip_tags(input: &str) -> String {
    tag_pattern().replace_all(input, "").into_owned()
}

/// Decodes named and numeric HTML entities (`&amp;`, `&#39;`, ...)
pub fn decode_entities(input: &str) -> String {
    html_escape::decode_html_entities(input).into_owned()
}

/// Converts an HTML fragment into trimmed plain text
///
/// Tags are stripped before entities are decoded so escaped markup such as
/// `&lt;string&gt;` survives as literal text.
pub fn to_plain_text(input: &str) -> String {
    decode_entities(&strip_tags(input)).trim().to_string()
}

/// Extracts longform document names from the documentation index page
///
/// Only navigation anchors (a `class` containing `nav-`) pointing at an
/// `.html` page are considered. `fs.html` becomes `fs.md`. Duplicates are
/// dropped, keeping the first occurrence.
pub fn document_names(index_html: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for anchor in anchor_pattern().find_iter(index_html) {
        let mut class = None;
        let mut href = None;
        for captures in attribute_pattern().captures_iter(anchor.as_str()) {
            let value = captures
                .get(2)
                .or_else(|| captures.get(3))
                .map(|m| m.as_str());
            match captures[1].to_ascii_lowercase().as_str() {
                "class" => class = value,
                "href" => href = value,
                _ => {}
            }
        }

        let (Some(class), Some(href)) = (class, href) else {
            continue;
        };
        if !class.contains("nav-") || !href.ends_with(".html") {
            continue;
        }

        let file = href.rsplit('/').next().unwrap_or(href);
        let Some(stem) = file.strip_suffix(".html") else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }

        let name = format!("{}.md", stem);
        if !names.contains(&name) {
            names.push(name);
        }
    }

    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_plain_text_strips_and_decodes() {
        assert_eq!(to_plain_text("<p>Hello &amp; world</p>"), "Hello & world");
    }

    #[test]
    fn test_to_plain_text_keeps_escaped_markup() {
        assert_eq!(
            to_plain_text("<code>path</code> &lt;string&gt; | &lt;Buffer&gt;"),
            "path <string> | <Buffer>"
        );
    }

    #[test]
    fn test_to_plain_text_trims_and_handles_multiline_tags() {
        assert_eq!(to_plain_text("\n  <a\n href=\"#x\">link</a>  \n"), "link");
        assert_eq!(to_plain_text("   "), "");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_entities("it&#39;s &#x41;"), "it's A");
    }

    #[test]
    fn test_document_names_from_nav_links() {
        let html = r#"
            <ul>
              <li><a href="documentation.html" class="nav-documentation">About this documentation</a></li>
              <li><a class="nav-fs active" href="fs.html">File system</a></li>
              <li><a href='http.html' class='nav-http'>HTTP</a></li>
              <li><a href="https://github.com/nodejs/node" class="nav-github">GitHub</a></li>
              <li><a href="fs.html" class="nav-fs">File system (again)</a></li>
              <li><a href="net.html">Not a nav link</a></li>
            </ul>
        "#;

        assert_eq!(
            document_names(html),
            vec!["documentation.md", "fs.md", "http.md"]
        );
    }

    #[test]
    fn test_document_names_uses_file_name_of_path() {
        let html = r#"<a class="nav-buffer" href="/api/buffer.html">Buffer</a>"#;
        assert_eq!(document_names(html), vec!["buffer.md"]);
    }

    #[test]
    fn test_document_names_empty_page() {
        assert!(document_names("<html><body></body></html>").is_empty());
    }
}
