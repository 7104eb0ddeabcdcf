//! HTML and terminal rendering
//!
//! - [`table`]: structured table body built from records, HTML and text output
//! - [`page`]: the full explorer page around the table

pub mod page;
pub mod table;

pub use page::{Page, SERVICE_WORKER_JS};
pub use table::{TableBody, TableRow, COLUMNS};

/// Escape text for HTML element content and double-quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='y'>&"#),
            "&lt;img src=&quot;x&quot; onerror=&#39;y&#39;&gt;&amp;"
        );
        assert_eq!(escape_html("Mars"), "Mars");
    }
}
