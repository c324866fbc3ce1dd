use std::fmt::Write;

use serde::Serialize;

/// Turns a form value such as `protein-powder` into `Protein Powder`.
///
/// Only the first hyphen becomes a space. Every ASCII word character that
/// follows a non-word character (or starts the string) is uppercased.
pub fn format_ingredient_name(raw: &str) -> String {
    let spaced = raw.replacen('-', " ", 1);
    let mut formatted = String::with_capacity(spaced.len());
    let mut prev_is_word = false;

    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            formatted.push(c.to_ascii_uppercase());
        } else {
            formatted.push(c);
        }
        prev_is_word = is_word;
    }

    formatted
}

/// One labelled row of the order display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySection {
    pub label: String,
    pub value: String,
}

impl DisplaySection {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

fn escape_html(text: &str) -> String {
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

/// Renders sections as the `ingredient-list` fragment the order page shows.
pub fn render_sections(sections: &[DisplaySection]) -> String {
    let mut html = String::from(r#"<div class="ingredient-list">"#);
    for section in sections {
        // Writing into a String cannot fail.
        let _ = write!(
            html,
            r#"<div class="ingredient-category"><strong>{}:</strong> {}</div>"#,
            escape_html(&section.label),
            escape_html(&section.value),
        );
    }
    html.push_str("</div>");
    html
}
