//! Stripping of markup from user-supplied text.
//!
//! Exercise names, descriptions and notes are rendered by web clients, so
//! script and style blocks are removed together with their content and any
//! remaining HTML tags are dropped. The result is stored as plain text:
//! nothing is entity-encoded, so length limits count what the user typed and
//! clients escape on render. A `<` that does not open a tag (`5 < 10`) is
//! kept.

use std::sync::LazyLock;

use regex::Regex;

static BLOCKS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>|<!--.*?-->")
        .expect("valid block regex")
});

static TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("valid tag regex"));

/// Returns `input` with script blocks and HTML tags removed, trimmed.
pub fn sanitize_text(input: &str) -> String {
    let without_blocks = BLOCKS.replace_all(input, "");
    let without_tags = TAGS.replace_all(&without_blocks, "");

    without_tags.trim().to_string()
}
