//! Markdown to HTML rendering for model output

use pulldown_cmark::{html, Options, Parser};

/// Renders model markdown into an HTML fragment
///
/// Fenced code blocks, tables and strikethrough are enabled. Malformed
/// markdown degrades to best-effort HTML; this never fails.
///
/// # Examples
///
/// ```
/// use jewel::render::render_markdown;
///
/// assert_eq!(render_markdown("Hello"), "<p>Hello</p>\n");
/// ```
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
