//! Extraction of display text from assistant HTML replies.
//!
//! Some replies carry no supplemental display text, only a rendered HTML
//! fragment. The text shown on a smart display lives in a
//! `div.show_text_content` element; this module pulls it back out.

use scraper::{Html, Selector};

const TEXT_SELECTOR: &str = "div.show_text_content";

/// Extract the display text from an assistant HTML fragment.
///
/// Selects the first text container, collects its text and trims it.
/// Returns `None` when the fragment has no container or the container holds
/// nothing but whitespace.
#[must_use]
pub fn text_from_html(html: &str) -> Option<String> {
    let selector = Selector::parse(TEXT_SELECTOR).ok()?;
    let document = Html::parse_fragment(html);
    let container = document.select(&selector).next()?;
    let text = container.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
