//! Small utility helpers for price formatting, Icelandic collation,
//! display-width truncation, and video URL normalization.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-light to keep hot paths fast. They are used by the filter,
//! comparison, and UI code.

use std::cmp::Ordering;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display marker used whenever an attribute is missing or not applicable.
pub const NOT_APPLICABLE: &str = "N/A";

/// What: Format a whole-krónur price with Icelandic thousands grouping.
///
/// Inputs:
/// - `price`: Price in whole ISK.
///
/// Output:
/// - Returns the digits grouped in threes with `.` separators (e.g. `12.500`).
#[must_use]
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Icelandic alphabet in collation order, lowercase. Letters outside this
/// table (foreign loan characters, digits, punctuation) order after it by
/// code point.
const ICELANDIC_ORDER: &[char] = &[
    'a', 'á', 'b', 'c', 'd', 'ð', 'e', 'é', 'f', 'g', 'h', 'i', 'í', 'j', 'k', 'l', 'm', 'n', 'o',
    'ó', 'p', 'q', 'r', 's', 't', 'u', 'ú', 'v', 'w', 'x', 'y', 'ý', 'z', 'þ', 'æ', 'ö',
];

/// What: Rank a single character within the Icelandic alphabet.
///
/// Inputs:
/// - `c`: Character, already lowercased by the caller.
///
/// Output:
/// - `(rank, codepoint)` pair; ranked letters sort first, everything else
///   falls back to code-point order after them.
fn icelandic_rank(c: char) -> (usize, u32) {
    match ICELANDIC_ORDER.iter().position(|&o| o == c) {
        Some(rank) => (rank, 0),
        None => (ICELANDIC_ORDER.len(), c as u32),
    }
}

/// What: Compare two strings using Icelandic-alphabet collation.
///
/// Inputs:
/// - `a`, `b`: Strings to compare.
///
/// Output:
/// - Case-insensitive [`Ordering`] where á/ð/é/í/ó/ú/ý/þ/æ/ö take their
///   Icelandic positions instead of their Unicode code-point positions.
#[must_use]
pub fn icelandic_cmp(a: &str, b: &str) -> Ordering {
    let mut ia = a.chars().flat_map(char::to_lowercase);
    let mut ib = b.chars().flat_map(char::to_lowercase);
    loop {
        match (ia.next(), ib.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ca), Some(cb)) => {
                let ord = icelandic_rank(ca).cmp(&icelandic_rank(cb));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// What: Truncate a string to a maximum display width, appending an ellipsis
/// when anything was cut.
///
/// Inputs:
/// - `text`: Source string.
/// - `max_cols`: Maximum number of terminal columns for the result.
///
/// Output:
/// - The original string when it fits; otherwise a prefix plus `…` whose
///   total width does not exceed `max_cols`.
#[must_use]
pub fn truncate_display(text: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_cols {
        return text.to_string();
    }
    let budget = max_cols.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Rewrite a recognized video URL into its embeddable form.
///
/// Inputs:
/// - `url`: Raw video URL from the catalog.
///
/// Output:
/// - `Some(embed_url)` for recognized YouTube forms (`watch?v=`, `youtu.be/`,
///   already-embedded); `None` for anything else so the caller omits the
///   player instead of rendering a broken embed.
#[must_use]
pub fn embed_url(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains("youtube.com") {
        if trimmed.contains("watch?v=") {
            return Some(trimmed.replacen("watch?v=", "embed/", 1));
        }
        if trimmed.contains("/embed/") {
            return Some(trimmed.to_string());
        }
        return None;
    }
    if let Some(rest) = trimmed
        .strip_prefix("https://youtu.be/")
        .or_else(|| trimmed.strip_prefix("http://youtu.be/"))
    {
        let id = rest.split(['?', '&']).next().unwrap_or_default();
        if !id.is_empty() {
            return Some(format!("https://www.youtube.com/embed/{id}"));
        }
    }
    None
}
