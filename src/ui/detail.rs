//! Detail panel content: image, description, and the embeddable video link
//! for a single expanded product.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::Product;
use crate::theme::Theme;

/// What: Build the text lines of a detail panel.
///
/// Inputs:
/// - `p`: Expanded product.
/// - `th`: Color palette.
///
/// Output:
/// - Lines showing the image URL, the description, and — only when the
///   product has a recognizable video URL — the embed link. An absent or
///   unrecognized video yields no video line at all, not a placeholder.
#[must_use]
pub fn detail_lines(p: &Product, th: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                p.name.clone(),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} kr.)", crate::util::format_price(p.price)),
                Style::default().fg(th.subtext1),
            ),
        ]),
        Line::from(Span::styled(
            format!("Mynd: {}", p.image_url),
            Style::default().fg(th.overlay2),
        )),
        Line::from(""),
        Line::from(Span::styled(
            p.description.clone(),
            Style::default().fg(th.text),
        )),
    ];
    if let Some(embed) = p.video_url.as_deref().and_then(crate::util::embed_url) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Myndband: {embed}"),
            Style::default().fg(th.sapphire),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::product;
    use crate::theme::theme;

    fn rendered(p: &crate::state::Product) -> String {
        detail_lines(p, &theme())
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    /// What: A product without a video URL gets no video line
    ///
    /// - Input: Product with `video_url = None`
    /// - Output: No "Myndband" line, no placeholder
    fn no_video_line_without_url() {
        let p = product(1, 1000, &["Rauður"]);
        let text = rendered(&p);
        assert!(!text.contains("Myndband"));
        assert!(text.contains("Mynd:"));
    }

    #[test]
    /// What: A recognized video URL renders as its embed form
    ///
    /// - Input: YouTube watch URL
    /// - Output: "Myndband" line with `/embed/`
    fn video_line_uses_embed_form() {
        let mut p = product(1, 1000, &["Rauður"]);
        p.video_url = Some("https://www.youtube.com/watch?v=xyz".into());
        let text = rendered(&p);
        assert!(text.contains("Myndband: https://www.youtube.com/embed/xyz"));
    }

    #[test]
    /// What: An unrecognized video host degrades to omitting the line
    ///
    /// - Input: Vimeo URL
    /// - Output: No video line
    fn unrecognized_host_omitted() {
        let mut p = product(1, 1000, &["Rauður"]);
        p.video_url = Some("https://vimeo.com/123".into());
        assert!(!rendered(&p).contains("Myndband"));
    }
}
