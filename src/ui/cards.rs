//! Card surface: a compact summary block per product, expanding in place
//! when its detail panel is open.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::{checkbox_marker, compact_float, opt_metric};
use crate::util::{format_price, truncate_display};

/// What: Render the card surface into `area`.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `area`: Target rectangle.
/// - `app`: Application state.
///
/// Output:
/// - Stateful list render, one multi-line item per product. The card whose
///   id matches the surface's open-detail slot expands in place with the
///   ratings, metrics, description, and video line.
pub fn render_cards(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    let text_width = area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = app
        .view
        .iter()
        .map(|p| {
            let expanded = app.open_detail_cards == Some(p.id);
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", checkbox_marker(app, p.id)),
                        Style::default().fg(if app.selection.contains(&p.id) {
                            th.green
                        } else {
                            th.subtext0
                        }),
                    ),
                    Span::styled(
                        p.name.clone(),
                        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "  Verð: {} kr.  Skot: {}  Lengd: {} sek",
                        format_price(p.price),
                        p.shots,
                        compact_float(p.duration)
                    ),
                    Style::default().fg(th.subtext1),
                )),
                Line::from(Span::styled(
                    format!("  Litir: {}", p.colors.join(", ")),
                    Style::default().fg(th.subtext0),
                )),
            ];
            if expanded {
                lines.push(Line::from(Span::styled(
                    format!(
                        "  Hávaði: {}  Fegurð: {}  Þyngd: {}",
                        compact_float(p.noise),
                        compact_float(p.visual),
                        p.weight.map_or_else(
                            || crate::util::NOT_APPLICABLE.to_string(),
                            compact_float
                        )
                    ),
                    Style::default().fg(th.subtext1),
                )));
                lines.push(Line::from(Span::styled(
                    format!(
                        "  Sek/skot: {:.2}  Verð/skot: {:.2}  Verð/sek: {:.2}  Verð/kg: {}",
                        p.seconds_per_shot,
                        p.price_per_shot,
                        p.price_per_second,
                        opt_metric(p.price_per_kg)
                    ),
                    Style::default().fg(th.subtext1),
                )));
                lines.push(Line::from(Span::styled(
                    format!("  {}", truncate_display(&p.description, text_width)),
                    Style::default().fg(th.text),
                )));
                if let Some(embed) = p.video_url.as_deref().and_then(crate::util::embed_url) {
                    lines.push(Line::from(Span::styled(
                        format!("  Myndband: {embed}"),
                        Style::default().fg(th.sapphire),
                    )));
                }
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(format!("Vörur ({})", app.view.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        )
        .highlight_style(Style::default().bg(th.mantle))
        .highlight_symbol("▶ ");
    f.render_stateful_widget(list, area, &mut app.card_state);
}
