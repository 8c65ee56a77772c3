//! Modal overlays: comparison matrix, sort field picker, and help.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
};

use crate::state::{AppState, Modal, SortDir, SortField};
use crate::theme::theme;

/// What: Centered rectangle of the given size, clamped to the frame.
///
/// Inputs:
/// - `area`: Full frame area.
/// - `w`, `h`: Desired size.
///
/// Output: Clamped, centered [`Rect`].
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// What: Render whichever modal overlay is active.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `area`: Full frame area.
/// - `app`: Application state.
///
/// Output: none.
pub fn render_modal(f: &mut Frame, area: Rect, app: &AppState) {
    match &app.modal {
        Modal::None => {}
        Modal::Help => render_help(f, area),
        Modal::SortMenu { cursor } => render_sort_menu(f, area, app, *cursor),
        Modal::Compare => render_compare(f, area, app),
    }
}

/// What: Comparison overlay: fixed attribute rows, one column per selected
/// product, sized to the number of items.
///
/// Inputs:
/// - `f`, `area`: Frame and full area.
/// - `app`: Application state (selection and catalog).
///
/// Output: none. Stale ids have already been dropped by the matrix builder.
fn render_compare(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let (items, rows) = crate::logic::comparison_matrix(&app.catalog, app.selection.iter());
    let cols = items.len() as u16;
    // Width grows with the number of compared items; a display concern only.
    let w = (14 + cols * 26).min(area.width.saturating_sub(4));
    let h = (rows.len() as u16 + 6).min(area.height.saturating_sub(2));
    let rect = centered(area, w, h);
    f.render_widget(Clear, rect);

    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(items.iter().map(|p| {
                Cell::from(p.name.clone()).style(
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                )
            }))
            .collect::<Vec<_>>(),
    )
    .height(1);
    let body: Vec<Row> = rows
        .iter()
        .map(|r| {
            Row::new(
                std::iter::once(
                    Cell::from(r.label).style(Style::default().fg(th.overlay1)),
                )
                .chain(r.cells.iter().map(|c| {
                    Cell::from(c.clone()).style(Style::default().fg(th.text))
                }))
                .collect::<Vec<_>>(),
            )
        })
        .collect();
    let mut widths = vec![Constraint::Length(12)];
    widths.extend(std::iter::repeat_n(Constraint::Min(18), items.len()));

    let table = Table::new(body, widths)
        .header(header)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(
                    " Samanburður ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .title_bottom(Span::styled(
                    " Esc lokar og hreinsar valið ",
                    Style::default().fg(th.subtext1),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(table, rect);
}

/// What: Sort field picker with the active field marked and its direction.
///
/// Inputs:
/// - `f`, `area`: Frame and full area.
/// - `app`: Application state.
/// - `cursor`: Highlighted row.
///
/// Output: none.
fn render_sort_menu(f: &mut Frame, area: Rect, app: &AppState, cursor: usize) {
    let th = theme();
    let rect = centered(area, 34, SortField::ALL.len() as u16 + 4);
    f.render_widget(Clear, rect);
    let items: Vec<ListItem> = SortField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let active = *field == app.sort_field;
            let marker = if active {
                match app.sort_dir {
                    SortDir::Asc => "✓ ↑ ",
                    SortDir::Desc => "✓ ↓ ",
                }
            } else {
                "    "
            };
            let style = if i == cursor {
                Style::default().fg(th.crust).bg(th.lavender)
            } else if active {
                Style::default().fg(th.mauve)
            } else {
                Style::default().fg(th.text)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", field.label()),
                style,
            )))
        })
        .collect();
    let list = List::new(items).style(Style::default().bg(th.mantle)).block(
        Block::default()
            .title(Span::styled(
                " Raða eftir ",
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Span::styled(
                " Enter velur · sama svið snýr röðinni ",
                Style::default().fg(th.subtext1),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(th.mauve))
            .style(Style::default().bg(th.mantle)),
    );
    f.render_widget(list, rect);
}

/// What: Help overlay listing the keybindings.
///
/// Inputs:
/// - `f`, `area`: Frame and full area.
///
/// Output: none.
fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let rect = centered(area, 62, 18);
    f.render_widget(Clear, rect);
    let key = Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD);
    let txt = Style::default().fg(th.text);
    let lines = vec![
        Line::from(vec![Span::styled("j/k ↑/↓", key), Span::styled("  fara um listann", txt)]),
        Line::from(vec![Span::styled("Enter", key), Span::styled("    opna/loka nánari upplýsingar", txt)]),
        Line::from(vec![Span::styled("Space", key), Span::styled("    velja vöru til samanburðar (hámark 4)", txt)]),
        Line::from(vec![Span::styled("c", key), Span::styled("        bera saman valdar vörur (2–4)", txt)]),
        Line::from(vec![Span::styled("s", key), Span::styled("        raða eftir sviði", txt)]),
        Line::from(vec![Span::styled("v", key), Span::styled("        skipta milli töflu og spjalda", txt)]),
        Line::from(vec![Span::styled("/", key), Span::styled("        leita", txt)]),
        Line::from(vec![Span::styled("Tab", key), Span::styled("      skipta um fókus (listi/leit/síur)", txt)]),
        Line::from(""),
        Line::from(vec![Span::styled("Síur: ", Style::default().fg(th.overlay1)), Span::styled("h/l breyta verði · Space litur · a allir · x enginn", txt)]),
        Line::from(""),
        Line::from(vec![Span::styled("q", key), Span::styled("        hætta", txt)]),
    ];
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled(
                    " Hjálp ",
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
