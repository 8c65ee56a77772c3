//! Frame composition: header search bar, filter pane, the active results
//! surface, detail panel, footer hints, and modal overlays.

pub mod cards;
pub mod detail;
pub mod helpers;
pub mod modals;
pub mod table;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, Focus, ViewMode};
use crate::theme::theme;

/// What: Render one full frame from the current state.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `app`: Application state (mutated only through widget states).
///
/// Output:
/// - The composed frame: loading/error empty states take over the whole
///   canvas; otherwise header, filter pane, surface, optional detail panel,
///   footer, and any modal overlay.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    if app.loading {
        render_notice(f, area, "Sæki vörulista…", th.overlay1);
        return;
    }
    if let Some(msg) = app.load_error.clone() {
        render_notice(
            f,
            area,
            &format!("Vörulistinn er ekki tiltækur: {msg}"),
            th.red,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(area);

    render_header(f, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(30)])
        .split(chunks[1]);
    render_filter_pane(f, main[0], app);
    render_results(f, main[1], app);

    render_footer(f, chunks[2], app);
    modals::render_modal(f, area, app);
}

/// What: Full-canvas notice used for the loading and data-unavailable states.
///
/// Inputs:
/// - `f`, `area`: Frame and full area.
/// - `msg`: Message text.
/// - `color`: Accent color.
///
/// Output: none. Filter controls are not drawn at all in these states.
fn render_notice(f: &mut Frame, area: Rect, msg: &str, color: ratatui::style::Color) {
    let th = theme();
    let boxw = Paragraph::new(Line::from(Span::styled(
        msg.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title("Blossi")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface2)),
    );
    let rect = Rect {
        x: area.x + 2,
        y: area.y + (area.height / 2).saturating_sub(2),
        width: area.width.saturating_sub(4),
        height: 4.min(area.height),
    };
    f.render_widget(boxw, rect);
}

/// What: Header row: search input plus the active sort indicator.
///
/// Inputs:
/// - `f`, `area`: Frame and header rectangle.
/// - `app`: Application state.
///
/// Output: none. Places the terminal cursor inside the input while the
/// search field has focus.
fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(26)])
        .split(area);

    let focused = matches!(app.focus, Focus::Search);
    let input = Paragraph::new(Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.criteria.query.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]))
    .block(
        Block::default()
            .title(Span::styled(
                if focused { "Leit (virk)" } else { "Leit" },
                Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
    );
    f.render_widget(input, cols[0]);
    if focused {
        let right = cols[0].x + cols[0].width.saturating_sub(1);
        let x = (cols[0].x + 3 + app.criteria.query.chars().count() as u16).min(right);
        f.set_cursor_position(Position::new(x, cols[0].y + 1));
    }

    let sort = Paragraph::new(Line::from(vec![
        Span::styled(app.sort_field.label(), Style::default().fg(th.text)),
        Span::styled(
            match app.sort_dir {
                crate::state::SortDir::Asc => " ↑",
                crate::state::SortDir::Desc => " ↓",
            },
            Style::default().fg(th.sapphire),
        ),
    ]))
    .block(
        Block::default()
            .title(Span::styled("Röðun [s]", Style::default().fg(th.overlay1)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.surface1)),
    );
    f.render_widget(sort, cols[1]);
}

/// What: Filter pane: price bounds with the range label plus the color
/// checkbox list, with a movable cursor while the pane has focus.
///
/// Inputs:
/// - `f`, `area`: Frame and pane rectangle.
/// - `app`: Application state.
///
/// Output: none.
fn render_filter_pane(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let focused = matches!(app.focus, Focus::Filters);
    let cursor_style = Style::default().fg(th.crust).bg(th.lavender);
    let row_style = |row: usize| {
        if focused && app.filter_cursor == row {
            cursor_style
        } else {
            Style::default().fg(th.text)
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            helpers::price_range_label(app),
            Style::default().fg(th.yellow),
        )),
        Line::from(Span::styled(
            format!("Lágmark: {} kr.", crate::util::format_price(app.criteria.price_min)),
            row_style(0),
        )),
        Line::from(Span::styled(
            format!("Hámark:  {} kr.", crate::util::format_price(app.criteria.price_max)),
            row_style(1),
        )),
        Line::from(""),
        Line::from(Span::styled("Litir  [a] allir  [x] enginn", Style::default().fg(th.overlay1))),
    ];
    for (i, color) in app.all_colors.iter().enumerate() {
        let marker = if app.criteria.colors.contains(color) {
            "[x]"
        } else {
            "[ ]"
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {color}"),
            row_style(i + 2),
        )));
    }

    let pane = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                if focused { "Síur (virkar)" } else { "Síur" },
                Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 })),
    );
    f.render_widget(pane, area);
}

/// What: Results region: the active surface plus, on the table surface, a
/// separate detail panel under it when a row is expanded.
///
/// Inputs:
/// - `f`, `area`: Frame and results rectangle.
/// - `app`: Application state.
///
/// Output: none. An empty derived view renders an explicit no-results
/// message instead of a bare surface.
fn render_results(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    if app.view.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "Engar vörur fundust.",
            Style::default().fg(th.overlay1),
        )))
        .block(
            Block::default()
                .title("Vörur (0)")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
        f.render_widget(empty, area);
        return;
    }

    let open_table_detail = match app.view_mode {
        ViewMode::Table => app
            .open_detail_table
            .and_then(|id| app.catalog.iter().find(|p| p.id == id).cloned()),
        ViewMode::Cards => None,
    };

    let surface_area = if open_table_detail.is_some() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(9)])
            .split(area);
        if let Some(p) = &open_table_detail {
            let detail = Paragraph::new(detail::detail_lines(p, &th))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Nánar ",
                            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(th.mauve)),
                );
            f.render_widget(detail, split[1]);
        }
        split[0]
    } else {
        area
    };

    match app.view_mode {
        ViewMode::Table => table::render_table(f, surface_area, app),
        ViewMode::Cards => cards::render_cards(f, surface_area, app),
    }
}

/// What: Footer keybinding hints, with the compare hint only when available.
///
/// Inputs:
/// - `f`, `area`: Frame and footer rectangle.
/// - `app`: Application state.
///
/// Output: none.
fn render_footer(f: &mut Frame, area: Rect, app: &AppState) {
    let th = theme();
    let key = Style::default().fg(th.subtext1);
    let lbl = Style::default().fg(th.overlay1);
    let mut l1 = vec![
        Span::styled("LISTI:", lbl),
        Span::styled(" j/k=fara  Enter=nánar  Space=velja  s=raða  v=tafla/spjöld", key),
    ];
    if crate::logic::can_compare(app) {
        l1.push(Span::raw("  "));
        l1.push(Span::styled(
            format!("c=bera saman ({})", app.selection.len()),
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        ));
    }
    let l2 = vec![
        Span::styled("GLOBAL:", lbl),
        Span::styled(" Tab=fókus  /=leit  ?=hjálp  q=hætta", key),
    ];
    let kb = Paragraph::new(vec![Line::from(l1), Line::from(l2)])
        .style(Style::default().fg(th.subtext1).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(th.surface1)),
        );
    f.render_widget(kb, area);
}
