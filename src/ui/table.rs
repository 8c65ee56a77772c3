//! Table surface: one row per product in the derived view, keyed by id.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Row, Table},
};

use crate::state::{AppState, SortDir, SortField};
use crate::theme::theme;
use crate::ui::helpers::{checkbox_marker, compact_float, opt_metric};
use crate::util::format_price;

/// Column headers paired with the sort field they indicate, where sortable.
const COLUMNS: [(&str, Option<SortField>); 14] = [
    ("Val", None),
    ("ID", Some(SortField::Id)),
    ("Nafn", Some(SortField::Name)),
    ("Verð", Some(SortField::Price)),
    ("Litir", None),
    ("Skot", Some(SortField::Shots)),
    ("Lengd", Some(SortField::Duration)),
    ("Hávaði", Some(SortField::Noise)),
    ("Fegurð", Some(SortField::Visual)),
    ("Þyngd", Some(SortField::Weight)),
    ("Sek/skot", Some(SortField::SecondsPerShot)),
    ("Verð/skot", Some(SortField::PricePerShot)),
    ("Verð/sek", Some(SortField::PricePerSecond)),
    ("Verð/kg", Some(SortField::PricePerKg)),
];

/// What: Render the table surface into `area`.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `area`: Target rectangle.
/// - `app`: Application state (derived view, selection, sort state).
///
/// Output:
/// - Stateful table render; the active sort column carries a direction
///   arrow in its header. Row identity is the product id, so selection and
///   detail toggles stay with their product across re-sorts.
pub fn render_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let th = theme();
    let header = Row::new(COLUMNS.iter().map(|(label, field)| {
        let mut text = (*label).to_string();
        if *field == Some(app.sort_field) {
            text.push(match app.sort_dir {
                SortDir::Asc => '↑',
                SortDir::Desc => '↓',
            });
        }
        Cell::from(text).style(
            Style::default()
                .fg(if *field == Some(app.sort_field) {
                    th.mauve
                } else {
                    th.overlay1
                })
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let rows: Vec<Row> = app
        .view
        .iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(checkbox_marker(app, p.id)).style(Style::default().fg(
                    if app.selection.contains(&p.id) {
                        th.green
                    } else {
                        th.subtext0
                    },
                )),
                Cell::from(p.id.to_string()),
                Cell::from(p.name.clone()).style(Style::default().fg(th.text)),
                Cell::from(format_price(p.price)),
                Cell::from(p.colors.join(", ")).style(Style::default().fg(th.subtext1)),
                Cell::from(p.shots.to_string()),
                Cell::from(compact_float(p.duration)),
                Cell::from(compact_float(p.noise)),
                Cell::from(compact_float(p.visual)),
                Cell::from(p.weight.map_or_else(
                    || crate::util::NOT_APPLICABLE.to_string(),
                    compact_float,
                )),
                Cell::from(format!("{:.2}", p.seconds_per_shot)),
                Cell::from(format!("{:.2}", p.price_per_shot)),
                Cell::from(format!("{:.2}", p.price_per_second)),
                Cell::from(opt_metric(p.price_per_kg)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Min(16),
        Constraint::Length(8),
        Constraint::Min(12),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(8),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(format!("Vörur ({})", app.view.len()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        )
        .row_highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(table, area, &mut app.table_state);
}
