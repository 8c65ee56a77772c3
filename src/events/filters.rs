//! Key handling for the filter pane: price bounds and color checkboxes.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Focus};

/// Filter rows 0 and 1 are the price bounds; color checkboxes follow.
const COLOR_ROWS_START: usize = 2;

/// What: Handle a key while the filter pane has focus.
///
/// Inputs:
/// - `key`: Pressed key.
/// - `app`: Mutable application state.
///
/// Output: none.
///
/// h/l nudge whichever price bound the cursor sits on by one step; the
/// bounds keep their minimum gap, so a bound stops rather than crossing the
/// other. Space toggles the color under the cursor; `a` and `x` accept all
/// colors and none.
pub fn handle_key(key: KeyEvent, app: &mut AppState) {
    let rows = COLOR_ROWS_START + app.all_colors.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.filter_cursor = (app.filter_cursor + 1).min(rows.saturating_sub(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.filter_cursor = app.filter_cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => nudge(app, -1),
        KeyCode::Char('l') | KeyCode::Right => nudge(app, 1),
        KeyCode::Char(' ') => {
            if let Some(color) = app
                .filter_cursor
                .checked_sub(COLOR_ROWS_START)
                .and_then(|i| app.all_colors.get(i).cloned())
            {
                crate::logic::toggle_color(app, &color);
            }
        }
        KeyCode::Char('a') => crate::logic::select_all_colors(app),
        KeyCode::Char('x') => crate::logic::clear_colors(app),
        KeyCode::Esc => app.focus = Focus::Results,
        _ => {}
    }
}

/// What: Nudge the price bound under the cursor by `sign` steps.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `sign`: -1 or 1.
///
/// Output: none. Rows other than the two price rows are unaffected.
fn nudge(app: &mut AppState, sign: i64) {
    let delta = sign * i64::try_from(app.price_step).unwrap_or(i64::MAX);
    match app.filter_cursor {
        0 => crate::logic::nudge_price_min(app, delta),
        1 => crate::logic::nudge_price_max(app, delta),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::product;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app3() -> AppState {
        let mut app = AppState::default();
        app.catalog = vec![
            product(1, 1000, &["Rauður"]),
            product(2, 2000, &["Blár"]),
            product(3, 3000, &["Grænn"]),
        ];
        app.loading = false;
        app.focus = Focus::Filters;
        crate::logic::init_from_catalog(&mut app, None, 100);
        app
    }

    #[test]
    /// What: l on the minimum row raises the lower bound by one step
    ///
    /// - Input: l with the cursor on row 0
    /// - Output: `price_min` grows by `price_step`; products below drop out
    fn l_raises_minimum() {
        let mut app = app3();
        let step = app.price_step;
        let before = app.criteria.price_min;
        handle_key(key(KeyCode::Char('l')), &mut app);
        assert_eq!(app.criteria.price_min, before + step);
    }

    #[test]
    /// What: Bounds never cross; a nudged bound stops at the minimum gap
    ///
    /// - Input: Many l presses on the minimum row
    /// - Output: `price_min <= price_max - gap` still holds
    fn bounds_keep_their_gap() {
        let mut app = app3();
        for _ in 0..1000 {
            handle_key(key(KeyCode::Char('l')), &mut app);
        }
        assert!(app.criteria.price_min <= app.criteria.price_max - app.price_gap);
    }

    #[test]
    /// What: Space on a color row toggles exactly that color
    ///
    /// - Input: j twice (to the first color row), Space
    /// - Output: The first color leaves the accepted set
    fn space_toggles_color_under_cursor() {
        let mut app = app3();
        handle_key(key(KeyCode::Char('j')), &mut app);
        handle_key(key(KeyCode::Char('j')), &mut app);
        let first = app.all_colors[0].clone();
        assert!(app.criteria.colors.contains(&first));
        handle_key(key(KeyCode::Char(' ')), &mut app);
        assert!(!app.criteria.colors.contains(&first));
    }

    #[test]
    /// What: x empties the accepted set and the view; a restores both
    ///
    /// - Input: x, then a
    /// - Output: Zero matches, then all three again
    fn bulk_color_keys() {
        let mut app = app3();
        handle_key(key(KeyCode::Char('x')), &mut app);
        assert!(app.view.is_empty());
        handle_key(key(KeyCode::Char('a')), &mut app);
        assert_eq!(app.view.len(), 3);
    }

    #[test]
    /// What: The filter cursor clamps to the last color row
    ///
    /// - Input: Many j presses
    /// - Output: Cursor on the final color
    fn cursor_clamps_to_rows() {
        let mut app = app3();
        for _ in 0..20 {
            handle_key(key(KeyCode::Char('j')), &mut app);
        }
        assert_eq!(app.filter_cursor, 2 + app.all_colors.len() - 1);
    }

    #[test]
    /// What: Esc hands focus back to the results surface
    ///
    /// - Input: Esc
    /// - Output: Focus::Results
    fn esc_returns_to_results() {
        let mut app = app3();
        handle_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.focus, Focus::Results);
    }
}
