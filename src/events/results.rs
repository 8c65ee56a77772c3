//! Key handling for the results surface (table or cards).

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// What: Handle a key while the results surface has focus.
///
/// Inputs:
/// - `key`: Pressed key.
/// - `app`: Mutable application state.
///
/// Output: none.
///
/// Enter toggles the detail panel of the row under the cursor on the active
/// surface only; Space toggles its comparison selection, which is refused
/// silently when four products are already selected.
pub fn handle_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_row(app.cursor.saturating_add(1));
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_row(app.cursor.saturating_sub(1));
        }
        KeyCode::Char('g') | KeyCode::Home => app.select_row(0),
        KeyCode::Char('G') | KeyCode::End => {
            app.select_row(app.view.len().saturating_sub(1));
        }
        KeyCode::Enter => {
            if let Some(id) = app.product_under_cursor().map(|p| p.id) {
                let next = if app.open_detail() == Some(id) {
                    None
                } else {
                    Some(id)
                };
                app.set_open_detail(next);
            }
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.product_under_cursor().map(|p| p.id) {
                crate::logic::toggle_selection(app, id);
            }
        }
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
        crate::logic::init_from_catalog(&mut app, None, 100);
        app
    }

    #[test]
    /// What: j/k move the cursor and clamp at both ends
    ///
    /// - Input: k at the top, j past the bottom
    /// - Output: Cursor stays within 0..len
    fn navigation_clamps() {
        let mut app = app3();
        handle_key(key(KeyCode::Char('k')), &mut app);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            handle_key(key(KeyCode::Char('j')), &mut app);
        }
        assert_eq!(app.cursor, 2);
    }

    #[test]
    /// What: Enter on the same row twice opens then closes its detail panel
    ///
    /// - Input: Enter, Enter on row 0
    /// - Output: Open slot set, then cleared
    fn enter_toggles_detail() {
        let mut app = app3();
        handle_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.open_detail(), Some(1));
        handle_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.open_detail(), None);
    }

    #[test]
    /// What: Enter on a different row moves the open detail to that row
    ///
    /// - Input: Enter on row 0, j, Enter on row 1
    /// - Output: Open slot follows to product 2
    fn enter_moves_detail() {
        let mut app = app3();
        handle_key(key(KeyCode::Enter), &mut app);
        handle_key(key(KeyCode::Char('j')), &mut app);
        handle_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.open_detail(), Some(2));
    }

    #[test]
    /// What: Space toggles selection for the product under the cursor
    ///
    /// - Input: Space, Space on row 0
    /// - Output: Selected, then deselected
    fn space_toggles_selection() {
        let mut app = app3();
        handle_key(key(KeyCode::Char(' ')), &mut app);
        assert!(app.selection.contains(&1));
        handle_key(key(KeyCode::Char(' ')), &mut app);
        assert!(app.selection.is_empty());
    }

    #[test]
    /// What: g/G jump to the first and last row
    ///
    /// - Input: G then g
    /// - Output: Cursor at the end, then back at the start
    fn jump_keys() {
        let mut app = app3();
        handle_key(key(KeyCode::Char('G')), &mut app);
        assert_eq!(app.cursor, 2);
        handle_key(key(KeyCode::Char('g')), &mut app);
        assert_eq!(app.cursor, 0);
    }
}
