//! Key handling for the free-text search input.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Focus};

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `key`: Pressed key.
/// - `app`: Mutable application state.
///
/// Output: none.
///
/// Every edit reruns the filter pipeline immediately, so the view tracks the
/// query keystroke by keystroke. Esc and Enter leave the input without
/// clearing it.
pub fn handle_key(key: KeyEvent, app: &mut AppState) {
    match key.code {
        KeyCode::Char(ch) => {
            let mut q = app.criteria.query.clone();
            q.push(ch);
            crate::logic::set_query(app, q);
        }
        KeyCode::Backspace => {
            let mut q = app.criteria.query.clone();
            q.pop();
            crate::logic::set_query(app, q);
        }
        KeyCode::Esc | KeyCode::Enter => app.focus = Focus::Results,
        _ => {}
    }
}
