//! Key handling while a modal overlay is open. Modals swallow all keys.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal, SortField};

/// What: Handle a key while a modal is open.
///
/// Inputs:
/// - `key`: Pressed key.
/// - `app`: Mutable application state (`app.modal != Modal::None`).
///
/// Output: none.
///
/// Closing the comparison clears the selection, matching its bottom-border
/// hint. The sort menu applies on Enter; picking the already-active field
/// flips the direction.
pub fn handle_key(key: KeyEvent, app: &mut AppState) {
    match app.modal {
        Modal::None => {}
        Modal::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?')
            ) {
                app.modal = Modal::None;
            }
        }
        Modal::Compare => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                app.modal = Modal::None;
                crate::logic::clear_selection(app);
            }
        }
        Modal::SortMenu { cursor } => match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                app.modal = Modal::SortMenu {
                    cursor: (cursor + 1).min(SortField::ALL.len() - 1),
                };
            }
            KeyCode::Char('k') | KeyCode::Up => {
                app.modal = Modal::SortMenu {
                    cursor: cursor.saturating_sub(1),
                };
            }
            KeyCode::Enter => {
                app.modal = Modal::None;
                crate::logic::set_sort_field(app, SortField::ALL[cursor]);
            }
            KeyCode::Esc | KeyCode::Char('q') => app.modal = Modal::None,
            _ => {}
        },
    }
}
