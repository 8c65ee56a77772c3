//! Keyboard event dispatch.
//!
//! Events flow through one entry point, [`handle_event`], which resolves the
//! active modal first, then global bindings, then the focused pane. Every
//! state change goes through the `logic` layer so the derived view is always
//! rebuilt by the same pipeline.

pub mod filters;
pub mod modals;
pub mod results;
pub mod search;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus, Modal, SortField};

/// What: Handle one terminal event against the application state.
///
/// Inputs:
/// - `ev`: Raw crossterm event.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` when the application should exit, `false` otherwise.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(*key, app),
        _ => false,
    }
}

/// What: Handle one key press.
///
/// Inputs:
/// - `key`: Pressed key.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` when the application should exit.
///
/// While the catalog is still loading or failed to load, only quit and help
/// remain live; everything that reads or mutates the catalog is inert.
pub fn handle_key(key: KeyEvent, app: &mut AppState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if app.modal != Modal::None {
        modals::handle_key(key, app);
        return false;
    }

    if !app.controls_active() {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('?') | KeyCode::F(1) => {
                app.modal = Modal::Help;
                false
            }
            _ => false,
        };
    }

    // Search focus consumes printable keys, so it is resolved before the
    // global single-letter bindings.
    if matches!(app.focus, Focus::Search) {
        search::handle_key(key, app);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') | KeyCode::F(1) => app.modal = Modal::Help,
        KeyCode::Char('v') => {
            app.view_mode = app.view_mode.toggled();
        }
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Tab => app.focus = next_focus(app.focus),
        KeyCode::Char('s') => {
            let cursor = SortField::ALL
                .iter()
                .position(|f| *f == app.sort_field)
                .unwrap_or(0);
            app.modal = Modal::SortMenu { cursor };
        }
        KeyCode::Char('c') => {
            if crate::logic::can_compare(app) {
                app.modal = Modal::Compare;
            }
        }
        _ => match app.focus {
            Focus::Results => results::handle_key(key, app),
            Focus::Filters => filters::handle_key(key, app),
            Focus::Search => {}
        },
    }
    false
}

/// What: Cycle focus between the results list, the search input, and the
/// filter pane.
///
/// Inputs:
/// - `focus`: Current focus.
///
/// Output: Next focus in the cycle.
const fn next_focus(focus: Focus) -> Focus {
    match focus {
        Focus::Results => Focus::Search,
        Focus::Search => Focus::Filters,
        Focus::Filters => Focus::Results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewMode;
    use crate::test_utils::product;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_app() -> AppState {
        let mut app = AppState::default();
        app.catalog = vec![product(1, 1000, &["Rauður"]), product(2, 2000, &["Blár"])];
        app.loading = false;
        crate::logic::init_from_catalog(&mut app, None, 100);
        app
    }

    #[test]
    /// What: `q` exits from the results pane
    ///
    /// - Input: `q` with no modal open
    /// - Output: `handle_key` returns true
    fn q_exits() {
        let mut app = ready_app();
        assert!(handle_key(key(KeyCode::Char('q')), &mut app));
    }

    #[test]
    /// What: Ctrl+C exits regardless of focus or modal
    ///
    /// - Input: Ctrl+C while the help modal is open
    /// - Output: `handle_key` returns true
    fn ctrl_c_always_exits() {
        let mut app = ready_app();
        app.modal = Modal::Help;
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(ev, &mut app));
    }

    #[test]
    /// What: `v` flips between the table and card surfaces
    ///
    /// - Input: `v` twice
    /// - Output: Cards, then Table again
    fn v_toggles_view_mode() {
        let mut app = ready_app();
        assert_eq!(app.view_mode, ViewMode::Table);
        handle_key(key(KeyCode::Char('v')), &mut app);
        assert_eq!(app.view_mode, ViewMode::Cards);
        handle_key(key(KeyCode::Char('v')), &mut app);
        assert_eq!(app.view_mode, ViewMode::Table);
    }

    #[test]
    /// What: Tab cycles results -> search -> filters -> results
    ///
    /// - Input: Tab three times
    /// - Output: Focus returns to Results
    fn tab_cycles_focus() {
        let mut app = ready_app();
        handle_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::Search);
        // Search focus hands Tab to the search handler, which keeps focus;
        // leave search first, then continue the cycle.
        handle_key(key(KeyCode::Esc), &mut app);
        app.focus = Focus::Filters;
        handle_key(key(KeyCode::Tab), &mut app);
        assert_eq!(app.focus, Focus::Results);
    }

    #[test]
    /// What: `c` opens the comparison only inside the 2..=4 window
    ///
    /// - Input: `c` with one selected, then with two selected
    /// - Output: No modal, then the comparison modal
    fn compare_requires_two_selected() {
        let mut app = ready_app();
        crate::logic::toggle_selection(&mut app, 1);
        handle_key(key(KeyCode::Char('c')), &mut app);
        assert_eq!(app.modal, Modal::None);
        crate::logic::toggle_selection(&mut app, 2);
        handle_key(key(KeyCode::Char('c')), &mut app);
        assert_eq!(app.modal, Modal::Compare);
    }

    #[test]
    /// What: `s` opens the sort menu with the cursor on the active field
    ///
    /// - Input: Sort by price, then `s`
    /// - Output: SortMenu cursor at the Price position
    fn sort_menu_opens_on_active_field() {
        let mut app = ready_app();
        crate::logic::set_sort_field(&mut app, SortField::Price);
        handle_key(key(KeyCode::Char('s')), &mut app);
        let expected = SortField::ALL
            .iter()
            .position(|f| *f == SortField::Price)
            .unwrap();
        assert_eq!(app.modal, Modal::SortMenu { cursor: expected });
    }

    #[test]
    /// What: Only quit and help respond while loading
    ///
    /// - Input: `v`, `s`, then `?` and `q` on a loading state
    /// - Output: No mode change, help opens, quit exits
    fn loading_state_is_inert() {
        let mut app = AppState::default();
        assert!(app.loading);
        handle_key(key(KeyCode::Char('v')), &mut app);
        assert_eq!(app.view_mode, ViewMode::Table);
        handle_key(key(KeyCode::Char('s')), &mut app);
        assert_eq!(app.modal, Modal::None);
        handle_key(key(KeyCode::Char('?')), &mut app);
        assert_eq!(app.modal, Modal::Help);
        app.modal = Modal::None;
        assert!(handle_key(key(KeyCode::Char('q')), &mut app));
    }
}
