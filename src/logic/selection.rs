//! Selection tracker: a bounded set of product ids chosen for comparison.

use crate::state::AppState;

/// Maximum number of products that can be compared at once.
pub const MAX_SELECTED: usize = 4;

/// Minimum number of selected products for the compare action.
pub const MIN_COMPARED: usize = 2;

/// What: Toggle a product in or out of the selection set.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `id`: Product identifier.
///
/// Output:
/// - `true` when the toggle was applied. Removal always succeeds; an
///   addition is rejected with `false` once [`MAX_SELECTED`] ids are held,
///   leaving the set untouched so the UI keeps the control in its prior
///   state.
pub fn toggle_selection(app: &mut AppState, id: u32) -> bool {
    if app.selection.contains(&id) {
        app.selection.remove(&id);
        return true;
    }
    if app.selection.len() >= MAX_SELECTED {
        tracing::debug!(id, "selection limit reached; toggle rejected");
        return false;
    }
    app.selection.insert(id);
    true
}

/// What: Whether the compare action is available.
///
/// Inputs:
/// - `app`: Application state.
///
/// Output:
/// - `true` iff the selection holds between [`MIN_COMPARED`] and
///   [`MAX_SELECTED`] ids; gates the compare hint and the `c` key.
#[must_use]
pub fn can_compare(app: &AppState) -> bool {
    (MIN_COMPARED..=MAX_SELECTED).contains(&app.selection.len())
}

/// What: Whether unselected checkboxes should render as disabled.
///
/// Inputs:
/// - `app`: Application state.
///
/// Output:
/// - `true` while the selection is full.
#[must_use]
pub fn selection_full(app: &AppState) -> bool {
    app.selection.len() >= MAX_SELECTED
}

/// What: Empty the selection set, re-enabling every checkbox.
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output: none. Invoked when the compare overlay closes.
pub fn clear_selection(app: &mut AppState) {
    app.selection.clear();
}
