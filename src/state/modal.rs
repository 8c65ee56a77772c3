//! Modal overlay state.

/// Modal dialog state for the UI.
///
/// At most one overlay is active at a time; the event layer handles modal
/// keys before anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Help overlay with keybindings. Dismissed with Esc/Enter.
    Help,
    /// Sort field picker. `cursor` indexes [`crate::state::SortField::ALL`].
    SortMenu {
        /// Highlighted row in the field list.
        cursor: usize,
    },
    /// Side-by-side comparison of the selected products. Closing it clears
    /// the selection set.
    Compare,
}
