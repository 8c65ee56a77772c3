//! Core non-UI logic: the filter/sort pipeline, criteria mutations, the
//! bounded selection tracker, and the comparison matrix builder.

pub mod compare;
pub mod criteria;
pub mod filter;
pub mod selection;
pub mod sort;

// Re-export the operations the event layer uses most.
pub use compare::{CompareRow, comparison_matrix};
pub use criteria::{
    clear_colors, init_from_catalog, nudge_price_max, nudge_price_min, select_all_colors,
    set_query, toggle_color,
};
pub use filter::{apply_filters_and_sort, matches_criteria};
pub use selection::{MAX_SELECTED, can_compare, clear_selection, selection_full, toggle_selection};
pub use sort::{set_sort_field, sort_view};
