//! Small formatting helpers shared by the table, card, and modal renderers.

use crate::state::AppState;
use crate::util::{NOT_APPLICABLE, format_price};

/// What: Checkbox marker for a product row.
///
/// Inputs:
/// - `app`: Application state (selection set).
/// - `id`: Product id of the row.
///
/// Output:
/// - `[x]` when selected, `[-]` when unselected while the selection is full
///   (the disabled state), `[ ]` otherwise.
#[must_use]
pub fn checkbox_marker(app: &AppState, id: u32) -> &'static str {
    if app.selection.contains(&id) {
        "[x]"
    } else if crate::logic::selection_full(app) {
        "[-]"
    } else {
        "[ ]"
    }
}

/// What: Human-readable price range label for the filter pane.
///
/// Inputs:
/// - `app`: Application state (criteria bounds).
///
/// Output: `Verðbil: 1.000 - 9.900 kr.` style string.
#[must_use]
pub fn price_range_label(app: &AppState) -> String {
    format!(
        "Verðbil: {} - {} kr.",
        format_price(app.criteria.price_min),
        format_price(app.criteria.price_max)
    )
}

/// What: Display form of an optional numeric attribute.
///
/// Inputs:
/// - `v`: Value, if present.
///
/// Output: Two-decimal string or the "not applicable" marker.
#[must_use]
pub fn opt_metric(v: Option<f64>) -> String {
    v.map_or_else(|| NOT_APPLICABLE.to_string(), |x| format!("{x:.2}"))
}

/// What: Compact display form of a raw float (no trailing `.0`).
///
/// Inputs:
/// - `v`: Value.
///
/// Output: `30` for `30.0`, `30.5` for `30.5`.
#[must_use]
pub fn compact_float(v: f64) -> String {
    if (v - v.trunc()).abs() < f64::EPSILON {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}
