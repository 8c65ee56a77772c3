//! Criteria mutations: every filter-control change flows through one of
//! these functions, which adjust the criteria and rerun the
//! filter-then-sort pipeline so the derived view can never go stale.

use crate::state::AppState;

/// What: Initialize price bounds, gap, step, and the accepted-color set from
/// a freshly loaded catalog.
///
/// Inputs:
/// - `app`: Mutable application state with `catalog` populated.
/// - `gap_percent`: When `Some(pct)`, the minimum gap is `pct`% of the
///   observed price range; otherwise `fixed_gap` is used.
/// - `fixed_gap`: Fixed minimum gap in ISK.
///
/// Output:
/// - Criteria reset to the widest range, all colors accepted, empty query;
///   the pipeline is rerun to produce the initial derived view.
pub fn init_from_catalog(app: &mut AppState, gap_percent: Option<u64>, fixed_gap: u64) {
    let (floor, ceil) = crate::catalog::price_bounds(&app.catalog);
    app.price_floor = floor;
    app.price_ceil = ceil;
    let range = ceil.saturating_sub(floor);
    app.price_gap = match gap_percent {
        Some(pct) => (range * pct / 100).max(1),
        None => fixed_gap.max(1),
    }
    .min(range.max(1));
    app.price_step = (range / 100).max(1);
    app.all_colors = crate::catalog::all_colors(&app.catalog);
    app.criteria.price_min = floor;
    app.criteria.price_max = ceil;
    app.criteria.colors = app.all_colors.iter().cloned().collect();
    app.criteria.query.clear();
    crate::logic::filter::apply_filters_and_sort(app);
}

/// What: Move the lower price bound by a signed amount.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `delta`: Signed nudge in ISK.
///
/// Output:
/// - The bound is clamped to `[floor, price_max - gap]` so the two bounds
///   never cross and always keep the minimum gap; pipeline rerun.
pub fn nudge_price_min(app: &mut AppState, delta: i64) {
    let target = app.criteria.price_min.saturating_add_signed(delta);
    let upper = app.criteria.price_max.saturating_sub(app.price_gap);
    app.criteria.price_min = target.clamp(app.price_floor, upper.max(app.price_floor));
    crate::logic::filter::apply_filters_and_sort(app);
}

/// What: Move the upper price bound by a signed amount.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `delta`: Signed nudge in ISK.
///
/// Output:
/// - The bound is clamped to `[price_min + gap, ceil]`; pipeline rerun.
pub fn nudge_price_max(app: &mut AppState, delta: i64) {
    let target = app.criteria.price_max.saturating_add_signed(delta);
    let lower = app.criteria.price_min.saturating_add(app.price_gap);
    app.criteria.price_max = target.clamp(lower.min(app.price_ceil), app.price_ceil);
    crate::logic::filter::apply_filters_and_sort(app);
}

/// What: Toggle one color in the accepted set.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `color`: Color name from the catalog universe.
///
/// Output:
/// - Membership flipped; pipeline rerun. Unchecking every color is allowed
///   and yields an empty view.
pub fn toggle_color(app: &mut AppState, color: &str) {
    if !app.criteria.colors.remove(color) {
        app.criteria.colors.insert(color.to_string());
    }
    crate::logic::filter::apply_filters_and_sort(app);
}

/// What: Accept every color in the catalog (bulk select-all).
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output: Full accepted set; pipeline rerun.
pub fn select_all_colors(app: &mut AppState) {
    app.criteria.colors = app.all_colors.iter().cloned().collect();
    crate::logic::filter::apply_filters_and_sort(app);
}

/// What: Empty the accepted-color set (bulk clear).
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output: Empty set, hence an empty derived view; pipeline rerun.
pub fn clear_colors(app: &mut AppState) {
    app.criteria.colors.clear();
    crate::logic::filter::apply_filters_and_sort(app);
}

/// What: Replace the free-text query.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `query`: New query text (kept verbatim; matching lowercases it).
///
/// Output: Pipeline rerun.
pub fn set_query(app: &mut AppState, query: String) {
    app.criteria.query = query;
    crate::logic::filter::apply_filters_and_sort(app);
}
