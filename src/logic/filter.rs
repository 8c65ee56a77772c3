//! Filter engine: combines the price-range, color-membership, and free-text
//! predicates into the derived view, then reapplies the active sort.

use crate::state::{AppState, Criteria, Product};

/// What: Whether one product satisfies every active criterion.
///
/// Inputs:
/// - `p`: Product to test.
/// - `criteria`: Active price bounds, accepted colors, and query.
///
/// Output:
/// - `true` iff price is within the inclusive range, AND at least one of the
///   product's colors is accepted, AND (for a non-empty query) some
///   searchable field contains the query case-insensitively.
///
/// Details:
/// - An empty accepted-color set matches nothing; it is not "no filter".
/// - Searchable fields: id, name, description, each color, raw price digits,
///   locale-formatted price, shots, duration, weight. A missing weight
///   simply contributes no match.
#[must_use]
pub fn matches_criteria(p: &Product, criteria: &Criteria) -> bool {
    if p.price < criteria.price_min || p.price > criteria.price_max {
        return false;
    }
    if !p.colors.iter().any(|c| criteria.colors.contains(c)) {
        return false;
    }
    let q = criteria.query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    matches_query(p, &q)
}

/// What: Case-insensitive substring match across the searchable fields.
///
/// Inputs:
/// - `p`: Product to test.
/// - `q`: Query, already trimmed and lowercased.
///
/// Output:
/// - `true` when any searchable field contains `q`.
fn matches_query(p: &Product, q: &str) -> bool {
    p.id.to_string().contains(q)
        || p.name.to_lowercase().contains(q)
        || p.description.to_lowercase().contains(q)
        || p.colors.iter().any(|c| c.to_lowercase().contains(q))
        || p.price.to_string().contains(q)
        || crate::util::format_price(p.price).contains(q)
        || p.shots.to_string().contains(q)
        || p.duration.to_string().contains(q)
        || p.weight.is_some_and(|w| w.to_string().contains(q))
}

/// What: Rebuild the derived view from the full catalog and the current
/// criteria, reapply the active sort, and keep the cursor on the same
/// product when it is still visible.
///
/// Inputs:
/// - `app`: Mutable application state.
///
/// Output:
/// - Updates `app.view`, re-sorts it, and restores or clamps the cursor.
///
/// Details:
/// - The view is always rebuilt in full; filter-then-sort ordering is fixed
///   here so callers never have to sequence the two manually.
/// - The selection set is untouched: a selected product stays selected even
///   when the criteria exclude it from the view.
pub fn apply_filters_and_sort(app: &mut AppState) {
    let prev_id = app.product_under_cursor().map(|p| p.id);

    app.view = app
        .catalog
        .iter()
        .filter(|p| matches_criteria(p, &app.criteria))
        .cloned()
        .collect();
    crate::logic::sort::sort_view(&mut app.view, app.sort_field, app.sort_dir);

    match prev_id.and_then(|id| app.view.iter().position(|p| p.id == id)) {
        Some(pos) => app.select_row(pos),
        None => app.select_row(app.cursor),
    }
}
