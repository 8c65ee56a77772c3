//! Sort engine: stable in-place ordering of the derived view by one field
//! and direction, with Icelandic collation for the name field.

use std::cmp::Ordering;

use crate::state::{AppState, Product, SortDir, SortField};

/// What: Compare two products on one field, ascending.
///
/// Inputs:
/// - `a`, `b`: Products to compare.
/// - `field`: Field to compare on.
///
/// Output:
/// - Natural ordering for numeric fields (missing values compare smallest so
///   a direction flip is a pure reversal); Icelandic collation for names.
#[must_use]
pub fn compare_on(a: &Product, b: &Product, field: SortField) -> Ordering {
    /// Total order over f64 treating NaN as smallest; catalog metrics are
    /// finite by construction but the comparator must still be total.
    fn num(x: f64, y: f64) -> Ordering {
        x.partial_cmp(&y).unwrap_or_else(|| {
            if x.is_nan() && y.is_nan() {
                Ordering::Equal
            } else if x.is_nan() {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        })
    }
    /// Missing values first, then numeric order.
    fn opt(x: Option<f64>, y: Option<f64>) -> Ordering {
        match (x, y) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => num(a, b),
        }
    }
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => crate::util::icelandic_cmp(&a.name, &b.name),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Shots => a.shots.cmp(&b.shots),
        SortField::Duration => num(a.duration, b.duration),
        SortField::Noise => num(a.noise, b.noise),
        SortField::Visual => num(a.visual, b.visual),
        SortField::Weight => opt(a.weight, b.weight),
        SortField::SecondsPerShot => num(a.seconds_per_shot, b.seconds_per_shot),
        SortField::PricePerShot => num(a.price_per_shot, b.price_per_shot),
        SortField::PricePerSecond => num(a.price_per_second, b.price_per_second),
        SortField::PricePerKg => opt(a.price_per_kg, b.price_per_kg),
    }
}

/// What: Stable in-place sort of the derived view.
///
/// Inputs:
/// - `view`: Derived view to reorder.
/// - `field`: Active sort field.
/// - `dir`: Active direction; descending reverses the comparison sign.
///
/// Output:
/// - `view` reordered. Ties keep their relative order (stable sort) for UI
///   predictability.
pub fn sort_view(view: &mut [Product], field: SortField, dir: SortDir) {
    view.sort_by(|a, b| {
        let ord = compare_on(a, b, field);
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}

/// What: Activate a sort field with the toggle semantics of the sort control,
/// then rerun the pipeline.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `field`: Field the user picked.
///
/// Output:
/// - Picking the active field flips direction; picking a new one resets to
///   ascending. The derived view is rebuilt filter-then-sort.
pub fn set_sort_field(app: &mut AppState, field: SortField) {
    if app.sort_field == field {
        app.sort_dir = app.sort_dir.flipped();
    } else {
        app.sort_field = field;
        app.sort_dir = SortDir::Asc;
    }
    crate::logic::filter::apply_filters_and_sort(app);
}
