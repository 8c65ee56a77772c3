//! Comparison view builder: resolves the selection set against the catalog
//! and lays out a fixed attribute-by-item matrix for the compare overlay.

use crate::state::Product;
use crate::util::{NOT_APPLICABLE, format_price, truncate_display};

/// Maximum display width of the description cell before truncation.
const DESCRIPTION_MAX_COLS: usize = 150;

/// One labelled row of the comparison matrix with a cell per compared item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRow {
    /// Attribute label (Icelandic, as in the shop).
    pub label: &'static str,
    /// One formatted value per compared product, in selection order.
    pub cells: Vec<String>,
}

/// Attribute accessor used to build one matrix row.
enum Attr {
    /// Price with locale thousands grouping.
    Price,
    /// Plain integer count.
    Shots,
    /// Raw numeric fields.
    Duration,
    /// Noise rating.
    Noise,
    /// Visual rating.
    Visual,
    /// Optional weight in kg.
    Weight,
    /// Derived metrics shown with two decimals.
    SecondsPerShot,
    /// Price per shot.
    PricePerShot,
    /// Price per second.
    PricePerSecond,
    /// Optional price per kg.
    PricePerKg,
    /// Colors joined into a display list.
    Colors,
    /// Description truncated with an ellipsis.
    Description,
}

/// Fixed ordered attribute list of the comparison matrix.
const ROWS: [(&str, Attr); 12] = [
    ("Verð", Attr::Price),
    ("Skot", Attr::Shots),
    ("Lengd (sek)", Attr::Duration),
    ("Hávaði", Attr::Noise),
    ("Fegurð", Attr::Visual),
    ("Þyngd", Attr::Weight),
    ("Sek/skot", Attr::SecondsPerShot),
    ("Verð/skot", Attr::PricePerShot),
    ("Verð/sek", Attr::PricePerSecond),
    ("Verð/kg", Attr::PricePerKg),
    ("Litir", Attr::Colors),
    ("Lýsing", Attr::Description),
];

/// What: Format one attribute cell for one product.
///
/// Inputs:
/// - `p`: Product being rendered.
/// - `attr`: Attribute of this row.
///
/// Output:
/// - Display string; missing values become the "not applicable" marker,
///   never a blank cell.
fn format_cell(p: &Product, attr: &Attr) -> String {
    /// Trim a raw float to a compact display form.
    fn raw(v: f64) -> String {
        if (v - v.trunc()).abs() < f64::EPSILON {
            format!("{v:.0}")
        } else {
            format!("{v}")
        }
    }
    match attr {
        Attr::Price => format_price(p.price),
        Attr::Shots => p.shots.to_string(),
        Attr::Duration => raw(p.duration),
        Attr::Noise => raw(p.noise),
        Attr::Visual => raw(p.visual),
        Attr::Weight => p.weight.map_or_else(|| NOT_APPLICABLE.to_string(), raw),
        Attr::SecondsPerShot => format!("{:.2}", p.seconds_per_shot),
        Attr::PricePerShot => format!("{:.2}", p.price_per_shot),
        Attr::PricePerSecond => format!("{:.2}", p.price_per_second),
        Attr::PricePerKg => p
            .price_per_kg
            .map_or_else(|| NOT_APPLICABLE.to_string(), |v| format!("{v:.2}")),
        Attr::Colors => p.colors.join(", "),
        Attr::Description => truncate_display(&p.description, DESCRIPTION_MAX_COLS),
    }
}

/// What: Resolve selected ids and build the comparison matrix.
///
/// Inputs:
/// - `catalog`: Full product list.
/// - `selection`: Selected ids, iterated in set order.
///
/// Output:
/// - The resolved products (header column per item) and the fixed attribute
///   rows. Ids that no longer resolve in the catalog are dropped silently
///   rather than producing a malformed column.
#[must_use]
pub fn comparison_matrix<'a, I>(catalog: &[Product], selection: I) -> (Vec<Product>, Vec<CompareRow>)
where
    I: IntoIterator<Item = &'a u32>,
{
    let items: Vec<Product> = selection
        .into_iter()
        .filter_map(|id| catalog.iter().find(|p| p.id == *id).cloned())
        .collect();
    let rows = ROWS
        .iter()
        .map(|(label, attr)| CompareRow {
            label,
            cells: items.iter().map(|p| format_cell(p, attr)).collect(),
        })
        .collect();
    (items, rows)
}
