//! Catalog store: loads the static product list once at startup and derives
//! the price bounds and color universe the filter pane is built from.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use crate::state::Product;

/// Result alias for catalog loading.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Read and parse the catalog JSON file.
///
/// Inputs:
/// - `path`: Path to a JSON array of product records.
///
/// Output:
/// - The parsed products, or an error when the file cannot be read or the
///   JSON does not match the contract. The caller surfaces failure as the
///   empty-state screen; nothing here panics.
///
/// Details:
/// - Identifiers are expected to be unique; duplicates are logged at warn
///   level and kept, since downstream lookups resolve the first match.
pub async fn load(path: &Path) -> Result<Vec<Product>> {
    let body = tokio::fs::read_to_string(path).await?;
    let products: Vec<Product> = serde_json::from_str(&body)?;
    let mut seen: HashSet<u32> = HashSet::with_capacity(products.len());
    for p in &products {
        if !seen.insert(p.id) {
            tracing::warn!(id = p.id, name = %p.name, "duplicate product id in catalog");
        }
    }
    tracing::info!(path = %path.display(), count = products.len(), "catalog loaded");
    Ok(products)
}

/// What: Observed minimum and maximum price across the catalog.
///
/// Inputs:
/// - `catalog`: Full product list.
///
/// Output:
/// - `(min, max)`; `(0, 0)` for an empty catalog.
#[must_use]
pub fn price_bounds(catalog: &[Product]) -> (u64, u64) {
    let mut it = catalog.iter().map(|p| p.price);
    let Some(first) = it.next() else {
        return (0, 0);
    };
    it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
}

/// What: Every color present in the catalog, in first-appearance order.
///
/// Inputs:
/// - `catalog`: Full product list.
///
/// Output:
/// - Deduplicated color names ordered by first occurrence, matching how the
///   filter pane lists them.
#[must_use]
pub fn all_colors(catalog: &[Product]) -> Vec<String> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut out = Vec::new();
    for p in catalog {
        for c in &p.colors {
            if seen.insert(c.as_str()) {
                out.push(c.clone());
            }
        }
    }
    out
}
