//! Plain data types shared across the application: the catalog product
//! record, filter criteria, sort state, and UI mode enums.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};

/// One product from the catalog file.
///
/// Field names mirror the upper-case JSON contract of the catalog exporter,
/// including the two keys with embedded spaces. Derived metrics
/// (`seconds_per_shot` and friends) are precomputed upstream and never
/// recalculated here.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "ID")]
    pub id: u32,
    /// Product name.
    #[serde(rename = "NAME")]
    pub name: String,
    /// Long description.
    #[serde(rename = "DESCRIPTION")]
    pub description: String,
    /// Price in whole ISK.
    #[serde(rename = "PRICE")]
    pub price: u64,
    /// Effect colors (non-empty).
    #[serde(rename = "COLORS")]
    pub colors: Vec<String>,
    /// Number of shots.
    #[serde(rename = "SHOTS")]
    pub shots: u32,
    /// Effect duration in seconds.
    #[serde(rename = "DURATION")]
    pub duration: f64,
    /// Noise rating.
    #[serde(rename = "NOISE")]
    pub noise: f64,
    /// Visual rating.
    #[serde(rename = "VISUAL")]
    pub visual: f64,
    /// Net weight in kilograms, when known.
    #[serde(rename = "WEIGHT", default)]
    pub weight: Option<f64>,
    /// Seconds per shot (precomputed).
    #[serde(rename = "SECONDS_PER_SHOT")]
    pub seconds_per_shot: f64,
    /// Price per shot (precomputed).
    #[serde(rename = "PRICE_PER_SHOT")]
    pub price_per_shot: f64,
    /// Price per second (precomputed).
    #[serde(rename = "PRICE_PER_SECOND")]
    pub price_per_second: f64,
    /// Price per kilogram (precomputed). The exporter emits a division
    /// sentinel string when weight is zero or missing; any non-numeric or
    /// non-finite value deserializes to `None`.
    #[serde(
        rename = "PRICE_PER_KG",
        default,
        deserialize_with = "lenient_metric",
        serialize_with = "metric_or_null"
    )]
    pub price_per_kg: Option<f64>,
    /// Product image URL.
    #[serde(rename = "IMAGE URL")]
    pub image_url: String,
    /// Product video URL, when one exists.
    #[serde(rename = "VIDEO URL", default)]
    pub video_url: Option<String>,
}

/// What: Deserialize a derived metric that may arrive as a number, a
/// spreadsheet error string, null, or be absent entirely.
///
/// Inputs:
/// - `de`: Serde deserializer positioned at the metric value.
///
/// Output:
/// - `Some(v)` for finite numbers; `None` for strings that do not parse as a
///   finite number, for non-finite numbers, and for null.
fn lenient_metric<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match raw {
        Some(serde_json::Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()),
        Some(serde_json::Value::String(s)) => {
            s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    })
}

/// What: Serialize an optional metric back out as a number or null.
///
/// Inputs:
/// - `v`: Metric value.
/// - `ser`: Serde serializer.
///
/// Output:
/// - JSON number when present, JSON null when absent.
fn metric_or_null<S>(v: &Option<f64>, ser: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match v {
        Some(x) => ser.serialize_f64(*x),
        None => ser.serialize_none(),
    }
}

/// Active filter criteria for the derived view.
#[derive(Clone, Debug, Default)]
pub struct Criteria {
    /// Inclusive lower price bound.
    pub price_min: u64,
    /// Inclusive upper price bound.
    pub price_max: u64,
    /// Accepted colors. A product matches when ANY of its colors is in this
    /// set; an empty set matches nothing.
    pub colors: BTreeSet<String>,
    /// Case-insensitive free-text query; empty matches everything.
    pub query: String,
}

/// Sortable product field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Product identifier (the default).
    Id,
    /// Product name, compared with Icelandic collation.
    Name,
    /// Price in ISK.
    Price,
    /// Shot count.
    Shots,
    /// Duration in seconds.
    Duration,
    /// Noise rating.
    Noise,
    /// Visual rating.
    Visual,
    /// Net weight; missing weights sort first in ascending order.
    Weight,
    /// Seconds per shot.
    SecondsPerShot,
    /// Price per shot.
    PricePerShot,
    /// Price per second.
    PricePerSecond,
    /// Price per kilogram; not-applicable values sort first ascending.
    PricePerKg,
}

impl SortField {
    /// All sortable fields in the order the sort menu presents them.
    pub const ALL: [Self; 12] = [
        Self::Id,
        Self::Name,
        Self::Price,
        Self::Shots,
        Self::Duration,
        Self::Noise,
        Self::Visual,
        Self::Weight,
        Self::SecondsPerShot,
        Self::PricePerShot,
        Self::PricePerSecond,
        Self::PricePerKg,
    ];

    /// What: Human-readable label for menus and the sort indicator.
    ///
    /// Inputs: none
    ///
    /// Output: Static Icelandic label matching the catalog's column names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Nafn",
            Self::Price => "Verð",
            Self::Shots => "Skot",
            Self::Duration => "Lengd (sek)",
            Self::Noise => "Hávaði",
            Self::Visual => "Fegurð",
            Self::Weight => "Þyngd",
            Self::SecondsPerShot => "Sek/skot",
            Self::PricePerShot => "Verð/skot",
            Self::PricePerSecond => "Verð/sek",
            Self::PricePerKg => "Verð/kg",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl SortDir {
    /// What: Flip the direction.
    ///
    /// Inputs: none
    ///
    /// Output: The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Which rendering surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Spreadsheet-like table with one row per product.
    Table,
    /// Card list with a summary block per product.
    Cards,
}

impl ViewMode {
    /// What: Switch to the other surface.
    ///
    /// Inputs: none
    ///
    /// Output: The surface that is not currently active.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Cards,
            Self::Cards => Self::Table,
        }
    }
}

/// Which region currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Results surface (table or cards).
    Results,
    /// Free-text search input.
    Search,
    /// Filter pane (price bounds and color checkboxes).
    Filters,
}
