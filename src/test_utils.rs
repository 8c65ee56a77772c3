//! Shared helpers for unit tests.

#[cfg(test)]
use crate::state::Product;

#[cfg(test)]
/// What: Construct a minimal product for logic/UI tests.
///
/// Inputs:
/// - `id`: Identifier.
/// - `price`: Price in ISK.
/// - `colors`: Effect colors.
///
/// Output: Product with sane derived metrics and no optional fields.
pub fn product(id: u32, price: u64, colors: &[&str]) -> Product {
    Product {
        id,
        name: format!("vara {id}"),
        description: format!("lýsing {id}"),
        price,
        colors: colors.iter().map(|c| (*c).to_string()).collect(),
        shots: 10,
        duration: 30.0,
        noise: 2.0,
        visual: 3.0,
        weight: None,
        seconds_per_shot: 3.0,
        price_per_shot: price as f64 / 10.0,
        price_per_second: price as f64 / 30.0,
        price_per_kg: None,
        image_url: format!("https://example.is/{id}.jpg"),
        video_url: None,
    }
}
