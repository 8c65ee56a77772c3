use blossi as crate_root;

use crate_root::logic;
use crate_root::state::{AppState, Product, SortDir, SortField};

fn product(id: u32, name: &str, price: u64, colors: &[&str]) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: format!("{name} lýsing"),
        price,
        colors: colors.iter().map(|c| (*c).to_string()).collect(),
        shots: 10,
        duration: 30.0,
        noise: 2.0,
        visual: 3.0,
        weight: Some(1.5),
        seconds_per_shot: 3.0,
        price_per_shot: price as f64 / 10.0,
        price_per_second: price as f64 / 30.0,
        price_per_kg: Some(price as f64 / 1.5),
        image_url: format!("https://example.is/{id}.jpg"),
        video_url: None,
    }
}

fn app_with(products: Vec<Product>) -> AppState {
    let mut app = AppState::default();
    app.catalog = products;
    app.loading = false;
    logic::init_from_catalog(&mut app, None, 100);
    app
}

fn sample() -> AppState {
    app_with(vec![
        product(1, "Rauð kerti", 1200, &["Rauður"]),
        product(2, "Blár hvellur", 4500, &["Blár", "Grænn"]),
        product(3, "Gullregn", 9900, &["Gylltur"]),
        product(4, "Þruma", 2500, &["Rauður", "Blár"]),
    ])
}

/// What: Price window and color set combine conjunctively
///
/// - Input: Price capped at 1500 with only "Rauður" accepted
/// - Output: Only product 1 remains
#[test]
fn price_and_color_filters_are_conjunctive() {
    let mut app = sample();
    logic::clear_colors(&mut app);
    logic::toggle_color(&mut app, "Rauður");
    let delta = -(app.price_ceil as i64 - 1500);
    logic::nudge_price_max(&mut app, delta);
    let ids: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1]);
}

/// What: A product matches when any of its colors is accepted
///
/// - Input: Only "Blár" accepted
/// - Output: Products 2 and 4, which both list blue among others
#[test]
fn any_accepted_color_matches() {
    let mut app = sample();
    logic::clear_colors(&mut app);
    logic::toggle_color(&mut app, "Blár");
    let ids: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

/// What: The free-text query narrows across name fields case-insensitively
///
/// - Input: Query "blár"
/// - Output: Product 2 by name and product 4 by color
#[test]
fn query_searches_names_and_colors() {
    let mut app = sample();
    logic::set_query(&mut app, "blár".to_string());
    let ids: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

/// What: Re-applying identical criteria leaves the view unchanged
///
/// - Input: The same query applied twice
/// - Output: Identical id sequences
#[test]
fn filtering_is_idempotent() {
    let mut app = sample();
    logic::set_query(&mut app, "r".to_string());
    let first: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    logic::set_query(&mut app, "r".to_string());
    let second: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_eq!(first, second);
}

/// What: Every catalog product is either in the view or fails the criteria
///
/// - Input: A narrowed view
/// - Output: The view and its complement partition the catalog
#[test]
fn view_partitions_catalog() {
    let mut app = sample();
    logic::set_query(&mut app, "blár".to_string());
    let shown: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    for p in &app.catalog {
        let matches = logic::matches_criteria(p, &app.criteria);
        assert_eq!(shown.contains(&p.id), matches, "product {}", p.id);
    }
}

/// What: Choosing the same sort field twice returns the original order
///
/// - Input: Sort by price, then by price again, then twice more
/// - Output: Direction flips each time; two flips restore the sequence
#[test]
fn double_sort_toggle_round_trips() {
    let mut app = sample();
    logic::set_sort_field(&mut app, SortField::Price);
    let asc: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_eq!(app.sort_dir, SortDir::Asc);
    logic::set_sort_field(&mut app, SortField::Price);
    assert_eq!(app.sort_dir, SortDir::Desc);
    let desc: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_ne!(asc, desc);
    logic::set_sort_field(&mut app, SortField::Price);
    let asc_again: Vec<u32> = app.view.iter().map(|p| p.id).collect();
    assert_eq!(asc, asc_again);
}

/// What: Name sorting respects Icelandic letter order
///
/// - Input: Names starting with B, G, R, Þ
/// - Output: Þ sorts after the Latin letters, not by code point
#[test]
fn name_sort_uses_icelandic_collation() {
    let mut app = sample();
    logic::set_sort_field(&mut app, SortField::Name);
    let names: Vec<&str> = app.view.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Blár hvellur", "Gullregn", "Rauð kerti", "Þruma"]);
}

/// What: The cursor follows its product across a re-sort
///
/// - Input: Cursor on product 3, then sort by price
/// - Output: Cursor index points at product 3's new position
#[test]
fn cursor_follows_product_across_sort() {
    let mut app = sample();
    let pos = app.view.iter().position(|p| p.id == 3).unwrap();
    app.select_row(pos);
    logic::set_sort_field(&mut app, SortField::Price);
    assert_eq!(app.view[app.cursor].id, 3);
}

/// What: Selection caps at four and a fifth toggle is refused
///
/// - Input: Five toggle attempts on distinct products
/// - Output: Four selected; the fifth returns false and changes nothing
#[test]
fn selection_caps_at_four() {
    let mut app = app_with(
        (1..=6)
            .map(|i| product(i, &format!("vara {i}"), u64::from(i) * 1000, &["Rauður"]))
            .collect(),
    );
    for id in 1..=4 {
        assert!(logic::toggle_selection(&mut app, id));
    }
    assert!(!logic::toggle_selection(&mut app, 5));
    assert_eq!(app.selection.len(), 4);
    assert!(!app.selection.contains(&5));
}

/// What: Comparison is offered only for two to four selected products
///
/// - Input: Selection sizes 0 through 4
/// - Output: `can_compare` is true exactly for 2, 3, and 4
#[test]
fn compare_window_is_two_to_four() {
    let mut app = sample();
    assert!(!logic::can_compare(&app));
    logic::toggle_selection(&mut app, 1);
    assert!(!logic::can_compare(&app));
    logic::toggle_selection(&mut app, 2);
    assert!(logic::can_compare(&app));
    logic::toggle_selection(&mut app, 3);
    logic::toggle_selection(&mut app, 4);
    assert!(logic::can_compare(&app));
}

/// What: Narrowing the view never drops products from the selection
///
/// - Input: Two selected, then a query that hides both
/// - Output: Selection intact; clearing the query shows them again
#[test]
fn selection_survives_filtering() {
    let mut app = sample();
    logic::toggle_selection(&mut app, 1);
    logic::toggle_selection(&mut app, 3);
    logic::set_query(&mut app, "hvellur".to_string());
    assert_eq!(app.view.len(), 1);
    assert!(app.selection.contains(&1));
    assert!(app.selection.contains(&3));
    logic::set_query(&mut app, String::new());
    assert_eq!(app.view.len(), 4);
}

/// What: The comparison matrix pairs each selected product with every row
///
/// - Input: Products 1 and 3 selected
/// - Output: Two columns per row; price row carries formatted prices
#[test]
fn comparison_matrix_shape_and_prices() {
    let app = {
        let mut a = sample();
        logic::toggle_selection(&mut a, 1);
        logic::toggle_selection(&mut a, 3);
        a
    };
    let (items, rows) = logic::comparison_matrix(&app.catalog, app.selection.iter());
    assert_eq!(items.len(), 2);
    assert!(!rows.is_empty());
    for row in &rows {
        assert_eq!(row.cells.len(), 2);
    }
    let price_row = rows.iter().find(|r| r.label == "Verð").unwrap();
    assert_eq!(price_row.cells[0], "1.200");
    assert_eq!(price_row.cells[1], "9.900");
}

/// What: Price bounds clamp at the catalog extremes and keep their gap
///
/// - Input: Oversized nudges in both directions
/// - Output: Bounds stay inside [floor, ceil] and never cross
#[test]
fn price_bounds_clamp_and_never_cross() {
    let mut app = sample();
    logic::nudge_price_min(&mut app, -1_000_000);
    assert_eq!(app.criteria.price_min, app.price_floor);
    logic::nudge_price_max(&mut app, 1_000_000);
    assert_eq!(app.criteria.price_max, app.price_ceil);
    logic::nudge_price_min(&mut app, 1_000_000);
    assert!(app.criteria.price_min + app.price_gap <= app.criteria.price_max);
}

/// What: Unchecking every color empties the view without touching criteria
///
/// - Input: `clear_colors`
/// - Output: Zero matches; `select_all_colors` restores the full view
#[test]
fn empty_color_set_matches_nothing() {
    let mut app = sample();
    logic::clear_colors(&mut app);
    assert!(app.view.is_empty());
    logic::select_all_colors(&mut app);
    assert_eq!(app.view.len(), 4);
}
