//! Tests for the catalog style helpers and HTML table rendering.

use shopstat::models::sample_catalog;
use shopstat::style::{discount_style, format_discount, format_price, rating_style, render_table};

// ---------------------------------------------------------------------------
// Threshold styles
// ---------------------------------------------------------------------------

#[test]
fn deep_discount_is_green() {
    assert_eq!(discount_style(0.60), "background-color: green; color: white");
}

#[test]
fn token_discount_is_red() {
    assert_eq!(discount_style(0.05), "background-color: red; color: white");
}

#[test]
fn moderate_discount_is_unstyled() {
    assert_eq!(discount_style(0.20), "");
}

#[test]
fn discount_thresholds_are_exclusive() {
    // Exactly at the boundaries no style applies.
    assert_eq!(discount_style(0.5), "");
    assert_eq!(discount_style(0.1), "");
}

#[test]
fn low_ratings_are_orange() {
    assert_eq!(rating_style(2.7), "background-color: orange; color: white");
    assert_eq!(rating_style(2.9), "background-color: orange; color: white");
}

#[test]
fn good_ratings_are_unstyled() {
    assert_eq!(rating_style(4.2), "");
    assert_eq!(rating_style(3.0), "");
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

#[test]
fn prices_format_as_dollars() {
    assert_eq!(format_price(10.0), "$10.00");
    assert_eq!(format_price(15.5), "$15.50");
}

#[test]
fn discounts_format_as_whole_percent() {
    assert_eq!(format_discount(0.60), "60%");
    assert_eq!(format_discount(0.05), "5%");
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

#[test]
fn table_contains_all_products_and_formats() {
    let html = render_table(&sample_catalog());

    assert!(html.contains("<td>A</td>"));
    assert!(html.contains("<td>B</td>"));
    assert!(html.contains("<td>C</td>"));
    assert!(html.contains("$10.00"));
    assert!(html.contains("$15.00"));
    assert!(html.contains("$20.00"));
    assert!(html.contains("60%"));
    assert!(html.contains("5%"));
    assert!(html.contains("20%"));
}

#[test]
fn table_applies_conditional_styles() {
    let html = render_table(&sample_catalog());

    // Product A: deep discount green, good rating unstyled.
    assert!(html.contains("<td style=\"background-color: green; color: white\">60%</td>"));
    assert!(html.contains("<td>4.2</td>"));

    // Product B: token discount red, low rating orange.
    assert!(html.contains("<td style=\"background-color: red; color: white\">5%</td>"));
    assert!(html.contains("<td style=\"background-color: orange; color: white\">2.7</td>"));

    // Product C: moderate discount unstyled, low rating orange.
    assert!(html.contains("<td>20%</td>"));
    assert!(html.contains("<td style=\"background-color: orange; color: white\">2.9</td>"));
}
