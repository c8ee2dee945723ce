//! Conditional cell styling for the product catalog table.
//!
//! The style helpers map a numeric value to an inline CSS declaration (or an
//! empty string when no threshold is crossed); `render_table` assembles the
//! catalog rows into a small standalone HTML table with those declarations
//! applied per cell.

use crate::models::Product;

/// Style for a discount cell: deep discounts are highlighted green, token
/// discounts red.
pub fn discount_style(discount: f64) -> &'static str {
    if discount > 0.5 {
        "background-color: green; color: white"
    } else if discount < 0.1 {
        "background-color: red; color: white"
    } else {
        ""
    }
}

/// Style for a rating cell: sub-3-star ratings are highlighted orange.
pub fn rating_style(rating: f64) -> &'static str {
    if rating < 3.0 {
        "background-color: orange; color: white"
    } else {
        ""
    }
}

/// Format a price as a dollar amount with two decimals (`$10.00`).
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Format a fractional discount as a whole percentage (`0.60` -> `60%`).
pub fn format_discount(discount: f64) -> String {
    format!("{:.0}%", discount * 100.0)
}

/// Render the catalog as a standalone HTML table with conditional styling
/// on the discount and rating columns.
pub fn render_table(products: &[Product]) -> String {
    let mut html = String::new();
    html.push_str("<table>\n");
    html.push_str("  <thead>\n");
    html.push_str("    <tr><th>Product</th><th>Price</th><th>Discount</th><th>Rating</th></tr>\n");
    html.push_str("  </thead>\n");
    html.push_str("  <tbody>\n");

    for p in products {
        html.push_str("    <tr>");
        html.push_str(&format!("<td>{}</td>", p.name));
        html.push_str(&format!("<td>{}</td>", format_price(p.price)));
        html.push_str(&styled_cell(&format_discount(p.discount), discount_style(p.discount)));
        html.push_str(&styled_cell(&format!("{}", p.rating), rating_style(p.rating)));
        html.push_str("</tr>\n");
    }

    html.push_str("  </tbody>\n");
    html.push_str("</table>\n");
    html
}

fn styled_cell(value: &str, style: &str) -> String {
    if style.is_empty() {
        format!("<td>{}</td>", value)
    } else {
        format!("<td style=\"{}\">{}</td>", style, value)
    }
}
