/// Format a unit price for display, always with two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format an order total. The total arrives pre-formatted from the order
/// service, so it is only prefixed, never re-parsed.
pub fn format_total(total_sum: &str) -> String {
    format!("${total_sum}")
}
