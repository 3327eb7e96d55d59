use std::fmt;

use serde::{Deserialize, Serialize};

/// Fulfilment stage of an order, as tagged by the order service.
///
/// The service sends a bare string. The four known tags get their own
/// variants; anything else is kept verbatim in `Other` so it can still be shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Other(String),
}

impl OrderStatus {
    /// The wire tag for this status.
    pub fn tag(&self) -> &str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(tag) => tag,
        }
    }

    /// Display label: the tag with every word's first letter upper-cased.
    pub fn label(&self) -> String {
        capitalize_words(self.tag())
    }
}

impl From<String> for OrderStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Other(tag),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(tag: &str) -> Self {
        OrderStatus::from(tag.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

/// A product snapshot attached to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub quantity: Option<u32>,
}

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    /// ISO 8601 timestamp as sent by the order service.
    pub created_date: String,
    pub status_identifier: OrderStatus,
    /// Already formatted upstream; never re-parsed.
    pub total_sum: String,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

impl Order {
    /// Date portion of `created_date` (everything before the first `T`).
    pub fn order_date(&self) -> &str {
        self.created_date.split('T').next().unwrap_or_default()
    }
}

/// A page of orders plus the service-reported total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderCollection {
    #[serde(default)]
    pub items: Vec<Order>,
    #[serde(default)]
    pub total: u64,
}

impl OrderCollection {
    /// The service returns oldest first; the history page shows newest first.
    pub fn latest_first(mut self) -> Self {
        self.items.reverse();
        self
    }
}
