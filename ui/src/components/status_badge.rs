use dioxus::prelude::*;

use storefront_common::order::OrderStatus;

/// Icon shown next to a known order status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    Package,
    Truck,
    CheckCircle,
    AlertCircle,
}

impl StatusIcon {
    /// Fixed lookup; unknown tags get no icon.
    pub fn for_status(status: &OrderStatus) -> Option<Self> {
        match status {
            OrderStatus::Processing => Some(StatusIcon::Package),
            OrderStatus::Shipped => Some(StatusIcon::Truck),
            OrderStatus::Delivered => Some(StatusIcon::CheckCircle),
            OrderStatus::Cancelled => Some(StatusIcon::AlertCircle),
            OrderStatus::Other(_) => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            StatusIcon::Package => "📦",
            StatusIcon::Truck => "🚚",
            StatusIcon::CheckCircle => "✔",
            StatusIcon::AlertCircle => "⚠",
        }
    }

    /// CSS class carrying the icon's tone (yellow/blue/green/red).
    pub fn class(self) -> &'static str {
        match self {
            StatusIcon::Package => "status-icon tone-yellow",
            StatusIcon::Truck => "status-icon tone-blue",
            StatusIcon::CheckCircle => "status-icon tone-green",
            StatusIcon::AlertCircle => "status-icon tone-red",
        }
    }
}

/// What a status badge shows.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBadgeView {
    pub icon: Option<StatusIcon>,
    pub label: String,
}

impl StatusBadgeView {
    pub fn for_status(status: &OrderStatus) -> Self {
        Self {
            icon: StatusIcon::for_status(status),
            label: status.label(),
        }
    }
}

#[component]
pub fn StatusBadge(badge: StatusBadgeView) -> Element {
    rsx! {
        span { class: "badge order-status",
            if let Some(icon) = badge.icon {
                span { class: "{icon.class()}", "{icon.glyph()}" }
            }
            span { class: "status-label", "{badge.label}" }
        }
    }
}
