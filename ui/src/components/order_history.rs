//! Display state for the order history page.
//!
//! The page loads once: `Loading` until the single fetch completes, then
//! `Ready` for the rest of its life. Whatever the fetch outcome, `Ready`
//! holds an [`OrderCollection`]; failures and missing sessions show up as the
//! empty collection and are only distinguished in the logs.

use std::cell::Cell;
use std::rc::Rc;

use storefront_common::api::OrderFetch;
use storefront_common::currency::{format_price, format_total};
use storefront_common::order::{LineItem, Order, OrderCollection};

use super::status_badge::StatusBadgeView;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderHistoryState {
    phase: Phase,
    /// Newest first once ready.
    orders: OrderCollection,
}

impl Default for OrderHistoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderHistoryState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            orders: OrderCollection::default(),
        }
    }

    /// Apply the fetch result. Only the first completion counts; returns
    /// whether this one was applied.
    pub fn complete(&mut self, fetch: OrderFetch) -> bool {
        if self.phase == Phase::Ready {
            tracing::debug!("Ignoring extra order fetch completion ({})", fetch.kind());
            return false;
        }

        match &fetch {
            OrderFetch::Loaded(collection) => {
                tracing::debug!(
                    "Order history loaded: {} items, total {}",
                    collection.items.len(),
                    collection.total
                );
            }
            OrderFetch::Empty => tracing::debug!("Order service returned no data"),
            OrderFetch::AuthRequired => tracing::info!("Order history needs a signed-in session"),
            OrderFetch::Failed(e) => tracing::warn!("Order history fetch failed: {e}"),
        }

        self.orders = fetch.into_collection().latest_first();
        self.phase = Phase::Ready;
        true
    }

    /// What the page should render for the current state.
    pub fn view(&self) -> OrderHistoryView {
        match self.phase {
            Phase::Loading => OrderHistoryView::Loading,
            Phase::Ready => OrderHistoryView::Ready {
                cards: self.orders.items.iter().map(OrderCardView::from_order).collect(),
                // Keyed on the reported total, not on the item count.
                empty_state: self.orders.total == 0,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderHistoryView {
    /// Spinner only.
    Loading,
    /// `cards` and `empty_state` are independent; both render when set.
    Ready {
        cards: Vec<OrderCardView>,
        empty_state: bool,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderCardView {
    pub key: u64,
    pub heading: String,
    pub status: StatusBadgeView,
    pub date_label: String,
    pub total_label: String,
    pub lines: Vec<LineItemView>,
}

impl OrderCardView {
    pub fn from_order(order: &Order) -> Self {
        Self {
            key: order.id,
            heading: format!("Order #{}", order.id),
            status: StatusBadgeView::for_status(&order.status_identifier),
            date_label: format!("Order Date: {}", order.order_date()),
            total_label: format!("Total: {}", format_total(&order.total_sum)),
            lines: order.products.iter().map(LineItemView::from_item).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineItemView {
    pub key: u64,
    pub title: String,
    pub quantity_label: String,
    pub price_label: String,
}

impl LineItemView {
    pub fn from_item(item: &LineItem) -> Self {
        let quantity = item.quantity.map(|q| q.to_string()).unwrap_or_default();
        Self {
            key: item.id,
            title: item.title.clone(),
            quantity_label: format!("Quantity: {quantity}"),
            price_label: format_price(item.price),
        }
    }
}

/// Whether the view that started a fetch is still mounted.
///
/// Cloned into the fetch task; the view ends it on teardown so a late
/// result is dropped instead of written into a dead component.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    /// Hand `value` to `apply` if still alive; returns whether it was delivered.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if !self.is_alive() {
            tracing::debug!("Dropping result for unmounted view");
            return false;
        }
        apply(value);
        true
    }
}
