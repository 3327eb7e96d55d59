use dioxus::prelude::*;

use storefront_common::api::fetch_order_history;

use super::navigation::on_continue_shopping;
use super::order_history::{Liveness, OrderCardView, OrderHistoryState, OrderHistoryView};
use super::session_state::use_session;
use super::status_badge::StatusBadge;
use super::storefront_client::StorefrontClient;

#[component]
pub fn MyOrders() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut state = use_signal(OrderHistoryState::new);
    let liveness = use_hook(Liveness::new);

    use_drop({
        let liveness = liveness.clone();
        move || liveness.end()
    });

    // One fetch per mount.
    use_hook(|| {
        let liveness = liveness.clone();
        spawn(async move {
            let current = session.peek().session.clone();
            let client = StorefrontClient::from_config();
            let fetch = fetch_order_history(&client, current.as_ref(), chrono::Utc::now()).await;
            liveness.deliver(fetch, |fetch| {
                state.write().complete(fetch);
            });
        })
    });

    let body = match state.read().view() {
        OrderHistoryView::Loading => rsx! {
            div { class: "spinner-wrap",
                div { class: "spinner", role: "progressbar" }
            }
        },
        OrderHistoryView::Ready { cards, empty_state } => rsx! {
            {cards.into_iter().map(|card| {
                let key = card.key;
                rsx! {
                    OrderCard { key: "{key}", card }
                }
            })}
            if empty_state {
                EmptyOrders { on_continue: on_continue_shopping(nav) }
            }
        },
    };

    rsx! {
        div { class: "my-orders",
            h1 { class: "page-title", "My Orders" }
            {body}
        }
    }
}

#[component]
fn OrderCard(card: OrderCardView) -> Element {
    rsx! {
        div { class: "order-card",
            div { class: "order-header",
                h2 { class: "order-id", "{card.heading}" }
                StatusBadge { badge: card.status.clone() }
            }
            div { class: "order-meta",
                span { class: "order-date", "{card.date_label}" }
                span { class: "order-total", "{card.total_label}" }
            }
            div { class: "order-lines",
                {card.lines.iter().map(|line| {
                    rsx! {
                        div { class: "order-line",
                            key: "{line.key}",
                            div { class: "order-line-info",
                                h3 { "{line.title}" }
                                p { class: "order-line-quantity", "{line.quantity_label}" }
                            }
                            span { class: "order-line-price", "{line.price_label}" }
                        }
                    }
                })}
            }
        }
    }
}

/// Shown when the order service reports no orders.
#[component]
fn EmptyOrders(on_continue: EventHandler<()>) -> Element {
    rsx! {
        div { class: "empty-state",
            span { class: "empty-icon", "✖" }
            h2 { "No orders found" }
            p { "You haven't placed any orders yet. Start shopping now!" }
            button {
                class: "btn-primary",
                onclick: move |_| on_continue.call(()),
                "Continue Shopping"
            }
        }
    }
}
