pub mod app;
pub mod catalog_state;
pub mod my_orders;
pub mod navigation;
pub mod order_history;
pub mod product_card;
pub mod product_grid;
pub mod session_state;
pub mod status_badge;
pub mod storefront_client;
