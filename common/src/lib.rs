pub mod api;
pub mod currency;
pub mod order;
pub mod product;
pub mod session;
