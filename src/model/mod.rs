//! Data-shape adapters between backend payloads and console models.

mod order;

pub use order::{
    Logistics, Order, OrderDraft, OrderItem, OrderStatus, filter_by_date_range, filter_by_status,
    search, total_amount,
};
