//! Order model adaptation.
//!
//! The order backend has changed shape several times; payloads may use
//! `orderId` or `id`, `items` or `products`, `unitPrice` or `price`.
//! [`Order::from_value`] absorbs all of those variants so the rest of
//! the console works with one stable shape.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Console-side order status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Waiting for payment.
    Pending,
    /// Paid, being prepared.
    Processing,
    /// Handed to logistics.
    Shipped,
    /// Delivered and closed.
    Completed,
    /// A backend status this console version does not know about,
    /// passed through verbatim.
    #[serde(untagged)]
    Other(String),
}

impl OrderStatus {
    /// Maps a backend status code to the console status.
    ///
    /// Unknown codes are passed through rather than rejected so a
    /// backend rollout of a new status never breaks order rendering.
    #[must_use]
    pub fn from_backend(status: &str) -> Self {
        match status {
            "PENDING_PAYMENT" | "pending" => Self::Pending,
            "PROCESSING" | "PAID" | "processing" => Self::Processing,
            "SHIPPED" | "DELIVERED" | "shipped" => Self::Shipped,
            "COMPLETED" | "FINISH" | "completed" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the console identifier for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Other(s) => s,
        }
    }

    /// Returns the human-readable status label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Awaiting payment",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Completed => "Completed",
            Self::Other(s) => s,
        }
    }

    /// Returns the UI tag class used when rendering the status.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Pending => "warning",
            Self::Processing => "info",
            Self::Shipped => "primary",
            Self::Completed => "success",
            Self::Other(_) => "default",
        }
    }
}

/// One product line within an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    /// Product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Quantity ordered.
    pub quantity: u32,
    /// Product image URL.
    pub image: String,
    /// Selected variant attributes, e.g. color or size.
    pub attrs: String,
}

impl OrderItem {
    /// Adapts one backend item, tolerating both the order-service field
    /// names (`productId`, `productName`, `unitPrice`) and the console
    /// names (`id`, `name`, `price`).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: string_field(value, &["productId", "id"]).unwrap_or_default(),
            name: string_field(value, &["productName", "name"]).unwrap_or_default(),
            price: number_field(value, &["unitPrice", "price"]).unwrap_or(0.0),
            quantity: number_field(value, &["quantity"]).map_or(1, |q| q as u32),
            image: string_field(value, &["image"])
                .unwrap_or_else(|| "https://picsum.photos/200/200".to_string()),
            attrs: string_field(value, &["attrs"]).unwrap_or_else(|| "standard".to_string()),
        }
    }
}

/// Logistics summary attached to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logistics {
    /// Shipping status text.
    pub status: String,
    /// Carrier name.
    pub company: String,
    /// Carrier tracking number, empty when not yet assigned.
    pub tracking_number: String,
}

impl Logistics {
    fn from_value(value: Option<&Value>) -> Self {
        Self {
            status: value
                .and_then(|v| string_field(v, &["status"]))
                .unwrap_or_else(|| "Awaiting shipment".to_string()),
            company: value
                .and_then(|v| string_field(v, &["company"]))
                .unwrap_or_else(|| "SF Express".to_string()),
            tracking_number: value
                .and_then(|v| string_field(v, &["trackingNumber"]))
                .unwrap_or_default(),
        }
    }
}

/// Console-side order model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    /// Order identifier.
    pub id: String,
    /// Owning user, stringified whether the backend sends it as a
    /// number or a string.
    pub user_id: String,
    /// Order time as `YYYY-MM-DD HH:MM:SS`.
    pub date: String,
    /// Console status.
    pub status: OrderStatus,
    /// Product lines.
    pub products: Vec<OrderItem>,
    /// Logistics summary.
    pub logistics: Logistics,
    /// Shipping address.
    pub shipping_address: String,
    /// Order total; computed from the items when the backend omits it.
    pub total_amount: f64,
}

impl Order {
    /// Adapts one backend order payload into the console model.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let products: Vec<OrderItem> = value
            .get("items")
            .or_else(|| value.get("products"))
            .and_then(Value::as_array)
            .map(|items| items.iter().map(OrderItem::from_value).collect())
            .unwrap_or_default();

        let total = number_field(value, &["totalAmount"]).unwrap_or_else(|| total_amount(&products));

        Self {
            id: string_field(value, &["orderId", "id"]).unwrap_or_else(generated_order_id),
            user_id: string_field(value, &["userId"]).unwrap_or_else(|| "0".to_string()),
            date: string_field(value, &["orderTime", "date"])
                .map(|d| normalize_date(&d))
                .unwrap_or_default(),
            status: value
                .get("status")
                .and_then(Value::as_str)
                .map_or(OrderStatus::Pending, OrderStatus::from_backend),
            products,
            logistics: Logistics::from_value(value.get("logistics")),
            shipping_address: string_field(value, &["shippingAddress"]).unwrap_or_default(),
            total_amount: total,
        }
    }

    /// Total number of items across all product lines.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.products.iter().map(|p| p.quantity).sum()
    }
}

/// Order data submitted by the console to create an order.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Owning user.
    pub user_id: String,
    /// Shipping address.
    pub shipping_address: String,
    /// Product lines.
    pub products: Vec<OrderItem>,
    /// Explicit total; computed from the items when `None`.
    pub total_amount: Option<f64>,
}

impl OrderDraft {
    /// Builds the create-order request payload in the backend's shape.
    #[must_use]
    pub fn to_request_value(&self) -> Value {
        serde_json::json!({
            "userId": self.user_id,
            "totalAmount": self.total_amount.unwrap_or_else(|| total_amount(&self.products)),
            "shippingAddress": self.shipping_address,
            "items": self.products.iter().map(|p| serde_json::json!({
                "productId": p.id,
                "productName": p.name,
                "quantity": p.quantity,
                "unitPrice": p.price,
            })).collect::<Vec<_>>(),
        })
    }
}

/// Sums `price * quantity` over the product lines.
#[must_use]
pub fn total_amount(products: &[OrderItem]) -> f64 {
    products
        .iter()
        .map(|p| p.price * f64::from(p.quantity))
        .sum()
}

/// Keeps only orders in the given console status. `"all"` keeps everything.
#[must_use]
pub fn filter_by_status<'a>(orders: &'a [Order], status: &str) -> Vec<&'a Order> {
    if status == "all" {
        return orders.iter().collect();
    }
    orders
        .iter()
        .filter(|o| o.status.as_str() == status)
        .collect()
}

/// Searches orders by id or product name, case-insensitively.
#[must_use]
pub fn search<'a>(orders: &'a [Order], keyword: &str) -> Vec<&'a Order> {
    if keyword.is_empty() {
        return orders.iter().collect();
    }
    let keyword = keyword.to_lowercase();
    orders
        .iter()
        .filter(|o| {
            o.id.to_lowercase().contains(&keyword)
                || o.products
                    .iter()
                    .any(|p| p.name.to_lowercase().contains(&keyword))
        })
        .collect()
}

/// Keeps orders whose date falls within `[start, end]`, both inclusive,
/// given as `YYYY-MM-DD`. ISO-style dates compare lexicographically.
#[must_use]
pub fn filter_by_date_range<'a>(orders: &'a [Order], start: &str, end: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| {
            let day = o.date.get(..10).unwrap_or("");
            !day.is_empty() && day >= start && day <= end
        })
        .collect()
}

/// Reads the first present field as a string, stringifying numbers.
fn string_field(value: &Value, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| match value.get(name)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Reads the first present field as a number.
fn number_field(value: &Value, names: &[&str]) -> Option<f64> {
    names
        .iter()
        .find_map(|name| value.get(name).and_then(Value::as_f64))
}

/// Converts ISO timestamps (`2023-11-01T14:30:22.716`) to the console's
/// `YYYY-MM-DD HH:MM:SS` display form; anything else passes through.
fn normalize_date(date: &str) -> String {
    if date.contains('T') {
        let spaced = date.replacen('T', " ", 1);
        spaced
            .split_once('.')
            .map_or(spaced.clone(), |(head, _)| head.to_string())
    } else {
        date.to_string()
    }
}

/// Fallback id for payloads missing both `orderId` and `id`, only used
/// so list rendering still has a unique key.
fn generated_order_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("ORD-{}", &uuid[..8])
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
