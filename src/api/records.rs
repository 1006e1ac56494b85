//! Payment record type shared by the service client and the watcher.

use serde::{Deserialize, Serialize};

/// One payment record as returned by the payment service.
///
/// Only `id` and `status` are interpreted by this crate; everything
/// else the backend sends (timestamps, transaction ids, product
/// details, ...) is carried through unexamined in `extra` so callers
/// can render it without this crate tracking the backend's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// Stable identifier, unique within one user's record set.
    pub id: String,

    /// Current status string, e.g. `PENDING` or `SUCCESS`.
    pub status: String,

    /// The order this payment belongs to, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// The paying user, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Payment amount, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// All remaining fields, passed through unexamined.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PaymentRecord {
    /// Creates a record with just the fields this crate interprets.
    #[must_use]
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            order_id: None,
            user_id: None,
            amount: None,
            extra: serde_json::Map::new(),
        }
    }
}
