//! Tests for the order model adaptation.

use super::*;

fn backend_order() -> Value {
    serde_json::json!({
        "orderId": "ORD-10001",
        "userId": 551,
        "orderTime": "2023-11-01T14:30:22.7168652",
        "status": "PENDING_PAYMENT",
        "shippingAddress": "88 Century Avenue, Pudong",
        "items": [
            {
                "productId": "P-007",
                "productName": "Wireless Mouse",
                "unitPrice": 50.0,
                "quantity": 2
            },
            {
                "productId": "P-008",
                "productName": "Mouse Pad",
                "unitPrice": 20.0,
                "quantity": 1
            }
        ]
    })
}

#[test]
fn adapts_backend_field_names() {
    let order = Order::from_value(&backend_order());

    assert_eq!(order.id, "ORD-10001");
    assert_eq!(order.user_id, "551");
    assert_eq!(order.date, "2023-11-01 14:30:22");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.products.len(), 2);
    assert_eq!(order.products[0].id, "P-007");
    assert_eq!(order.products[0].name, "Wireless Mouse");
    assert_eq!(order.products[0].price, 50.0);
    assert_eq!(order.shipping_address, "88 Century Avenue, Pudong");
}

#[test]
fn adapts_console_field_names() {
    let order = Order::from_value(&serde_json::json!({
        "id": "ORD-10002",
        "userId": "USER_001",
        "date": "2023-10-25 09:15:37",
        "status": "shipped",
        "products": [
            {"id": "P-003", "name": "Mechanical Keyboard", "price": 299.0, "quantity": 1}
        ]
    }));

    assert_eq!(order.id, "ORD-10002");
    assert_eq!(order.user_id, "USER_001");
    assert_eq!(order.date, "2023-10-25 09:15:37");
    assert_eq!(order.status, OrderStatus::Shipped);
    assert_eq!(order.products[0].name, "Mechanical Keyboard");
}

#[test]
fn computes_total_when_backend_omits_it() {
    let order = Order::from_value(&backend_order());
    assert_eq!(order.total_amount, 120.0);
}

#[test]
fn prefers_explicit_total() {
    let mut value = backend_order();
    value["totalAmount"] = serde_json::json!(115.0);

    let order = Order::from_value(&value);
    assert_eq!(order.total_amount, 115.0);
}

#[test]
fn total_quantity_sums_product_lines() {
    let order = Order::from_value(&backend_order());
    assert_eq!(order.total_quantity(), 3);
}

#[test]
fn fills_defaults_for_missing_fields() {
    let order = Order::from_value(&serde_json::json!({}));

    assert!(order.id.starts_with("ORD-"));
    assert_eq!(order.user_id, "0");
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.products.is_empty());
    assert_eq!(order.logistics.status, "Awaiting shipment");
    assert_eq!(order.logistics.company, "SF Express");
    assert_eq!(order.total_amount, 0.0);
}

#[test]
fn unknown_status_passes_through() {
    let mut value = backend_order();
    value["status"] = serde_json::json!("REFUND_REQUESTED");

    let order = Order::from_value(&value);
    assert_eq!(
        order.status,
        OrderStatus::Other("REFUND_REQUESTED".to_string())
    );
    assert_eq!(order.status.as_str(), "REFUND_REQUESTED");
    assert_eq!(order.status.tag(), "default");
}

#[test]
fn status_labels_and_tags() {
    assert_eq!(OrderStatus::from_backend("PAID"), OrderStatus::Processing);
    assert_eq!(OrderStatus::from_backend("FINISH"), OrderStatus::Completed);
    assert_eq!(OrderStatus::Pending.label(), "Awaiting payment");
    assert_eq!(OrderStatus::Pending.tag(), "warning");
    assert_eq!(OrderStatus::Completed.tag(), "success");
}

#[test]
fn item_defaults_quantity_and_attrs() {
    let item = OrderItem::from_value(&serde_json::json!({"productId": "P-1"}));

    assert_eq!(item.quantity, 1);
    assert_eq!(item.attrs, "standard");
    assert_eq!(item.price, 0.0);
    assert!(!item.image.is_empty());
}

#[test]
fn draft_builds_backend_request_payload() {
    let draft = OrderDraft {
        user_id: "551".to_string(),
        shipping_address: "1 Guomao, Chaoyang".to_string(),
        products: vec![OrderItem {
            id: "P-007".to_string(),
            name: "Wireless Mouse".to_string(),
            price: 50.0,
            quantity: 2,
            image: String::new(),
            attrs: String::new(),
        }],
        total_amount: None,
    };

    let payload = draft.to_request_value();

    assert_eq!(
        payload,
        serde_json::json!({
            "userId": "551",
            "totalAmount": 100.0,
            "shippingAddress": "1 Guomao, Chaoyang",
            "items": [{
                "productId": "P-007",
                "productName": "Wireless Mouse",
                "quantity": 2,
                "unitPrice": 50.0
            }]
        })
    );
}

#[test]
fn filter_by_status_keeps_matching_orders() {
    let orders = vec![
        Order::from_value(&serde_json::json!({"id": "A", "status": "PENDING_PAYMENT"})),
        Order::from_value(&serde_json::json!({"id": "B", "status": "SHIPPED"})),
    ];

    let pending = filter_by_status(&orders, "pending");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "A");

    assert_eq!(filter_by_status(&orders, "all").len(), 2);
}

#[test]
fn search_matches_id_and_product_name() {
    let orders = vec![
        Order::from_value(&backend_order()),
        Order::from_value(&serde_json::json!({"id": "ORD-20001", "status": "SHIPPED"})),
    ];

    assert_eq!(search(&orders, "mouse").len(), 1);
    assert_eq!(search(&orders, "ord-20001").len(), 1);
    assert_eq!(search(&orders, "").len(), 2);
    assert!(search(&orders, "keyboard").is_empty());
}

#[test]
fn date_range_filter_is_inclusive() {
    let orders = vec![
        Order::from_value(&backend_order()), // 2023-11-01
        Order::from_value(&serde_json::json!({
            "id": "B", "status": "SHIPPED", "date": "2023-10-25 09:15:37"
        })),
    ];

    let range = filter_by_date_range(&orders, "2023-11-01", "2023-11-30");
    assert_eq!(range.len(), 1);
    assert_eq!(range[0].id, "ORD-10001");

    assert_eq!(
        filter_by_date_range(&orders, "2023-10-01", "2023-11-30").len(),
        2
    );
    assert!(filter_by_date_range(&orders, "2024-01-01", "2024-12-31").is_empty());
}

#[test]
fn normalizes_iso_dates_only() {
    let order = Order::from_value(&serde_json::json!({
        "id": "A", "status": "SHIPPED", "orderTime": "2025-07-08T16:14:31.7168652"
    }));
    assert_eq!(order.date, "2025-07-08 16:14:31");
}
