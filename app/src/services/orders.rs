//! Static order history backing the orders screens (mock data until the
//! commerce backend lands).

use chrono::NaiveDate;
use shared::{Order, OrderKind, OrderStatus, PaymentSummary, ShippingDetails, TimelineEntry};

/// All orders for the account, newest first.
pub fn list_orders() -> Vec<Order> {
    vec![Order {
        id: "ORD-100256".to_string(),
        kind: OrderKind::Product,
        title: "Rapunzel Bundle".to_string(),
        image: "https://via.placeholder.com/60".to_string(),
        status: OrderStatus::Delivered,
        date: NaiveDate::from_ymd_opt(2024, 12, 15).expect("valid calendar date"),
        amount: 5999,
        timeline: vec![
            timeline_entry("Order Placed", "12 Dec, 10:30 AM"),
            timeline_entry("Confirmed", "12 Dec, 12:00 PM"),
            timeline_entry("Shipped", "13 Dec, 09:10 AM"),
            timeline_entry("Delivered", "15 Dec, 06:45 PM"),
        ],
        shipping: ShippingDetails {
            name: "Priya Sharma".to_string(),
            address: "House No. 702, Block D, Bhandup East, Mumbai".to_string(),
            phone: "99999 88888".to_string(),
        },
        payment: PaymentSummary {
            method: "Cash on Delivery".to_string(),
            total: 5999,
            discount: 200,
            delivery: 0,
        },
    }]
}

/// Look up one order for the details screen.
pub fn find_order(id: &str) -> Option<Order> {
    list_orders().into_iter().find(|order| order.id == id)
}

fn timeline_entry(label: &str, date: &str) -> TimelineEntry {
    TimelineEntry {
        label: label.to_string(),
        date: date.to_string(),
    }
}
