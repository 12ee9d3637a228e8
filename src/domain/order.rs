use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::cart::CartLine;

/// Possible lifecycle states for a placed order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Order has been submitted and awaits the kitchen.
    Pending,
    /// Order is being prepared.
    Preparing,
    /// Order has been brought to the table.
    Served,
    /// Order has been cancelled and should not be prepared.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl From<OrderStatus> for &'static str {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Served => "Served",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "Preparing" => Self::Preparing,
            "Served" => Self::Served,
            "Cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

/// Domain representation of a placed order together with its lines.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Store-assigned identifier of the order.
    pub id: i32,
    /// Table the order was taken at.
    pub table_id: i32,
    /// Staff member who took the order.
    pub user_id: i32,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Header total in the smallest currency unit. Equals the sum of the
    /// line totals captured at submission time.
    pub total_cents: i32,
    /// Timestamp of the submission.
    pub order_date: NaiveDateTime,
    /// Lines submitted with this order.
    pub items: Vec<OrderItem>,
}

/// One persisted line tying a menu item and quantity to an order header.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    /// Identifier of the owning order header.
    pub order_id: i32,
    /// Menu item the line refers to. A later catalog delete leaves this
    /// pointing at a missing item; the line keeps its captured price.
    pub item_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

/// Payload required to insert a new order header and its lines.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub table_id: i32,
    pub user_id: i32,
    pub status: OrderStatus,
    pub total_cents: i32,
    pub order_date: NaiveDateTime,
    pub items: Vec<NewOrderItem>,
}

/// One line of a new order; the header id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub item_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

impl NewOrder {
    /// Build an order payload with status `Pending` and the current
    /// timestamp, matching what submission requires.
    pub fn new(table_id: i32, user_id: i32, total_cents: i32) -> Self {
        Self {
            table_id,
            user_id,
            status: OrderStatus::default(),
            total_cents,
            order_date: chrono::Local::now().naive_utc(),
            items: Vec::new(),
        }
    }

    /// Attach the lines to submit with the header.
    pub fn with_items(mut self, items: impl Into<Vec<NewOrderItem>>) -> Self {
        self.items = items.into();
        self
    }

    /// Override the default status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }
}

impl From<&CartLine> for NewOrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            item_id: line.item_id,
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
        }
    }
}

/// Query definition used to list orders, newest first.
#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional table filter.
    pub table_id: Option<i32>,
}

impl OrderListQuery {
    /// Construct a query matching every order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filter the results by table.
    pub fn table_id(mut self, table_id: i32) -> Self {
        self.table_id = Some(table_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Preparing,
            OrderStatus::Served,
            OrderStatus::Cancelled,
        ] {
            let text: &'static str = status.into();
            assert_eq!(OrderStatus::from(text), status);
        }
    }

    #[test]
    fn unknown_status_text_falls_back_to_pending() {
        assert_eq!(OrderStatus::from("Refunded"), OrderStatus::Pending);
    }
}
