use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
    OrderItem as DomainOrderItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub table_id: i32,
    pub user_id: i32,
    pub total_cents: i32,
    pub status: String,
    pub order_date: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub table_id: i32,
    pub user_id: i32,
    pub total_cents: i32,
    pub status: &'a str,
    pub order_date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i32,
}

impl Order {
    pub fn into_domain(self, items: Vec<OrderItem>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            table_id: self.table_id,
            user_id: self.user_id,
            status: self.status.as_str().into(),
            total_cents: self.total_cents,
            order_date: self.order_date,
            items: items.into_iter().map(OrderItem::into_domain).collect(),
        }
    }
}

impl OrderItem {
    pub fn into_domain(self) -> DomainOrderItem {
        DomainOrderItem {
            order_id: self.order_id,
            item_id: self.item_id,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from(value: (Order, Vec<OrderItem>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(value: &'a DomainNewOrder) -> Self {
        Self {
            table_id: value.table_id,
            user_id: value.user_id,
            total_cents: value.total_cents,
            status: value.status.into(),
            order_date: value.order_date,
        }
    }
}

impl NewOrderItem {
    pub fn from_domain(order_id: i32, value: &DomainNewOrderItem) -> Self {
        Self {
            order_id,
            item_id: value.item_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
        }
    }
}
