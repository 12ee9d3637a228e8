use diesel::prelude::*;

use crate::domain::menu_item::{MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub category_id: Option<i32>,
    pub is_available: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price_cents: i32,
    pub category_id: Option<i32>,
    pub is_available: bool,
}

impl From<MenuItem> for DomainMenuItem {
    fn from(value: MenuItem) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price_cents: value.price_cents,
            category_id: value.category_id,
            is_available: value.is_available,
        }
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            name: value.name.as_str(),
            description: value.description.as_deref(),
            price_cents: value.price_cents,
            category_id: value.category_id,
            is_available: value.is_available,
        }
    }
}
