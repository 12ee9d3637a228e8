use serde::{Deserialize, Serialize};

/// Domain representation of an orderable menu item.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    /// Unique identifier of the item.
    pub id: i32,
    /// Human-readable name shown on the menu.
    pub name: String,
    /// Optional longer description shown to staff.
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    pub price_cents: i32,
    /// Optional reference to the owning category.
    pub category_id: Option<i32>,
    /// Whether the item can currently be ordered.
    pub is_available: bool,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    /// Human-readable name shown on the menu.
    pub name: String,
    /// Optional longer description shown to staff.
    pub description: Option<String>,
    /// Price in the smallest currency unit.
    pub price_cents: i32,
    /// Optional reference to the owning category.
    pub category_id: Option<i32>,
    /// Whether the item can be ordered right away.
    pub is_available: bool,
}

impl NewMenuItem {
    /// Build a new item payload, available for ordering by default.
    pub fn new(name: impl Into<String>, price_cents: i32) -> Self {
        Self {
            name: name.into(),
            description: None,
            price_cents,
            category_id: None,
            is_available: true,
        }
    }

    /// Attach a descriptive text to the item payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a category reference to the item payload.
    pub fn with_category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Override the availability flag.
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}

/// Query definition used to list menu items.
#[derive(Debug, Clone, Default)]
pub struct MenuItemListQuery {
    /// Whether items flagged unavailable should be included.
    pub include_unavailable: bool,
}

impl MenuItemListQuery {
    /// Construct a query for the available part of the catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include unavailable items in the results.
    pub fn include_unavailable(mut self) -> Self {
        self.include_unavailable = true;
        self
    }
}
