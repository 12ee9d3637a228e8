use serde::{Deserialize, Serialize};

/// Domain representation of a menu category. Categories are referenced by
/// menu items but not managed by this service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    /// Unique identifier of the category.
    pub id: i32,
    /// Human-readable name shown in category selectors.
    pub name: String,
}
