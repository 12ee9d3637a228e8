use serde::{Deserialize, Serialize};

/// Domain representation of a seatable table. Read-only in this service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DiningTable {
    /// Unique identifier of the table.
    pub id: i32,
    /// Label printed on the floor plan, e.g. `"T1"`.
    pub table_number: String,
}
