use diesel::prelude::*;

use crate::domain::table::DiningTable as DomainDiningTable;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurant_tables)]
pub struct DiningTable {
    pub id: i32,
    pub table_number: String,
}

impl From<DiningTable> for DomainDiningTable {
    fn from(value: DiningTable) -> Self {
        Self {
            id: value.id,
            table_number: value.table_number,
        }
    }
}
