use diesel::prelude::*;

use crate::{
    domain::table::DiningTable as DomainDiningTable,
    models::table::DiningTable as DbDiningTable,
    repository::{DieselRepository, RepositoryResult, TableReader},
};

impl TableReader for DieselRepository {
    fn list_tables(&self) -> RepositoryResult<Vec<DomainDiningTable>> {
        use crate::schema::restaurant_tables;

        let mut conn = self.conn()?;
        let db_tables = restaurant_tables::table
            .order(restaurant_tables::id.asc())
            .load::<DbDiningTable>(&mut conn)?;

        Ok(db_tables.into_iter().map(Into::into).collect())
    }
}
