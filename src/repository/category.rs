use diesel::prelude::*;

use crate::{
    domain::category::Category as DomainCategory,
    models::category::Category as DbCategory,
    repository::{CategoryReader, DieselRepository, RepositoryResult},
};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let db_categories = categories::table
            .order(categories::id.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(db_categories.into_iter().map(Into::into).collect())
    }
}
