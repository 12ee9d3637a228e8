use diesel::prelude::*;

use crate::{
    domain::menu_item::{
        MenuItem as DomainMenuItem, MenuItemListQuery, NewMenuItem as DomainNewMenuItem,
    },
    models::menu_item::{MenuItem as DbMenuItem, NewMenuItem as DbNewMenuItem},
    repository::{DieselRepository, MenuItemReader, MenuItemWriter, RepositoryResult},
};

impl MenuItemReader for DieselRepository {
    fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<DomainMenuItem>> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;
        let item = menu_items::table
            .find(id)
            .first::<DbMenuItem>(&mut conn)
            .optional()?;

        Ok(item.map(Into::into))
    }

    fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<DomainMenuItem>> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let mut items = menu_items::table.into_boxed::<diesel::sqlite::Sqlite>();

        if !query.include_unavailable {
            items = items.filter(menu_items::is_available.eq(true));
        }

        let db_items = items
            .order(menu_items::id.asc())
            .load::<DbMenuItem>(&mut conn)?;

        Ok(db_items.into_iter().map(Into::into).collect())
    }
}

impl MenuItemWriter for DieselRepository {
    fn create_menu_item(&self, new_item: &DomainNewMenuItem) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;
        let db_new = DbNewMenuItem::from(new_item);

        let created = diesel::insert_into(menu_items::table)
            .values(&db_new)
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<usize> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        // Lines of already-placed orders keep referencing the deleted id.
        let deleted = diesel::delete(menu_items::table.find(item_id)).execute(&mut conn)?;

        Ok(deleted)
    }
}
