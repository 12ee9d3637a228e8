use mockall::mock;

use super::{
    CategoryReader, MenuItemReader, MenuItemWriter, OrderReader, OrderWriter, RepositoryResult,
    TableReader, UserReader, UserWriter,
};
use crate::domain::{
    category::Category,
    menu_item::{MenuItem, MenuItemListQuery, NewMenuItem},
    order::{NewOrder, Order, OrderListQuery},
    table::DiningTable,
    user::{NewUser, User},
};

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_credentials(&self, username: &str, password: &str) -> RepositoryResult<Option<User>>;
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub MenuItemReader {}

    impl MenuItemReader for MenuItemReader {
        fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<MenuItem>>;
        fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<MenuItem>>;
    }
}

mock! {
    pub MenuItemWriter {}

    impl MenuItemWriter for MenuItemWriter {
        fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
        fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<usize>;
    }
}

mock! {
    pub TableReader {}

    impl TableReader for TableReader {
        fn list_tables(&self) -> RepositoryResult<Vec<DiningTable>>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    }
}
