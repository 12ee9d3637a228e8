use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::menu_item::{MenuItem, MenuItemListQuery, NewMenuItem};
use crate::domain::order::{NewOrder, Order, OrderListQuery};
use crate::domain::table::DiningTable;
use crate::domain::user::{NewUser, User};

pub mod errors;

mod category;
mod menu_item;
mod order;
mod table;
mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read operations over staff records.
pub trait UserReader {
    /// Equality lookup on username and password; `None` when no row matches.
    fn get_user_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> RepositoryResult<Option<User>>;
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

/// Write operations over staff records.
pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

/// Read operations over menu categories.
pub trait CategoryReader {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read operations over menu items.
pub trait MenuItemReader {
    fn get_menu_item_by_id(&self, id: i32) -> RepositoryResult<Option<MenuItem>>;
    /// All matching items ordered by id ascending.
    fn list_menu_items(&self, query: MenuItemListQuery) -> RepositoryResult<Vec<MenuItem>>;
}

/// Write operations over menu items.
pub trait MenuItemWriter {
    fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    /// Hard delete by id; returns the number of rows removed. Deleting an
    /// unknown id removes zero rows and is not an error.
    fn delete_menu_item(&self, item_id: i32) -> RepositoryResult<usize>;
}

/// Read operations over seatable tables.
pub trait TableReader {
    /// All tables ordered by id ascending.
    fn list_tables(&self) -> RepositoryResult<Vec<DiningTable>>;
}

/// Read operations over placed orders.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    /// Matching orders newest first, each with its lines loaded.
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
}

/// Write operations over placed orders.
pub trait OrderWriter {
    /// Insert the header and its lines in one transaction. The assigned
    /// header id is stamped onto every line; a failure on either insert
    /// leaves the store untouched.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
}
