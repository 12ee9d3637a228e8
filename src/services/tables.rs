use crate::domain::table::DiningTable;
use crate::repository::TableReader;
use crate::services::{ServiceError, ServiceResult};

/// Loads the list of seatable tables, ordered by id.
pub fn list_tables<R>(repo: &R) -> ServiceResult<Vec<DiningTable>>
where
    R: TableReader + ?Sized,
{
    repo.list_tables().map_err(ServiceError::from)
}
