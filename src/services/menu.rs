use std::collections::HashMap;

use serde::Serialize;

use crate::UNKNOWN_LABEL;
use crate::domain::category::Category;
use crate::domain::menu_item::{MenuItem, MenuItemListQuery};
use crate::forms::menu::AddMenuItemForm;
use crate::repository::{CategoryReader, MenuItemReader, MenuItemWriter};
use crate::services::{ServiceError, ServiceResult, format_price};

/// Data required to render the menu management page.
pub struct MenuPageData {
    /// Catalog rows, including items currently flagged unavailable.
    pub items: Vec<MenuItemView>,
    /// Category pairings supplied to the add-item form.
    pub categories: Vec<Category>,
}

/// Loads the menu management page.
pub fn load_menu_page<R>(repo: &R) -> ServiceResult<MenuPageData>
where
    R: MenuItemReader + CategoryReader + ?Sized,
{
    let items = repo
        .list_menu_items(MenuItemListQuery::new().include_unavailable())
        .map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;

    let views = build_item_views(items, &categories);

    Ok(MenuPageData {
        items: views,
        categories,
    })
}

/// Creates a new menu item from the submitted form.
pub fn create_menu_item<R>(repo: &R, form: AddMenuItemForm) -> ServiceResult<MenuItem>
where
    R: MenuItemWriter + ?Sized,
{
    let new_item = form
        .into_new_menu_item()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_menu_item(&new_item).map_err(ServiceError::from)
}

/// Deletes a menu item by id. Deleting an id that no longer exists is a
/// success no-op; already-placed order lines are left untouched either way.
pub fn remove_menu_item<R>(repo: &R, item_id: i32) -> ServiceResult<()>
where
    R: MenuItemWriter + ?Sized,
{
    let deleted = repo.delete_menu_item(item_id).map_err(ServiceError::from)?;

    if deleted == 0 {
        log::debug!("delete of menu item {item_id} matched no rows");
    }

    Ok(())
}

/// View model exposed to the menu templates.
#[derive(Debug, Serialize)]
pub struct MenuItemView {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i32,
    pub price_formatted: String,
    /// Resolved category name; `"Unknown"` when the reference is absent or
    /// points at a category that no longer exists.
    pub category: String,
    pub is_available: bool,
}

impl MenuItemView {
    fn from_item(item: MenuItem, category_lookup: &HashMap<i32, &Category>) -> Self {
        let category = item
            .category_id
            .and_then(|id| category_lookup.get(&id))
            .map(|category| category.name.clone())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price_cents: item.price_cents,
            price_formatted: format_price(item.price_cents),
            category,
            is_available: item.is_available,
        }
    }
}

/// Resolve category names for a batch of items.
pub(crate) fn build_item_views(
    items: Vec<MenuItem>,
    categories: &[Category],
) -> Vec<MenuItemView> {
    let category_lookup: HashMap<i32, &Category> = categories
        .iter()
        .map(|category| (category.id, category))
        .collect();

    items
        .into_iter()
        .map(|item| MenuItemView::from_item(item, &category_lookup))
        .collect()
}
