use std::collections::HashMap;

use serde::Serialize;

use crate::UNKNOWN_LABEL;
use crate::auth::SessionUser;
use crate::domain::cart::Cart;
use crate::domain::menu_item::{MenuItem, MenuItemListQuery};
use crate::domain::order::{NewOrder, NewOrderItem, Order, OrderListQuery};
use crate::domain::table::DiningTable;
use crate::domain::user::User;
use crate::forms::orders::{AddToCartForm, SubmitOrderForm};
use crate::repository::{CategoryReader, MenuItemReader, OrderReader, OrderWriter, TableReader, UserReader};
use crate::services::menu::{MenuItemView, build_item_views};
use crate::services::{ServiceError, ServiceResult, format_price};

/// Data required to render the new-order page.
pub struct NewOrderPageData {
    /// Orderable part of the catalog (unavailable items are left out).
    pub items: Vec<MenuItemView>,
    /// Tables offered for selection.
    pub tables: Vec<DiningTable>,
    /// The cart as accumulated so far.
    pub cart: CartView,
}

/// Loads the new-order page.
pub fn load_new_order_page<R>(repo: &R, cart: &Cart) -> ServiceResult<NewOrderPageData>
where
    R: MenuItemReader + CategoryReader + TableReader + ?Sized,
{
    let items = repo
        .list_menu_items(MenuItemListQuery::new())
        .map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;
    let tables = repo.list_tables().map_err(ServiceError::from)?;

    Ok(NewOrderPageData {
        items: build_item_views(items, &categories),
        tables,
        cart: CartView::from_cart(cart),
    })
}

/// Resolves the selected item and appends a line to the cart. The price is
/// captured from the catalog now; later price changes leave the line alone.
pub fn add_to_cart<R>(repo: &R, cart: &mut Cart, form: AddToCartForm) -> ServiceResult<MenuItem>
where
    R: MenuItemReader + ?Sized,
{
    let form = form
        .validated()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let item = repo
        .get_menu_item_by_id(form.item_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    cart.add(&item, form.quantity);

    Ok(item)
}

/// Commits the cart as one order: a header with status `Pending` and the
/// cart's total, plus one line per cart entry. The repository persists both
/// in a single transaction, so a failure writes nothing.
pub fn submit_order<R>(
    repo: &R,
    user: &SessionUser,
    cart: &Cart,
    form: SubmitOrderForm,
) -> ServiceResult<Order>
where
    R: OrderWriter + ?Sized,
{
    if cart.is_empty() {
        return Err(ServiceError::Form("The cart is empty.".to_string()));
    }

    let items: Vec<NewOrderItem> = cart.lines().iter().map(NewOrderItem::from).collect();

    let new_order = NewOrder::new(form.table_id, user.id, cart.total_cents()).with_items(items);

    repo.create_order(&new_order).map_err(ServiceError::from)
}

/// Data required to render the active-orders page.
pub struct ActiveOrdersData {
    /// Orders newest first.
    pub orders: Vec<OrderView>,
}

/// Loads every order joined with its table label and waiter name.
pub fn load_active_orders<R>(repo: &R) -> ServiceResult<ActiveOrdersData>
where
    R: OrderReader + TableReader + UserReader + ?Sized,
{
    let orders = repo
        .list_orders(OrderListQuery::new())
        .map_err(ServiceError::from)?;
    let tables = repo.list_tables().map_err(ServiceError::from)?;
    let users = repo.list_users().map_err(ServiceError::from)?;

    let table_lookup: HashMap<i32, &DiningTable> =
        tables.iter().map(|table| (table.id, table)).collect();
    let user_lookup: HashMap<i32, &User> = users.iter().map(|user| (user.id, user)).collect();

    let orders = orders
        .into_iter()
        .map(|order| OrderView::from_order(order, &table_lookup, &user_lookup))
        .collect();

    Ok(ActiveOrdersData { orders })
}

/// View model for one row of the active-orders table.
#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: i32,
    /// Table label, or `"Unknown"` when the reference cannot be resolved.
    pub table_number: String,
    /// Username of the staff member who took the order, or `"Unknown"`.
    pub waiter: String,
    pub date_formatted: String,
    pub total_formatted: String,
    pub status: String,
    pub item_count: usize,
}

impl OrderView {
    fn from_order(
        order: Order,
        table_lookup: &HashMap<i32, &DiningTable>,
        user_lookup: &HashMap<i32, &User>,
    ) -> Self {
        let table_number = table_lookup
            .get(&order.table_id)
            .map(|table| table.table_number.clone())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        let waiter = user_lookup
            .get(&order.user_id)
            .map(|user| user.username.clone())
            .unwrap_or_else(|| UNKNOWN_LABEL.to_string());

        let status: &'static str = order.status.into();

        Self {
            id: order.id,
            table_number,
            waiter,
            date_formatted: order.order_date.format("%Y-%m-%d").to_string(),
            total_formatted: format_price(order.total_cents),
            status: status.to_string(),
            item_count: order.items.len(),
        }
    }
}

/// View model for one cart line.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub item_id: i32,
    pub name: String,
    pub quantity: i32,
    pub unit_price_formatted: String,
    pub line_total_formatted: String,
}

/// View model for the cart panel on the new-order page.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total_cents: i32,
    pub total_formatted: String,
    pub is_empty: bool,
}

impl CartView {
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                item_id: line.item_id,
                name: line.name.clone(),
                quantity: line.quantity,
                unit_price_formatted: format_price(line.unit_price_cents),
                line_total_formatted: format_price(line.line_total_cents),
            })
            .collect();

        Self {
            lines,
            total_cents: cart.total_cents(),
            total_formatted: format_price(cart.total_cents()),
            is_empty: cart.is_empty(),
        }
    }
}
