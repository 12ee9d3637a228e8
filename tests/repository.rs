use diesel::prelude::*;

use tableside::db::DbPool;
use tableside::domain::menu_item::{MenuItemListQuery, NewMenuItem};
use tableside::domain::order::{NewOrder, NewOrderItem, OrderListQuery, OrderStatus};
use tableside::domain::user::NewUser;
use tableside::repository::{
    DieselRepository, MenuItemReader, MenuItemWriter, OrderReader, OrderWriter, UserWriter,
};

mod common;

fn seed_category(pool: &DbPool, name: &str) -> i32 {
    use tableside::schema::categories;

    let mut conn = pool.get().expect("connection");
    diesel::insert_into(categories::table)
        .values(categories::name.eq(name))
        .returning(categories::id)
        .get_result(&mut conn)
        .expect("seed category")
}

fn seed_table(pool: &DbPool, table_number: &str) -> i32 {
    use tableside::schema::restaurant_tables;

    let mut conn = pool.get().expect("connection");
    diesel::insert_into(restaurant_tables::table)
        .values(restaurant_tables::table_number.eq(table_number))
        .returning(restaurant_tables::id)
        .get_result(&mut conn)
        .expect("seed table")
}

fn count_order_lines(pool: &DbPool) -> i64 {
    use tableside::schema::order_items;

    let mut conn = pool.get().expect("connection");
    order_items::table
        .count()
        .get_result(&mut conn)
        .expect("count order lines")
}

#[test]
fn test_menu_item_repository_crud() {
    let test_db = common::TestDb::new("test_menu_item_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let mains = seed_category(&test_db.pool(), "Main Course");

    let burger = repo
        .create_menu_item(
            &NewMenuItem::new("Burger", 800)
                .with_description("House classic")
                .with_category_id(mains),
        )
        .expect("create burger");
    let special = repo
        .create_menu_item(&NewMenuItem::new("Off-menu special", 1200).with_availability(false))
        .expect("create special");

    let fetched = repo
        .get_menu_item_by_id(burger.id)
        .expect("get by id")
        .expect("burger should exist");
    assert_eq!(fetched.name, "Burger");
    assert_eq!(fetched.price_cents, 800);
    assert_eq!(fetched.category_id, Some(mains));

    let available = repo
        .list_menu_items(MenuItemListQuery::new())
        .expect("list available");
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].id, burger.id);

    let all = repo
        .list_menu_items(MenuItemListQuery::new().include_unavailable())
        .expect("list all");
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id, "expected ascending id order");

    assert_eq!(repo.delete_menu_item(special.id).expect("delete"), 1);
    // Deleting an id that never existed removes zero rows and is no error.
    assert_eq!(repo.delete_menu_item(9999).expect("delete missing"), 0);

    let remaining = repo
        .list_menu_items(MenuItemListQuery::new().include_unavailable())
        .expect("list remaining");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, burger.id);
}

#[test]
fn test_create_order_persists_header_and_lines_together() {
    let test_db = common::TestDb::new("test_create_order_header_and_lines.db");
    let repo = DieselRepository::new(test_db.pool());

    let waiter = repo
        .create_user(&NewUser::new("amira", "secret", "Amira Haddad"))
        .expect("create user");
    let table_id = seed_table(&test_db.pool(), "T4");

    let new_order = NewOrder::new(table_id, waiter.id, 2200).with_items(vec![
        NewOrderItem {
            item_id: 1,
            quantity: 2,
            unit_price_cents: 800,
        },
        NewOrderItem {
            item_id: 2,
            quantity: 3,
            unit_price_cents: 200,
        },
    ]);

    let order = repo.create_order(&new_order).expect("create order");

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_cents, 2200);
    assert_eq!(order.items.len(), 2);
    assert!(order.items.iter().all(|item| item.order_id == order.id));
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[1].quantity, 3);

    let fetched = repo
        .get_order_by_id(order.id)
        .expect("get order")
        .expect("order should exist");
    assert_eq!(fetched.items.len(), 2);
    assert_eq!(fetched.total_cents, 2200);

    let listed = repo.list_orders(OrderListQuery::new()).expect("list orders");
    assert_eq!(listed.len(), 1);

    let pending = repo
        .list_orders(OrderListQuery::new().status(OrderStatus::Pending))
        .expect("list pending");
    assert_eq!(pending.len(), 1);

    let served = repo
        .list_orders(OrderListQuery::new().status(OrderStatus::Served))
        .expect("list served");
    assert!(served.is_empty());
}

#[test]
fn test_failed_header_insert_writes_no_lines() {
    let test_db = common::TestDb::new("test_failed_header_writes_no_lines.db");
    let repo = DieselRepository::new(test_db.pool());

    let waiter = repo
        .create_user(&NewUser::new("amira", "secret", "Amira Haddad"))
        .expect("create user");

    // No such table: the foreign key rejects the header, and the transaction
    // must leave the line table untouched as well.
    let new_order = NewOrder::new(4242, waiter.id, 800).with_items(vec![NewOrderItem {
        item_id: 1,
        quantity: 1,
        unit_price_cents: 800,
    }]);

    let result = repo.create_order(&new_order);
    assert!(result.is_err(), "expected the header insert to fail");

    assert!(
        repo.list_orders(OrderListQuery::new())
            .expect("list orders")
            .is_empty()
    );
    assert_eq!(count_order_lines(&test_db.pool()), 0);
}

#[test]
fn test_resubmission_creates_an_independent_order() {
    let test_db = common::TestDb::new("test_resubmission_independent_order.db");
    let repo = DieselRepository::new(test_db.pool());

    let waiter = repo
        .create_user(&NewUser::new("amira", "secret", "Amira Haddad"))
        .expect("create user");
    let table_id = seed_table(&test_db.pool(), "T1");

    let new_order = NewOrder::new(table_id, waiter.id, 800).with_items(vec![NewOrderItem {
        item_id: 1,
        quantity: 1,
        unit_price_cents: 800,
    }]);

    let first = repo.create_order(&new_order).expect("first submission");
    let second = repo.create_order(&new_order).expect("second submission");

    assert_ne!(first.id, second.id);
    assert_eq!(count_order_lines(&test_db.pool()), 2);
}
