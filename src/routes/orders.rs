use actix_session::Session;
use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::SessionUser;
use crate::domain::table::DiningTable;
use crate::forms::orders::{AddToCartForm, SubmitOrderForm};
use crate::repository::DieselRepository;
use crate::routes::{
    base_context, cart_from_session, redirect, remove_cart, render_template, store_cart,
};
use crate::services::{ServiceError, menu as menu_service, orders as orders_service};

#[get("/")]
pub async fn show_orders(
    user: SessionUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &user, "orders");

    match orders_service::load_active_orders(repo.get_ref()) {
        Ok(data) => {
            context.insert("orders", &data.orders);
        }
        Err(err) => {
            log::error!("Failed to load active orders: {err}");
            context.insert("orders", &Vec::<orders_service::OrderView>::new());
            context.insert("load_error", "Active orders could not be loaded.");
        }
    }

    render_template(&tera, "orders/index.html", &context)
}

#[get("/orders/new")]
pub async fn show_new_order(
    user: SessionUser,
    repo: web::Data<DieselRepository>,
    session: Session,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let cart = cart_from_session(&session);
    let mut context = base_context(&flash_messages, &user, "new_order");

    match orders_service::load_new_order_page(repo.get_ref(), &cart) {
        Ok(data) => {
            context.insert("items", &data.items);
            context.insert("tables", &data.tables);
            context.insert("cart", &data.cart);
        }
        Err(err) => {
            // Keep the cart visible even when the catalog cannot be read.
            log::error!("Failed to load the new-order page: {err}");
            context.insert("items", &Vec::<menu_service::MenuItemView>::new());
            context.insert("tables", &Vec::<DiningTable>::new());
            context.insert("cart", &orders_service::CartView::from_cart(&cart));
            context.insert("load_error", "The catalog could not be loaded.");
        }
    }

    render_template(&tera, "orders/new.html", &context)
}

#[post("/orders/cart/add")]
pub async fn add_to_cart(
    _user: SessionUser,
    repo: web::Data<DieselRepository>,
    session: Session,
    form: web::Form<AddToCartForm>,
) -> impl Responder {
    let mut cart = cart_from_session(&session);
    let quantity = form.quantity;

    match orders_service::add_to_cart(repo.get_ref(), &mut cart, form.into_inner()) {
        Ok(item) => {
            store_cart(&session, &cart);
            FlashMessage::success(format!("{quantity} × {} added to the cart.", item.name)).send();
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("That item is no longer on the menu.").send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add an item to the cart: {err}");
            FlashMessage::error("Could not add the item to the cart.").send();
        }
    }
    redirect("/orders/new")
}

#[post("/orders/cart/clear")]
pub async fn clear_cart(_user: SessionUser, session: Session) -> impl Responder {
    remove_cart(&session);
    FlashMessage::success("Cart cleared.").send();
    redirect("/orders/new")
}

#[post("/orders/submit")]
pub async fn submit_order(
    user: SessionUser,
    repo: web::Data<DieselRepository>,
    session: Session,
    form: web::Form<SubmitOrderForm>,
) -> impl Responder {
    let cart = cart_from_session(&session);

    match orders_service::submit_order(repo.get_ref(), &user, &cart, form.into_inner()) {
        Ok(order) => {
            // The cart resets only after the order is safely persisted.
            remove_cart(&session);
            FlashMessage::success(format!("Order #{} submitted.", order.id)).send();
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/orders/new")
        }
        Err(err) => {
            log::error!("Failed to submit the order: {err}");
            FlashMessage::error("The order could not be submitted. Nothing was saved.").send();
            redirect("/orders/new")
        }
    }
}
