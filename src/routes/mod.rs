use actix_session::Session;
use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::auth::SessionUser;
use crate::domain::cart::Cart;

pub mod auth;
pub mod menu;
pub mod orders;

const CART_SESSION_KEY: &str = "cart";

/// One flash message prepared for the templates.
#[derive(Serialize)]
pub(crate) struct Alert {
    level: &'static str,
    message: String,
}

pub(crate) fn collect_alerts(flash_messages: &IncomingFlashMessages) -> Vec<Alert> {
    flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_class(message.level()),
            message: message.content().to_string(),
        })
        .collect()
}

fn alert_class(level: Level) -> &'static str {
    match level {
        Level::Success => "success",
        Level::Warning => "warning",
        Level::Error => "error",
        _ => "info",
    }
}

/// Template context shared by every signed-in page.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &SessionUser,
    active_page: &str,
) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &collect_alerts(flash_messages));
    context.insert("current_user", user);
    context.insert("active_page", active_page);
    context
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// The cart lives in the session cookie; a missing or unreadable value is an
/// empty cart.
pub fn cart_from_session(session: &Session) -> Cart {
    match session.get::<Cart>(CART_SESSION_KEY) {
        Ok(Some(cart)) => cart,
        Ok(None) => Cart::new(),
        Err(err) => {
            log::warn!("Failed to read the cart from the session: {err}");
            Cart::new()
        }
    }
}

pub fn store_cart(session: &Session, cart: &Cart) {
    if let Err(err) = session.insert(CART_SESSION_KEY, cart) {
        log::error!("Failed to store the cart in the session: {err}");
    }
}

pub fn remove_cart(session: &Session) {
    session.remove(CART_SESSION_KEY);
}
