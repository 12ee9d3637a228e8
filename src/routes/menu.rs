use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::auth::SessionUser;
use crate::domain::category::Category;
use crate::forms::menu::{AddMenuItemForm, DeleteMenuItemForm};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, menu as menu_service};

#[get("/menu")]
pub async fn show_menu(
    user: SessionUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, &user, "menu");

    match menu_service::load_menu_page(repo.get_ref()) {
        Ok(data) => {
            context.insert("items", &data.items);
            context.insert("categories", &data.categories);
        }
        Err(err) => {
            // Degrade to an empty catalog rather than blocking the view.
            log::error!("Failed to load the menu: {err}");
            context.insert("items", &Vec::<menu_service::MenuItemView>::new());
            context.insert("categories", &Vec::<Category>::new());
            context.insert("load_error", "The menu could not be loaded.");
        }
    }

    render_template(&tera, "menu/index.html", &context)
}

#[post("/menu/add")]
pub async fn add_menu_item(
    _user: SessionUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<AddMenuItemForm>,
) -> impl Responder {
    match menu_service::create_menu_item(repo.get_ref(), form.into_inner()) {
        Ok(item) => {
            FlashMessage::success(format!("“{}” added to the menu.", item.name)).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to add a menu item: {err}");
            FlashMessage::error("Could not add the item.").send();
        }
    }
    redirect("/menu")
}

#[post("/menu/delete")]
pub async fn delete_menu_item(
    _user: SessionUser,
    repo: web::Data<DieselRepository>,
    form: web::Form<DeleteMenuItemForm>,
) -> impl Responder {
    match menu_service::remove_menu_item(repo.get_ref(), form.item_id) {
        Ok(()) => {
            FlashMessage::success("Item removed from the menu.").send();
        }
        Err(err) => {
            log::error!("Failed to delete menu item {}: {err}", form.item_id);
            FlashMessage::error("Could not delete the item.").send();
        }
    }
    redirect("/menu")
}
