use actix_identity::Identity;
use actix_session::Session;
use actix_web::{HttpRequest, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::forms::auth::LoginForm;
use crate::repository::DieselRepository;
use crate::routes::{collect_alerts, redirect, remove_cart, render_template};
use crate::services::{ServiceError, auth as auth_service};

#[get("/signin")]
pub async fn show_signin(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    // No signed-in user on this page, so the shared base context does not apply.
    let mut context = Context::new();
    context.insert("alerts", &collect_alerts(&flash_messages));
    render_template(&tera, "signin.html", &context)
}

#[post("/signin")]
pub async fn signin(
    request: HttpRequest,
    repo: web::Data<DieselRepository>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    match auth_service::authenticate(repo.get_ref(), form.into_inner()) {
        Ok(session_user) => {
            if let Err(err) = session_user.login(&request) {
                log::error!("Failed to establish a session: {err}");
                FlashMessage::error("Could not sign you in. Try again.").send();
                return redirect("/signin");
            }
            redirect("/")
        }
        Err(ServiceError::InvalidCredentials) => {
            FlashMessage::error("Invalid username or password.").send();
            redirect("/signin")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/signin")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            FlashMessage::error("Sign-in is temporarily unavailable.").send();
            redirect("/signin")
        }
    }
}

#[get("/logout")]
pub async fn logout(identity: Identity, session: Session) -> impl Responder {
    // Ending the session also abandons the in-progress cart.
    remove_cart(&session);
    identity.logout();
    redirect("/signin")
}
