use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// The signed-in staff member, carried in the identity cookie for the
/// lifetime of the session. Created at sign-in, destroyed at logout.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: i32,
    pub username: String,
    pub full_name: String,
}

impl SessionUser {
    /// Attach this user to the request's session.
    pub fn login(&self, request: &HttpRequest) -> actix_web::Result<()> {
        let payload = serde_json::to_string(self)
            .map_err(actix_web::error::ErrorInternalServerError)?;
        Identity::login(&request.extensions(), payload)?;
        Ok(())
    }
}

impl From<User> for SessionUser {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            full_name: value.full_name,
        }
    }
}

impl FromRequest for SessionUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = Identity::from_request(req, payload)
            .into_inner()
            .and_then(|identity| {
                let id = identity.id().map_err(ErrorUnauthorized)?;
                serde_json::from_str(&id).map_err(|_| ErrorUnauthorized("session expired"))
            });
        ready(result)
    }
}
