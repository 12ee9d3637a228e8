use serde::{Deserialize, Serialize};

/// Domain representation of a staff member. The stored password never leaves
/// the repository layer; credential checks happen inside the store query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub full_name: String,
}

/// Payload required to insert a new staff member.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
}

impl NewUser {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            full_name: full_name.into(),
        }
    }
}
