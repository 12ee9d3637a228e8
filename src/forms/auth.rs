use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Result type returned by the sign-in form helpers.
pub type AuthFormResult<T> = Result<T, AuthFormError>;

/// Errors that can occur while processing the sign-in form.
#[derive(Debug, Error)]
pub enum AuthFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Sanitized credential pair handed to the authentication service.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    /// Compared verbatim against the stored value; whitespace is meaningful.
    pub password: String,
}

/// Form payload emitted by the sign-in page.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

impl LoginForm {
    /// Validates the payload into a credential pair.
    pub fn into_credentials(self) -> AuthFormResult<Credentials> {
        self.validate()?;

        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed_but_password_is_kept_verbatim() {
        let form = LoginForm {
            username: "  amira ".to_string(),
            password: " secret ".to_string(),
        };

        let credentials = form.into_credentials().expect("should validate");

        assert_eq!(credentials.username, "amira");
        assert_eq!(credentials.password, " secret ");
    }

    #[test]
    fn empty_username_fails_validation() {
        let form = LoginForm {
            username: String::new(),
            password: "secret".to_string(),
        };

        assert!(matches!(
            form.into_credentials(),
            Err(AuthFormError::Validation(_))
        ));
    }
}
