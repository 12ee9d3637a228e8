use crate::auth::SessionUser;
use crate::forms::auth::LoginForm;
use crate::repository::UserReader;
use crate::services::{ServiceError, ServiceResult};

/// Check the submitted credentials against the staff table. The lookup is a
/// plain equality filter; hardening the credential store is out of scope.
pub fn authenticate<R>(repo: &R, form: LoginForm) -> ServiceResult<SessionUser>
where
    R: UserReader + ?Sized,
{
    let credentials = form
        .into_credentials()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let user = repo
        .get_user_by_credentials(&credentials.username, &credentials.password)
        .map_err(ServiceError::from)?;

    match user {
        Some(user) => Ok(SessionUser::from(user)),
        None => Err(ServiceError::InvalidCredentials),
    }
}
