use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Result type returned by the order form helpers.
pub type OrderFormResult<T> = Result<T, OrderFormError>;

/// Errors that can occur while processing order forms.
#[derive(Debug, Error)]
pub enum OrderFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Form payload emitted when adding an item to the cart.
#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartForm {
    /// Identifier of the selected menu item.
    pub item_id: i32,
    /// Requested quantity; at least one.
    #[validate(range(min = 1))]
    pub quantity: i32,
}

impl AddToCartForm {
    /// Run validation, returning the payload unchanged on success.
    pub fn validated(self) -> OrderFormResult<Self> {
        self.validate()?;
        Ok(self)
    }
}

/// Form payload emitted when submitting the cart as an order.
#[derive(Debug, Deserialize)]
pub struct SubmitOrderForm {
    /// Identifier of the table the order was taken at.
    pub table_id: i32,
}
