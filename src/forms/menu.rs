use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::menu_item::NewMenuItem;
use crate::forms::{empty_string_as_none, empty_string_as_none_id};

/// Maximum allowed length for a menu item name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the menu form helpers.
pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing menu forms.
#[derive(Debug, Error)]
pub enum MenuFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("item name cannot be empty")]
    EmptyName,
    /// The provided price is not a non-negative decimal amount.
    #[error("invalid price `{value}`")]
    InvalidPrice { value: String },
}

/// Form payload emitted when submitting the "Add item" form. The category
/// arrives as a plain identifier chosen from the supplied category list.
#[derive(Debug, Deserialize, Validate)]
pub struct AddMenuItemForm {
    /// Name entered by the user.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Optional longer description.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    /// Decimal price as typed, e.g. `"8.50"`.
    pub price: String,
    /// Optional category reference; an empty selection means "no category".
    #[serde(default, deserialize_with = "empty_string_as_none_id")]
    pub category_id: Option<i32>,
}

impl AddMenuItemForm {
    /// Validates and sanitizes the payload into a domain `NewMenuItem`.
    pub fn into_new_menu_item(self) -> MenuFormResult<NewMenuItem> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(MenuFormError::EmptyName);
        }

        let sanitized_description = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let price_cents = parse_price_cents(&self.price)?;

        let mut new_item = NewMenuItem::new(sanitized_name, price_cents);

        if let Some(description) = sanitized_description {
            new_item = new_item.with_description(description);
        }

        if let Some(category_id) = self.category_id {
            new_item = new_item.with_category_id(category_id);
        }

        Ok(new_item)
    }
}

/// Form payload emitted when submitting the "Delete item" form.
#[derive(Debug, Deserialize)]
pub struct DeleteMenuItemForm {
    pub item_id: i32,
}

/// Parse a decimal price string into cents, rejecting negative amounts.
fn parse_price_cents(value: &str) -> MenuFormResult<i32> {
    let trimmed = value.trim();

    let amount: f64 = trimmed.parse().map_err(|_| MenuFormError::InvalidPrice {
        value: trimmed.to_string(),
    })?;

    if !amount.is_finite() || amount < 0.0 || amount > i32::MAX as f64 / 100.0 {
        return Err(MenuFormError::InvalidPrice {
            value: trimmed.to_string(),
        });
    }

    Ok((amount * 100.0).round() as i32)
}

fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

fn sanitize_multiline_text(input: &str) -> String {
    let lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    let start = lines.iter().position(|line| !line.is_empty());
    let end = lines.iter().rposition(|line| !line.is_empty());

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}
