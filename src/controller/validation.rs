use crate::config::OrderSettings;
use crate::domain::Size;
use crate::error::FieldIssue;

use super::form::FieldId;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_SIZE_MESSAGE: &str = "Please choose a valid size";

/// Checks one field value the way the form does on blur and on submit.
pub fn validate_field(
    field: FieldId,
    value: &str,
    settings: &OrderSettings,
) -> Result<(), FieldIssue> {
    let value = value.trim();

    if value.is_empty() {
        return Err(FieldIssue::new(field, REQUIRED_MESSAGE));
    }

    match field {
        FieldId::CustomerName if value.chars().count() < settings.min_customer_name_len => {
            Err(FieldIssue::new(
                field,
                format!(
                    "Name must be at least {} characters",
                    settings.min_customer_name_len
                ),
            ))
        }
        FieldId::Size if value.parse::<Size>().is_err() => {
            Err(FieldIssue::new(field, INVALID_SIZE_MESSAGE))
        }
        _ => Ok(()),
    }
}
