//! Form-facing order logic: captured field values, validation, selection
//! ceilings, smoothie construction and order history.
//!
//! Everything here is synchronous. [`crate::actors::OrderService`] owns one
//! controller and feeds it form events one at a time.

pub mod form;
pub mod validation;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::OrderSettings;
use crate::domain::{Category, NutritionalInfo, Size, Smoothie};
use crate::error::{FieldIssue, OrderError};

pub use form::{FieldId, OrderForm};
pub use validation::validate_field;

/// What the result panel shows after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub order_number: usize,
    pub customer_name: String,
    pub description: String,
    pub display: String,
    pub total_price: f64,
    pub nutrition: NutritionalInfo,
    pub created_at: DateTime<Utc>,
}

impl OrderReceipt {
    fn new(order_number: usize, smoothie: &Smoothie) -> Self {
        Self {
            order_number,
            customer_name: smoothie.customer_name().to_string(),
            description: smoothie.description(),
            display: smoothie.generate_display(),
            total_price: smoothie.total_price(),
            nutrition: smoothie.nutritional_info(),
            created_at: smoothie.created_at(),
        }
    }
}

pub struct OrderController {
    settings: OrderSettings,
    form: OrderForm,
    field_errors: BTreeMap<FieldId, String>,
    history: Vec<Smoothie>,
}

impl OrderController {
    pub fn new(settings: OrderSettings) -> Self {
        Self {
            settings,
            form: OrderForm::default(),
            field_errors: BTreeMap::new(),
            history: Vec::new(),
        }
    }

    pub fn settings(&self) -> &OrderSettings {
        &self.settings
    }

    pub fn form(&self) -> &OrderForm {
        &self.form
    }

    pub fn history(&self) -> &[Smoothie] {
        &self.history
    }

    pub fn field_error(&self, field: FieldId) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn field_errors(&self) -> Vec<FieldIssue> {
        self.field_errors
            .iter()
            .map(|(field, message)| FieldIssue::new(*field, message.clone()))
            .collect()
    }

    /// Typing into a field replaces its value and clears its error.
    pub fn input_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.form.set_value(field, value.into());
        self.field_errors.remove(&field);
    }

    /// Leaving a field validates it and records or clears its error.
    pub fn blur_field(&mut self, field: FieldId) -> Result<(), FieldIssue> {
        match validate_field(field, self.form.value(field), &self.settings) {
            Ok(()) => {
                self.field_errors.remove(&field);
                Ok(())
            }
            Err(issue) => {
                self.field_errors.insert(field, issue.message.clone());
                Err(issue)
            }
        }
    }

    /// Checks or unchecks an ingredient box.
    ///
    /// Checking a box past the category's ceiling is blocked: the selection
    /// stays as it was and the limit is reported.
    pub fn toggle_ingredient(
        &mut self,
        category: Category,
        ingredient: &str,
        checked: bool,
    ) -> Result<(), OrderError> {
        if !checked {
            self.form.uncheck(category, ingredient);
            return Ok(());
        }

        if self.form.is_selected(category, ingredient) {
            return Ok(());
        }

        if let Some(max) = self.settings.selection_limit(category) {
            if self.form.selected(category).len() >= max {
                return Err(OrderError::SelectionLimit { category, max });
            }
        }

        self.form.check(category, ingredient);
        Ok(())
    }

    /// Validates every required field, recording each failure.
    pub fn validate_form(&mut self) -> Result<(), Vec<FieldIssue>> {
        let issues: Vec<FieldIssue> = FieldId::REQUIRED
            .iter()
            .filter_map(|field| self.blur_field(*field).err())
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    fn check_selection_limits(&self) -> Result<(), OrderError> {
        for category in Category::ALL {
            if let Some(max) = self.settings.selection_limit(category) {
                if self.form.selected(category).len() > max {
                    return Err(OrderError::SelectionLimit { category, max });
                }
            }
        }
        Ok(())
    }

    /// Builds the smoothie for the current form, priced from the settings'
    /// price table. The form must already be valid.
    pub fn build_smoothie(&self) -> Result<Smoothie, OrderError> {
        self.check_selection_limits()?;

        let size: Size = self.form.size.parse().map_err(|_| {
            OrderError::InvalidField(FieldIssue::new(
                FieldId::Size,
                validation::INVALID_SIZE_MESSAGE,
            ))
        })?;
        let base_liquid = self.form.base_liquid.trim();
        let prices = &self.settings.prices;

        let mut smoothie = Smoothie::new(
            None,
            Some(self.form.customer_name.trim()),
            size,
            base_liquid,
        );
        smoothie.set_base_price(prices.size_price(size));
        smoothie.set_base_liquid_price(prices.base_price(base_liquid));

        for category in Category::ALL {
            for ingredient in self.form.selected(category) {
                smoothie.add_ingredient(
                    category,
                    ingredient.as_str(),
                    prices.ingredient_price(category, ingredient),
                );
            }
        }

        Ok(smoothie)
    }

    /// Validates the form, then records the order and resets the form.
    /// Nothing is built or recorded when any check fails.
    pub fn submit(&mut self) -> Result<OrderReceipt, OrderError> {
        self.validate_form().map_err(OrderError::ValidationFailed)?;
        let smoothie = self.build_smoothie()?;

        self.history.push(smoothie);
        let order_number = self.history.len();
        let receipt = OrderReceipt::new(order_number, &self.history[order_number - 1]);

        self.form = OrderForm::default();
        self.field_errors.clear();

        Ok(receipt)
    }
}
