use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// Required text and select fields of the order form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    CustomerName,
    Size,
    BaseLiquid,
}

impl FieldId {
    pub const REQUIRED: [FieldId; 3] = [FieldId::CustomerName, FieldId::Size, FieldId::BaseLiquid];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::CustomerName => "customerName",
            FieldId::Size => "size",
            FieldId::BaseLiquid => "baseLiquid",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values captured from the form, exactly as the user entered them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm {
    pub customer_name: String,
    pub size: String,
    pub base_liquid: String,
    selections: BTreeMap<Category, Vec<String>>,
}

impl OrderForm {
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::CustomerName => &self.customer_name,
            FieldId::Size => &self.size,
            FieldId::BaseLiquid => &self.base_liquid,
        }
    }

    pub fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::CustomerName => self.customer_name = value,
            FieldId::Size => self.size = value,
            FieldId::BaseLiquid => self.base_liquid = value,
        }
    }

    /// Checked boxes of a category, in the order they were checked.
    pub fn selected(&self, category: Category) -> &[String] {
        self.selections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_selected(&self, category: Category, ingredient: &str) -> bool {
        self.selected(category).iter().any(|i| i == ingredient)
    }

    /// A box can only be checked once, so re-checking is a no-op.
    pub fn check(&mut self, category: Category, ingredient: &str) {
        if !self.is_selected(category, ingredient) {
            self.selections
                .entry(category)
                .or_default()
                .push(ingredient.to_string());
        }
    }

    pub fn uncheck(&mut self, category: Category, ingredient: &str) {
        if let Some(items) = self.selections.get_mut(&category) {
            items.retain(|i| i != ingredient);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkboxes_keep_check_order_without_duplicates() {
        let mut form = OrderForm::default();
        form.check(Category::Fruits, "mango");
        form.check(Category::Fruits, "banana");
        form.check(Category::Fruits, "mango");
        assert_eq!(form.selected(Category::Fruits), ["mango", "banana"]);

        form.uncheck(Category::Fruits, "mango");
        assert_eq!(form.selected(Category::Fruits), ["banana"]);
        assert!(form.selected(Category::Extras).is_empty());
    }

    #[test]
    fn field_values_round_through_ids() {
        let mut form = OrderForm::default();
        form.set_value(FieldId::BaseLiquid, "oat-milk".to_string());
        assert_eq!(form.value(FieldId::BaseLiquid), "oat-milk");
        assert_eq!(form.value(FieldId::CustomerName), "");
    }
}
