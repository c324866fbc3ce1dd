use chrono::{DateTime, Utc};
use serde::Serialize;

use super::display::{format_ingredient_name, render_sections, DisplaySection};
use super::ingredient::{Category, Ingredient, Size};
use super::nutrition::NutritionalInfo;

pub const DEFAULT_SMOOTHIE_NAME: &str = "Custom Smoothie";
pub const DEFAULT_CUSTOMER_NAME: &str = "Anonymous";

/// Payload for creating a new smoothie order.
#[derive(Debug, Clone)]
pub struct SmoothieCreate {
    pub name: Option<String>,
    pub customer_name: Option<String>,
    pub size: Size,
    pub base_liquid: String,
}

/// One customer's smoothie order.
///
/// `total_price` is derived state: it is recomputed after every mutation and
/// can only be read by collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct Smoothie {
    name: String,
    customer_name: String,
    size: Size,
    base_liquid: String,
    fruits: Vec<Ingredient>,
    vegetables: Vec<Ingredient>,
    proteins: Vec<Ingredient>,
    extras: Vec<Ingredient>,
    base_price: f64,
    base_liquid_price: f64,
    total_price: f64,
    created_at: DateTime<Utc>,
}

/// Absent and blank values both fall back to the default.
fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

impl Smoothie {
    pub fn new(
        name: Option<&str>,
        customer_name: Option<&str>,
        size: Size,
        base_liquid: impl Into<String>,
    ) -> Self {
        Self {
            name: or_default(name, DEFAULT_SMOOTHIE_NAME),
            customer_name: or_default(customer_name, DEFAULT_CUSTOMER_NAME),
            size,
            base_liquid: base_liquid.into(),
            fruits: Vec::new(),
            vegetables: Vec::new(),
            proteins: Vec::new(),
            extras: Vec::new(),
            base_price: 0.0,
            base_liquid_price: 0.0,
            total_price: 0.0,
            created_at: Utc::now(),
        }
    }

    pub fn from_create(params: SmoothieCreate) -> Self {
        Self::new(
            params.name.as_deref(),
            params.customer_name.as_deref(),
            params.size,
            params.base_liquid,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn base_liquid(&self) -> &str {
        &self.base_liquid
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn base_liquid_price(&self) -> f64 {
        self.base_liquid_price
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn ingredients(&self, category: Category) -> &[Ingredient] {
        match category {
            Category::Fruits => &self.fruits,
            Category::Vegetables => &self.vegetables,
            Category::Proteins => &self.proteins,
            Category::Extras => &self.extras,
        }
    }

    fn ingredients_mut(&mut self, category: Category) -> &mut Vec<Ingredient> {
        match category {
            Category::Fruits => &mut self.fruits,
            Category::Vegetables => &mut self.vegetables,
            Category::Proteins => &mut self.proteins,
            Category::Extras => &mut self.extras,
        }
    }

    /// Appends an ingredient to `category`. A missing price counts as 0.
    /// Nothing is validated or deduplicated here.
    pub fn add_ingredient(
        &mut self,
        category: Category,
        name: impl Into<String>,
        price: impl Into<Option<f64>>,
    ) {
        self.ingredients_mut(category)
            .push(Ingredient::new(name, price));
        self.update_total_price();
    }

    pub fn add_fruit(&mut self, name: impl Into<String>, price: impl Into<Option<f64>>) {
        self.add_ingredient(Category::Fruits, name, price);
    }

    pub fn add_vegetable(&mut self, name: impl Into<String>, price: impl Into<Option<f64>>) {
        self.add_ingredient(Category::Vegetables, name, price);
    }

    pub fn add_protein(&mut self, name: impl Into<String>, price: impl Into<Option<f64>>) {
        self.add_ingredient(Category::Proteins, name, price);
    }

    pub fn add_extra(&mut self, name: impl Into<String>, price: impl Into<Option<f64>>) {
        self.add_ingredient(Category::Extras, name, price);
    }

    /// Size surcharge. Overwrites any previous value.
    pub fn set_base_price(&mut self, price: f64) {
        self.base_price = price;
        self.update_total_price();
    }

    /// Base liquid surcharge. Overwrites any previous value.
    pub fn set_base_liquid_price(&mut self, price: f64) {
        self.base_liquid_price = price;
        self.update_total_price();
    }

    /// Recomputes the total from scratch.
    pub fn update_total_price(&mut self) {
        let ingredients: f64 = Category::ALL
            .iter()
            .flat_map(|category| self.ingredients(*category))
            .map(|ingredient| ingredient.price)
            .sum();
        self.total_price = self.base_price + self.base_liquid_price + ingredients;
    }

    /// One-line summary, e.g. `Custom Smoothie (medium) with almond-milk base, banana`.
    pub fn description(&self) -> String {
        let mut description = format!("{} ({}) with {} base", self.name, self.size, self.base_liquid);

        for category in Category::ALL {
            let items = self.ingredients(category);
            if items.is_empty() {
                continue;
            }
            let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
            description.push_str(", ");
            description.push_str(&names.join(", "));
        }

        description
    }

    /// Size, base and every non-empty category, with human-readable labels.
    pub fn display_sections(&self) -> Vec<DisplaySection> {
        let mut sections = vec![
            DisplaySection::new("Size", self.size.label()),
            DisplaySection::new("Base", format_ingredient_name(&self.base_liquid)),
        ];

        for category in Category::ALL {
            let items = self.ingredients(category);
            if items.is_empty() {
                continue;
            }
            let names: Vec<String> = items
                .iter()
                .map(|i| format_ingredient_name(&i.name))
                .collect();
            sections.push(DisplaySection::new(category.label(), names.join(", ")));
        }

        sections
    }

    /// Markup fragment for the order result panel.
    pub fn generate_display(&self) -> String {
        render_sections(&self.display_sections())
    }

    pub fn nutritional_info(&self) -> NutritionalInfo {
        NutritionalInfo::compute(self.size, &self.fruits, &self.proteins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_total_consistent(smoothie: &Smoothie) {
        let expected = smoothie.base_price()
            + smoothie.base_liquid_price()
            + Category::ALL
                .iter()
                .flat_map(|c| smoothie.ingredients(*c))
                .map(|i| i.price)
                .sum::<f64>();
        assert!((smoothie.total_price() - expected).abs() < 1e-9);
    }

    #[test]
    fn defaults_apply_to_absent_and_blank_names() {
        let smoothie = Smoothie::new(None, Some("   "), Size::Small, "water");
        assert_eq!(smoothie.name(), DEFAULT_SMOOTHIE_NAME);
        assert_eq!(smoothie.customer_name(), DEFAULT_CUSTOMER_NAME);
        assert_eq!(smoothie.total_price(), 0.0);
        assert!(Category::ALL.iter().all(|c| smoothie.ingredients(*c).is_empty()));
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut smoothie = Smoothie::new(Some("Green"), Some("Sam"), Size::Large, "oat-milk");

        smoothie.set_base_price(6.5);
        assert_total_consistent(&smoothie);
        smoothie.set_base_liquid_price(0.5);
        assert_total_consistent(&smoothie);
        smoothie.add_fruit("banana", 0.5);
        assert_total_consistent(&smoothie);
        smoothie.add_vegetable("spinach", 0.75);
        assert_total_consistent(&smoothie);
        smoothie.add_protein("greek-yogurt", 1.0);
        assert_total_consistent(&smoothie);
        smoothie.add_extra("honey", None);
        assert_total_consistent(&smoothie);

        // Surcharges overwrite rather than accumulate.
        smoothie.set_base_price(4.5);
        assert_total_consistent(&smoothie);
        assert_eq!(smoothie.total_price(), 4.5 + 0.5 + 0.5 + 0.75 + 1.0);
    }

    #[test]
    fn accepts_negative_prices_and_duplicates() {
        let mut smoothie = Smoothie::new(None, None, Size::Small, "water");
        smoothie.add_extra("discount", -1.0);
        smoothie.add_fruit("banana", 0.5);
        smoothie.add_fruit("banana", 0.5);
        assert_eq!(smoothie.ingredients(Category::Fruits).len(), 2);
        assert_eq!(smoothie.total_price(), 0.0);
    }

    #[test]
    fn update_total_price_is_idempotent() {
        let mut smoothie = Smoothie::new(None, None, Size::Medium, "water");
        smoothie.add_fruit("mango", 1.25);
        smoothie.set_base_price(5.0);
        let before = smoothie.total_price();
        smoothie.update_total_price();
        smoothie.update_total_price();
        assert_eq!(smoothie.total_price(), before);
    }

    #[test]
    fn description_uses_default_name() {
        let mut smoothie = Smoothie::new(None, None, Size::Medium, "almond-milk");
        smoothie.add_fruit("banana", None);
        assert_eq!(
            smoothie.description(),
            "Custom Smoothie (medium) with almond-milk base, banana"
        );
    }

    #[test]
    fn description_lists_categories_in_fixed_order() {
        let mut smoothie = Smoothie::new(Some("Mix"), None, Size::Small, "water");
        smoothie.add_extra("honey", None);
        smoothie.add_protein("chia-seeds", None);
        smoothie.add_fruit("mango", None);
        smoothie.add_fruit("banana", None);
        assert_eq!(
            smoothie.description(),
            "Mix (small) with water base, mango, banana, chia-seeds, honey"
        );
    }

    #[test]
    fn display_skips_empty_categories() {
        let mut smoothie = Smoothie::new(None, None, Size::Large, "coconut-water");
        smoothie.add_protein("protein-powder", 1.5);
        smoothie.add_protein("peanut-butter", 1.0);

        let sections = smoothie.display_sections();
        assert_eq!(
            sections,
            vec![
                DisplaySection::new("Size", "Large"),
                DisplaySection::new("Base", "Coconut Water"),
                DisplaySection::new("Proteins", "Protein Powder, Peanut Butter"),
            ]
        );
        let html = smoothie.generate_display();
        assert!(html.starts_with(r#"<div class="ingredient-list">"#));
        assert!(html.contains("<strong>Proteins:</strong> Protein Powder, Peanut Butter"));
        assert!(!html.contains("Fruits"));
        assert_eq!(html, smoothie.generate_display());
    }

    #[test]
    fn nutrition_for_small_banana() {
        let mut smoothie = Smoothie::new(None, None, Size::Small, "water");
        smoothie.add_fruit("banana", None);
        let info = smoothie.nutritional_info();
        assert_eq!(info.calories, 110);
        assert_eq!(info.protein, 0);
        assert_eq!(info.fiber, 2);
        assert_eq!(info.vitamins, vec!["Potassium"]);
    }

    #[test]
    fn from_create_applies_defaults() {
        let smoothie = Smoothie::from_create(SmoothieCreate {
            name: None,
            customer_name: Some("Ada".to_string()),
            size: Size::Medium,
            base_liquid: "oat-milk".to_string(),
        });
        assert_eq!(smoothie.name(), DEFAULT_SMOOTHIE_NAME);
        assert_eq!(smoothie.customer_name(), "Ada");
        assert_eq!(smoothie.base_liquid(), "oat-milk");
    }
}
