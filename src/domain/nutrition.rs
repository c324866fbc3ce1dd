//! Fixed nutrition lookup tables.
//!
//! Names outside the tables are accepted everywhere and simply contribute
//! nothing: lookups return the zero bonus instead of failing.

use serde::Serialize;

use super::ingredient::{Ingredient, Size};

/// Nutrition summary for one smoothie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: u32,
    pub fiber: u32,
    /// Each distinct tag once, in the order first contributed.
    pub vitamins: Vec<String>,
}

/// Nutrition added by one table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bonus {
    pub calories: u32,
    pub protein: u32,
    pub fiber: u32,
}

impl Bonus {
    const fn new(calories: u32, protein: u32, fiber: u32) -> Self {
        Self { calories, protein, fiber }
    }
}

/// Calories and fiber every fruit adds, known or not.
pub const FRUIT_BONUS: Bonus = Bonus::new(60, 0, 2);

pub const FRUIT_VITAMINS: &[(&str, &str)] = &[
    ("banana", "Potassium"),
    ("strawberry", "Vitamin C"),
    ("blueberry", "Antioxidants"),
    ("mango", "Vitamin A"),
];

pub const PROTEIN_BONUSES: &[(&str, Bonus)] = &[
    ("protein-powder", Bonus::new(120, 25, 0)),
    ("greek-yogurt", Bonus::new(100, 15, 0)),
    ("peanut-butter", Bonus::new(190, 8, 0)),
    ("chia-seeds", Bonus::new(60, 5, 5)),
];

pub fn size_calories(size: Size) -> u32 {
    match size {
        Size::Small => 50,
        Size::Medium => 75,
        Size::Large => 100,
    }
}

pub fn fruit_vitamin(name: &str) -> Option<&'static str> {
    FRUIT_VITAMINS
        .iter()
        .find(|(fruit, _)| *fruit == name)
        .map(|(_, vitamin)| *vitamin)
}

pub fn protein_bonus(name: &str) -> Bonus {
    PROTEIN_BONUSES
        .iter()
        .find(|(protein, _)| *protein == name)
        .map(|(_, bonus)| *bonus)
        .unwrap_or_default()
}

impl NutritionalInfo {
    fn add(&mut self, bonus: Bonus) {
        self.calories += bonus.calories;
        self.protein += bonus.protein;
        self.fiber += bonus.fiber;
    }

    fn add_vitamin(&mut self, vitamin: &str) {
        if !self.vitamins.iter().any(|v| v == vitamin) {
            self.vitamins.push(vitamin.to_string());
        }
    }

    /// Sums the table contributions of a size, its fruits and its proteins.
    /// Vegetables and extras carry no nutrition data.
    pub fn compute(size: Size, fruits: &[Ingredient], proteins: &[Ingredient]) -> Self {
        let mut info = Self {
            calories: size_calories(size),
            ..Self::default()
        };

        for fruit in fruits {
            info.add(FRUIT_BONUS);
            if let Some(vitamin) = fruit_vitamin(&fruit.name) {
                info.add_vitamin(vitamin);
            }
        }

        for protein in proteins {
            info.add(protein_bonus(&protein.name));
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(names: &[&str]) -> Vec<Ingredient> {
        names.iter().map(|n| Ingredient::new(*n, None)).collect()
    }

    #[test]
    fn small_with_banana() {
        let info = NutritionalInfo::compute(Size::Small, &items(&["banana"]), &[]);
        assert_eq!(
            info,
            NutritionalInfo {
                calories: 110,
                protein: 0,
                fiber: 2,
                vitamins: vec!["Potassium".to_string()],
            }
        );
    }

    #[test]
    fn vitamins_are_deduplicated() {
        let info = NutritionalInfo::compute(
            Size::Medium,
            &items(&["banana", "mango", "banana"]),
            &[],
        );
        assert_eq!(info.vitamins, vec!["Potassium", "Vitamin A"]);
        assert_eq!(info.calories, 75 + 3 * 60);
        assert_eq!(info.fiber, 6);
    }

    #[test]
    fn unknown_protein_contributes_nothing() {
        let info = NutritionalInfo::compute(Size::Large, &[], &items(&["kale"]));
        assert_eq!(info.calories, 100);
        assert_eq!(info.protein, 0);
        assert_eq!(info.fiber, 0);
        assert!(info.vitamins.is_empty());
    }

    #[test]
    fn unknown_fruit_still_counts_as_fruit() {
        let info = NutritionalInfo::compute(Size::Small, &items(&["dragonfruit"]), &[]);
        assert_eq!(info.calories, 110);
        assert_eq!(info.fiber, 2);
        assert!(info.vitamins.is_empty());
    }

    #[test]
    fn chia_seeds_add_fiber() {
        let info = NutritionalInfo::compute(
            Size::Small,
            &[],
            &items(&["chia-seeds", "protein-powder"]),
        );
        assert_eq!(info.protein, 30);
        assert_eq!(info.calories, 50 + 60 + 120);
        assert_eq!(info.fiber, 5);
    }
}
