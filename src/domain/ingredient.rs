use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Cup size of a smoothie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    /// Label used on the order display, e.g. `Medium`.
    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSize(pub String);

impl fmt::Display for UnknownSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown size: {}", self.0)
    }
}

impl std::error::Error for UnknownSize {}

impl FromStr for Size {
    type Err = UnknownSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "small" => Ok(Size::Small),
            "medium" => Ok(Size::Medium),
            "large" => Ok(Size::Large),
            other => Err(UnknownSize(other.to_string())),
        }
    }
}

/// One of the four ingredient lists of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fruits,
    Vegetables,
    Proteins,
    Extras,
}

impl Category {
    /// Display and description order.
    pub const ALL: [Category; 4] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Proteins,
        Category::Extras,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Proteins => "proteins",
            Category::Extras => "extras",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Proteins => "Proteins",
            Category::Extras => "Extras",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected ingredient and the unit price charged for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub price: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, price: impl Into<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            price: price.into().unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_parses_form_values() {
        assert_eq!("small".parse::<Size>(), Ok(Size::Small));
        assert_eq!(" large ".parse::<Size>(), Ok(Size::Large));
        assert_eq!("huge".parse::<Size>(), Err(UnknownSize("huge".to_string())));
    }

    #[test]
    fn ingredient_price_defaults_to_zero() {
        assert_eq!(Ingredient::new("banana", None).price, 0.0);
        assert_eq!(Ingredient::new("banana", 0.5).price, 0.5);
    }
}
