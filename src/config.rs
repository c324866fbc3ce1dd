use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Category, Size};

pub const DEFAULT_CONFIG_PATH: &str = "smoothie.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizePrices {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl Default for SizePrices {
    fn default() -> Self {
        Self {
            small: 4.99,
            medium: 5.99,
            large: 6.99,
        }
    }
}

/// Prices the order form attaches to each choice. A category table that is
/// present in the config file replaces the default table for that category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub sizes: SizePrices,
    pub bases: BTreeMap<String, f64>,
    pub fruits: BTreeMap<String, f64>,
    pub vegetables: BTreeMap<String, f64>,
    pub proteins: BTreeMap<String, f64>,
    pub extras: BTreeMap<String, f64>,
}

fn table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(name, price)| (name.to_string(), *price))
        .collect()
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            sizes: SizePrices::default(),
            bases: table(&[
                ("almond-milk", 0.5),
                ("oat-milk", 0.5),
                ("coconut-water", 0.75),
                ("orange-juice", 0.5),
                ("dairy-milk", 0.0),
                ("water", 0.0),
            ]),
            fruits: table(&[
                ("banana", 0.5),
                ("strawberry", 0.75),
                ("blueberry", 0.75),
                ("mango", 1.0),
                ("pineapple", 0.75),
            ]),
            vegetables: table(&[
                ("spinach", 0.5),
                ("kale", 0.75),
                ("carrot", 0.5),
                ("cucumber", 0.5),
            ]),
            proteins: table(&[
                ("protein-powder", 1.5),
                ("greek-yogurt", 1.0),
                ("peanut-butter", 1.0),
                ("chia-seeds", 0.75),
            ]),
            extras: table(&[
                ("honey", 0.5),
                ("flax-seeds", 0.5),
                ("cinnamon", 0.25),
                ("ice", 0.0),
            ]),
        }
    }
}

impl PriceTable {
    pub fn size_price(&self, size: Size) -> f64 {
        match size {
            Size::Small => self.sizes.small,
            Size::Medium => self.sizes.medium,
            Size::Large => self.sizes.large,
        }
    }

    /// Unlisted bases cost nothing.
    pub fn base_price(&self, base_liquid: &str) -> f64 {
        self.bases.get(base_liquid).copied().unwrap_or(0.0)
    }

    fn category_table(&self, category: Category) -> &BTreeMap<String, f64> {
        match category {
            Category::Fruits => &self.fruits,
            Category::Vegetables => &self.vegetables,
            Category::Proteins => &self.proteins,
            Category::Extras => &self.extras,
        }
    }

    /// Unlisted ingredients cost nothing.
    pub fn ingredient_price(&self, category: Category, name: &str) -> f64 {
        self.category_table(category)
            .get(name)
            .copied()
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    pub max_fruits: usize,
    pub max_proteins: usize,
    pub min_customer_name_len: usize,
    pub prices: PriceTable,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            max_fruits: 3,
            max_proteins: 2,
            min_customer_name_len: 2,
            prices: PriceTable::default(),
        }
    }
}

impl OrderSettings {
    /// Selection ceiling for a category, `None` when unlimited.
    pub fn selection_limit(&self, category: Category) -> Option<usize> {
        match category {
            Category::Fruits => Some(self.max_fruits),
            Category::Proteins => Some(self.max_proteins),
            Category::Vegetables | Category::Extras => None,
        }
    }
}

/// Loads settings from `SMOOTHIE_CONFIG` (or `smoothie.toml`) and the
/// process environment.
pub fn load_settings() -> Result<OrderSettings, ConfigError> {
    let path = std::env::var("SMOOTHIE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    load_settings_from(&path, |key| std::env::var(key).ok())
}

/// Defaults, then the TOML file if it exists, then env overrides.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<OrderSettings, ConfigError> {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str::<OrderSettings>(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => OrderSettings::default(),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if let Some(v) = env_usize(&env, "SMOOTHIE_MAX_FRUITS")? {
        settings.max_fruits = v;
    }
    if let Some(v) = env_usize(&env, "SMOOTHIE_MAX_PROTEINS")? {
        settings.max_proteins = v;
    }
    if let Some(v) = env_usize(&env, "SMOOTHIE_MIN_NAME_LEN")? {
        settings.min_customer_name_len = v;
    }

    Ok(settings)
}

fn env_usize(
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<usize>, ConfigError> {
    match env(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv {
                key: key.to_string(),
                value,
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn temp_config(contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("smoothie_config_test_{suffix}.toml"));
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("smoothie_config_test_does_not_exist.toml");
        let settings = load_settings_from(&path, no_env).expect("settings");
        assert_eq!(settings, OrderSettings::default());
        assert_eq!(settings.selection_limit(Category::Proteins), Some(2));
        assert_eq!(settings.selection_limit(Category::Extras), None);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_config(
            r#"
max_fruits = 4

[prices.sizes]
large = 8.0

[prices.extras]
honey = 1.0
"#,
        );
        let settings = load_settings_from(&path, no_env).expect("settings");
        fs::remove_file(&path).expect("cleanup");

        assert_eq!(settings.max_fruits, 4);
        assert_eq!(settings.max_proteins, 2);
        assert_eq!(settings.prices.size_price(Size::Large), 8.0);
        assert_eq!(settings.prices.size_price(Size::Small), 4.99);
        assert_eq!(settings.prices.ingredient_price(Category::Extras, "honey"), 1.0);
        assert_eq!(settings.prices.ingredient_price(Category::Extras, "ice"), 0.0);
        assert_eq!(settings.prices.ingredient_price(Category::Fruits, "banana"), 0.5);
    }

    #[test]
    fn env_overrides_file() {
        let path = temp_config("max_proteins = 5\n");
        let settings = load_settings_from(&path, |key| match key {
            "SMOOTHIE_MAX_PROTEINS" => Some("1".to_string()),
            "SMOOTHIE_MIN_NAME_LEN" => Some(" 3 ".to_string()),
            _ => None,
        })
        .expect("settings");
        fs::remove_file(&path).expect("cleanup");

        assert_eq!(settings.max_proteins, 1);
        assert_eq!(settings.min_customer_name_len, 3);
    }

    #[test]
    fn invalid_env_value_is_rejected() {
        let path = std::env::temp_dir().join("smoothie_config_test_does_not_exist.toml");
        let err = load_settings_from(&path, |key| {
            (key == "SMOOTHIE_MAX_FRUITS").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { ref key, .. } if key == "SMOOTHIE_MAX_FRUITS"));
    }

    #[test]
    fn malformed_file_is_rejected() {
        let path = temp_config("max_fruits = \"three\"\n");
        let err = load_settings_from(&path, no_env).unwrap_err();
        fs::remove_file(&path).expect("cleanup");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unlisted_prices_are_zero() {
        let prices = PriceTable::default();
        assert_eq!(prices.base_price("kombucha"), 0.0);
        assert_eq!(prices.ingredient_price(Category::Proteins, "kale"), 0.0);
    }
}
