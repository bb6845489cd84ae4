use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fr.openfoodfacts.org";
pub const DEFAULT_LOCALE: &str = "fr";
pub const SEARCH_PATH: &[&str] = &["cgi", "search.pl"];
pub const PRODUCT_PATH: &[&str] = &["api", "v2", "product"];

/// Placeholder used when a product carries neither a localized nor a generic name.
pub const UNKNOWN_NAME: &str = "Nom inconnu";

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("foodlog-sdk/", env!("CARGO_PKG_VERSION"));

/// Nutriment keys read from the `nutriments` object of a product.
pub const ENERGY_KCAL_KEY: &str = "energy-kcal_100g";
pub const PROTEINS_KEY: &str = "proteins_100g";
pub const CARBOHYDRATES_KEY: &str = "carbohydrates_100g";
pub const FAT_KEY: &str = "fat_100g";

/// Field projection sent with every request. The localized name field is
/// appended per locale.
pub fn product_fields(locale: &str) -> String {
    let localized = localized_name_key(locale);
    [
        "code",
        "product_name",
        localized.as_str(),
        "brands",
        "nutriments",
        "image_url",
        "nutriscore_grade",
    ]
    .join(",")
}

pub fn localized_name_key(locale: &str) -> String {
    format!("product_name_{}", locale)
}

/// Resolved runtime settings, assembled by [`FoodLogSdkBuilder`](crate::FoodLogSdkBuilder).
#[derive(Debug, Clone)]
pub struct FoodLogConfig {
    pub base_url: reqwest::Url,
    pub locale: String,
    pub page_size: usize,
    pub debounce: Duration,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FoodLogConfig {
    fn default() -> Self {
        Self {
            base_url: reqwest::Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            locale: DEFAULT_LOCALE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
