use serde::{Deserialize, Serialize};

/// Товар каталога магазина (GET customer/{path}/products)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,

    /// Цена до скидки, выводится зачёркнутой
    #[serde(default)]
    pub origin_price: f64,

    pub price: f64,

    #[serde(default)]
    pub description: String,

    /// URL картинки (API отдаёт одну строку)
    #[serde(default)]
    pub images: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub status: bool,
    pub products: Vec<Product>,
}

/// Фильтр витрины по категории
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Value of the "all categories" `<option>`
    pub const ALL_VALUE: &'static str = "all";

    pub fn from_select_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == Self::ALL_VALUE {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            Self::All => Self::ALL_VALUE,
            Self::Category(c) => c,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => product.category == *c,
        }
    }
}

/// Distinct categories in the order they first appear in the catalog
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in products {
        if !seen.iter().any(|c| *c == p.category) {
            seen.push(p.category.clone());
        }
    }
    seen
}

pub fn filter_by_category(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
