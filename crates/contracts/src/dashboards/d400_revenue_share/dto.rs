use serde::{Deserialize, Serialize};

/// Title of the catch-all bucket
pub const OTHERS_TITLE: &str = "其他";

/// Number of individually shown products
pub const TOP_N: usize = 3;

/// Pie colours by position: 1st, 2nd, 3rd, others
pub const PALETTE: [&str; 4] = ["#DACBFF", "#9D7FEA", "#5434A7", "#301E5F"];

/// Anything that carries a chart title and a revenue total
pub trait RevenueLine {
    fn title(&self) -> &str;
    fn total_price(&self) -> f64;
}

/// Выручка по одному товару по всем заказам
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEntry {
    pub product_id: String,
    pub category: String,
    pub title: String,
    pub total_price: f64,
}

impl RevenueLine for RevenueEntry {
    fn title(&self) -> &str {
        &self.title
    }

    fn total_price(&self) -> f64 {
        self.total_price
    }
}

/// Выручка по категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRevenue {
    pub category: String,
    pub total_price: f64,
}

impl RevenueLine for CategoryRevenue {
    fn title(&self) -> &str {
        &self.category
    }

    fn total_price(&self) -> f64 {
        self.total_price
    }
}

/// Сегмент круговой диаграммы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBucket {
    pub title: String,
    pub total_price: f64,
    /// true only for the synthetic "其他" bucket
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_others: bool,
}

impl ChartBucket {
    pub fn new(title: impl Into<String>, total_price: f64) -> Self {
        Self {
            title: title.into(),
            total_price,
            is_others: false,
        }
    }

    pub fn others(total_price: f64) -> Self {
        Self {
            title: OTHERS_TITLE.to_string(),
            total_price,
            is_others: true,
        }
    }
}

/// Bucket ready for drawing: colour and share of the whole pie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSegment {
    pub title: String,
    pub total_price: f64,
    pub color: String,
    /// 0.0..=1.0
    pub share: f64,
}

/// Разрез диаграммы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartMode {
    #[default]
    Product,
    Category,
}

impl ChartMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Product => "全品項營收比重",
            Self::Category => "全產品類別營收比重",
        }
    }
}
