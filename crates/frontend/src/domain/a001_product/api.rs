use crate::config::Config;
use crate::shared::api_utils::send;
use crate::shared::error::ApiError;
use contracts::domain::a001_product::{Product, ProductListResponse};
use gloo_net::http::Request;

/// Получить каталог товаров
pub async fn fetch_products(config: &Config) -> Result<Vec<Product>, ApiError> {
    let response: ProductListResponse =
        send(Request::get(&config.customer_url("products"))).await?;
    log::debug!("Loaded {} products", response.products.len());
    Ok(response.products)
}
