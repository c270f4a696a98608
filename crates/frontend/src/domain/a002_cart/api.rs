use crate::config::Config;
use crate::shared::api_utils::{send, send_json};
use crate::shared::error::ApiError;
use contracts::domain::a002_cart::{AddCartItemRequest, CartResponse, UpdateCartItemRequest};
use gloo_net::http::Request;

/// Получить корзину
pub async fn fetch_cart(config: &Config) -> Result<CartResponse, ApiError> {
    send(Request::get(&config.customer_url("carts"))).await
}

/// Добавить товар в корзину
pub async fn add_item(config: &Config, request: &AddCartItemRequest) -> Result<CartResponse, ApiError> {
    send_json(Request::post(&config.customer_url("carts")), request).await
}

/// Изменить количество позиции
pub async fn update_item(
    config: &Config,
    request: &UpdateCartItemRequest,
) -> Result<CartResponse, ApiError> {
    send_json(Request::patch(&config.customer_url("carts")), request).await
}

/// Удалить позицию
pub async fn remove_item(config: &Config, cart_id: &str) -> Result<CartResponse, ApiError> {
    let url = config.customer_url(&format!("carts/{}", urlencoding::encode(cart_id)));
    send(Request::delete(&url)).await
}

/// Очистить корзину
pub async fn clear_cart(config: &Config) -> Result<CartResponse, ApiError> {
    send(Request::delete(&config.customer_url("carts"))).await
}
