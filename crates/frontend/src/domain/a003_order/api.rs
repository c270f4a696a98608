use crate::config::{resolve_admin_token, Config};
use crate::shared::api_utils::{send, send_json};
use crate::shared::error::ApiError;
use crate::system::auth::storage;
use contracts::domain::a003_order::{
    CreateOrderRequest, Order, OrderListResponse, UpdateOrderStatusRequest,
};
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

/// Оформить заказ из текущей корзины
pub async fn create_order(config: &Config, request: &CreateOrderRequest) -> Result<(), ApiError> {
    let _: Value = send_json(Request::post(&config.customer_url("orders")), request).await?;
    Ok(())
}

fn with_admin_auth(config: &Config, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = resolve_admin_token(storage::get_admin_token(), &config.admin.token)
        .ok_or(ApiError::Unauthorized)?;
    Ok(request
        .header("Content-Type", "application/json")
        .header("Authorization", &token))
}

/// Получить список заказов
pub async fn fetch_orders(config: &Config) -> Result<Vec<Order>, ApiError> {
    let request = with_admin_auth(config, Request::get(&config.admin_url("orders")))?;
    let response: OrderListResponse = send(request).await?;
    Ok(response.orders)
}

/// Изменить статус оплаты заказа
pub async fn update_status(
    config: &Config,
    request: &UpdateOrderStatusRequest,
) -> Result<Vec<Order>, ApiError> {
    let builder = with_admin_auth(config, Request::put(&config.admin_url("orders")))?;
    let response: OrderListResponse = send_json(builder, request).await?;
    Ok(response.orders)
}

/// Удалить заказ
pub async fn delete_order(config: &Config, order_id: &str) -> Result<Vec<Order>, ApiError> {
    let url = config.admin_url(&format!("orders/{}", urlencoding::encode(order_id)));
    let request = with_admin_auth(config, Request::delete(&url))?;
    let response: OrderListResponse = send(request).await?;
    Ok(response.orders)
}

/// Удалить все заказы
pub async fn delete_all_orders(config: &Config) -> Result<Vec<Order>, ApiError> {
    let request = with_admin_auth(config, Request::delete(&config.admin_url("orders")))?;
    let response: OrderListResponse = send(request).await?;
    Ok(response.orders)
}
