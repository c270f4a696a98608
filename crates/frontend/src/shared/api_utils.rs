//! API utilities for talking to the shop API
//!
//! Every endpoint answers JSON; errors come back as
//! `{ "status": false, "message": "..." }`.

use super::error::ApiError;
use contracts::shared::api_response::ApiErrorBody;
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Send a request without body and decode the JSON answer
pub async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    read_json(response).await
}

/// Send `body` as JSON and decode the JSON answer
pub async fn send_json<B, T>(request: RequestBuilder, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = request
        .json(body)
        .map_err(|e| ApiError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    read_json(response).await
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn http_error(status: u16, body: &str) -> ApiError {
    let message = ApiErrorBody::message_from(body).unwrap_or_else(|| format!("HTTP {}", status));
    ApiError::Http { status, message }
}
