use serde::{Deserialize, Serialize};

/// Тело ответа API при ошибке: `{ "status": false, "message": "..." }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
}

impl ApiErrorBody {
    /// Message of an error response, if the body is the API's JSON error shape
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}
