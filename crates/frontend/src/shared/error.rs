use thiserror::Error;

/// Ошибка обращения к API магазина
///
/// `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("無法連線至伺服器：{0}")]
    Request(String),

    #[error("請求資料錯誤：{0}")]
    Serialize(String),

    /// Non-2xx answer; `message` comes from the API body when it has one
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("回應格式錯誤：{0}")]
    Parse(String),

    #[error("尚未設定管理員 Token")]
    Unauthorized,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Http { status: 401 | 403, .. })
    }
}
