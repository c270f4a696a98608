pub mod api_utils;
pub mod date_utils;
pub mod error;
pub mod icons;
pub mod notify;
pub mod number_format;
pub mod request_state;
