use super::error::ApiError;
use leptos::prelude::*;

/// Blocking browser alert, as the shop always did on failures
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Log the failure, keep it in the page's error slot and alert the user
pub fn report_error(context: &str, err: &ApiError, target: RwSignal<Option<String>>) {
    log::error!("{}: {:?}", context, err);
    let message = err.to_string();
    target.set(Some(message.clone()));
    alert(&message);
}
