use crate::config::load_config;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => {
            // Every api module reads the endpoints from this context.
            provide_context(config);
            view! { <AppRoutes /> }.into_any()
        }
        Err(e) => {
            log::error!("Failed to load configuration: {:#}", e);
            view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{format!("設定錯誤：{}", e)}</span>
                </div>
            }
            .into_any()
        }
    }
}
