use crate::system::pages::admin::AdminPage;
use crate::system::pages::storefront::StorefrontPage;
use leptos::prelude::*;

/// The shop is served from two entry points: the storefront and `admin`
pub fn is_admin_path(pathname: &str) -> bool {
    let path = pathname.trim_end_matches('/');
    let last = path.rsplit('/').next().unwrap_or(path);
    last == "admin" || last == "admin.html"
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let path = current_path();
    log::debug!("Routing {}", path);

    if is_admin_path(&path) {
        view! { <AdminPage /> }.into_any()
    } else {
        view! { <StorefrontPage /> }.into_any()
    }
}
