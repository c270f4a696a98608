use crate::config::Config;
use crate::dashboards::d400_revenue_share::ui::RevenueShareChart;
use crate::domain::a003_order::ui::admin_list::{AdminOrdersViewModel, OrderTable};
use crate::system::auth::storage;
use leptos::prelude::*;

/// Админка: диаграмма выручки и таблица заказов
#[component]
pub fn AdminPage() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not found in context");
    let vm = AdminOrdersViewModel::new(config);
    vm.load();

    view! {
        <main class="admin">
            <Show when=move || vm.needs_token.get()>
                <AdminTokenForm vm=vm />
            </Show>
            <RevenueShareChart vm=vm />
            <OrderTable vm=vm />
        </main>
    }
}

/// Shown when the API rejects the configured token
#[component]
fn AdminTokenForm(vm: AdminOrdersViewModel) -> impl IntoView {
    let token = RwSignal::new(String::new());

    let save = move || {
        let value = token.get_untracked();
        if value.trim().is_empty() {
            storage::clear_admin_token();
        } else {
            storage::save_admin_token(&value);
        }
        token.set(String::new());
        vm.load();
    };

    view! {
        <div class="warning-box admin-token">
            <label for="admin-token">"管理員 Token"</label>
            <input
                type="password"
                id="admin-token"
                prop:value=move || token.get()
                on:input=move |ev| token.set(event_target_value(&ev))
            />
            <button class="button button--primary" on:click=move |_| save()>
                "儲存"
            </button>
        </div>
    }
}
