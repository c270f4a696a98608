use super::view_model::AdminOrdersViewModel;
use crate::shared::date_utils::{format_unix_date, format_unix_datetime};
use crate::shared::icons::icon;
use contracts::domain::a003_order::command::{ACTION_DELETE, ACTION_TOGGLE_STATUS};
use contracts::domain::a003_order::{Order, OrderCommand};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Таблица заказов
///
/// Row buttons only carry `data-*` attributes; one click handler on the
/// table body decodes them and forwards the command to the view model.
#[component]
pub fn OrderTable(vm: AdminOrdersViewModel) -> impl IntoView {
    let on_body_click = move |ev: leptos::ev::MouseEvent| {
        let Some(element) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let data = element.dataset();
        let command = OrderCommand::from_dataset(
            data.get("action").as_deref(),
            data.get("id").as_deref(),
            data.get("paid").as_deref(),
        );
        if let Some(command) = command {
            ev.prevent_default();
            vm.dispatch(command);
        }
    };

    view! {
        <section class="orderPage">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{icon("orders")}"訂單列表"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| vm.load() disabled=move || vm.loading.get()>
                        {icon("refresh")}
                        "重新整理"
                    </button>
                    <button
                        class="discardAllBtn button button--secondary"
                        on:click=move |_| vm.dispatch(OrderCommand::DeleteAll)
                        disabled=move || vm.orders.with(|o| o.is_empty()) || vm.loading.get()
                    >
                        {icon("delete")}
                        "清除全部訂單"
                    </button>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="orderTableWrap">
                <table class="orderPage-table">
                    <thead>
                        <tr>
                            <th>"訂單編號"</th>
                            <th>"聯絡人"</th>
                            <th>"聯絡地址"</th>
                            <th>"電子郵件"</th>
                            <th>"訂單品項"</th>
                            <th>"訂單日期"</th>
                            <th>"訂單狀態"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody class="orderPage-tableBody" on:click=on_body_click>
                        <Show
                            when=move || vm.orders.with(|o| !o.is_empty())
                            fallback=|| view! {
                                <tr>
                                    <td colspan="8">"目前沒有訂單"</td>
                                </tr>
                            }
                        >
                            {move || {
                                vm.orders
                                    .get()
                                    .into_iter()
                                    .map(|order| order_row(order, vm.loading))
                                    .collect_view()
                            }}
                        </Show>
                    </tbody>
                </table>
            </div>
        </section>
    }
}

/// Row controls are switched off while a command is running
fn order_row(order: Order, loading: RwSignal<bool>) -> impl IntoView {
    let status_label = order.status_label();
    let paid = order.paid.to_string();
    let products = order.product_lines();
    let created = format_unix_date(order.created_at);
    let created_full = format_unix_datetime(order.created_at);

    view! {
        <tr>
            <td>{order.id.clone()}</td>
            <td>
                <p>{order.user.name.clone()}</p>
                <p>{order.user.tel.clone()}</p>
            </td>
            <td>{order.user.address.clone()}</td>
            <td>{order.user.email.clone()}</td>
            <td>
                {products.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            </td>
            <td title=created_full>{created}</td>
            <td class="orderStatus">
                <a
                    href="#"
                    class="orderStatus-Btn"
                    class:orderStatus-Btn--busy=move || loading.get()
                    aria-disabled=move || loading.get().to_string()
                    data-action={ACTION_TOGGLE_STATUS}
                    data-id=order.id.clone()
                    data-paid=paid
                >
                    {status_label}
                </a>
            </td>
            <td>
                <input
                    type="button"
                    class="delSingleOrder-Btn"
                    value="刪除"
                    disabled=move || loading.get()
                    data-action={ACTION_DELETE}
                    data-id=order.id.clone()
                />
            </td>
        </tr>
    }
}
