use crate::domain::a002_cart::CartViewModel;
use crate::shared::icons::icon;
use crate::shared::number_format::format_twd;
use contracts::domain::a002_cart::CartItem;
use leptos::prelude::*;

#[component]
pub fn CartTable(cart: CartViewModel) -> impl IntoView {
    view! {
        <section class="shoppingCart">
            <h3 class="section-title">"我的購物車"</h3>

            {move || cart.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <table class="shoppingCart-table">
                <thead>
                    <tr>
                        <th width="40%">"品項"</th>
                        <th width="15%">"單價"</th>
                        <th width="15%">"數量"</th>
                        <th width="15%">"金額"</th>
                        <th width="15%"></th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || !cart.cart.get().is_empty()
                        fallback=|| view! {
                            <tr>
                                <td colspan="5" class="shoppingCart-empty">"購物車目前沒有商品"</td>
                            </tr>
                        }
                    >
                        {move || cart.cart.get().carts.into_iter().map(|item| view! {
                            <CartRow cart=cart item=item />
                        }).collect_view()}
                    </Show>
                </tbody>
                <tfoot>
                    <tr>
                        <td>
                            <a
                                href="#"
                                class="discardAllBtn"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    cart.clear_all();
                                }
                            >
                                "刪除所有品項"
                            </a>
                        </td>
                        <td></td>
                        <td></td>
                        <td>
                            <p>"總金額"</p>
                        </td>
                        <td>{move || format_twd(cart.cart.get().final_total)}</td>
                    </tr>
                </tfoot>
            </table>
        </section>
    }
}

#[component]
fn CartRow(cart: CartViewModel, item: CartItem) -> impl IntoView {
    let quantity = item.quantity;
    let id_minus = item.id.clone();
    let id_plus = item.id.clone();
    let id_remove = item.id.clone();
    let line_total = item.line_total();

    view! {
        <tr>
            <td>
                <div class="cardItem-title">
                    <img src=item.product.images.clone() alt=item.product.title.clone() />
                    <p>{item.product.title.clone()}</p>
                </div>
            </td>
            <td>{format_twd(item.product.price)}</td>
            <td class="cardItem-quantity">
                <button
                    class="button button--icon"
                    disabled=move || cart.busy.get()
                    on:click=move |_| cart.set_quantity(id_minus.clone(), quantity.saturating_sub(1))
                >
                    {icon("minus")}
                </button>
                <span>{quantity}</span>
                <button
                    class="button button--icon"
                    disabled=move || cart.busy.get()
                    on:click=move |_| cart.set_quantity(id_plus.clone(), quantity.saturating_add(1))
                >
                    {icon("plus")}
                </button>
            </td>
            <td>{format_twd(line_total)}</td>
            <td class="discardBtn">
                <a
                    href="#"
                    class="material-icons"
                    on:click=move |ev| {
                        ev.prevent_default();
                        cart.remove(id_remove.clone());
                    }
                >
                    {icon("delete")}
                </a>
            </td>
        </tr>
    }
}
