use super::view_model::CheckoutViewModel;
use crate::domain::a002_cart::CartViewModel;
use contracts::domain::a003_order::{CheckoutForm, PAYMENT_METHODS};
use leptos::prelude::*;

#[component]
pub fn CheckoutPanel(vm: CheckoutViewModel, cart: CartViewModel) -> impl IntoView {
    let payment_error = vm.field_error("payment");

    view! {
        <section class="orderInfo">
            <h3 class="section-title">"填寫預訂資料"</h3>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form
                class="orderInfo-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(cart);
                }
            >
                {text_field(vm, "name", "姓名", "text", "請輸入姓名", |f| f.name.clone(), |f, v| f.name = v)}
                {text_field(vm, "tel", "電話", "tel", "請輸入電話", |f| f.tel.clone(), |f, v| f.tel = v)}
                {text_field(vm, "email", "Email", "email", "請輸入 Email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_field(vm, "address", "寄送地址", "text", "請輸入寄送地址", |f| f.address.clone(), |f, v| f.address = v)}

                <div class="orderInfo-formGroup">
                    <label for="payment" class="orderInfo-label">"交易方式"</label>
                    <div class="orderInfo-inputWrap">
                        <select
                            id="payment"
                            class="orderInfo-input"
                            prop:value=move || vm.form.with(|f| f.payment.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.payment = value);
                            }
                        >
                            {PAYMENT_METHODS.iter().map(|m| view! {
                                <option value={*m}>{*m}</option>
                            }).collect_view()}
                        </select>
                        <p class="orderInfo-message">{move || payment_error().unwrap_or_default()}</p>
                    </div>
                </div>

                <input
                    type="submit"
                    value="送出預訂資料"
                    class="orderInfo-btn"
                    disabled=move || vm.submitting.get()
                />
            </form>
        </section>
    }
}

fn text_field(
    vm: CheckoutViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&CheckoutForm) -> String,
    set: fn(&mut CheckoutForm, String),
) -> impl IntoView {
    let error = vm.field_error(id);

    view! {
        <div class="orderInfo-formGroup">
            <label for=id class="orderInfo-label">{label}</label>
            <div class="orderInfo-inputWrap">
                <input
                    type=input_type
                    id=id
                    name=label
                    class="orderInfo-input"
                    placeholder=placeholder
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                />
                <p class="orderInfo-message">{move || error().unwrap_or_default()}</p>
            </div>
        </div>
    }
}
