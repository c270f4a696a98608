use crate::config::Config;
use crate::domain::a001_product::ui::ProductList;
use crate::domain::a002_cart::ui::CartTable;
use crate::domain::a002_cart::CartViewModel;
use crate::domain::a003_order::ui::checkout::{CheckoutPanel, CheckoutViewModel};
use leptos::prelude::*;

/// Витрина: каталог, корзина и оформление заказа
#[component]
pub fn StorefrontPage() -> impl IntoView {
    let config = use_context::<Config>().expect("Config not found in context");
    let cart = CartViewModel::new(config.clone());
    let checkout = CheckoutViewModel::new(config);
    cart.load();

    view! {
        <main class="storefront">
            <ProductList cart=cart />
            <CartTable cart=cart />
            <CheckoutPanel vm=checkout cart=cart />
        </main>
    }
}
