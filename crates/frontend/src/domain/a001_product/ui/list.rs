use crate::config::Config;
use crate::domain::a001_product::api;
use crate::domain::a002_cart::CartViewModel;
use crate::shared::icons::icon;
use crate::shared::notify::report_error;
use crate::shared::number_format::format_twd;
use contracts::domain::a001_product::{categories, filter_by_category, CategoryFilter, Product};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Витрина: карточки товаров с фильтром по категории
#[component]
pub fn ProductList(cart: CartViewModel) -> impl IntoView {
    let config = use_context::<Config>().expect("Config not found in context");
    let products = RwSignal::new(Vec::<Product>::new());
    let error = RwSignal::new(None::<String>);
    let (filter, set_filter) = signal(CategoryFilter::All);

    spawn_local(async move {
        match api::fetch_products(&config).await {
            Ok(list) => products.set(list),
            Err(e) => report_error("Failed to load products", &e, error),
        }
    });

    let visible = Memo::new(move |_| filter_by_category(&products.get(), &filter.get()));
    let category_options = Memo::new(move |_| categories(&products.get()));

    view! {
        <section class="productDisplay">
            <select
                class="productSelect"
                prop:value=move || filter.get().select_value().to_string()
                on:change=move |ev| set_filter.set(CategoryFilter::from_select_value(&event_target_value(&ev)))
            >
                <option value={CategoryFilter::ALL_VALUE}>"全部"</option>
                {move || category_options.get().into_iter().map(|c| view! {
                    <option value=c.clone()>{c.clone()}</option>
                }).collect_view()}
            </select>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <ul class="productWrap">
                {move || visible.get().into_iter().map(|p| {
                    let product_id = p.id.clone();
                    view! {
                        <li class="productCard">
                            <h4 class="productType">"新品"</h4>
                            <img src=p.images.clone() alt=p.title.clone() />
                            <a
                                href="#"
                                class="addCardBtn"
                                class:addCardBtn--busy=move || cart.busy.get()
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    cart.add_product(product_id.clone());
                                }
                            >
                                {icon("cart")}
                                "加入購物車"
                            </a>
                            <h3>{p.title.clone()}</h3>
                            <del class="originPrice">{format_twd(p.origin_price)}</del>
                            <p class="nowPrice">{format_twd(p.price)}</p>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
