use super::api;
use crate::config::Config;
use crate::shared::error::ApiError;
use crate::shared::notify::{confirm, report_error};
use crate::shared::request_state::begin_request;
use contracts::domain::a002_cart::{plan_add, plan_quantity, CartChange, CartResponse, QuantityChange};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Состояние корзины витрины
///
/// The cart lives on the server; this keeps the last answer of any cart
/// endpoint and is shared by the product list, the cart table and checkout.
/// While `busy` is set every other cart action is ignored.
#[derive(Clone, Copy)]
pub struct CartViewModel {
    pub cart: RwSignal<CartResponse>,
    pub error: RwSignal<Option<String>>,
    pub busy: RwSignal<bool>,
    config: StoredValue<Config>,
}

impl CartViewModel {
    pub fn new(config: Config) -> Self {
        Self {
            cart: RwSignal::new(CartResponse::default()),
            error: RwSignal::new(None),
            busy: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn load(&self) {
        if !begin_request(self.busy) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let result = api::fetch_cart(&config).await;
            this.apply("Failed to load cart", result);
        });
    }

    /// «加入購物車»: a product already in the cart gets +1
    pub fn add_product(&self, product_id: String) {
        if !begin_request(self.busy) {
            return;
        }
        let this = *self;
        // planned against the reply of the previous request
        let change = plan_add(&this.cart.get_untracked(), &product_id);
        spawn_local(async move {
            let config = this.config.get_value();
            let result = match &change {
                CartChange::Add(request) => api::add_item(&config, request).await,
                CartChange::Update(request) => api::update_item(&config, request).await,
            };
            if result.is_ok() {
                log::info!("Added product {} to cart", product_id);
            }
            this.apply("Failed to add product to cart", result);
        });
    }

    pub fn set_quantity(&self, cart_id: String, quantity: u32) {
        if !begin_request(self.busy) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let result = match plan_quantity(&cart_id, quantity) {
                QuantityChange::Update(request) => api::update_item(&config, &request).await,
                QuantityChange::Remove { cart_id } => api::remove_item(&config, &cart_id).await,
            };
            this.apply("Failed to change cart quantity", result);
        });
    }

    pub fn remove(&self, cart_id: String) {
        if !begin_request(self.busy) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let result = api::remove_item(&config, &cart_id).await;
            this.apply("Failed to remove cart item", result);
        });
    }

    pub fn clear_all(&self) {
        if self.cart.get_untracked().is_empty() {
            return;
        }
        if !confirm("確定要刪除購物車內所有品項？") || !begin_request(self.busy) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let result = api::clear_cart(&config).await;
            this.apply("Failed to clear cart", result);
        });
    }

    fn apply(&self, context: &str, result: Result<CartResponse, ApiError>) {
        self.busy.set(false);
        match result {
            Ok(cart) => {
                self.cart.set(cart);
                self.error.set(None);
            }
            Err(e) => report_error(context, &e, self.error),
        }
    }
}
