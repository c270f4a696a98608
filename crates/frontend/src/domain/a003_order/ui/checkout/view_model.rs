use crate::config::Config;
use crate::domain::a002_cart::CartViewModel;
use crate::domain::a003_order::api;
use crate::shared::notify::{alert, report_error};
use contracts::domain::a003_order::{CheckoutForm, CreateOrderRequest, FieldErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the checkout form
#[derive(Clone, Copy)]
pub struct CheckoutViewModel {
    pub form: RwSignal<CheckoutForm>,
    pub field_errors: RwSignal<FieldErrors>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    config: StoredValue<Config>,
}

impl CheckoutViewModel {
    pub fn new(config: Config) -> Self {
        Self {
            form: RwSignal::new(CheckoutForm::default()),
            field_errors: RwSignal::new(FieldErrors::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn field_error(&self, field: &'static str) -> impl Fn() -> Option<String> + Copy + 'static {
        let errors = self.field_errors;
        move || errors.with(|e| e.get(field).cloned())
    }

    pub fn submit_command(&self, cart: CartViewModel) {
        if self.submitting.get_untracked() {
            return;
        }
        if cart.cart.get_untracked().is_empty() {
            let message = "購物車內沒有商品，請先加入商品".to_string();
            alert(&message);
            self.error.set(Some(message));
            return;
        }

        // Validate
        let request = match CreateOrderRequest::from_form(&self.form.get_untracked()) {
            Ok(request) => request,
            Err(errors) => {
                log::debug!("Checkout form rejected: {:?}", errors);
                self.field_errors.set(errors);
                return;
            }
        };
        self.field_errors.set(FieldErrors::new());
        self.error.set(None);
        self.submitting.set(true);

        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            match api::create_order(&config, &request).await {
                Ok(()) => {
                    log::info!("Order created for {}", request.data.user.email);
                    this.form.set(CheckoutForm::default());
                    alert("訂單建立成功");
                    // the API empties the cart once the order exists
                    cart.load();
                }
                Err(e) => report_error("Failed to create order", &e, this.error),
            }
            this.submitting.set(false);
        });
    }
}
