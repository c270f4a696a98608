use crate::config::Config;
use crate::domain::a003_order::api;
use crate::shared::error::ApiError;
use crate::shared::notify::{confirm, report_error};
use crate::shared::request_state::begin_request;
use contracts::dashboards::d400_revenue_share::{revenue_buckets, ChartBucket, ChartMode};
use contracts::domain::a003_order::{Order, OrderCommand, UpdateOrderStatusRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Controller of the admin page
///
/// Owns the last order snapshot returned by the API. Every order endpoint
/// answers with the full list, which replaces the snapshot. Commands issued
/// while `loading` is set are dropped, so replies never arrive out of order.
#[derive(Clone, Copy)]
pub struct AdminOrdersViewModel {
    pub orders: RwSignal<Vec<Order>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// Set when the API refused the admin token
    pub needs_token: RwSignal<bool>,
    config: StoredValue<Config>,
}

impl AdminOrdersViewModel {
    pub fn new(config: Config) -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            needs_token: RwSignal::new(false),
            config: StoredValue::new(config),
        }
    }

    pub fn load(&self) {
        if !begin_request(self.loading) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let result = api::fetch_orders(&config).await;
            this.apply("Failed to load orders", result);
        });
    }

    /// Single entry point for every action of the order table
    pub fn dispatch(&self, command: OrderCommand) {
        if self.loading.get_untracked() {
            log::debug!("Order command {} ignored, request in flight", command.action());
            return;
        }
        if command.needs_confirmation() && !confirm("確定要刪除全部訂單？") {
            return;
        }
        if !begin_request(self.loading) {
            return;
        }
        log::debug!("Dispatching order command {:?}", command);

        let this = *self;
        spawn_local(async move {
            let config = this.config.get_value();
            let result = match &command {
                OrderCommand::ToggleStatus { id, paid } => {
                    let request = UpdateOrderStatusRequest::new(id.clone(), !*paid);
                    api::update_status(&config, &request).await
                }
                OrderCommand::Delete { id } => api::delete_order(&config, id).await,
                OrderCommand::DeleteAll => api::delete_all_orders(&config).await,
            };
            if result.is_ok() {
                log::info!("Order command {} done", command.action());
            }
            this.apply("Order command failed", result);
        });
    }

    /// Pie buckets computed from the current snapshot
    pub fn chart_buckets(&self, mode: ChartMode) -> Vec<ChartBucket> {
        self.orders.with(|orders| revenue_buckets(orders, mode))
    }

    fn apply(&self, context: &str, result: Result<Vec<Order>, ApiError>) {
        self.loading.set(false);
        match result {
            Ok(orders) => {
                self.orders.set(orders);
                self.error.set(None);
                self.needs_token.set(false);
            }
            Err(e) => {
                self.needs_token.set(e.is_unauthorized());
                report_error(context, &e, self.error);
            }
        }
    }
}
