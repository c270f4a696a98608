//! Order administration table
//!
//! - view_model.rs: owns the fetched orders and runs [`OrderCommand`]s
//! - view.rs: table rendering and click decoding
//!
//! [`OrderCommand`]: contracts::domain::a003_order::OrderCommand

mod view;
mod view_model;

pub use view::OrderTable;
pub use view_model::AdminOrdersViewModel;
