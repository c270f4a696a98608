//! Checkout form
//!
//! Same MVVM split as the other forms:
//! - view_model.rs: form state, validation and the submit command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CheckoutPanel;
pub use view_model::CheckoutViewModel;
