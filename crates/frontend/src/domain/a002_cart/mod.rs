pub mod api;
pub mod ui;
pub mod view_model;

pub use view_model::CartViewModel;
