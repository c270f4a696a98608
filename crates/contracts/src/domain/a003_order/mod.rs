pub mod aggregate;
pub mod checkout;
pub mod command;

pub use aggregate::*;
pub use checkout::{CheckoutForm, CreateOrderRequest, FieldErrors, PAYMENT_METHODS};
pub use command::OrderCommand;
