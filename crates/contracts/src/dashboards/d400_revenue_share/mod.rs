pub mod aggregator;
pub mod dto;

pub use aggregator::*;
pub use dto::*;
