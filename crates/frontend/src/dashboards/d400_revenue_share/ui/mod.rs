pub mod chart;

pub use chart::RevenueShareChart;
