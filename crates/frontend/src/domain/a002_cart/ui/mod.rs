pub mod table;

pub use table::CartTable;
