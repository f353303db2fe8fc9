pub mod aggregate;
pub mod catalog;

pub use aggregate::{Product, ProductId};
pub use catalog::{catalog, find_by_id, popular, POWER_OPTIONS};
