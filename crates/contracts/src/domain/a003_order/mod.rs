pub mod aggregate;
pub mod error;

pub use aggregate::{submit_order, OrderConfirmation, OrderForm};
pub use error::{OrderError, RequiredField};
