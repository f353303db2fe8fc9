pub mod blog;
pub mod filters;
