pub mod core_api;
pub mod fields;
pub mod save;
pub mod summary;
