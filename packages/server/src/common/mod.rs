// Common types and utilities shared across the application

pub mod filters;
pub mod pagination;
pub mod types;

pub use filters::*;
pub use pagination::*;
pub use types::*;
