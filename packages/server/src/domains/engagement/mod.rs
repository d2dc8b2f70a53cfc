pub mod models;
pub mod overview;

pub use models::*;
