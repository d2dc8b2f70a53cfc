pub mod models;
pub mod summarize;

pub use models::*;
pub use summarize::*;
