pub mod hits;
pub mod query;

pub use hits::SearchHit;
pub use query::SearchRequest;
