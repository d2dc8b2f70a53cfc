// Domain modules

pub mod analytics;
pub mod engagement;
pub mod insights;
pub mod knowledge_base;
pub mod news;
pub mod posts;
pub mod search;
