// REST route handlers

pub mod analytics;
pub mod dashboard;
pub mod engagement;
mod fetch;
pub mod health;
pub mod knowledge_base;
pub mod monitoring;
pub mod search;
pub mod summarize;
pub mod trending;

pub use analytics::{network_handler, topics_handler};
pub use dashboard::dashboard_handler;
pub use engagement::{engagement_handler, engagement_logs_handler};
pub use health::health_handler;
pub use knowledge_base::{
    knowledge_base_create_handler, knowledge_base_list_handler, knowledge_base_upload_handler,
};
pub use monitoring::{
    crisis_timeline_handler, executive_summary_handler, keywords_handler, topic_matrix_handler,
    unified_handler, urgency_handler,
};
pub use search::search_handler;
pub use summarize::summarize_handler;
pub use trending::trending_handler;
