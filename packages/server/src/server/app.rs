//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{FixtureData, GeminiClient, NoopCompletionService, ServerDeps};
use crate::server::routes;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> anyhow::Result<Router> {
    let completion: Arc<dyn crate::kernel::BaseCompletionService> =
        match config.model_api_key.clone() {
            Some(key) => Arc::new(GeminiClient::new(
                key,
                config.model_name.clone(),
                config.fallback_model_name.clone(),
            )?),
            None => {
                tracing::warn!("No model API key configured, summarization disabled");
                Arc::new(NoopCompletionService)
            }
        };

    let fixtures = if config.use_fixture_data {
        tracing::info!("Fixture data mode enabled, read endpoints serve built-in data");
        Some(Arc::new(FixtureData::load()))
    } else {
        None
    };

    let deps = Arc::new(ServerDeps::new(
        pool.clone(),
        completion,
        fixtures,
        config.upload_dir.clone(),
    ));

    let app_state = AppState {
        db_pool: pool,
        deps,
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let app = Router::new()
        .route("/health", get(routes::health_handler))
        .route("/api/dashboard", get(routes::dashboard_handler))
        .route("/api/trending", get(routes::trending_handler))
        .route("/api/analytics/topics", get(routes::topics_handler))
        .route("/api/analytics/network", get(routes::network_handler))
        .route("/api/monitoring/urgency", get(routes::urgency_handler))
        .route("/api/monitoring/keywords", get(routes::keywords_handler))
        .route(
            "/api/monitoring/topic-matrix",
            get(routes::topic_matrix_handler),
        )
        .route(
            "/api/monitoring/crisis-timeline",
            get(routes::crisis_timeline_handler),
        )
        .route("/api/monitoring/unified", get(routes::unified_handler))
        .route(
            "/api/monitoring/executive-summary",
            get(routes::executive_summary_handler),
        )
        .route("/api/search", post(routes::search_handler))
        .route("/api/summarize", post(routes::summarize_handler))
        .route("/api/engagement", get(routes::engagement_handler))
        .route("/api/engagement/logs", get(routes::engagement_logs_handler))
        .route(
            "/api/knowledge-base",
            get(routes::knowledge_base_list_handler).post(routes::knowledge_base_create_handler),
        )
        .route(
            "/api/knowledge-base/upload",
            post(routes::knowledge_base_upload_handler)
                .layer(DefaultBodyLimit::max(routes::knowledge_base::UPLOAD_BODY_LIMIT)),
        )
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}
