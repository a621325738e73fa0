use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub charged_words: usize,
    pub sanitizers: Vec<String>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let analyzer = &state.analyzer;
    let sanitizers: Vec<String> = analyzer
        .sanitizers()
        .registered_hosts()
        .into_iter()
        .map(str::to_string)
        .collect();

    debug!(sanitizers = sanitizers.len(), "health check");
    Json(HealthResponse {
        status: "OK".to_string(),
        charged_words: analyzer.charged_words().len(),
        sanitizers,
    })
}
