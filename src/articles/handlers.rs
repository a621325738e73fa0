use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    app_state::AppState,
    articles::dtos::{ArticlesQuery, ErrorResponse},
    health::health_check,
};

/// `GET /?urls=a,b,c`: analyzes the articles and returns one record each.
pub async fn analyze_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticlesQuery>,
) -> Response {
    let urls = match query.validate(state.url_limit) {
        Ok(urls) => urls,
        Err(error) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    info!(count = urls.len(), "analyzing articles");
    let results = state.analyzer.run(urls).await;

    (StatusCode::OK, Json(results)).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(analyze_articles))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
