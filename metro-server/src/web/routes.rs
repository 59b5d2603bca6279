//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::network::NodeId;
use crate::planner::{SearchConfig, SearchEngine, rank_routes};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network))
        .route("/routes/plan", post(plan_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Node inventory, so clients can resolve station/line pairs to node ids.
async fn network(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_graph(&state.graph))
}

/// Plan routes between origin and destination node sets.
async fn plan_routes(
    State(state): State<AppState>,
    Json(req): Json<PlanRoutesRequest>,
) -> Result<Json<PlanRoutesResponse>, AppError> {
    if req.origins.is_empty() {
        return Err(AppError::BadRequest {
            message: "origins must not be empty".to_string(),
        });
    }
    for &id in req.origins.iter().chain(&req.destinations) {
        if !state.graph.contains(NodeId(id)) {
            return Err(AppError::BadRequest {
                message: format!("unknown node id: {id}"),
            });
        }
    }

    let origins: Vec<NodeId> = req.origins.iter().map(|&id| NodeId(id)).collect();
    let destinations: Vec<NodeId> = req.destinations.iter().map(|&id| NodeId(id)).collect();
    let config = SearchConfig {
        dial: req.dial.unwrap_or(state.config.dial),
        record_explored: req.include_explored,
        ..(*state.config).clone()
    };

    // The search is CPU-bound and synchronous; keep it off the async
    // workers.
    let graph = state.graph.clone();
    let affluence = state.affluence.clone();
    let result = tokio::task::spawn_blocking(move || {
        let engine = SearchEngine::new(&graph, &affluence, &config);
        let outcome = engine.search(&origins, &destinations)?;
        let summaries = rank_routes(&graph, outcome.routes);
        Ok::<_, crate::planner::SearchError>((summaries, outcome.iterations, outcome.explored))
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("search task failed: {e}"),
    })?;

    let (summaries, iterations, explored) = result.map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    tracing::info!(
        routes = summaries.len(),
        iterations,
        "route planning finished"
    );

    Ok(Json(PlanRoutesResponse {
        routes: summaries.iter().map(RouteResult::from_summary).collect(),
        iterations,
        explored: explored.map(|trace| trace.iter().map(ExploredResult::from_explored).collect()),
    }))
}

/// Application-level error that converts to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
