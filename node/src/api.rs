//! # REST API
//!
//! Builds the axum router that exposes the node's HTTP interface.
//! All endpoints share application state through axum's `State` extractor.
//!
//! ## Endpoints
//!
//! | Method | Path          | Description                               |
//! |--------|---------------|-------------------------------------------|
//! | GET    | `/health`     | Liveness probe                            |
//! | GET    | `/status`     | Node status summary                       |
//! | POST   | `/users`      | Register a user's shares                  |
//! | GET    | `/users/:id`  | Public record of a registered user        |

use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use dkms_protocol::{
    register, Group, KeyRegisterRequest, KeyRegisterResponse, NodeInfo, PolyCommitData,
    RegistrationError, Repository, RepositoryError, Ristretto255,
};

use crate::metrics::SharedMetrics;

// ---------------------------------------------------------------------------
// Application State
// ---------------------------------------------------------------------------

/// Shared application state available to all request handlers.
///
/// Cheap to clone, everything behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The node's reported version string.
    pub version: String,
    /// Group all shares live in.
    pub group: Ristretto255,
    /// Registered users.
    pub repository: Arc<dyn Repository<Ristretto255>>,
    /// Prometheus metrics for in-handler recording.
    pub metrics: SharedMetrics,
}

// ---------------------------------------------------------------------------
// Router Construction
// ---------------------------------------------------------------------------

/// Builds the full axum [`Router`] with all API routes, CORS, and tracing.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .route("/users", post(register_handler))
        .route("/users/:id", get(user_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Response Types
// ---------------------------------------------------------------------------

/// Response payload for `GET /status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Node software version.
    pub version: String,
    /// Protocol version.
    pub protocol_version: String,
    /// Group the node's shares live in.
    pub group: String,
    /// Number of registered users.
    pub registered_users: usize,
    /// ISO-8601 timestamp of the response.
    pub timestamp: String,
}

/// Response payload for `GET /users/:id`.
///
/// Only public data: the share values never leave the node.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    /// User identifier.
    pub user_id: String,
    /// X threshold.
    pub t: usize,
    /// Y threshold.
    pub u: usize,
    /// This node's x coordinate.
    pub x: i64,
    /// This node's y coordinate.
    pub y: i64,
    /// The dealer's commitment.
    pub commit: PolyCommitData,
    /// Nodes holding shares for this user.
    pub nodes: Vec<NodeInfo>,
    /// ISO-8601 registration time.
    pub registered_at: String,
}

/// Generic error body returned by REST endpoints on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl ToString) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

fn registration_status(err: &RegistrationError) -> StatusCode {
    match err {
        RegistrationError::Repository(RepositoryError::AlreadyExists(_)) => StatusCode::CONFLICT,
        RegistrationError::InvalidRequest(_)
        | RegistrationError::ThresholdOutOfRange { .. }
        | RegistrationError::CommitmentShape { .. }
        | RegistrationError::CommitmentMismatch { .. }
        | RegistrationError::Codec(_)
        | RegistrationError::Share(_) => StatusCode::BAD_REQUEST,
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /health` — returns 200 if the node is alive.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// `GET /status` — returns node status summary.
async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(StatusResponse {
        version: state.version.clone(),
        protocol_version: dkms_protocol::config::PROTOCOL_VERSION.to_string(),
        group: state.group.name(),
        registered_users: state.repository.len(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// `POST /users` — verify, reconstruct and store a user's shares.
///
/// Returns 201 with the echoed commitment on success, 400 for any request
/// that fails validation or verification, 409 if the user already exists.
async fn register_handler(
    State(state): State<AppState>,
    Json(req): Json<KeyRegisterRequest>,
) -> Response {
    let timer = state.metrics.registration_latency_seconds.start_timer();
    let result: Result<KeyRegisterResponse, RegistrationError> =
        register(&state.group, state.repository.as_ref(), &req);
    timer.observe_duration();

    match result {
        Ok(resp) => {
            state.metrics.registrations_total.inc();
            state
                .metrics
                .registered_users
                .set(state.repository.len() as i64);
            (StatusCode::CREATED, Json(resp)).into_response()
        }
        Err(e) => {
            state.metrics.registration_failures_total.inc();
            let status = registration_status(&e);
            tracing::warn!(user_id = %req.user_id, %status, error = %e, "registration refused");
            error_response(status, e)
        }
    }
}

/// `GET /users/:id` — public record of a registered user.
async fn user_handler(Path(id): Path<String>, State(state): State<AppState>) -> Response {
    match state.repository.find(&id) {
        Some(user) => Json(UserResponse {
            user_id: user.id,
            t: user.my_x_poly.t(),
            u: user.my_y_poly.u(),
            x: user.my_y_poly.x(),
            y: user.my_x_poly.y(),
            commit: user.poly_commit.marshal(),
            nodes: user.nodes,
            registered_at: user.registered_at.to_rfc3339(),
        })
        .into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("user not found: {id}")),
    }
}
