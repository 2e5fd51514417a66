//! Sync endpoint route.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::handlers::{handle_sync, SyncRequest, SyncResponse};
use crate::AppState;

/// Create sync routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sync", post(sync_handler))
}

/// POST /sync - Reconcile a client snapshot with the stored shelf.
async fn sync_handler(
    State(state): State<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<Json<SyncResponse>> {
    let response = handle_sync(&state.pool, request).await?;
    Ok(Json(response))
}
