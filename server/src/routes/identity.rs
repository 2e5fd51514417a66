//! Identity endpoint route.

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::handlers::{handle_generate, IdentityResponse};
use crate::AppState;

/// Create identity routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/owner", post(generate_handler))
}

/// POST /owner - Mint a new owner identifier.
async fn generate_handler(State(state): State<AppState>) -> Result<Json<IdentityResponse>> {
    let response = handle_generate(&state.pool).await?;
    Ok(Json(response))
}
