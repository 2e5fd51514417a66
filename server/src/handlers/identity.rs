//! Identity handler - mints new owner identifiers.

use crate::db;
use crate::error::Result;
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Response for identity issuance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    /// The freshly minted opaque owner identifier.
    pub owner: String,
}

/// Mint a new owner identifier and create its row.
///
/// If the insert fails the identifier is discarded and the request fails;
/// handing out an id that storage never recorded would leave the client
/// with an owner the server does not know.
pub async fn handle_generate(pool: &SqlitePool) -> Result<IdentityResponse> {
    let owner = Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp();

    db::insert_owner(pool, &owner, now).await?;
    tracing::info!(%owner, "minted new owner");

    Ok(IdentityResponse { owner })
}
