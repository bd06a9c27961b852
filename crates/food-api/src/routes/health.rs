//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// GET / — confirms the backend is up.
///
/// Ignores all request input and always succeeds. The message text is a
/// published constant that clients match on.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Backend if running!",
    }))
}
