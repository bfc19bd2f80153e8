// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::Json;

use crate::messages::HealthResponse;

/// HTTP handler for `GET /health`. Always healthy: the agent keeps no state
/// that could go bad.
pub async fn health_http() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
