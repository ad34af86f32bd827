use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health - liveness probe
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "smbsearch running",
        "build_time": env!("BUILD_TIME"),
        "time": Utc::now().to_rfc3339(),
    }))
}
