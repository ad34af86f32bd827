use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;
use smbsearch_backend::locator;
use smbsearch_backend::models::{FileParameter, MssFile};

use super::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct BrowseParams {
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_browse_limit")]
    pub limit: i64,
}

fn default_browse_limit() -> i64 {
    50
}

#[derive(Debug, Serialize)]
pub struct BrowseResponse {
    pub files: Vec<MssFile>,
    pub total: usize,
}

/// GET /api/files - browse all files, paginated, natural order
pub async fn browse_files(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> Json<ApiResponse<BrowseResponse>> {
    match locator::find_files_in_range(&state.db, params.offset, params.limit).await {
        Ok(files) => {
            let total = files.len();
            Json(ApiResponse::success(BrowseResponse { files, total }))
        }
        Err(e) => {
            tracing::warn!("Browse failed: {}", e);
            Json(ApiResponse::error("failed to list files"))
        }
    }
}

/// GET /api/files/:id - single file record
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Json<ApiResponse<MssFile>> {
    match locator::find_file_by_id(&state.db, id).await {
        Ok(Some(file)) => Json(ApiResponse::success(file)),
        Ok(None) => Json(ApiResponse::error("file not found")),
        Err(e) => {
            tracing::warn!("File lookup failed: {}", e);
            Json(ApiResponse::error("failed to load file"))
        }
    }
}

/// GET /api/files/:id/parameters - metadata facts for one file
pub async fn get_file_parameters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Json<ApiResponse<Vec<FileParameter>>> {
    match locator::find_parameters_for_file(&state.db, id).await {
        Ok(parameters) => Json(ApiResponse::success(parameters)),
        Err(e) => {
            tracing::warn!("Parameter lookup failed: {}", e);
            Json(ApiResponse::error("failed to load parameters"))
        }
    }
}
