//! Search endpoints - the web face of the locator.
//!
//! `/api/search` is the wildcard mode the search form uses; the server
//! filter defaults from config and may be overridden per request.
//! `/api/search/fulltext` is the ranked boolean-mode text search. The two
//! modes are intentionally separate operations.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::AppState;
use smbsearch_backend::locator;
use smbsearch_backend::models::MssFile;

use super::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    /// Server-name filter; falls back to the configured default
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub offset: i64,
    /// Page size; falls back to the configured default
    #[serde(default)]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<MssFile>,
    pub total: usize,
}

/// POST /api/search - wildcard name + server search
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> Json<ApiResponse<SearchResponse>> {
    let server = req
        .server
        .unwrap_or_else(|| state.search.server_filter.clone());
    let limit = req.limit.unwrap_or(state.search.page_size) as i64;
    let offset = req.offset.max(0);

    tracing::debug!("search: query={:?} server={:?}", req.query, server);

    match locator::find_files_by_name_and_server(&state.db, &req.query, &server, offset, limit).await
    {
        Ok(results) => {
            let total = results.len();
            Json(ApiResponse::success(SearchResponse { results, total }))
        }
        Err(e) => {
            tracing::warn!("Search failed: {}", e);
            Json(ApiResponse::error("search failed"))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FulltextSearchRequest {
    pub query: String,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// POST /api/search/fulltext - ranked boolean-mode full-text search
pub async fn search_fulltext(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FulltextSearchRequest>,
) -> Json<ApiResponse<SearchResponse>> {
    let query = req.query.trim();
    if query.is_empty() {
        // An empty MATCH pattern is a syntax error in the engine, not
        // a match-everything query
        return Json(ApiResponse::error("search query must not be empty"));
    }

    let limit = req.limit.unwrap_or(state.search.page_size) as i64;
    let offset = req.offset.max(0);

    match locator::find_files_by_name(&state.db, query, offset, limit).await {
        Ok(results) => {
            let total = results.len();
            Json(ApiResponse::success(SearchResponse { results, total }))
        }
        Err(e) => {
            tracing::warn!("Full-text search failed: {}", e);
            Json(ApiResponse::error("search failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SearchDefaults;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_state() -> Arc<AppState> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        smbsearch_backend::db::run_migrations(&pool).await.unwrap();

        // 12 budget files on natalie, one on boris, one unrelated
        for i in 0..12 {
            sqlx::query(
                "INSERT INTO mss_files (file_path, name, server_name) VALUES (?, ?, 'natalie')",
            )
            .bind(format!("//natalie/share/budget_{i}.xls"))
            .bind(format!("budget_{i}.xls"))
            .execute(&pool)
            .await
            .unwrap();
        }
        sqlx::query(
            "INSERT INTO mss_files (file_path, name, server_name) VALUES ('//boris/budget.xls', 'budget.xls', 'boris')",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO mss_files (file_path, name, server_name) VALUES ('//natalie/readme.txt', 'readme.txt', 'natalie')",
        )
        .execute(&pool)
        .await
        .unwrap();

        Arc::new(AppState {
            db: pool,
            search: SearchDefaults {
                server_filter: "natalie".to_string(),
                page_size: 10,
            },
        })
    }

    #[tokio::test]
    async fn test_search_uses_configured_defaults() {
        let state = test_state().await;

        let Json(resp) = search(
            State(state),
            Json(SearchRequest {
                query: "budget".to_string(),
                server: None,
                offset: 0,
                limit: None,
            }),
        )
        .await;

        assert!(resp.success);
        let data = resp.data.unwrap();
        // 12 matches on natalie, capped at the default page of 10
        assert_eq!(data.results.len(), 10);
        for file in &data.results {
            assert!(file.name.contains("budget"));
            assert!(file.server_name.contains("natalie"));
        }
    }

    #[tokio::test]
    async fn test_search_server_override() {
        let state = test_state().await;

        let Json(resp) = search(
            State(state),
            Json(SearchRequest {
                query: "budget".to_string(),
                server: Some("boris".to_string()),
                offset: 0,
                limit: None,
            }),
        )
        .await;

        let data = resp.data.unwrap();
        assert_eq!(data.results.len(), 1);
        assert_eq!(data.results[0].server_name, "boris");
    }

    #[tokio::test]
    async fn test_search_zero_matches_is_success() {
        let state = test_state().await;

        let Json(resp) = search(
            State(state),
            Json(SearchRequest {
                query: "nothing-matches-this".to_string(),
                server: None,
                offset: 0,
                limit: None,
            }),
        )
        .await;

        assert!(resp.success);
        assert!(resp.data.unwrap().results.is_empty());
    }

    #[tokio::test]
    async fn test_fulltext_rejects_empty_query() {
        let state = test_state().await;

        let Json(resp) = search_fulltext(
            State(state),
            Json(FulltextSearchRequest {
                query: "   ".to_string(),
                offset: 0,
                limit: None,
            }),
        )
        .await;

        assert!(!resp.success);
        assert!(resp.error.is_some());
    }
}
