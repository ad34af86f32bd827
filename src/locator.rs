//! Locator - the query layer over the crawler-populated schema.
//!
//! Translates search parameters into bounded, paginated result sets.
//! Two search modes exist on purpose and are not merged:
//! - ranked: boolean-mode full-text MATCH against `full_text_search`,
//!   best match first
//! - wildcard: parameterized `%...%` LIKE over `name` / `server_name`,
//!   database default order
//!
//! "No rows found" is an empty result, never an error. Every call borrows a
//! pooled connection only for its own duration; nothing is held across calls.

use sqlx::SqlitePool;

use crate::models::{FileParameter, MssFile};

/// Query-layer failure. Zero matches is not a failure.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Find one file by id. Unknown ids yield `None`.
pub async fn find_file_by_id(pool: &SqlitePool, id: i64) -> Result<Option<MssFile>, LocatorError> {
    let file = sqlx::query_as::<_, MssFile>(
        "SELECT id, file_path, last_seen, name, server_name FROM mss_files WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(file)
}

/// Plain browsing window over all files, natural order
pub async fn find_files_in_range(
    pool: &SqlitePool,
    offset: i64,
    limit: i64,
) -> Result<Vec<MssFile>, LocatorError> {
    let files = sqlx::query_as::<_, MssFile>(
        "SELECT id, file_path, last_seen, name, server_name FROM mss_files LIMIT ? OFFSET ?",
    )
    .bind(limit.max(0))
    .bind(offset.max(0))
    .fetch_all(pool)
    .await?;

    Ok(files)
}

/// Ranked full-text search over the indexed text blobs.
///
/// `query` uses the engine's boolean mode (terms, AND/OR/NOT, phrases) and
/// is bound as a parameter, never spliced into the SQL. Results come back
/// best match first; tie order is the engine's and callers must not depend
/// on it. An empty or syntactically broken query is a database error here,
/// the HTTP layer rejects empty queries before calling in.
pub async fn find_files_by_name(
    pool: &SqlitePool,
    query: &str,
    offset: i64,
    limit: i64,
) -> Result<Vec<MssFile>, LocatorError> {
    tracing::debug!("full-text search: {}", query);

    let files = sqlx::query_as::<_, MssFile>(
        r#"
        SELECT files.id, files.file_path, files.last_seen, files.name, files.server_name
        FROM mss_files files
        INNER JOIN full_text_search search ON search.rowid = files.id
        WHERE search.full_text_search MATCH ?
        ORDER BY search.rank
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(query)
    .bind(limit.max(0))
    .bind(offset.max(0))
    .fetch_all(pool)
    .await?;

    Ok(files)
}

/// Wildcard search: `name` contains `name_contains` AND `server_name`
/// contains `server_contains`. Empty filters match everything. No ranking.
pub async fn find_files_by_name_and_server(
    pool: &SqlitePool,
    name_contains: &str,
    server_contains: &str,
    offset: i64,
    limit: i64,
) -> Result<Vec<MssFile>, LocatorError> {
    let files = sqlx::query_as::<_, MssFile>(
        r#"
        SELECT id, file_path, last_seen, name, server_name
        FROM mss_files
        WHERE name LIKE ? AND server_name LIKE ?
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(format!("%{}%", name_contains))
    .bind(format!("%{}%", server_contains))
    .bind(limit.max(0))
    .bind(offset.max(0))
    .fetch_all(pool)
    .await?;

    Ok(files)
}

/// Wildcard search by originating server alone
pub async fn find_files_by_server(
    pool: &SqlitePool,
    server_contains: &str,
    offset: i64,
    limit: i64,
) -> Result<Vec<MssFile>, LocatorError> {
    let files = sqlx::query_as::<_, MssFile>(
        r#"
        SELECT id, file_path, last_seen, name, server_name
        FROM mss_files
        WHERE server_name LIKE ?
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(format!("%{}%", server_contains))
    .bind(limit.max(0))
    .bind(offset.max(0))
    .fetch_all(pool)
    .await?;

    Ok(files)
}

/// All metadata facts for one file, joined with their attribute definitions.
/// Unknown file ids yield an empty list.
pub async fn find_parameters_for_file(
    pool: &SqlitePool,
    file_id: i64,
) -> Result<Vec<FileParameter>, LocatorError> {
    let parameters = sqlx::query_as::<_, FileParameter>(
        r#"
        SELECT p.attr_id, a.name AS attr_name, a.type AS attr_type,
               p.bool_value, p.num_value, p.str_value
        FROM mss_parameters p
        INNER JOIN mss_attributes a ON a.id = p.attr_id
        WHERE p.file_id = ?
        ORDER BY a.name
        "#,
    )
    .bind(file_id)
    .fetch_all(pool)
    .await?;

    Ok(parameters)
}
