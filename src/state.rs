use sqlx::SqlitePool;

/// Search defaults resolved from config at startup
///
/// The server filter used to be a literal baked into the search controller;
/// it now comes from `config.json` and may be overridden per request.
#[derive(Debug, Clone)]
pub struct SearchDefaults {
    pub server_filter: String,
    pub page_size: u32,
}

/// Shared application state
pub struct AppState {
    pub db: SqlitePool,
    pub search: SearchDefaults,
}
