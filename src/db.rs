use anyhow::Result;
use sqlx::SqlitePool;

/// Run database migrations
///
/// The schema is owned by the crawler; running the migrations here keeps a
/// fresh deployment usable before the first crawl has happened. Everything
/// is `IF NOT EXISTS`, so running against a populated database is a no-op.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    // WAL mode, the crawler writes while we read
    sqlx::query("PRAGMA journal_mode=WAL").execute(pool).await?;
    sqlx::query("PRAGMA busy_timeout=10000").execute(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mss_files (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            file_path TEXT NOT NULL,
            last_seen TEXT,
            name TEXT NOT NULL,
            server_name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mss_attributes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS mss_parameters (
            attr_id INTEGER NOT NULL,
            file_id INTEGER NOT NULL,
            bool_value INTEGER,
            num_value INTEGER,
            str_value TEXT,
            PRIMARY KEY (attr_id, file_id),
            FOREIGN KEY (attr_id) REFERENCES mss_attributes(id) ON DELETE CASCADE,
            FOREIGN KEY (file_id) REFERENCES mss_files(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Ranked name search; rowid equals mss_files.id
    sqlx::query(
        r#"
        CREATE VIRTUAL TABLE IF NOT EXISTS full_text_search USING fts5(text)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_mss_files_name ON mss_files(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_mss_files_server_name ON mss_files(server_name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_mss_parameters_file_id ON mss_parameters(file_id)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations complete");

    Ok(())
}
