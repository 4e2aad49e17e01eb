//! Database initialization and schema
//!
//! The database is created automatically on first run (zero-config startup).
//! Schema creation is idempotent. Cross-collection references are plain TEXT
//! columns without FOREIGN KEY clauses: deleting an artist does not touch its
//! artworks, and orphaned references are an accepted condition.

use std::path::Path;

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::Result;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL mode allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all collection tables (idempotent; also used by tests against
/// `sqlite::memory:` pools)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_artists_table(pool).await?;
    create_artworks_table(pool).await?;
    create_art_movements_table(pool).await?;
    create_timeline_nodes_table(pool).await?;
    Ok(())
}

async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            birth_year INTEGER,
            death_year INTEGER,
            nationality TEXT,
            biography TEXT,
            art_movement TEXT,
            notable_works TEXT NOT NULL DEFAULT '[]',
            portrait_url TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artists_name ON artists(name)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artists_nationality ON artists(nationality)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_artworks_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artworks (
            guid TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            artist_id TEXT NOT NULL,
            year INTEGER,
            medium TEXT,
            dimensions TEXT,
            location TEXT,
            description TEXT,
            image_url TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artworks_title ON artworks(title)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_artworks_artist ON artworks(artist_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_art_movements_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS art_movements (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            start_year INTEGER,
            end_year INTEGER,
            description TEXT,
            key_artists TEXT NOT NULL DEFAULT '[]',
            characteristics TEXT NOT NULL DEFAULT '[]',
            influences TEXT NOT NULL DEFAULT '[]',
            influenced_by TEXT NOT NULL DEFAULT '[]',
            position_x REAL NOT NULL DEFAULT 0,
            position_y REAL NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movements_name ON art_movements(name)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_movements_years ON art_movements(start_year, end_year)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_timeline_nodes_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS timeline_nodes (
            guid TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            year INTEGER NOT NULL,
            tags TEXT NOT NULL DEFAULT '[]',
            position_x REAL NOT NULL DEFAULT 0,
            position_y REAL NOT NULL DEFAULT 0,
            artist_id TEXT,
            movement_id TEXT,
            image_url TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_timeline_year ON timeline_nodes(year)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        create_schema(&pool).await.expect("First schema creation failed");
        create_schema(&pool).await.expect("Second schema creation failed");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("Failed to list tables");

        for expected in ["art_movements", "artists", "artworks", "timeline_nodes"] {
            assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
        }
    }

    #[tokio::test]
    async fn test_init_database_creates_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let db_path = tmp.path().join("artism.db");

        let pool = init_database(&db_path).await.expect("init failed");
        assert!(db_path.exists());

        // Reopening an existing database must also succeed
        drop(pool);
        init_database(&db_path).await.expect("reopen failed");
    }
}
