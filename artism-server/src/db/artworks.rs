//! Artwork database operations
//!
//! artist_id is stored as an opaque reference; no existence check and no
//! cascade when the referenced artist is deleted.

use artism_common::models::Artwork;
use artism_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn artwork_from_row(row: &SqliteRow) -> Result<Artwork> {
    let guid_str: String = row.get("guid");
    let artist_id: String = row.get("artist_id");

    Ok(Artwork {
        guid: Uuid::parse_str(&guid_str)
            .map_err(|e| artism_common::Error::Internal(format!("Bad guid in artworks: {}", e)))?,
        title: row.get("title"),
        artist_id: Uuid::parse_str(&artist_id).map_err(|e| {
            artism_common::Error::Internal(format!("Bad artist_id in artworks: {}", e))
        })?,
        year: row.get("year"),
        medium: row.get("medium"),
        dimensions: row.get("dimensions"),
        location: row.get("location"),
        description: row.get("description"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Insert a new artwork
pub async fn insert_artwork(pool: &SqlitePool, artwork: &Artwork) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO artworks (
            guid, title, artist_id, year, medium, dimensions, location,
            description, image_url, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(artwork.guid.to_string())
    .bind(&artwork.title)
    .bind(artwork.artist_id.to_string())
    .bind(artwork.year)
    .bind(&artwork.medium)
    .bind(&artwork.dimensions)
    .bind(&artwork.location)
    .bind(&artwork.description)
    .bind(&artwork.image_url)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load artwork by id
pub async fn get_artwork(pool: &SqlitePool, id: Uuid) -> Result<Option<Artwork>> {
    let row = sqlx::query("SELECT * FROM artworks WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(artwork_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Load all artworks ordered by title
pub async fn list_artworks(pool: &SqlitePool) -> Result<Vec<Artwork>> {
    let rows = sqlx::query("SELECT * FROM artworks ORDER BY title ASC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(artwork_from_row).collect()
}

/// Load all artworks referencing the given artist, ordered by year
pub async fn list_artworks_by_artist(pool: &SqlitePool, artist_id: Uuid) -> Result<Vec<Artwork>> {
    let rows = sqlx::query("SELECT * FROM artworks WHERE artist_id = ? ORDER BY year ASC")
        .bind(artist_id.to_string())
        .fetch_all(pool)
        .await?;

    rows.iter().map(artwork_from_row).collect()
}

/// Persist the full document (used after a shallow merge)
pub async fn update_artwork(pool: &SqlitePool, artwork: &Artwork) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE artworks SET
            title = ?, artist_id = ?, year = ?, medium = ?, dimensions = ?,
            location = ?, description = ?, image_url = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&artwork.title)
    .bind(artwork.artist_id.to_string())
    .bind(artwork.year)
    .bind(&artwork.medium)
    .bind(&artwork.dimensions)
    .bind(&artwork.location)
    .bind(&artwork.description)
    .bind(&artwork.image_url)
    .bind(artwork.guid.to_string())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete by id; returns false when no row matched
pub async fn delete_artwork(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artworks WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
