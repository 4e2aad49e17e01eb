//! Art movement database operations

use artism_common::models::ArtMovement;
use artism_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn movement_from_row(row: &SqliteRow) -> Result<ArtMovement> {
    let guid_str: String = row.get("guid");
    let key_artists: String = row.get("key_artists");
    let characteristics: String = row.get("characteristics");
    let influences: String = row.get("influences");
    let influenced_by: String = row.get("influenced_by");

    Ok(ArtMovement {
        guid: Uuid::parse_str(&guid_str).map_err(|e| {
            artism_common::Error::Internal(format!("Bad guid in art_movements: {}", e))
        })?,
        name: row.get("name"),
        start_year: row.get("start_year"),
        end_year: row.get("end_year"),
        description: row.get("description"),
        key_artists: serde_json::from_str(&key_artists)?,
        characteristics: serde_json::from_str(&characteristics)?,
        influences: serde_json::from_str(&influences)?,
        influenced_by: serde_json::from_str(&influenced_by)?,
        position_x: row.get("position_x"),
        position_y: row.get("position_y"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Insert a new art movement
pub async fn insert_movement(pool: &SqlitePool, movement: &ArtMovement) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO art_movements (
            guid, name, start_year, end_year, description, key_artists,
            characteristics, influences, influenced_by, position_x, position_y,
            created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(movement.guid.to_string())
    .bind(&movement.name)
    .bind(movement.start_year)
    .bind(movement.end_year)
    .bind(&movement.description)
    .bind(serde_json::to_string(&movement.key_artists)?)
    .bind(serde_json::to_string(&movement.characteristics)?)
    .bind(serde_json::to_string(&movement.influences)?)
    .bind(serde_json::to_string(&movement.influenced_by)?)
    .bind(movement.position_x)
    .bind(movement.position_y)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load movement by id
pub async fn get_movement(pool: &SqlitePool, id: Uuid) -> Result<Option<ArtMovement>> {
    let row = sqlx::query("SELECT * FROM art_movements WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(movement_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Load all movements ordered by start year, then name
pub async fn list_movements(pool: &SqlitePool) -> Result<Vec<ArtMovement>> {
    let rows = sqlx::query("SELECT * FROM art_movements ORDER BY start_year ASC, name ASC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(movement_from_row).collect()
}

/// Persist the full document (used after a shallow merge)
pub async fn update_movement(pool: &SqlitePool, movement: &ArtMovement) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE art_movements SET
            name = ?, start_year = ?, end_year = ?, description = ?,
            key_artists = ?, characteristics = ?, influences = ?, influenced_by = ?,
            position_x = ?, position_y = ?, updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&movement.name)
    .bind(movement.start_year)
    .bind(movement.end_year)
    .bind(&movement.description)
    .bind(serde_json::to_string(&movement.key_artists)?)
    .bind(serde_json::to_string(&movement.characteristics)?)
    .bind(serde_json::to_string(&movement.influences)?)
    .bind(serde_json::to_string(&movement.influenced_by)?)
    .bind(movement.position_x)
    .bind(movement.position_y)
    .bind(movement.guid.to_string())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete by id; returns false when no row matched
pub async fn delete_movement(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM art_movements WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
