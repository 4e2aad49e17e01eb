//! Timeline node database operations

use artism_common::models::TimelineNode;
use artism_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn parse_optional_uuid(value: Option<String>, column: &str) -> Result<Option<Uuid>> {
    match value {
        Some(s) => Uuid::parse_str(&s)
            .map(Some)
            .map_err(|e| artism_common::Error::Internal(format!("Bad {} in timeline_nodes: {}", column, e))),
        None => Ok(None),
    }
}

fn node_from_row(row: &SqliteRow) -> Result<TimelineNode> {
    let guid_str: String = row.get("guid");
    let tags: String = row.get("tags");

    Ok(TimelineNode {
        guid: Uuid::parse_str(&guid_str).map_err(|e| {
            artism_common::Error::Internal(format!("Bad guid in timeline_nodes: {}", e))
        })?,
        title: row.get("title"),
        description: row.get("description"),
        year: row.get("year"),
        tags: serde_json::from_str(&tags)?,
        position_x: row.get("position_x"),
        position_y: row.get("position_y"),
        artist_id: parse_optional_uuid(row.get("artist_id"), "artist_id")?,
        movement_id: parse_optional_uuid(row.get("movement_id"), "movement_id")?,
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Insert a new timeline node
pub async fn insert_node(pool: &SqlitePool, node: &TimelineNode) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO timeline_nodes (
            guid, title, description, year, tags, position_x, position_y,
            artist_id, movement_id, image_url, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(node.guid.to_string())
    .bind(&node.title)
    .bind(&node.description)
    .bind(node.year)
    .bind(serde_json::to_string(&node.tags)?)
    .bind(node.position_x)
    .bind(node.position_y)
    .bind(node.artist_id.map(|id| id.to_string()))
    .bind(node.movement_id.map(|id| id.to_string()))
    .bind(&node.image_url)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load node by id
pub async fn get_node(pool: &SqlitePool, id: Uuid) -> Result<Option<TimelineNode>> {
    let row = sqlx::query("SELECT * FROM timeline_nodes WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(node_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Load all nodes in chronological order
pub async fn list_nodes(pool: &SqlitePool) -> Result<Vec<TimelineNode>> {
    let rows = sqlx::query("SELECT * FROM timeline_nodes ORDER BY year ASC, title ASC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(node_from_row).collect()
}

/// Persist the full document (used after a shallow merge)
pub async fn update_node(pool: &SqlitePool, node: &TimelineNode) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE timeline_nodes SET
            title = ?, description = ?, year = ?, tags = ?, position_x = ?,
            position_y = ?, artist_id = ?, movement_id = ?, image_url = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&node.title)
    .bind(&node.description)
    .bind(node.year)
    .bind(serde_json::to_string(&node.tags)?)
    .bind(node.position_x)
    .bind(node.position_y)
    .bind(node.artist_id.map(|id| id.to_string()))
    .bind(node.movement_id.map(|id| id.to_string()))
    .bind(&node.image_url)
    .bind(node.guid.to_string())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete by id; returns false when no row matched
pub async fn delete_node(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM timeline_nodes WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use artism_common::models::NewTimelineNode;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        artism_common::db::create_schema(&pool)
            .await
            .expect("Schema initialization failed");
        pool
    }

    fn node(title: &str, year: i64) -> TimelineNode {
        TimelineNode::from_new(NewTimelineNode {
            title: title.to_string(),
            description: None,
            year,
            tags: vec!["painting".to_string()],
            position_x: 10.0,
            position_y: -4.5,
            artist_id: Some(Uuid::new_v4()),
            movement_id: None,
            image_url: None,
        })
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let pool = test_pool().await;
        let subject = node("First Impressionist exhibition", 1874);

        insert_node(&pool, &subject).await.expect("insert");

        let loaded = get_node(&pool, subject.guid)
            .await
            .expect("get")
            .expect("not found");
        assert_eq!(loaded.title, "First Impressionist exhibition");
        assert_eq!(loaded.year, 1874);
        assert_eq!(loaded.tags, vec!["painting".to_string()]);
        assert_eq!(loaded.artist_id, subject.artist_id);
        assert_eq!(loaded.movement_id, None);
    }

    #[tokio::test]
    async fn test_list_is_chronological() {
        let pool = test_pool().await;
        insert_node(&pool, &node("Fountain", 1917)).await.expect("insert");
        insert_node(&pool, &node("Les Demoiselles d'Avignon", 1907))
            .await
            .expect("insert");

        let years: Vec<i64> = list_nodes(&pool)
            .await
            .expect("list")
            .into_iter()
            .map(|n| n.year)
            .collect();
        assert_eq!(years, vec![1907, 1917]);
    }
}
