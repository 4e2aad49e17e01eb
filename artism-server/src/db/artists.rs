//! Artist database operations

use artism_common::models::Artist;
use artism_common::Result;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let guid_str: String = row.get("guid");
    let notable_works: String = row.get("notable_works");

    Ok(Artist {
        guid: Uuid::parse_str(&guid_str)
            .map_err(|e| artism_common::Error::Internal(format!("Bad guid in artists: {}", e)))?,
        name: row.get("name"),
        birth_year: row.get("birth_year"),
        death_year: row.get("death_year"),
        nationality: row.get("nationality"),
        biography: row.get("biography"),
        art_movement: row.get("art_movement"),
        notable_works: serde_json::from_str(&notable_works)?,
        portrait_url: row.get("portrait_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// Insert a new artist
pub async fn insert_artist(pool: &SqlitePool, artist: &Artist) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO artists (
            guid, name, birth_year, death_year, nationality, biography,
            art_movement, notable_works, portrait_url, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(artist.guid.to_string())
    .bind(&artist.name)
    .bind(artist.birth_year)
    .bind(artist.death_year)
    .bind(&artist.nationality)
    .bind(&artist.biography)
    .bind(&artist.art_movement)
    .bind(serde_json::to_string(&artist.notable_works)?)
    .bind(&artist.portrait_url)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, id: Uuid) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT * FROM artists WHERE guid = ?")
        .bind(id.to_string())
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(artist_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Load all artists ordered by name
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query("SELECT * FROM artists ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    rows.iter().map(artist_from_row).collect()
}

/// Persist the full document (used after a shallow merge)
pub async fn update_artist(pool: &SqlitePool, artist: &Artist) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, birth_year = ?, death_year = ?, nationality = ?,
            biography = ?, art_movement = ?, notable_works = ?, portrait_url = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&artist.name)
    .bind(artist.birth_year)
    .bind(artist.death_year)
    .bind(&artist.nationality)
    .bind(&artist.biography)
    .bind(&artist.art_movement)
    .bind(serde_json::to_string(&artist.notable_works)?)
    .bind(&artist.portrait_url)
    .bind(artist.guid.to_string())
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete by id; returns false when no row matched
pub async fn delete_artist(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artists WHERE guid = ?")
        .bind(id.to_string())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use artism_common::models::NewArtist;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");
        artism_common::db::create_schema(&pool)
            .await
            .expect("Schema initialization failed");
        pool
    }

    fn test_artist() -> Artist {
        Artist::from_new(NewArtist {
            name: "Test Artist".to_string(),
            birth_year: Some(1900),
            death_year: None,
            nationality: Some("Dutch".to_string()),
            biography: None,
            art_movement: Some("Impressionism".to_string()),
            notable_works: vec!["Work A".to_string(), "Work B".to_string()],
            portrait_url: None,
        })
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let pool = test_pool().await;
        let artist = test_artist();

        insert_artist(&pool, &artist).await.expect("Failed to insert");

        let loaded = get_artist(&pool, artist.guid)
            .await
            .expect("Failed to load")
            .expect("Artist not found");

        assert_eq!(loaded.guid, artist.guid);
        assert_eq!(loaded.name, "Test Artist");
        assert_eq!(loaded.birth_year, Some(1900));
        assert_eq!(loaded.notable_works, artist.notable_works);
        assert!(loaded.created_at.is_some());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let pool = test_pool().await;
        let loaded = get_artist(&pool, Uuid::new_v4()).await.expect("query failed");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let pool = test_pool().await;
        let artist = test_artist();
        insert_artist(&pool, &artist).await.expect("insert");

        assert!(delete_artist(&pool, artist.guid).await.expect("delete"));
        assert!(get_artist(&pool, artist.guid).await.expect("get").is_none());

        // Second delete is a no-op
        assert!(!delete_artist(&pool, artist.guid).await.expect("delete"));
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_name() {
        let pool = test_pool().await;
        for name in ["Claude Monet", "Auguste Renoir", "Berthe Morisot"] {
            let mut artist = test_artist();
            artist.name = name.to_string();
            artist.guid = Uuid::new_v4();
            insert_artist(&pool, &artist).await.expect("insert");
        }

        let names: Vec<String> = list_artists(&pool)
            .await
            .expect("list")
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Auguste Renoir", "Berthe Morisot", "Claude Monet"]);
    }
}
