//! Entity models for the Artism platform
//!
//! Four independent collections: artists, artworks, art movements, and
//! timeline nodes. Cross-collection references (artist_id on Artwork,
//! artist/movement ids on TimelineNode) are opaque UUIDs with no enforced
//! referential integrity; orphaned references are an accepted condition.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Artist record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub guid: Uuid,
    pub name: String,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    /// Denormalized movement label (display value, not a foreign key)
    pub art_movement: Option<String>,
    #[serde(default)]
    pub notable_works: Vec<String>,
    pub portrait_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating an artist
#[derive(Debug, Clone, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    pub art_movement: Option<String>,
    #[serde(default)]
    pub notable_works: Vec<String>,
    pub portrait_url: Option<String>,
}

/// Partial update payload: only supplied fields are replaced
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistUpdate {
    pub name: Option<String>,
    pub birth_year: Option<i64>,
    pub death_year: Option<i64>,
    pub nationality: Option<String>,
    pub biography: Option<String>,
    pub art_movement: Option<String>,
    pub notable_works: Option<Vec<String>>,
    pub portrait_url: Option<String>,
}

impl Artist {
    /// Create a new artist with a fresh UUID
    pub fn from_new(new: NewArtist) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: new.name,
            birth_year: new.birth_year,
            death_year: new.death_year,
            nationality: new.nationality,
            biography: new.biography,
            art_movement: new.art_movement,
            notable_works: new.notable_works,
            portrait_url: new.portrait_url,
            created_at: None,
            updated_at: None,
        }
    }

    /// Shallow merge: fields absent from the update are preserved
    pub fn apply_update(&mut self, update: ArtistUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(v) = update.birth_year {
            self.birth_year = Some(v);
        }
        if let Some(v) = update.death_year {
            self.death_year = Some(v);
        }
        if let Some(v) = update.nationality {
            self.nationality = Some(v);
        }
        if let Some(v) = update.biography {
            self.biography = Some(v);
        }
        if let Some(v) = update.art_movement {
            self.art_movement = Some(v);
        }
        if let Some(v) = update.notable_works {
            self.notable_works = v;
        }
        if let Some(v) = update.portrait_url {
            self.portrait_url = Some(v);
        }
    }
}

/// Artwork record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artwork {
    pub guid: Uuid,
    pub title: String,
    /// Reference to an Artist guid (existence not validated)
    pub artist_id: Uuid,
    pub year: Option<i64>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating an artwork
#[derive(Debug, Clone, Deserialize)]
pub struct NewArtwork {
    pub title: String,
    pub artist_id: Uuid,
    pub year: Option<i64>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update payload for artworks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkUpdate {
    pub title: Option<String>,
    pub artist_id: Option<Uuid>,
    pub year: Option<i64>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Artwork {
    pub fn from_new(new: NewArtwork) -> Self {
        Self {
            guid: Uuid::new_v4(),
            title: new.title,
            artist_id: new.artist_id,
            year: new.year,
            medium: new.medium,
            dimensions: new.dimensions,
            location: new.location,
            description: new.description,
            image_url: new.image_url,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn apply_update(&mut self, update: ArtworkUpdate) {
        if let Some(v) = update.title {
            self.title = v;
        }
        if let Some(v) = update.artist_id {
            self.artist_id = v;
        }
        if let Some(v) = update.year {
            self.year = Some(v);
        }
        if let Some(v) = update.medium {
            self.medium = Some(v);
        }
        if let Some(v) = update.dimensions {
            self.dimensions = Some(v);
        }
        if let Some(v) = update.location {
            self.location = Some(v);
        }
        if let Some(v) = update.description {
            self.description = Some(v);
        }
        if let Some(v) = update.image_url {
            self.image_url = Some(v);
        }
    }
}

/// Art movement record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtMovement {
    pub guid: Uuid,
    pub name: String,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
    pub description: Option<String>,
    #[serde(default)]
    pub key_artists: Vec<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub influences: Vec<String>,
    #[serde(default)]
    pub influenced_by: Vec<String>,
    /// Layout hint for the timeline visualization
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating an art movement
#[derive(Debug, Clone, Deserialize)]
pub struct NewArtMovement {
    pub name: String,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
    pub description: Option<String>,
    #[serde(default)]
    pub key_artists: Vec<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default)]
    pub influences: Vec<String>,
    #[serde(default)]
    pub influenced_by: Vec<String>,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
}

/// Partial update payload for art movements
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtMovementUpdate {
    pub name: Option<String>,
    pub start_year: Option<i64>,
    pub end_year: Option<i64>,
    pub description: Option<String>,
    pub key_artists: Option<Vec<String>>,
    pub characteristics: Option<Vec<String>>,
    pub influences: Option<Vec<String>>,
    pub influenced_by: Option<Vec<String>>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
}

impl ArtMovement {
    pub fn from_new(new: NewArtMovement) -> Self {
        Self {
            guid: Uuid::new_v4(),
            name: new.name,
            start_year: new.start_year,
            end_year: new.end_year,
            description: new.description,
            key_artists: new.key_artists,
            characteristics: new.characteristics,
            influences: new.influences,
            influenced_by: new.influenced_by,
            position_x: new.position_x,
            position_y: new.position_y,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn apply_update(&mut self, update: ArtMovementUpdate) {
        if let Some(v) = update.name {
            self.name = v;
        }
        if let Some(v) = update.start_year {
            self.start_year = Some(v);
        }
        if let Some(v) = update.end_year {
            self.end_year = Some(v);
        }
        if let Some(v) = update.description {
            self.description = Some(v);
        }
        if let Some(v) = update.key_artists {
            self.key_artists = v;
        }
        if let Some(v) = update.characteristics {
            self.characteristics = v;
        }
        if let Some(v) = update.influences {
            self.influences = v;
        }
        if let Some(v) = update.influenced_by {
            self.influenced_by = v;
        }
        if let Some(v) = update.position_x {
            self.position_x = v;
        }
        if let Some(v) = update.position_y {
            self.position_y = v;
        }
    }
}

/// Timeline node record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineNode {
    pub guid: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub year: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
    /// Optional references; existence not validated
    pub artist_id: Option<Uuid>,
    pub movement_id: Option<Uuid>,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request payload for creating a timeline node
#[derive(Debug, Clone, Deserialize)]
pub struct NewTimelineNode {
    pub title: String,
    pub description: Option<String>,
    pub year: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
    pub artist_id: Option<Uuid>,
    pub movement_id: Option<Uuid>,
    pub image_url: Option<String>,
}

/// Partial update payload for timeline nodes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineNodeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i64>,
    pub tags: Option<Vec<String>>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub artist_id: Option<Uuid>,
    pub movement_id: Option<Uuid>,
    pub image_url: Option<String>,
}

impl TimelineNode {
    pub fn from_new(new: NewTimelineNode) -> Self {
        Self {
            guid: Uuid::new_v4(),
            title: new.title,
            description: new.description,
            year: new.year,
            tags: new.tags,
            position_x: new.position_x,
            position_y: new.position_y,
            artist_id: new.artist_id,
            movement_id: new.movement_id,
            image_url: new.image_url,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn apply_update(&mut self, update: TimelineNodeUpdate) {
        if let Some(v) = update.title {
            self.title = v;
        }
        if let Some(v) = update.description {
            self.description = Some(v);
        }
        if let Some(v) = update.year {
            self.year = v;
        }
        if let Some(v) = update.tags {
            self.tags = v;
        }
        if let Some(v) = update.position_x {
            self.position_x = v;
        }
        if let Some(v) = update.position_y {
            self.position_y = v;
        }
        if let Some(v) = update.artist_id {
            self.artist_id = Some(v);
        }
        if let Some(v) = update.movement_id {
            self.movement_id = Some(v);
        }
        if let Some(v) = update.image_url {
            self.image_url = Some(v);
        }
    }
}
