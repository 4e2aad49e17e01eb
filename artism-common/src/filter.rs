//! In-memory filter predicates
//!
//! Pure, synchronous filtering of an already-fetched list. A document matches
//! when every supplied predicate holds; omitted predicates match everything.
//! Monotonic by construction: adding a constraint never grows the result set.

use serde::Deserialize;

use crate::models::{Artist, TimelineNode};

/// Filter over a list of artists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistFilter {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    /// Exact match on nationality
    pub nationality: Option<String>,
    /// Exact match on the denormalized art_movement label
    pub movement: Option<String>,
    /// Inclusive lower bound on birth_year
    pub min_year: Option<i64>,
    /// Inclusive upper bound on birth_year
    pub max_year: Option<i64>,
}

impl ArtistFilter {
    /// True when no predicate is supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.nationality.is_none()
            && self.movement.is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
    }

    /// Check whether an artist satisfies every supplied predicate.
    ///
    /// An artist with no birth_year fails any supplied year bound.
    pub fn matches(&self, artist: &Artist) -> bool {
        if let Some(name) = &self.name {
            if !artist.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }
        if let Some(nationality) = &self.nationality {
            if artist.nationality.as_deref() != Some(nationality.as_str()) {
                return false;
            }
        }
        if let Some(movement) = &self.movement {
            if artist.art_movement.as_deref() != Some(movement.as_str()) {
                return false;
            }
        }
        if let Some(min_year) = self.min_year {
            match artist.birth_year {
                Some(year) if year >= min_year => {}
                _ => return false,
            }
        }
        if let Some(max_year) = self.max_year {
            match artist.birth_year {
                Some(year) if year <= max_year => {}
                _ => return false,
            }
        }
        true
    }

    /// Return the subsequence of artists matching the filter
    pub fn apply(&self, artists: Vec<Artist>) -> Vec<Artist> {
        artists.into_iter().filter(|a| self.matches(a)).collect()
    }
}

/// Filter over a list of timeline nodes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimelineFilter {
    /// Node must carry this tag (exact match)
    pub tag: Option<String>,
    /// Inclusive lower bound on year
    pub min_year: Option<i64>,
    /// Inclusive upper bound on year
    pub max_year: Option<i64>,
}

impl TimelineFilter {
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.min_year.is_none() && self.max_year.is_none()
    }

    pub fn matches(&self, node: &TimelineNode) -> bool {
        if let Some(tag) = &self.tag {
            if !node.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(min_year) = self.min_year {
            if node.year < min_year {
                return false;
            }
        }
        if let Some(max_year) = self.max_year {
            if node.year > max_year {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, nodes: Vec<TimelineNode>) -> Vec<TimelineNode> {
        nodes.into_iter().filter(|n| self.matches(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn artist(name: &str, nationality: Option<&str>, movement: Option<&str>, birth_year: Option<i64>) -> Artist {
        Artist {
            guid: Uuid::new_v4(),
            name: name.to_string(),
            birth_year,
            death_year: None,
            nationality: nationality.map(String::from),
            biography: None,
            art_movement: movement.map(String::from),
            notable_works: Vec::new(),
            portrait_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn sample_artists() -> Vec<Artist> {
        vec![
            artist("Claude Monet", Some("French"), Some("Impressionism"), Some(1840)),
            artist("Vincent van Gogh", Some("Dutch"), Some("Post-Impressionism"), Some(1853)),
            artist("Pablo Picasso", Some("Spanish"), Some("Cubism"), Some(1881)),
            artist("Frida Kahlo", Some("Mexican"), Some("Surrealism"), Some(1907)),
            artist("Anonymous Master", None, None, None),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = ArtistFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(sample_artists()).len(), 5);
    }

    #[test]
    fn test_name_substring_is_case_insensitive() {
        let filter = ArtistFilter {
            name: Some("VAN GOGH".to_string()),
            ..Default::default()
        };
        let matched = filter.apply(sample_artists());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Vincent van Gogh");
    }

    #[test]
    fn test_nationality_is_exact_match() {
        let filter = ArtistFilter {
            nationality: Some("French".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(sample_artists()).len(), 1);

        // Substring does not count as a nationality match
        let filter = ArtistFilter {
            nationality: Some("Fren".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(sample_artists()).len(), 0);
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let filter = ArtistFilter {
            min_year: Some(1853),
            max_year: Some(1881),
            ..Default::default()
        };
        let matched = filter.apply(sample_artists());
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|a| {
            let y = a.birth_year.unwrap();
            (1853..=1881).contains(&y)
        }));
    }

    #[test]
    fn test_missing_birth_year_fails_year_bounds() {
        let filter = ArtistFilter {
            min_year: Some(1800),
            ..Default::default()
        };
        let matched = filter.apply(sample_artists());
        assert!(matched.iter().all(|a| a.birth_year.is_some()));
    }

    #[test]
    fn test_example_min_year_bounds() {
        // Artist born 1900: min_year=1950 excludes, min_year=1850 includes
        let subject = artist("Test Artist", None, None, Some(1900));

        let exclude = ArtistFilter {
            min_year: Some(1950),
            ..Default::default()
        };
        assert!(!exclude.matches(&subject));

        let include = ArtistFilter {
            min_year: Some(1850),
            ..Default::default()
        };
        assert!(include.matches(&subject));
    }

    #[test]
    fn test_adding_constraints_is_monotonic() {
        let base = ArtistFilter {
            min_year: Some(1800),
            ..Default::default()
        };
        let narrower = ArtistFilter {
            min_year: Some(1800),
            nationality: Some("Dutch".to_string()),
            ..Default::default()
        };
        let narrowest = ArtistFilter {
            min_year: Some(1800),
            nationality: Some("Dutch".to_string()),
            name: Some("van".to_string()),
            ..Default::default()
        };

        let a = base.apply(sample_artists()).len();
        let b = narrower.apply(sample_artists()).len();
        let c = narrowest.apply(sample_artists()).len();

        assert!(a >= b);
        assert!(b >= c);
    }

    #[test]
    fn test_timeline_filter_tag_and_range() {
        let node = |title: &str, year: i64, tags: &[&str]| TimelineNode {
            guid: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            year,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            position_x: 0.0,
            position_y: 0.0,
            artist_id: None,
            movement_id: None,
            image_url: None,
            created_at: None,
            updated_at: None,
        };
        let nodes = vec![
            node("First exhibition", 1874, &["exhibition", "paris"]),
            node("Les Demoiselles d'Avignon", 1907, &["painting"]),
            node("Fountain", 1917, &["readymade"]),
        ];

        let filter = TimelineFilter {
            tag: Some("exhibition".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(nodes.clone()).len(), 1);

        let filter = TimelineFilter {
            min_year: Some(1900),
            max_year: Some(1917),
            ..Default::default()
        };
        assert_eq!(filter.apply(nodes).len(), 2);
    }
}
