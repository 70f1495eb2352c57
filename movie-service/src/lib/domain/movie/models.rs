use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::comment::models::CommentId;
use crate::movie::errors::MovieIdError;

/// Movie aggregate entity.
///
/// The details record is static metadata, never mutated after creation;
/// only the comment reference list grows.
#[derive(Debug, Clone)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub details: MovieDetails,
    pub comments: Vec<CommentId>,
    pub created_at: DateTime<Utc>,
}

/// Movie unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovieId(pub Uuid);

impl MovieId {
    /// Generate a new random movie ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a movie ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, MovieIdError> {
        Uuid::parse_str(s)
            .map(MovieId)
            .map_err(|e| MovieIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Nested movie metadata record, stored as a single JSON document.
///
/// All fields are optional free-form strings; the upstream catalog data is
/// not normalized further.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MovieDetails {
    pub year: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub poster: Option<String>,
    pub ratings: Vec<Rating>,
    pub metascore: Option<String>,
    pub imdb_rating: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub dvd: Option<String>,
    pub box_office: Option<String>,
    pub production: Option<String>,
    pub website: Option<String>,
}

/// A single rating entry (source and value), e.g. "Internet Movie Database" / "8.8/10".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub source: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_details_roundtrip_wire_names() {
        let details = MovieDetails {
            year: Some("1999".to_string()),
            imdb_rating: Some("8.8".to_string()),
            kind: Some("movie".to_string()),
            ratings: vec![Rating {
                source: "Metacritic".to_string(),
                value: "73/100".to_string(),
            }],
            ..Default::default()
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["imdbRating"], "8.8");
        assert_eq!(json["type"], "movie");
        assert_eq!(json["ratings"][0]["source"], "Metacritic");

        let back: MovieDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, details);
    }

    #[test]
    fn test_movie_details_accepts_sparse_documents() {
        let details: MovieDetails = serde_json::from_str(r#"{"year": "2010"}"#).unwrap();
        assert_eq!(details.year.as_deref(), Some("2010"));
        assert!(details.plot.is_none());
        assert!(details.ratings.is_empty());
    }
}
