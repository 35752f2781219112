//! Media record types stored by the catalog services.
//!
//! Each service owns one record type with serde field names tailored to
//! its wire protocol: `Movie` uses XML-cased names for the SOAP body,
//! `Series` and `Anime` use camelCase JSON names. Identifiers are
//! assigned by the store, never by callers; an incoming `id` field is
//! accepted during decoding and overwritten on create.

use serde::{Deserialize, Serialize};

/// A record the generic catalog store can own.
///
/// The store uses `set_id` to stamp the allocated identifier on create
/// and `title` to validate the one required field.
pub trait CatalogRecord: Clone + Send + Sync + 'static {
    /// Process-unique positive identifier, 0 before the store assigns one.
    fn id(&self) -> u32;
    /// Stamps the store-allocated identifier.
    fn set_id(&mut self, id: u32);
    /// Display title; must be non-empty for a record to be created.
    fn title(&self) -> &str;
}

/// One movie as carried in the SOAP body (`<Movie>` element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "ID", default)]
    pub id: u32,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Genre", default)]
    pub genre: String,
    #[serde(rename = "Year", default)]
    pub year: u32,
}

impl CatalogRecord for Movie {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// One episode nested inside a [`Series`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub watch_url: String,
}

/// One series as carried over the REST/JSON API.
///
/// `episodes` defaults to an empty list on decode so a created record is
/// never serialized with a null episode list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub total_episodes: u32,
    #[serde(default)]
    pub watched_episodes: u32,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

impl CatalogRecord for Series {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// One anime entry as exposed by the GraphQL API.
///
/// `episodes` here is the episode count, not a nested list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anime {
    #[serde(default)]
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub episodes: u32,
}

impl CatalogRecord for Anime {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_serializes_with_xml_cased_names() {
        let movie = Movie {
            id: 1,
            title: "Inception".to_string(),
            genre: "Sci-Fi Action".to_string(),
            year: 2010,
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["ID"], 1);
        assert_eq!(json["Title"], "Inception");
        assert_eq!(json["Genre"], "Sci-Fi Action");
        assert_eq!(json["Year"], 2010);
    }

    #[test]
    fn series_serializes_camel_case() {
        let series = Series {
            id: 1,
            title: "Breaking Bad".to_string(),
            genre: "Crime Drama".to_string(),
            total_episodes: 7,
            watched_episodes: 0,
            cover_url: "https://example.com/bb.jpg".to_string(),
            episodes: vec![Episode {
                id: 1,
                title: "Pilot".to_string(),
                watch_url: "https://example.com/s01e01.mp4".to_string(),
            }],
        };
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["totalEpisodes"], 7);
        assert_eq!(json["watchedEpisodes"], 0);
        assert_eq!(json["coverUrl"], "https://example.com/bb.jpg");
        assert_eq!(json["episodes"][0]["watchUrl"], "https://example.com/s01e01.mp4");
    }

    #[test]
    fn series_decodes_without_optional_fields() {
        let series: Series = serde_json::from_str(r#"{"title":"Dark"}"#).unwrap();
        assert_eq!(series.id, 0);
        assert_eq!(series.title, "Dark");
        assert!(series.episodes.is_empty());
    }

    #[test]
    fn created_series_never_serializes_null_episodes() {
        let series: Series = serde_json::from_str(r#"{"title":"Dark"}"#).unwrap();
        let json = serde_json::to_value(&series).unwrap();
        assert!(json["episodes"].is_array());
    }

    #[test]
    fn set_id_overwrites_caller_supplied_id() {
        let mut anime = Anime {
            id: 42,
            title: "Attack on Titan".to_string(),
            genre: "Action, Dark Fantasy".to_string(),
            episodes: 88,
        };
        anime.set_id(3);
        assert_eq!(anime.id(), 3);
    }
}
