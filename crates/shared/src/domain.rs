use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// IMDb title identifier as returned by the movie service (e.g. `tt1375666`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImdbId(pub String);

impl ImdbId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImdbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A movie record as the service sends it. Every field is optional on the
/// wire. Scalars the service emits as numbers or booleans are kept as their
/// JSON text so one odd field never rejects the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "imdbID", default, deserialize_with = "lenient_imdb_id")]
    pub imdb_id: Option<ImdbId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub poster: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub imdb_rating: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub awards: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub released: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub writer: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub actors: Option<String>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_imdb_id<'de, D>(deserializer: D) -> Result<Option<ImdbId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.map(ImdbId))
}

impl Movie {
    /// Extended detail rows shown when the details panel is expanded, in
    /// display order.
    pub fn detail_rows(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("IMDB Score", self.imdb_rating.as_deref()),
            ("Awards", self.awards.as_deref()),
            ("Released", self.released.as_deref()),
            ("Genre", self.genre.as_deref()),
            ("Runtime", self.runtime.as_deref()),
            ("Director", self.director.as_deref()),
            ("Writer", self.writer.as_deref()),
            ("Actors", self.actors.as_deref()),
        ]
    }
}
