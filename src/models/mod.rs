use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod paging;

pub use paging::{Paginated, Paging, PagingMeta};

/// Treats an explicit `null` in a stored document the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keeps a stored `null` apart from a missing field: `None` when absent,
/// `Some(None)` for `null`
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn serialize_or_empty<S>(value: &Option<Option<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_ref().and_then(|v| v.as_deref()).unwrap_or(""))
}

/// Key and display title of a reference entity, copied into each movie
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmbeddedRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

impl EmbeddedRef {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Full movie record as stored in the `movies` collection.
///
/// Deserialization follows the stored field names; serialization produces
/// the public JSON shape (`id` as hex, embedded actors and categories under
/// `actors` and `categories`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        serialize_with = "serialize_object_id_as_hex_string"
    )]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "normTitle", default, deserialize_with = "null_as_default")]
    pub norm_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster: String,
    #[serde(rename = "bigPoster", default, deserialize_with = "null_as_default")]
    pub big_poster: String,
    #[serde(rename = "playUrl", default, deserialize_with = "null_as_default")]
    pub play_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    /// Absent, `null` or a value. The store treats a `null` source as present.
    #[serde(
        rename = "videoSource",
        default,
        deserialize_with = "present",
        serialize_with = "serialize_or_empty"
    )]
    pub video_source: Option<Option<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "releaseDate", default, deserialize_with = "null_as_default")]
    pub release_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directors: Vec<String>,
    #[serde(
        rename(serialize = "actors", deserialize = "actorEmbeded"),
        default,
        deserialize_with = "null_as_default"
    )]
    pub actors: Vec<EmbeddedRef>,
    #[serde(
        rename(serialize = "categories", deserialize = "categoryEmbeded"),
        default,
        deserialize_with = "null_as_default"
    )]
    pub categories: Vec<EmbeddedRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub countries: Vec<String>,
    #[serde(rename = "countryEmbeded", default, deserialize_with = "null_as_default")]
    pub country_refs: Vec<EmbeddedRef>,
    #[serde(rename = "_class", default, deserialize_with = "null_as_default")]
    pub class: String,
}

impl Movie {
    /// Creates a bare movie with a fresh identifier
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            title: title.into(),
            norm_title: String::new(),
            poster: String::new(),
            big_poster: String::new(),
            play_url: String::new(),
            source: String::new(),
            video_source: None,
            content: String::new(),
            release_date: String::new(),
            directors: Vec::new(),
            actors: Vec::new(),
            categories: Vec::new(),
            countries: Vec::new(),
            country_refs: Vec::new(),
            class: String::new(),
        }
    }

    pub fn set_video_source(&mut self, url: impl Into<String>) {
        self.video_source = Some(Some(url.into()));
    }

    /// Whether the movie has something to play: the source is present and
    /// not the empty string
    pub fn is_playable(&self) -> bool {
        match &self.video_source {
            None => false,
            Some(None) => true,
            Some(Some(url)) => !url.is_empty(),
        }
    }
}

/// Lightweight view of a movie used in list responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub poster: String,
    pub release_date: String,
}

impl From<&Movie> for MovieSummary {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_hex(),
            title: movie.title.clone(),
            poster: movie.poster.clone(),
            release_date: movie.release_date.clone(),
        }
    }
}

/// Canonical record of a reference collection (`categories`, `actors`, `countries`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
}

impl Reference {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            key: key.into(),
            title: title.into(),
        }
    }

    /// Denormalized copy stored inside movie documents
    pub fn embedded(&self) -> EmbeddedRef {
        EmbeddedRef::new(self.key.clone(), self.title.clone())
    }
}

pub type Category = Reference;
pub type Actor = Reference;
pub type Country = Reference;

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, Bson};

    #[test]
    fn test_movie_from_stored_document() {
        let id = ObjectId::parse_str("5a1b2c3d4e5f60718293a4b5").unwrap();
        let document = doc! {
            "_id": id,
            "title": "The Matrix",
            "normTitle": "the matrix",
            "videoSource": "https://cdn.example/matrix.m3u8",
            "releaseDate": "1999-03-31",
            "directors": ["Lana Wachowski", "Lilly Wachowski"],
            "actorEmbeded": [{ "key": "keanu-reeves", "title": "Keanu Reeves" }],
            "categoryEmbeded": [{ "key": "sci-fi", "title": "Sci-Fi" }],
            "countries": Bson::Null,
            "_class": "movie",
        };

        let movie: Movie = from_document(document).unwrap();
        assert_eq!(movie.id, id);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.norm_title, "the matrix");
        assert_eq!(movie.poster, "");
        assert_eq!(movie.directors.len(), 2);
        assert_eq!(movie.actors, vec![EmbeddedRef::new("keanu-reeves", "Keanu Reeves")]);
        assert_eq!(movie.categories[0].key, "sci-fi");
        assert!(movie.countries.is_empty());
        assert!(movie.is_playable());
    }

    #[test]
    fn test_movie_json_shape() {
        let mut movie = Movie::new("Heat");
        movie.actors.push(EmbeddedRef::new("al-pacino", "Al Pacino"));
        movie.categories.push(EmbeddedRef::new("crime", "Crime"));

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], movie.id.to_hex());
        assert!(json.get("_id").is_none());
        assert_eq!(json["actors"][0]["key"], "al-pacino");
        assert_eq!(json["categories"][0]["title"], "Crime");
        assert!(json.get("actorEmbeded").is_none());
        assert_eq!(json["videoSource"], "");
        assert_eq!(json["countryEmbeded"], serde_json::json!([]));
    }

    #[test]
    fn test_null_video_source_counts_as_playable() {
        let null_source: Movie = from_document(doc! {
            "_id": ObjectId::new(),
            "title": "Nosferatu",
            "videoSource": Bson::Null,
        })
        .unwrap();
        assert_eq!(null_source.video_source, Some(None));
        assert!(null_source.is_playable());
        assert_eq!(serde_json::to_value(&null_source).unwrap()["videoSource"], "");

        let missing: Movie = from_document(doc! { "_id": ObjectId::new(), "title": "Metropolis" }).unwrap();
        assert_eq!(missing.video_source, None);
        assert!(!missing.is_playable());

        let empty: Movie = from_document(doc! {
            "_id": ObjectId::new(),
            "title": "Faust",
            "videoSource": "",
        })
        .unwrap();
        assert!(!empty.is_playable());
    }

    #[test]
    fn test_summary_projection() {
        let mut movie = Movie::new("Alien");
        movie.poster = "https://img.example/alien.jpg".to_string();
        movie.release_date = "1979-05-25".to_string();
        movie.content = "In space no one can hear you scream.".to_string();

        let summary = MovieSummary::from(&movie);
        assert_eq!(summary.id, movie.id.to_hex());
        assert_eq!(summary.title, "Alien");

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": movie.id.to_hex(),
                "title": "Alien",
                "poster": "https://img.example/alien.jpg",
                "releaseDate": "1979-05-25",
            })
        );
    }

    #[test]
    fn test_reference_json_keeps_underscore_id() {
        let category = Category::new("drama", "Drama");
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["_id"], category.id.to_hex());
        assert_eq!(json["key"], "drama");
        assert_eq!(category.embedded(), EmbeddedRef::new("drama", "Drama"));
    }
}
