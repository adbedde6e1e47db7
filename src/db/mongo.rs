use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Client, Collection, Database,
};
use serde::de::DeserializeOwned;

use crate::{
    db::{MovieFilter, MovieStore},
    error::AppResult,
    models::{Actor, Category, Country, Movie},
};

pub const MOVIES: &str = "movies";
pub const CATEGORIES: &str = "categories";
pub const ACTORS: &str = "actors";
pub const COUNTRIES: &str = "countries";

/// Movie catalog backed by a MongoDB database.
///
/// The driver client pools its own connections and is safe to share, so one
/// instance is created at startup and cloned into every request.
#[derive(Clone)]
pub struct MongoStore {
    movies: Collection<Movie>,
    categories: Collection<Category>,
    actors: Collection<Actor>,
    countries: Collection<Country>,
}

impl MongoStore {
    /// Connects to the document store and verifies it answers a ping
    pub async fn connect(uri: &str, db_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let database = client.database(db_name);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(database = db_name, "Connected to document store");

        Ok(Self::new(&database))
    }

    pub fn new(database: &Database) -> Self {
        Self {
            movies: database.collection(MOVIES),
            categories: database.collection(CATEGORIES),
            actors: database.collection(ACTORS),
            countries: database.collection(COUNTRIES),
        }
    }

    async fn find_all<T>(collection: &Collection<T>) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        let cursor = collection.find(Document::new()).await?;
        Ok(cursor.try_collect().await?)
    }
}

#[async_trait]
impl MovieStore for MongoStore {
    async fn count_movies(&self, filter: &MovieFilter) -> AppResult<u64> {
        Ok(self.movies.count_documents(filter.to_document()).await?)
    }

    async fn find_movies(
        &self,
        filter: &MovieFilter,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Movie>> {
        let cursor = self
            .movies
            .find(filter.to_document())
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_movie(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        Ok(self.movies.find_one(doc! { "_id": id }).await?)
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Self::find_all(&self.categories).await
    }

    async fn list_actors(&self) -> AppResult<Vec<Actor>> {
        Self::find_all(&self.actors).await
    }

    async fn list_countries(&self) -> AppResult<Vec<Country>> {
        Self::find_all(&self.countries).await
    }

    fn name(&self) -> &'static str {
        "mongodb"
    }
}
