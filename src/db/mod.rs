use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    error::AppResult,
    models::{Actor, Category, Country, Movie},
};

pub mod filter;
pub mod memory;
pub mod mongo;

pub use filter::MovieFilter;
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Read-only access to the movie catalog and its reference collections.
///
/// Movies come back in the store's natural order; no sort key is applied.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Counts every movie matching `filter`, ignoring paging
    async fn count_movies(&self, filter: &MovieFilter) -> AppResult<u64>;

    /// Fetches at most `limit` movies matching `filter` after skipping `skip`
    async fn find_movies(&self, filter: &MovieFilter, skip: u64, limit: u64)
        -> AppResult<Vec<Movie>>;

    /// Looks up a single movie by identifier
    async fn find_movie(&self, id: ObjectId) -> AppResult<Option<Movie>>;

    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    async fn list_actors(&self) -> AppResult<Vec<Actor>>;

    async fn list_countries(&self) -> AppResult<Vec<Country>>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}
