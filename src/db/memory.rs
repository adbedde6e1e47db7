use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use regex::{Regex, RegexBuilder};

use crate::{
    db::{MovieFilter, MovieStore},
    error::{AppError, AppResult},
    models::{Actor, Category, Country, EmbeddedRef, Movie},
};

/// In-process catalog holding every collection in insertion order.
///
/// Evaluates [`MovieFilter`] with the same semantics as the document store
/// query it translates to, including a `null` video source counting as
/// present.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    movies: Vec<Movie>,
    categories: Vec<Category>,
    actors: Vec<Actor>,
    countries: Vec<Country>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movies(mut self, movies: impl IntoIterator<Item = Movie>) -> Self {
        self.movies.extend(movies);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn with_actors(mut self, actors: impl IntoIterator<Item = Actor>) -> Self {
        self.actors.extend(actors);
        self
    }

    pub fn with_countries(mut self, countries: impl IntoIterator<Item = Country>) -> Self {
        self.countries.extend(countries);
        self
    }

    fn matching<'a>(
        &'a self,
        filter: &'a MovieFilter,
    ) -> AppResult<impl Iterator<Item = &'a Movie> + 'a> {
        let title = filter
            .title_pattern
            .as_deref()
            .map(compile_title_pattern)
            .transpose()?;

        Ok(self
            .movies
            .iter()
            .filter(move |movie| matches(filter, title.as_ref(), movie)))
    }
}

fn compile_title_pattern(pattern: &str) -> AppResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::Internal(format!("invalid title pattern: {}", e)))
}

fn has_key(refs: &[EmbeddedRef], key: &str) -> bool {
    refs.iter().any(|r| r.key == key)
}

fn matches(filter: &MovieFilter, title: Option<&Regex>, movie: &Movie) -> bool {
    if filter.playable && !movie.is_playable() {
        return false;
    }
    if let Some(title) = title {
        if !title.is_match(&movie.title) {
            return false;
        }
    }
    if let Some(key) = &filter.actor_key {
        if !has_key(&movie.actors, key) {
            return false;
        }
    }
    if let Some(key) = &filter.category_key {
        if !has_key(&movie.categories, key) {
            return false;
        }
    }
    true
}

#[async_trait]
impl MovieStore for MemoryStore {
    async fn count_movies(&self, filter: &MovieFilter) -> AppResult<u64> {
        Ok(self.matching(filter)?.count() as u64)
    }

    async fn find_movies(
        &self,
        filter: &MovieFilter,
        skip: u64,
        limit: u64,
    ) -> AppResult<Vec<Movie>> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(self
            .matching(filter)?
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_movie(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        Ok(self.movies.iter().find(|movie| movie.id == id).cloned())
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.clone())
    }

    async fn list_actors(&self) -> AppResult<Vec<Actor>> {
        Ok(self.actors.clone())
    }

    async fn list_countries(&self) -> AppResult<Vec<Country>> {
        Ok(self.countries.clone())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
