//! Query executor shared by every list endpoint.

use crate::{
    db::{MovieFilter, MovieStore},
    error::AppResult,
    models::{MovieSummary, Paginated, Paging},
};

pub mod filters;

/// Counts the movies matching `filter`, fetches the requested page and
/// projects it into summaries.
///
/// The page window is validated before the store is touched. A page past the
/// last match yields an empty item list, not an error. Store failures abort
/// the request without retrying.
pub async fn execute(
    store: &dyn MovieStore,
    filter: &MovieFilter,
    paging: Paging,
) -> AppResult<Paginated<MovieSummary>> {
    let (skip, limit) = paging.window()?;

    let total_item = store.count_movies(filter).await?;
    let movies = store.find_movies(filter, skip, limit).await?;

    tracing::debug!(
        store = store.name(),
        page = paging.page,
        size = paging.size,
        total_item,
        returned = movies.len(),
        "Executed movie query"
    );

    let items = movies.iter().map(MovieSummary::from).collect();
    Ok(Paginated::new(items, paging, total_item))
}
