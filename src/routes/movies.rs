use axum::{
    extract::{Path, Query, State},
    Json,
};
use mongodb::bson::oid::ObjectId;

use crate::{
    db::MovieFilter,
    error::{AppError, AppResult},
    models::{Movie, MovieSummary, Paginated, Paging},
    routes::{AppState, QueryParams},
    services::catalog::{self, filters},
};

type MoviePage = AppResult<Json<Paginated<MovieSummary>>>;

async fn run(state: &AppState, filter: MovieFilter, paging: Paging) -> MoviePage {
    let page = catalog::execute(state.store.as_ref(), &filter, paging).await?;
    Ok(Json(page))
}

/// Handler for listing every playable movie
pub async fn paginated(State(state): State<AppState>, Query(params): Query<QueryParams>) -> MoviePage {
    run(&state, filters::playable(), params.paging()).await
}

/// Handler for free-text title search
pub async fn search(State(state): State<AppState>, Query(params): Query<QueryParams>) -> MoviePage {
    let q = params.get("q").unwrap_or_default();
    tracing::info!(q = %q, "Searching titles");

    run(&state, filters::title_search(q, state.search_pattern), params.paging()).await
}

/// Handler for movies featuring an actor
pub async fn by_actor_key(State(state): State<AppState>, Query(params): Query<QueryParams>) -> MoviePage {
    let key = params.get("key").unwrap_or_default();
    run(&state, filters::by_actor_key(key), params.paging()).await
}

/// Handler for movies in a category
pub async fn by_category_key(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> MoviePage {
    let key = params.get("key").unwrap_or_default();
    run(&state, filters::by_category_key(key), params.paging()).await
}

/// Handler returning one full movie record
pub async fn movie(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Movie>> {
    let object_id = ObjectId::parse_str(&id).map_err(|_| AppError::InvalidId(id.clone()))?;

    match state.store.find_movie(object_id).await? {
        Some(movie) => Ok(Json(movie)),
        None => {
            tracing::info!(id = %id, "Movie not found");
            Err(AppError::MovieNotFound)
        }
    }
}
