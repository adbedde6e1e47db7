use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{Actor, Category, Country},
    routes::AppState,
};

/// Handler for the full category list
pub async fn categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.store.list_categories().await?))
}

/// Handler for the full actor list
pub async fn actors(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    Ok(Json(state.store.list_actors().await?))
}

/// Handler for the full country list
pub async fn countries(State(state): State<AppState>) -> AppResult<Json<Vec<Country>>> {
    Ok(Json(state.store.list_countries().await?))
}
