//! Read-only HTTP catalog over a movie document store.
//!
//! Every list endpoint funnels through [`services::catalog::execute`], which
//! counts, pages and projects movies into summaries.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
