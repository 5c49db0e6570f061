// src/stores/remote_store.rs

use async_trait::async_trait;

use crate::domain::Movie;
use crate::error::AppResult;

/// Source of truth for the movie catalogue.
///
/// Returns domain movies directly; every movie comes back unliked.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoviesRestStore: Send + Sync {
    async fn get_movies(&self) -> AppResult<Vec<Movie>>;
}
