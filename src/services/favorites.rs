// src/services/favorites.rs
//
// Favorite toggling - thin pass-through to the repository

use std::sync::Arc;

use crate::domain::MovieId;
use crate::error::AppResult;
use crate::repositories::MoviesRepository;

pub struct AddMovieToFavoritesUseCase {
    repository: Arc<dyn MoviesRepository>,
}

impl AddMovieToFavoritesUseCase {
    pub fn new(repository: Arc<dyn MoviesRepository>) -> Self {
        Self { repository }
    }

    pub async fn invoke(&self, movie_id: MovieId) -> AppResult<()> {
        self.repository.add_movie_to_favorites(movie_id).await
    }
}

pub struct RemoveMovieFromFavoritesUseCase {
    repository: Arc<dyn MoviesRepository>,
}

impl RemoveMovieFromFavoritesUseCase {
    pub fn new(repository: Arc<dyn MoviesRepository>) -> Self {
        Self { repository }
    }

    pub async fn invoke(&self, movie_id: MovieId) -> AppResult<()> {
        self.repository.remove_movie_from_favorites(movie_id).await
    }
}
