// src/services/mod.rs
//
// Use cases - domain operations layered on the movies repository

pub mod favorites;
pub mod observe_movies;

pub use favorites::{AddMovieToFavoritesUseCase, RemoveMovieFromFavoritesUseCase};
pub use observe_movies::{apply_liked_status, MoviesStream, ObserveMoviesUseCase};
