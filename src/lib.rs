// src/lib.rs
// MovieHub - Local-first movie catalogue with favorites
//
// Architecture:
// - Data layer: a local SQLite cache and a remote catalogue API behind one repository
// - Domain layer: use cases over the repository contract
// - Application layer: a view model holding observable UI state
// - Explicit: every fallible operation returns AppResult

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod integrations;
pub mod repositories;
pub mod services;
pub mod stores;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::AppConfig;
pub use domain::{Movie, MovieId};
pub use error::{AppError, AppResult};

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use stores::{
    LikedIdsStream, MovieRecord, MoviesLocalStore, MoviesMapper, MoviesRestStore,
    SqliteMoviesLocalStore,
};

pub use integrations::MoviesApiClient;

pub use repositories::{CacheFirstMoviesRepository, MoviesRepository};

pub use services::{
    AddMovieToFavoritesUseCase, MoviesStream, ObserveMoviesUseCase,
    RemoveMovieFromFavoritesUseCase,
};

pub use application::{
    AppState, ErrorResponse, MoviesState, MoviesViewModel, SelectedMovieState,
};
