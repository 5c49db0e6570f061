// src/application/state.rs
//
// Application wiring
//
// Builds every layer bottom-up from an AppConfig. All fields are Arc-wrapped
// so front-ends can share them across tasks.

use std::sync::Arc;

use super::movies_view_model::MoviesViewModel;
use crate::config::AppConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::integrations::MoviesApiClient;
use crate::repositories::{CacheFirstMoviesRepository, MoviesRepository};
use crate::services::{
    AddMovieToFavoritesUseCase, ObserveMoviesUseCase, RemoveMovieFromFavoritesUseCase,
};
use crate::stores::{MoviesLocalStore, MoviesMapper, MoviesRestStore, SqliteMoviesLocalStore};

pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub repository: Arc<dyn MoviesRepository>,
    pub view_model: Arc<MoviesViewModel>,
}

impl AppState {
    pub fn initialize(config: &AppConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let pool = Arc::new(create_connection_pool(&config.database_path)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        // 2. STORES
        let local_store: Arc<dyn MoviesLocalStore> =
            Arc::new(SqliteMoviesLocalStore::new(Arc::clone(&pool)));
        let rest_store: Arc<dyn MoviesRestStore> = Arc::new(MoviesApiClient::from_config(config)?);

        // 3. REPOSITORY
        let repository: Arc<dyn MoviesRepository> = Arc::new(CacheFirstMoviesRepository::new(
            local_store,
            rest_store,
            MoviesMapper::new(),
        ));

        // 4. USE CASES + PRESENTATION
        let view_model = Arc::new(MoviesViewModel::new(
            Arc::new(ObserveMoviesUseCase::new(Arc::clone(&repository))),
            Arc::new(AddMovieToFavoritesUseCase::new(Arc::clone(&repository))),
            Arc::new(RemoveMovieFromFavoritesUseCase::new(Arc::clone(&repository))),
        ));

        log::info!("Application state ready (db: {})", config.database_path.display());

        Ok(Self {
            pool,
            repository,
            view_model,
        })
    }
}
