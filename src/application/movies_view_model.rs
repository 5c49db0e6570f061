// src/application/movies_view_model.rs
//
// Movies View Model - presentation driver
//
// RULES:
// - Owns the list state and the selection state, nothing else
// - All list updates come from one load subscription at a time
// - Any failure (load or favorite toggle) lands in MoviesState::Error

use std::sync::{Arc, Mutex};

use futures::StreamExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::movies_state::{MoviesState, SelectedMovieState};
use crate::domain::Movie;
use crate::services::{
    AddMovieToFavoritesUseCase, ObserveMoviesUseCase, RemoveMovieFromFavoritesUseCase,
};

pub struct MoviesViewModel {
    observe_movies: Arc<ObserveMoviesUseCase>,
    like_movie: Arc<AddMovieToFavoritesUseCase>,
    dislike_movie: Arc<RemoveMovieFromFavoritesUseCase>,
    movies_state: Arc<watch::Sender<MoviesState>>,
    selected_movie_state: watch::Sender<SelectedMovieState>,
    load_task: Mutex<Option<JoinHandle<()>>>,
}

impl MoviesViewModel {
    /// Build the driver in `MoviesState::Initial`.
    ///
    /// Nothing is loaded yet: the owner calls `load_movies()` once, from within
    /// a tokio runtime.
    pub fn new(
        observe_movies: Arc<ObserveMoviesUseCase>,
        like_movie: Arc<AddMovieToFavoritesUseCase>,
        dislike_movie: Arc<RemoveMovieFromFavoritesUseCase>,
    ) -> Self {
        let (movies_state, _) = watch::channel(MoviesState::Initial);
        let (selected_movie_state, _) = watch::channel(SelectedMovieState::Closed);

        Self {
            observe_movies,
            like_movie,
            dislike_movie,
            movies_state: Arc::new(movies_state),
            selected_movie_state,
            load_task: Mutex::new(None),
        }
    }

    /// Subscribe to the list state
    pub fn movies_state(&self) -> watch::Receiver<MoviesState> {
        self.movies_state.subscribe()
    }

    /// Subscribe to the selection state
    pub fn selected_movie_state(&self) -> watch::Receiver<SelectedMovieState> {
        self.selected_movie_state.subscribe()
    }

    pub fn current_movies_state(&self) -> MoviesState {
        self.movies_state.borrow().clone()
    }

    /// (Re)start the load subscription.
    ///
    /// Must be called from within a tokio runtime. A previous subscription is
    /// cancelled first, so this doubles as the retry action.
    pub fn load_movies(&self) {
        let mut load_task = self
            .load_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(previous) = load_task.take() {
            previous.abort();
        }

        self.movies_state.send_replace(MoviesState::Loading);
        log::info!("Loading movies");

        let mut updates = self.observe_movies.invoke();
        let state = Arc::clone(&self.movies_state);

        *load_task = Some(tokio::spawn(async move {
            while let Some(result) = updates.next().await {
                match result {
                    Ok(movies) => {
                        log::debug!("Movie list updated ({} movies)", movies.len());
                        state.send_replace(MoviesState::Loaded(movies));
                    }
                    Err(e) => {
                        log::error!("Failed to load movies: {}", e);
                        state.send_replace(MoviesState::Error(Arc::new(e)));
                    }
                }
            }
        }));
    }

    /// Alias of `load_movies`, offered from the error screen
    pub fn retry(&self) {
        self.load_movies();
    }

    /// Flip the favorite status of `movie` based on its current flag
    pub async fn toggle_like(&self, movie: &Movie) {
        let result = if movie.liked {
            self.dislike_movie.invoke(movie.id).await
        } else {
            self.like_movie.invoke(movie.id).await
        };

        if let Err(e) = result {
            log::error!("Failed to update favorite for movie {}: {}", movie.id, e);
            self.movies_state
                .send_replace(MoviesState::Error(Arc::new(e)));
        }
    }

    pub fn open_movie_details(&self, movie: &Movie) {
        self.selected_movie_state
            .send_replace(SelectedMovieState::Open(movie.clone()));
    }

    pub fn close_movie_details(&self) {
        self.selected_movie_state
            .send_replace(SelectedMovieState::Closed);
    }
}

impl Drop for MoviesViewModel {
    fn drop(&mut self) {
        let load_task = self
            .load_task
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = load_task.take() {
            task.abort();
        }
    }
}
