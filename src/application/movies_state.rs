// src/application/movies_state.rs
//
// Presentation states
//
// Two independent containers: the list loading state and the detail
// selection. They are never combined into one enum.

use std::sync::Arc;

use crate::domain::Movie;
use crate::error::AppError;

/// Loading state of the movie list
#[derive(Debug, Clone)]
pub enum MoviesState {
    Initial,
    Loading,
    Loaded(Vec<Movie>),
    Error(Arc<AppError>),
}

impl MoviesState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, MoviesState::Loaded(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MoviesState::Error(_))
    }

    /// Movies currently on screen, if any
    pub fn movies(&self) -> Option<&[Movie]> {
        match self {
            MoviesState::Loaded(movies) => Some(movies),
            _ => None,
        }
    }
}

/// Detail panel state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedMovieState {
    Closed,
    Open(Movie),
}
