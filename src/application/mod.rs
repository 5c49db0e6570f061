// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the use cases and never talks to stores directly
// - Exposes observable state for whatever front-end drives it
// - Translates failures into one user-facing error shape

pub mod error_handling;
pub mod movies_state;
pub mod movies_view_model;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType, GENERIC_ERROR_MESSAGE};
pub use movies_state::{MoviesState, SelectedMovieState};
pub use movies_view_model::MoviesViewModel;
pub use state::AppState;
