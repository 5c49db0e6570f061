// src/stores/mod.rs
//
// Data sources behind the movies repository

pub mod local_store;
pub mod mapper;
pub mod remote_store;
pub mod sqlite_local_store;

pub use local_store::{LikedIdsStream, MovieRecord, MoviesLocalStore};
pub use mapper::MoviesMapper;
pub use remote_store::MoviesRestStore;
pub use sqlite_local_store::SqliteMoviesLocalStore;

#[cfg(test)]
pub use local_store::MockMoviesLocalStore;
#[cfg(test)]
pub use remote_store::MockMoviesRestStore;
