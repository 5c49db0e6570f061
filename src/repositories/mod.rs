// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - The repository owns the cache policy
// - Stores stay dumb; the repository never leaks store records upward

pub mod movies_repository;

pub use movies_repository::{CacheFirstMoviesRepository, MoviesRepository};

#[cfg(test)]
pub use movies_repository::MockMoviesRepository;
