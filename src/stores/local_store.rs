// src/stores/local_store.rs
//
// Local cache contract
//
// RULES:
// - Stores are DUMB data mappers
// - NO cache policy (that belongs to the repository)
// - Every fallible call returns AppResult

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::domain::MovieId;
use crate::error::AppResult;

/// Persisted shape of a movie. The liked flag lives in its own table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub poster_path: Option<String>,
}

/// Live sequence of liked-id snapshots, ascending by id
pub type LikedIdsStream = BoxStream<'static, AppResult<Vec<MovieId>>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoviesLocalStore: Send + Sync {
    async fn get_movies(&self) -> AppResult<Vec<MovieRecord>>;

    async fn get_movie(&self, id: MovieId) -> AppResult<Option<MovieRecord>>;

    /// Insert or replace every record
    async fn insert_movies(&self, records: Vec<MovieRecord>) -> AppResult<()>;

    async fn like_movie(&self, id: MovieId) -> AppResult<()>;

    async fn dislike_movie(&self, id: MovieId) -> AppResult<()>;

    /// Every call returns an independent stream that starts with the current
    /// snapshot and yields a new one after each like/dislike.
    fn observe_liked_movie_ids(&self) -> LikedIdsStream;
}
