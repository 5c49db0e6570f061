// src/repositories/movies_repository.rs
//
// Movies repository - cache-first access to the catalogue
//
// CACHE POLICY:
// - A non-empty local cache always wins (no freshness check, no TTL)
// - An empty cache triggers exactly one remote fetch, written through
// - The freshly fetched list is returned as-is, not re-read from the cache

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Movie, MovieId};
use crate::error::{AppError, AppResult};
use crate::stores::{LikedIdsStream, MoviesLocalStore, MoviesMapper, MoviesRestStore};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoviesRepository: Send + Sync {
    async fn get_movies(&self) -> AppResult<Vec<Movie>>;

    async fn get_movie(&self, id: MovieId) -> AppResult<Movie>;

    fn observe_liked_movie_ids(&self) -> LikedIdsStream;

    async fn add_movie_to_favorites(&self, movie_id: MovieId) -> AppResult<()>;

    async fn remove_movie_from_favorites(&self, movie_id: MovieId) -> AppResult<()>;
}

pub struct CacheFirstMoviesRepository {
    local_store: Arc<dyn MoviesLocalStore>,
    rest_store: Arc<dyn MoviesRestStore>,
    mapper: MoviesMapper,
}

impl CacheFirstMoviesRepository {
    pub fn new(
        local_store: Arc<dyn MoviesLocalStore>,
        rest_store: Arc<dyn MoviesRestStore>,
        mapper: MoviesMapper,
    ) -> Self {
        Self {
            local_store,
            rest_store,
            mapper,
        }
    }
}

#[async_trait]
impl MoviesRepository for CacheFirstMoviesRepository {
    async fn get_movies(&self) -> AppResult<Vec<Movie>> {
        let local_movies = self.local_store.get_movies().await?;
        if !local_movies.is_empty() {
            log::debug!("Serving {} movies from local cache", local_movies.len());
            return Ok(local_movies
                .into_iter()
                .map(|record| self.mapper.map_from_local(record))
                .collect());
        }

        log::debug!("Local cache empty, falling back to remote store");
        let remote_movies = self.rest_store.get_movies().await?;
        let records = remote_movies
            .iter()
            .map(|movie| self.mapper.map_to_local(movie))
            .collect();
        self.local_store.insert_movies(records).await?;

        Ok(remote_movies)
    }

    async fn get_movie(&self, id: MovieId) -> AppResult<Movie> {
        let record = self
            .local_store
            .get_movie(id)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(self.mapper.map_from_local(record))
    }

    fn observe_liked_movie_ids(&self) -> LikedIdsStream {
        self.local_store.observe_liked_movie_ids()
    }

    async fn add_movie_to_favorites(&self, movie_id: MovieId) -> AppResult<()> {
        self.local_store.like_movie(movie_id).await
    }

    async fn remove_movie_from_favorites(&self, movie_id: MovieId) -> AppResult<()> {
        self.local_store.dislike_movie(movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::{MockMoviesLocalStore, MockMoviesRestStore, MovieRecord};
    use futures::StreamExt;
    use mockall::predicate::eq;

    fn record(id: MovieId, title: &str, poster_path: Option<&str>) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            description: format!("Description {}", id),
            poster_path: poster_path.map(str::to_string),
        }
    }

    fn repository(
        local_store: MockMoviesLocalStore,
        rest_store: MockMoviesRestStore,
    ) -> CacheFirstMoviesRepository {
        CacheFirstMoviesRepository::new(
            Arc::new(local_store),
            Arc::new(rest_store),
            MoviesMapper::new(),
        )
    }

    #[tokio::test]
    async fn test_retrieve_movies_from_local_cache_if_available() {
        let mut local_store = MockMoviesLocalStore::new();
        let mut rest_store = MockMoviesRestStore::new();
        local_store
            .expect_get_movies()
            .times(1)
            .returning(|| Ok(vec![record(1, "Movie 1", Some("path1"))]));
        local_store.expect_insert_movies().never();
        rest_store.expect_get_movies().never();

        let movies = repository(local_store, rest_store).get_movies().await.unwrap();

        assert_eq!(
            movies,
            vec![Movie::new(1, "Movie 1", "Description 1", Some("path1".to_string()))]
        );
    }

    #[tokio::test]
    async fn test_fetch_movies_when_cache_is_empty() {
        let mut local_store = MockMoviesLocalStore::new();
        let mut rest_store = MockMoviesRestStore::new();
        local_store
            .expect_get_movies()
            .times(1)
            .returning(|| Ok(Vec::new()));
        rest_store
            .expect_get_movies()
            .times(1)
            .returning(|| Ok(vec![Movie::new(1, "A", "d", None)]));
        local_store
            .expect_insert_movies()
            .with(eq(vec![MovieRecord {
                id: 1,
                title: "A".to_string(),
                description: "d".to_string(),
                poster_path: None,
            }]))
            .times(1)
            .returning(|_| Ok(()));

        let movies = repository(local_store, rest_store).get_movies().await.unwrap();

        assert_eq!(movies, vec![Movie::new(1, "A", "d", None)]);
        assert!(!movies[0].liked);
    }

    #[tokio::test]
    async fn test_remote_list_is_returned_without_rereading_cache() {
        let mut local_store = MockMoviesLocalStore::new();
        let mut rest_store = MockMoviesRestStore::new();
        // A second read would see an empty cache again and trigger another fetch
        local_store
            .expect_get_movies()
            .times(1)
            .returning(|| Ok(Vec::new()));
        rest_store.expect_get_movies().times(1).returning(|| {
            Ok(vec![
                Movie::new(3, "C", "c", None),
                Movie::new(2, "B", "b", None),
            ])
        });
        local_store
            .expect_insert_movies()
            .times(1)
            .returning(|_| Ok(()));

        let movies = repository(local_store, rest_store).get_movies().await.unwrap();

        let ids: Vec<MovieId> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[tokio::test]
    async fn test_return_error_when_local_store_fails() {
        let mut local_store = MockMoviesLocalStore::new();
        let mut rest_store = MockMoviesRestStore::new();
        local_store
            .expect_get_movies()
            .returning(|| Err(AppError::Other("Database error".to_string())));
        rest_store.expect_get_movies().never();

        let result = repository(local_store, rest_store).get_movies().await;

        assert!(matches!(result, Err(AppError::Other(msg)) if msg == "Database error"));
    }

    #[tokio::test]
    async fn test_return_error_when_remote_fetch_fails() {
        let mut local_store = MockMoviesLocalStore::new();
        let mut rest_store = MockMoviesRestStore::new();
        local_store.expect_get_movies().returning(|| Ok(Vec::new()));
        rest_store
            .expect_get_movies()
            .returning(|| Err(AppError::Http("offline".to_string())));
        local_store.expect_insert_movies().never();

        let result = repository(local_store, rest_store).get_movies().await;

        assert!(matches!(result, Err(AppError::Http(_))));
    }

    #[tokio::test]
    async fn test_return_error_when_write_through_fails() {
        let mut local_store = MockMoviesLocalStore::new();
        let mut rest_store = MockMoviesRestStore::new();
        local_store.expect_get_movies().returning(|| Ok(Vec::new()));
        rest_store
            .expect_get_movies()
            .returning(|| Ok(vec![Movie::new(1, "A", "d", None)]));
        local_store
            .expect_insert_movies()
            .returning(|_| Err(AppError::Other("disk full".to_string())));

        let result = repository(local_store, rest_store).get_movies().await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_movie_from_cache() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store
            .expect_get_movie()
            .with(eq(1))
            .returning(|_| Ok(Some(record(1, "Movie 1", Some("path1")))));

        let movie = repository(local_store, MockMoviesRestStore::new())
            .get_movie(1)
            .await
            .unwrap();

        assert_eq!(
            movie,
            Movie::new(1, "Movie 1", "Description 1", Some("path1".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_movie_error() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store.expect_get_movie().with(eq(1)).returning(|_| Ok(None));

        let result = repository(local_store, MockMoviesRestStore::new())
            .get_movie(1)
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_observe_liked_ids_delegates_to_local_store() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store
            .expect_observe_liked_movie_ids()
            .times(1)
            .returning(|| futures::stream::iter(vec![Ok(vec![1, 2])]).boxed());

        let repository = repository(local_store, MockMoviesRestStore::new());
        let snapshots: Vec<_> = repository.observe_liked_movie_ids().collect().await;

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].as_ref().unwrap(), &vec![1, 2]);
    }

    #[tokio::test]
    async fn test_add_movie_to_favorites() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store
            .expect_like_movie()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        repository(local_store, MockMoviesRestStore::new())
            .add_movie_to_favorites(1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_add_movie_to_favorites_returns_store_error() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store
            .expect_like_movie()
            .with(eq(1))
            .times(1)
            .returning(|_| Err(AppError::Other("Failed to add".to_string())));

        let result = repository(local_store, MockMoviesRestStore::new())
            .add_movie_to_favorites(1)
            .await;

        assert!(matches!(result, Err(AppError::Other(msg)) if msg == "Failed to add"));
    }

    #[tokio::test]
    async fn test_remove_movie_from_favorites() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store
            .expect_dislike_movie()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        repository(local_store, MockMoviesRestStore::new())
            .remove_movie_from_favorites(1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_remove_movie_from_favorites_returns_store_error() {
        let mut local_store = MockMoviesLocalStore::new();
        local_store
            .expect_dislike_movie()
            .with(eq(1))
            .times(1)
            .returning(|_| Err(AppError::Other("Failed to remove".to_string())));

        let result = repository(local_store, MockMoviesRestStore::new())
            .remove_movie_from_favorites(1)
            .await;

        assert!(matches!(result, Err(AppError::Other(msg)) if msg == "Failed to remove"));
    }
}
