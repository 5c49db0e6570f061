// src/stores/sqlite_local_store.rs
//
// SQLite-backed local cache
//
// Every query runs on the blocking pool via `spawn_blocking`; callers stay on
// their own task and simply await the result.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use rusqlite::{params, Connection, Row};
use tokio::sync::broadcast::{self, error::RecvError};

use super::local_store::{LikedIdsStream, MovieRecord, MoviesLocalStore};
use crate::db::{get_connection, ConnectionPool};
use crate::domain::MovieId;
use crate::error::{AppError, AppResult};

/// Buffered liked-set change notifications per subscriber
const LIKED_CHANGES_CAPACITY: usize = 64;

pub struct SqliteMoviesLocalStore {
    pool: Arc<ConnectionPool>,
    liked_changes: broadcast::Sender<()>,
}

impl SqliteMoviesLocalStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let (liked_changes, _) = broadcast::channel(LIKED_CHANGES_CAPACITY);
        Self {
            pool,
            liked_changes,
        }
    }

    fn row_to_record(row: &Row) -> Result<MovieRecord, rusqlite::Error> {
        Ok(MovieRecord {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            poster_path: row.get("poster_path")?,
        })
    }

    /// Run `op` against a pooled connection on the blocking thread pool
    async fn with_connection<T, F>(pool: Arc<ConnectionPool>, op: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> AppResult<T> + Send + 'static,
    {
        tokio::task::spawn_blocking(move || {
            let mut conn = get_connection(&pool)?;
            op(&mut *conn)
        })
        .await?
    }

    async fn query_liked_ids(pool: Arc<ConnectionPool>) -> AppResult<Vec<MovieId>> {
        Self::with_connection(pool, |conn| {
            let mut stmt = conn.prepare("SELECT movie_id FROM liked_movies ORDER BY movie_id")?;
            let ids = stmt
                .query_map([], |row| row.get(0))?
                .collect::<Result<Vec<MovieId>, _>>()?;
            Ok(ids)
        })
        .await
    }

    fn notify_liked_changed(&self) {
        // Err only means nobody is observing right now
        let _ = self.liked_changes.send(());
    }
}

#[async_trait]
impl MoviesLocalStore for SqliteMoviesLocalStore {
    async fn get_movies(&self) -> AppResult<Vec<MovieRecord>> {
        Self::with_connection(Arc::clone(&self.pool), |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, poster_path
                 FROM movies
                 ORDER BY id",
            )?;
            let records = stmt
                .query_map([], Self::row_to_record)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(records)
        })
        .await
    }

    async fn get_movie(&self, id: MovieId) -> AppResult<Option<MovieRecord>> {
        Self::with_connection(Arc::clone(&self.pool), move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, poster_path
                 FROM movies WHERE id = ?1",
            )?;

            match stmt.query_row(params![id], Self::row_to_record) {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(AppError::Database(e)),
            }
        })
        .await
    }

    async fn insert_movies(&self, records: Vec<MovieRecord>) -> AppResult<()> {
        let count = records.len();
        Self::with_connection(Arc::clone(&self.pool), move |conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare(
                    "INSERT OR REPLACE INTO movies (id, title, description, poster_path)
                     VALUES (?1, ?2, ?3, ?4)",
                )?;
                for record in &records {
                    stmt.execute(params![
                        record.id,
                        record.title,
                        record.description,
                        record.poster_path,
                    ])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await?;

        log::debug!("Cached {} movie records", count);
        Ok(())
    }

    async fn like_movie(&self, id: MovieId) -> AppResult<()> {
        Self::with_connection(Arc::clone(&self.pool), move |conn| {
            conn.execute(
                "INSERT OR IGNORE INTO liked_movies (movie_id) VALUES (?1)",
                params![id],
            )?;
            Ok(())
        })
        .await?;

        self.notify_liked_changed();
        Ok(())
    }

    async fn dislike_movie(&self, id: MovieId) -> AppResult<()> {
        Self::with_connection(Arc::clone(&self.pool), move |conn| {
            conn.execute("DELETE FROM liked_movies WHERE movie_id = ?1", params![id])?;
            Ok(())
        })
        .await?;

        self.notify_liked_changed();
        Ok(())
    }

    fn observe_liked_movie_ids(&self) -> LikedIdsStream {
        // Subscribe before the first query so no change can slip in between
        let changes = self.liked_changes.subscribe();
        let pool = Arc::clone(&self.pool);

        stream::unfold(
            (pool, changes, true),
            |(pool, mut changes, first)| async move {
                if !first {
                    match changes.recv().await {
                        Ok(()) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            log::debug!("Liked-ids observer lagged by {} changes", skipped);
                        }
                        Err(RecvError::Closed) => return None,
                    }
                }

                let snapshot = Self::query_liked_ids(Arc::clone(&pool)).await;
                Some((snapshot, (pool, changes, false)))
            },
        )
        .boxed()
    }
}
