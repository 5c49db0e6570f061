// src/services/observe_movies.rs
//
// Observe Movies - the movie list with a live liked flag
//
// RULES:
// - The movie list is fetched once per subscription
// - Every liked-ids snapshot produces one emission, in source order
// - A failed fetch is emitted once and ends the subscription

use std::collections::HashSet;
use std::sync::Arc;

use futures::future;
use futures::stream::{self, BoxStream, StreamExt};

use crate::domain::{Movie, MovieId};
use crate::error::AppResult;
use crate::repositories::MoviesRepository;

/// Continuous sequence of movie-list outcomes
pub type MoviesStream = BoxStream<'static, AppResult<Vec<Movie>>>;

pub struct ObserveMoviesUseCase {
    repository: Arc<dyn MoviesRepository>,
}

impl ObserveMoviesUseCase {
    pub fn new(repository: Arc<dyn MoviesRepository>) -> Self {
        Self { repository }
    }

    /// Start an independent subscription
    pub fn invoke(&self) -> MoviesStream {
        let repository = Arc::clone(&self.repository);

        stream::once(async move {
            match repository.get_movies().await {
                Ok(movies) => repository
                    .observe_liked_movie_ids()
                    .map(move |snapshot| {
                        snapshot.map(|liked_ids| apply_liked_status(&movies, &liked_ids))
                    })
                    .boxed(),
                Err(e) => {
                    log::warn!("Movie list unavailable: {}", e);
                    stream::once(future::ready(Err(e))).boxed()
                }
            }
        })
        .flatten()
        .boxed()
    }
}

/// Recompute every movie's liked flag from one snapshot.
///
/// Movie order is preserved. Liked ids without a matching movie are ignored.
pub fn apply_liked_status(movies: &[Movie], liked_ids: &[MovieId]) -> Vec<Movie> {
    let liked: HashSet<MovieId> = liked_ids.iter().copied().collect();
    movies
        .iter()
        .map(|movie| movie.with_liked(liked.contains(&movie.id)))
        .collect()
}
