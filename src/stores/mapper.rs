// src/stores/mapper.rs

use super::local_store::MovieRecord;
use crate::domain::Movie;

/// Converts between the cached record and the domain movie.
///
/// The liked flag is not part of the record: `map_from_local` always yields
/// an unliked movie and `map_to_local` drops the flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoviesMapper;

impl MoviesMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_to_local(&self, movie: &Movie) -> MovieRecord {
        MovieRecord {
            id: movie.id,
            title: movie.title.clone(),
            description: movie.description.clone(),
            poster_path: movie.poster_path.clone(),
        }
    }

    pub fn map_from_local(&self, record: MovieRecord) -> Movie {
        Movie {
            id: record.id,
            title: record.title,
            description: record.description,
            poster_path: record.poster_path,
            liked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liked_flag_is_not_persisted() {
        let mapper = MoviesMapper::new();
        let movie = Movie::new(1, "Ran", "Kurosawa", Some("/ran.jpg".to_string())).with_liked(true);

        let record = mapper.map_to_local(&movie);
        let restored = mapper.map_from_local(record);

        assert_eq!(restored, movie.with_liked(false));
    }
}
