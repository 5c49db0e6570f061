use serde::{Deserialize, Serialize};

/// Identifier shared by the catalogue, the local cache and the liked set
pub type MovieId = i64;

/// A movie as presented to the rest of the application.
///
/// `liked` is derived from the liked-ids set at read time and is never
/// stored on the movie record itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    pub poster_path: Option<String>,
    pub liked: bool,
}

impl Movie {
    /// Create a movie that is not (yet) marked as liked
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        description: impl Into<String>,
        poster_path: Option<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            poster_path,
            liked: false,
        }
    }

    /// Copy of this movie with the liked flag replaced
    pub fn with_liked(&self, liked: bool) -> Self {
        Self {
            liked,
            ..self.clone()
        }
    }
}
