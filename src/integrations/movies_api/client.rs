// src/integrations/movies_api/client.rs
//
// Movie catalogue API client
//
// ARCHITECTURE:
// - Plain JSON over HTTP: GET {base_url}/movies
// - Maps wire DTOs → domain movies (never touches the local cache)
// - Used by the movies repository as its remote store

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::domain::{Movie, MovieId};
use crate::error::{AppError, AppResult};
use crate::stores::MoviesRestStore;

/// Movie as served by the catalogue API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MovieData {
    id: MovieId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    poster_path: Option<String>,
}

/// Catalogue API client
pub struct MoviesApiClient {
    base_url: String,
    http_client: Client,
    auth_token: Option<String>,
}

impl MoviesApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
            auth_token: None,
        })
    }

    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = Self::new(config.api_url.clone(), config.http_timeout)?;
        Ok(match &config.api_token {
            Some(token) => client.with_auth(token.clone()),
            None => client,
        })
    }

    /// Attach a bearer token to every request
    pub fn with_auth(mut self, token: String) -> Self {
        self.auth_token = Some(token);
        self
    }

    fn movies_url(&self) -> String {
        format!("{}/movies", self.base_url)
    }

    /// Fetch the whole catalogue
    pub async fn fetch_movies(&self) -> AppResult<Vec<Movie>> {
        let mut request = self
            .http_client
            .get(self.movies_url())
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &self.auth_token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(AppError::Http(format!(
                "Movies API returned status: {}",
                response.status()
            )));
        }

        let body = response.bytes().await?;
        let payload: Vec<MovieData> = serde_json::from_slice(&body)?;

        Ok(payload.into_iter().map(Self::map_movie).collect())
    }

    fn map_movie(data: MovieData) -> Movie {
        Movie::new(data.id, data.title, data.description, data.poster_path)
    }
}

#[async_trait]
impl MoviesRestStore for MoviesApiClient {
    async fn get_movies(&self) -> AppResult<Vec<Movie>> {
        log::info!("Fetching movie catalogue from {}", self.movies_url());
        let movies = self.fetch_movies().await?;
        log::info!("Fetched {} movies", movies.len());
        Ok(movies)
    }
}
