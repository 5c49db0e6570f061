// src/integrations/mod.rs
//
// External Integrations Module

pub mod movies_api;

pub use movies_api::client::MoviesApiClient;
