// src/domain/mod.rs
//
// Domain Root
//
// All other modules import domain types from `crate::domain::*`

pub mod movie;

pub use movie::{Movie, MovieId};
