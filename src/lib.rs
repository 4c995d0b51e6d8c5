//! Folium Library Catalog
//!
//! A Rust implementation of the Folium library catalog server, exposing
//! list/detail/create/delete views over authors, books, book instances and
//! genres as a JSON API for the rendering front end.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
