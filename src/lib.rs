//! Shear Magic booking server
//!
//! REST JSON API behind the Shear Magic barbershop site: catalog, slot
//! availability, appointment booking, and the barbers' admin workflow.

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
    pub services: Arc<services::Services>,
}
