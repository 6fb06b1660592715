//! Catalog service (barbers and services)
//!
//! The catalog is what the public booking page renders first, so a store
//! failure here degrades to a fixed list instead of an error.

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::catalog::{Barber, Service},
    repository::CatalogStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// List barbers, falling back to the built-in list when the store fails
    pub async fn list_barbers(&self) -> Vec<Barber> {
        match self.store.list_barbers().await {
            Ok(barbers) => barbers,
            Err(e) => {
                tracing::error!("Failed to fetch barbers, serving fallback list: {}", e);
                Barber::fallback()
            }
        }
    }

    /// List services, falling back to the built-in list when the store fails
    pub async fn list_services(&self) -> Vec<Service> {
        match self.store.list_services().await {
            Ok(services) => services,
            Err(e) => {
                tracing::error!("Failed to fetch services, serving fallback list: {}", e);
                Service::fallback()
            }
        }
    }

    pub async fn get_barber(&self, id: i32) -> AppResult<Barber> {
        self.store
            .get_barber(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Barber {} not found", id)))
    }

    pub async fn get_service(&self, id: i32) -> AppResult<Service> {
        self.store
            .get_service(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }
}
