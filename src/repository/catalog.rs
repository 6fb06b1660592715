//! Catalog reads (barbers, services)

use async_trait::async_trait;

use super::Repository;
use crate::{
    error::AppResult,
    models::catalog::{Barber, Service},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_barbers(&self) -> AppResult<Vec<Barber>>;
    async fn get_barber(&self, id: i32) -> AppResult<Option<Barber>>;
    async fn list_services(&self) -> AppResult<Vec<Service>>;
    async fn get_service(&self, id: i32) -> AppResult<Option<Service>>;
}

#[async_trait]
impl CatalogStore for Repository {
    /// List all barbers, ordered by ID
    async fn list_barbers(&self) -> AppResult<Vec<Barber>> {
        let rows = sqlx::query_as::<_, Barber>(
            "SELECT id, name, title, bio, image_url FROM barbers ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_barber(&self, id: i32) -> AppResult<Option<Barber>> {
        let row = sqlx::query_as::<_, Barber>(
            "SELECT id, name, title, bio, image_url FROM barbers WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// List all services, ordered by ID
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, Service>("SELECT * FROM services ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_service(&self, id: i32) -> AppResult<Option<Service>> {
        let row = sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
