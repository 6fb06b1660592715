//! Repository layer for database operations
//!
//! Each domain file declares a store trait and implements it for
//! [`Repository`]; services depend on the traits only.

pub mod appointments;
pub mod catalog;
pub mod schedules;
pub mod seed;
pub mod users;

use sqlx::{Pool, Postgres};

pub use appointments::AppointmentStore;
pub use catalog::CatalogStore;
pub use schedules::ScheduleStore;
pub use users::UserStore;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Round-trip to the database, used by the readiness probe
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
