//! Record store seam: the persistence operations the animal service consumes.

mod memory;
mod postgres;

pub use memory::MemoryAnimalStore;
pub use postgres::{ensure_animals_table, ensure_database_exists, PgAnimalStore};

use crate::error::AppError;
use crate::model::{Animal, AnimalFilter, NewAnimal};
use async_trait::async_trait;

#[async_trait]
pub trait AnimalStore: Send + Sync {
    /// Number of rows matching the filter.
    async fn count(&self, filter: &AnimalFilter) -> Result<i64, AppError>;

    /// Filtered rows ordered by id, skipping `offset` and returning at most `limit`.
    async fn page(&self, filter: &AnimalFilter, offset: i64, limit: i64) -> Result<Vec<Animal>, AppError>;

    async fn find(&self, id: i32) -> Result<Option<Animal>, AppError>;

    async fn exists(&self, id: i32) -> Result<bool, AppError>;

    /// Insert and return the stored row with its assigned id.
    async fn insert(&self, animal: &NewAnimal) -> Result<Animal, AppError>;

    /// Replace every field of `animal.animal_id`. Returns
    /// [`AppError::ConcurrencyConflict`] when no row was written.
    async fn replace(&self, animal: &Animal) -> Result<(), AppError>;

    /// Returns false when there was nothing to delete.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;

    /// Connectivity probe for readiness.
    async fn ping(&self) -> Result<(), AppError>;
}
