//! Animal operations over an injected record store.

use super::random::IndexPicker;
use super::validation::RequestValidator;
use crate::error::AppError;
use crate::model::{Animal, AnimalFilter, AnimalPayload, ListParams};
use crate::response::AnimalResponse;
use crate::store::AnimalStore;

/// Fixed number of animals per list page.
pub const PAGE_SIZE: i64 = 3;

const RANDOM_DRAWS: u32 = 2;

pub struct AnimalService;

impl AnimalService {
    /// Filtered page. The total is counted before paging; page defaults to 1.
    pub async fn list(store: &dyn AnimalStore, params: &ListParams) -> Result<AnimalResponse, AppError> {
        let filter = AnimalFilter::from_params(params);
        let current_page = params.page.unwrap_or(1);
        if current_page < 1 {
            return Err(AppError::BadRequest(format!(
                "page must be at least 1, got {}",
                current_page
            )));
        }
        let offset = (current_page - 1)
            .checked_mul(PAGE_SIZE)
            .ok_or_else(|| AppError::BadRequest("page out of range".into()))?;

        let page_items = store.count(&filter).await?;
        let animals = store.page(&filter, offset, PAGE_SIZE).await?;
        Ok(AnimalResponse {
            animals,
            current_page,
            page_items,
            page_size: PAGE_SIZE,
        })
    }

    pub async fn get(store: &dyn AnimalStore, id: i32) -> Result<Animal, AppError> {
        store
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("animal {}", id)))
    }

    /// Insert a new animal. Any id in the body is ignored.
    pub async fn create(store: &dyn AnimalStore, body: &AnimalPayload) -> Result<Animal, AppError> {
        let new = RequestValidator::validate(body)?;
        let created = store.insert(&new).await?;
        tracing::info!(animal_id = created.animal_id, species = %created.species, "animal created");
        Ok(created)
    }

    /// Full replace of animal `id`. The body id must equal `id`.
    ///
    /// A replace that writes nothing is resolved by re-checking existence: a missing
    /// row is [`AppError::NotFound`], a present one is returned as
    /// [`AppError::ConcurrencyConflict`] without retrying.
    pub async fn update(store: &dyn AnimalStore, id: i32, body: &AnimalPayload) -> Result<(), AppError> {
        if body.animal_id != Some(id) {
            return Err(AppError::BadRequest(format!(
                "path id {} does not match body id {}",
                id,
                body.animal_id
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "(none)".into())
            )));
        }
        let animal = RequestValidator::validate(body)?.with_id(id);
        match store.replace(&animal).await {
            Ok(()) => {
                tracing::info!(animal_id = id, "animal updated");
                Ok(())
            }
            Err(AppError::ConcurrencyConflict { .. }) => {
                if !store.exists(id).await? {
                    return Err(AppError::NotFound(format!("animal {}", id)));
                }
                tracing::warn!(animal_id = id, "update lost a concurrent write race");
                Err(AppError::ConcurrencyConflict { id })
            }
            Err(e) => Err(e),
        }
    }

    pub async fn delete(store: &dyn AnimalStore, id: i32) -> Result<(), AppError> {
        if !store.delete(id).await? {
            return Err(AppError::NotFound(format!("animal {}", id)));
        }
        tracing::info!(animal_id = id, "animal deleted");
        Ok(())
    }

    /// Uniform pick: count, draw an offset, read that single row.
    ///
    /// Rows deleted between count and read can leave the offset past the end; the
    /// draw is repeated once against a fresh count before giving up.
    pub async fn random(store: &dyn AnimalStore, picker: &dyn IndexPicker) -> Result<Animal, AppError> {
        let all = AnimalFilter::default();
        for attempt in 1..=RANDOM_DRAWS {
            let count = store.count(&all).await?;
            if count <= 0 {
                return Err(AppError::EmptyCollection);
            }
            let offset = picker.pick(count as u64) as i64;
            if let Some(animal) = store.page(&all, offset, 1).await?.into_iter().next() {
                return Ok(animal);
            }
            tracing::debug!(attempt, offset, count, "random offset past the end");
        }
        Err(AppError::Internal(
            "random pick kept missing rows removed by concurrent deletes".into(),
        ))
    }
}
