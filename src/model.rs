//! Animal record, request payloads, and the list filter.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Age must be non-negative on every write path, matching `CHECK (age >= 0)`.
pub fn check_age(age: i32) -> Result<(), AppError> {
    if age < 0 {
        return Err(AppError::Validation(format!("age must be at least 0, got {}", age)));
    }
    Ok(())
}

/// One stored animal. `animal_id` is assigned by the store on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub animal_id: i32,
    pub species: String,
    pub name: String,
    pub age: i32,
}

/// Fields for an insert; the store picks the id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAnimal {
    pub species: String,
    pub name: String,
    pub age: i32,
}

impl NewAnimal {
    pub fn with_id(self, animal_id: i32) -> Animal {
        Animal {
            animal_id,
            species: self.species,
            name: self.name,
            age: self.age,
        }
    }
}

/// Request body for POST and PUT. Every field is optional here so missing fields
/// surface as a validation error instead of a deserializer rejection.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalPayload {
    pub animal_id: Option<i32>,
    pub species: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Query string for `GET /animals`.
#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Exact species match.
    pub species: Option<String>,
    /// Exact name match.
    pub name: Option<String>,
    /// Only animals at least this old; values <= 0 are ignored.
    pub minimum_age: Option<i32>,
    /// 1-based page number, defaults to 1.
    pub page: Option<i64>,
}

/// Constraints applied to list and count reads. `None` means unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimalFilter {
    pub species: Option<String>,
    pub name: Option<String>,
    pub minimum_age: Option<i32>,
}

impl AnimalFilter {
    /// Empty strings and non-positive ages impose no constraint.
    pub fn from_params(params: &ListParams) -> Self {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.is_empty()).cloned();
        AnimalFilter {
            species: non_empty(&params.species),
            name: non_empty(&params.name),
            minimum_age: params.minimum_age.filter(|age| *age > 0),
        }
    }

    pub fn matches(&self, animal: &Animal) -> bool {
        if let Some(species) = &self.species {
            if animal.species != *species {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if animal.name != *name {
                return false;
            }
        }
        if let Some(min) = self.minimum_age {
            if animal.age < min {
                return false;
            }
        }
        true
    }
}
