//! Request validation: presence checks on animal payloads.

use crate::error::AppError;
use crate::model::{check_age, AnimalPayload, NewAnimal};

pub struct RequestValidator;

impl RequestValidator {
    /// All of species, name and age must be present, age non-negative. Any body id is ignored.
    pub fn validate(body: &AnimalPayload) -> Result<NewAnimal, AppError> {
        let mut missing = Vec::new();
        if body.species.is_none() {
            missing.push("species");
        }
        if body.name.is_none() {
            missing.push("name");
        }
        if body.age.is_none() {
            missing.push("age");
        }
        match (&body.species, &body.name, body.age) {
            (Some(species), Some(name), Some(age)) => {
                check_age(age)?;
                Ok(NewAnimal {
                    species: species.clone(),
                    name: name.clone(),
                    age,
                })
            }
            _ => Err(AppError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}
