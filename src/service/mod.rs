//! AnimalService: list/get/create/update/delete/random over a record store.

mod animals;
mod random;
mod validation;
pub use animals::{AnimalService, PAGE_SIZE};
pub use random::{IndexPicker, SeededPicker};
pub use validation::RequestValidator;
