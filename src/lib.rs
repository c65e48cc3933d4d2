//! Animal API: filterable, paginated animal records over PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError};
pub use model::{Animal, AnimalFilter, AnimalPayload, ListParams, NewAnimal};
pub use response::AnimalResponse;
pub use routes::{animal_routes, build_router, common_routes_with_ready};
pub use service::{AnimalService, IndexPicker, SeededPicker, PAGE_SIZE};
pub use state::AppState;
pub use store::{ensure_animals_table, ensure_database_exists, AnimalStore, MemoryAnimalStore, PgAnimalStore};
