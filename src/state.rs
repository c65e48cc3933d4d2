//! Shared application state for all routes.

use crate::service::IndexPicker;
use crate::store::AnimalStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnimalStore>,
    pub picker: Arc<dyn IndexPicker>,
    /// Prefix the animal routes are mounted under (e.g. `/api/v2`); used for `Location`.
    pub api_base: String,
}

impl AppState {
    pub fn new(store: Arc<dyn AnimalStore>, picker: Arc<dyn IndexPicker>, api_base: impl Into<String>) -> Self {
        AppState {
            store,
            picker,
            api_base: api_base.into(),
        }
    }

    pub fn animal_location(&self, id: i32) -> String {
        format!("{}/animals/{}", self.api_base.trim_end_matches('/'), id)
    }
}
