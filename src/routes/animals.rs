//! Animal resource routes. Mounted under the API prefix by [`super::build_router`].

use crate::handlers::animals::{create, delete as delete_handler, list, random, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn animal_routes(state: AppState) -> Router {
    Router::new()
        .route("/animals", get(list).post(create))
        .route("/animals/random", get(random))
        .route("/animals/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
