//! Animal handlers: list, read, create, update, delete, random.

use crate::error::AppError;
use crate::model::{AnimalPayload, ListParams};
use crate::response::{created, success_ok};
use crate::service::AnimalService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/animals",
    params(ListParams),
    responses(
        (status = 200, description = "One page of matching animals", body = crate::response::AnimalResponse),
        (status = 400, description = "Invalid page or query parameter"),
    ),
    tag = "animals"
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = AnimalService::list(state.store.as_ref(), &params).await?;
    Ok(success_ok(page))
}

#[utoipa::path(
    get,
    path = "/animals/{id}",
    params(("id" = i32, Path, description = "Animal id")),
    responses(
        (status = 200, description = "The animal", body = crate::model::Animal),
        (status = 404, description = "No animal with this id"),
    ),
    tag = "animals"
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let animal = AnimalService::get(state.store.as_ref(), id).await?;
    Ok(success_ok(animal))
}

#[utoipa::path(
    post,
    path = "/animals",
    request_body = AnimalPayload,
    responses(
        (status = 201, description = "Created; Location points at the new animal", body = crate::model::Animal),
        (status = 422, description = "Missing required fields"),
    ),
    tag = "animals"
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<AnimalPayload>,
) -> Result<impl IntoResponse, AppError> {
    let animal = AnimalService::create(state.store.as_ref(), &body).await?;
    Ok(created(state.animal_location(animal.animal_id), animal))
}

#[utoipa::path(
    put,
    path = "/animals/{id}",
    params(("id" = i32, Path, description = "Animal id; must equal the body animalId")),
    request_body = AnimalPayload,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Path id and body id differ"),
        (status = 404, description = "No animal with this id"),
        (status = 422, description = "Missing required fields"),
    ),
    tag = "animals"
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<AnimalPayload>,
) -> Result<impl IntoResponse, AppError> {
    AnimalService::update(state.store.as_ref(), id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/animals/{id}",
    params(("id" = i32, Path, description = "Animal id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "No animal with this id"),
    ),
    tag = "animals"
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AnimalService::delete(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/animals/random",
    responses(
        (status = 200, description = "A uniformly chosen animal", body = crate::model::Animal),
        (status = 404, description = "There are no animals"),
    ),
    tag = "animals"
)]
pub async fn random(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let animal = AnimalService::random(state.store.as_ref(), state.picker.as_ref()).await?;
    Ok(success_ok(animal))
}
