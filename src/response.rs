//! Response shapes: the list page projection and the 201 helper.

use crate::model::Animal;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// One page of a filtered list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalResponse {
    pub animals: Vec<Animal>,
    /// 1-based page number.
    pub current_page: i64,
    /// Total animals matching the filter, across all pages.
    pub page_items: i64,
    pub page_size: i64,
}

/// 201 with a `Location` header and the created body.
pub fn created<T: Serialize>(location: String, data: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(data),
    )
        .into_response()
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}
