//! OpenAPI document for the animal routes.

use crate::handlers::animals;
use crate::model::{Animal, AnimalPayload};
use crate::response::AnimalResponse;
use utoipa::openapi::server::Server;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Animal API", description = "Filterable, paginated animal records"),
    paths(
        animals::list,
        animals::read,
        animals::create,
        animals::update,
        animals::delete,
        animals::random,
    ),
    components(schemas(Animal, AnimalPayload, AnimalResponse)),
    tags((name = "animals", description = "Animal records"))
)]
pub struct ApiDoc;

/// Document with the animal paths served under `api_base`.
pub fn document(api_base: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![Server::new(api_base)]);
    doc
}
