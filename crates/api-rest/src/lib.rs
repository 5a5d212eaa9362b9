//! # API REST
//!
//! REST API implementation for the persons service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS, request tracing)
//!
//! All data operations are delegated to `persons-core`.

#![warn(rust_2018_idioms)]

pub mod error;

use api_shared::{HealthRes, HealthService, ListPersonsQuery, Person, PersonReq};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use persons_core::PersonService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

pub use error::ApiError;

/// Application state for the REST API server
///
/// Shared by every request handler. Clones share the same person store.
#[derive(Clone)]
pub struct AppState {
    persons: PersonService,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_persons, get_person, create_person, update_person),
    components(schemas(HealthRes, Person, PersonReq))
)]
pub struct ApiDoc;

/// Builds the REST router around `persons`.
///
/// Routes:
/// - `GET /health`
/// - `GET /persons?pageNumber=&pageSize=`
/// - `POST /persons`
/// - `GET /persons/:id`
/// - `PUT /persons/:id`
/// - `GET /api-docs/openapi.json`
pub fn router(persons: PersonService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/persons", get(list_persons).post(create_person))
        .route("/persons/:id", get(get_person).put(update_person))
        .route("/api-docs/openapi.json", get(openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { persons })
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/persons",
    params(ListPersonsQuery),
    responses(
        (status = 200, description = "One page of persons", body = [Person]),
        (status = 500, description = "Internal server error")
    )
)]
/// List one page of persons
///
/// Persons are sorted by the configured order with the id as tie-break, then windowed by
/// `pageNumber` and `pageSize`. Missing or unparseable values fall back to their own defaults,
/// and a repeated parameter uses its first value. A page past the end is an empty array, not an
/// error.
///
/// # Errors
/// Returns `500 Internal Server Error` if the store cannot be read.
#[axum::debug_handler]
async fn list_persons(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let query = ListPersonsQuery::from_pairs(&pairs);
    let page = state
        .persons
        .page_from_params(query.page_number.as_deref(), query.page_size.as_deref());

    match state.persons.list(&page) {
        Ok(persons) => Ok(Json(persons)),
        Err(e) => Err(ApiError::from_person_error("List persons error", e)),
    }
}

#[utoipa::path(
    get,
    path = "/persons/{id}",
    params(("id" = String, Path, description = "Person id")),
    responses(
        (status = 200, description = "Person found", body = Person),
        (status = 404, description = "Unknown person id")
    )
)]
/// Fetch a single person
///
/// # Errors
/// Returns `404 Not Found` if no person has this id.
#[axum::debug_handler]
async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    match state.persons.get(&id) {
        Ok(person) => Ok(Json(person)),
        Err(e) => Err(ApiError::from_person_error("Get person error", e)),
    }
}

#[utoipa::path(
    post,
    path = "/persons",
    request_body = PersonReq,
    responses(
        (status = 201, description = "Person created", body = Person),
        (status = 400, description = "Invalid JSON or failed validation"),
        (status = 500, description = "Request body could not be read")
    )
)]
/// Create a person
///
/// The server assigns the id; any `id` in the body is ignored.
///
/// # Errors
/// Returns:
/// - `400 Bad Request` for malformed JSON or a record that fails validation (every failed rule
///   is listed)
/// - `500 Internal Server Error` if the body cannot be read
#[axum::debug_handler]
async fn create_person(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let req = decode_person_req(body)?;

    match state.persons.create(req) {
        Ok(person) => Ok((StatusCode::CREATED, Json(person))),
        Err(e) => Err(ApiError::from_person_error("Create person error", e)),
    }
}

#[utoipa::path(
    put,
    path = "/persons/{id}",
    params(("id" = String, Path, description = "Person id")),
    request_body = PersonReq,
    responses(
        (status = 201, description = "Person replaced", body = Person),
        (status = 400, description = "Invalid JSON or failed validation"),
        (status = 404, description = "Unknown person id"),
        (status = 500, description = "Request body could not be read")
    )
)]
/// Replace a person
///
/// Every field except the id is overwritten. The id comes from the path. An unknown id is
/// reported before the body is looked at.
///
/// # Errors
/// Returns:
/// - `404 Not Found` if no person has this id
/// - `400 Bad Request` for malformed JSON or a record that fails validation
/// - `500 Internal Server Error` if the body cannot be read
#[axum::debug_handler]
async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    if let Err(e) = state.persons.ensure_exists(&id) {
        return Err(ApiError::from_person_error("Update person error", e));
    }

    let req = decode_person_req(body)?;

    match state.persons.update(&id, req) {
        Ok(person) => Ok((StatusCode::CREATED, Json(person))),
        Err(e) => Err(ApiError::from_person_error("Update person error", e)),
    }
}

/// Decodes a create/update body.
///
/// A body that cannot be read maps to `500`; one that is not a valid `PersonReq` maps to `400`.
fn decode_person_req(body: Result<Bytes, BytesRejection>) -> Result<PersonReq, ApiError> {
    let bytes = match body {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Unable to read request: {}", e);
            return Err(ApiError::internal());
        }
    };

    serde_json::from_slice(&bytes).map_err(ApiError::invalid_json)
}
