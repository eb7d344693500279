use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{
        CreateNoteRequest, ErrorResponse, MessageResponse, NoteEnvelope, NoteListEnvelope,
        NoteResponse, UpdateNoteRequest, ValidationErrorResponse,
    },
    service::{NoteError, NoteService},
    validation::FieldErrors,
};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, update_note, delete_note, get_one_note, get_all_notes),
    components(schemas(
        NoteResponse,
        CreateNoteRequest,
        UpdateNoteRequest,
        NoteEnvelope,
        NoteListEnvelope,
        MessageResponse,
        ValidationErrorResponse,
        ErrorResponse
    )),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

pub async fn root() -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Notes API is working!".to_owned(),
        }),
    )
        .into_response()
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteEnvelope),
        (status = 422, description = "Validation failed", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Response {
    match service.create_note(payload).await {
        Ok(note) => (StatusCode::CREATED, Json(NoteEnvelope { data: note })).into_response(),
        Err(NoteError::Validation(errors)) => validation_failed(errors),
        Err(e) => {
            tracing::error!("failed to create note entry: {e}");
            internal_error(&e)
        }
    }
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated successfully", body = NoteEnvelope),
        (status = 422, description = "Validation failed", body = ValidationErrorResponse),
        (status = 404, description = "Note not found", body = MessageResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Response {
    match service.update_note(id, payload).await {
        Ok(note) => (StatusCode::OK, Json(NoteEnvelope { data: note })).into_response(),
        Err(NoteError::Validation(errors)) => validation_failed(errors),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            // Point lookups report persistence failures as absence.
            tracing::error!("failed to update note entry: {e}");
            not_found()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note deleted successfully", body = MessageResponse),
        (status = 404, description = "Note not found", body = MessageResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(State(service): State<Arc<NoteService>>, Path(id): Path<i64>) -> Response {
    match service.delete_note(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Note deleted successfully".to_owned(),
            }),
        )
            .into_response(),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to delete note entry: {e}");
            not_found()
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 200, description = "Note found", body = NoteEnvelope),
        (status = 404, description = "Note not found", body = MessageResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_one_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<i64>,
) -> Response {
    match service.get_one_note(id).await {
        Ok(note) => (StatusCode::OK, Json(NoteEnvelope { data: note })).into_response(),
        Err(NoteError::NotFound) => not_found(),
        Err(e) => {
            tracing::error!("failed to get note entry: {e}");
            not_found()
        }
    }
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "List of all notes", body = NoteListEnvelope),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => (StatusCode::OK, Json(NoteListEnvelope { data: notes })).into_response(),
        Err(e) => {
            tracing::error!("failed to get note entries: {e}");
            internal_error(&e)
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse {
            message: "Note not found".to_owned(),
        }),
    )
        .into_response()
}

fn validation_failed(errors: FieldErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationErrorResponse {
            message: "Validation failed".to_owned(),
            errors,
        }),
    )
        .into_response()
}

fn internal_error(e: &NoteError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}
