use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::Note, validation::FieldErrors};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID
    pub id: i64,
    /// Note title
    pub title: String,
    /// Note content, null when the note has none
    pub content: Option<String>,
    /// Creation time, RFC 3339
    pub created_at: DateTime<Utc>,
    /// Last modification time, RFC 3339
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title, required, at most 255 characters
    pub title: Option<String>,
    /// Note content
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Replacement title, required, at most 255 characters
    pub title: Option<String>,
    /// Replacement content
    pub content: Option<String>,
}

/// `{"data": ...}` wrapper around a single note.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteEnvelope {
    pub data: NoteResponse,
}

/// `{"data": [...]}` wrapper around a note listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NoteListEnvelope {
    pub data: Vec<NoteResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome description
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Always "Validation failed"
    pub message: String,
    /// Field name to list of violation messages
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Raw error message from the failing operation
    pub error: String,
}
