use crate::{
    dto::{CreateNoteRequest, NoteResponse, UpdateNoteRequest},
    repository::{NoteStore, StoreError},
    validation::{FieldErrors, validate_note_payload},
};

use std::sync::Arc;

/// Outcome taxonomy of the note operations, translated to a status code
/// and envelope exactly once, at the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Note not found")]
    NotFound,

    /// Unexpected persistence failure, carrying the raw driver message.
    #[error("{0}")]
    Storage(String),
}

impl From<StoreError> for NoteError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::InvalidTitle => {
                let mut errors = FieldErrors::new();
                errors
                    .entry("title".to_owned())
                    .or_default()
                    .push(e.to_string());
                Self::Validation(errors)
            }
            StoreError::Database(e) => Self::Storage(e.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    #[must_use]
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, NoteError> {
        let notes = self.store.get_all_notes().await?;

        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    pub async fn create_note(&self, request: CreateNoteRequest) -> Result<NoteResponse, NoteError> {
        let draft = validate_note_payload(request.title.as_deref(), request.content.as_deref())
            .map_err(NoteError::Validation)?;

        let note = self.store.create_note(draft).await?;

        Ok(note.into())
    }

    pub async fn get_one_note(&self, id: i64) -> Result<NoteResponse, NoteError> {
        match self.store.get_one_note(id).await? {
            Some(note) => Ok(note.into()),
            None => Err(NoteError::NotFound),
        }
    }

    pub async fn update_note(
        &self,
        id: i64,
        request: UpdateNoteRequest,
    ) -> Result<NoteResponse, NoteError> {
        // Payload checks run before the record is looked up.
        let draft = validate_note_payload(request.title.as_deref(), request.content.as_deref())
            .map_err(NoteError::Validation)?;

        match self.store.update_note(id, draft).await? {
            Some(note) => Ok(note.into()),
            None => Err(NoteError::NotFound),
        }
    }

    pub async fn delete_note(&self, id: i64) -> Result<(), NoteError> {
        if self.store.delete_note(id).await? {
            Ok(())
        } else {
            Err(NoteError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::memory::MemoryStore;

    fn service() -> (Arc<MemoryStore>, NoteService) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), NoteService::new(store))
    }

    #[tokio::test]
    async fn create_roundtrip_through_service() {
        let (_, service) = service();

        let request = CreateNoteRequest {
            title: Some("Groceries".to_owned()),
            content: Some("Milk, eggs".to_owned()),
        };
        let created = service.create_note(request).await.unwrap();

        let fetched = service.get_one_note(created.id).await.unwrap();
        assert_eq!(fetched.title, "Groceries");
        assert_eq!(fetched.content.as_deref(), Some("Milk, eggs"));
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn rejected_create_leaves_store_untouched() {
        let (store, service) = service();

        let request = CreateNoteRequest {
            title: Some(String::new()),
            content: Some("body".to_owned()),
        };
        let err = service.create_note(request).await.unwrap_err();

        let NoteError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert!(!errors["title"].is_empty());
        assert!(store.get_all_notes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_ids_map_to_not_found() {
        let (_, service) = service();

        assert!(matches!(
            service.get_one_note(7).await,
            Err(NoteError::NotFound)
        ));

        let request = UpdateNoteRequest {
            title: Some("anything".to_owned()),
            content: None,
        };
        assert!(matches!(
            service.update_note(7, request).await,
            Err(NoteError::NotFound)
        ));

        assert!(matches!(
            service.delete_note(7).await,
            Err(NoteError::NotFound)
        ));
    }

    #[tokio::test]
    async fn invalid_update_payload_wins_over_missing_id() {
        let (_, service) = service();

        let request = UpdateNoteRequest {
            title: None,
            content: None,
        };
        assert!(matches!(
            service.update_note(7, request).await,
            Err(NoteError::Validation(_))
        ));
    }
}
