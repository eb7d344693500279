use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};

use super::{NoteStore, StoreError, assert_valid_title};
use crate::models::{NewNote, Note};

/// In-memory note store backing the test suite. Does not persist data.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: BTreeMap<i64, Note>,
    last_id: i64,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn get_all_notes(&self) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");

        let mut notes: Vec<Note> = inner.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));

        Ok(notes)
    }

    async fn create_note(&self, note: NewNote) -> Result<Note, StoreError> {
        assert_valid_title(&note.title)?;

        let mut inner = self.inner.lock().expect("memory store lock poisoned");

        // Ids of deleted notes are never handed out again.
        inner.last_id += 1;
        let id = inner.last_id;
        let now = Utc::now();

        let note = Note {
            id,
            title: note.title,
            content: note.content,
            created_at: now,
            updated_at: now,
        };
        inner.notes.insert(id, note.clone());

        Ok(note)
    }

    async fn get_one_note(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let inner = self.inner.lock().expect("memory store lock poisoned");

        Ok(inner.notes.get(&id).cloned())
    }

    async fn update_note(&self, id: i64, note: NewNote) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");

        let Some(existing) = inner.notes.get_mut(&id) else {
            return Ok(None);
        };

        assert_valid_title(&note.title)?;

        // The clock may not have advanced since the previous write;
        // updated_at must still move forward.
        let mut now = Utc::now();
        if now <= existing.updated_at {
            now = existing.updated_at + TimeDelta::microseconds(1);
        }

        existing.title = note.title;
        existing.content = note.content;
        existing.updated_at = now;

        Ok(Some(existing.clone()))
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().expect("memory store lock poisoned");

        Ok(inner.notes.remove(&id).is_some())
    }
}
