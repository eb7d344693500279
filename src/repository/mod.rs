mod embedded;
pub mod memory;

use async_trait::async_trait;
use embedded::migrations;
use tokio_postgres::{Client, NoTls, Row};

use crate::models::{NewNote, Note};
use crate::validation::TITLE_MAX_CHARS;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store refuses to persist a note whose title breaks the
    /// non-empty / 255-character invariant, regardless of upstream checks.
    #[error("note title must be a non-empty string of at most 255 characters")]
    InvalidTitle,

    #[error(transparent)]
    Database(#[from] tokio_postgres::Error),
}

/// Persistence abstraction over note records. Production binds this to
/// Postgres; the test suite substitutes the in-memory implementation.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes, most recently created first.
    async fn get_all_notes(&self) -> Result<Vec<Note>, StoreError>;

    /// Persists a draft, assigning a fresh id and both timestamps.
    async fn create_note(&self, note: NewNote) -> Result<Note, StoreError>;

    /// `None` when no record with that id exists.
    async fn get_one_note(&self, id: i64) -> Result<Option<Note>, StoreError>;

    /// Replaces title and content wholesale and refreshes `updated_at`,
    /// keeping `id` and `created_at`. `None` when the id is absent.
    async fn update_note(&self, id: i64, note: NewNote) -> Result<Option<Note>, StoreError>;

    /// Hard delete. `false` when the id is absent.
    async fn delete_note(&self, id: i64) -> Result<bool, StoreError>;
}

pub(crate) fn assert_valid_title(title: &str) -> Result<(), StoreError> {
    if title.is_empty() || title.chars().count() > TITLE_MAX_CHARS {
        return Err(StoreError::InvalidTitle);
    }

    Ok(())
}

pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_dsn: String) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(&database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn get_all_notes(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id, title, content, created_at, updated_at FROM notes \
                 ORDER BY created_at DESC, id DESC",
                &[],
            )
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn create_note(&self, note: NewNote) -> Result<Note, StoreError> {
        assert_valid_title(&note.title)?;

        let row = self
            .client
            .query_one(
                "INSERT INTO notes (title, content) VALUES ($1, $2) \
                 RETURNING id, title, content, created_at, updated_at",
                &[&note.title, &note.content],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn get_one_note(&self, id: i64) -> Result<Option<Note>, StoreError> {
        let row = self
            .client
            .query_opt(
                "SELECT id, title, content, created_at, updated_at FROM notes WHERE id = $1",
                &[&id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn update_note(&self, id: i64, note: NewNote) -> Result<Option<Note>, StoreError> {
        // Absence is reported before the title invariant is re-checked.
        let existing = self
            .client
            .query_opt("SELECT id FROM notes WHERE id = $1", &[&id])
            .await?;
        if existing.is_none() {
            return Ok(None);
        }

        assert_valid_title(&note.title)?;

        // GREATEST keeps updated_at strictly increasing even when now()
        // has not moved since the previous write.
        let row = self
            .client
            .query_opt(
                "UPDATE notes SET title = $1, content = $2, \
                 updated_at = GREATEST(now(), updated_at + interval '1 microsecond') \
                 WHERE id = $3 \
                 RETURNING id, title, content, created_at, updated_at",
                &[&note.title, &note.content, &id],
            )
            .await?;

        Ok(row.as_ref().map(note_from_row))
    }

    async fn delete_note(&self, id: i64) -> Result<bool, StoreError> {
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id = $1", &[&id])
            .await?;

        Ok(rows == 1)
    }
}
