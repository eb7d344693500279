use chrono::{DateTime, Utc};

/// A persisted note record. Identity and timestamps are assigned by the
/// store and never by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated draft accepted by the store for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: Option<String>,
}
