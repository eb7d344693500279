use std::collections::BTreeMap;

use crate::models::NewNote;

/// Maximum title length, counted in characters rather than bytes.
pub const TITLE_MAX_CHARS: usize = 255;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Checks a raw note payload and produces either a draft ready for the
/// store or the field error map rendered in the 422 response.
///
/// String fields are trimmed first and empty strings are treated as
/// missing, so a whitespace-only title fails the required check and a
/// blank content field is stored as null.
pub fn validate_note_payload(
    title: Option<&str>,
    content: Option<&str>,
) -> Result<NewNote, FieldErrors> {
    let mut errors = FieldErrors::new();

    let title = title.map(str::trim).filter(|t| !t.is_empty());
    match title {
        None => field_error(&mut errors, "title", "The title field is required."),
        Some(t) if t.chars().count() > TITLE_MAX_CHARS => field_error(
            &mut errors,
            "title",
            "The title field must not be greater than 255 characters.",
        ),
        Some(_) => {}
    }

    let content = content.map(str::trim).filter(|c| !c.is_empty());

    match title {
        Some(title) if errors.is_empty() => Ok(NewNote {
            title: title.to_owned(),
            content: content.map(ToOwned::to_owned),
        }),
        _ => Err(errors),
    }
}

fn field_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_title_and_content() {
        let note = validate_note_payload(Some("Groceries"), Some("Milk, eggs")).unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.content.as_deref(), Some("Milk, eggs"));
    }

    #[test]
    fn accepts_missing_content() {
        let note = validate_note_payload(Some("Groceries"), None).unwrap();
        assert_eq!(note.content, None);
    }

    #[test]
    fn rejects_missing_title() {
        let errors = validate_note_payload(None, None).unwrap_err();
        assert_eq!(errors["title"], vec!["The title field is required."]);
    }

    #[test]
    fn rejects_empty_title() {
        let errors = validate_note_payload(Some(""), Some("body")).unwrap_err();
        assert_eq!(errors["title"], vec!["The title field is required."]);
    }

    #[test]
    fn rejects_whitespace_only_title() {
        let errors = validate_note_payload(Some("   "), None).unwrap_err();
        assert_eq!(errors["title"], vec!["The title field is required."]);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let note = validate_note_payload(Some("  Padded  "), Some("  body  ")).unwrap();
        assert_eq!(note.title, "Padded");
        assert_eq!(note.content.as_deref(), Some("body"));
    }

    #[test]
    fn blank_content_becomes_null() {
        let note = validate_note_payload(Some("Groceries"), Some("   ")).unwrap();
        assert_eq!(note.content, None);
    }

    #[test]
    fn accepts_title_at_the_length_limit() {
        let title = "x".repeat(TITLE_MAX_CHARS);
        assert!(validate_note_payload(Some(&title), None).is_ok());
    }

    #[test]
    fn rejects_title_over_the_length_limit() {
        let title = "x".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate_note_payload(Some(&title), None).unwrap_err();
        assert_eq!(
            errors["title"],
            vec!["The title field must not be greater than 255 characters."]
        );
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        let title = "ä".repeat(TITLE_MAX_CHARS);
        assert!(validate_note_payload(Some(&title), None).is_ok());
    }
}
