//! Plain-text output helpers

use pocketbook_api::ApiError;
use pocketbook_core::{PageCursor, Transaction};

pub fn transaction_row(t: &Transaction) -> String {
    let mut flags = String::new();
    if t.is_scheduled {
        flags.push_str(" [scheduled]");
    }
    if t.has_items {
        flags.push_str(" [items]");
    }
    format!(
        "#{:<6} {}  {:<10} {:>12.2}  {}{}",
        t.id,
        t.date,
        t.kind.as_str(),
        t.amount,
        t.name,
        flags
    )
}

pub fn cursor_line(cursor: &PageCursor, shown: usize) -> String {
    format!(
        "Page {}/{} | showing {} of {} total",
        cursor.current_page, cursor.last_page, shown, cursor.total
    )
}

/// One line per field message for validation failures, plain message for
/// everything else
pub fn explain_api_error(err: &ApiError) -> String {
    let mut s = err.to_string();
    if let Some(fields) = err.field_errors() {
        for (field, messages) in fields {
            for message in messages {
                s.push_str(&format!("\n  {field}: {message}"));
            }
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketbook_api::FieldErrors;

    #[test]
    fn test_explain_lists_field_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("name".to_string(), vec!["required".to_string()]);
        let err = ApiError::Validation { message: "invalid".to_string(), errors };
        let text = explain_api_error(&err);
        assert!(text.starts_with("invalid"));
        assert!(text.contains("\n  name: required"));
    }
}
