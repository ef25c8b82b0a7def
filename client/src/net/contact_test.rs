use super::*;

fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
    ContactDraft { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

#[test]
fn encode_submission_uses_field_names() {
    let json = encode_submission(&draft("Ayşe", "a@b.com", "Merhaba")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["name"], "Ayşe");
    assert_eq!(value["email"], "a@b.com");
    assert_eq!(value["message"], "Merhaba");
}

#[test]
fn encode_submission_handles_empty_draft() {
    let json = encode_submission(&ContactDraft::default()).unwrap();
    assert_eq!(json, r#"{"name":"","email":"","message":""}"#);
}

#[test]
fn log_sink_accepts_anything() {
    assert!(LogSink.deliver(&ContactDraft::default()).is_ok());
    assert!(LogSink.deliver(&draft("", "not an email", "\n\t\"quoted\"")).is_ok());
}

#[test]
fn submit_error_messages_are_descriptive() {
    let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SubmitError::from(cause);
    assert!(err.to_string().starts_with("failed to encode contact submission: "));
}
