use studyhub::infrastructure::observability::sanitize_prompt;

#[test]
fn given_empty_prompt_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt(" \n\t "), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  Cell structure\n"), "Cell structure");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_length() {
    let prompt = "a".repeat(150);

    let result = sanitize_prompt(&prompt);

    assert_eq!(result, format!("{}... (150 chars total)", "a".repeat(100)));
}

#[test]
fn given_multibyte_text_when_truncating_then_splits_on_char_boundary() {
    let prompt = "ü".repeat(120);

    let result = sanitize_prompt(&prompt);

    assert!(result.starts_with(&"ü".repeat(100)));
    assert!(result.ends_with("... (120 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_token() {
    let result = sanitize_prompt("Authorization: Bearer gsk-abc123xyz");

    assert_eq!(result, "Authorization: Bearer [REDACTED]");
}

#[test]
fn given_several_secrets_when_sanitizing_then_redacts_every_occurrence() {
    let result = sanitize_prompt("api_key=one&token=two password=three token=four");

    assert_eq!(
        result,
        "api_key=[REDACTED]&token=[REDACTED] password=[REDACTED] token=[REDACTED]"
    );
}

#[test]
fn given_plain_lecture_text_when_sanitizing_then_unchanged() {
    let text = "The secret of photosynthesis is chlorophyll.";

    assert_eq!(sanitize_prompt(text), text);
}
