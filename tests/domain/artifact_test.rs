use std::str::FromStr;

use studyhub::domain::{ArtifactKind, TokenType};

#[test]
fn given_artifact_kinds_when_displayed_then_snake_case_names() {
    let names: Vec<String> = [
        ArtifactKind::Summary,
        ArtifactKind::Flashcards,
        ArtifactKind::Quiz,
        ArtifactKind::QuizAndFlashcards,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(names, ["summary", "flashcards", "quiz", "quiz_and_flashcards"]);
}

#[test]
fn given_token_type_names_when_parsing_then_known_types_round_trip() {
    assert_eq!(TokenType::from_str("access"), Ok(TokenType::Access));
    assert_eq!(TokenType::from_str("refresh"), Ok(TokenType::Refresh));
    assert!(TokenType::from_str("bearer").is_err());
}
