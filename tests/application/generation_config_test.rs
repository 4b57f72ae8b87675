use studyhub::application::services::{ArtifactProfile, GenerationConfig};

#[test]
fn given_defaults_when_inspecting_then_artifact_parameters_match_pipeline_table() {
    let config = GenerationConfig::default();

    assert_eq!(config.summary.max_lines, 200);
    assert_eq!(config.summary.max_tokens, 512);
    assert_eq!(config.summary.merge_batch_size, 5);
    assert_eq!(config.summary.final_max_tokens, 1024);
    assert_eq!(config.flashcards, ArtifactProfile::new(200, 512, 0.4));
    assert_eq!(config.quiz, ArtifactProfile::new(500, 512, 0.4));
    assert_eq!(config.quiz_and_flashcards, ArtifactProfile::new(150, 512, 0.4));
    assert!(config.validate().is_ok());
}

#[test]
fn given_zero_max_lines_when_validating_then_rejected() {
    let mut config = GenerationConfig::default();
    config.quiz.max_lines = 0;

    let error = config.validate().unwrap_err();
    assert!(error.contains("quiz.max_lines"));
}

#[test]
fn given_zero_batch_size_when_validating_then_rejected() {
    let mut config = GenerationConfig::default();
    config.summary.merge_batch_size = 0;

    assert!(config.validate().is_err());
}

#[test]
fn given_out_of_range_temperature_when_validating_then_rejected() {
    let mut config = GenerationConfig::default();
    config.flashcards.temperature = 2.5;

    assert!(config.validate().is_err());
}
