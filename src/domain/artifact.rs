use std::fmt;

/// Study material that can be generated from a topic document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Summary,
    Flashcards,
    Quiz,
    QuizAndFlashcards,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "summary",
            ArtifactKind::Flashcards => "flashcards",
            ArtifactKind::Quiz => "quiz",
            ArtifactKind::QuizAndFlashcards => "quiz_and_flashcards",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of the combined quiz and flashcards pipeline. The quiz is kept as
/// one block of text, the flashcards are split into individual cards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAndFlashcards {
    pub quiz: String,
    pub flashcards: Vec<String>,
}
