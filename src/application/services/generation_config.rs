use serde::Deserialize;

/// Chunk size and sampling parameters for one artifact type.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ArtifactProfile {
    pub max_lines: usize,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl ArtifactProfile {
    pub const fn new(max_lines: usize, max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_lines,
            max_tokens,
            temperature,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummaryProfile {
    pub max_lines: usize,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Number of partial notes combined by one merge call.
    pub merge_batch_size: usize,
    pub merge_max_tokens: u32,
    pub final_max_tokens: u32,
}

impl Default for SummaryProfile {
    fn default() -> Self {
        Self {
            max_lines: 200,
            max_tokens: 512,
            temperature: 0.3,
            merge_batch_size: 5,
            merge_max_tokens: 512,
            final_max_tokens: 1024,
        }
    }
}

impl SummaryProfile {
    /// Parameters of the per-chunk note calls.
    pub fn chunk_profile(&self) -> ArtifactProfile {
        ArtifactProfile::new(self.max_lines, self.max_tokens, self.temperature)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub summary: SummaryProfile,
    pub flashcards: ArtifactProfile,
    pub quiz: ArtifactProfile,
    pub quiz_and_flashcards: ArtifactProfile,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            summary: SummaryProfile::default(),
            flashcards: ArtifactProfile::new(200, 512, 0.4),
            quiz: ArtifactProfile::new(500, 512, 0.4),
            quiz_and_flashcards: ArtifactProfile::new(150, 512, 0.4),
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), String> {
        let summary = self.summary.chunk_profile();
        let profiles = [
            ("summary", &summary),
            ("flashcards", &self.flashcards),
            ("quiz", &self.quiz),
            ("quiz_and_flashcards", &self.quiz_and_flashcards),
        ];

        for (name, profile) in profiles {
            if profile.max_lines == 0 {
                return Err(format!("generation.{name}.max_lines must be at least 1"));
            }
            if profile.max_tokens == 0 {
                return Err(format!("generation.{name}.max_tokens must be at least 1"));
            }
            if !(0.0..=2.0).contains(&profile.temperature) {
                return Err(format!(
                    "generation.{name}.temperature must be within 0.0..=2.0"
                ));
            }
        }

        if self.summary.merge_max_tokens == 0 || self.summary.final_max_tokens == 0 {
            return Err("generation.summary merge token budgets must be at least 1".to_string());
        }

        if self.summary.merge_batch_size == 0 {
            return Err("generation.summary.merge_batch_size must be at least 1".to_string());
        }

        Ok(())
    }
}
