mod auth_service;
mod course_service;
mod generation_config;
mod line_chunker;
pub mod prompts;
mod response_splitter;
mod study_material_service;
mod text_normalizer;

pub use auth_service::{AuthError, AuthService};
pub use course_service::{CourseError, CourseService, FileUpload};
pub use generation_config::{ArtifactProfile, GenerationConfig, SummaryProfile};
pub use line_chunker::chunk_lines;
pub use response_splitter::{ITEM_SEPARATOR, split_items};
pub use study_material_service::{GenerationStage, StudyMaterialError, StudyMaterialService};
pub use text_normalizer::{NoUsableText, clean_text, normalize_text};
