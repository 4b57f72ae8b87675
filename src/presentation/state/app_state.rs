use std::sync::Arc;

use crate::application::ports::{FileLoader, FileStore, LlmClient};
use crate::application::services::{AuthService, CourseService, StudyMaterialService};
use crate::presentation::config::ApiConfig;

pub struct AppState<L, F>
where
    L: LlmClient,
    F: FileLoader,
{
    pub study_material_service: Arc<StudyMaterialService<L, F>>,
    pub auth_service: Arc<AuthService>,
    pub course_service: Arc<CourseService>,
    pub file_store: Arc<dyn FileStore>,
    pub api_config: ApiConfig,
}

impl<L, F> Clone for AppState<L, F>
where
    L: LlmClient,
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            study_material_service: Arc::clone(&self.study_material_service),
            auth_service: Arc::clone(&self.auth_service),
            course_service: Arc::clone(&self.course_service),
            file_store: Arc::clone(&self.file_store),
            api_config: self.api_config.clone(),
        }
    }
}
