use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{
    CourseRepository, FileStore, FileStoreError, RepositoryError, TopicRepository,
};
use crate::domain::{Course, CourseId, StoragePath, Topic, TopicId, UserId};

/// A file received from a client, not yet stored.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub filename: String,
    pub data: Bytes,
}

/// Owner-scoped management of courses, their topics and the topic files.
pub struct CourseService {
    courses: Arc<dyn CourseRepository>,
    topics: Arc<dyn TopicRepository>,
    file_store: Arc<dyn FileStore>,
}

impl CourseService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        topics: Arc<dyn TopicRepository>,
        file_store: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            courses,
            topics,
            file_store,
        }
    }

    pub async fn list_courses(&self, owner: UserId) -> Result<Vec<Course>, CourseError> {
        Ok(self.courses.list_for_owner(owner).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn create_course(&self, owner: UserId, name: &str) -> Result<Course, CourseError> {
        let course = self.courses.create(owner, name).await?;
        tracing::info!(course_id = %course.id, "Course created");
        Ok(course)
    }

    pub async fn get_course(&self, owner: UserId, id: CourseId) -> Result<Course, CourseError> {
        self.courses
            .get_for_owner(id, owner)
            .await?
            .ok_or(CourseError::CourseNotFound)
    }

    #[tracing::instrument(skip(self))]
    pub async fn rename_course(
        &self,
        owner: UserId,
        id: CourseId,
        name: &str,
    ) -> Result<Course, CourseError> {
        self.courses
            .rename(id, owner, name)
            .await?
            .ok_or(CourseError::CourseNotFound)
    }

    /// Removes the stored files of every topic, then the course itself.
    #[tracing::instrument(skip(self))]
    pub async fn delete_course(&self, owner: UserId, id: CourseId) -> Result<(), CourseError> {
        let course = self.get_course(owner, id).await?;

        let topics = self.topics.list_for_course(course.id).await?;
        for path in topics.iter().filter_map(|t| t.file_path.as_ref()) {
            self.delete_file(path).await?;
        }

        if !self.courses.delete(course.id, owner).await? {
            return Err(CourseError::CourseNotFound);
        }

        tracing::info!(topic_count = topics.len(), "Course deleted");
        Ok(())
    }

    pub async fn list_topics(
        &self,
        owner: UserId,
        course_id: CourseId,
    ) -> Result<Vec<Topic>, CourseError> {
        let course = self.get_course(owner, course_id).await?;
        Ok(self.topics.list_for_course(course.id).await?)
    }

    /// Creates the topic row first so its id can be part of the storage path.
    #[tracing::instrument(skip(self, upload), fields(filename = %upload.filename, bytes = upload.data.len()))]
    pub async fn create_topic(
        &self,
        owner: UserId,
        course_id: CourseId,
        name: &str,
        upload: FileUpload,
    ) -> Result<Topic, CourseError> {
        let course = self.get_course(owner, course_id).await?;
        let mut topic = self.topics.create(course.id, name).await?;

        let path = StoragePath::for_topic(owner, course.id, topic.id, &upload.filename);
        if let Err(e) = self.attach_file(topic.id, &path, upload.data).await {
            tracing::error!(topic_id = %topic.id, error = %e, "Storing topic file failed, removing topic");
            if let Err(cleanup) = self.topics.delete(topic.id).await {
                tracing::warn!(topic_id = %topic.id, error = %cleanup, "Failed to remove topic after storage failure");
            }
            return Err(e);
        }

        topic.file_path = Some(path);
        tracing::info!(topic_id = %topic.id, "Topic created");
        Ok(topic)
    }

    pub async fn get_topic(&self, owner: UserId, id: TopicId) -> Result<Topic, CourseError> {
        self.topics
            .get_for_owner(id, owner)
            .await?
            .ok_or(CourseError::TopicNotFound)
    }

    /// Applies whichever of name and file were supplied. A new file replaces
    /// the previous one, which is then deleted from the store. The file is
    /// attached before the rename, so a failed upload leaves the name as is.
    #[tracing::instrument(skip(self, upload))]
    pub async fn update_topic(
        &self,
        owner: UserId,
        id: TopicId,
        name: Option<&str>,
        upload: Option<FileUpload>,
    ) -> Result<Topic, CourseError> {
        let mut topic = self.get_topic(owner, id).await?;

        if let Some(upload) = upload {
            let path = StoragePath::for_topic(owner, topic.course_id, topic.id, &upload.filename);
            self.attach_file(topic.id, &path, upload.data).await?;

            if let Some(previous) = topic.file_path.replace(path) {
                if let Err(e) = self.delete_file(&previous).await {
                    tracing::warn!(path = %previous, error = %e, "Failed to delete replaced topic file");
                }
            }
        }

        if let Some(name) = name {
            self.topics.rename(topic.id, name).await?;
            topic.name = name.to_string();
        }

        Ok(topic)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_topic(&self, owner: UserId, id: TopicId) -> Result<(), CourseError> {
        let topic = self.get_topic(owner, id).await?;

        if let Some(path) = &topic.file_path {
            self.delete_file(path).await?;
        }

        if !self.topics.delete(topic.id).await? {
            return Err(CourseError::TopicNotFound);
        }

        tracing::info!("Topic deleted");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn update_progress(
        &self,
        owner: UserId,
        id: TopicId,
        progress: i32,
    ) -> Result<Topic, CourseError> {
        if !Topic::is_valid_progress(progress) {
            return Err(CourseError::InvalidProgress(progress));
        }

        let mut topic = self.get_topic(owner, id).await?;
        self.topics.set_progress(topic.id, progress).await?;
        topic.progress = progress;
        Ok(topic)
    }

    async fn attach_file(
        &self,
        topic_id: TopicId,
        path: &StoragePath,
        data: Bytes,
    ) -> Result<(), CourseError> {
        let size = self.file_store.store(path, data).await?;

        if let Err(e) = self.topics.set_file_path(topic_id, path).await {
            if let Err(cleanup) = self.delete_file(path).await {
                tracing::warn!(%path, error = %cleanup, "Failed to delete unreferenced topic file");
            }
            return Err(e.into());
        }

        tracing::debug!(%path, size, "Topic file stored");
        Ok(())
    }

    async fn delete_file(&self, path: &StoragePath) -> Result<(), CourseError> {
        match self.file_store.delete(path).await {
            Ok(()) | Err(FileStoreError::NotFound(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CourseError {
    #[error("Course not found")]
    CourseNotFound,
    #[error("Topic not found")]
    TopicNotFound,
    #[error("progress must be between 0 and 100, got {0}")]
    InvalidProgress(i32),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
    #[error("file store: {0}")]
    FileStore(#[from] FileStoreError),
}
