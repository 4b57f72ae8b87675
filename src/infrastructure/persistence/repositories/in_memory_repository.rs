use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::application::ports::{
    CourseRepository, RepositoryError, TopicRepository, UserRepository,
};
use crate::domain::{Course, CourseId, StoragePath, Topic, TopicId, User, UserId};

/// Process-local store for users, courses and topics. Used when no database
/// is configured and in tests. Mirrors the relational constraints: unique
/// usernames, courses tied to an existing owner, cascading deletes.
#[derive(Default)]
pub struct InMemoryRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    users: BTreeMap<UserId, User>,
    courses: BTreeMap<CourseId, CourseRecord>,
    topics: BTreeMap<TopicId, Topic>,
}

struct CourseRecord {
    name: String,
    owner_id: UserId,
    created_at: DateTime<Utc>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn course(&self, id: CourseId) -> Result<Option<Course>, RepositoryError> {
        let Some(record) = self.courses.get(&id) else {
            return Ok(None);
        };

        let owner = self.users.get(&record.owner_id).ok_or_else(|| {
            RepositoryError::CorruptRow(format!("course {id} references a missing owner"))
        })?;

        Ok(Some(Course {
            id,
            name: record.name.clone(),
            owner_id: record.owner_id,
            owner_username: owner.username.clone(),
            created_at: record.created_at,
        }))
    }

    fn owns(&self, course_id: CourseId, owner: UserId) -> bool {
        self.courses
            .get(&course_id)
            .is_some_and(|course| course.owner_id == owner)
    }

    fn topic_mut(&mut self, id: TopicId) -> Result<&mut Topic, RepositoryError> {
        self.topics
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::QueryFailed(format!("topic {id} does not exist")))
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn create(&self, username: &str, password_hash: &str) -> Result<User, RepositoryError> {
        let mut state = self.state.lock().await;

        if state.users.values().any(|u| u.username == username) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "username {username} already exists"
            )));
        }

        let user = User {
            id: UserId::new(state.next_id()),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn create(&self, owner: UserId, name: &str) -> Result<Course, RepositoryError> {
        let mut state = self.state.lock().await;

        if !state.users.contains_key(&owner) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "user {owner} does not exist"
            )));
        }

        let id = CourseId::new(state.next_id());
        state.courses.insert(
            id,
            CourseRecord {
                name: name.to_string(),
                owner_id: owner,
                created_at: Utc::now(),
            },
        );

        state
            .course(id)?
            .ok_or_else(|| RepositoryError::QueryFailed(format!("course {id} vanished")))
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Course>, RepositoryError> {
        let state = self.state.lock().await;

        let mut courses = state
            .courses
            .iter()
            .filter(|(_, record)| record.owner_id == owner)
            .map(|(id, _)| state.course(*id))
            .filter_map(Result::transpose)
            .collect::<Result<Vec<_>, _>>()?;

        courses.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(courses)
    }

    async fn get_for_owner(
        &self,
        id: CourseId,
        owner: UserId,
    ) -> Result<Option<Course>, RepositoryError> {
        let state = self.state.lock().await;
        if !state.owns(id, owner) {
            return Ok(None);
        }
        state.course(id)
    }

    async fn rename(
        &self,
        id: CourseId,
        owner: UserId,
        name: &str,
    ) -> Result<Option<Course>, RepositoryError> {
        let mut state = self.state.lock().await;

        match state.courses.get_mut(&id) {
            Some(record) if record.owner_id == owner => record.name = name.to_string(),
            _ => return Ok(None),
        }

        state.course(id)
    }

    async fn delete(&self, id: CourseId, owner: UserId) -> Result<bool, RepositoryError> {
        let mut state = self.state.lock().await;
        if !state.owns(id, owner) {
            return Ok(false);
        }

        state.courses.remove(&id);
        state.topics.retain(|_, topic| topic.course_id != id);
        Ok(true)
    }
}

#[async_trait]
impl TopicRepository for InMemoryRepository {
    async fn create(&self, course_id: CourseId, name: &str) -> Result<Topic, RepositoryError> {
        let mut state = self.state.lock().await;

        if !state.courses.contains_key(&course_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "course {course_id} does not exist"
            )));
        }

        let topic = Topic {
            id: TopicId::new(state.next_id()),
            course_id,
            name: name.to_string(),
            file_path: None,
            created_at: Utc::now(),
            progress: 0,
        };
        state.topics.insert(topic.id, topic.clone());
        Ok(topic)
    }

    async fn list_for_course(&self, course_id: CourseId) -> Result<Vec<Topic>, RepositoryError> {
        let state = self.state.lock().await;

        let mut topics: Vec<Topic> = state
            .topics
            .values()
            .filter(|t| t.course_id == course_id)
            .cloned()
            .collect();

        topics.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(topics)
    }

    async fn get_for_owner(
        &self,
        id: TopicId,
        owner: UserId,
    ) -> Result<Option<Topic>, RepositoryError> {
        let state = self.state.lock().await;
        Ok(state
            .topics
            .get(&id)
            .filter(|topic| state.owns(topic.course_id, owner))
            .cloned())
    }

    async fn rename(&self, id: TopicId, name: &str) -> Result<(), RepositoryError> {
        self.state.lock().await.topic_mut(id)?.name = name.to_string();
        Ok(())
    }

    async fn set_file_path(&self, id: TopicId, path: &StoragePath) -> Result<(), RepositoryError> {
        self.state.lock().await.topic_mut(id)?.file_path = Some(path.clone());
        Ok(())
    }

    async fn set_progress(&self, id: TopicId, progress: i32) -> Result<(), RepositoryError> {
        if !Topic::is_valid_progress(progress) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "progress {progress} out of range"
            )));
        }
        self.state.lock().await.topic_mut(id)?.progress = progress;
        Ok(())
    }

    async fn delete(&self, id: TopicId) -> Result<bool, RepositoryError> {
        Ok(self.state.lock().await.topics.remove(&id).is_some())
    }
}
