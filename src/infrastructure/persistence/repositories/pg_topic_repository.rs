use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{RepositoryError, TopicRepository};
use crate::domain::{CourseId, StoragePath, Topic, TopicId, UserId};

use super::pg_error::map_sqlx_error;

pub struct PgTopicRepository {
    pool: PgPool,
}

impl PgTopicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn execute_update(
        &self,
        query: sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments>,
    ) -> Result<(), RepositoryError> {
        query
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct TopicRow {
    id: i64,
    course_id: i64,
    name: String,
    file_path: Option<String>,
    created_at: DateTime<Utc>,
    progress: i32,
}

impl TryFrom<TopicRow> for Topic {
    type Error = RepositoryError;

    fn try_from(row: TopicRow) -> Result<Self, Self::Error> {
        let file_path = match row.file_path.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(StoragePath::parse(raw).ok_or_else(|| {
                RepositoryError::CorruptRow(format!("topic {} has invalid file path", row.id))
            })?),
        };

        Ok(Topic {
            id: TopicId::new(row.id),
            course_id: CourseId::new(row.course_id),
            name: row.name,
            file_path,
            created_at: row.created_at,
            progress: row.progress,
        })
    }
}

#[async_trait]
impl TopicRepository for PgTopicRepository {
    #[instrument(skip(self), fields(course_id = %course_id))]
    async fn create(&self, course_id: CourseId, name: &str) -> Result<Topic, RepositoryError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            INSERT INTO topics (course_id, name)
            VALUES ($1, $2)
            RETURNING id, course_id, name, file_path, created_at, progress
            "#,
        )
        .bind(course_id.as_i64())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.try_into()
    }

    #[instrument(skip(self), fields(course_id = %course_id))]
    async fn list_for_course(&self, course_id: CourseId) -> Result<Vec<Topic>, RepositoryError> {
        let rows = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT id, course_id, name, file_path, created_at, progress
            FROM topics
            WHERE course_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(course_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Topic::try_from).collect()
    }

    #[instrument(skip(self), fields(topic_id = %id, owner_id = %owner))]
    async fn get_for_owner(
        &self,
        id: TopicId,
        owner: UserId,
    ) -> Result<Option<Topic>, RepositoryError> {
        let row = sqlx::query_as::<_, TopicRow>(
            r#"
            SELECT t.id, t.course_id, t.name, t.file_path, t.created_at, t.progress
            FROM topics t
            JOIN courses c ON c.id = t.course_id
            WHERE t.id = $1 AND c.owner_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(Topic::try_from).transpose()
    }

    #[instrument(skip(self), fields(topic_id = %id))]
    async fn rename(&self, id: TopicId, name: &str) -> Result<(), RepositoryError> {
        self.execute_update(
            sqlx::query("UPDATE topics SET name = $2 WHERE id = $1")
                .bind(id.as_i64())
                .bind(name),
        )
        .await
    }

    #[instrument(skip(self), fields(topic_id = %id, path = %path))]
    async fn set_file_path(&self, id: TopicId, path: &StoragePath) -> Result<(), RepositoryError> {
        self.execute_update(
            sqlx::query("UPDATE topics SET file_path = $2 WHERE id = $1")
                .bind(id.as_i64())
                .bind(path.as_str()),
        )
        .await
    }

    #[instrument(skip(self), fields(topic_id = %id))]
    async fn set_progress(&self, id: TopicId, progress: i32) -> Result<(), RepositoryError> {
        self.execute_update(
            sqlx::query("UPDATE topics SET progress = $2 WHERE id = $1")
                .bind(id.as_i64())
                .bind(progress),
        )
        .await
    }

    #[instrument(skip(self), fields(topic_id = %id))]
    async fn delete(&self, id: TopicId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM topics WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
