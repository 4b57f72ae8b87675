use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::{CourseRepository, RepositoryError};
use crate::domain::{Course, CourseId, UserId};

use super::pg_error::map_sqlx_error;

pub struct PgCourseRepository {
    pool: PgPool,
}

impl PgCourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CourseRow {
    id: i64,
    name: String,
    owner_id: i64,
    owner_username: String,
    created_at: DateTime<Utc>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: CourseId::new(row.id),
            name: row.name,
            owner_id: UserId::new(row.owner_id),
            owner_username: row.owner_username,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    #[instrument(skip(self), fields(owner_id = %owner))]
    async fn create(&self, owner: UserId, name: &str) -> Result<Course, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            WITH inserted AS (
                INSERT INTO courses (name, owner_id)
                VALUES ($1, $2)
                RETURNING id, name, owner_id, created_at
            )
            SELECT i.id, i.name, i.owner_id, u.username AS owner_username, i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.owner_id
            "#,
        )
        .bind(name)
        .bind(owner.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    #[instrument(skip(self), fields(owner_id = %owner))]
    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<Course>, RepositoryError> {
        let rows = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT c.id, c.name, c.owner_id, u.username AS owner_username, c.created_at
            FROM courses c
            JOIN users u ON u.id = c.owner_id
            WHERE c.owner_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .bind(owner.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Course::from).collect())
    }

    #[instrument(skip(self), fields(course_id = %id, owner_id = %owner))]
    async fn get_for_owner(
        &self,
        id: CourseId,
        owner: UserId,
    ) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT c.id, c.name, c.owner_id, u.username AS owner_username, c.created_at
            FROM courses c
            JOIN users u ON u.id = c.owner_id
            WHERE c.id = $1 AND c.owner_id = $2
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Course::from))
    }

    #[instrument(skip(self), fields(course_id = %id, owner_id = %owner))]
    async fn rename(
        &self,
        id: CourseId,
        owner: UserId,
        name: &str,
    ) -> Result<Option<Course>, RepositoryError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            WITH updated AS (
                UPDATE courses
                SET name = $3
                WHERE id = $1 AND owner_id = $2
                RETURNING id, name, owner_id, created_at
            )
            SELECT d.id, d.name, d.owner_id, u.username AS owner_username, d.created_at
            FROM updated d
            JOIN users u ON u.id = d.owner_id
            "#,
        )
        .bind(id.as_i64())
        .bind(owner.as_i64())
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Course::from))
    }

    #[instrument(skip(self), fields(course_id = %id, owner_id = %owner))]
    async fn delete(&self, id: CourseId, owner: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1 AND owner_id = $2")
            .bind(id.as_i64())
            .bind(owner.as_i64())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
