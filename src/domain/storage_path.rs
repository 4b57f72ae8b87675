use std::fmt;

use uuid::Uuid;

use super::{CourseId, TopicId, UserId};

const FALLBACK_EXTENSION: &str = "bin";

/// Location of an uploaded file inside the file store.
///
/// Topic files live under `user_<uid>/course_<cid>/topic_<tid>/<hex>.<ext>`,
/// so the topic must exist before its file can be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_topic(user: UserId, course: CourseId, topic: TopicId, filename: &str) -> Self {
        Self(format!(
            "user_{}/course_{}/topic_{}/{}.{}",
            user,
            course,
            topic,
            Uuid::new_v4().simple(),
            file_extension(filename)
        ))
    }

    /// Parses a path received from outside (database row, URL). Rejects
    /// empty, `.` and `..` segments.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return None;
        }

        let valid = trimmed
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

        valid.then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> Option<&str> {
        let file_name = self.0.rsplit('/').next()?;
        file_name.rsplit_once('.').map(|(_, ext)| ext)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn file_extension(filename: &str) -> String {
    let raw = filename.rsplit('.').next().unwrap_or(filename);
    let ext: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if ext.is_empty() {
        FALLBACK_EXTENSION.to_string()
    } else {
        ext
    }
}
