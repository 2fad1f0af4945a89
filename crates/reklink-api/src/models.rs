//! Wire types for the RekLink API (`/api/v1`).
//!
//! Field names match the backend's snake_case JSON. All entities are owned by the
//! backend; the client only holds transient copies and re-fetches on demand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub nickname: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Login response. The backend always issues bearer tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: Uuid,
    pub option_text: String,
    pub is_correct: bool,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub explanation: Option<String>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub options: Vec<QuizOption>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trivia {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub explanation: Option<String>,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Feed and search items, discriminated by the backend's `content_type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "snake_case")]
pub enum Content {
    Quiz(Quiz),
    Trivia(Trivia),
}

impl Content {
    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Self::Quiz(quiz) => quiz.id,
            Self::Trivia(trivia) => trivia.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Quiz(quiz) => &quiz.title,
            Self::Trivia(trivia) => &trivia.title,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Quiz(_) => ContentKind::Quiz,
            Self::Trivia(_) => ContentKind::Trivia,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Quiz(quiz) => &quiz.tags,
            Self::Trivia(trivia) => &trivia.tags,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Quiz,
    Trivia,
}

/// Returned once per submitted answer; never persisted client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub correct_option_id: Uuid,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnswer {
    pub id: Uuid,
    pub content_id: Uuid,
    pub quiz_title: String,
    pub selected_option_id: Uuid,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    /// Six ASCII digits, shared by teachers for students to join with.
    pub join_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    MajorError,
    MinorError,
    Improvement,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub content_id: Uuid,
    pub category: ReportCategory,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Report as listed for teachers, joined with reporter and content metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetails {
    pub id: Uuid,
    pub content_id: Uuid,
    pub category: ReportCategory,
    pub description: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    pub reporter_id: Uuid,
    #[serde(default)]
    pub reporter_nickname: Option<String>,
    pub content_title: String,
    #[serde(default)]
    pub resolution_note: Option<String>,
}

/// Content a report points at, as shown on the teacher correction screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportedContent {
    pub id: Uuid,
    pub content_type: ContentKind,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Compact content row for my-page listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentInfo {
    pub id: Uuid,
    pub content_type: ContentKind,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_quizzes_answered: u64,
    pub correct_answers: u64,
    /// Percentage in `0.0..=100.0`.
    pub accuracy: f64,
    pub posts_created: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_students: u64,
    pub total_quizzes_answered: u64,
    pub overall_accuracy: f64,
    pub total_posts_created: u64,
    pub pending_reports_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularTag {
    pub tag_id: Uuid,
    pub tag_name: String,
    pub usage_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub items: Vec<Content>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub related_content_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A like/save/share marker on a piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub interaction_type: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentDetails {
    pub profile: User,
    pub stats: UserStats,
    #[serde(default)]
    pub recent_posts: Vec<ContentInfo>,
    #[serde(default)]
    pub recent_answers: Vec<UserAnswer>,
}

// --- Request payloads ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub role: Role,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamJoin {
    pub join_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCreate {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOptionCreate {
    pub option_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCreate {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// The backend accepts between 2 and 10 options.
    pub options: Vec<QuizOptionCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaCreate {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuizOptionCreate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCreate {
    pub selected_option_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCreate {
    pub content_id: Uuid,
    pub category: ReportCategory,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStatusUpdate {
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherCreate {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherStatusUpdate {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_json() -> serde_json::Value {
        serde_json::json!({
            "id": "6f7a1f34-9c2b-4c7e-8a34-0d7a5c1f2b01",
            "content_type": "quiz",
            "title": "Meiji era",
            "content": "In which year did the Meiji era begin?",
            "explanation": "It began in 1868.",
            "author_id": "0a0c6b2e-4f5d-4f6a-9b7c-2d3e4f5a6b7c",
            "created_at": "2024-05-01T09:00:00Z",
            "updated_at": "2024-05-01T09:00:00Z",
            "options": [
                {"id": "11111111-1111-1111-1111-111111111111", "option_text": "1868", "is_correct": true, "display_order": 0},
                {"id": "22222222-2222-2222-2222-222222222222", "option_text": "1912", "is_correct": false, "display_order": 1}
            ],
            "tags": [{"name": "history"}, {"name": "meiji"}]
        })
    }

    fn trivia_json() -> serde_json::Value {
        serde_json::json!({
            "id": "5b4c3d2e-1f0a-4b5c-8d7e-9f0a1b2c3d4e",
            "content_type": "trivia",
            "title": "Edo fact",
            "content": "Edo was renamed Tokyo in 1868.",
            "explanation": null,
            "author_id": "0a0c6b2e-4f5d-4f6a-9b7c-2d3e4f5a6b7c",
            "created_at": "2024-05-02T09:00:00Z",
            "updated_at": "2024-05-02T09:00:00Z",
            "tags": []
        })
    }

    #[test]
    fn feed_items_discriminate_on_content_type() {
        let feed: Vec<Content> =
            serde_json::from_value(serde_json::json!([quiz_json(), trivia_json()]))
                .expect("feed decodes");

        assert_eq!(feed.len(), 2);
        assert!(matches!(feed[0], Content::Quiz(_)));
        assert!(matches!(feed[1], Content::Trivia(_)));
        assert_eq!(feed[0].kind(), ContentKind::Quiz);
        assert_eq!(feed[1].title(), "Edo fact");
    }

    #[test]
    fn tag_insertion_order_survives_a_round_trip() {
        let content: Content = serde_json::from_value(quiz_json()).expect("quiz decodes");
        let names: Vec<&str> = content.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["history", "meiji"]);

        let reencoded = serde_json::to_value(&content).expect("quiz encodes");
        let decoded: Content = serde_json::from_value(reencoded).expect("quiz re-decodes");
        assert_eq!(decoded, content);
    }

    #[test]
    fn quiz_detail_tolerates_the_content_type_discriminator() {
        // `/quizzes/{id}` returns the same shape the tagged feed union uses; the
        // plain struct must accept the extra discriminator field.
        let quiz: Quiz = serde_json::from_value(quiz_json()).expect("quiz decodes");
        assert_eq!(quiz.options.len(), 2);
        assert!(quiz.options[0].is_correct);
    }

    #[test]
    fn enums_use_the_backend_wire_names() {
        assert_eq!(
            serde_json::to_value(ReportCategory::MajorError).expect("encodes"),
            serde_json::json!("major_error")
        );
        assert_eq!(
            serde_json::to_value(ReportStatus::InProgress).expect("encodes"),
            serde_json::json!("in_progress")
        );
        assert_eq!(
            serde_json::to_value(Role::Student).expect("encodes"),
            serde_json::json!("student")
        );
    }

    #[test]
    fn optional_update_fields_are_omitted_when_unset() {
        let update = UserUpdate {
            nickname: Some("rin".to_owned()),
            ..UserUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).expect("encodes"),
            serde_json::json!({"nickname": "rin"})
        );
    }
}
