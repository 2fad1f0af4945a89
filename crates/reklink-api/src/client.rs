//! The authenticated API client: one method per backend endpoint, no business
//! logic. Callers own the token; nothing here reads or writes session state.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{ApiError, decode_empty, decode_json};
use crate::models::{
    AnswerCreate, AnswerResult, Content, ContentInfo, DashboardSummary, Interaction, Notification,
    PopularTag,
    Quiz, QuizCreate, QuizUpdate, Report, ReportCreate, ReportDetails, ReportStatusUpdate,
    ReportedContent, SearchResult, StudentDetails, TeacherCreate, TeacherStatusUpdate, Team,
    TeamCreate, TeamJoin, Token, Trivia, TriviaCreate, TriviaUpdate, User, UserAnswer,
    UserCreate, UserStats, UserUpdate,
};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const ENV_API_BASE_URL: &str = "REKLINK_API_BASE_URL";
pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BaseUrlError {
    #[error("base url must not be empty")]
    Empty,
    #[error("base url must use http:// or https:// and include a host")]
    Invalid,
}

pub fn normalize_base_url(raw: &str) -> Result<String, BaseUrlError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(BaseUrlError::Empty);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(BaseUrlError::Invalid);
    }
    let Some((_, host)) = trimmed.split_once("://") else {
        return Err(BaseUrlError::Invalid);
    };
    if host.trim().is_empty() || host.starts_with('/') {
        return Err(BaseUrlError::Invalid);
    }
    Ok(trimmed.to_string())
}

/// Resolves the API base URL from the environment, falling back to the local
/// default. Returns the normalized URL and which source supplied it.
pub fn resolve_api_base_url() -> Result<(String, &'static str), BaseUrlError> {
    if let Some(base_url) = env_non_empty(ENV_API_BASE_URL) {
        return normalize_base_url(&base_url).map(|normalized| (normalized, ENV_API_BASE_URL));
    }
    normalize_base_url(DEFAULT_API_BASE_URL).map(|normalized| (normalized, "default"))
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, BaseUrlError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_env() -> Result<Self, BaseUrlError> {
        let (base_url, source) = resolve_api_base_url()?;
        tracing::debug!(%base_url, source, "resolved API base url");
        Self::new(base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    // --- path helpers ---

    #[must_use]
    pub fn quiz_path(quiz_id: Uuid) -> String {
        format!("/quizzes/{quiz_id}")
    }

    #[must_use]
    pub fn quiz_answer_path(quiz_id: Uuid) -> String {
        format!("/quizzes/{quiz_id}/answer")
    }

    #[must_use]
    pub fn my_quiz_answer_path(quiz_id: Uuid) -> String {
        format!("/quizzes/{quiz_id}/answers/me")
    }

    #[must_use]
    pub fn fact_path(fact_id: Uuid) -> String {
        format!("/facts/{fact_id}")
    }

    #[must_use]
    pub fn team_path(team_id: Uuid) -> String {
        format!("/teams/{team_id}")
    }

    #[must_use]
    pub fn team_students_path(team_id: Uuid) -> String {
        format!("/teams/{team_id}/students")
    }

    #[must_use]
    pub fn regenerate_code_path(team_id: Uuid) -> String {
        format!("/teams/{team_id}/regenerate-code")
    }

    #[must_use]
    pub fn like_path(content_id: Uuid) -> String {
        format!("/contents/{content_id}/like")
    }

    #[must_use]
    pub fn save_path(content_id: Uuid) -> String {
        format!("/contents/{content_id}/save")
    }

    #[must_use]
    pub fn report_resolve_path(report_id: Uuid) -> String {
        format!("/reports/{report_id}/resolve")
    }

    #[must_use]
    pub fn report_content_path(report_id: Uuid) -> String {
        format!("/reports/{report_id}/content")
    }

    #[must_use]
    pub fn report_path(report_id: Uuid) -> String {
        format!("/reports/{report_id}")
    }

    #[must_use]
    pub fn dashboard_summary_path(team_id: Option<Uuid>) -> String {
        match team_id {
            Some(team_id) => format!("/dashboard/summary?team_id={team_id}"),
            None => "/dashboard/summary".to_owned(),
        }
    }

    #[must_use]
    pub fn popular_tags_path(team_id: Option<Uuid>) -> String {
        match team_id {
            Some(team_id) => format!("/dashboard/popular-tags?team_id={team_id}"),
            None => "/dashboard/popular-tags".to_owned(),
        }
    }

    #[must_use]
    pub fn student_path(student_id: Uuid) -> String {
        format!("/students/{student_id}")
    }

    #[must_use]
    pub fn teacher_status_path(teacher_id: Uuid) -> String {
        format!("/admin/teachers/{teacher_id}/status")
    }

    #[must_use]
    pub fn admin_teacher_path(teacher_id: Uuid) -> String {
        format!("/admin/teachers/{teacher_id}")
    }

    #[must_use]
    pub fn admin_content_path(content_id: Uuid) -> String {
        format!("/admin/content/{content_id}")
    }

    // --- request plumbing ---

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, authenticated = token.is_some(), "api request");
        let builder = self
            .http
            .request(method, self.endpoint(path))
            .header(CONTENT_TYPE, "application/json");
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path, token).send().await?;
        decode_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, path, token)
            .json(body)
            .send()
            .await?;
        decode_json(response).await
    }

    async fn post_bare<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path, Some(token)).send().await?;
        decode_json(response).await
    }

    async fn post_bare_empty(&self, path: &str, token: &str) -> Result<(), ApiError> {
        let response = self.request(Method::POST, path, Some(token)).send().await?;
        decode_empty(response).await
    }

    async fn put_json<B, T>(&self, path: &str, token: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::PUT, path, Some(token))
            .json(body)
            .send()
            .await?;
        decode_json(response).await
    }

    async fn delete_empty(&self, path: &str, token: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path, Some(token)).send().await?;
        decode_empty(response).await
    }

    // --- auth ---

    /// The one endpoint that is not JSON: the backend's OAuth2 form flow expects
    /// `application/x-www-form-urlencoded` with `username`/`password` fields.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        tracing::debug!(path = "/auth/login", "api request");
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .form(&[("username", email), ("password", password)])
            .send()
            .await?;
        decode_json(response).await
    }

    pub async fn register(&self, payload: &UserCreate) -> Result<User, ApiError> {
        self.post_json("/auth/register", None, payload).await
    }

    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        self.get_json("/auth/me", Some(token)).await
    }

    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.post_bare_empty("/auth/logout", token).await
    }

    pub async fn update_profile(&self, token: &str, payload: &UserUpdate) -> Result<User, ApiError> {
        self.put_json("/auth/profile", token, payload).await
    }

    pub async fn delete_account(&self, token: &str) -> Result<(), ApiError> {
        self.delete_empty("/auth/account", token).await
    }

    // --- teams ---

    /// 404 here means "not part of any active team"; the home screen treats that
    /// as the join sub-flow, not a failure.
    pub async fn my_team(&self, token: &str) -> Result<Team, ApiError> {
        self.get_json("/teams/me", Some(token)).await
    }

    pub async fn join_team(&self, token: &str, payload: &TeamJoin) -> Result<Team, ApiError> {
        self.post_json("/teams/join", Some(token), payload).await
    }

    pub async fn create_team(&self, token: &str, payload: &TeamCreate) -> Result<Team, ApiError> {
        self.post_json("/teams/", Some(token), payload).await
    }

    pub async fn list_teams(&self, token: &str) -> Result<Vec<Team>, ApiError> {
        self.get_json("/teams/", Some(token)).await
    }

    pub async fn team_detail(&self, token: &str, team_id: Uuid) -> Result<Team, ApiError> {
        self.get_json(&Self::team_path(team_id), Some(token)).await
    }

    pub async fn team_students(&self, token: &str, team_id: Uuid) -> Result<Vec<User>, ApiError> {
        self.get_json(&Self::team_students_path(team_id), Some(token))
            .await
    }

    pub async fn regenerate_join_code(&self, token: &str, team_id: Uuid) -> Result<Team, ApiError> {
        self.post_bare(&Self::regenerate_code_path(team_id), token)
            .await
    }

    // --- contents ---

    pub async fn feed(&self, token: &str) -> Result<Vec<Content>, ApiError> {
        self.get_json("/feed", Some(token)).await
    }

    /// Public listing, no token required.
    pub async fn list_quizzes(&self) -> Result<Vec<Quiz>, ApiError> {
        self.get_json("/quizzes", None).await
    }

    pub async fn create_quiz(&self, token: &str, payload: &QuizCreate) -> Result<Quiz, ApiError> {
        self.post_json("/quizzes", Some(token), payload).await
    }

    pub async fn quiz_detail(&self, token: &str, quiz_id: Uuid) -> Result<Quiz, ApiError> {
        self.get_json(&Self::quiz_path(quiz_id), Some(token)).await
    }

    pub async fn update_quiz(
        &self,
        token: &str,
        quiz_id: Uuid,
        payload: &QuizUpdate,
    ) -> Result<Quiz, ApiError> {
        self.put_json(&Self::quiz_path(quiz_id), token, payload).await
    }

    pub async fn delete_quiz(&self, token: &str, quiz_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::quiz_path(quiz_id), token).await
    }

    pub async fn submit_answer(
        &self,
        token: &str,
        quiz_id: Uuid,
        payload: &AnswerCreate,
    ) -> Result<AnswerResult, ApiError> {
        self.post_json(&Self::quiz_answer_path(quiz_id), Some(token), payload)
            .await
    }

    pub async fn my_answer_for_quiz(
        &self,
        token: &str,
        quiz_id: Uuid,
    ) -> Result<UserAnswer, ApiError> {
        self.get_json(&Self::my_quiz_answer_path(quiz_id), Some(token))
            .await
    }

    pub async fn my_answers(&self, token: &str) -> Result<Vec<UserAnswer>, ApiError> {
        self.get_json("/quizzes/answers/me", Some(token)).await
    }

    pub async fn list_facts(&self) -> Result<Vec<Trivia>, ApiError> {
        self.get_json("/facts", None).await
    }

    pub async fn create_trivia(
        &self,
        token: &str,
        payload: &TriviaCreate,
    ) -> Result<Trivia, ApiError> {
        self.post_json("/facts", Some(token), payload).await
    }

    pub async fn trivia_detail(&self, token: &str, fact_id: Uuid) -> Result<Trivia, ApiError> {
        self.get_json(&Self::fact_path(fact_id), Some(token)).await
    }

    pub async fn update_trivia(
        &self,
        token: &str,
        fact_id: Uuid,
        payload: &TriviaUpdate,
    ) -> Result<Trivia, ApiError> {
        self.put_json(&Self::fact_path(fact_id), token, payload).await
    }

    pub async fn delete_trivia(&self, token: &str, fact_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::fact_path(fact_id), token).await
    }

    // --- interactions ---

    pub async fn like_content(&self, token: &str, content_id: Uuid) -> Result<Interaction, ApiError> {
        self.post_bare(&Self::like_path(content_id), token).await
    }

    pub async fn unlike_content(&self, token: &str, content_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::like_path(content_id), token).await
    }

    pub async fn save_content(&self, token: &str, content_id: Uuid) -> Result<Interaction, ApiError> {
        self.post_bare(&Self::save_path(content_id), token).await
    }

    pub async fn unsave_content(&self, token: &str, content_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::save_path(content_id), token).await
    }

    // --- my page ---

    pub async fn my_posts(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        self.get_json("/users/me/posts", Some(token)).await
    }

    pub async fn my_likes(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        self.get_json("/users/me/likes", Some(token)).await
    }

    pub async fn my_bookmarks(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        self.get_json("/users/me/bookmarks", Some(token)).await
    }

    pub async fn my_statistics(&self, token: &str) -> Result<UserStats, ApiError> {
        self.get_json("/users/me/statistics", Some(token)).await
    }

    // --- reports ---

    pub async fn create_report(
        &self,
        token: &str,
        payload: &ReportCreate,
    ) -> Result<ReportDetails, ApiError> {
        self.post_json("/reports/", Some(token), payload).await
    }

    pub async fn my_reports(&self, token: &str) -> Result<Vec<Report>, ApiError> {
        self.get_json("/reports/me", Some(token)).await
    }

    pub async fn list_reports(&self, token: &str) -> Result<Vec<ReportDetails>, ApiError> {
        self.get_json("/reports/", Some(token)).await
    }

    pub async fn resolve_report(
        &self,
        token: &str,
        report_id: Uuid,
        payload: &ReportStatusUpdate,
    ) -> Result<ReportDetails, ApiError> {
        self.put_json(&Self::report_resolve_path(report_id), token, payload)
            .await
    }

    pub async fn report_content(
        &self,
        token: &str,
        report_id: Uuid,
    ) -> Result<ReportedContent, ApiError> {
        self.get_json(&Self::report_content_path(report_id), Some(token))
            .await
    }

    pub async fn delete_report(&self, token: &str, report_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::report_path(report_id), token).await
    }

    // --- dashboard ---

    pub async fn dashboard_summary(
        &self,
        token: &str,
        team_id: Option<Uuid>,
    ) -> Result<DashboardSummary, ApiError> {
        self.get_json(&Self::dashboard_summary_path(team_id), Some(token))
            .await
    }

    pub async fn popular_tags(
        &self,
        token: &str,
        team_id: Option<Uuid>,
    ) -> Result<Vec<PopularTag>, ApiError> {
        self.get_json(&Self::popular_tags_path(team_id), Some(token))
            .await
    }

    // --- students (teacher) ---

    pub async fn student_detail(
        &self,
        token: &str,
        student_id: Uuid,
    ) -> Result<StudentDetails, ApiError> {
        self.get_json(&Self::student_path(student_id), Some(token))
            .await
    }

    // --- common ---

    pub async fn search(
        &self,
        token: &str,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SearchResult, ApiError> {
        // Built through reqwest's query encoder; the keyword is user input.
        let response = self
            .request(Method::GET, "/search", Some(token))
            .query(&[("q", query)])
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?;
        decode_json(response).await
    }

    pub async fn notifications(&self, token: &str) -> Result<Vec<Notification>, ApiError> {
        self.get_json("/notifications", Some(token)).await
    }

    // --- admin ---

    pub async fn list_teachers(&self, token: &str) -> Result<Vec<User>, ApiError> {
        self.get_json("/admin/teachers", Some(token)).await
    }

    pub async fn create_teacher(
        &self,
        token: &str,
        payload: &TeacherCreate,
    ) -> Result<User, ApiError> {
        self.post_json("/admin/teachers", Some(token), payload).await
    }

    pub async fn set_teacher_status(
        &self,
        token: &str,
        teacher_id: Uuid,
        payload: &TeacherStatusUpdate,
    ) -> Result<User, ApiError> {
        self.put_json(&Self::teacher_status_path(teacher_id), token, payload)
            .await
    }

    pub async fn delete_teacher(&self, token: &str, teacher_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::admin_teacher_path(teacher_id), token)
            .await
    }

    pub async fn admin_delete_content(&self, token: &str, content_id: Uuid) -> Result<(), ApiError> {
        self.delete_empty(&Self::admin_content_path(content_id), token)
            .await
    }
}
