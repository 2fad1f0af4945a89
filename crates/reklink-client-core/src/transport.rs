//! Trait seam between screen controllers and the HTTP client.
//!
//! Controllers depend on [`ReklinkApi`] rather than on `ApiClient` directly, so
//! tests drive them with stub transports and assert on call ordering without a
//! network.

use async_trait::async_trait;
use uuid::Uuid;

use reklink_api::ApiError;
use reklink_api::client::ApiClient;
use reklink_api::models::{
    AnswerCreate, AnswerResult, Content, ContentInfo, DashboardSummary, PopularTag, Quiz,
    QuizCreate, Report, ReportCreate, ReportDetails, ReportStatusUpdate, SearchResult,
    StudentDetails, Team, TeamCreate, Token, Trivia, TriviaCreate, User, UserAnswer, UserCreate,
    UserStats,
};

/// The backend operations the client core consumes. One method per endpoint,
/// mirroring `ApiClient`'s signatures.
#[async_trait]
pub trait ReklinkApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError>;
    async fn register(&self, payload: &UserCreate) -> Result<User, ApiError>;
    async fn me(&self, token: &str) -> Result<User, ApiError>;
    async fn logout(&self, token: &str) -> Result<(), ApiError>;

    async fn my_team(&self, token: &str) -> Result<Team, ApiError>;
    async fn join_team(&self, token: &str, join_code: &str) -> Result<Team, ApiError>;
    async fn list_teams(&self, token: &str) -> Result<Vec<Team>, ApiError>;
    async fn create_team(&self, token: &str, payload: &TeamCreate) -> Result<Team, ApiError>;
    async fn team_detail(&self, token: &str, team_id: Uuid) -> Result<Team, ApiError>;
    async fn team_students(&self, token: &str, team_id: Uuid) -> Result<Vec<User>, ApiError>;
    async fn regenerate_join_code(&self, token: &str, team_id: Uuid) -> Result<Team, ApiError>;

    async fn student_detail(
        &self,
        token: &str,
        student_id: Uuid,
    ) -> Result<StudentDetails, ApiError>;

    async fn feed(&self, token: &str) -> Result<Vec<Content>, ApiError>;
    async fn quiz_detail(&self, token: &str, quiz_id: Uuid) -> Result<Quiz, ApiError>;
    async fn trivia_detail(&self, token: &str, fact_id: Uuid) -> Result<Trivia, ApiError>;
    async fn submit_answer(
        &self,
        token: &str,
        quiz_id: Uuid,
        payload: &AnswerCreate,
    ) -> Result<AnswerResult, ApiError>;
    async fn create_quiz(&self, token: &str, payload: &QuizCreate) -> Result<Quiz, ApiError>;
    async fn create_trivia(&self, token: &str, payload: &TriviaCreate) -> Result<Trivia, ApiError>;

    async fn my_statistics(&self, token: &str) -> Result<UserStats, ApiError>;
    async fn my_posts(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError>;
    async fn my_likes(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError>;
    async fn my_answers(&self, token: &str) -> Result<Vec<UserAnswer>, ApiError>;

    async fn create_report(
        &self,
        token: &str,
        payload: &ReportCreate,
    ) -> Result<ReportDetails, ApiError>;
    async fn my_reports(&self, token: &str) -> Result<Vec<Report>, ApiError>;
    async fn list_reports(&self, token: &str) -> Result<Vec<ReportDetails>, ApiError>;
    async fn resolve_report(
        &self,
        token: &str,
        report_id: Uuid,
        payload: &ReportStatusUpdate,
    ) -> Result<ReportDetails, ApiError>;

    async fn dashboard_summary(
        &self,
        token: &str,
        team_id: Option<Uuid>,
    ) -> Result<DashboardSummary, ApiError>;
    async fn popular_tags(
        &self,
        token: &str,
        team_id: Option<Uuid>,
    ) -> Result<Vec<PopularTag>, ApiError>;

    async fn search(
        &self,
        token: &str,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SearchResult, ApiError>;
}

#[async_trait]
impl ReklinkApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        Self::login(self, email, password).await
    }

    async fn register(&self, payload: &UserCreate) -> Result<User, ApiError> {
        Self::register(self, payload).await
    }

    async fn me(&self, token: &str) -> Result<User, ApiError> {
        Self::me(self, token).await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        Self::logout(self, token).await
    }

    async fn my_team(&self, token: &str) -> Result<Team, ApiError> {
        Self::my_team(self, token).await
    }

    async fn join_team(&self, token: &str, join_code: &str) -> Result<Team, ApiError> {
        let payload = reklink_api::models::TeamJoin {
            join_code: join_code.to_owned(),
        };
        Self::join_team(self, token, &payload).await
    }

    async fn list_teams(&self, token: &str) -> Result<Vec<Team>, ApiError> {
        Self::list_teams(self, token).await
    }

    async fn create_team(&self, token: &str, payload: &TeamCreate) -> Result<Team, ApiError> {
        Self::create_team(self, token, payload).await
    }

    async fn team_detail(&self, token: &str, team_id: Uuid) -> Result<Team, ApiError> {
        Self::team_detail(self, token, team_id).await
    }

    async fn team_students(&self, token: &str, team_id: Uuid) -> Result<Vec<User>, ApiError> {
        Self::team_students(self, token, team_id).await
    }

    async fn regenerate_join_code(&self, token: &str, team_id: Uuid) -> Result<Team, ApiError> {
        Self::regenerate_join_code(self, token, team_id).await
    }

    async fn student_detail(
        &self,
        token: &str,
        student_id: Uuid,
    ) -> Result<StudentDetails, ApiError> {
        Self::student_detail(self, token, student_id).await
    }

    async fn feed(&self, token: &str) -> Result<Vec<Content>, ApiError> {
        Self::feed(self, token).await
    }

    async fn quiz_detail(&self, token: &str, quiz_id: Uuid) -> Result<Quiz, ApiError> {
        Self::quiz_detail(self, token, quiz_id).await
    }

    async fn trivia_detail(&self, token: &str, fact_id: Uuid) -> Result<Trivia, ApiError> {
        Self::trivia_detail(self, token, fact_id).await
    }

    async fn submit_answer(
        &self,
        token: &str,
        quiz_id: Uuid,
        payload: &AnswerCreate,
    ) -> Result<AnswerResult, ApiError> {
        Self::submit_answer(self, token, quiz_id, payload).await
    }

    async fn create_quiz(&self, token: &str, payload: &QuizCreate) -> Result<Quiz, ApiError> {
        Self::create_quiz(self, token, payload).await
    }

    async fn create_trivia(&self, token: &str, payload: &TriviaCreate) -> Result<Trivia, ApiError> {
        Self::create_trivia(self, token, payload).await
    }

    async fn my_statistics(&self, token: &str) -> Result<UserStats, ApiError> {
        Self::my_statistics(self, token).await
    }

    async fn my_posts(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        Self::my_posts(self, token).await
    }

    async fn my_likes(&self, token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        Self::my_likes(self, token).await
    }

    async fn my_answers(&self, token: &str) -> Result<Vec<UserAnswer>, ApiError> {
        Self::my_answers(self, token).await
    }

    async fn create_report(
        &self,
        token: &str,
        payload: &ReportCreate,
    ) -> Result<ReportDetails, ApiError> {
        Self::create_report(self, token, payload).await
    }

    async fn my_reports(&self, token: &str) -> Result<Vec<Report>, ApiError> {
        Self::my_reports(self, token).await
    }

    async fn list_reports(&self, token: &str) -> Result<Vec<ReportDetails>, ApiError> {
        Self::list_reports(self, token).await
    }

    async fn resolve_report(
        &self,
        token: &str,
        report_id: Uuid,
        payload: &ReportStatusUpdate,
    ) -> Result<ReportDetails, ApiError> {
        Self::resolve_report(self, token, report_id, payload).await
    }

    async fn dashboard_summary(
        &self,
        token: &str,
        team_id: Option<Uuid>,
    ) -> Result<DashboardSummary, ApiError> {
        Self::dashboard_summary(self, token, team_id).await
    }

    async fn popular_tags(
        &self,
        token: &str,
        team_id: Option<Uuid>,
    ) -> Result<Vec<PopularTag>, ApiError> {
        Self::popular_tags(self, token, team_id).await
    }

    async fn search(
        &self,
        token: &str,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<SearchResult, ApiError> {
        Self::search(self, token, query, limit, offset).await
    }
}
