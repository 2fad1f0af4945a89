//! End-to-end controller flows against a stub transport: guard ordering, the
//! home screen's join sub-flow, answer grading, and validation short-circuits.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use reklink_api::ApiError;
use reklink_api::models::{
    AnswerCreate, AnswerResult, Content, ContentInfo, ContentKind, DashboardSummary, PopularTag,
    Quiz, QuizCreate, QuizOption, Report, ReportCategory, ReportCreate, ReportDetails,
    ReportStatus, ReportStatusUpdate, Role, SearchResult, StudentDetails, Team, TeamCreate, Token,
    Trivia, TriviaCreate, User, UserAnswer, UserCreate, UserStats,
};
use reklink_client_core::screens::{
    AuthFlow, ContentDetail, ContentDetailScreen, CorrectionScreen, CreateScreen, DashboardScreen,
    HomeScreen, MyPageScreen, OptionMark, ReportScreen, SearchScreen, StudentDetailScreen,
    SubmitOutcome, TeamDetailScreen, TeamsScreen,
};
use reklink_client_core::{Route, ScreenState, SessionService};

// --- fixtures ---

fn user(role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        email: format!("{}@example.com", role.as_str()),
        nickname: Some(role.as_str().to_owned()),
        role,
        profile_image_url: None,
        is_active: true,
        created_at: Utc::now(),
    }
}

fn team() -> Team {
    Team {
        id: Uuid::new_v4(),
        name: "3-B".to_owned(),
        join_code: "123456".to_owned(),
        created_at: Utc::now(),
    }
}

fn quiz(correct_id: Uuid, wrong_id: Uuid) -> Quiz {
    Quiz {
        id: Uuid::new_v4(),
        title: "Meiji era".to_owned(),
        content: "When did the Meiji era begin?".to_owned(),
        explanation: Some("It began in 1868.".to_owned()),
        author_id: Uuid::new_v4(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
        options: vec![
            QuizOption {
                id: correct_id,
                option_text: "1868".to_owned(),
                is_correct: true,
                display_order: 0,
            },
            QuizOption {
                id: wrong_id,
                option_text: "1912".to_owned(),
                is_correct: false,
                display_order: 1,
            },
        ],
        tags: Vec::new(),
    }
}

fn stats() -> UserStats {
    UserStats {
        total_quizzes_answered: 40,
        correct_answers: 31,
        accuracy: 77.5,
        posts_created: 6,
    }
}

fn content_info(title: &str) -> ContentInfo {
    ContentInfo {
        id: Uuid::new_v4(),
        content_type: ContentKind::Quiz,
        title: title.to_owned(),
        created_at: Utc::now(),
    }
}

fn authed_session(role: Role) -> SessionService {
    let session = SessionService::new();
    session.login("tok".to_owned(), user(role));
    session
}

fn not_stubbed(name: &str) -> ApiError {
    ApiError::Decode {
        message: format!("{name} not stubbed"),
    }
}

// --- stub transport ---

/// Records every call; each response is configured per test. Unconfigured
/// endpoints fail with a decode error so an unexpected call is visible.
#[derive(Default)]
struct StubApi {
    calls: Mutex<Vec<String>>,
    team: Mutex<Option<Team>>,
    /// Join codes the backend would accept.
    accepted_code: Mutex<Option<String>>,
    feed_items: Mutex<Vec<Content>>,
    quiz: Mutex<Option<Quiz>>,
    answer: Mutex<Option<AnswerResult>>,
    summary: Mutex<Option<DashboardSummary>>,
    tags: Mutex<Vec<PopularTag>>,
    reports: Mutex<Vec<ReportDetails>>,
    login_user: Mutex<Option<User>>,
    students: Mutex<Vec<User>>,
    student: Mutex<Option<StudentDetails>>,
    stats: Mutex<Option<UserStats>>,
    posts: Mutex<Vec<ContentInfo>>,
    likes: Mutex<Vec<ContentInfo>>,
    answers: Mutex<Vec<UserAnswer>>,
    own_reports: Mutex<Vec<Report>>,
}

impl StubApi {
    fn record(&self, name: &str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(name.to_owned());
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl reklink_client_core::ReklinkApi for StubApi {
    async fn login(&self, _email: &str, _password: &str) -> Result<Token, ApiError> {
        self.record("login");
        if self.login_user.lock().ok().and_then(|u| u.clone()).is_some() {
            Ok(Token {
                access_token: "issued-token".to_owned(),
                token_type: "bearer".to_owned(),
            })
        } else {
            Err(not_stubbed("login"))
        }
    }

    async fn register(&self, _payload: &UserCreate) -> Result<User, ApiError> {
        self.record("register");
        Err(not_stubbed("register"))
    }

    async fn me(&self, _token: &str) -> Result<User, ApiError> {
        self.record("me");
        self.login_user
            .lock()
            .ok()
            .and_then(|u| u.clone())
            .ok_or_else(|| not_stubbed("me"))
    }

    async fn logout(&self, _token: &str) -> Result<(), ApiError> {
        self.record("logout");
        Err(not_stubbed("logout"))
    }

    async fn my_team(&self, _token: &str) -> Result<Team, ApiError> {
        self.record("my_team");
        self.team
            .lock()
            .ok()
            .and_then(|t| t.clone())
            .ok_or_else(|| ApiError::NotFound {
                detail: "Not Found: User is not part of any active team".to_owned(),
            })
    }

    async fn join_team(&self, _token: &str, join_code: &str) -> Result<Team, ApiError> {
        self.record("join_team");
        let accepted = self.accepted_code.lock().ok().and_then(|c| c.clone());
        if accepted.as_deref() == Some(join_code) {
            let joined = team();
            if let Ok(mut slot) = self.team.lock() {
                *slot = Some(joined.clone());
            }
            Ok(joined)
        } else {
            Err(ApiError::NotFound {
                detail: "Not Found: invalid join code".to_owned(),
            })
        }
    }

    async fn list_teams(&self, _token: &str) -> Result<Vec<Team>, ApiError> {
        self.record("list_teams");
        Ok(self.team.lock().ok().and_then(|t| t.clone()).into_iter().collect())
    }

    async fn create_team(&self, _token: &str, payload: &TeamCreate) -> Result<Team, ApiError> {
        self.record("create_team");
        Ok(Team {
            name: payload.name.clone(),
            ..team()
        })
    }

    async fn team_detail(&self, _token: &str, _team_id: Uuid) -> Result<Team, ApiError> {
        self.record("team_detail");
        self.team
            .lock()
            .ok()
            .and_then(|t| t.clone())
            .ok_or_else(|| ApiError::NotFound {
                detail: "Not Found: team".to_owned(),
            })
    }

    async fn team_students(&self, _token: &str, _team_id: Uuid) -> Result<Vec<User>, ApiError> {
        self.record("team_students");
        Ok(self.students.lock().map(|s| s.clone()).unwrap_or_default())
    }

    async fn regenerate_join_code(&self, _token: &str, team_id: Uuid) -> Result<Team, ApiError> {
        self.record("regenerate_join_code");
        let mut rotated = self
            .team
            .lock()
            .ok()
            .and_then(|t| t.clone())
            .ok_or_else(|| not_stubbed("regenerate_join_code"))?;
        rotated.id = team_id;
        rotated.join_code = "654321".to_owned();
        Ok(rotated)
    }

    async fn student_detail(
        &self,
        _token: &str,
        _student_id: Uuid,
    ) -> Result<StudentDetails, ApiError> {
        self.record("student_detail");
        self.student
            .lock()
            .ok()
            .and_then(|s| s.clone())
            .ok_or_else(|| not_stubbed("student_detail"))
    }

    async fn feed(&self, _token: &str) -> Result<Vec<Content>, ApiError> {
        self.record("feed");
        Ok(self.feed_items.lock().map(|f| f.clone()).unwrap_or_default())
    }

    async fn quiz_detail(&self, _token: &str, _quiz_id: Uuid) -> Result<Quiz, ApiError> {
        self.record("quiz_detail");
        self.quiz
            .lock()
            .ok()
            .and_then(|q| q.clone())
            .ok_or_else(|| not_stubbed("quiz_detail"))
    }

    async fn trivia_detail(&self, _token: &str, _fact_id: Uuid) -> Result<Trivia, ApiError> {
        self.record("trivia_detail");
        Err(not_stubbed("trivia_detail"))
    }

    async fn submit_answer(
        &self,
        _token: &str,
        _quiz_id: Uuid,
        _payload: &AnswerCreate,
    ) -> Result<AnswerResult, ApiError> {
        self.record("submit_answer");
        self.answer
            .lock()
            .ok()
            .and_then(|a| a.clone())
            .ok_or_else(|| not_stubbed("submit_answer"))
    }

    async fn create_quiz(&self, _token: &str, payload: &QuizCreate) -> Result<Quiz, ApiError> {
        self.record("create_quiz");
        Ok(Quiz {
            title: payload.title.clone(),
            ..quiz(Uuid::new_v4(), Uuid::new_v4())
        })
    }

    async fn create_trivia(
        &self,
        _token: &str,
        _payload: &TriviaCreate,
    ) -> Result<Trivia, ApiError> {
        self.record("create_trivia");
        Err(not_stubbed("create_trivia"))
    }

    async fn my_statistics(&self, _token: &str) -> Result<UserStats, ApiError> {
        self.record("my_statistics");
        self.stats
            .lock()
            .ok()
            .and_then(|s| s.clone())
            .ok_or_else(|| not_stubbed("my_statistics"))
    }

    async fn my_posts(&self, _token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        self.record("my_posts");
        Ok(self.posts.lock().map(|p| p.clone()).unwrap_or_default())
    }

    async fn my_likes(&self, _token: &str) -> Result<Vec<ContentInfo>, ApiError> {
        self.record("my_likes");
        Ok(self.likes.lock().map(|l| l.clone()).unwrap_or_default())
    }

    async fn my_answers(&self, _token: &str) -> Result<Vec<UserAnswer>, ApiError> {
        self.record("my_answers");
        Ok(self.answers.lock().map(|a| a.clone()).unwrap_or_default())
    }

    async fn create_report(
        &self,
        _token: &str,
        _payload: &ReportCreate,
    ) -> Result<ReportDetails, ApiError> {
        self.record("create_report");
        Err(not_stubbed("create_report"))
    }

    async fn my_reports(&self, _token: &str) -> Result<Vec<Report>, ApiError> {
        self.record("my_reports");
        Ok(self.own_reports.lock().map(|r| r.clone()).unwrap_or_default())
    }

    async fn list_reports(&self, _token: &str) -> Result<Vec<ReportDetails>, ApiError> {
        self.record("list_reports");
        Ok(self.reports.lock().map(|r| r.clone()).unwrap_or_default())
    }

    async fn resolve_report(
        &self,
        _token: &str,
        report_id: Uuid,
        payload: &ReportStatusUpdate,
    ) -> Result<ReportDetails, ApiError> {
        self.record("resolve_report");
        let report = self
            .reports
            .lock()
            .ok()
            .and_then(|reports| reports.iter().find(|r| r.id == report_id).cloned())
            .ok_or_else(|| ApiError::NotFound {
                detail: "Not Found: report".to_owned(),
            })?;
        Ok(ReportDetails {
            status: payload.status,
            resolution_note: payload.resolution_note.clone(),
            resolved_at: Some(Utc::now()),
            ..report
        })
    }

    async fn dashboard_summary(
        &self,
        _token: &str,
        _team_id: Option<Uuid>,
    ) -> Result<DashboardSummary, ApiError> {
        self.record("dashboard_summary");
        self.summary
            .lock()
            .ok()
            .and_then(|s| s.clone())
            .ok_or_else(|| not_stubbed("dashboard_summary"))
    }

    async fn popular_tags(
        &self,
        _token: &str,
        _team_id: Option<Uuid>,
    ) -> Result<Vec<PopularTag>, ApiError> {
        self.record("popular_tags");
        Ok(self.tags.lock().map(|t| t.clone()).unwrap_or_default())
    }

    async fn search(
        &self,
        _token: &str,
        _query: &str,
        _limit: u32,
        _offset: u32,
    ) -> Result<SearchResult, ApiError> {
        self.record("search");
        Ok(SearchResult {
            items: Vec::new(),
            total: 0,
        })
    }
}

// --- home screen ---

#[tokio::test]
async fn unauthenticated_home_redirects_to_login_without_fetching() {
    let stub = Arc::new(StubApi::default());
    let screen = HomeScreen::new(stub.clone(), SessionService::new());

    let result = screen.refresh().await;
    assert!(matches!(result, Err(Route::Login)));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn teamless_student_lands_in_the_join_flow_after_one_call() {
    let stub = Arc::new(StubApi::default());
    let screen = HomeScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.refresh().await.expect("no redirect");
    match state {
        ScreenState::Joining { message } => {
            assert!(message.to_lowercase().contains("not found"), "{message}");
        }
        other => panic!("expected joining, got {other:?}"),
    }
    assert_eq!(stub.calls(), ["my_team"]);
}

#[tokio::test]
async fn student_with_a_team_gets_the_feed_after_the_membership_check() {
    let stub = Arc::new(StubApi::default());
    *stub.team.lock().expect("lock") = Some(team());
    let screen = HomeScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.refresh().await.expect("no redirect");
    assert!(state.is_ready());
    assert_eq!(stub.calls(), ["my_team", "feed"]);
}

#[tokio::test]
async fn valid_join_code_joins_and_reloads_the_screen() {
    let stub = Arc::new(StubApi::default());
    *stub.accepted_code.lock().expect("lock") = Some("123456".to_owned());
    let screen = HomeScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.submit_join_code(" 123456 ").await.expect("no redirect");
    let data = state.ready().expect("ready");
    assert_eq!(data.team.join_code, "123456");
    assert_eq!(stub.calls(), ["join_team", "my_team", "feed"]);
}

#[tokio::test]
async fn malformed_join_code_never_reaches_the_network() {
    let stub = Arc::new(StubApi::default());
    let screen = HomeScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.submit_join_code("12ab56").await.expect("no redirect");
    assert!(matches!(state, ScreenState::Joining { .. }));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn unauthenticated_join_submission_redirects_before_validation() {
    // The guard outranks input validation: no session means login, not a
    // form error.
    let stub = Arc::new(StubApi::default());
    let screen = HomeScreen::new(stub.clone(), SessionService::new());

    let result = screen.submit_join_code("12ab56").await;
    assert!(matches!(result, Err(Route::Login)));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn rejected_join_code_stays_in_the_join_flow() {
    let stub = Arc::new(StubApi::default());
    *stub.accepted_code.lock().expect("lock") = Some("999999".to_owned());
    let screen = HomeScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.submit_join_code("123456").await.expect("no redirect");
    assert!(matches!(state, ScreenState::Joining { .. }));
    assert_eq!(stub.calls(), ["join_team"]);
}

// --- role guard ---

#[tokio::test]
async fn teacher_opening_the_student_home_is_sent_to_their_dashboard() {
    let stub = Arc::new(StubApi::default());
    let screen = HomeScreen::new(stub.clone(), authed_session(Role::Teacher));

    let result = screen.refresh().await;
    assert!(matches!(result, Err(Route::TeacherDashboard)));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn teacher_cannot_author_content() {
    let stub = Arc::new(StubApi::default());
    let screen = CreateScreen::new(stub.clone(), authed_session(Role::Teacher));
    assert!(matches!(screen.guard(), Err(Route::TeacherDashboard)));
}

// --- content detail ---

#[tokio::test]
async fn wrong_answer_marks_the_pick_and_the_correct_option() {
    let correct_id = Uuid::new_v4();
    let wrong_id = Uuid::new_v4();
    let stub = Arc::new(StubApi::default());
    *stub.quiz.lock().expect("lock") = Some(quiz(correct_id, wrong_id));
    *stub.answer.lock().expect("lock") = Some(AnswerResult {
        is_correct: false,
        correct_option_id: correct_id,
        explanation: Some("It began in 1868.".to_owned()),
    });
    let screen = ContentDetailScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.load_quiz(Uuid::new_v4()).await.expect("no redirect");
    let detail = state.ready().expect("ready").clone();
    assert_eq!(detail.option_marks(), [OptionMark::Neutral, OptionMark::Neutral]);

    let state = screen.submit_answer(detail, wrong_id).await.expect("no redirect");
    let graded = state.ready().expect("ready");
    assert_eq!(
        graded.option_marks(),
        [OptionMark::Correct, OptionMark::Incorrect]
    );
    match graded {
        ContentDetail::Quiz { answer, .. } => {
            assert!(!answer.as_ref().expect("answer").is_correct);
        }
        ContentDetail::Trivia(_) => panic!("expected a quiz"),
    }
}

#[tokio::test]
async fn loading_a_quiz_twice_is_idempotent() {
    let stub = Arc::new(StubApi::default());
    *stub.quiz.lock().expect("lock") = Some(quiz(Uuid::new_v4(), Uuid::new_v4()));
    let screen = ContentDetailScreen::new(stub.clone(), authed_session(Role::Teacher));

    let id = Uuid::new_v4();
    let first = screen.load_quiz(id).await.expect("no redirect");
    let second = screen.load_quiz(id).await.expect("no redirect");
    assert_eq!(first, second);
    assert_eq!(stub.calls(), ["quiz_detail", "quiz_detail"]);
}

// --- dashboard ---

#[tokio::test]
async fn dashboard_is_ready_only_with_both_halves() {
    let stub = Arc::new(StubApi::default());
    *stub.summary.lock().expect("lock") = Some(DashboardSummary {
        total_students: 12,
        total_quizzes_answered: 340,
        overall_accuracy: 71.5,
        total_posts_created: 58,
        pending_reports_count: 3,
    });
    let screen = DashboardScreen::new(stub.clone(), authed_session(Role::Teacher));

    let state = screen.refresh(None).await.expect("no redirect");
    let data = state.ready().expect("ready");
    assert_eq!(data.summary.total_students, 12);

    // With the summary missing, the joined fetch fails as a whole.
    *stub.summary.lock().expect("lock") = None;
    let state = screen.refresh(None).await.expect("no redirect");
    assert!(state.error_message().is_some());
}

// --- authoring ---

#[tokio::test]
async fn invalid_quiz_draft_short_circuits_before_the_network() {
    let stub = Arc::new(StubApi::default());
    let screen = CreateScreen::new(stub.clone(), authed_session(Role::Student));

    let draft = QuizCreate {
        title: "Meiji era".to_owned(),
        content: "When?".to_owned(),
        explanation: None,
        options: Vec::new(),
        tags: None,
    };
    let outcome = screen.submit_quiz(&draft).await.expect("no redirect");
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(stub.calls().is_empty());
}

// --- correction queue ---

#[tokio::test]
async fn resolving_a_report_updates_the_queue_in_place() {
    let report = ReportDetails {
        id: Uuid::new_v4(),
        content_id: Uuid::new_v4(),
        category: ReportCategory::MajorError,
        description: "The correct answer is marked wrong.".to_owned(),
        status: ReportStatus::Pending,
        created_at: Utc::now(),
        resolved_at: None,
        reporter_id: Uuid::new_v4(),
        reporter_nickname: Some("rin".to_owned()),
        content_title: "Meiji era".to_owned(),
        resolution_note: None,
    };
    let stub = Arc::new(StubApi::default());
    *stub.reports.lock().expect("lock") = vec![report.clone()];
    let screen = CorrectionScreen::new(stub.clone(), authed_session(Role::Teacher));

    let state = screen.refresh().await.expect("no redirect");
    let mut queue = state.ready().expect("ready").clone();
    assert_eq!(queue.open_count(), 1);
    assert_eq!(queue.closed().count(), 0);

    screen
        .resolve(
            &mut queue,
            report.id,
            ReportStatus::Resolved,
            Some("Fixed the answer key.".to_owned()),
        )
        .await
        .expect("resolves");
    assert_eq!(queue.open_count(), 0);
    let closed: Vec<_> = queue.closed().collect();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].resolution_note.as_deref(), Some("Fixed the answer key."));
}

// --- my page ---

#[tokio::test]
async fn my_page_loads_all_five_sections_together() {
    let stub = Arc::new(StubApi::default());
    *stub.stats.lock().expect("lock") = Some(stats());
    *stub.posts.lock().expect("lock") = vec![content_info("Meiji era")];
    *stub.likes.lock().expect("lock") = vec![content_info("Edo fact")];
    let screen = MyPageScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.refresh().await.expect("no redirect");
    let data = state.ready().expect("ready");
    assert_eq!(data.stats.correct_answers, 31);
    assert_eq!(data.posts.len(), 1);
    assert_eq!(data.likes.len(), 1);
    assert!(data.answers.is_empty());
    assert!(data.reports.is_empty());

    let mut calls = stub.calls();
    calls.sort();
    assert_eq!(
        calls,
        ["my_answers", "my_likes", "my_posts", "my_reports", "my_statistics"]
    );
}

#[tokio::test]
async fn one_failing_section_fails_the_whole_my_page() {
    // Statistics unconfigured; the other four sections would succeed.
    let stub = Arc::new(StubApi::default());
    let screen = MyPageScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.refresh().await.expect("no redirect");
    assert!(state.error_message().is_some());
}

// --- report ---

#[tokio::test]
async fn short_report_description_never_reaches_the_network() {
    let stub = Arc::new(StubApi::default());
    let screen = ReportScreen::new(stub.clone(), authed_session(Role::Student));

    let draft = ReportCreate {
        content_id: Uuid::new_v4(),
        category: ReportCategory::MinorError,
        description: "typo".to_owned(),
    };
    let outcome = screen.submit(&draft).await.expect("no redirect");
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert!(stub.calls().is_empty());
}

// --- teams ---

#[tokio::test]
async fn creating_and_rotating_teams_updates_the_list() {
    let stub = Arc::new(StubApi::default());
    *stub.team.lock().expect("lock") = Some(team());
    let screen = TeamsScreen::new(stub.clone(), authed_session(Role::Teacher));

    let state = screen.refresh().await.expect("no redirect");
    let mut data = state.ready().expect("ready").clone();
    assert_eq!(data.teams.len(), 1);
    let first_id = data.teams[0].id;

    screen.create(&mut data, "2-A").await.expect("creates");
    assert_eq!(data.teams.len(), 2);

    screen
        .regenerate_join_code(&mut data, first_id)
        .await
        .expect("rotates");
    let rotated = data.teams.iter().find(|t| t.id == first_id).expect("kept");
    assert_eq!(rotated.join_code, "654321");
}

// --- team detail ---

#[tokio::test]
async fn team_detail_pairs_metadata_with_the_roster() {
    let stub = Arc::new(StubApi::default());
    *stub.team.lock().expect("lock") = Some(team());
    *stub.students.lock().expect("lock") = vec![user(Role::Student), user(Role::Student)];
    let screen = TeamDetailScreen::new(stub.clone(), authed_session(Role::Teacher));

    let state = screen.load(Uuid::new_v4()).await.expect("no redirect");
    let data = state.ready().expect("ready");
    assert_eq!(data.team.name, "3-B");
    assert_eq!(data.students.len(), 2);

    let mut calls = stub.calls();
    calls.sort();
    assert_eq!(calls, ["team_detail", "team_students"]);
}

// --- student detail ---

#[tokio::test]
async fn student_detail_loads_the_joined_payload() {
    let stub = Arc::new(StubApi::default());
    *stub.student.lock().expect("lock") = Some(StudentDetails {
        profile: user(Role::Student),
        stats: stats(),
        recent_posts: vec![content_info("Meiji era")],
        recent_answers: Vec::new(),
    });
    let screen = StudentDetailScreen::new(stub.clone(), authed_session(Role::Teacher));

    let state = screen.load(Uuid::new_v4()).await.expect("no redirect");
    let details = state.ready().expect("ready");
    assert_eq!(details.stats.accuracy, 77.5);
    assert_eq!(details.recent_posts.len(), 1);
}

#[tokio::test]
async fn student_detail_is_teacher_only() {
    let stub = Arc::new(StubApi::default());
    let screen = StudentDetailScreen::new(stub.clone(), authed_session(Role::Student));

    let result = screen.load(Uuid::new_v4()).await;
    assert!(matches!(result, Err(Route::StudentHome)));
    assert!(stub.calls().is_empty());
}

// --- search ---

#[tokio::test]
async fn blank_search_query_never_reaches_the_network() {
    let stub = Arc::new(StubApi::default());
    let screen = SearchScreen::new(stub.clone(), authed_session(Role::Student));

    let state = screen.run("   ", 0).await.expect("no redirect");
    assert!(state.error_message().is_some());
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn unauthenticated_search_redirects_before_validation() {
    // Even invalid input must not mask the missing session.
    let stub = Arc::new(StubApi::default());
    let screen = SearchScreen::new(stub.clone(), SessionService::new());

    let result = screen.run("   ", 0).await;
    assert!(matches!(result, Err(Route::Login)));
    assert!(stub.calls().is_empty());
}

// --- auth flow ---

#[tokio::test]
async fn sign_in_installs_the_session_and_routes_by_role() {
    let teacher = user(Role::Teacher);
    let stub = Arc::new(StubApi::default());
    *stub.login_user.lock().expect("lock") = Some(teacher.clone());
    let session = SessionService::new();
    let flow = AuthFlow::new(stub.clone(), session.clone());

    let route = flow
        .sign_in("teacher@example.com", "hunter2hunter2")
        .await
        .expect("signs in");
    assert_eq!(route, Route::TeacherDashboard);
    let current = session.current();
    assert_eq!(current.token.as_deref(), Some("issued-token"));
    assert_eq!(current.user, Some(teacher));
    assert_eq!(stub.calls(), ["login", "me"]);
}

#[tokio::test]
async fn sign_out_clears_the_session_even_if_the_server_call_fails() {
    let stub = Arc::new(StubApi::default());
    let session = authed_session(Role::Student);
    let flow = AuthFlow::new(stub.clone(), session.clone());

    let route = flow.sign_out().await;
    assert_eq!(route, Route::Login);
    assert!(!session.is_authenticated());
    assert_eq!(stub.calls(), ["logout"]);
}
