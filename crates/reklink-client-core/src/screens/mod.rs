//! One controller per screen. Each controller runs the auth/role guard, drives
//! the data-fetch state machine, and exposes the actions its screen offers.
//! Controllers hold no host state; hosts render from the returned values.

pub mod auth;
pub mod content_detail;
pub mod correction;
pub mod create;
pub mod dashboard;
pub mod home;
pub mod mypage;
pub mod report;
pub mod search;
pub mod student_detail;
pub mod team_detail;
pub mod teams;

pub use auth::{AuthFlow, AuthFlowError};
pub use content_detail::{ContentDetail, ContentDetailScreen, OptionMark};
pub use correction::{CorrectionScreen, ReportQueue, ResolveError};
pub use create::{CreateScreen, SubmitOutcome};
pub use dashboard::{DashboardData, DashboardScreen};
pub use home::{HomeData, HomeScreen};
pub use mypage::{MyPageData, MyPageScreen};
pub use report::ReportScreen;
pub use search::SearchScreen;
pub use student_detail::StudentDetailScreen;
pub use team_detail::{TeamDetailData, TeamDetailScreen};
pub use teams::{TeamActionError, TeamsData, TeamsScreen};
