//! Student my-page: personal statistics and activity listings, fetched
//! concurrently.

use std::sync::Arc;

use reklink_api::models::{ContentInfo, Report, Role, UserAnswer, UserStats};

use crate::screen::{Route, ScreenState, guarded_fetch, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq)]
pub struct MyPageData {
    pub stats: UserStats,
    pub posts: Vec<ContentInfo>,
    pub likes: Vec<ContentInfo>,
    pub answers: Vec<UserAnswer>,
    pub reports: Vec<Report>,
}

#[derive(Clone)]
pub struct MyPageScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl MyPageScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// All five sections load together; one failure fails the screen, matching
    /// the all-or-nothing render.
    pub async fn refresh(&self) -> Result<ScreenState<MyPageData>, Route> {
        guarded_fetch(
            &self.session,
            Role::Student,
            no_recovery,
            |authorized| async move {
                let token = authorized.token.as_str();
                let (stats, posts, likes, answers, reports) = tokio::try_join!(
                    self.api.my_statistics(token),
                    self.api.my_posts(token),
                    self.api.my_likes(token),
                    self.api.my_answers(token),
                    self.api.my_reports(token),
                )?;
                Ok(MyPageData {
                    stats,
                    posts,
                    likes,
                    answers,
                    reports,
                })
            },
        )
        .await
    }
}
