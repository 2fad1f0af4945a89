//! Teacher dashboard: aggregate numbers plus the popular-tag ranking. The two
//! fetches are independent, so they run concurrently and the screen is ready
//! only when both are.

use std::sync::Arc;

use uuid::Uuid;

use reklink_api::models::{DashboardSummary, PopularTag, Role};

use crate::screen::{Route, ScreenState, guarded_fetch, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub popular_tags: Vec<PopularTag>,
}

#[derive(Clone)]
pub struct DashboardScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl DashboardScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// `team_id` narrows every number to one team; `None` is school-wide.
    pub async fn refresh(
        &self,
        team_id: Option<Uuid>,
    ) -> Result<ScreenState<DashboardData>, Route> {
        guarded_fetch(
            &self.session,
            Role::Teacher,
            no_recovery,
            |authorized| async move {
                let (summary, popular_tags) = tokio::try_join!(
                    self.api.dashboard_summary(&authorized.token, team_id),
                    self.api.popular_tags(&authorized.token, team_id),
                )?;
                Ok(DashboardData {
                    summary,
                    popular_tags,
                })
            },
        )
        .await
    }
}
