//! Team detail (teacher): one team's metadata and its student roster.

use std::sync::Arc;

use uuid::Uuid;

use reklink_api::models::{Role, Team, User};

use crate::screen::{Route, ScreenState, guarded_fetch, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamDetailData {
    pub team: Team,
    pub students: Vec<User>,
}

#[derive(Clone)]
pub struct TeamDetailScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl TeamDetailScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// Metadata and roster are independent, so they load concurrently.
    pub async fn load(&self, team_id: Uuid) -> Result<ScreenState<TeamDetailData>, Route> {
        guarded_fetch(
            &self.session,
            Role::Teacher,
            no_recovery,
            |authorized| async move {
                let (team, students) = tokio::try_join!(
                    self.api.team_detail(&authorized.token, team_id),
                    self.api.team_students(&authorized.token, team_id),
                )?;
                Ok(TeamDetailData { team, students })
            },
        )
        .await
    }
}
