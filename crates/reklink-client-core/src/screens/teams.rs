//! Teacher team management: list, create, and rotate join codes.

use std::sync::Arc;

use uuid::Uuid;

use reklink_api::ApiError;
use reklink_api::models::{Role, Team, TeamCreate};

use crate::screen::{Route, ScreenState, authorize, guarded_fetch, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamsData {
    pub teams: Vec<Team>,
}

impl TeamsData {
    pub fn apply(&mut self, updated: Team) {
        if let Some(slot) = self.teams.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        } else {
            self.teams.push(updated);
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TeamActionError {
    #[error("not authorized for team management")]
    Redirect(Route),
    #[error("team name must not be empty")]
    EmptyName,
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Clone)]
pub struct TeamsScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl TeamsScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    pub async fn refresh(&self) -> Result<ScreenState<TeamsData>, Route> {
        guarded_fetch(
            &self.session,
            Role::Teacher,
            no_recovery,
            |authorized| async move {
                let teams = self.api.list_teams(&authorized.token).await?;
                Ok(TeamsData { teams })
            },
        )
        .await
    }

    pub async fn create(&self, data: &mut TeamsData, name: &str) -> Result<(), TeamActionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TeamActionError::EmptyName);
        }
        let authorized =
            authorize(&self.session, Role::Teacher).map_err(TeamActionError::Redirect)?;
        let payload = TeamCreate {
            name: name.to_owned(),
        };
        let team = self.api.create_team(&authorized.token, &payload).await?;
        tracing::info!(team_id = %team.id, "team created");
        data.apply(team);
        Ok(())
    }

    /// Invalidates the old join code; students already in the team stay.
    pub async fn regenerate_join_code(
        &self,
        data: &mut TeamsData,
        team_id: Uuid,
    ) -> Result<(), TeamActionError> {
        let authorized =
            authorize(&self.session, Role::Teacher).map_err(TeamActionError::Redirect)?;
        let team = self
            .api
            .regenerate_join_code(&authorized.token, team_id)
            .await?;
        tracing::info!(%team_id, "join code regenerated");
        data.apply(team);
        Ok(())
    }
}
