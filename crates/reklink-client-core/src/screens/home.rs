//! Student home: the team-gated feed.
//!
//! Loading checks team membership before fetching the feed. A 404 from
//! `/teams/me` is the "not part of any active team" signal and opens the join
//! sub-flow instead of an error screen.

use std::sync::Arc;

use reklink_api::ApiError;
use reklink_api::models::{Content, Role, Team};

use crate::forms::validate_join_code;
use crate::screen::{Route, ScreenState, authorize, guarded_fetch};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq)]
pub struct HomeData {
    pub team: Team,
    pub feed: Vec<Content>,
}

#[derive(Clone)]
pub struct HomeScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl HomeScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// Full screen load. The membership check runs before the feed fetch, so a
    /// team-less student performs exactly one network call.
    pub async fn refresh(&self) -> Result<ScreenState<HomeData>, Route> {
        guarded_fetch(
            &self.session,
            Role::Student,
            ApiError::is_not_found,
            |authorized| async move {
                let team = self.api.my_team(&authorized.token).await?;
                let feed = self.api.feed(&authorized.token).await?;
                Ok(HomeData { team, feed })
            },
        )
        .await
    }

    /// Join sub-flow submission. The guard runs before validation, so an
    /// unauthenticated caller is redirected regardless of input. A rejected
    /// code keeps the screen in `Joining` with the normalized message; a
    /// successful join re-runs the full load.
    pub async fn submit_join_code(&self, code: &str) -> Result<ScreenState<HomeData>, Route> {
        let authorized = authorize(&self.session, Role::Student)?;
        if let Err(error) = validate_join_code(code) {
            return Ok(ScreenState::Joining {
                message: error.to_string(),
            });
        }
        match self.api.join_team(&authorized.token, code.trim()).await {
            Ok(team) => {
                tracing::info!(team_id = %team.id, "joined team");
                self.refresh().await
            }
            Err(error) => Ok(ScreenState::Joining {
                message: error.to_string(),
            }),
        }
    }
}
