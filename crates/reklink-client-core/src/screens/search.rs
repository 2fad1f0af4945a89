//! Search: keyword lookup over quizzes and trivia, open to any signed-in role.

use std::sync::Arc;

use reklink_api::models::SearchResult;

use crate::forms::validate_search_query;
use crate::screen::{Route, ScreenState, authorize_any};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone)]
pub struct SearchScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl SearchScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// The guard runs first; a signed-in caller with an empty query then
    /// short-circuits to an error state without a request.
    pub async fn run(
        &self,
        query: &str,
        offset: u32,
    ) -> Result<ScreenState<SearchResult>, Route> {
        let authorized = authorize_any(&self.session)?;
        if let Err(error) = validate_search_query(query) {
            return Ok(ScreenState::Error {
                message: error.to_string(),
            });
        }
        match self
            .api
            .search(&authorized.token, query.trim(), DEFAULT_PAGE_SIZE, offset)
            .await
        {
            Ok(result) => Ok(ScreenState::Ready(result)),
            Err(error) => Ok(ScreenState::Error {
                message: error.to_string(),
            }),
        }
    }
}
