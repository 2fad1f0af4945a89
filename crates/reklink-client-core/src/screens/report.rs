//! Report submission: students flag a piece of content for teacher review.

use std::sync::Arc;

use reklink_api::models::{ReportCreate, Role};

use crate::forms::validate_report_draft;
use crate::screen::{Route, authorize};
use crate::screens::create::SubmitOutcome;
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Clone)]
pub struct ReportScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl ReportScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// On success the host returns to the content the report came from.
    pub async fn submit(&self, draft: &ReportCreate) -> Result<SubmitOutcome, Route> {
        let authorized = authorize(&self.session, Role::Student)?;
        if let Err(error) = validate_report_draft(draft) {
            return Ok(SubmitOutcome::Invalid(error));
        }
        match self.api.create_report(&authorized.token, draft).await {
            Ok(report) => {
                tracing::info!(report_id = %report.id, content_id = %report.content_id, "report filed");
                Ok(SubmitOutcome::Created(Route::Back))
            }
            Err(error) => Ok(SubmitOutcome::Failed {
                message: error.to_string(),
            }),
        }
    }
}
