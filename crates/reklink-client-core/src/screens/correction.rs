//! Teacher correction queue: the report list, split into open and closed, with
//! in-place resolution.

use std::sync::Arc;

use uuid::Uuid;

use reklink_api::ApiError;
use reklink_api::models::{ReportDetails, ReportStatus, ReportStatusUpdate, Role};

use crate::screen::{Route, ScreenState, authorize, guarded_fetch, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportQueue {
    pub reports: Vec<ReportDetails>,
}

impl ReportQueue {
    /// Pending and in-progress reports, newest first as the backend orders them.
    pub fn open(&self) -> impl Iterator<Item = &ReportDetails> {
        self.reports.iter().filter(|report| {
            matches!(
                report.status,
                ReportStatus::Pending | ReportStatus::InProgress
            )
        })
    }

    pub fn closed(&self) -> impl Iterator<Item = &ReportDetails> {
        self.reports.iter().filter(|report| {
            matches!(
                report.status,
                ReportStatus::Resolved | ReportStatus::Rejected
            )
        })
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open().count()
    }

    /// Replaces the queue's copy of a report after a resolution round-trip.
    pub fn apply(&mut self, updated: ReportDetails) {
        if let Some(slot) = self.reports.iter_mut().find(|r| r.id == updated.id) {
            *slot = updated;
        } else {
            self.reports.push(updated);
        }
    }
}

#[derive(Clone)]
pub struct CorrectionScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl CorrectionScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    pub async fn refresh(&self) -> Result<ScreenState<ReportQueue>, Route> {
        guarded_fetch(
            &self.session,
            Role::Teacher,
            no_recovery,
            |authorized| async move {
                let reports = self.api.list_reports(&authorized.token).await?;
                Ok(ReportQueue { reports })
            },
        )
        .await
    }

    /// Resolves one report and folds the backend's updated row back into the
    /// queue, so the host re-renders without a second list fetch.
    pub async fn resolve(
        &self,
        queue: &mut ReportQueue,
        report_id: Uuid,
        status: ReportStatus,
        resolution_note: Option<String>,
    ) -> Result<(), ResolveError> {
        let authorized =
            authorize(&self.session, Role::Teacher).map_err(ResolveError::Redirect)?;
        let payload = ReportStatusUpdate {
            status,
            resolution_note,
        };
        let updated = self
            .api
            .resolve_report(&authorized.token, report_id, &payload)
            .await?;
        tracing::info!(%report_id, status = ?updated.status, "report resolved");
        queue.apply(updated);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("not authorized for the correction queue")]
    Redirect(Route),
    #[error(transparent)]
    Api(#[from] ApiError),
}
