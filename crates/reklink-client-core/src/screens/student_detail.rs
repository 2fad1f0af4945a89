//! Student detail (teacher): one student's profile, statistics, and recent
//! activity, served as a single joined payload.

use std::sync::Arc;

use uuid::Uuid;

use reklink_api::models::{Role, StudentDetails};

use crate::screen::{Route, ScreenState, guarded_fetch, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Clone)]
pub struct StudentDetailScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl StudentDetailScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    pub async fn load(&self, student_id: Uuid) -> Result<ScreenState<StudentDetails>, Route> {
        guarded_fetch(
            &self.session,
            Role::Teacher,
            no_recovery,
            |authorized| async move {
                self.api.student_detail(&authorized.token, student_id).await
            },
        )
        .await
    }
}
