//! Authoring screen: students draft quizzes and trivia. Validation runs before
//! the guard result is used for anything network-shaped, so an invalid draft
//! costs zero requests.

use std::sync::Arc;

use reklink_api::models::{QuizCreate, Role, TriviaCreate};

use crate::forms::{FormError, validate_quiz_draft, validate_trivia_draft};
use crate::screen::{Authorized, Route, authorize};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

/// Outcome of a submission attempt, for hosts to render inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Created; navigate to the given route.
    Created(Route),
    /// Draft rejected locally; nothing was sent.
    Invalid(FormError),
    /// The backend rejected the submission.
    Failed { message: String },
}

#[derive(Clone)]
pub struct CreateScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl CreateScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// Authoring is student-only; other roles are sent to their own home.
    pub fn guard(&self) -> Result<Authorized, Route> {
        authorize(&self.session, Role::Student)
    }

    pub async fn submit_quiz(&self, draft: &QuizCreate) -> Result<SubmitOutcome, Route> {
        let authorized = self.guard()?;
        if let Err(error) = validate_quiz_draft(draft) {
            return Ok(SubmitOutcome::Invalid(error));
        }
        match self.api.create_quiz(&authorized.token, draft).await {
            Ok(quiz) => {
                tracing::info!(quiz_id = %quiz.id, "quiz created");
                Ok(SubmitOutcome::Created(Route::StudentHome))
            }
            Err(error) => Ok(SubmitOutcome::Failed {
                message: error.to_string(),
            }),
        }
    }

    pub async fn submit_trivia(&self, draft: &TriviaCreate) -> Result<SubmitOutcome, Route> {
        let authorized = self.guard()?;
        if let Err(error) = validate_trivia_draft(draft) {
            return Ok(SubmitOutcome::Invalid(error));
        }
        match self.api.create_trivia(&authorized.token, draft).await {
            Ok(trivia) => {
                tracing::info!(trivia_id = %trivia.id, "trivia created");
                Ok(SubmitOutcome::Created(Route::StudentHome))
            }
            Err(error) => Ok(SubmitOutcome::Failed {
                message: error.to_string(),
            }),
        }
    }
}
