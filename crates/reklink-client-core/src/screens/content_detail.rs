//! Content detail: a single quiz (answerable) or trivia item. Any signed-in
//! role may open it.

use std::sync::Arc;

use uuid::Uuid;

use reklink_api::models::{AnswerCreate, AnswerResult, Quiz, Trivia};

use crate::screen::{Route, ScreenState, authorize_any, guarded_fetch_any, no_recovery};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentDetail {
    Quiz {
        quiz: Quiz,
        /// Present once an answer has been submitted this visit.
        answer: Option<AnswerResult>,
        selected_option: Option<Uuid>,
    },
    Trivia(Trivia),
}

/// How an option renders after an answer comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    /// No answer submitted yet.
    Neutral,
    Correct,
    /// The option the user picked, when it was wrong.
    Incorrect,
    /// Not picked, not correct.
    Dimmed,
}

impl ContentDetail {
    /// Marks for the quiz's options in display order. Correct and the wrong
    /// pick are both highlighted so the user sees what they chose and what
    /// they should have.
    #[must_use]
    pub fn option_marks(&self) -> Vec<OptionMark> {
        let Self::Quiz {
            quiz,
            answer,
            selected_option,
        } = self
        else {
            return Vec::new();
        };
        let Some(answer) = answer else {
            return vec![OptionMark::Neutral; quiz.options.len()];
        };
        quiz.options
            .iter()
            .map(|option| {
                if option.id == answer.correct_option_id {
                    OptionMark::Correct
                } else if Some(option.id) == *selected_option {
                    OptionMark::Incorrect
                } else {
                    OptionMark::Dimmed
                }
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct ContentDetailScreen {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl ContentDetailScreen {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    pub async fn load_quiz(&self, quiz_id: Uuid) -> Result<ScreenState<ContentDetail>, Route> {
        guarded_fetch_any(&self.session, no_recovery, |authorized| async move {
            let quiz = self.api.quiz_detail(&authorized.token, quiz_id).await?;
            Ok(ContentDetail::Quiz {
                quiz,
                answer: None,
                selected_option: None,
            })
        })
        .await
    }

    pub async fn load_trivia(&self, fact_id: Uuid) -> Result<ScreenState<ContentDetail>, Route> {
        guarded_fetch_any(&self.session, no_recovery, |authorized| async move {
            let trivia = self.api.trivia_detail(&authorized.token, fact_id).await?;
            Ok(ContentDetail::Trivia(trivia))
        })
        .await
    }

    /// Submits the selected option and returns the detail updated with the
    /// grading result. `detail` must be the quiz currently on screen.
    pub async fn submit_answer(
        &self,
        detail: ContentDetail,
        selected_option_id: Uuid,
    ) -> Result<ScreenState<ContentDetail>, Route> {
        let ContentDetail::Quiz { quiz, .. } = detail else {
            return Ok(ScreenState::Error {
                message: "only quizzes accept answers".to_owned(),
            });
        };
        let authorized = authorize_any(&self.session)?;
        let payload = AnswerCreate { selected_option_id };
        match self
            .api
            .submit_answer(&authorized.token, quiz.id, &payload)
            .await
        {
            Ok(answer) => Ok(ScreenState::Ready(ContentDetail::Quiz {
                quiz,
                answer: Some(answer),
                selected_option: Some(selected_option_id),
            })),
            Err(error) => Ok(ScreenState::Error {
                message: error.to_string(),
            }),
        }
    }
}
