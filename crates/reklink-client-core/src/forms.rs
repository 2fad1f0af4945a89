//! Client-side form validation. These checks mirror the backend's constraints
//! so obviously invalid input never reaches the wire.

use reklink_api::models::{QuizCreate, ReportCreate, TriviaCreate};

pub const MIN_QUIZ_OPTIONS: usize = 2;
pub const MAX_QUIZ_OPTIONS: usize = 10;
pub const JOIN_CODE_LEN: usize = 6;
pub const MIN_REPORT_DESCRIPTION: usize = 10;
pub const MAX_REPORT_DESCRIPTION: usize = 2000;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 72;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("join code must be exactly {JOIN_CODE_LEN} digits")]
    InvalidJoinCode,
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("body must not be empty")]
    EmptyBody,
    #[error("a quiz needs between {MIN_QUIZ_OPTIONS} and {MAX_QUIZ_OPTIONS} options")]
    OptionCount { count: usize },
    #[error("option {index} is empty")]
    EmptyOption { index: usize },
    #[error("at least one option must be marked correct")]
    NoCorrectOption,
    #[error(
        "report description must be between {MIN_REPORT_DESCRIPTION} and \
         {MAX_REPORT_DESCRIPTION} characters"
    )]
    DescriptionLength { chars: usize },
    #[error("password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters")]
    PasswordLength { chars: usize },
    #[error("search query must not be empty")]
    EmptyQuery,
}

/// Join codes are exactly six ASCII digits.
pub fn validate_join_code(code: &str) -> Result<(), FormError> {
    let code = code.trim();
    if code.len() == JOIN_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FormError::InvalidJoinCode)
    }
}

pub fn validate_quiz_draft(draft: &QuizCreate) -> Result<(), FormError> {
    if draft.title.trim().is_empty() {
        return Err(FormError::EmptyTitle);
    }
    if draft.content.trim().is_empty() {
        return Err(FormError::EmptyBody);
    }
    let count = draft.options.len();
    if !(MIN_QUIZ_OPTIONS..=MAX_QUIZ_OPTIONS).contains(&count) {
        return Err(FormError::OptionCount { count });
    }
    for (index, option) in draft.options.iter().enumerate() {
        if option.option_text.trim().is_empty() {
            return Err(FormError::EmptyOption { index });
        }
    }
    if !draft.options.iter().any(|option| option.is_correct) {
        return Err(FormError::NoCorrectOption);
    }
    Ok(())
}

pub fn validate_trivia_draft(draft: &TriviaCreate) -> Result<(), FormError> {
    if draft.title.trim().is_empty() {
        return Err(FormError::EmptyTitle);
    }
    if draft.content.trim().is_empty() {
        return Err(FormError::EmptyBody);
    }
    Ok(())
}

pub fn validate_report_draft(draft: &ReportCreate) -> Result<(), FormError> {
    let chars = draft.description.trim().chars().count();
    if (MIN_REPORT_DESCRIPTION..=MAX_REPORT_DESCRIPTION).contains(&chars) {
        Ok(())
    } else {
        Err(FormError::DescriptionLength { chars })
    }
}

pub fn validate_password(password: &str) -> Result<(), FormError> {
    let chars = password.chars().count();
    if (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&chars) {
        Ok(())
    } else {
        Err(FormError::PasswordLength { chars })
    }
}

pub fn validate_search_query(query: &str) -> Result<(), FormError> {
    if query.trim().is_empty() {
        Err(FormError::EmptyQuery)
    } else {
        Ok(())
    }
}
