//! Sign-in, registration, and sign-out flows. These run before any guarded
//! screen exists, so they work on the session service directly.

use std::sync::Arc;

use reklink_api::ApiError;
use reklink_api::models::{Role, User, UserCreate};

use crate::forms::{FormError, validate_password};
use crate::screen::{Route, role_home};
use crate::session::SessionService;
use crate::transport::ReklinkApi;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("{0}")]
    Api(String),
}

impl From<ApiError> for AuthFlowError {
    fn from(error: ApiError) -> Self {
        Self::Api(error.to_string())
    }
}

#[derive(Clone)]
pub struct AuthFlow {
    api: Arc<dyn ReklinkApi>,
    session: SessionService,
}

impl AuthFlow {
    pub fn new(api: Arc<dyn ReklinkApi>, session: SessionService) -> Self {
        Self { api, session }
    }

    /// Exchanges credentials for a token, fetches the profile behind it, and
    /// installs both in the session as one replacement. Returns the home route
    /// for the signed-in role.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Route, AuthFlowError> {
        let token = self.api.login(email, password).await?;
        let user = self.api.me(&token.access_token).await?;
        let route = role_home(user.role);
        self.session.login(token.access_token, user);
        Ok(route)
    }

    /// Registers a student account, then signs in with the same credentials.
    pub async fn register_student(
        &self,
        email: &str,
        password: &str,
        nickname: &str,
    ) -> Result<Route, AuthFlowError> {
        validate_password(password)?;
        let payload = UserCreate {
            email: email.to_owned(),
            password: password.to_owned(),
            nickname: nickname.to_owned(),
            role: Role::Student,
        };
        let _created: User = self.api.register(&payload).await?;
        self.sign_in(email, password).await
    }

    /// Best-effort server logout, then an unconditional local session clear.
    /// The local clear happens even when the server call fails; a dead token is
    /// not worth keeping the user signed in for.
    pub async fn sign_out(&self) -> Route {
        if let Some(token) = self.session.current().token
            && let Err(error) = self.api.logout(&token).await
        {
            tracing::warn!(%error, "server logout failed, clearing local session anyway");
        }
        self.session.logout();
        Route::Login
    }
}
