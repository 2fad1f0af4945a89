//! Route targets, the shared screen data-fetch state machine, and the auth/role
//! guard every controller runs before touching the network.

use reklink_api::ApiError;
use reklink_api::models::{Role, User};

use crate::session::SessionService;

/// Navigation targets the core can ask the host to perform. The host owns the
/// actual router; these are instructions, not URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    StudentHome,
    TeacherDashboard,
    AdminHome,
    /// Return to wherever the host came from.
    Back,
}

/// Where a freshly authenticated user of the given role lands.
#[must_use]
pub fn role_home(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentHome,
        Role::Teacher => Route::TeacherDashboard,
        Role::Admin => Route::AdminHome,
    }
}

/// Lifecycle of a screen's data fetch.
///
/// Every screen starts in `Checking`. `Joining` is the recoverable sub-flow a
/// screen enters when a precondition is missing but fixable in place (a student
/// with no team). Terminal failures land in `Error` with a display message;
/// navigation-worthy failures never reach this type, they surface as a
/// [`Route`] from the guard instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    Checking,
    Joining { message: String },
    Ready(T),
    Error { message: String },
}

impl<T> ScreenState<T> {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// A session snapshot that passed the guard: both pieces are present and the
/// role check succeeded.
#[derive(Debug, Clone)]
pub struct Authorized {
    pub token: String,
    pub user: User,
}

/// Requires an authenticated session with exactly `required` role. A missing
/// session redirects to login; a wrong role redirects to that role's own home.
pub fn authorize(session: &SessionService, required: Role) -> Result<Authorized, Route> {
    let authorized = authorize_any(session)?;
    if authorized.user.role == required {
        Ok(authorized)
    } else {
        tracing::debug!(
            required = required.as_str(),
            actual = authorized.user.role.as_str(),
            "role mismatch, redirecting home"
        );
        Err(role_home(authorized.user.role))
    }
}

/// Requires an authenticated session of any role.
pub fn authorize_any(session: &SessionService) -> Result<Authorized, Route> {
    let current = session.current();
    match (current.token, current.user) {
        (Some(token), Some(user)) => Ok(Authorized { token, user }),
        _ => Err(Route::Login),
    }
}

/// Runs one screen load: guard first, then the fetch. The guard short-circuits
/// before `fetch` is ever constructed, so an unauthenticated session performs
/// zero network calls. Errors matched by `recoverable` become the `Joining`
/// sub-flow; everything else becomes `Error` with the normalized message.
pub async fn guarded_fetch<T, Fut>(
    session: &SessionService,
    required: Role,
    recoverable: impl Fn(&ApiError) -> bool,
    fetch: impl FnOnce(Authorized) -> Fut,
) -> Result<ScreenState<T>, Route>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let authorized = authorize(session, required)?;
    Ok(run_fetch(recoverable, fetch(authorized)).await)
}

/// [`guarded_fetch`] without the role requirement, for screens any signed-in
/// user may open.
pub async fn guarded_fetch_any<T, Fut>(
    session: &SessionService,
    recoverable: impl Fn(&ApiError) -> bool,
    fetch: impl FnOnce(Authorized) -> Fut,
) -> Result<ScreenState<T>, Route>
where
    Fut: Future<Output = Result<T, ApiError>>,
{
    let authorized = authorize_any(session)?;
    Ok(run_fetch(recoverable, fetch(authorized)).await)
}

async fn run_fetch<T>(
    recoverable: impl Fn(&ApiError) -> bool,
    fetch: impl Future<Output = Result<T, ApiError>>,
) -> ScreenState<T> {
    match fetch.await {
        Ok(data) => ScreenState::Ready(data),
        Err(error) if recoverable(&error) => ScreenState::Joining {
            message: error.to_string(),
        },
        Err(error) => {
            tracing::warn!(%error, "screen fetch failed");
            ScreenState::Error {
                message: error.to_string(),
            }
        }
    }
}

/// The common case: nothing is recoverable.
#[must_use]
pub fn no_recovery(_error: &ApiError) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn user(role: Role) -> User {
        User {
            id: Uuid::nil(),
            email: "t@example.com".to_owned(),
            nickname: None,
            role,
            profile_image_url: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn role_homes_are_distinct() {
        assert_eq!(role_home(Role::Student), Route::StudentHome);
        assert_eq!(role_home(Role::Teacher), Route::TeacherDashboard);
        assert_eq!(role_home(Role::Admin), Route::AdminHome);
    }

    #[test]
    fn guard_redirects_unauthenticated_sessions_to_login() {
        let session = SessionService::new();
        assert!(matches!(
            authorize(&session, Role::Student),
            Err(Route::Login)
        ));
        assert!(matches!(authorize_any(&session), Err(Route::Login)));
    }

    #[test]
    fn guard_redirects_wrong_roles_to_their_own_home() {
        let session = SessionService::new();
        session.login("tok".to_owned(), user(Role::Teacher));
        assert!(matches!(
            authorize(&session, Role::Student),
            Err(Route::TeacherDashboard)
        ));
    }

    #[test]
    fn guard_passes_the_token_through() {
        let session = SessionService::new();
        session.login("tok".to_owned(), user(Role::Student));
        let authorized = authorize(&session, Role::Student).expect("authorized");
        assert_eq!(authorized.token, "tok");
    }

    #[tokio::test]
    async fn guarded_fetch_skips_the_fetch_when_unauthenticated() {
        let session = SessionService::new();
        let result: Result<ScreenState<()>, Route> =
            guarded_fetch(&session, Role::Student, no_recovery, |_| async {
                // Reaching this body would be a guard-order bug.
                Err(ApiError::Decode {
                    message: "fetched without auth".to_owned(),
                })
            })
            .await;
        assert!(matches!(result, Err(Route::Login)));
    }

    #[tokio::test]
    async fn recoverable_errors_become_the_joining_state() {
        let session = SessionService::new();
        session.login("tok".to_owned(), user(Role::Student));
        let state: ScreenState<()> =
            guarded_fetch(&session, Role::Student, ApiError::is_not_found, |_| async {
                Err(ApiError::Decode {
                    message: "boom".to_owned(),
                })
            })
            .await
            .expect("no redirect");
        assert!(matches!(state, ScreenState::Error { .. }));

        let state: ScreenState<()> =
            guarded_fetch(&session, Role::Student, |_| true, |_| async {
                Err(ApiError::Decode {
                    message: "boom".to_owned(),
                })
            })
            .await
            .expect("no redirect");
        assert!(matches!(state, ScreenState::Joining { .. }));
    }
}
