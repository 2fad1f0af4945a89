//! Session state: who is logged in, with which bearer token.
//!
//! The in-memory [`SessionService`] is the only cross-screen shared state in the
//! client. Writes are whole-value replacements through a watch channel, so every
//! reader sees either the old session or the new one, never a half-written pair.
//! Durability is a separate concern behind [`SessionStateStore`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use reklink_api::models::User;

/// Storage namespace for the persisted session file.
pub const SESSION_NAMESPACE: &str = "reklink";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    /// True iff both the token and the user are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

/// Durable session persistence. Implementations own where the namespace lives;
/// the service only decides when to load, persist, or clear.
pub trait SessionStateStore {
    type Error;

    fn load_session(&self) -> Result<Option<Session>, Self::Error>;
    fn persist_session(&self, session: &Session) -> Result<(), Self::Error>;
    fn clear_session(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("session store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("session store serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}

/// JSON file under `<dir>/reklink/session.json`.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_NAMESPACE).join(SESSION_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStateStore for FileSessionStore {
    type Error = SessionStoreError;

    fn load_session(&self) -> Result<Option<Session>, Self::Error> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn persist_session(&self, session: &Session) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        Ok(())
    }

    fn clear_session(&self) -> Result<(), Self::Error> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

/// Process-wide session holder. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct SessionService {
    tx: Arc<watch::Sender<Session>>,
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionService {
    #[must_use]
    pub fn new() -> Self {
        Self::with_session(Session::default())
    }

    #[must_use]
    pub fn with_session(session: Session) -> Self {
        let (tx, _rx) = watch::channel(session);
        Self { tx: Arc::new(tx) }
    }

    /// Loads the persisted session, if any, and starts from it.
    pub fn rehydrate<S: SessionStateStore>(store: &S) -> Result<Self, S::Error> {
        let session = store.load_session()?.unwrap_or_default();
        Ok(Self::with_session(session))
    }

    /// Atomically replaces both fields. Idempotent and total.
    pub fn login(&self, token: String, user: User) {
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "session login");
        self.tx.send_replace(Session::authenticated(token, user));
    }

    /// Atomically clears both fields.
    pub fn logout(&self) {
        tracing::info!("session logout");
        self.tx.send_replace(Session::default());
    }

    /// `login` that also writes through the durable store.
    pub fn login_persisted<S: SessionStateStore>(
        &self,
        store: &S,
        token: String,
        user: User,
    ) -> Result<(), S::Error> {
        self.login(token, user);
        store.persist_session(&self.current())
    }

    /// `logout` that also clears the durable store.
    pub fn logout_persisted<S: SessionStateStore>(&self, store: &S) -> Result<(), S::Error> {
        self.logout();
        store.clear_session()
    }

    #[must_use]
    pub fn current(&self) -> Session {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_authenticated()
    }

    /// Change notifications; receivers observe whole-session snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }
}
