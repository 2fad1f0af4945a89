//! Shared client core for RekLink UI hosts.
//!
//! A host (web view, desktop shell, test harness) owns rendering and routing; this
//! crate owns everything between the route and the wire: the session service and
//! its durable store, the auth/role guard, and one controller per screen driving
//! the `checking → joining | ready | error` data-fetch machine.
//!
//! Controllers expose plain async methods. Cancellation on unmount is dropping the
//! future: no detached tasks are spawned, so an abandoned fetch can never write a
//! late state update.

pub mod forms;
pub mod screen;
pub mod screens;
pub mod session;
pub mod transport;

pub use screen::{Route, ScreenState};
pub use session::{FileSessionStore, Session, SessionService, SessionStateStore};
pub use transport::ReklinkApi;
