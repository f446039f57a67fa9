use std::sync::Arc;

use mo_core::session::{SessionAction, SessionError, SessionReducer, SessionState};
use mo_core::user::User;
use tokio::sync::{watch, Mutex};
use tracing::warn;

/// Shared session container.
///
/// Owns the authoritative [`SessionState`] and applies every change through
/// [`SessionReducer`]. Each new state is published to subscribers.
///
/// ## Locking
/// `dispatch_lock` serializes dispatch calls so that read-reduce-publish runs
/// as one step. Reads (`snapshot`, `subscribe`) never take it.
#[derive(Clone)]
pub struct SessionContext {
    state: Arc<watch::Sender<SessionState>>,
    dispatch_lock: Arc<Mutex<()>>,
}

impl SessionContext {
    pub fn new(initial_state: SessionState) -> Self {
        let (state, _) = watch::channel(initial_state);
        Self {
            state: Arc::new(state),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().current_user.clone()
    }

    /// Receives every state published after this call.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Reduces `action` against the current state and publishes the result.
    ///
    /// On error the state is left untouched and nothing is published.
    pub async fn dispatch(&self, action: SessionAction) -> Result<SessionState, SessionError> {
        let _dispatch_guard = self.dispatch_lock.lock().await;
        let current = self.snapshot();
        let next = SessionReducer::reduce(current, action)?;
        self.state.send_replace(next.clone());
        Ok(next)
    }

    /// Dispatch for actions that cannot be rejected.
    pub(crate) async fn apply(&self, action: SessionAction) {
        if let Err(err) = self.dispatch(action).await {
            warn!(error = %err, "session action rejected");
        }
    }

    /// Clears the last error, e.g. after the user dismissed an alert.
    pub async fn clear_error(&self) {
        self.apply(SessionAction::ClearError).await;
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(SessionState::default())
    }
}
