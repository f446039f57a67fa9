//! Session reducer.
//!
//! Defines a pure transition function: previous state + action -> next state.

use serde::{Deserialize, Serialize};

use super::state::SessionState;
use crate::user::User;

/// Session mutations.
///
/// 会话变更。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionAction {
    /// An operation starts: mark loading and clear the previous error.
    BeginOperation,
    /// An operation produced a user. Loading is ended separately.
    Succeed { user: User },
    /// The user signed out.
    SignOut,
    /// An operation failed with a user-facing message.
    Fail { message: String },
    /// Completion path, runs regardless of outcome.
    EndOperation,
    ClearError,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("another operation is already in progress")]
    Busy,
}

/// Pure session reducer.
///
/// 纯 reducer：不包含副作用。
pub struct SessionReducer;

impl SessionReducer {
    /// Applies `action` to `state`.
    ///
    /// A second `BeginOperation` while one is outstanding is rejected with
    /// [`SessionError::Busy`]; every other action always succeeds.
    pub fn reduce(state: SessionState, action: SessionAction) -> Result<SessionState, SessionError> {
        let next = match action {
            SessionAction::BeginOperation => {
                if state.is_loading {
                    return Err(SessionError::Busy);
                }
                SessionState {
                    is_loading: true,
                    last_error: None,
                    ..state
                }
            }
            SessionAction::Succeed { user } => SessionState {
                current_user: Some(user),
                last_error: None,
                ..state
            },
            SessionAction::SignOut => SessionState {
                current_user: None,
                last_error: None,
                ..state
            },
            SessionAction::Fail { message } => SessionState {
                last_error: Some(message),
                is_loading: false,
                ..state
            },
            SessionAction::EndOperation => SessionState {
                is_loading: false,
                ..state
            },
            SessionAction::ClearError => SessionState {
                last_error: None,
                ..state
            },
        };
        Ok(next)
    }
}
