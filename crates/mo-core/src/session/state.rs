use serde::{Deserialize, Serialize};

use crate::user::User;

/// Session record.
///
/// 会话记录。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Signed-in user. `None` means not authenticated.
    pub current_user: Option<User>,
    /// True only while one operation is outstanding.
    pub is_loading: bool,
    /// Human-readable message from the last failed operation.
    pub last_error: Option<String>,
}

/// Phase derived from the three session fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Loading,
    Error,
    Authenticated,
}

impl SessionState {
    /// Loading takes precedence over Error, which takes precedence over
    /// Authenticated.
    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            SessionPhase::Loading
        } else if self.last_error.is_some() {
            SessionPhase::Error
        } else if self.current_user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Idle
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
