//! Session domain module.
//!
//! The in-memory record of who is signed in, whether an operation is in
//! flight, and the last operation error.

pub mod reducer;
pub mod state;

pub use reducer::{SessionAction, SessionError, SessionReducer};
pub use state::{SessionPhase, SessionState};
