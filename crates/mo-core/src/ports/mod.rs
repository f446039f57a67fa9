//! Port interfaces for the application layer
//!
//! Ports define the contract between the onboarding use cases and the
//! collaborators that sit outside the core: the authentication backend, the
//! device location service, the resend countdown and the UI shell.

pub mod auth;
mod countdown;
pub mod location;
pub mod ui_port;

pub use auth::{AuthError, AuthPort, Credentials, Registration};
pub use countdown::CountdownPort;
pub use location::{LocationError, LocationPort};
pub use ui_port::{Prompt, UiPort};
