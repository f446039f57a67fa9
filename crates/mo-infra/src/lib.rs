pub mod auth;
pub mod location;
pub mod time;

pub use auth::StubAuthService;
pub use location::FixedLocationProvider;
pub use time::TokioCountdown;
