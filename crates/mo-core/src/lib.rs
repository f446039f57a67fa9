//! # mo-core
//!
//! Core domain models and business rules for merchant onboarding.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod location;
pub mod onboarding;
pub mod otp;
pub mod ports;
pub mod session;
pub mod user;
pub mod validation;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use location::{GeoPosition, LocationPermission};
pub use onboarding::{FlowError, OnboardingEvent, OnboardingStep};
pub use session::{SessionAction, SessionPhase, SessionState};
pub use user::{BusinessDetails, User, UserId};
