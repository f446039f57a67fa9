//! Merchant Onboarding Application Orchestration Layer
//!
//! This crate contains the onboarding use cases and the flow orchestrator.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{OnboardingOrchestrator, OperationError, SessionContext};
