//! Onboarding use cases.
//!
//! This module exposes the onboarding orchestrator.

pub mod orchestrator;

pub use orchestrator::OnboardingOrchestrator;
