//! Onboarding flow domain module.
//!
//! This module defines the step machine that routes a user from sign-in or
//! registration through phone verification and business details to home.

pub mod state_machine;

pub use state_machine::{
    FlowError, OnboardingAction, OnboardingEvent, OnboardingStateMachine, OnboardingStep,
};
