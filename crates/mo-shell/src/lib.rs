//! # mo-shell
//!
//! Terminal integration layer for merchant onboarding.
//!
//! ## Modules
//!
//! - **bootstrap**: config loading, tracing setup, dependency wiring, run loop
//! - **adapters**: terminal implementations of the UI port
//! - **screens**: one prompt per onboarding step, plus alert rendering

pub mod adapters;
pub mod bootstrap;
pub mod screens;
