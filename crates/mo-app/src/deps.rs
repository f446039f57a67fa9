//! # Application Dependencies
//!
//! Dependency grouping for use case construction. Not a builder: no build
//! steps, no defaults, every port is required.

use std::sync::Arc;

use mo_core::ports::{AuthPort, CountdownPort, LocationPort, UiPort};

/// Application dependency grouping (just parameter grouping).
#[derive(Clone)]
pub struct AppDeps {
    // Backend
    pub auth: Arc<dyn AuthPort>,

    // Device
    pub location: Arc<dyn LocationPort>,

    // Timers
    pub countdown: Arc<dyn CountdownPort>,

    // UI
    pub ui: Arc<dyn UiPort>,
}
