//! # Application Runtime
//!
//! Holds the wired dependencies, the shared session and the onboarding
//! orchestrator for the lifetime of the process.

use std::sync::Arc;

use mo_app::{AppDeps, OnboardingOrchestrator, SessionContext};
use mo_core::config::AppConfig;

/// Application runtime with dependencies.
///
/// The orchestrator is built once so that the current step survives across
/// screens.
///
/// 运行时只创建一次编排器，保证步骤状态在各页面之间共享。
pub struct AppRuntime {
    /// Application dependencies
    pub deps: AppDeps,
    session: Arc<SessionContext>,
    onboarding: Arc<OnboardingOrchestrator>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps, config: &AppConfig) -> Self {
        let session = SessionContext::default().arc();
        let onboarding = Arc::new(OnboardingOrchestrator::from_deps(
            &deps,
            session.clone(),
            config.otp.resend_cooldown_secs,
        ));
        Self {
            deps,
            session,
            onboarding,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn onboarding(&self) -> &Arc<OnboardingOrchestrator> {
        &self.onboarding
    }
}
