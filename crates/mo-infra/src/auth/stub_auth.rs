//! In-memory authentication backend.
//!
//! Every call succeeds with a canned user unless failure simulation is
//! switched on. The last signed-in user is remembered so that later calls
//! (phone, business details) act on it.

use std::time::Duration;

use async_trait::async_trait;
use mo_core::config::AuthConfig;
use mo_core::ports::{AuthError, AuthPort, Credentials, Registration};
use mo_core::user::{BusinessDetails, User, UserId};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

const STUB_USER_ID: &str = "1";
const STUB_USER_NAME: &str = "Test User";

pub struct StubAuthService {
    latency: Duration,
    simulate_failure: bool,
    current_user: Mutex<Option<User>>,
}

impl StubAuthService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.simulated_latency_ms),
            simulate_failure: config.simulate_failure,
            current_user: Mutex::new(None),
        }
    }

    /// Waits out the configured latency and reports whether the call should
    /// fail.
    async fn round_trip(&self, call: &'static str) -> bool {
        if !self.latency.is_zero() {
            debug!(call, latency_ms = self.latency.as_millis() as u64, "simulating backend latency");
            tokio::time::sleep(self.latency).await;
        }
        if self.simulate_failure {
            error!(call, "simulated backend failure");
        }
        self.simulate_failure
    }

    async fn remember(&self, user: &User) {
        *self.current_user.lock().await = Some(user.clone());
    }
}

impl Default for StubAuthService {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

#[async_trait]
impl AuthPort for StubAuthService {
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        info!(email = %credentials.email, "login attempt");
        if self.round_trip("login").await {
            return Err(AuthError::LoginFailed);
        }

        let user = User {
            id: UserId::from(STUB_USER_ID),
            name: STUB_USER_NAME.to_string(),
            email: credentials.email.clone(),
            phone: String::new(),
            business_details: None,
        };
        self.remember(&user).await;
        info!(user_id = %user.id, "login successful");
        Ok(user)
    }

    async fn register(&self, registration: &Registration) -> Result<User, AuthError> {
        info!(email = %registration.email, "registration attempt");
        if self.round_trip("register").await {
            return Err(AuthError::RegistrationFailed);
        }

        let user = User {
            id: UserId::new(uuid::Uuid::new_v4().to_string()),
            name: registration.name.clone(),
            email: registration.email.clone(),
            phone: String::new(),
            business_details: None,
        };
        self.remember(&user).await;
        info!(user_id = %user.id, "registration successful");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        info!("logout attempt");
        if self.round_trip("logout").await {
            return Err(AuthError::LogoutFailed);
        }
        self.current_user.lock().await.take();
        info!("logout successful");
        Ok(())
    }

    async fn is_authenticated(&self) -> Result<bool, AuthError> {
        Ok(self.current_user.lock().await.is_some())
    }

    async fn verify_phone(&self, phone: &str) -> Result<bool, AuthError> {
        info!(digits = phone.len(), "phone verification attempt");
        if self.round_trip("verify_phone").await {
            return Err(AuthError::PhoneVerificationFailed);
        }

        let mut current = self.current_user.lock().await;
        if let Some(user) = current.as_mut() {
            user.phone = phone.to_string();
        }
        Ok(true)
    }

    async fn update_business_details(
        &self,
        details: &BusinessDetails,
    ) -> Result<User, AuthError> {
        info!("updating business details");
        if self.round_trip("update_business_details").await {
            return Err(AuthError::BusinessDetailsUpdateFailed);
        }

        let mut current = self.current_user.lock().await;
        let mut user = current.clone().unwrap_or_else(|| User {
            id: UserId::from(STUB_USER_ID),
            name: STUB_USER_NAME.to_string(),
            email: "test@example.com".to_string(),
            phone: String::new(),
            business_details: None,
        });
        user.business_details = Some(details.clone());
        *current = Some(user.clone());

        info!(user_id = %user.id, "business details updated successfully");
        Ok(user)
    }
}
