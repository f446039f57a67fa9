//! Mock ports for use case unit tests.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;
use mo_core::location::{GeoPosition, LocationPermission};
use mo_core::ports::{
    AuthError, AuthPort, CountdownPort, Credentials, LocationError, LocationPort, Prompt,
    Registration, UiPort,
};
use mo_core::user::{BusinessDetails, User, UserId};
use tokio::sync::watch;

mock! {
    pub Auth {}

    #[async_trait]
    impl AuthPort for Auth {
        async fn login(&self, credentials: &Credentials) -> Result<User, AuthError>;
        async fn register(&self, registration: &Registration) -> Result<User, AuthError>;
        async fn logout(&self) -> Result<(), AuthError>;
        async fn is_authenticated(&self) -> Result<bool, AuthError>;
        async fn verify_phone(&self, phone: &str) -> Result<bool, AuthError>;
        async fn update_business_details(&self, details: &BusinessDetails)
            -> Result<User, AuthError>;
    }
}

mock! {
    pub Location {}

    #[async_trait]
    impl LocationPort for Location {
        async fn permission_status(&self) -> Result<LocationPermission, LocationError>;
        async fn request_permission(&self) -> Result<LocationPermission, LocationError>;
        async fn current_position(&self) -> Result<GeoPosition, LocationError>;
    }
}

mock! {
    pub Countdown {}

    #[async_trait]
    impl CountdownPort for Countdown {
        async fn start(&self, duration: u32) -> anyhow::Result<()>;
        async fn cancel(&self) -> anyhow::Result<()>;
        fn remaining(&self) -> u32;
        fn subscribe(&self) -> watch::Receiver<u32>;
    }
}

mock! {
    pub Ui {}

    #[async_trait]
    impl UiPort for Ui {
        async fn confirm(&self, prompt: &Prompt) -> anyhow::Result<bool>;
        async fn open_settings(&self) -> anyhow::Result<()>;
    }
}

pub fn test_user() -> User {
    User {
        id: UserId::from("1"),
        name: "Test User".into(),
        email: "owner@shop.in".into(),
        phone: String::new(),
        business_details: None,
    }
}

pub fn test_position() -> GeoPosition {
    GeoPosition {
        latitude: 19.076,
        longitude: 72.8777,
        accuracy_m: Some(5.0),
        captured_at: Utc::now(),
    }
}
