use anyhow::Result;

/// A yes/no question put to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl Prompt {
    /// Shown when location access was denied.
    pub fn location_settings() -> Self {
        Self {
            title: "Location Permission Required".to_string(),
            message: "Location permission is required for better service. Please enable it in your phone settings.".to_string(),
            confirm_label: "Open Settings".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait UiPort: Send + Sync {
    /// Blocks until the user answers. `true` means confirmed.
    async fn confirm(&self, prompt: &Prompt) -> Result<bool>;

    async fn open_settings(&self) -> Result<()>;
}
