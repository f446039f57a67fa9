//! Onboarding state machine.
//!
//! Defines a pure state transition function for the onboarding flow.

use tracing::warn;

use crate::validation::{BusinessDetailsForm, FieldErrors, LoginForm, RegistrationForm};

/// Onboarding flow step.
///
/// 引导流程步骤。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingStep {
    /// Email/password sign-in.
    ///
    /// 登录页。
    Login { error: Option<FlowError> },
    /// Account creation.
    ///
    /// 注册页。
    Registration { error: Option<FlowError> },
    /// Mobile number entry and OTP confirmation.
    ///
    /// 手机号验证页。
    PhoneVerification {
        phone: Option<String>,
        otp_sent: bool,
        error: Option<FlowError>,
    },
    /// Business profile capture.
    ///
    /// 商户信息页。
    BusinessDetails { error: Option<FlowError> },
    /// Onboarding finished.
    ///
    /// 首页。
    Home { error: Option<FlowError> },
}

/// Events that drive the onboarding flow.
///
/// 驱动引导流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingEvent {
    // Navigation
    ShowRegistration,
    ShowLogin,

    // User input
    SubmitLogin { form: LoginForm },
    SubmitRegistration { form: RegistrationForm },
    RequestOtp { phone: String },
    ResendOtp,
    SubmitOtp { code: String },
    SubmitBusinessDetails { form: BusinessDetailsForm },
    SignOut,

    // Results (from orchestrator)
    LoggedIn,
    AccountCreated,
    OtpSent { phone: String },
    OtpConfirmed,
    BusinessDetailsSaved,
    SignedOut,
    OperationFailed { error: FlowError },
}

/// Side-effects produced by step transitions.
///
/// 步骤迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum OnboardingAction {
    Login { form: LoginForm },
    Register { form: RegistrationForm },
    SendOtp { phone: String },
    StartResendCountdown,
    ConfirmOtp { code: String },
    SaveBusinessDetails { form: BusinessDetailsForm },
    Logout,
}

/// Why the last action on a step did not go through.
///
/// 流程错误类型。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlowError {
    /// Input failed validation; nothing was sent.
    Invalid(FieldErrors),
    /// The backend refused the operation.
    Rejected { message: String },
    /// Another operation is still in flight.
    Busy,
    /// The resend cooldown has not elapsed.
    ResendNotReady { remaining: u32 },
    LocationUnavailable { message: String },
}

impl OnboardingStep {
    /// Entry step for a fresh launch.
    pub fn initial(authenticated: bool) -> Self {
        if authenticated {
            OnboardingStep::Home { error: None }
        } else {
            OnboardingStep::Login { error: None }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OnboardingStep::Login { .. } => "login",
            OnboardingStep::Registration { .. } => "registration",
            OnboardingStep::PhoneVerification { .. } => "phone_verification",
            OnboardingStep::BusinessDetails { .. } => "business_details",
            OnboardingStep::Home { .. } => "home",
        }
    }

    pub fn error(&self) -> Option<&FlowError> {
        match self {
            OnboardingStep::Login { error }
            | OnboardingStep::Registration { error }
            | OnboardingStep::PhoneVerification { error, .. }
            | OnboardingStep::BusinessDetails { error }
            | OnboardingStep::Home { error } => error.as_ref(),
        }
    }

    /// Same step with `error` replaced.
    pub fn with_error(self, error: Option<FlowError>) -> Self {
        match self {
            OnboardingStep::Login { .. } => OnboardingStep::Login { error },
            OnboardingStep::Registration { .. } => OnboardingStep::Registration { error },
            OnboardingStep::PhoneVerification {
                phone, otp_sent, ..
            } => OnboardingStep::PhoneVerification {
                phone,
                otp_sent,
                error,
            },
            OnboardingStep::BusinessDetails { .. } => OnboardingStep::BusinessDetails { error },
            OnboardingStep::Home { .. } => OnboardingStep::Home { error },
        }
    }
}

/// Pure onboarding state machine.
///
/// 纯状态机：不包含副作用。
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        step: OnboardingStep,
        event: OnboardingEvent,
    ) -> (OnboardingStep, Vec<OnboardingAction>) {
        match (step, event) {
            // ===== Login =====
            (OnboardingStep::Login { .. }, OnboardingEvent::ShowRegistration) => {
                (OnboardingStep::Registration { error: None }, Vec::new())
            }
            (OnboardingStep::Login { .. }, OnboardingEvent::SubmitLogin { form }) => (
                OnboardingStep::Login { error: None },
                vec![OnboardingAction::Login { form }],
            ),
            (OnboardingStep::Login { .. }, OnboardingEvent::LoggedIn) => {
                (OnboardingStep::Home { error: None }, Vec::new())
            }

            // ===== Registration =====
            (OnboardingStep::Registration { .. }, OnboardingEvent::ShowLogin) => {
                (OnboardingStep::Login { error: None }, Vec::new())
            }
            (
                OnboardingStep::Registration { .. },
                OnboardingEvent::SubmitRegistration { form },
            ) => (
                OnboardingStep::Registration { error: None },
                vec![OnboardingAction::Register { form }],
            ),
            (OnboardingStep::Registration { .. }, OnboardingEvent::AccountCreated) => (
                OnboardingStep::PhoneVerification {
                    phone: None,
                    otp_sent: false,
                    error: None,
                },
                Vec::new(),
            ),

            // ===== Phone verification =====
            (
                OnboardingStep::PhoneVerification { otp_sent, .. },
                OnboardingEvent::RequestOtp { phone },
            ) => (
                OnboardingStep::PhoneVerification {
                    phone: Some(phone.clone()),
                    otp_sent,
                    error: None,
                },
                vec![OnboardingAction::SendOtp { phone }],
            ),
            (
                OnboardingStep::PhoneVerification {
                    phone: Some(phone),
                    otp_sent: true,
                    ..
                },
                OnboardingEvent::ResendOtp,
            ) => (
                OnboardingStep::PhoneVerification {
                    phone: Some(phone.clone()),
                    otp_sent: true,
                    error: None,
                },
                vec![OnboardingAction::SendOtp { phone }],
            ),
            (OnboardingStep::PhoneVerification { .. }, OnboardingEvent::OtpSent { phone }) => (
                OnboardingStep::PhoneVerification {
                    phone: Some(phone),
                    otp_sent: true,
                    error: None,
                },
                vec![OnboardingAction::StartResendCountdown],
            ),
            (
                OnboardingStep::PhoneVerification {
                    phone,
                    otp_sent: true,
                    ..
                },
                OnboardingEvent::SubmitOtp { code },
            ) => (
                OnboardingStep::PhoneVerification {
                    phone,
                    otp_sent: true,
                    error: None,
                },
                vec![OnboardingAction::ConfirmOtp { code }],
            ),
            (OnboardingStep::PhoneVerification { .. }, OnboardingEvent::OtpConfirmed) => {
                (OnboardingStep::BusinessDetails { error: None }, Vec::new())
            }

            // ===== Business details =====
            (
                OnboardingStep::BusinessDetails { .. },
                OnboardingEvent::SubmitBusinessDetails { form },
            ) => (
                OnboardingStep::BusinessDetails { error: None },
                vec![OnboardingAction::SaveBusinessDetails { form }],
            ),
            (OnboardingStep::BusinessDetails { .. }, OnboardingEvent::BusinessDetailsSaved) => {
                (OnboardingStep::Home { error: None }, Vec::new())
            }

            // ===== Home =====
            (OnboardingStep::Home { .. }, OnboardingEvent::SignOut) => (
                OnboardingStep::Home { error: None },
                vec![OnboardingAction::Logout],
            ),
            (OnboardingStep::Home { .. }, OnboardingEvent::SignedOut) => {
                (OnboardingStep::Login { error: None }, Vec::new())
            }

            // ===== Failures =====
            (step, OnboardingEvent::OperationFailed { error }) => {
                (step.with_error(Some(error)), Vec::new())
            }

            // ===== Invalid =====
            (step, event) => {
                warn!(?step, ?event, "invalid onboarding transition");
                (step, Vec::new())
            }
        }
    }
}
