//! Onboarding orchestrator.
//!
//! This module coordinates the onboarding state machine and side effects.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, info_span, warn, Instrument};

use mo_core::onboarding::{
    FlowError, OnboardingAction, OnboardingEvent, OnboardingStateMachine, OnboardingStep,
};
use mo_core::ports::{AuthError, CountdownPort};
use mo_core::validation::{
    BusinessDetailsForm, LoginForm, OtpEntry, PhoneForm, RegistrationForm,
};

use crate::deps::AppDeps;
use crate::usecases::auth::{CheckAuthenticated, LoginUser, LogoutUser, RegisterUser};
use crate::usecases::business::{AcquireLocation, SubmitBusinessDetails};
use crate::usecases::phone::{ConfirmOtp, RequestPhoneVerification, StartResendCountdown};
use crate::usecases::SessionContext;

/// Orchestrator that drives the onboarding step and its side effects.
///
/// Every dispatch runs under one lock: the step is read, transitioned, the
/// resulting actions are executed, and their outcome events are fed back
/// until none remain.
pub struct OnboardingOrchestrator {
    session: Arc<SessionContext>,
    step: Mutex<Option<OnboardingStep>>,
    dispatch_lock: Mutex<()>,
    countdown: Arc<dyn CountdownPort>,

    login: Arc<LoginUser>,
    register: Arc<RegisterUser>,
    logout: Arc<LogoutUser>,
    check_authenticated: Arc<CheckAuthenticated>,
    request_phone_verification: Arc<RequestPhoneVerification>,
    confirm_otp: Arc<ConfirmOtp>,
    start_resend_countdown: Arc<StartResendCountdown>,
    submit_business_details: Arc<SubmitBusinessDetails>,
}

impl OnboardingOrchestrator {
    /// Builds the orchestrator and its use cases from the port set.
    ///
    /// `resend_cooldown` is the OTP resend countdown length in ticks.
    pub fn from_deps(deps: &AppDeps, session: Arc<SessionContext>, resend_cooldown: u32) -> Self {
        Self {
            step: Mutex::new(None),
            dispatch_lock: Mutex::new(()),
            countdown: deps.countdown.clone(),
            login: Arc::new(LoginUser::new(deps.auth.clone(), session.clone())),
            register: Arc::new(RegisterUser::new(deps.auth.clone(), session.clone())),
            logout: Arc::new(LogoutUser::new(deps.auth.clone(), session.clone())),
            check_authenticated: Arc::new(CheckAuthenticated::new(
                deps.auth.clone(),
                session.clone(),
            )),
            request_phone_verification: Arc::new(RequestPhoneVerification::new(
                deps.auth.clone(),
                deps.countdown.clone(),
                session.clone(),
            )),
            confirm_otp: Arc::new(ConfirmOtp::new()),
            start_resend_countdown: Arc::new(StartResendCountdown::new(
                deps.countdown.clone(),
                resend_cooldown,
            )),
            submit_business_details: Arc::new(SubmitBusinessDetails::new(
                deps.auth.clone(),
                AcquireLocation::new(deps.location.clone(), deps.ui.clone()),
                session.clone(),
            )),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Remaining resend cooldown, updated on every tick.
    pub fn resend_countdown(&self) -> watch::Receiver<u32> {
        self.countdown.subscribe()
    }

    /// The current step. The first call decides between Login and Home.
    pub async fn current_step(&self) -> OnboardingStep {
        self.step_or_seed().await
    }

    pub async fn submit_login(&self, form: LoginForm) -> OnboardingStep {
        self.dispatch(OnboardingEvent::SubmitLogin { form }).await
    }

    pub async fn submit_registration(&self, form: RegistrationForm) -> OnboardingStep {
        self.dispatch(OnboardingEvent::SubmitRegistration { form })
            .await
    }

    pub async fn request_otp(&self, phone: String) -> OnboardingStep {
        self.dispatch(OnboardingEvent::RequestOtp { phone }).await
    }

    pub async fn resend_otp(&self) -> OnboardingStep {
        self.dispatch(OnboardingEvent::ResendOtp).await
    }

    pub async fn submit_otp(&self, code: String) -> OnboardingStep {
        self.dispatch(OnboardingEvent::SubmitOtp { code }).await
    }

    pub async fn submit_business_details(&self, form: BusinessDetailsForm) -> OnboardingStep {
        self.dispatch(OnboardingEvent::SubmitBusinessDetails { form })
            .await
    }

    pub async fn sign_out(&self) -> OnboardingStep {
        self.dispatch(OnboardingEvent::SignOut).await
    }

    /// Drops the error shown on the current step and in the session.
    pub async fn dismiss_error(&self) -> OnboardingStep {
        let _dispatch_guard = self.dispatch_lock.lock().await;
        self.session.clear_error().await;
        let next = self.step_or_seed().await.with_error(None);
        *self.step.lock().await = Some(next.clone());
        next
    }

    /// Applies `event` and every follow-up event it produces.
    pub async fn dispatch(&self, event: OnboardingEvent) -> OnboardingStep {
        // Serialize dispatch so two submissions never act on the same step.
        let _dispatch_guard = self.dispatch_lock.lock().await;

        let span = info_span!("usecase.onboarding_orchestrator.dispatch", event = ?event);
        async {
            let mut current = self.step_or_seed().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.name();
                let event_name = format!("{:?}", event);
                let (next, actions) = OnboardingStateMachine::transition(current, event);
                info!(from, to = next.name(), event = %event_name, "onboarding step transition");
                let follow_up_events = self.execute_actions(actions).await;
                *self.step.lock().await = Some(next.clone());
                current = next;
                pending_events.extend(follow_up_events);
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn step_or_seed(&self) -> OnboardingStep {
        let mut guard = self.step.lock().await;
        if let Some(step) = guard.as_ref() {
            return step.clone();
        }

        let authenticated = self.check_authenticated.execute().await;
        let initial = OnboardingStep::initial(authenticated);
        info!(step = initial.name(), authenticated, "onboarding flow seeded");
        *guard = Some(initial.clone());
        initial
    }

    /// Runs `actions` in order. The first failure stops the rest and is
    /// reported as an [`OnboardingEvent::OperationFailed`].
    async fn execute_actions(&self, actions: Vec<OnboardingAction>) -> Vec<OnboardingEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "onboarding executing action");
            match self.execute_action(action).await {
                Ok(Some(event)) => follow_up_events.push(event),
                Ok(None) => {}
                Err(error) => {
                    warn!(?error, "onboarding action failed");
                    follow_up_events.push(OnboardingEvent::OperationFailed { error });
                    break;
                }
            }
        }
        follow_up_events
    }

    async fn execute_action(
        &self,
        action: OnboardingAction,
    ) -> Result<Option<OnboardingEvent>, FlowError> {
        match action {
            OnboardingAction::Login { form } => {
                self.login.execute(&form).await?;
                Ok(Some(OnboardingEvent::LoggedIn))
            }
            OnboardingAction::Register { form } => {
                self.register.execute(&form).await?;
                Ok(Some(OnboardingEvent::AccountCreated))
            }
            OnboardingAction::SendOtp { phone } => {
                let accepted = self
                    .request_phone_verification
                    .execute(&PhoneForm::new(phone.clone()))
                    .await?;
                if accepted {
                    Ok(Some(OnboardingEvent::OtpSent { phone }))
                } else {
                    Err(FlowError::Rejected {
                        message: AuthError::PhoneVerificationFailed.to_string(),
                    })
                }
            }
            OnboardingAction::StartResendCountdown => {
                self.start_resend_countdown.execute().await?;
                Ok(None)
            }
            OnboardingAction::ConfirmOtp { code } => {
                self.confirm_otp.execute(&OtpEntry::new(code))?;
                Ok(Some(OnboardingEvent::OtpConfirmed))
            }
            OnboardingAction::SaveBusinessDetails { form } => {
                self.submit_business_details.execute(form).await?;
                Ok(Some(OnboardingEvent::BusinessDetailsSaved))
            }
            OnboardingAction::Logout => {
                self.logout.execute().await?;
                Ok(Some(OnboardingEvent::SignedOut))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{
        test_position, test_user, MockAuth, MockCountdown, MockLocation, MockUi,
    };
    use mo_core::location::LocationPermission;
    use mo_core::session::SessionPhase;
    use mo_core::validation::FormField;

    struct Mocks {
        auth: MockAuth,
        location: MockLocation,
        countdown: MockCountdown,
        ui: MockUi,
    }

    impl Mocks {
        fn signed_out() -> Self {
            let mut auth = MockAuth::new();
            auth.expect_is_authenticated().returning(|| Ok(false));
            Self {
                auth,
                location: MockLocation::new(),
                countdown: MockCountdown::new(),
                ui: MockUi::new(),
            }
        }

        fn build(self) -> OnboardingOrchestrator {
            let deps = AppDeps {
                auth: Arc::new(self.auth),
                location: Arc::new(self.location),
                countdown: Arc::new(self.countdown),
                ui: Arc::new(self.ui),
            };
            OnboardingOrchestrator::from_deps(&deps, SessionContext::default().arc(), 30)
        }
    }

    fn registration() -> RegistrationForm {
        RegistrationForm {
            name: "Asha".into(),
            email: "owner@shop.in".into(),
            password: "abcdefgh".into(),
            confirm_password: "abcdefgh".into(),
        }
    }

    fn business_form() -> BusinessDetailsForm {
        BusinessDetailsForm {
            organization_name: "Asha Traders".into(),
            gstin: "27AAPFU0939F1ZV".into(),
            address: "12 Market Road".into(),
            city: "Mumbai".into(),
            state: "Maharashtra".into(),
            pincode: "400001".into(),
        }
    }

    #[tokio::test]
    async fn seeds_login_when_signed_out() {
        let orchestrator = Mocks::signed_out().build();
        assert_eq!(
            orchestrator.current_step().await,
            OnboardingStep::Login { error: None }
        );
    }

    #[tokio::test]
    async fn seeds_home_when_backend_reports_session() {
        let mut mocks = Mocks::signed_out();
        mocks.auth = MockAuth::new();
        mocks
            .auth
            .expect_is_authenticated()
            .times(1)
            .returning(|| Ok(true));
        let orchestrator = mocks.build();

        assert_eq!(
            orchestrator.current_step().await,
            OnboardingStep::Home { error: None }
        );
        // seeded once
        orchestrator.current_step().await;
    }

    #[tokio::test]
    async fn successful_login_goes_home() {
        let mut mocks = Mocks::signed_out();
        mocks.auth.expect_login().returning(|_| Ok(test_user()));
        let orchestrator = mocks.build();

        let step = orchestrator
            .submit_login(LoginForm::new("owner@shop.in", "secret"))
            .await;

        assert_eq!(step, OnboardingStep::Home { error: None });
        assert_eq!(
            orchestrator.session().snapshot().phase(),
            SessionPhase::Authenticated
        );
    }

    #[tokio::test]
    async fn rejected_login_stays_on_login_with_message() {
        let mut mocks = Mocks::signed_out();
        mocks
            .auth
            .expect_login()
            .returning(|_| Err(AuthError::LoginFailed));
        let orchestrator = mocks.build();

        let step = orchestrator
            .submit_login(LoginForm::new("owner@shop.in", "secret"))
            .await;

        assert_eq!(
            step,
            OnboardingStep::Login {
                error: Some(FlowError::Rejected {
                    message: "Login failed. Please try again.".into()
                })
            }
        );

        let step = orchestrator.dismiss_error().await;
        assert_eq!(step, OnboardingStep::Login { error: None });
        assert_eq!(orchestrator.session().snapshot().last_error, None);
    }

    #[tokio::test]
    async fn invalid_login_reports_fields() {
        let orchestrator = Mocks::signed_out().build();

        let step = orchestrator.submit_login(LoginForm::default()).await;

        let Some(FlowError::Invalid(errors)) = step.error() else {
            panic!("expected field errors, got {step:?}");
        };
        assert!(errors.contains(FormField::Email));
    }

    #[tokio::test]
    async fn registration_through_business_details_reaches_home() {
        let mut mocks = Mocks::signed_out();
        mocks.auth.expect_register().returning(|_| Ok(test_user()));
        mocks.auth.expect_verify_phone().returning(|_| Ok(true));
        mocks
            .auth
            .expect_update_business_details()
            .returning(|details| {
                let mut user = test_user().with_phone("9876543210");
                user.business_details = Some(details.clone());
                Ok(user)
            });
        mocks.countdown.expect_remaining().return_const(0u32);
        mocks
            .countdown
            .expect_start()
            .withf(|duration| *duration == 30)
            .times(1)
            .returning(|_| Ok(()));
        mocks
            .location
            .expect_permission_status()
            .returning(|| Ok(LocationPermission::Granted));
        mocks
            .location
            .expect_current_position()
            .returning(|| Ok(test_position()));
        let orchestrator = mocks.build();

        orchestrator.dispatch(OnboardingEvent::ShowRegistration).await;
        let step = orchestrator.submit_registration(registration()).await;
        assert_eq!(
            step,
            OnboardingStep::PhoneVerification {
                phone: None,
                otp_sent: false,
                error: None
            }
        );

        let step = orchestrator.request_otp("9876543210".into()).await;
        assert_eq!(
            step,
            OnboardingStep::PhoneVerification {
                phone: Some("9876543210".into()),
                otp_sent: true,
                error: None
            }
        );

        let step = orchestrator.submit_otp("123456".into()).await;
        assert_eq!(step, OnboardingStep::BusinessDetails { error: None });

        let step = orchestrator.submit_business_details(business_form()).await;
        assert_eq!(step, OnboardingStep::Home { error: None });

        let user = orchestrator.session().current_user().unwrap();
        assert_eq!(user.phone, "9876543210");
        assert!(user.business_details.is_some());
    }

    #[tokio::test]
    async fn resend_during_cooldown_is_rejected() {
        let mut mocks = Mocks::signed_out();
        mocks.auth.expect_register().returning(|_| Ok(test_user()));
        mocks
            .auth
            .expect_verify_phone()
            .times(1)
            .returning(|_| Ok(true));
        let mut seq = mockall::Sequence::new();
        mocks
            .countdown
            .expect_remaining()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0u32);
        mocks
            .countdown
            .expect_remaining()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(25u32);
        mocks.countdown.expect_start().returning(|_| Ok(()));
        let orchestrator = mocks.build();

        orchestrator.dispatch(OnboardingEvent::ShowRegistration).await;
        orchestrator.submit_registration(registration()).await;
        orchestrator.request_otp("9876543210".into()).await;

        let step = orchestrator.resend_otp().await;

        assert_eq!(
            step.error(),
            Some(&FlowError::ResendNotReady { remaining: 25 })
        );
    }

    #[tokio::test]
    async fn declined_phone_keeps_otp_unsent() {
        let mut mocks = Mocks::signed_out();
        mocks.auth.expect_register().returning(|_| Ok(test_user()));
        mocks.auth.expect_verify_phone().returning(|_| Ok(false));
        mocks.countdown.expect_remaining().return_const(0u32);
        mocks.countdown.expect_start().times(0);
        let orchestrator = mocks.build();

        orchestrator.dispatch(OnboardingEvent::ShowRegistration).await;
        orchestrator.submit_registration(registration()).await;
        let step = orchestrator.request_otp("9876543210".into()).await;

        assert_eq!(
            step,
            OnboardingStep::PhoneVerification {
                phone: Some("9876543210".into()),
                otp_sent: false,
                error: Some(FlowError::Rejected {
                    message: "Phone verification failed. Please try again.".into()
                })
            }
        );
    }

    #[tokio::test]
    async fn sign_out_returns_to_login() {
        let mut mocks = Mocks::signed_out();
        mocks.auth.expect_login().returning(|_| Ok(test_user()));
        mocks.auth.expect_logout().returning(|| Ok(()));
        let orchestrator = mocks.build();

        orchestrator
            .submit_login(LoginForm::new("owner@shop.in", "secret"))
            .await;
        let step = orchestrator.sign_out().await;

        assert_eq!(step, OnboardingStep::Login { error: None });
        assert_eq!(orchestrator.session().current_user(), None);
    }
}
