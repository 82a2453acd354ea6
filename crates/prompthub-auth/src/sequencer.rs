//! Email verification sequencer
//!
//! Gates sign-up on proof of email ownership:
//!
//! ```text
//! Unchecked ──check_email──▶ EmailChecked{available}
//!                                 │ available = true
//!                                 ▼
//!                  ┌──────── send_code ───────┐
//!                  ▼                          │ (resend)
//!          CodeSent{expires_at} ──────────────┘
//!                  │ verify_code, countdown > 0
//!                  ▼
//!               Verified
//! ```
//!
//! `reset` returns to `Unchecked` from anywhere and aborts the countdown.
//!
//! State lives behind a `parking_lot::Mutex` that is never held across a
//! collaborator call. Each step records itself as pending before awaiting,
//! so a second request for any step is rejected with `Busy` until the first
//! resolves. Every reset bumps an epoch; a response that arrives for an
//! older epoch is discarded instead of being applied to the new session.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::VerificationConfig;
use crate::countdown::Countdown;
use crate::error::{VerificationError, VerificationStep};
use crate::events::{emit, EventSink, NullEventSink, VerificationEvent};
use crate::service::{AuthService, CheckEmailRequest, SendCodeRequest, VerifyCodeRequest};
use crate::validation::is_valid_email;

/// Stage of the verification flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "camelCase")]
pub enum VerificationStage {
    Unchecked,
    #[serde(rename_all = "camelCase")]
    EmailChecked { available: bool },
    #[serde(rename_all = "camelCase")]
    CodeSent { expires_at: DateTime<Utc> },
    Verified,
}

impl VerificationStage {
    /// Whether the email has been confirmed available at this stage or an
    /// earlier one
    pub fn email_available(&self) -> bool {
        match self {
            Self::Unchecked => false,
            Self::EmailChecked { available } => *available,
            Self::CodeSent { .. } | Self::Verified => true,
        }
    }
}

struct SequencerState {
    stage: VerificationStage,
    /// Address the current stage applies to
    email: String,
    pending: Option<VerificationStep>,
    epoch: u64,
    countdown: Countdown,
}

impl SequencerState {
    /// Claim `step` as the one outstanding request, returning its epoch
    fn begin(&mut self, step: VerificationStep) -> Result<u64, VerificationError> {
        if let Some(pending) = self.pending {
            return Err(VerificationError::Busy(pending));
        }
        self.pending = Some(step);
        Ok(self.epoch)
    }

    /// Release the pending claim. Fails with `Stale` when a reset happened
    /// while the request was in flight.
    fn finish(&mut self, step: VerificationStep, epoch: u64) -> Result<(), VerificationError> {
        if self.epoch != epoch {
            log::debug!("Discarding {} response from a previous session", step);
            return Err(VerificationError::Stale { step });
        }
        self.pending = None;
        Ok(())
    }
}

/// Client-side state machine gating sign-up on email verification
pub struct VerificationSequencer {
    service: Arc<dyn AuthService>,
    sink: Arc<dyn EventSink>,
    config: VerificationConfig,
    state: Mutex<SequencerState>,
}

impl VerificationSequencer {
    pub fn new(service: Arc<dyn AuthService>, config: VerificationConfig) -> Self {
        Self::with_sink(service, config, Arc::new(NullEventSink))
    }

    pub fn with_sink(
        service: Arc<dyn AuthService>,
        config: VerificationConfig,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let countdown = Countdown::new(config.tick_interval());
        Self {
            service,
            sink,
            config,
            state: Mutex::new(SequencerState {
                stage: VerificationStage::Unchecked,
                email: String::new(),
                pending: None,
                epoch: 0,
                countdown,
            }),
        }
    }

    // ─── ACCESSORS ──────────────────────────────────────────────────

    pub fn stage(&self) -> VerificationStage {
        self.state.lock().stage.clone()
    }

    /// Address the current stage was reached for (empty when `Unchecked`)
    pub fn email(&self) -> String {
        self.state.lock().email.clone()
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.state.lock().stage, VerificationStage::Verified)
    }

    /// The step currently awaiting the collaborator, if any
    pub fn pending(&self) -> Option<VerificationStep> {
        self.state.lock().pending
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.lock().countdown.remaining()
    }

    pub fn is_countdown_running(&self) -> bool {
        self.state.lock().countdown.is_running()
    }

    /// A code was sent but its countdown ran out
    pub fn is_code_expired(&self) -> bool {
        let state = self.state.lock();
        let sent = matches!(state.stage, VerificationStage::CodeSent { .. });
        sent && state.countdown.remaining() == 0
    }

    pub fn subscribe_countdown(&self) -> tokio::sync::watch::Receiver<u32> {
        self.state.lock().countdown.subscribe()
    }

    // ─── STEPS ──────────────────────────────────────────────────────

    /// Ask the collaborator whether `email` is still free.
    ///
    /// Records `EmailChecked { available }` on completion. An unavailable
    /// address is reported as `EmailTaken` after the stage is recorded.
    pub async fn check_email(&self, email: &str) -> Result<(), VerificationError> {
        let step = VerificationStep::CheckEmail;
        if email.trim().is_empty() {
            return Err(VerificationError::EmailRequired);
        }
        if !is_valid_email(email) {
            return Err(VerificationError::EmailInvalid);
        }

        let epoch = {
            let mut state = self.state.lock();
            match state.stage {
                VerificationStage::Verified => return Err(VerificationError::AlreadyVerified),
                VerificationStage::CodeSent { .. } if state.email == email => {
                    // Already past this step for the same address
                    return Ok(());
                }
                _ => {}
            }
            state.begin(step)?
        };

        let request = CheckEmailRequest {
            email: email.to_string(),
        };
        let result = self.service.check_email(&request).await;

        let mut state = self.state.lock();
        state.finish(step, epoch)?;

        match result {
            Ok(response) => {
                // A re-check supersedes any code sent for a previous address
                state.countdown.clear();
                state.email = email.to_string();
                state.stage = VerificationStage::EmailChecked {
                    available: response.available,
                };
                log::info!(
                    "Email availability for {}: {}",
                    email,
                    if response.available { "available" } else { "taken" }
                );
                let stage = state.stage.clone();
                drop(state);
                self.stage_changed(stage);

                if response.available {
                    Ok(())
                } else {
                    Err(self.failed(step, VerificationError::EmailTaken))
                }
            }
            Err(e) => {
                drop(state);
                log::warn!("Email availability check failed: {}", e);
                Err(self.failed(step, VerificationError::service(step, e)))
            }
        }
    }

    /// Dispatch a verification code to the checked address and start the
    /// countdown. Calling this again while a code is outstanding resends.
    pub async fn send_code(&self) -> Result<(), VerificationError> {
        let step = VerificationStep::SendCode;

        let (epoch, email) = {
            let mut state = self.state.lock();
            match state.stage {
                VerificationStage::EmailChecked { available: true }
                | VerificationStage::CodeSent { .. } => {}
                VerificationStage::Verified => return Err(VerificationError::AlreadyVerified),
                _ => return Err(VerificationError::EmailNotChecked),
            }
            (state.begin(step)?, state.email.clone())
        };

        let request = SendCodeRequest {
            email: email.clone(),
        };
        let result = self.service.send_code(&request).await;

        let mut state = self.state.lock();
        state.finish(step, epoch)?;

        let failure = match result {
            Ok(response) if response.success => {
                let ttl = self.config.code_ttl_secs;
                let expires_at = Utc::now() + chrono::Duration::seconds(i64::from(ttl));
                state.stage = VerificationStage::CodeSent { expires_at };

                let sink = Arc::clone(&self.sink);
                state.countdown.start(ttl, move |remaining| {
                    log::debug!("Verification countdown: {}s left", remaining);
                    emit(sink.as_ref(), VerificationEvent::CountdownTick { remaining });
                    if remaining == 0 {
                        log::info!("Verification code expired");
                        emit(sink.as_ref(), VerificationEvent::CodeExpired);
                    }
                });

                let stage = state.stage.clone();
                drop(state);
                log::info!("Verification code sent to {} ({}s)", email, ttl);
                self.stage_changed(stage);
                return Ok(());
            }
            Ok(response) => VerificationError::SendRejected(response.message),
            Err(e) => VerificationError::service(step, e),
        };

        // The previous code, if any, is no longer trusted
        state.countdown.clear();
        let regressed = !matches!(state.stage, VerificationStage::EmailChecked { .. });
        state.stage = VerificationStage::EmailChecked { available: true };
        let stage = state.stage.clone();
        drop(state);
        if regressed {
            self.stage_changed(stage);
        }

        log::warn!("Verification code dispatch failed: {}", failure);
        Err(self.failed(step, failure))
    }

    /// Verify `code` against the outstanding dispatch.
    ///
    /// Rejected locally, without contacting the collaborator, when no code
    /// was sent, the code is blank, or the countdown has reached zero.
    pub async fn verify_code(&self, code: &str) -> Result<(), VerificationError> {
        let step = VerificationStep::VerifyCode;

        let (epoch, email) = {
            let mut state = self.state.lock();
            match state.stage {
                VerificationStage::CodeSent { .. } => {}
                VerificationStage::Verified => return Err(VerificationError::AlreadyVerified),
                _ => return Err(VerificationError::CodeNotSent),
            }
            if code.trim().is_empty() {
                return Err(VerificationError::CodeRequired);
            }
            if state.countdown.remaining() == 0 {
                return Err(VerificationError::CodeExpired);
            }
            (state.begin(step)?, state.email.clone())
        };

        let request = VerifyCodeRequest {
            email,
            code: code.trim().to_string(),
        };
        let result = self.service.verify_code(&request).await;

        let mut state = self.state.lock();
        state.finish(step, epoch)?;

        let failure = match result {
            Ok(response) if response.valid => {
                state.countdown.cancel();
                state.stage = VerificationStage::Verified;
                log::info!("Email {} verified", state.email);
                drop(state);
                self.stage_changed(VerificationStage::Verified);
                return Ok(());
            }
            Ok(_) => VerificationError::CodeMismatch,
            Err(e) => VerificationError::service(step, e),
        };
        drop(state);

        log::warn!("Verification code rejected: {}", failure);
        Err(self.failed(step, failure))
    }

    /// Return to `Unchecked`, aborting the countdown and orphaning any
    /// in-flight request.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        state.epoch = state.epoch.wrapping_add(1);
        state.pending = None;
        state.countdown.clear();
        state.email.clear();
        let changed = state.stage != VerificationStage::Unchecked;
        state.stage = VerificationStage::Unchecked;
        drop(state);

        if changed {
            log::debug!("Verification reset");
            self.stage_changed(VerificationStage::Unchecked);
        }
    }

    // ─── HELPERS ────────────────────────────────────────────────────

    // Sinks may read the sequencer back, so both helpers run unlocked.

    fn stage_changed(&self, stage: VerificationStage) {
        emit(self.sink.as_ref(), VerificationEvent::StageChanged { stage });
    }

    fn failed(&self, step: VerificationStep, err: VerificationError) -> VerificationError {
        emit(
            self.sink.as_ref(),
            VerificationEvent::StepFailed {
                step,
                message: err.user_message(),
            },
        );
        err
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AuthError;
    use crate::events::VecEventSink;
    use crate::service::{
        CheckEmailResponse, SendCodeResponse, SignInRequest, SignInResponse, SignUpRequest,
        SignUpResponse, SimulatedAuthService, VerifyCodeResponse,
    };

    fn sequencer(service: SimulatedAuthService) -> VerificationSequencer {
        VerificationSequencer::new(Arc::new(service), VerificationConfig::default())
    }

    fn instant() -> SimulatedAuthService {
        SimulatedAuthService::new(Duration::ZERO)
    }

    /// Counts calls and answers from fixed flags
    #[derive(Default)]
    struct ScriptedService {
        available: bool,
        send_ok: bool,
        valid: bool,
        fail_send: bool,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AuthService for ScriptedService {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn check_email(
            &self,
            _request: &CheckEmailRequest,
        ) -> Result<CheckEmailResponse, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CheckEmailResponse {
                available: self.available,
            })
        }

        async fn send_code(
            &self,
            _request: &SendCodeRequest,
        ) -> Result<SendCodeResponse, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_send {
                return Err(AuthError::Unavailable("mail relay down".into()));
            }
            Ok(SendCodeResponse {
                success: self.send_ok,
                message: (!self.send_ok).then(|| "quota exceeded".to_string()),
            })
        }

        async fn verify_code(
            &self,
            _request: &VerifyCodeRequest,
        ) -> Result<VerifyCodeResponse, AuthError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(VerifyCodeResponse { valid: self.valid })
        }

        async fn sign_in(&self, _request: &SignInRequest) -> Result<SignInResponse, AuthError> {
            unreachable!("not used by the sequencer")
        }

        async fn sign_up(&self, _request: &SignUpRequest) -> Result<SignUpResponse, AuthError> {
            unreachable!("not used by the sequencer")
        }
    }

    #[tokio::test]
    async fn test_happy_path() {
        let seq = sequencer(instant());
        assert_eq!(seq.stage(), VerificationStage::Unchecked);

        seq.check_email("a@b.com").await.unwrap();
        assert_eq!(seq.stage(), VerificationStage::EmailChecked { available: true });

        seq.send_code().await.unwrap();
        assert!(matches!(seq.stage(), VerificationStage::CodeSent { .. }));
        assert_eq!(seq.remaining_seconds(), 180);
        assert!(seq.is_countdown_running());

        seq.verify_code("123456").await.unwrap();
        assert!(seq.is_verified());
        assert!(!seq.is_countdown_running());
    }

    #[tokio::test]
    async fn test_check_email_preconditions() {
        let seq = sequencer(instant());
        assert!(matches!(
            seq.check_email("  ").await,
            Err(VerificationError::EmailRequired)
        ));
        assert!(matches!(
            seq.check_email("not-an-email").await,
            Err(VerificationError::EmailInvalid)
        ));
        assert_eq!(seq.stage(), VerificationStage::Unchecked);
    }

    #[tokio::test]
    async fn test_taken_email_blocks_send() {
        let seq = sequencer(instant().with_taken_email("a@b.com"));
        let err = seq.check_email("a@b.com").await.unwrap_err();
        assert!(matches!(err, VerificationError::EmailTaken));
        assert_eq!(seq.stage(), VerificationStage::EmailChecked { available: false });

        let err = seq.send_code().await.unwrap_err();
        assert!(matches!(err, VerificationError::EmailNotChecked));
    }

    #[tokio::test]
    async fn test_send_before_check_is_rejected() {
        let seq = sequencer(instant());
        assert!(matches!(
            seq.send_code().await,
            Err(VerificationError::EmailNotChecked)
        ));
        assert!(matches!(
            seq.verify_code("123456").await,
            Err(VerificationError::CodeNotSent)
        ));
    }

    #[tokio::test]
    async fn test_collaborator_failure_is_recoverable() {
        let seq = sequencer(instant().offline());
        let err = seq.check_email("a@b.com").await.unwrap_err();
        assert!(err.is_remote());
        assert_eq!(seq.stage(), VerificationStage::Unchecked);
        assert_eq!(seq.pending(), None);
    }

    #[tokio::test]
    async fn test_send_rejection_stays_in_email_checked() {
        let service = ScriptedService {
            available: true,
            send_ok: false,
            ..Default::default()
        };
        let seq = VerificationSequencer::new(Arc::new(service), VerificationConfig::default());
        seq.check_email("a@b.com").await.unwrap();

        let err = seq.send_code().await.unwrap_err();
        assert_eq!(err.user_message(), "quota exceeded");
        assert_eq!(seq.stage(), VerificationStage::EmailChecked { available: true });
        assert!(!seq.is_countdown_running());
    }

    #[tokio::test]
    async fn test_failed_resend_drops_previous_code() {
        let service = Arc::new(ScriptedService {
            available: true,
            send_ok: true,
            ..Default::default()
        });
        let seq = VerificationSequencer::new(service, VerificationConfig::default());
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();

        // Swap in a failing collaborator for the resend
        let failing = Arc::new(ScriptedService {
            fail_send: true,
            ..Default::default()
        });
        let seq = VerificationSequencer {
            service: failing,
            ..seq
        };
        let err = seq.send_code().await.unwrap_err();
        assert!(matches!(
            err,
            VerificationError::Service {
                step: VerificationStep::SendCode,
                ..
            }
        ));
        assert_eq!(seq.stage(), VerificationStage::EmailChecked { available: true });
        assert_eq!(seq.remaining_seconds(), 0);
    }

    #[tokio::test]
    async fn test_wrong_code_stays_in_code_sent() {
        let seq = sequencer(instant().with_expected_code("111111"));
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();

        let err = seq.verify_code("999999").await.unwrap_err();
        assert!(matches!(err, VerificationError::CodeMismatch));
        assert!(matches!(seq.stage(), VerificationStage::CodeSent { .. }));
        assert!(seq.is_countdown_running());

        seq.verify_code("111111").await.unwrap();
        assert!(seq.is_verified());
    }

    #[tokio::test]
    async fn test_blank_code_is_rejected_locally() {
        let service = Arc::new(ScriptedService {
            available: true,
            send_ok: true,
            valid: true,
            ..Default::default()
        });
        let seq = VerificationSequencer::new(service.clone(), VerificationConfig::default());
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();
        let calls = service.calls.load(Ordering::SeqCst);

        assert!(matches!(
            seq.verify_code("   ").await,
            Err(VerificationError::CodeRequired)
        ));
        assert_eq!(service.calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_code_cannot_be_verified() {
        let service = Arc::new(ScriptedService {
            available: true,
            send_ok: true,
            valid: true,
            ..Default::default()
        });
        let sink = Arc::new(VecEventSink::new());
        let seq = VerificationSequencer::with_sink(
            service.clone(),
            VerificationConfig::default(),
            sink.clone(),
        );

        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();
        assert_eq!(seq.remaining_seconds(), 180);

        tokio::time::sleep(Duration::from_millis(180_500)).await;
        assert_eq!(seq.remaining_seconds(), 0);
        assert!(seq.is_code_expired());
        assert!(!seq.is_countdown_running());
        // Expired codes keep the CodeSent display state
        assert!(matches!(seq.stage(), VerificationStage::CodeSent { .. }));

        let calls = service.calls.load(Ordering::SeqCst);
        let err = seq.verify_code("123456").await.unwrap_err();
        assert!(matches!(err, VerificationError::CodeExpired));
        assert_eq!(service.calls.load(Ordering::SeqCst), calls);

        let events = sink.events();
        let ticks = events
            .iter()
            .filter(|e| matches!(e, VerificationEvent::CountdownTick { .. }))
            .count();
        assert_eq!(ticks, 180);
        assert!(events.contains(&VerificationEvent::CodeExpired));

        // Resend restarts the countdown and unblocks verification
        seq.send_code().await.unwrap();
        assert_eq!(seq.remaining_seconds(), 180);
        seq.verify_code("123456").await.unwrap();
        assert!(seq.is_verified());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_countdown() {
        let seq = sequencer(instant());
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();
        tokio::time::sleep(Duration::from_millis(10_500)).await;
        assert_eq!(seq.remaining_seconds(), 170);

        seq.reset();
        assert_eq!(seq.stage(), VerificationStage::Unchecked);
        assert_eq!(seq.remaining_seconds(), 0);
        assert!(!seq.is_countdown_running());
        assert_eq!(seq.email(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_step_is_busy() {
        let seq = Arc::new(sequencer(SimulatedAuthService::new(Duration::from_secs(1))));

        let first = {
            let seq = Arc::clone(&seq);
            tokio::spawn(async move { seq.check_email("a@b.com").await })
        };
        tokio::task::yield_now().await;
        assert_eq!(seq.pending(), Some(VerificationStep::CheckEmail));

        let second = seq.check_email("a@b.com").await;
        assert!(matches!(
            second,
            Err(VerificationError::Busy(VerificationStep::CheckEmail))
        ));

        first.await.unwrap().unwrap();
        assert_eq!(seq.pending(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_response_after_reset_is_discarded() {
        let seq = Arc::new(sequencer(SimulatedAuthService::new(Duration::from_secs(1))));

        let in_flight = {
            let seq = Arc::clone(&seq);
            tokio::spawn(async move { seq.check_email("old@b.com").await })
        };
        tokio::task::yield_now().await;
        seq.reset();

        let result = in_flight.await.unwrap();
        assert!(matches!(
            result,
            Err(VerificationError::Stale {
                step: VerificationStep::CheckEmail
            })
        ));
        assert_eq!(seq.stage(), VerificationStage::Unchecked);
        assert_eq!(seq.pending(), None);
    }

    #[tokio::test]
    async fn test_recheck_same_address_after_send_is_noop() {
        let seq = sequencer(instant());
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();
        seq.check_email("a@b.com").await.unwrap();
        assert!(matches!(seq.stage(), VerificationStage::CodeSent { .. }));
        assert!(seq.is_countdown_running());
    }

    #[tokio::test]
    async fn test_verified_rejects_further_steps() {
        let seq = sequencer(instant());
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();
        seq.verify_code("123456").await.unwrap();

        assert!(matches!(
            seq.send_code().await,
            Err(VerificationError::AlreadyVerified)
        ));
        assert!(matches!(
            seq.check_email("a@b.com").await,
            Err(VerificationError::AlreadyVerified)
        ));
    }

    #[tokio::test]
    async fn test_stage_events_are_emitted() {
        let sink = Arc::new(VecEventSink::new());
        let seq = VerificationSequencer::with_sink(
            Arc::new(instant()),
            VerificationConfig::default(),
            sink.clone(),
        );
        seq.check_email("a@b.com").await.unwrap();
        seq.send_code().await.unwrap();
        seq.reset();

        let stages: Vec<_> = sink
            .events()
            .into_iter()
            .filter_map(|e| match e {
                VerificationEvent::StageChanged { stage } => Some(stage),
                _ => None,
            })
            .collect();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0], VerificationStage::EmailChecked { available: true });
        assert!(matches!(stages[1], VerificationStage::CodeSent { .. }));
        assert_eq!(stages[2], VerificationStage::Unchecked);
    }

    /// Reads the sequencer back from inside `send`, like a re-rendering UI
    #[derive(Default)]
    struct ReadBackSink {
        sequencer: parking_lot::Mutex<std::sync::Weak<VerificationSequencer>>,
        observed: parking_lot::Mutex<Vec<(VerificationStage, u32)>>,
    }

    impl EventSink for ReadBackSink {
        fn send(&self, event: VerificationEvent) -> Result<(), crate::events::EventError> {
            if let VerificationEvent::StageChanged { .. } = event {
                if let Some(seq) = self.sequencer.lock().upgrade() {
                    let seen = (seq.stage(), seq.remaining_seconds());
                    self.observed.lock().push(seen);
                }
            }
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_sink_can_read_sequencer_during_events() {
        let sink = Arc::new(ReadBackSink::default());
        let seq = Arc::new(VerificationSequencer::with_sink(
            Arc::new(instant()),
            VerificationConfig::default(),
            sink.clone(),
        ));
        *sink.sequencer.lock() = Arc::downgrade(&seq);

        let flow = tokio::spawn({
            let seq = Arc::clone(&seq);
            async move {
                seq.check_email("a@b.com").await.unwrap();
                seq.send_code().await.unwrap();
                seq.verify_code("123456").await.unwrap();
                seq.reset();
            }
        });
        tokio::time::timeout(Duration::from_secs(5), flow)
            .await
            .expect("sequencer blocked while emitting")
            .unwrap();

        let observed = sink.observed.lock().clone();
        assert_eq!(observed.len(), 4);
        assert_eq!(observed[0], (VerificationStage::EmailChecked { available: true }, 0));
        assert!(matches!(observed[1].0, VerificationStage::CodeSent { .. }));
        assert_eq!(observed[1].1, 180);
        assert_eq!(observed[2].0, VerificationStage::Verified);
        assert_eq!(observed[3], (VerificationStage::Unchecked, 0));
    }

    #[test]
    fn test_stage_serialization() {
        let stage = VerificationStage::EmailChecked { available: true };
        let json = serde_json::to_value(stage).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "stage": "emailChecked", "available": true })
        );
    }
}
