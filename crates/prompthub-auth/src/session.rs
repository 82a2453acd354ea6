//! Sign-in / sign-up mode context
//!
//! One `AuthSession` per auth screen. It owns both form controllers and
//! the current mode; switching modes clears inline errors on both forms
//! and resets verification, which stops any running countdown.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::VerificationConfig;
use crate::events::{EventSink, NullEventSink};
use crate::service::SharedAuthService;
use crate::signin::SignInController;
use crate::signup::SignUpController;

/// Which form the auth screen shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }
}

pub struct AuthSession {
    mode: AuthMode,
    sign_in: SignInController,
    sign_up: SignUpController,
}

impl AuthSession {
    pub fn new(service: SharedAuthService, config: VerificationConfig) -> Self {
        Self::with_sink(service, config, Arc::new(NullEventSink))
    }

    pub fn with_sink(
        service: SharedAuthService,
        config: VerificationConfig,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            mode: AuthMode::default(),
            sign_in: SignInController::new(Arc::clone(&service)),
            sign_up: SignUpController::with_sink(service, config, sink),
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn sign_in(&mut self) -> &mut SignInController {
        &mut self.sign_in
    }

    pub fn sign_up(&mut self) -> &mut SignUpController {
        &mut self.sign_up
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Switch to `mode`. Field values survive the switch.
    pub fn set_mode(&mut self, mode: AuthMode) {
        if mode == self.mode {
            return;
        }
        log::debug!("Auth mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.sign_in.clear_errors();
        self.sign_up.clear_errors();
        self.sign_up.reset_verification();
    }
}
