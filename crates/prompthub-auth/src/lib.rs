//! Sign-in, sign-up and email verification for PromptHub
//!
//! Host-agnostic controllers for the auth screen:
//! - **Sign-up**: form values, inline errors and the verification sequencer
//!   (check email → send code → verify code, with a 180 s countdown)
//! - **Sign-in**: email/password form submitted through the collaborator
//! - **Session**: the sign-in / sign-up mode toggle
//!
//! Every network call goes through [`AuthService`]. The simulated
//! collaborator is the default; the HTTP one is used when a base URL is
//! configured.
//!
//! # Example
//!
//! ```rust,ignore
//! use prompthub_auth::{service, AuthClientConfig, SignUpController, VerificationConfig};
//!
//! let service = service::from_config(&AuthClientConfig::default())?;
//! let mut sign_up = SignUpController::new(service, VerificationConfig::default());
//!
//! sign_up.set_email("neo@example.com");
//! sign_up.check_email().await?;
//! sign_up.send_code().await?;
//! sign_up.set_verification_code("123456");
//! sign_up.verify_code().await?;
//! ```

pub mod config;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod events;
pub mod form;
pub mod sequencer;
pub mod service;
pub mod session;
pub mod signin;
pub mod signup;
pub mod validation;

// Re-exports for convenience
pub use config::{AuthClientConfig, VerificationConfig};
pub use countdown::{format_remaining, Countdown};
pub use error::{AuthError, SignInError, SubmitError, VerificationError, VerificationStep};
pub use events::{
    ChannelEventSink, EventError, EventSink, NullEventSink, VecEventSink, VerificationEvent,
};
pub use form::{Agreement, SignInField, SignInForm, SignUpField, SignUpForm};
pub use sequencer::{VerificationSequencer, VerificationStage};
pub use service::{AuthService, HttpAuthService, SharedAuthService, SimulatedAuthService};
pub use session::{AuthMode, AuthSession};
pub use signin::SignInController;
pub use signup::SignUpController;
pub use validation::{is_valid_email, is_valid_password};
