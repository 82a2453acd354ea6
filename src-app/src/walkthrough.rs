//! Scripted walkthrough of the PromptHub screens
//!
//! Drives every controller the way a UI host would: browses the catalog,
//! signs up through email verification, signs in and registers a prompt.

use std::sync::Arc;

use prompthub_auth::{
    format_remaining, AuthMode, AuthSession, ChannelEventSink, SharedAuthService, SignInError,
    SubmitError, VerificationError, VerificationEvent,
};
use prompthub_catalog::{hero_cards, search, trending_prompts, SortFilter, ThemeContext};
use prompthub_forms::FormField;
use prompthub_registration::{
    PricingType, PromptType, RegistrationController, RegistrationError, SimulatedPromptSubmitter,
};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::constants::walkthrough;

#[derive(Debug, Error)]
pub enum WalkthroughError {
    #[error("Verification failed: {0}")]
    Verification(#[from] VerificationError),
    #[error(transparent)]
    SignUp(#[from] SubmitError),
    #[error(transparent)]
    SignIn(#[from] SignInError),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

pub fn browse_catalog(theme: &mut ThemeContext) {
    theme.mount();
    log::info!("Theme: {} ({})", theme.icon(), theme.toggle_label());

    for card in hero_cards() {
        log::info!("Hero: {} [{}]", card.title, card.price_label);
    }
    for filter in SortFilter::ALL {
        let titles: Vec<_> = filter
            .apply(trending_prompts())
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        log::info!("{}: {:?}", filter.label(), titles);
    }
    log::info!("Search 'seo': {} result(s)", search(trending_prompts(), "seo").len());
}

/// Log sequencer events until the channel closes
fn spawn_event_logger(mut rx: mpsc::UnboundedReceiver<VerificationEvent>) {
    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                VerificationEvent::CountdownTick { remaining } => {
                    log::debug!("Code valid for {}", format_remaining(remaining));
                }
                other => log::debug!("Verification event: {:?}", other),
            }
        }
    });
}

pub async fn sign_up_and_sign_in(
    service: SharedAuthService,
    config: &AppConfig,
) -> Result<(), WalkthroughError> {
    let (tx, rx) = mpsc::unbounded_channel();
    spawn_event_logger(rx);

    let mut session = AuthSession::with_sink(
        service,
        config.verification.clone(),
        Arc::new(ChannelEventSink::new(tx)),
    );
    session.set_mode(AuthMode::SignUp);

    let sign_up = session.sign_up();
    sign_up.set_email(walkthrough::EMAIL);
    sign_up.set_nickname(walkthrough::NICKNAME);
    sign_up.set_password(walkthrough::PASSWORD);
    sign_up.set_confirm_password(walkthrough::PASSWORD);
    sign_up.toggle_agree_all();

    // Submitting before verification reports the missing step inline
    if let Err(SubmitError::Invalid(errors)) = sign_up.submit().await {
        for (field, message) in errors.iter() {
            log::info!("{}: {}", field.name(), message);
        }
    }

    sign_up.check_email().await?;
    sign_up.send_code().await?;

    let mut remaining = sign_up.sequencer().subscribe_countdown();
    log::info!("Code sent, {} left", format_remaining(*remaining.borrow()));
    for _ in 0..walkthrough::TICKS_TO_WATCH {
        if remaining.changed().await.is_err() {
            break;
        }
        log::info!("{} left", format_remaining(*remaining.borrow()));
    }

    sign_up.set_verification_code(walkthrough::CODE);
    sign_up.verify_code().await?;
    let account = sign_up.submit().await?;
    log::info!("Account created: {}", account.user_id);

    session.toggle_mode();
    let sign_in = session.sign_in();
    sign_in.set_email(walkthrough::EMAIL);
    sign_in.set_password(walkthrough::PASSWORD);
    let signed_in = sign_in.submit().await?;
    log::info!("Signed in with token {}", signed_in.access_token);
    Ok(())
}

pub async fn register_prompt() -> Result<(), WalkthroughError> {
    let mut registration =
        RegistrationController::new(Arc::new(SimulatedPromptSubmitter::default()));
    registration.set_prompt_type(PromptType::Image);
    registration.set_title("Midjourney 8K 제품 렌더 템플릿");
    registration.set_pricing_type(PricingType::Paid);
    registration.set_price("4,900");
    if let Some(tool) = registration.ai_tools().first() {
        registration.set_ai_tool(*tool);
    }
    registration.toggle_subject("제품");
    registration.set_prompt("premium electronics mockup, studio lighting, 8k");
    registration.set_image_url("https://imgur.com/example");
    registration.set_aspect_ratio("1:1");

    let receipt = registration.submit().await?;
    log::info!("{} ({})", receipt.message, receipt.id);
    Ok(())
}
