//! Terminal rendition of the profile wizard.

mod prompts;
mod view;

use crate::config::Config;
use crate::core::enhance::build_enhancer;
use crate::core::wizard::{WizardState, WizardStep, simulate_submit};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use prompts::{
    Navigation, ReviewAction, confirm_enhance, enhance_interactively, prompt_field,
    prompt_navigation, prompt_review_action,
};
use view::{print_missing, print_receipt, print_review, print_step, print_welcome_banner};

/// Walk the four wizard steps, then review and submit.
pub async fn run_wizard(config: &Config, relay: Option<&str>) -> Result<()> {
    let enhancer = build_enhancer(config, relay)?;
    let state = Arc::new(Mutex::new(WizardState::new()));
    print_welcome_banner();

    loop {
        let step = state.lock().await.current_step();
        print_step(step);

        if step.is_last() {
            print_review(state.lock().await.record());
            match prompt_review_action()? {
                ReviewAction::Submit => {
                    let missing = state.lock().await.missing_required_fields();
                    if let Some(&first) = missing.first() {
                        print_missing(&missing);
                        let target = WizardStep::of_field(first);
                        state.lock().await.go_to_step(i64::from(target.number()));
                        continue;
                    }
                    println!("  Submitting...");
                    let receipt = simulate_submit(&state, config.wizard.submit_delay()).await?;
                    print_receipt(&receipt);
                    return Ok(());
                }
                ReviewAction::Edit(target) => {
                    state.lock().await.go_to_step(i64::from(target.number()));
                }
                ReviewAction::Back => {
                    state.lock().await.prev();
                }
                ReviewAction::Quit => return Ok(()),
            }
            continue;
        }

        for &field in step.fields() {
            let current = state.lock().await.record().get(field).to_string();
            let mut value = prompt_field(field, &current)?;
            if field.is_long() && !value.trim().is_empty() && confirm_enhance(field)? {
                value = enhance_interactively(field, value, enhancer.as_ref()).await?;
            }
            state.lock().await.set_field(field, value);
        }

        match prompt_navigation(step)? {
            Navigation::Next => {
                state.lock().await.next();
            }
            Navigation::Back => {
                state.lock().await.prev();
            }
            Navigation::Quit => return Ok(()),
        }
    }
}
