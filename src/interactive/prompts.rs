use crate::core::enhance::{EnhanceableField, Enhancer, run_enhancement};
use crate::core::wizard::{ProfileField, WizardStep};
use crate::ui::style as ui;
use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use std::io::Write;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Submit,
    Edit(WizardStep),
    Back,
    Quit,
}

pub fn prompt_field(field: ProfileField, current: &str) -> Result<String> {
    let marker = if field.is_required() { "*" } else { "" };
    let mut prompt = format!("  {}{marker}", field.label());
    if current.is_empty() {
        prompt.push_str(&format!(" {}", ui::dim(format!("({})", field.placeholder()))));
    }

    let value: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .show_default(!current.is_empty())
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

pub fn confirm_enhance(field: ProfileField) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("  Enhance {} with AI?", field.label()))
        .default(false)
        .interact()?)
}

/// Stream an enhancement to the terminal and let the user keep or undo it.
/// Returns the value to store.
pub async fn enhance_interactively(
    field: ProfileField,
    value: String,
    enhancer: &dyn Enhancer,
) -> Result<String> {
    let context = field.enhance_context().unwrap_or_default();
    let slot = Mutex::new(EnhanceableField::new(field.label(), context).with_value(value));

    println!("  {} Enhancing...", ui::accent("✨"));
    print!("  ");
    let outcome = run_enhancement(&slot, enhancer, |chunk| {
        print!("{chunk}");
        let _ = std::io::stdout().flush();
    })
    .await;
    println!();

    let mut slot = slot.into_inner().unwrap_or_else(PoisonError::into_inner);
    match outcome {
        Ok(_) => {
            let keep = Confirm::new()
                .with_prompt("  Keep the enhanced version?")
                .default(true)
                .interact()?;
            if !keep {
                slot.undo();
                println!("  {} Restored your original text", ui::dim("↺"));
            }
        }
        Err(error) => println!("  {} {error}", ui::warn("!")),
    }
    Ok(slot.value().to_string())
}

pub fn prompt_navigation(step: WizardStep) -> Result<Navigation> {
    let mut options = vec![(Navigation::Next, "Next")];
    if !step.is_first() {
        options.push((Navigation::Back, "Back"));
    }
    options.push((Navigation::Quit, "Quit"));

    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let choice = Select::new()
        .with_prompt("  Continue")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[choice].0)
}

pub fn prompt_review_action() -> Result<ReviewAction> {
    let options = [
        (ReviewAction::Submit, "Submit Profile"),
        (ReviewAction::Edit(WizardStep::PersonalInfo), "Edit Personal Information"),
        (ReviewAction::Edit(WizardStep::SkillsExperience), "Edit Skills & Experience"),
        (ReviewAction::Edit(WizardStep::Goals), "Edit Goals & Preferences"),
        (ReviewAction::Back, "Back"),
        (ReviewAction::Quit, "Quit"),
    ];
    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let choice = Select::new()
        .with_prompt("  Review")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[choice].0)
}
