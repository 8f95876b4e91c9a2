use crate::error::WizardError;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use super::state::{SubmitReceipt, WizardState};

/// Anything that owns a wizard and can be submitted.
pub trait SubmitTarget: Send + 'static {
    fn wizard_mut(&mut self) -> &mut WizardState;
}

impl SubmitTarget for WizardState {
    fn wizard_mut(&mut self) -> &mut WizardState {
        self
    }
}

/// Rolls an abandoned submission back to editing when dropped armed.
struct PendingSubmit<S: SubmitTarget> {
    state: Arc<Mutex<S>>,
    started_at: DateTime<Utc>,
    armed: bool,
}

fn abandon(wizard: &mut WizardState, started_at: DateTime<Utc>) {
    // A newer submission is left alone.
    if wizard.submit_started_at() == Some(started_at) && wizard.abort_submit() {
        tracing::warn!(%started_at, "profile submission abandoned");
    }
}

impl<S: SubmitTarget> Drop for PendingSubmit<S> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let started_at = self.started_at;
        if let Ok(mut guard) = self.state.try_lock() {
            abandon(guard.wizard_mut(), started_at);
            return;
        }
        // Lock is busy: roll back once it frees up.
        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            let state = Arc::clone(&self.state);
            runtime.spawn(async move {
                abandon(state.lock().await.wizard_mut(), started_at);
            });
        }
    }
}

/// Simulated submit: no network, no persistence, just a delay.
///
/// The lock is released while waiting so reads of the owning state stay
/// responsive; a concurrent second submit is refused by the phase check.
/// Dropping the future before it completes leaves the record as it was
/// and the wizard back in editing.
pub async fn simulate_submit<S: SubmitTarget>(
    state: &Arc<Mutex<S>>,
    delay: Duration,
) -> Result<SubmitReceipt, WizardError> {
    let started_at = state.lock().await.wizard_mut().begin_submit()?;
    let mut pending = PendingSubmit {
        state: Arc::clone(state),
        started_at,
        armed: true,
    };
    tracing::info!(%started_at, ?delay, "profile submission started");

    tokio::time::sleep(delay).await;

    let receipt = state.lock().await.wizard_mut().finish_submit()?;
    pending.armed = false;
    tracing::info!(filled = receipt.filled_fields, "profile submitted");
    Ok(receipt)
}
