//! Per-client state container hosted by the gateway.
//!
//! In-memory only; sessions disappear on restart.

pub mod store;

pub use store::{MAX_SESSIONS, SessionStore, SharedSession};

use crate::core::actions::{InvocationLedger, Surface};
use crate::core::application::JobApplication;
use crate::core::dashboard::DashboardState;
use crate::core::document::BusinessDocument;
use crate::core::onboarding::OnboardingState;
use crate::core::playground::PlaygroundState;
use crate::core::wizard::{SubmitTarget, WizardState};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Everything one client's assistant can read and mutate.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    pub wizard: WizardState,
    pub onboarding: OnboardingState,
    pub playground: PlaygroundState,
    pub document: BusinessDocument,
    pub application: JobApplication,
    pub dashboard: DashboardState,
    pub(crate) invocations: InvocationLedger,
}

/// Readable snapshot for one surface, as handed to the assistant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readable {
    pub surface: Surface,
    pub description: &'static str,
    pub value: Value,
}

impl SubmitTarget for Session {
    fn wizard_mut(&mut self) -> &mut WizardState {
        &mut self.wizard
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            wizard: WizardState::new(),
            onboarding: OnboardingState::new(),
            playground: PlaygroundState::default(),
            document: BusinessDocument::default(),
            application: JobApplication::default(),
            dashboard: DashboardState::default(),
            invocations: InvocationLedger::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_invocations(&self) -> usize {
        self.invocations.len()
    }

    /// Snapshot for `surface`; `None` for surfaces that publish no state.
    pub fn readable(&self, surface: Surface) -> Option<Readable> {
        let description = surface.readable_description()?;
        let value = match surface {
            Surface::Wizard => serde_json::to_value(self.wizard.readable()),
            Surface::Onboarding => serde_json::to_value(self.onboarding.readable()),
            Surface::Playground => serde_json::to_value(&self.playground),
            Surface::Document => serde_json::to_value(&self.document),
            Surface::Application => serde_json::to_value(&self.application),
            Surface::Dashboard => serde_json::to_value(self.dashboard.snapshot()),
            Surface::Compare => Ok(Value::Null),
        }
        .unwrap_or(Value::Null);

        Some(Readable {
            surface,
            description,
            value,
        })
    }
}
