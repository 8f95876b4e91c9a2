use crate::error::WizardError;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::profile::{ProfileField, ProfilePatch, ProfileRecord};
use super::step::WizardStep;

/// The most recent assistant rewrite of a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastEnhanced {
    pub field: ProfileField,
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Editing,
    Submitting {
        started_at: DateTime<Utc>,
        snapshot: ProfileRecord,
    },
}

/// Returned once a simulated submission completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub submitted_at: DateTime<Utc>,
    pub filled_fields: usize,
    pub profile: ProfileRecord,
}

/// Snapshot handed to the assistant runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardReadable {
    pub current_step: u8,
    pub step_title: &'static str,
    pub form_data: ProfileRecord,
    pub missing_fields: Vec<ProfileField>,
    pub completion_percentage: u8,
}

/// Owns the profile record and the wizard's position in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    record: ProfileRecord,
    current_step: WizardStep,
    last_enhanced: Option<LastEnhanced>,
    phase: Phase,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            record: ProfileRecord::default(),
            current_step: WizardStep::PersonalInfo,
            last_enhanced: None,
            phase: Phase::Editing,
        }
    }

    pub fn record(&self) -> &ProfileRecord {
        &self.record
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn last_enhanced(&self) -> Option<&LastEnhanced> {
        self.last_enhanced.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn submit_started_at(&self) -> Option<DateTime<Utc>> {
        match &self.phase {
            Phase::Submitting { started_at, .. } => Some(*started_at),
            Phase::Editing => None,
        }
    }

    /// Merge `patch` field by field. Returns how many fields were written.
    pub fn update_fields(&mut self, patch: ProfilePatch) -> usize {
        let entries = patch.into_entries();
        let written = entries.len();
        for (field, value) in entries {
            self.record.set(field, value);
        }
        written
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) -> String {
        self.record.set(field, value)
    }

    /// Overwrite one field and remember what it held.
    pub fn apply_enhanced(&mut self, field: ProfileField, value: impl Into<String>) {
        let original = self.record.set(field, value);
        self.last_enhanced = Some(LastEnhanced { field, original });
    }

    /// Jump, clamping `n` into the valid step range.
    pub fn go_to_step(&mut self, n: i64) -> WizardStep {
        self.current_step = WizardStep::clamped(n);
        self.current_step
    }

    /// Returns `false` when already on the last step.
    pub fn next(&mut self) -> bool {
        match self.current_step.next() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    /// Returns `false` when already on the first step.
    pub fn prev(&mut self) -> bool {
        match self.current_step.prev() {
            Some(step) => {
                self.current_step = step;
                true
            }
            None => false,
        }
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step.is_first()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step.is_last()
    }

    /// Required fields that are empty or whitespace-only, in declaration order.
    pub fn missing_required_fields(&self) -> Vec<ProfileField> {
        ProfileField::REQUIRED
            .into_iter()
            .filter(|&field| !self.record.is_filled(field))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.missing_required_fields().is_empty()
    }

    /// Rounded share of non-blank fields.
    pub fn completion_percentage(&self) -> u8 {
        let total = ProfileField::ALL.len();
        let filled = self.record.filled_count();
        let rounded = (filled * 200 + total) / (2 * total);
        u8::try_from(rounded).unwrap_or(100)
    }

    pub fn readable(&self) -> WizardReadable {
        WizardReadable {
            current_step: self.current_step.number(),
            step_title: self.current_step.title(),
            form_data: self.record.clone(),
            missing_fields: self.missing_required_fields(),
            completion_percentage: self.completion_percentage(),
        }
    }

    /// Enter the submitting phase. Refused while required fields are missing
    /// or another submission is running.
    pub fn begin_submit(&mut self) -> Result<DateTime<Utc>, WizardError> {
        if self.is_submitting() {
            return Err(WizardError::AlreadySubmitting);
        }
        let missing = self.missing_required_fields();
        if !missing.is_empty() {
            return Err(WizardError::MissingRequired(
                missing.iter().map(|field| field.name().to_string()).collect(),
            ));
        }

        let started_at = Utc::now();
        self.phase = Phase::Submitting {
            started_at,
            snapshot: self.record.clone(),
        };
        Ok(started_at)
    }

    /// Complete the submission and discard the record.
    pub fn finish_submit(&mut self) -> Result<SubmitReceipt, WizardError> {
        let Phase::Submitting { snapshot, .. } =
            std::mem::replace(&mut self.phase, Phase::Editing)
        else {
            return Err(WizardError::NotSubmitting);
        };

        let receipt = SubmitReceipt {
            submitted_at: Utc::now(),
            filled_fields: snapshot.filled_count(),
            profile: snapshot,
        };
        *self = Self::new();
        Ok(receipt)
    }

    /// Abort a running submission, keeping the record.
    pub fn abort_submit(&mut self) -> bool {
        let was_submitting = self.is_submitting();
        self.phase = Phase::Editing;
        was_submitting
    }
}
