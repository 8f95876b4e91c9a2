//! Job application form that the assistant fills alongside per-field
//! enhance buttons.

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ApplicationField {
    JobTitle,
    Skills,
    Experience,
    Goals,
}

impl ApplicationField {
    pub const ALL: [Self; 4] = [Self::JobTitle, Self::Skills, Self::Experience, Self::Goals];

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::JobTitle => "Job Title",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Goals => "Goals",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobApplication {
    pub job_title: String,
    pub skills: String,
    pub experience: String,
    pub goals: String,
}

impl JobApplication {
    pub fn get(&self, field: ApplicationField) -> &str {
        match field {
            ApplicationField::JobTitle => &self.job_title,
            ApplicationField::Skills => &self.skills,
            ApplicationField::Experience => &self.experience,
            ApplicationField::Goals => &self.goals,
        }
    }

    pub fn set(&mut self, field: ApplicationField, value: impl Into<String>) {
        let slot = match field {
            ApplicationField::JobTitle => &mut self.job_title,
            ApplicationField::Skills => &mut self.skills,
            ApplicationField::Experience => &mut self.experience,
            ApplicationField::Goals => &mut self.goals,
        };
        *slot = value.into();
    }

    /// Write every non-empty value of `patch`. Returns how many were written.
    pub fn apply(&mut self, patch: &ApplicationPatch) -> usize {
        let entries = patch.entries();
        for (field, value) in &entries {
            self.set(*field, *value);
        }
        entries.len()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Bulk update from the assistant. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationPatch {
    pub job_title: Option<String>,
    pub skills: Option<String>,
    pub experience: Option<String>,
    pub goals: Option<String>,
}

impl ApplicationPatch {
    /// Present, non-empty values in form order.
    pub fn entries(&self) -> Vec<(ApplicationField, &str)> {
        ApplicationField::ALL
            .into_iter()
            .filter_map(|field| {
                let value = match field {
                    ApplicationField::JobTitle => &self.job_title,
                    ApplicationField::Skills => &self.skills,
                    ApplicationField::Experience => &self.experience,
                    ApplicationField::Goals => &self.goals,
                };
                value
                    .as_deref()
                    .filter(|value| !value.is_empty())
                    .map(|value| (field, value))
            })
            .collect()
    }
}
