use serde::Serialize;

use super::labels::{availability_label, trade_label, work_type_label};
use super::profile::{ProfileField, ProfileRecord};
use super::step::WizardStep;

pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub field: ProfileField,
    pub label: &'static str,
    pub value: String,
    pub provided: bool,
    pub long: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub title: &'static str,
    /// Step the section's edit control jumps back to.
    pub edit_step: u8,
    pub rows: Vec<ReviewRow>,
}

fn review_label(field: ProfileField) -> &'static str {
    match field {
        ProfileField::FullName => "Full Name",
        ProfileField::Email => "Email",
        ProfileField::Phone => "Phone",
        ProfileField::Location => "Location",
        ProfileField::Trade => "Trade",
        ProfileField::YearsExperience => "Experience",
        ProfileField::Skills => "Skills",
        ProfileField::Certifications => "Certifications",
        ProfileField::CareerGoals => "Career Goals",
        ProfileField::PreferredWorkType => "Work Type",
        ProfileField::Availability => "Availability",
    }
}

fn display_value(field: ProfileField, raw: &str) -> String {
    match field {
        ProfileField::Trade => trade_label(raw),
        ProfileField::PreferredWorkType => work_type_label(raw),
        ProfileField::Availability => availability_label(raw),
        _ => raw,
    }
    .to_string()
}

fn row(record: &ProfileRecord, field: ProfileField) -> ReviewRow {
    let provided = record.is_filled(field);
    ReviewRow {
        field,
        label: review_label(field),
        value: if provided {
            display_value(field, record.get(field))
        } else {
            NOT_PROVIDED.to_string()
        },
        provided,
        long: field.is_long(),
    }
}

/// The review step: a read-only projection of the same record.
pub fn review_sections(record: &ProfileRecord) -> Vec<ReviewSection> {
    [
        ("Personal Information", WizardStep::PersonalInfo),
        ("Skills & Experience", WizardStep::SkillsExperience),
        ("Goals & Preferences", WizardStep::Goals),
    ]
    .into_iter()
    .map(|(title, step)| ReviewSection {
        title,
        edit_step: step.number(),
        rows: step.fields().iter().map(|&field| row(record, field)).collect(),
    })
    .collect()
}
