use crate::core::application::ApplicationField;
use crate::core::dashboard::MetricId;
use crate::core::document::DocumentList;
use crate::core::session::Session;
use crate::core::wizard::{ProfileField, format_field_name};

use super::call::ActionCall;

/// Nearest integer step, saturating; NaN reads as 0 and clamps to step 1.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn step_index(step_number: f64) -> i64 {
    if step_number.is_nan() {
        0
    } else {
        step_number.round() as i64
    }
}

fn valid_field_names() -> String {
    ProfileField::ALL.map(ProfileField::name).join(", ")
}

fn valid_application_fields() -> String {
    ApplicationField::ALL.map(ApplicationField::name).join(", ")
}

/// Apply `call` to the session state and return the confirmation string.
///
/// Invalid catalog ids and unknown field names are answered with a
/// descriptive string and leave state untouched.
pub fn apply(call: &ActionCall, session: &mut Session) -> String {
    match call {
        ActionCall::AutoFillProfile(patch) => {
            let written = session.wizard.update_fields(patch.clone().without_empty());
            format!(
                "Profile updated with {written} fields. User can click \"Apply to Form\" or \"Apply & Review\" in the preview card."
            )
        }
        ActionCall::EnhanceField {
            field_name,
            enhanced_value,
        } => {
            let Ok(field) = field_name.parse::<ProfileField>() else {
                return format!(
                    "Unknown field: {field_name}. Valid fields: {}",
                    valid_field_names()
                );
            };
            if enhanced_value.is_empty() {
                return format!(
                    "No enhanced value provided for {}.",
                    format_field_name(field.name())
                );
            }
            session.wizard.apply_enhanced(field, enhanced_value.clone());
            format!(
                "Enhanced {}. User can click \"Use Enhanced Version\" to apply.",
                format_field_name(field.name())
            )
        }
        ActionCall::GoToStep { step_number } => {
            let step = session.wizard.go_to_step(step_index(*step_number));
            format!("Navigated to Step {}: {}", step.number(), step.title())
        }
        ActionCall::CheckMissingFields => {
            let missing = session.wizard.missing_required_fields();
            if missing.is_empty() {
                "All required fields are filled! The profile is ready for submission.".to_string()
            } else {
                let names: Vec<String> = missing
                    .iter()
                    .map(|field| format_field_name(field.name()))
                    .collect();
                format!(
                    "Missing {} required fields: {}",
                    missing.len(),
                    names.join(", ")
                )
            }
        }
        ActionCall::ShowTradeSelection => {
            "Trade selection displayed. User can click on their trade.".to_string()
        }
        ActionCall::ShowExperienceSelection => {
            "Experience level selection displayed. User can click their level.".to_string()
        }
        ActionCall::ShowGoalsSelection => {
            "Goals selection displayed. User can select multiple goals.".to_string()
        }
        ActionCall::ShowLocationInput => {
            "Location input displayed. User can type their location.".to_string()
        }
        ActionCall::ShowOnboardingSummary => {
            "Summary displayed. User can review and confirm their profile.".to_string()
        }
        ActionCall::SetTrade { trade_id } => match session.onboarding.set_trade(trade_id) {
            Some(trade) => format!("Trade set to {}", trade.id),
            None => "Invalid trade ID".to_string(),
        },
        ActionCall::SetExperience { level_id } => {
            match session.onboarding.set_experience(level_id) {
                Some(level) => format!("Experience set to {}", level.id),
                None => "Invalid experience level".to_string(),
            }
        }
        ActionCall::SetLocation { location } => {
            session.onboarding.set_location(location.clone());
            format!("Location set to {location}")
        }
        ActionCall::ToggleGoal { goal_id } => match session.onboarding.toggle_goal(goal_id) {
            Some(true) => format!("Goal {goal_id} selected"),
            Some(false) => format!("Goal {goal_id} removed"),
            None => "Invalid goal ID".to_string(),
        },
        ActionCall::IncrementCounter { amount } => {
            let value = session.playground.increment(*amount);
            format!("Counter incremented by {amount}. New value: {value}")
        }
        ActionCall::EnhanceText { improved_text } => {
            session.playground.enhanced_text.clone_from(improved_text);
            format!("Text has been enhanced: {improved_text}")
        }
        ActionCall::UpdateCompanyName { company_name } => {
            session.document.company_name.clone_from(company_name);
            format!("Updated company name to: {company_name}")
        }
        ActionCall::UpdateVision { vision } => {
            session.document.vision.clone_from(vision);
            "Updated vision statement.".to_string()
        }
        ActionCall::UpdateGoals { goals } => {
            let count = session.document.replace_list(DocumentList::Goals, goals.clone());
            format!("Updated {count} strategic goals.")
        }
        ActionCall::UpdateInitiatives { initiatives } => {
            let count = session
                .document
                .replace_list(DocumentList::Initiatives, initiatives.clone());
            format!("Updated {count} initiatives.")
        }
        ActionCall::UpdateMetrics { metrics } => {
            let count = session
                .document
                .replace_list(DocumentList::Metrics, metrics.clone());
            format!("Updated {count} success metrics.")
        }
        ActionCall::FillEntireDocument(contents) => {
            let document = &mut session.document;
            document.company_name.clone_from(&contents.company_name);
            document.vision.clone_from(&contents.vision);
            document.replace_list(DocumentList::Goals, contents.goals.clone());
            document.replace_list(DocumentList::Initiatives, contents.initiatives.clone());
            document.replace_list(DocumentList::Metrics, contents.metrics.clone());
            format!(
                "Successfully filled all document fields for {}.",
                contents.company_name
            )
        }
        ActionCall::EnhanceAllFields(patch) => {
            session.application.apply(patch);
            "All fields enhanced. Click \"Apply All Enhancements\" to update the form.".to_string()
        }
        ActionCall::SuggestFieldContent {
            field_name,
            suggestion,
        } => {
            let Ok(field) = field_name.parse::<ApplicationField>() else {
                return format!(
                    "Unknown field: {field_name}. Valid fields: {}",
                    valid_application_fields()
                );
            };
            if !suggestion.is_empty() {
                session.application.set(field, suggestion.clone());
            }
            format!(
                "Suggestion provided for {field_name}. Click \"Use this suggestion\" to apply."
            )
        }
        ActionCall::AutoFillFromDescription(patch) => {
            session.application.apply(patch);
            "Form auto-filled based on your description.".to_string()
        }
        ActionCall::ResetForm => {
            session.application.reset();
            "Form has been reset.".to_string()
        }
        ActionCall::ExplainMetric { metric_name } => match metric_name.parse::<MetricId>() {
            Ok(metric) => {
                session.dashboard.select(metric);
                format!("Explained {metric_name} metric with detailed insights.")
            }
            Err(_) => format!(
                "Unknown metric: {metric_name}. Valid metrics: {}",
                MetricId::valid_names()
            ),
        },
        ActionCall::AnswerDataQuestion { .. } => {
            "Question answered with data insight.".to_string()
        }
        ActionCall::DetectAnomaly { .. } => "Anomaly detected and explained.".to_string(),
        ActionCall::GenerateReport { .. } => "Report generated successfully.".to_string(),
        ActionCall::CompareOptions(_) => {
            "Comparison table displayed above. Do not repeat the table contents in text."
                .to_string()
        }
        ActionCall::ListProsAndCons(_) => {
            "Pros and cons displayed above. Do not repeat the list in text.".to_string()
        }
        ActionCall::MakeRecommendation(_) => {
            "Recommendation displayed above. Do not repeat it in text.".to_string()
        }
        ActionCall::CreateDecisionMatrix(_) => {
            "Decision matrix displayed above. Do not repeat the scores in text.".to_string()
        }
    }
}
