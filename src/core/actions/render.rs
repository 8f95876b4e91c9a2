use crate::core::application::{ApplicationField, ApplicationPatch};
use crate::core::compare::{score, total};
use crate::core::dashboard::{MetricId, REPORT_CONCERNS, REPORT_HEADING, REPORT_WINS, Severity};
use crate::core::document::DocumentList;
use crate::core::onboarding::catalog::{find_experience, find_goal, find_trade};
use crate::core::onboarding::{EXPERIENCE_LEVELS, GOALS, TRADES};
use crate::core::session::Session;
use crate::core::wizard::{ProfileField, WizardStep, format_field_name};
use crate::error::ActionError;
use serde::Serialize;
use serde_json::Value;

use super::call::ActionCall;
use super::dispatch::step_index;
use super::invocation::InvocationStatus;
use super::surfaces::find_action;

/// What the chat transcript shows for an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActionView {
    Loading { message: String },
    Card { title: String, lines: Vec<String> },
}

impl ActionView {
    fn loading(message: impl Into<String>) -> Self {
        Self::Loading {
            message: message.into(),
        }
    }

    fn card(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self::Card {
            title: title.into(),
            lines,
        }
    }
}

/// Render an invocation from its arguments as they stand at `status`.
///
/// While arguments are still streaming they may be partial, so only the
/// action name has to be valid. Completed invocations are fully decoded.
pub fn render(
    name: &str,
    arguments: &Value,
    status: InvocationStatus,
    session: &Session,
) -> Result<ActionView, ActionError> {
    if find_action(name).is_none() {
        return Err(ActionError::Unknown {
            name: name.to_string(),
        });
    }

    if !status.is_complete() {
        return Ok(ActionView::loading(loading_message(name, arguments)));
    }

    let call = ActionCall::parse(name, arguments)?;
    Ok(complete_view(&call, session))
}

fn loading_message(name: &str, arguments: &Value) -> String {
    match name {
        "autoFillProfile" => "Analyzing your profile...".to_string(),
        "enhanceField" => "Enhancing...".to_string(),
        "goToStep" => "Navigating...".to_string(),
        "checkMissingFields" => "Checking required fields...".to_string(),
        "setTrade" => "Setting trade...".to_string(),
        "setExperience" => "Setting experience...".to_string(),
        "setLocation" => "Setting location...".to_string(),
        "toggleGoal" => "Updating goals...".to_string(),
        "incrementCounter" => match arguments.get("amount") {
            Some(Value::Number(amount)) => format!("Incrementing counter by {amount}..."),
            Some(Value::String(amount)) if !amount.is_empty() => {
                format!("Incrementing counter by {amount}...")
            }
            _ => "Incrementing counter...".to_string(),
        },
        "enhanceText" => "Enhancing text...".to_string(),
        "updateCompanyName" | "updateVision" | "updateGoals" | "updateInitiatives"
        | "updateMetrics" => "Updating document...".to_string(),
        "fillEntireDocument" => "Filling document...".to_string(),
        "enhanceAllFields" | "autoFillFromDescription" => "Enhancing all fields...".to_string(),
        "suggestFieldContent" => "Thinking of suggestions...".to_string(),
        "resetForm" => "Resetting form...".to_string(),
        "explainMetric" => "Analyzing metric...".to_string(),
        "answerDataQuestion" => "Analyzing your question...".to_string(),
        "detectAnomaly" => "Detecting anomalies...".to_string(),
        "generateReport" => match arguments.get("reportType") {
            Some(Value::String(report)) if !report.is_empty() => format!("Generating {report}..."),
            _ => "Generating Report...".to_string(),
        },
        "compareOptions" => "Building comparison...".to_string(),
        "listProsAndCons" => "Analyzing pros and cons...".to_string(),
        "makeRecommendation" => "Thinking through your question...".to_string(),
        "createDecisionMatrix" => "Building decision matrix...".to_string(),
        _ => "Loading...".to_string(),
    }
}

fn complete_view(call: &ActionCall, session: &Session) -> ActionView {
    match call {
        ActionCall::AutoFillProfile(patch) => {
            let lines = patch
                .clone()
                .without_empty()
                .into_entries()
                .into_iter()
                .map(|(field, value)| format!("{}: {value}", field.label()))
                .collect();
            ActionView::card("Profile Preview", lines)
        }
        ActionCall::EnhanceField {
            field_name,
            enhanced_value,
        } => {
            let title = match field_name.parse::<ProfileField>() {
                Ok(field) => format!("Enhanced {}", format_field_name(field.name())),
                Err(_) => format!("Unknown field: {field_name}"),
            };
            ActionView::card(title, vec![enhanced_value.clone()])
        }
        ActionCall::GoToStep { step_number } => {
            let step = WizardStep::clamped(step_index(*step_number));
            ActionView::card(
                format!("Step {}: {}", step.number(), step.title()),
                vec![step.description().to_string()],
            )
        }
        ActionCall::CheckMissingFields => {
            let missing = session.wizard.missing_required_fields();
            if missing.is_empty() {
                ActionView::card("Ready to submit", vec![])
            } else {
                ActionView::card(
                    "Missing required fields",
                    missing.iter().map(|f| f.label().to_string()).collect(),
                )
            }
        }
        ActionCall::ShowTradeSelection => {
            let selected = session.onboarding.trade().map(|t| t.id);
            ActionView::card(
                "What's your trade?",
                TRADES
                    .iter()
                    .map(|t| {
                        marked(
                            selected == Some(t.id),
                            &format!("{} ({})", t.name, t.description),
                        )
                    })
                    .collect(),
            )
        }
        ActionCall::ShowExperienceSelection => {
            let selected = session.onboarding.experience().map(|e| e.id);
            ActionView::card(
                "How much experience do you have?",
                EXPERIENCE_LEVELS
                    .iter()
                    .map(|e| {
                        marked(
                            selected == Some(e.id),
                            &format!("{} ({}): {}", e.label, e.years, e.description),
                        )
                    })
                    .collect(),
            )
        }
        ActionCall::ShowGoalsSelection => {
            let chosen: Vec<&str> = session.onboarding.goals().map(|g| g.id).collect();
            ActionView::card(
                "What are your goals?",
                GOALS
                    .iter()
                    .map(|g| marked(chosen.contains(&g.id), g.label))
                    .collect(),
            )
        }
        ActionCall::ShowLocationInput => ActionView::card(
            "Where are you located?",
            vec![
                session
                    .onboarding
                    .location()
                    .unwrap_or("City, State")
                    .to_string(),
            ],
        ),
        ActionCall::ShowOnboardingSummary => {
            let onboarding = &session.onboarding;
            let labels: Vec<&str> = onboarding.goals().map(|g| g.label).collect();
            let goals = if labels.is_empty() {
                "Not selected".to_string()
            } else {
                labels.join(", ")
            };
            let lines = vec![
                format!("Trade: {}", onboarding.trade().map_or("Not selected", |t| t.name)),
                format!(
                    "Experience: {}",
                    onboarding.experience().map_or("Not selected", |e| e.label)
                ),
                format!("Goals: {goals}"),
                format!("Location: {}", onboarding.location().unwrap_or("Not provided")),
            ];
            ActionView::card("Your Profile Summary", lines)
        }
        ActionCall::SetTrade { trade_id } => match find_trade(trade_id) {
            Some(trade) => ActionView::card(format!("Trade: {}", trade.name), vec![]),
            None => ActionView::card("Invalid trade ID", vec![]),
        },
        ActionCall::SetExperience { level_id } => {
            match find_experience(level_id) {
                Some(level) => ActionView::card(format!("Experience: {}", level.label), vec![]),
                None => ActionView::card("Invalid experience level", vec![]),
            }
        }
        ActionCall::SetLocation { location } => {
            ActionView::card(format!("Location: {location}"), vec![])
        }
        ActionCall::ToggleGoal { goal_id } => match find_goal(goal_id) {
            Some(goal) => {
                let selected = session.onboarding.goals().any(|g| g.id == goal.id);
                let state = if selected { "selected" } else { "removed" };
                ActionView::card(format!("Goal {state}: {}", goal.label), vec![])
            }
            None => ActionView::card("Invalid goal ID", vec![]),
        },
        ActionCall::IncrementCounter { amount } => ActionView::card(
            format!("Counter incremented by {amount}"),
            vec![format!("New value: {}", session.playground.counter)],
        ),
        ActionCall::EnhanceText { improved_text } => {
            ActionView::card("Enhanced Text", vec![improved_text.clone()])
        }
        ActionCall::UpdateCompanyName { company_name } => {
            ActionView::card("Company Name", vec![company_name.clone()])
        }
        ActionCall::UpdateVision { vision } => {
            ActionView::card("Vision", vec![vision.clone()])
        }
        ActionCall::UpdateGoals { goals } => list_card(DocumentList::Goals, goals),
        ActionCall::UpdateInitiatives { initiatives } => {
            list_card(DocumentList::Initiatives, initiatives)
        }
        ActionCall::UpdateMetrics { metrics } => list_card(DocumentList::Metrics, metrics),
        ActionCall::FillEntireDocument(contents) => {
            let mut lines = vec![format!("Vision: {}", contents.vision)];
            for (list, rows) in [
                (DocumentList::Goals, &contents.goals),
                (DocumentList::Initiatives, &contents.initiatives),
                (DocumentList::Metrics, &contents.metrics),
            ] {
                lines.push(format!("{}:", list.heading()));
                lines.extend(rows.iter().map(|row| format!("- {row}")));
            }
            ActionView::card(contents.company_name.clone(), lines)
        }
        ActionCall::EnhanceAllFields(patch) | ActionCall::AutoFillFromDescription(patch) => {
            bulk_preview(patch)
        }
        ActionCall::SuggestFieldContent {
            field_name,
            suggestion,
        } => match field_name.parse::<ApplicationField>() {
            Ok(field) => ActionView::card(
                format!("Suggestion for {}:", field.label()),
                vec![suggestion.clone()],
            ),
            Err(_) => ActionView::card(format!("Unknown field: {field_name}"), vec![]),
        },
        ActionCall::ResetForm => {
            ActionView::card("Form Reset", vec!["All fields have been cleared.".to_string()])
        }
        ActionCall::ExplainMetric { metric_name } => match metric_name.parse::<MetricId>() {
            Ok(metric) => {
                let explanation = metric.explanation();
                let mut lines = vec![explanation.explanation.to_string()];
                lines.extend(explanation.suggestions.iter().map(|s| format!("- {s}")));
                ActionView::card(explanation.title, lines)
            }
            Err(_) => ActionView::card(
                metric_name.clone(),
                vec!["Select a metric to see detailed explanation.".to_string()],
            ),
        },
        ActionCall::AnswerDataQuestion {
            question,
            answer,
            chart_type,
        } => {
            let mut lines = vec![format!("You asked: \"{question}\""), answer.clone()];
            if let Some(chart) = chart_type.as_deref().filter(|chart| !chart.is_empty()) {
                lines.push(format!("Recommended visualization: {chart} chart"));
            }
            ActionView::card("Data Insight", lines)
        }
        ActionCall::DetectAnomaly {
            anomaly,
            severity,
            recommendation,
        } => ActionView::card(
            format!(
                "Anomaly Detected ({} severity)",
                Severity::parse_lenient(severity)
            ),
            vec![anomaly.clone(), format!("Recommendation: {recommendation}")],
        ),
        ActionCall::GenerateReport { report_type } => {
            let report = if report_type.is_empty() {
                "Report"
            } else {
                report_type.as_str()
            };
            let mut lines = vec![REPORT_HEADING.to_string(), "Key Wins:".to_string()];
            lines.extend(REPORT_WINS.iter().map(|win| format!("- {win}")));
            lines.push("Areas of Concern:".to_string());
            lines.extend(REPORT_CONCERNS.iter().map(|concern| format!("- {concern}")));
            ActionView::card(format!("{report} Generated"), lines)
        }
        ActionCall::CompareOptions(comparison) => {
            let mut header = vec!["Attribute".to_string()];
            header.extend(comparison.items.iter().map(|item| item.name.clone()));
            let mut lines = vec![header.join(" | ")];
            for attribute in &comparison.attributes {
                let mut row = vec![attribute.clone()];
                row.extend(comparison.items.iter().map(|item| item.cell(attribute)));
                lines.push(row.join(" | "));
            }
            if let Some(winner) = non_empty(comparison.winner.as_deref()) {
                lines.push(format!("Recommended: {winner}"));
            }
            ActionView::card(comparison.title.clone(), lines)
        }
        ActionCall::ListProsAndCons(list) => {
            let mut lines = vec!["Pros".to_string()];
            lines.extend(list.pros.iter().map(|pro| format!("+ {pro}")));
            lines.push("Cons".to_string());
            lines.extend(list.cons.iter().map(|con| format!("- {con}")));
            ActionView::card(list.title.clone(), lines)
        }
        ActionCall::MakeRecommendation(advice) => {
            let confidence = non_empty(Some(advice.confidence.as_str())).unwrap_or("medium");
            let mut lines = vec![
                advice.question.clone(),
                advice.recommendation.clone(),
                advice.reasoning.clone(),
                format!("{confidence} confidence"),
            ];
            if !advice.alternatives.is_empty() {
                lines.push(format!("Also consider: {}", advice.alternatives.join(", ")));
            }
            ActionView::card("Recommendation", lines)
        }
        ActionCall::CreateDecisionMatrix(matrix) => {
            let mut header = vec!["Criteria".to_string()];
            header.extend(matrix.options.iter().cloned());
            let mut lines = vec![header.join(" | ")];
            for criterion in &matrix.criteria {
                let mut row = vec![criterion.clone()];
                row.extend(
                    matrix
                        .options
                        .iter()
                        .map(|option| format!("{}/10", score(&matrix.scores, option, criterion))),
                );
                lines.push(row.join(" | "));
            }
            let best = matrix.criteria.len() * 10;
            let mut totals = vec!["Total Score".to_string()];
            totals.extend(matrix.options.iter().map(|option| {
                format!("{}/{best}", total(&matrix.scores, option, &matrix.criteria))
            }));
            lines.push(totals.join(" | "));
            if let Some(winner) = non_empty(matrix.winner.as_deref()) {
                lines.push(format!("Winner: {winner} (highest total score)"));
            }
            ActionView::card(matrix.title.clone(), lines)
        }
    }
}

fn marked(selected: bool, text: &str) -> String {
    if selected {
        format!("[x] {text}")
    } else {
        format!("[ ] {text}")
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

fn list_card(list: DocumentList, rows: &[String]) -> ActionView {
    ActionView::card(
        list.heading(),
        rows.iter().map(|row| format!("- {row}")).collect(),
    )
}

fn bulk_preview(patch: &ApplicationPatch) -> ActionView {
    let lines: Vec<String> = patch
        .entries()
        .into_iter()
        .map(|(field, value)| format!("{}: {value}", field.label()))
        .collect();
    if lines.is_empty() {
        ActionView::card("Bulk Enhancement Preview", vec!["No changes to preview".to_string()])
    } else {
        ActionView::card("Bulk Enhancement Preview", lines)
    }
}
