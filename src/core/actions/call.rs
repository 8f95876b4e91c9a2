use crate::core::application::ApplicationPatch;
use crate::core::compare::{ComparisonItem, ScoreTable};
use crate::core::wizard::{ProfileField, ProfilePatch};
use crate::error::ActionError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::coercion::coerce_arguments;
use super::surfaces::{Surface, find_action};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnhanceFieldArgs {
    field_name: String,
    enhanced_value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoToStepArgs {
    step_number: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradeArgs {
    trade_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExperienceArgs {
    level_id: String,
}

#[derive(Debug, Deserialize)]
struct LocationArgs {
    location: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalArgs {
    goal_id: String,
}

#[derive(Debug, Deserialize)]
struct CounterArgs {
    amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextArgs {
    improved_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompanyNameArgs {
    company_name: String,
}

#[derive(Debug, Deserialize)]
struct VisionArgs {
    vision: String,
}

#[derive(Debug, Deserialize)]
struct GoalsArgs {
    goals: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct InitiativesArgs {
    initiatives: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct MetricsArgs {
    metrics: Vec<String>,
}

/// Full contents for the business document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContents {
    pub company_name: String,
    pub vision: String,
    pub goals: Vec<String>,
    pub initiatives: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionArgs {
    field_name: String,
    suggestion: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricArgs {
    metric_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionArgs {
    question: String,
    answer: String,
    #[serde(default)]
    chart_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnomalyArgs {
    anomaly: String,
    severity: String,
    recommendation: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportArgs {
    report_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comparison {
    pub title: String,
    pub items: Vec<ComparisonItem>,
    pub attributes: Vec<String>,
    #[serde(default)]
    pub winner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProsAndCons {
    pub title: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Recommendation {
    pub question: String,
    pub recommendation: String,
    pub reasoning: String,
    pub confidence: String,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionMatrix {
    pub title: String,
    pub options: Vec<String>,
    pub criteria: Vec<String>,
    pub scores: ScoreTable,
    #[serde(default)]
    pub winner: Option<String>,
}

/// A decoded invocation: one variant per declared action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionCall {
    AutoFillProfile(ProfilePatch),
    EnhanceField {
        field_name: String,
        enhanced_value: String,
    },
    GoToStep {
        step_number: f64,
    },
    CheckMissingFields,
    ShowTradeSelection,
    ShowExperienceSelection,
    ShowGoalsSelection,
    ShowLocationInput,
    ShowOnboardingSummary,
    SetTrade {
        trade_id: String,
    },
    SetExperience {
        level_id: String,
    },
    SetLocation {
        location: String,
    },
    ToggleGoal {
        goal_id: String,
    },
    IncrementCounter {
        amount: f64,
    },
    EnhanceText {
        improved_text: String,
    },
    UpdateCompanyName {
        company_name: String,
    },
    UpdateVision {
        vision: String,
    },
    UpdateGoals {
        goals: Vec<String>,
    },
    UpdateInitiatives {
        initiatives: Vec<String>,
    },
    UpdateMetrics {
        metrics: Vec<String>,
    },
    FillEntireDocument(DocumentContents),
    EnhanceAllFields(ApplicationPatch),
    SuggestFieldContent {
        field_name: String,
        suggestion: String,
    },
    AutoFillFromDescription(ApplicationPatch),
    ResetForm,
    ExplainMetric {
        metric_name: String,
    },
    AnswerDataQuestion {
        question: String,
        answer: String,
        chart_type: Option<String>,
    },
    DetectAnomaly {
        anomaly: String,
        severity: String,
        recommendation: String,
    },
    GenerateReport {
        report_type: String,
    },
    CompareOptions(Comparison),
    ListProsAndCons(ProsAndCons),
    MakeRecommendation(Recommendation),
    CreateDecisionMatrix(DecisionMatrix),
}

fn decode<T: DeserializeOwned>(name: &str, args: Value) -> Result<T, ActionError> {
    serde_json::from_value(args).map_err(|error| ActionError::InvalidArguments {
        name: name.to_string(),
        message: error.to_string(),
    })
}

impl ActionCall {
    /// Resolve `name` against the declarations and decode `arguments`.
    ///
    /// String-typed values are coerced to the declared parameter type first.
    /// Missing required parameters or wrong types are an error; unknown
    /// catalog ids are not, and are reported by the handler instead.
    pub fn parse(name: &str, arguments: &Value) -> Result<Self, ActionError> {
        let (_, spec) = find_action(name).ok_or_else(|| ActionError::Unknown {
            name: name.to_string(),
        })?;
        let args = coerce_arguments(arguments, &spec);

        let call = match spec.name {
            "autoFillProfile" => {
                // Unknown keys are ignored here, unlike the field PATCH route.
                let patch = match args {
                    Value::Object(mut map) => {
                        map.retain(|key, value| {
                            value.is_string()
                                && key.parse::<ProfileField>().is_ok()
                        });
                        decode::<ProfilePatch>(name, Value::Object(map))?
                    }
                    other => decode::<ProfilePatch>(name, other)?,
                };
                Self::AutoFillProfile(patch)
            }
            "enhanceField" => {
                let EnhanceFieldArgs {
                    field_name,
                    enhanced_value,
                } = decode(name, args)?;
                Self::EnhanceField {
                    field_name,
                    enhanced_value,
                }
            }
            "goToStep" => {
                let GoToStepArgs { step_number } = decode(name, args)?;
                Self::GoToStep { step_number }
            }
            "checkMissingFields" => Self::CheckMissingFields,
            "showTradeSelection" => Self::ShowTradeSelection,
            "showExperienceSelection" => Self::ShowExperienceSelection,
            "showGoalsSelection" => Self::ShowGoalsSelection,
            "showLocationInput" => Self::ShowLocationInput,
            "showOnboardingSummary" => Self::ShowOnboardingSummary,
            "setTrade" => {
                let TradeArgs { trade_id } = decode(name, args)?;
                Self::SetTrade { trade_id }
            }
            "setExperience" => {
                let ExperienceArgs { level_id } = decode(name, args)?;
                Self::SetExperience { level_id }
            }
            "setLocation" => {
                let LocationArgs { location } = decode(name, args)?;
                Self::SetLocation { location }
            }
            "toggleGoal" => {
                let GoalArgs { goal_id } = decode(name, args)?;
                Self::ToggleGoal { goal_id }
            }
            "incrementCounter" => {
                let CounterArgs { amount } = decode(name, args)?;
                Self::IncrementCounter { amount }
            }
            "enhanceText" => {
                let TextArgs { improved_text } = decode(name, args)?;
                Self::EnhanceText { improved_text }
            }
            "updateCompanyName" => {
                let CompanyNameArgs { company_name } = decode(name, args)?;
                Self::UpdateCompanyName { company_name }
            }
            "updateVision" => {
                let VisionArgs { vision } = decode(name, args)?;
                Self::UpdateVision { vision }
            }
            "updateGoals" => {
                let GoalsArgs { goals } = decode(name, args)?;
                Self::UpdateGoals { goals }
            }
            "updateInitiatives" => {
                let InitiativesArgs { initiatives } = decode(name, args)?;
                Self::UpdateInitiatives { initiatives }
            }
            "updateMetrics" => {
                let MetricsArgs { metrics } = decode(name, args)?;
                Self::UpdateMetrics { metrics }
            }
            "fillEntireDocument" => Self::FillEntireDocument(decode(name, args)?),
            "enhanceAllFields" => Self::EnhanceAllFields(decode(name, args)?),
            "suggestFieldContent" => {
                let SuggestionArgs {
                    field_name,
                    suggestion,
                } = decode(name, args)?;
                Self::SuggestFieldContent {
                    field_name,
                    suggestion,
                }
            }
            "autoFillFromDescription" => Self::AutoFillFromDescription(decode(name, args)?),
            "resetForm" => Self::ResetForm,
            "explainMetric" => {
                let MetricArgs { metric_name } = decode(name, args)?;
                Self::ExplainMetric { metric_name }
            }
            "answerDataQuestion" => {
                let QuestionArgs {
                    question,
                    answer,
                    chart_type,
                } = decode(name, args)?;
                Self::AnswerDataQuestion {
                    question,
                    answer,
                    chart_type,
                }
            }
            "detectAnomaly" => {
                let AnomalyArgs {
                    anomaly,
                    severity,
                    recommendation,
                } = decode(name, args)?;
                Self::DetectAnomaly {
                    anomaly,
                    severity,
                    recommendation,
                }
            }
            "generateReport" => {
                let ReportArgs { report_type } = decode(name, args)?;
                Self::GenerateReport { report_type }
            }
            "compareOptions" => Self::CompareOptions(decode(name, args)?),
            "listProsAndCons" => Self::ListProsAndCons(decode(name, args)?),
            "makeRecommendation" => Self::MakeRecommendation(decode(name, args)?),
            "createDecisionMatrix" => Self::CreateDecisionMatrix(decode(name, args)?),
            other => {
                return Err(ActionError::Unknown {
                    name: other.to_string(),
                });
            }
        };
        Ok(call)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AutoFillProfile(_) => "autoFillProfile",
            Self::EnhanceField { .. } => "enhanceField",
            Self::GoToStep { .. } => "goToStep",
            Self::CheckMissingFields => "checkMissingFields",
            Self::ShowTradeSelection => "showTradeSelection",
            Self::ShowExperienceSelection => "showExperienceSelection",
            Self::ShowGoalsSelection => "showGoalsSelection",
            Self::ShowLocationInput => "showLocationInput",
            Self::ShowOnboardingSummary => "showOnboardingSummary",
            Self::SetTrade { .. } => "setTrade",
            Self::SetExperience { .. } => "setExperience",
            Self::SetLocation { .. } => "setLocation",
            Self::ToggleGoal { .. } => "toggleGoal",
            Self::IncrementCounter { .. } => "incrementCounter",
            Self::EnhanceText { .. } => "enhanceText",
            Self::UpdateCompanyName { .. } => "updateCompanyName",
            Self::UpdateVision { .. } => "updateVision",
            Self::UpdateGoals { .. } => "updateGoals",
            Self::UpdateInitiatives { .. } => "updateInitiatives",
            Self::UpdateMetrics { .. } => "updateMetrics",
            Self::FillEntireDocument(_) => "fillEntireDocument",
            Self::EnhanceAllFields(_) => "enhanceAllFields",
            Self::SuggestFieldContent { .. } => "suggestFieldContent",
            Self::AutoFillFromDescription(_) => "autoFillFromDescription",
            Self::ResetForm => "resetForm",
            Self::ExplainMetric { .. } => "explainMetric",
            Self::AnswerDataQuestion { .. } => "answerDataQuestion",
            Self::DetectAnomaly { .. } => "detectAnomaly",
            Self::GenerateReport { .. } => "generateReport",
            Self::CompareOptions(_) => "compareOptions",
            Self::ListProsAndCons(_) => "listProsAndCons",
            Self::MakeRecommendation(_) => "makeRecommendation",
            Self::CreateDecisionMatrix(_) => "createDecisionMatrix",
        }
    }

    pub fn surface(&self) -> Surface {
        match self {
            Self::AutoFillProfile(_)
            | Self::EnhanceField { .. }
            | Self::GoToStep { .. }
            | Self::CheckMissingFields => Surface::Wizard,
            Self::ShowTradeSelection
            | Self::ShowExperienceSelection
            | Self::ShowGoalsSelection
            | Self::ShowLocationInput
            | Self::ShowOnboardingSummary
            | Self::SetTrade { .. }
            | Self::SetExperience { .. }
            | Self::SetLocation { .. }
            | Self::ToggleGoal { .. } => Surface::Onboarding,
            Self::IncrementCounter { .. } | Self::EnhanceText { .. } => Surface::Playground,
            Self::UpdateCompanyName { .. }
            | Self::UpdateVision { .. }
            | Self::UpdateGoals { .. }
            | Self::UpdateInitiatives { .. }
            | Self::UpdateMetrics { .. }
            | Self::FillEntireDocument(_) => Surface::Document,
            Self::EnhanceAllFields(_)
            | Self::SuggestFieldContent { .. }
            | Self::AutoFillFromDescription(_)
            | Self::ResetForm => Surface::Application,
            Self::ExplainMetric { .. }
            | Self::AnswerDataQuestion { .. }
            | Self::DetectAnomaly { .. }
            | Self::GenerateReport { .. } => Surface::Dashboard,
            Self::CompareOptions(_)
            | Self::ListProsAndCons(_)
            | Self::MakeRecommendation(_)
            | Self::CreateDecisionMatrix(_) => Surface::Compare,
        }
    }
}
