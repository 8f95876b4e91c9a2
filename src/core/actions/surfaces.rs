use serde::{Deserialize, Serialize};

use super::spec::{ActionParameter, ActionSpec, ParamType};

/// A page-like context that publishes its own set of actions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Surface {
    Wizard,
    Onboarding,
    Playground,
    Document,
    Application,
    Dashboard,
    Compare,
}

impl Surface {
    pub const ALL: [Self; 7] = [
        Self::Wizard,
        Self::Onboarding,
        Self::Playground,
        Self::Document,
        Self::Application,
        Self::Dashboard,
        Self::Compare,
    ];

    /// Description attached to this surface's readable snapshot. The
    /// comparison tools publish no state.
    pub fn readable_description(self) -> Option<&'static str> {
        let description = match self {
            Self::Wizard => {
                "Current wizard form data for skilled trades profile. This includes personal info, skills/experience, and career goals."
            }
            Self::Onboarding => {
                "Onboarding answers collected so far: selected trade, experience level, goals and location."
            }
            Self::Playground => "The current counter value and the user message input.",
            Self::Document => "The current business document form data",
            Self::Application => {
                "Current job application form data with job title, skills, experience, and career goals"
            }
            Self::Dashboard => "Current SaaS dashboard metrics and data",
            Self::Compare => return None,
        };
        Some(description)
    }

    pub fn actions(self) -> Vec<ActionSpec> {
        match self {
            Self::Wizard => wizard_actions(),
            Self::Onboarding => onboarding_actions(),
            Self::Playground => playground_actions(),
            Self::Document => document_actions(),
            Self::Application => application_actions(),
            Self::Dashboard => dashboard_actions(),
            Self::Compare => compare_actions(),
        }
    }
}

/// Look an action up across every surface.
pub fn find_action(name: &str) -> Option<(Surface, ActionSpec)> {
    Surface::ALL.into_iter().find_map(|surface| {
        surface
            .actions()
            .into_iter()
            .find(|spec| spec.name == name)
            .map(|spec| (surface, spec))
    })
}

fn wizard_actions() -> Vec<ActionSpec> {
    use ParamType::{Number, String};

    vec![
        ActionSpec {
            name: "autoFillProfile",
            description: "Fill out the skilled trades profile form based on user description. Extract as many fields as possible from what the user tells you about themselves.",
            parameters: vec![
                ActionParameter::optional("fullName", String, "Full name"),
                ActionParameter::optional("email", String, "Email address"),
                ActionParameter::optional("phone", String, "Phone number"),
                ActionParameter::optional("location", String, "City, State"),
                ActionParameter::optional(
                    "trade",
                    String,
                    "Primary trade (e.g., Plumbing, Electrical, Carpentry, HVAC)",
                ),
                ActionParameter::optional("yearsExperience", String, "Years of experience"),
                ActionParameter::optional("skills", String, "Key skills and specializations"),
                ActionParameter::optional("certifications", String, "Certifications and licenses"),
                ActionParameter::optional("careerGoals", String, "Career goals and aspirations"),
                ActionParameter::optional(
                    "preferredWorkType",
                    String,
                    "Preferred work type (residential, commercial, industrial)",
                ),
                ActionParameter::optional(
                    "availability",
                    String,
                    "Availability (full-time, part-time, contract)",
                ),
            ],
        },
        ActionSpec {
            name: "enhanceField",
            description: "Enhance and improve a specific form field to be more professional and compelling. Use this when the user asks to improve or enhance a particular field.",
            parameters: vec![
                ActionParameter::required(
                    "fieldName",
                    String,
                    "The field to enhance (fullName, email, phone, location, trade, yearsExperience, skills, certifications, careerGoals, preferredWorkType, availability)",
                ),
                ActionParameter::required(
                    "enhancedValue",
                    String,
                    "The improved, professional version of the field content",
                ),
            ],
        },
        ActionSpec {
            name: "goToStep",
            description: "Navigate to a specific wizard step. Step 1 is Personal Info, Step 2 is Skills & Experience, Step 3 is Goals, Step 4 is Review.",
            parameters: vec![ActionParameter::required(
                "stepNumber",
                Number,
                "The step number to navigate to (1-4)",
            )],
        },
        ActionSpec {
            name: "checkMissingFields",
            description: "Check which required fields are still empty in the profile",
            parameters: vec![],
        },
    ]
}

fn onboarding_actions() -> Vec<ActionSpec> {
    use ParamType::String;

    vec![
        ActionSpec {
            name: "showTradeSelection",
            description: "Display trade selection cards for the user to choose their profession. Use this at the start of onboarding or when the user wants to select/change their trade.",
            parameters: vec![],
        },
        ActionSpec {
            name: "showExperienceSelection",
            description: "Display experience level options for the user to indicate their skill level. Use this after trade selection.",
            parameters: vec![],
        },
        ActionSpec {
            name: "showGoalsSelection",
            description: "Display goals selection cards for the user to pick what they want to achieve. Use this after experience selection.",
            parameters: vec![],
        },
        ActionSpec {
            name: "showLocationInput",
            description: "Display location input field for the user to enter their city/region. Use this after goals selection.",
            parameters: vec![],
        },
        ActionSpec {
            name: "showOnboardingSummary",
            description: "Display the complete onboarding summary with all collected information. Use this when all fields are filled.",
            parameters: vec![],
        },
        ActionSpec {
            name: "setTrade",
            description: "Set the user trade directly from conversation. Use when user mentions their trade.",
            parameters: vec![ActionParameter::required(
                "tradeId",
                String,
                "Trade ID: electrical, plumbing, hvac, carpentry, welding, pipefitting, automotive, landscaping",
            )],
        },
        ActionSpec {
            name: "setExperience",
            description: "Set experience level directly from conversation.",
            parameters: vec![ActionParameter::required(
                "levelId",
                String,
                "Experience ID: new, apprentice, journeyman, master",
            )],
        },
        ActionSpec {
            name: "setLocation",
            description: "Set location directly from conversation.",
            parameters: vec![ActionParameter::required("location", String, "City, State")],
        },
        ActionSpec {
            name: "toggleGoal",
            description: "Select or deselect one of the user's goals. Calling it again for the same goal removes it.",
            parameters: vec![ActionParameter::required(
                "goalId",
                String,
                "Goal ID: find-job, higher-pay, learn-skills, get-certified, career-change, start-business, relocate, network",
            )],
        },
    ]
}

fn playground_actions() -> Vec<ActionSpec> {
    vec![
        ActionSpec {
            name: "incrementCounter",
            description: "Increment the counter by a specified amount",
            parameters: vec![ActionParameter::required(
                "amount",
                ParamType::Number,
                "The amount to increment by",
            )],
        },
        ActionSpec {
            name: "enhanceText",
            description: "Enhance and improve the user message text to be more professional",
            parameters: vec![ActionParameter::required(
                "improvedText",
                ParamType::String,
                "The improved version of the text",
            )],
        },
    ]
}

fn document_actions() -> Vec<ActionSpec> {
    use ParamType::{String, StringArray};

    vec![
        ActionSpec {
            name: "updateCompanyName",
            description: "Update the company name field",
            parameters: vec![ActionParameter::required(
                "companyName",
                String,
                "The company name",
            )],
        },
        ActionSpec {
            name: "updateVision",
            description: "Update the company vision statement",
            parameters: vec![ActionParameter::required(
                "vision",
                String,
                "The vision statement",
            )],
        },
        ActionSpec {
            name: "updateGoals",
            description: "Update the strategic goals list",
            parameters: vec![ActionParameter::required(
                "goals",
                StringArray,
                "Array of strategic goals",
            )],
        },
        ActionSpec {
            name: "updateInitiatives",
            description: "Update the key initiatives list",
            parameters: vec![ActionParameter::required(
                "initiatives",
                StringArray,
                "Array of key initiatives",
            )],
        },
        ActionSpec {
            name: "updateMetrics",
            description: "Update the success metrics list",
            parameters: vec![ActionParameter::required(
                "metrics",
                StringArray,
                "Array of success metrics",
            )],
        },
        ActionSpec {
            name: "fillEntireDocument",
            description: "Fill all fields of the business document at once based on company context",
            parameters: vec![
                ActionParameter::required("companyName", String, "The company name"),
                ActionParameter::required("vision", String, "The vision statement"),
                ActionParameter::required("goals", StringArray, "Array of 3-5 strategic goals"),
                ActionParameter::required(
                    "initiatives",
                    StringArray,
                    "Array of 3-5 key initiatives",
                ),
                ActionParameter::required(
                    "metrics",
                    StringArray,
                    "Array of 3-5 success metrics",
                ),
            ],
        },
    ]
}

fn application_actions() -> Vec<ActionSpec> {
    use ParamType::String;

    vec![
        ActionSpec {
            name: "enhanceAllFields",
            description: "Enhance ALL form fields at once to be more professional. Use when user says \"make everything better\" or \"enhance all fields\".",
            parameters: vec![
                ActionParameter::optional("jobTitle", String, "Enhanced job title"),
                ActionParameter::optional("skills", String, "Enhanced skills description"),
                ActionParameter::optional(
                    "experience",
                    String,
                    "Enhanced experience description",
                ),
                ActionParameter::optional("goals", String, "Enhanced career goals"),
            ],
        },
        ActionSpec {
            name: "suggestFieldContent",
            description: "Suggest what to write for a specific field. Use when user asks \"what should I write for...\" or \"help me with...\"",
            parameters: vec![
                ActionParameter::required(
                    "fieldName",
                    String,
                    "Field name: jobTitle, skills, experience, or goals",
                ),
                ActionParameter::required(
                    "suggestion",
                    String,
                    "The suggested content for the field",
                ),
            ],
        },
        ActionSpec {
            name: "autoFillFromDescription",
            description: "Fill the form based on a natural language description of the user. Use when user describes themselves.",
            parameters: vec![
                ActionParameter::optional("jobTitle", String, "Job title"),
                ActionParameter::optional("skills", String, "Skills"),
                ActionParameter::optional("experience", String, "Experience"),
                ActionParameter::optional("goals", String, "Career goals"),
            ],
        },
        ActionSpec {
            name: "resetForm",
            description: "Clear all form fields. Use when user wants to start over.",
            parameters: vec![],
        },
    ]
}

fn dashboard_actions() -> Vec<ActionSpec> {
    use ParamType::String;

    vec![
        ActionSpec {
            name: "explainMetric",
            description: "Explain what a specific metric means and provide insights. Use when user asks about MRR, churn, conversion, users, etc.",
            parameters: vec![ActionParameter::required(
                "metricName",
                String,
                "The metric to explain: mrr, activeUsers, churnRate, conversionRate, avgTicketTime, nps",
            )],
        },
        ActionSpec {
            name: "answerDataQuestion",
            description: "Answer questions about the dashboard data. Use when user asks \"why did X happen\", \"what caused Y\", \"compare A to B\".",
            parameters: vec![
                ActionParameter::required("question", String, "The user question"),
                ActionParameter::required(
                    "answer",
                    String,
                    "The detailed answer based on the data",
                ),
                ActionParameter::optional(
                    "chartType",
                    String,
                    "Recommended chart type: line, bar, or pie",
                ),
            ],
        },
        ActionSpec {
            name: "detectAnomaly",
            description: "Detect and explain unusual patterns in the data. Use when user asks \"what's wrong\", \"any issues\", \"anomalies\".",
            parameters: vec![
                ActionParameter::required("anomaly", String, "Description of the anomaly detected"),
                ActionParameter::required("severity", String, "Severity level: low, medium, or high"),
                ActionParameter::required("recommendation", String, "What action to take"),
            ],
        },
        ActionSpec {
            name: "generateReport",
            description: "Generate a summary report of the dashboard data. Use when user asks for \"report\", \"summary\", \"executive brief\".",
            parameters: vec![ActionParameter::required(
                "reportType",
                String,
                "Type of report: Weekly Summary, Monthly Review, Executive Brief",
            )],
        },
    ]
}

fn compare_actions() -> Vec<ActionSpec> {
    use ParamType::{Object, ObjectArray, String, StringArray};

    vec![
        ActionSpec {
            name: "compareOptions",
            description: "Create a comparison table for two or more options. Use when user asks to compare things like \"React vs Vue\", \"AWS vs Azure\", etc. IMPORTANT: After calling this action, do NOT repeat the comparison data in text - the UI card already shows it. Just add a brief concluding sentence if needed.",
            parameters: vec![
                ActionParameter::required("title", String, "Title for the comparison"),
                ActionParameter::required(
                    "items",
                    ObjectArray,
                    "Array of items to compare, each with name and attributes object",
                ),
                ActionParameter::required(
                    "attributes",
                    StringArray,
                    "List of attribute names to compare",
                ),
                ActionParameter::optional("winner", String, "The recommended option (optional)"),
            ],
        },
        ActionSpec {
            name: "listProsAndCons",
            description: "Create a pros and cons list for a single option. Use when user asks \"what are the pros and cons of X\" or \"should I do X\". IMPORTANT: After calling this action, do NOT repeat the pros/cons in text - the UI card already shows them. Just add a brief summary or recommendation if needed.",
            parameters: vec![
                ActionParameter::required("title", String, "What we are evaluating"),
                ActionParameter::required("pros", StringArray, "List of advantages/pros"),
                ActionParameter::required("cons", StringArray, "List of disadvantages/cons"),
            ],
        },
        ActionSpec {
            name: "makeRecommendation",
            description: "Give a recommendation with reasoning. Use when user asks \"should I...\", \"what should I choose\", \"which is better for me\". IMPORTANT: After calling this action, do NOT repeat the recommendation in text - the UI card already shows it.",
            parameters: vec![
                ActionParameter::required("question", String, "The user question"),
                ActionParameter::required("recommendation", String, "The recommended choice"),
                ActionParameter::required("reasoning", String, "Why this is recommended"),
                ActionParameter::required(
                    "confidence",
                    String,
                    "Confidence level: high, medium, or low",
                ),
                ActionParameter::optional(
                    "alternatives",
                    StringArray,
                    "Other options to consider",
                ),
            ],
        },
        ActionSpec {
            name: "createDecisionMatrix",
            description: "Create a scored decision matrix. Use when user wants to evaluate options against multiple criteria with scores. IMPORTANT: After calling this action, do NOT repeat the scores or matrix in text - the UI card already shows it. Just add a brief conclusion if needed.",
            parameters: vec![
                ActionParameter::required("title", String, "Title for the decision matrix"),
                ActionParameter::required("options", StringArray, "Options to evaluate"),
                ActionParameter::required("criteria", StringArray, "Criteria to score against"),
                ActionParameter::required(
                    "scores",
                    Object,
                    "Scores object: { optionName: { criteriaName: score } }",
                ),
                ActionParameter::optional("winner", String, "The winning option"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::onboarding::catalog::{experience_ids, goal_ids, trade_ids};
    use std::collections::HashSet;

    #[test]
    fn action_names_are_unique_across_surfaces() {
        let mut seen = HashSet::new();
        for surface in Surface::ALL {
            for spec in surface.actions() {
                assert!(seen.insert(spec.name), "duplicate action {}", spec.name);
            }
        }
        assert_eq!(seen.len(), 33);
    }

    #[test]
    fn find_action_reports_owning_surface() {
        let (surface, spec) = find_action("toggleGoal").unwrap();
        assert_eq!(surface, Surface::Onboarding);
        assert_eq!(spec.parameters[0].name, "goalId");
        assert!(find_action("deleteEverything").is_none());
    }

    #[test]
    fn id_hints_match_catalogs() {
        let hint = |name: &str| find_action(name).unwrap().1.parameters[0].description;
        assert!(hint("setTrade").ends_with(&trade_ids()));
        assert!(hint("setExperience").ends_with(&experience_ids()));
        assert!(hint("toggleGoal").ends_with(&goal_ids()));
    }

    #[test]
    fn surface_parses_from_lowercase() {
        assert_eq!("playground".parse::<Surface>().unwrap(), Surface::Playground);
        assert_eq!("dashboard".parse::<Surface>().unwrap(), Surface::Dashboard);
        assert!("sidepanel".parse::<Surface>().is_err());
    }

    #[test]
    fn only_the_compare_tools_publish_no_readable() {
        for surface in Surface::ALL {
            assert_eq!(
                surface.readable_description().is_none(),
                surface == Surface::Compare,
                "{surface}"
            );
        }
    }

    #[test]
    fn list_parameters_are_declared_as_arrays() {
        let (_, spec) = find_action("fillEntireDocument").unwrap();
        let schema = spec.parameters_schema();
        assert_eq!(schema["properties"]["goals"]["type"], "array");
        assert_eq!(schema["properties"]["goals"]["items"]["type"], "string");
        assert_eq!(schema["required"].as_array().unwrap().len(), 5);

        let (_, spec) = find_action("createDecisionMatrix").unwrap();
        let schema = spec.parameters_schema();
        assert_eq!(schema["properties"]["scores"]["type"], "object");
    }
}
