use super::profile::ProfileField;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    PersonalInfo,
    SkillsExperience,
    Goals,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 4] = [
        Self::PersonalInfo,
        Self::SkillsExperience,
        Self::Goals,
        Self::Review,
    ];

    pub const TOTAL: u8 = 4;

    /// One-based step number.
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::SkillsExperience => 2,
            Self::Goals => 3,
            Self::Review => 4,
        }
    }

    /// Any integer lands on a real step.
    pub fn clamped(n: i64) -> Self {
        match n {
            i64::MIN..=1 => Self::PersonalInfo,
            2 => Self::SkillsExperience,
            3 => Self::Goals,
            _ => Self::Review,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::SkillsExperience => "Skills & Experience",
            Self::Goals => "Goals",
            Self::Review => "Review",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Basic contact information",
            Self::SkillsExperience => "Your trade background",
            Self::Goals => "What you're looking for",
            Self::Review => "Confirm your profile",
        }
    }

    /// Fields edited on this step. The review step edits none.
    pub fn fields(self) -> &'static [ProfileField] {
        match self {
            Self::PersonalInfo => &[
                ProfileField::FullName,
                ProfileField::Email,
                ProfileField::Phone,
                ProfileField::Location,
            ],
            Self::SkillsExperience => &[
                ProfileField::Trade,
                ProfileField::YearsExperience,
                ProfileField::Skills,
                ProfileField::Certifications,
            ],
            Self::Goals => &[
                ProfileField::CareerGoals,
                ProfileField::PreferredWorkType,
                ProfileField::Availability,
            ],
            Self::Review => &[],
        }
    }

    /// The step whose form holds `field`.
    pub fn of_field(field: ProfileField) -> Self {
        Self::ALL
            .into_iter()
            .find(|step| step.fields().contains(&field))
            .unwrap_or(Self::PersonalInfo)
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => Some(Self::SkillsExperience),
            Self::SkillsExperience => Some(Self::Goals),
            Self::Goals => Some(Self::Review),
            Self::Review => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::PersonalInfo => None,
            Self::SkillsExperience => Some(Self::PersonalInfo),
            Self::Goals => Some(Self::SkillsExperience),
            Self::Review => Some(Self::Goals),
        }
    }

    pub fn is_first(self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}
