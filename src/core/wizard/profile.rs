use serde::{Deserialize, Serialize};

/// Every field of the skilled-trades profile, in form order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    FullName,
    Email,
    Phone,
    Location,
    Trade,
    YearsExperience,
    Skills,
    Certifications,
    CareerGoals,
    PreferredWorkType,
    Availability,
}

impl ProfileField {
    pub const ALL: [Self; 11] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Location,
        Self::Trade,
        Self::YearsExperience,
        Self::Skills,
        Self::Certifications,
        Self::CareerGoals,
        Self::PreferredWorkType,
        Self::Availability,
    ];

    /// Fields that gate submission.
    pub const REQUIRED: [Self; 6] = [
        Self::FullName,
        Self::Email,
        Self::Trade,
        Self::YearsExperience,
        Self::Skills,
        Self::CareerGoals,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Location => "Location",
            Self::Trade => "Primary Trade",
            Self::YearsExperience => "Years of Experience",
            Self::Skills => "Key Skills",
            Self::Certifications => "Certifications & Licenses",
            Self::CareerGoals => "Career Goals",
            Self::PreferredWorkType => "Preferred Work Type",
            Self::Availability => "Availability",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "John Smith",
            Self::Email => "john@example.com",
            Self::Phone => "(555) 123-4567",
            Self::Location => "Austin, TX",
            Self::Trade => "e.g., Plumbing, Electrical, HVAC",
            Self::YearsExperience => "e.g., 5 years",
            Self::Skills => "List your key skills and specializations...",
            Self::Certifications => "List any certifications, licenses, or training...",
            Self::CareerGoals => {
                "Describe your career aspirations and what you're looking for..."
            }
            Self::PreferredWorkType => "e.g., Commercial, Residential",
            Self::Availability => "e.g., Full-time, Immediately",
        }
    }

    /// Free-text fields that are edited as multi-line text and offer enhance.
    pub fn is_long(self) -> bool {
        matches!(self, Self::Skills | Self::Certifications | Self::CareerGoals)
    }

    /// Instruction handed to the enhance relay for long fields.
    pub fn enhance_context(self) -> Option<&'static str> {
        match self {
            Self::Skills => Some(
                "This lists skills relevant to the skilled trades industry (construction, electrical, plumbing, HVAC, welding, carpentry, etc.). Format as a clear list of skills. Include both hard skills (tools, techniques) and soft skills (teamwork, problem-solving). Be specific about proficiency levels where possible.",
            ),
            Self::Certifications => Some(
                "This describes any formal or informal training related to skilled trades. Include certifications, courses, apprenticeships, vocational training, or self-taught skills. If none, suggest how to phrase interest in obtaining training.",
            ),
            Self::CareerGoals => Some(
                "This describes the person's career aspirations in the skilled trades. Should be specific, ambitious but realistic, and show motivation. Include short-term (1-2 years) and long-term (5+ years) goals if possible. Mention desire for certifications, advancement, or specialization.",
            ),
            _ => None,
        }
    }
}

/// The shared profile record. Every field is always present, `""` when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub trade: String,
    pub years_experience: String,
    pub skills: String,
    pub certifications: String,
    pub career_goals: String,
    pub preferred_work_type: String,
    pub availability: String,
}

impl ProfileRecord {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Location => &self.location,
            ProfileField::Trade => &self.trade,
            ProfileField::YearsExperience => &self.years_experience,
            ProfileField::Skills => &self.skills,
            ProfileField::Certifications => &self.certifications,
            ProfileField::CareerGoals => &self.career_goals,
            ProfileField::PreferredWorkType => &self.preferred_work_type,
            ProfileField::Availability => &self.availability,
        }
    }

    fn slot(&mut self, field: ProfileField) -> &mut String {
        match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::Trade => &mut self.trade,
            ProfileField::YearsExperience => &mut self.years_experience,
            ProfileField::Skills => &mut self.skills,
            ProfileField::Certifications => &mut self.certifications,
            ProfileField::CareerGoals => &mut self.career_goals,
            ProfileField::PreferredWorkType => &mut self.preferred_work_type,
            ProfileField::Availability => &mut self.availability,
        }
    }

    /// Replace one field, returning the value it held before.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) -> String {
        std::mem::replace(self.slot(field), value.into())
    }

    pub fn is_filled(&self, field: ProfileField) -> bool {
        !self.get(field).trim().is_empty()
    }

    pub fn filled_count(&self) -> usize {
        ProfileField::ALL
            .iter()
            .filter(|&&field| self.is_filled(field))
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &str)> {
        ProfileField::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}

/// Partial update: `None` leaves a field alone, `Some("")` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_work_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl ProfilePatch {
    pub fn single(field: ProfileField, value: impl Into<String>) -> Self {
        let mut patch = Self::default();
        *patch.slot(field) = Some(value.into());
        patch
    }

    fn slot(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Location => &mut self.location,
            ProfileField::Trade => &mut self.trade,
            ProfileField::YearsExperience => &mut self.years_experience,
            ProfileField::Skills => &mut self.skills,
            ProfileField::Certifications => &mut self.certifications,
            ProfileField::CareerGoals => &mut self.career_goals,
            ProfileField::PreferredWorkType => &mut self.preferred_work_type,
            ProfileField::Availability => &mut self.availability,
        }
    }

    /// Drop entries whose value is empty.
    pub fn without_empty(mut self) -> Self {
        for field in ProfileField::ALL {
            let slot = self.slot(field);
            if slot.as_deref().is_some_and(str::is_empty) {
                *slot = None;
            }
        }
        self
    }

    pub fn into_entries(mut self) -> Vec<(ProfileField, String)> {
        ProfileField::ALL
            .into_iter()
            .filter_map(|field| self.slot(field).take().map(|value| (field, value)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
