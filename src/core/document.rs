//! Business planning document filled from the side-panel assistant.

use serde::{Deserialize, Serialize};

/// Blank rows a fresh document starts with in each list section.
const BLANK_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDocument {
    pub company_name: String,
    pub vision: String,
    pub goals: Vec<String>,
    pub initiatives: Vec<String>,
    pub metrics: Vec<String>,
}

impl Default for BusinessDocument {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            vision: String::new(),
            goals: vec![String::new(); BLANK_ROWS],
            initiatives: vec![String::new(); BLANK_ROWS],
            metrics: vec![String::new(); BLANK_ROWS],
        }
    }
}

/// One of the list sections of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DocumentList {
    #[strum(serialize = "strategic goals")]
    Goals,
    #[strum(serialize = "initiatives")]
    Initiatives,
    #[strum(serialize = "success metrics")]
    Metrics,
}

impl DocumentList {
    pub fn heading(self) -> &'static str {
        match self {
            Self::Goals => "Strategic Goals",
            Self::Initiatives => "Key Initiatives",
            Self::Metrics => "Success Metrics",
        }
    }
}

impl BusinessDocument {
    pub fn list(&self, list: DocumentList) -> &[String] {
        match list {
            DocumentList::Goals => &self.goals,
            DocumentList::Initiatives => &self.initiatives,
            DocumentList::Metrics => &self.metrics,
        }
    }

    /// Replace a whole list section. Returns the new row count.
    pub fn replace_list(&mut self, list: DocumentList, rows: Vec<String>) -> usize {
        let slot = match list {
            DocumentList::Goals => &mut self.goals,
            DocumentList::Initiatives => &mut self.initiatives,
            DocumentList::Metrics => &mut self.metrics,
        };
        *slot = rows;
        slot.len()
    }
}
