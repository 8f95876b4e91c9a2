use serde::Serialize;

use super::catalog::{
    ExperienceOption, GoalOption, TradeOption, find_experience, find_goal, find_trade,
};

/// Answers collected by the conversational onboarding flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingState {
    trade: Option<&'static str>,
    experience_level: Option<&'static str>,
    goals: Vec<&'static str>,
    location: Option<String>,
}

/// What the assistant sees of the onboarding answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingReadable {
    pub trade: Option<&'static str>,
    pub experience_level: Option<&'static str>,
    pub goals: Vec<&'static str>,
    pub location: Option<String>,
    pub is_complete: bool,
}

impl OnboardingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trade(&self) -> Option<&'static TradeOption> {
        self.trade.and_then(find_trade)
    }

    pub fn experience(&self) -> Option<&'static ExperienceOption> {
        self.experience_level.and_then(find_experience)
    }

    pub fn goals(&self) -> impl Iterator<Item = &'static GoalOption> + '_ {
        self.goals.iter().filter_map(|id| find_goal(id))
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// `None` when `id` is not in the trade catalog.
    pub fn set_trade(&mut self, id: &str) -> Option<&'static TradeOption> {
        let trade = find_trade(id)?;
        self.trade = Some(trade.id);
        Some(trade)
    }

    pub fn set_experience(&mut self, id: &str) -> Option<&'static ExperienceOption> {
        let level = find_experience(id)?;
        self.experience_level = Some(level.id);
        Some(level)
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    /// Flip a goal on or off. Returns the new selection state, or `None`
    /// for an unknown goal id.
    pub fn toggle_goal(&mut self, id: &str) -> Option<bool> {
        let goal = find_goal(id)?;
        if let Some(index) = self.goals.iter().position(|&g| g == goal.id) {
            self.goals.remove(index);
            Some(false)
        } else {
            self.goals.push(goal.id);
            Some(true)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.trade.is_some()
            && self.experience_level.is_some()
            && !self.goals.is_empty()
            && self.location.as_deref().is_some_and(|l| !l.trim().is_empty())
    }

    pub fn readable(&self) -> OnboardingReadable {
        OnboardingReadable {
            trade: self.trade,
            experience_level: self.experience_level,
            goals: self.goals.clone(),
            location: self.location.clone(),
            is_complete: self.is_complete(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_ids_leave_state_untouched() {
        let mut state = OnboardingState::new();
        assert!(state.set_trade("astronaut").is_none());
        assert!(state.set_experience("grandmaster").is_none());
        assert!(state.toggle_goal("retire").is_none());
        assert_eq!(state, OnboardingState::new());
    }

    #[test]
    fn known_ids_resolve_to_catalog_entries() {
        let mut state = OnboardingState::new();
        assert_eq!(state.set_trade("hvac").unwrap().name, "HVAC");
        assert_eq!(state.set_experience("master").unwrap().years, "8+ years");
        assert_eq!(state.trade().unwrap().id, "hvac");
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut state = OnboardingState::new();
        assert_eq!(state.toggle_goal("get-certified"), Some(true));
        assert_eq!(state.toggle_goal("network"), Some(true));
        assert_eq!(state.toggle_goal("get-certified"), Some(false));
        let labels: Vec<_> = state.goals().map(|g| g.label).collect();
        assert_eq!(labels, vec!["Build my network"]);
    }

    #[test]
    fn complete_needs_every_answer() {
        let mut state = OnboardingState::new();
        state.set_trade("welding");
        state.set_experience("apprentice");
        state.toggle_goal("find-job");
        assert!(!state.is_complete());
        state.set_location("Denver, CO");
        assert!(state.is_complete());
        assert!(state.readable().is_complete);
    }
}
