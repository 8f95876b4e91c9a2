use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceOption {
    pub id: &'static str,
    pub label: &'static str,
    pub years: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalOption {
    pub id: &'static str,
    pub label: &'static str,
}

pub static TRADES: [TradeOption; 8] = [
    TradeOption { id: "electrical", name: "Electrical", description: "Wiring, panels, installations" },
    TradeOption { id: "plumbing", name: "Plumbing", description: "Pipes, fixtures, water systems" },
    TradeOption { id: "hvac", name: "HVAC", description: "Heating, cooling, ventilation" },
    TradeOption { id: "carpentry", name: "Carpentry", description: "Framing, finishing, cabinetry" },
    TradeOption { id: "welding", name: "Welding", description: "Metal fabrication, joining" },
    TradeOption { id: "pipefitting", name: "Pipefitting", description: "Industrial pipe systems" },
    TradeOption { id: "automotive", name: "Automotive", description: "Vehicle repair, diagnostics" },
    TradeOption { id: "landscaping", name: "Landscaping", description: "Outdoor design, maintenance" },
];

pub static EXPERIENCE_LEVELS: [ExperienceOption; 4] = [
    ExperienceOption {
        id: "new",
        label: "Just Starting",
        years: "< 1 year",
        description: "New to the trade, eager to learn",
    },
    ExperienceOption {
        id: "apprentice",
        label: "Apprentice",
        years: "1-3 years",
        description: "Building foundational skills",
    },
    ExperienceOption {
        id: "journeyman",
        label: "Journeyman",
        years: "4-7 years",
        description: "Skilled and independent",
    },
    ExperienceOption {
        id: "master",
        label: "Master/Expert",
        years: "8+ years",
        description: "Highly experienced, can mentor",
    },
];

pub static GOALS: [GoalOption; 8] = [
    GoalOption { id: "find-job", label: "Find a new job" },
    GoalOption { id: "higher-pay", label: "Earn higher pay" },
    GoalOption { id: "learn-skills", label: "Learn new skills" },
    GoalOption { id: "get-certified", label: "Get certified" },
    GoalOption { id: "career-change", label: "Change specialization" },
    GoalOption { id: "start-business", label: "Start my own business" },
    GoalOption { id: "relocate", label: "Relocate to new area" },
    GoalOption { id: "network", label: "Build my network" },
];

pub fn find_trade(id: &str) -> Option<&'static TradeOption> {
    TRADES.iter().find(|trade| trade.id == id)
}

pub fn find_experience(id: &str) -> Option<&'static ExperienceOption> {
    EXPERIENCE_LEVELS.iter().find(|level| level.id == id)
}

pub fn find_goal(id: &str) -> Option<&'static GoalOption> {
    GOALS.iter().find(|goal| goal.id == id)
}

pub fn trade_ids() -> String {
    TRADES.iter().map(|t| t.id).collect::<Vec<_>>().join(", ")
}

pub fn experience_ids() -> String {
    EXPERIENCE_LEVELS
        .iter()
        .map(|l| l.id)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn goal_ids() -> String {
    GOALS.iter().map(|g| g.id).collect::<Vec<_>>().join(", ")
}
