//! Conversational onboarding: trade, experience, goals and location picked
//! from fixed catalogs.

pub mod catalog;
pub mod state;

pub use catalog::{EXPERIENCE_LEVELS, ExperienceOption, GOALS, GoalOption, TRADES, TradeOption};
pub use state::{OnboardingReadable, OnboardingState};
