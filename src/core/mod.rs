pub mod actions;
pub mod application;
pub mod compare;
pub mod dashboard;
pub mod document;
pub mod enhance;
pub mod onboarding;
pub mod playground;
pub mod providers;
pub mod session;
pub mod wizard;
