//! Multi-step profile wizard over one shared record.

pub mod labels;
pub mod profile;
pub mod review;
pub mod state;
pub mod step;
pub mod submit;

pub use labels::format_field_name;
pub use profile::{ProfileField, ProfilePatch, ProfileRecord};
pub use review::{NOT_PROVIDED, ReviewRow, ReviewSection, review_sections};
pub use state::{LastEnhanced, SubmitReceipt, WizardReadable, WizardState};
pub use step::WizardStep;
pub use submit::{SubmitTarget, simulate_submit};
