//! Assistant-invocable actions: declarations, argument decoding, the
//! dispatch table that applies them to a session, and rendering.

pub mod call;
pub mod coercion;
pub mod dispatch;
pub mod invocation;
pub mod render;
pub mod spec;
pub mod surfaces;

pub use call::ActionCall;
pub use coercion::{coerce_arguments, coerce_value};
pub use dispatch::apply;
pub use invocation::{
    InvocationLedger, InvocationOutcome, InvocationStatus, LEDGER_CAPACITY, invoke,
};
pub use render::{ActionView, render};
pub use spec::{ActionParameter, ActionSpec, ParamType};
pub use surfaces::{Surface, find_action};

/// Every declaration across all surfaces.
pub fn all_actions() -> Vec<ActionSpec> {
    Surface::ALL
        .into_iter()
        .flat_map(Surface::actions)
        .collect()
}
