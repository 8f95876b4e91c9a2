use std::collections::{HashMap, VecDeque};

use crate::core::session::Session;
use crate::error::ActionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::call::ActionCall;
use super::dispatch::apply;

/// How many completed invocation ids a session remembers.
pub const LEDGER_CAPACITY: usize = 256;

/// Lifecycle of one invocation as the assistant runtime reports it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum InvocationStatus {
    /// Arguments are still streaming in.
    InProgress,
    /// Arguments are final and the handler is running.
    Executing,
    Complete,
}

impl InvocationStatus {
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// Confirmations of completed invocations, oldest evicted first.
#[derive(Debug, Clone)]
pub struct InvocationLedger {
    order: VecDeque<String>,
    results: HashMap<String, String>,
    capacity: usize,
}

impl Default for InvocationLedger {
    fn default() -> Self {
        Self::with_capacity(LEDGER_CAPACITY)
    }
}

impl InvocationLedger {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::new(),
            results: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.results.get(id).map(String::as_str)
    }

    pub fn record(&mut self, id: impl Into<String>, confirmation: impl Into<String>) {
        let id = id.into();
        if self.results.insert(id.clone(), confirmation.into()).is_some() {
            return;
        }
        self.order.push_back(id);
        while self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.results.remove(&evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Result of handing one invocation to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationOutcome {
    pub id: String,
    pub name: String,
    pub result: String,
    /// `true` when `id` had already completed and nothing was reapplied.
    pub replayed: bool,
}

/// Apply an invocation exactly once per id.
///
/// Without an id the call is applied and a fresh id is assigned to it.
pub fn invoke(
    session: &mut Session,
    id: Option<&str>,
    name: &str,
    arguments: &Value,
) -> Result<InvocationOutcome, ActionError> {
    if let Some(id) = id
        && let Some(cached) = session.invocations.get(id)
    {
        tracing::debug!(invocation = id, action = name, "replaying completed invocation");
        return Ok(InvocationOutcome {
            id: id.to_string(),
            name: name.to_string(),
            result: cached.to_string(),
            replayed: true,
        });
    }

    let call = ActionCall::parse(name, arguments)?;
    let result = apply(&call, session);
    let id = id.map_or_else(|| uuid::Uuid::new_v4().to_string(), str::to_string);
    session.invocations.record(id.clone(), result.clone());
    tracing::info!(
        invocation = %id,
        action = call.name(),
        surface = %call.surface(),
        "action applied"
    );

    Ok(InvocationOutcome {
        id,
        name: call.name().to_string(),
        result,
        replayed: false,
    })
}
