use crate::error::EnhanceError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnhanceState {
    Idle,
    Enhancing,
    Enhanced,
}

/// Proof that an enhancement was started; carries what must be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhanceTicket {
    id: u64,
    text: String,
    context: String,
}

impl EnhanceTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn context(&self) -> &str {
        &self.context
    }
}

#[derive(Debug, Clone)]
struct InFlight {
    id: u64,
    /// Undo point that existed before this request overwrote it.
    superseded: Option<String>,
}

/// A text value with one-level undo around AI enhancement.
#[derive(Debug, Clone)]
pub struct EnhanceableField {
    label: String,
    context: String,
    value: String,
    previous: Option<String>,
    in_flight: Option<InFlight>,
    next_ticket: u64,
}

impl EnhanceableField {
    pub fn new(label: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            context: context.into(),
            value: String::new(),
            previous: None,
            in_flight: None,
            next_ticket: 1,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn previous_value(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn state(&self) -> EnhanceState {
        if self.in_flight.is_some() {
            EnhanceState::Enhancing
        } else if self.previous.is_some() {
            EnhanceState::Enhanced
        } else {
            EnhanceState::Idle
        }
    }

    pub fn is_enhancing(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the enhance trigger is currently enabled.
    pub fn can_enhance(&self) -> bool {
        !self.value.trim().is_empty() && !self.is_enhancing()
    }

    /// Undo is offered only while a snapshot exists and nothing is in flight.
    pub fn can_undo(&self) -> bool {
        self.previous.is_some() && !self.is_enhancing()
    }

    /// User edit. Rejected while an enhancement is in flight; an existing
    /// undo snapshot is kept.
    pub fn set_value(&mut self, value: impl Into<String>) -> Result<(), EnhanceError> {
        if self.is_enhancing() {
            return Err(EnhanceError::AlreadyEnhancing);
        }
        self.value = value.into();
        Ok(())
    }

    /// Snapshot the current value and mark the field in flight.
    pub fn begin_enhance(&mut self) -> Result<EnhanceTicket, EnhanceError> {
        if self.is_enhancing() {
            return Err(EnhanceError::AlreadyEnhancing);
        }
        if self.value.trim().is_empty() {
            return Err(EnhanceError::EmptyText);
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        let superseded = self.previous.replace(self.value.clone());
        self.in_flight = Some(InFlight { id, superseded });

        Ok(EnhanceTicket {
            id,
            text: self.value.clone(),
            context: self.context.clone(),
        })
    }

    /// Commit the fully assembled text. The snapshot taken at trigger stays.
    pub fn complete(&mut self, ticket: &EnhanceTicket, text: String) -> Result<(), EnhanceError> {
        self.take_in_flight(ticket)?;
        self.value = text;
        Ok(())
    }

    /// Upstream failure: value untouched, the earlier undo point restored.
    pub fn fail(&mut self, ticket: &EnhanceTicket) -> Result<(), EnhanceError> {
        let in_flight = self.take_in_flight(ticket)?;
        self.previous = in_flight.superseded;
        Ok(())
    }

    /// Abandon the in-flight request as if it had never been issued.
    /// Returns `false` when nothing was in flight.
    pub fn cancel(&mut self) -> bool {
        let Some(in_flight) = self.in_flight.take() else {
            return false;
        };
        self.previous = in_flight.superseded;
        true
    }

    /// Restore the snapshot and clear it. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        match self.previous.take() {
            Some(previous) => {
                self.value = previous;
                true
            }
            None => false,
        }
    }

    fn take_in_flight(&mut self, ticket: &EnhanceTicket) -> Result<InFlight, EnhanceError> {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == ticket.id => {
                self.in_flight.take().ok_or(EnhanceError::StaleTicket(ticket.id))
            }
            _ => Err(EnhanceError::StaleTicket(ticket.id)),
        }
    }
}
