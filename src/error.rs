use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `sparkform`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide how to report a failure; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum SparkError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── LLM / Provider ──────────────────────────────────────────────────
    #[error("llm: {0}")]
    Llm(#[from] LlmError),

    // ── Enhance flow ────────────────────────────────────────────────────
    #[error("enhance: {0}")]
    Enhance(#[from] EnhanceError),

    // ── Wizard ──────────────────────────────────────────────────────────
    #[error("wizard: {0}")]
    Wizard(#[from] WizardError),

    // ── Assistant actions ───────────────────────────────────────────────
    #[error("action: {0}")]
    Action(#[from] ActionError),

    // ── Sessions ────────────────────────────────────────────────────────
    #[error("session: {0}")]
    Session(#[from] SessionError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── LLM / Provider errors ──────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("provider {provider} request failed: {message}")]
    Request { provider: String, message: String },

    #[error("provider {provider} authentication failed")]
    Auth { provider: String },

    #[error("streaming error: {0}")]
    Streaming(String),
}

// ─── Enhance errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("nothing to enhance: field is empty")]
    EmptyText,

    #[error("an enhancement is already in flight for this field")]
    AlreadyEnhancing,

    #[error("enhancement ticket {0} is no longer current")]
    StaleTicket(u64),

    #[error("upstream generation failed: {0}")]
    Upstream(String),
}

// ─── Wizard errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error("no submission is in progress")]
    NotSubmitting,
}

// ─── Action errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("action {name} is not declared")]
    Unknown { name: String },

    #[error("action {name} received invalid arguments: {message}")]
    InvalidArguments { name: String, message: String },
}

// ─── Session errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(String),
}

pub type SparkResult<T> = Result<T, SparkError>;
