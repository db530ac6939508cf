use doitnow_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using DoItNowError
pub type Result<T> = std::result::Result<T, DoItNowError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the CLI prints, the logging
/// macros record as `err.code`, and tests match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidTitle,
    InvalidName,
    InvalidIcon,
    InvalidColor,
    InvalidDate,
    InvalidSetting,

    // Lookup
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidTitle => "ERR_INVALID_TITLE",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidIcon => "ERR_INVALID_ICON",
            ExErrorKind::InvalidColor => "ERR_INVALID_COLOR",
            ExErrorKind::InvalidDate => "ERR_INVALID_DATE",
            ExErrorKind::InvalidSetting => "ERR_INVALID_SETTING",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context for humans: the failing operation, the entity it concerned and the
/// correlation ids of the request that triggered it.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (task, category or stat date)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy raised by validation and the in-memory mirror
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DoItNowError {
    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: String },

    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    #[error("Invalid category name: {reason}")]
    InvalidCategoryName { reason: String },

    #[error("Invalid icon: {reason}")]
    InvalidIcon { reason: String },

    /// Colors must be `#RRGGBB`
    #[error("Invalid color: {color}")]
    InvalidColor { color: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("Unknown setting: {key}")]
    UnknownSetting { key: String },

    #[error("Invalid value {value:?} for setting {key}")]
    InvalidSettingValue { key: String, value: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<DoItNowError> for ExError {
    fn from(err: DoItNowError) -> Self {
        match err {
            DoItNowError::TaskNotFound { task_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(task_id)
                .with_message("Task not found"),

            DoItNowError::CategoryNotFound { category_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_entity_id(category_id)
                    .with_message("Category not found")
            }

            DoItNowError::InvalidTitle { reason } => {
                ExError::new(ExErrorKind::InvalidTitle).with_message(reason)
            }

            DoItNowError::InvalidCategoryName { reason } => {
                ExError::new(ExErrorKind::InvalidName).with_message(reason)
            }

            DoItNowError::InvalidIcon { reason } => {
                ExError::new(ExErrorKind::InvalidIcon).with_message(reason)
            }

            DoItNowError::InvalidColor { color } => ExError::new(ExErrorKind::InvalidColor)
                .with_message(format!("Color {:?} is not of the form #RRGGBB", color)),

            DoItNowError::InvalidDate { value } => ExError::new(ExErrorKind::InvalidDate)
                .with_message(format!("Expected YYYY-MM-DD, got {:?}", value)),

            DoItNowError::InvalidTimestamp { value } => ExError::new(ExErrorKind::InvalidDate)
                .with_message(format!("Expected an RFC 3339 timestamp, got {:?}", value)),

            DoItNowError::UnknownSetting { key } => ExError::new(ExErrorKind::InvalidSetting)
                .with_entity_id(key)
                .with_message("Unknown setting"),

            DoItNowError::InvalidSettingValue { key, value } => {
                ExError::new(ExErrorKind::InvalidSetting)
                    .with_entity_id(key)
                    .with_message(format!("Expected true or false, got {:?}", value))
            }

            DoItNowError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for DoItNowError {
    fn from(err: serde_json::Error) -> Self {
        DoItNowError::Serialization {
            message: err.to_string(),
        }
    }
}
