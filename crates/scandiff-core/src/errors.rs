use scandiff_core_types::RequestId;
use thiserror::Error;

/// Result type alias using the canonical error facility
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// test assertions and CLI output. The comparison engine itself never fails;
/// every kind here belongs to a boundary around it (validation, config, IO).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation boundary
    InvalidInput,
    InvalidRecord,

    // Configuration
    InvalidConfig,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidRecord => "ERR_INVALID_RECORD",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind plus optional context for debugging:
/// the operation, the offending record position and field, and the
/// correlation id of the comparison run.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    record_index: Option<usize>,
    field: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            record_index: None,
            field: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the position of the offending record in the input sequence
    pub fn with_record_index(mut self, index: usize) -> Self {
        self.record_index = Some(index);
        self
    }

    /// Add the offending field name
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn record_index(&self) -> Option<usize> {
        self.record_index
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(index) = self.record_index {
            write!(f, " (record: {})", index)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
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

/// Domain error taxonomy for the boundaries around the comparison engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanDiffError {
    /// Input document is not a sequence of records
    #[error("Expected a JSON array of scan records, found {found}")]
    NotARecordList { found: String },

    /// A record is not a keyed mapping
    #[error("Record {index} is not a JSON object (found {found})")]
    RecordNotObject { index: usize, found: String },

    /// A collection field holds a shape the normalizer cannot represent
    #[error("Record {index} field {field} must be a list, string or object (found {found})")]
    MalformedCollectionField {
        index: usize,
        field: String,
        found: String,
    },

    /// The version field cannot be ordered
    #[error("Record {index} VERSION_NAME must be a string or number (found {found})")]
    MalformedVersion { index: usize, found: String },

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Filesystem error
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from ScanDiffError to ExError
impl From<ScanDiffError> for ExError {
    fn from(err: ScanDiffError) -> Self {
        let message = err.to_string();
        match err {
            ScanDiffError::NotARecordList { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            ScanDiffError::RecordNotObject { index, .. } => {
                ExError::new(ExErrorKind::InvalidRecord)
                    .with_record_index(index)
                    .with_message(message)
            }

            ScanDiffError::MalformedCollectionField { index, field, .. } => {
                ExError::new(ExErrorKind::InvalidRecord)
                    .with_record_index(index)
                    .with_field(field)
                    .with_message(message)
            }

            ScanDiffError::MalformedVersion { index, .. } => {
                ExError::new(ExErrorKind::InvalidRecord)
                    .with_record_index(index)
                    .with_field(crate::model::VERSION_NAME)
                    .with_message(message)
            }

            ScanDiffError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            ScanDiffError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),

            ScanDiffError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ScanDiffError
impl From<serde_json::Error> for ScanDiffError {
    fn from(err: serde_json::Error) -> Self {
        ScanDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Short human label for the JSON type of a value, used in error messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::InvalidRecord, "ERR_INVALID_RECORD"),
            (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_malformed_collection_field_carries_context() {
        let err: ExError = ScanDiffError::MalformedCollectionField {
            index: 2,
            field: "DOMAINS".to_string(),
            found: "number".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ExErrorKind::InvalidRecord);
        assert_eq!(err.record_index(), Some(2));
        assert_eq!(err.field(), Some("DOMAINS"));
        assert!(err.to_string().starts_with("[ERR_INVALID_RECORD]"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::InvalidConfig).with_source(inner);

        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Io)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
