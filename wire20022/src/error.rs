//! Error types for the mapping engine
//!
//! Every failure is a value: path grammar errors, accessor errors, copy errors
//! and the facade-level [`Error`] that wraps them with the offending path.

use std::fmt;
use thiserror::Error;

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, Error>;

/// Sentinel kinds carried through the error chain
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value violates a field constraint
    #[error("invalid field value")]
    InvalidField,

    /// Required field is blank
    #[error("required field missing")]
    RequiredField,

    /// XML could not be decoded
    #[error("invalid XML")]
    InvalidXml,

    /// JSON could not be decoded
    #[error("invalid JSON")]
    InvalidJson,

    /// Root element carries no default namespace
    #[error("missing xmlns attribute")]
    MissingNamespace,

    /// Namespace is not registered for the message type
    #[error("unsupported namespace")]
    UnsupportedNamespace,

    /// Version is not registered for the message type
    #[error("invalid version")]
    InvalidVersion,

    /// Path names a field that does not exist
    #[error("field not found")]
    FieldNotFound,

    /// Index past the end of a repeated element
    #[error("array index out of bounds")]
    IndexOutOfBounds,
}

/// Path expression grammar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Empty path text
    #[error("empty path")]
    Empty,

    /// Two separators with nothing between them
    #[error("empty segment in path {0:?}")]
    EmptySegment(String),

    /// Field name containing whitespace or brackets
    #[error("invalid field name {0:?}")]
    InvalidName(String),

    /// Index that is not a non-negative integer in brackets
    #[error("invalid index in segment {0:?}")]
    InvalidIndex(String),

    /// Repeated-element key without the `" : "` separator
    #[error("invalid repeated key {0:?}, expected \"<path> : <target>\"")]
    InvalidRepeatedKey(String),
}

/// Failure reading or writing one value inside a tree
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccessError {
    /// Unknown field name
    #[error("field {0} not found")]
    FieldNotFound(String),

    /// Index past the live length of a repeated element
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Live length
        len: usize,
    },

    /// Index applied to an element that does not repeat
    #[error("index [{0}] applied to a non-repeated element")]
    NotRepeated(usize),

    /// Repeated element addressed without an index
    #[error("repeated element requires an index before {0}")]
    MissingIndex(String),

    /// Path continues below a leaf value
    #[error("cannot reach {0} through a leaf value")]
    PastLeaf(String),

    /// Path stops at a composite element
    #[error("path addresses a composite element, not a value")]
    NotALeaf,

    /// Text longer than the element allows
    #[error("{value} fails validation with length {len} <= required maxLength {max}")]
    MaxLength {
        /// Rejected text
        value: String,
        /// Length in characters
        len: usize,
        /// Maximum length
        max: usize,
    },

    /// Text shorter than the element allows
    #[error("{value} fails validation with length {len} >= required minLength {min}")]
    MinLength {
        /// Rejected text
        value: String,
        /// Length in characters
        len: usize,
        /// Minimum length
        min: usize,
    },

    /// Text that is not a decimal number
    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    /// Text that is not a boolean
    #[error("invalid boolean {0:?}")]
    InvalidBool(String),

    /// Text that is not a date or date-time
    #[error("invalid date/time {0:?}")]
    InvalidDateTime(String),

    /// No conversion between the two value types
    #[error("cannot convert {from} to {to}")]
    TypeMismatch {
        /// Source value type
        from: &'static str,
        /// Target leaf type
        to: &'static str,
    },
}

impl AccessError {
    /// Sentinel kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccessError::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            AccessError::FieldNotFound(_)
            | AccessError::NotRepeated(_)
            | AccessError::MissingIndex(_)
            | AccessError::PastLeaf(_)
            | AccessError::NotALeaf => ErrorKind::FieldNotFound,
            _ => ErrorKind::InvalidField,
        }
    }
}

/// Failure of a single copy across the model/document boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CopyError {
    /// Reading the source value failed
    #[error("failed to get {path}: {source}")]
    Get {
        /// Source path
        path: String,
        /// Accessor failure
        source: AccessError,
    },

    /// Writing the target value failed
    #[error("failed to set {path}: {source}")]
    Set {
        /// Model-side path of the copied value
        path: String,
        /// Accessor failure
        source: AccessError,
    },
}

impl CopyError {
    /// Underlying accessor failure
    pub fn access(&self) -> &AccessError {
        match self {
            CopyError::Get { source, .. } | CopyError::Set { source, .. } => source,
        }
    }
}

/// Cause of a [`FieldError`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldCause {
    /// Malformed path text
    #[error(transparent)]
    Path(#[from] PathError),

    /// Path did not resolve
    #[error(transparent)]
    Access(#[from] AccessError),

    /// Copy between trees failed
    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl FieldCause {
    /// Sentinel kind, if any
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            FieldCause::Path(_) => None,
            FieldCause::Access(e) => Some(e.kind()),
            FieldCause::Copy(e) => Some(e.access().kind()),
        }
    }
}

/// Path-level failure naming the operation and the path
#[derive(Error, Debug, Clone, PartialEq)]
#[error("field {op} {path} failed: {source}")]
pub struct FieldError {
    /// Operation: `copy`, `resolve`, `get` or `set`
    pub op: &'static str,
    /// Concrete path
    pub path: String,
    /// Cause
    pub source: FieldCause,
}

impl FieldError {
    /// Create a field error
    pub fn new(op: &'static str, path: impl Into<String>, source: impl Into<FieldCause>) -> Self {
        Self {
            op,
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Field-named validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "validation failed for field \"{field}\": {reason}{}",
    .kind.map(|k| format!(": {k}")).unwrap_or_default()
)]
pub struct ValidationError {
    /// Field name or element path
    pub field: String,
    /// Human readable reason
    pub reason: String,
    /// Sentinel kind
    pub kind: Option<ErrorKind>,
}

impl ValidationError {
    /// Failure without a sentinel
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            kind: None,
        }
    }

    /// Blank required field
    pub fn required(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: "is required".to_string(),
            kind: Some(ErrorKind::RequiredField),
        }
    }

    /// Value violating a constraint
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
            kind: Some(ErrorKind::InvalidField),
        }
    }

    /// Unregistered version
    pub fn version(version: impl fmt::Display) -> Self {
        Self {
            field: "version".to_string(),
            reason: format!("unsupported version {version}"),
            kind: Some(ErrorKind::InvalidVersion),
        }
    }
}

/// Ordered collection of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// No failures recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failures
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failures in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Field names in insertion order
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    /// `Ok(())` when empty, otherwise the collection as an error
    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Decoding failure with the operation and the offending content
#[derive(Error, Debug)]
#[error(
    "{op} failed{}: {source}",
    .content.as_deref().map(|c| format!(" for {c}")).unwrap_or_default()
)]
pub struct ParseError {
    /// Operation that failed
    pub op: String,
    /// Offending content, when short enough to name
    pub content: Option<String>,
    /// Sentinel kind
    pub kind: ErrorKind,
    /// Underlying cause
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl ParseError {
    /// Create a parse error
    pub fn new(
        op: impl Into<String>,
        content: Option<String>,
        kind: ErrorKind,
        source: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            op: op.into(),
            content,
            kind,
            source: source.into(),
        }
    }
}

/// Mapping engine errors
#[derive(Error, Debug)]
pub enum Error {
    /// One or more fields failed validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// XML or JSON decoding failure
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Path-level get/set/copy failure
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error with caller context prepended
    #[error("{context}: {source}")]
    Context {
        /// What was being attempted
        context: String,
        /// Underlying error
        source: Box<Error>,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Prepend context to this error
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// First sentinel kind found along the chain
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Validation(errors) => errors.iter().find_map(|e| e.kind),
            Error::Parse(e) => Some(e.kind),
            Error::Field(e) => e.source.kind(),
            Error::Context { source, .. } => source.kind(),
            _ => None,
        }
    }

    /// Whether the chain carries `kind`
    pub fn is(&self, kind: ErrorKind) -> bool {
        match self {
            Error::Validation(errors) => errors.iter().any(|e| e.kind == Some(kind)),
            Error::Context { source, .. } => source.is(kind),
            _ => self.kind() == Some(kind),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error.into())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
