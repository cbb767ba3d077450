//! Error types for template construction and input scanning.
//!
//! Every error in this crate is raised eagerly while a template is being
//! built or while input is being scanned. Rendering and matching never fail:
//! a mismatch is a plain `false`.

/// Errors raised while building a path template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// A construction-time argument was rejected
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The accessor handed to the builder never read a schema property
    #[error("Accessor capture failed: supplied function did not read a property of the schema type")]
    AccessorCapture,

    /// The bound property has a type with no derivable pattern
    #[error("Property '{property}' has unsupported type '{type_name}'")]
    UnsupportedPropertyType {
        property: String,
        type_name: String,
    },

    /// A node pattern failed to compile
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors raised by the key/value pair scanner.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    /// The scanner was configured with unusable delimiters
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A pair is missing its key/value delimiter
    #[error("Malformed input: no key/value delimiter preceding position {position}")]
    MalformedInput { position: usize },
}

// Convenience methods for creating common errors
impl TemplateError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an unsupported property type error
    pub fn unsupported_type(property: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedPropertyType {
            property: property.into(),
            type_name: type_name.into(),
        }
    }
}

impl ScanError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a malformed input error at the given byte offset
    pub fn malformed(position: usize) -> Self {
        Self::MalformedInput { position }
    }
}

// Result type aliases for convenience
pub type TemplateResult<T> = Result<T, TemplateError>;
pub type ScanResult<T> = Result<T, ScanError>;
