//! Codec error taxonomy.

use studyplan_core::ValidationError;
use thiserror::Error;

/// Why a payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The JSON does not match the grammar: missing field, wrong JSON type.
    #[error("shape error at `{path}`: {message}")]
    Shape { path: String, message: String },

    /// The shape is right but a value is out of range or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The discriminator names a variant outside the closed set.
    #[error("unsupported {family} variant '{tag}' at `{path}`")]
    UnsupportedVariant {
        path: String,
        family: &'static str,
        tag: String,
    },
}

impl CodecError {
    pub(crate) fn shape(path: &str, message: impl Into<String>) -> Self {
        CodecError::Shape {
            path: display_path(path),
            message: message.into(),
        }
    }

    pub(crate) fn unsupported(path: &str, family: &'static str, tag: &str) -> Self {
        CodecError::UnsupportedVariant {
            path: display_path(path),
            family,
            tag: tag.to_string(),
        }
    }

    /// Stable short name for the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::Shape { .. } => "shape",
            CodecError::Validation(_) => "validation",
            CodecError::UnsupportedVariant { .. } => "unsupported_variant",
        }
    }

    /// Field path the error refers to (`$` for the document root).
    pub fn path(&self) -> &str {
        match self {
            CodecError::Shape { path, .. } | CodecError::UnsupportedVariant { path, .. } => path,
            CodecError::Validation(e) => &e.field,
        }
    }
}

fn display_path(path: &str) -> String {
    if path.is_empty() { "$".to_string() } else { path.to_string() }
}

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
