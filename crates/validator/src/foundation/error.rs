//! Error types for rule construction and message resolution
//!
//! Evaluation itself never fails: `Rule::is_valid` answers with a boolean.
//! Everything here concerns building a rule from an annotation, reading
//! attributes off that annotation, and turning it into a failure message.

use std::borrow::Cow;

use crate::foundation::annotation::AttributeKind;

// ============================================================================
// REFLECTION ERROR
// ============================================================================

/// Reading a named attribute off an annotation failed.
///
/// Both variants are the same failure kind from the caller's point of view:
/// the attribute could not be produced with the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflectionError {
    /// The annotation exposes no attribute with this name.
    #[error("annotation `{annotation}` has no attribute `{attribute}`")]
    NotFound {
        /// Kind of the annotation that was read.
        annotation: String,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// The attribute exists but holds a different type.
    #[error("attribute `{attribute}` of annotation `{annotation}` is {found}, expected {expected}")]
    TypeMismatch {
        /// Kind of the annotation that was read.
        annotation: String,
        /// Name of the attribute.
        attribute: String,
        /// Type requested by the caller.
        expected: AttributeKind,
        /// Type actually stored on the annotation.
        found: AttributeKind,
    },
}

// ============================================================================
// RULE ERROR
// ============================================================================

/// Errors raised while building rules or producing their messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A rule was given an absent or unusable annotation.
    #[error("invalid argument: {0}")]
    InvalidArgument(Cow<'static, str>),

    /// An attribute could not be read off the bound annotation.
    #[error(transparent)]
    Reflection(#[from] ReflectionError),

    /// The message resolver has no string for this resource id.
    #[error("message resource {id} could not be resolved")]
    UnresolvedMessage {
        /// Resource id read from the annotation.
        id: i32,
    },

    /// No constructor is registered for the annotation kind.
    #[error("no rule registered for annotation kind `{kind}`")]
    UnknownAnnotation {
        /// Kind that was looked up.
        kind: String,
    },

    /// Dynamic attributes did not fit the typed annotation.
    #[error("malformed `{kind}` annotation: {reason}")]
    MalformedAnnotation {
        /// Kind of the annotation being converted.
        kind: String,
        /// Deserializer diagnostic.
        reason: String,
    },
}

impl RuleError {
    /// Creates an [`RuleError::InvalidArgument`] error.
    pub fn invalid_argument(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidArgument(reason.into())
    }

    /// Whether this error comes from reading an annotation attribute.
    #[must_use]
    pub fn is_reflection_failure(&self) -> bool {
        matches!(self, Self::Reflection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_error_converts_into_rule_error() {
        let err: RuleError = ReflectionError::NotFound {
            annotation: "length".into(),
            attribute: "max".into(),
        }
        .into();

        assert!(err.is_reflection_failure());
        assert_eq!(err.to_string(), "annotation `length` has no attribute `max`");
    }

    #[test]
    fn type_mismatch_display() {
        let err = ReflectionError::TypeMismatch {
            annotation: "custom".into(),
            attribute: "messageResId".into(),
            expected: AttributeKind::Int,
            found: AttributeKind::Str,
        };
        assert_eq!(
            err.to_string(),
            "attribute `messageResId` of annotation `custom` is string, expected i32"
        );
    }

    #[test]
    fn invalid_argument_is_not_reflection() {
        let err = RuleError::invalid_argument("annotation cannot be absent");
        assert!(!err.is_reflection_failure());
        assert_eq!(err.to_string(), "invalid argument: annotation cannot be absent");
    }
}
