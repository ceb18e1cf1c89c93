//! Text presence and length rules
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` is five
//! long regardless of its byte size.

use std::sync::Arc;

use crate::foundation::{AnnotationBinding, AnnotationRule, MessageResolver, Rule, RuleError};

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::annotation! {
    /// Requires text to be present and non-empty.
    pub NotEmpty("not_empty") {
        /// Ignore surrounding whitespace, so `"  "` counts as empty.
        trim("trim"): bool = false,
    }
    message = "This field is required";
}

crate::annotation_rule! {
    /// Passes when the text is present and, after optional trimming, non-empty.
    pub NotEmptyRule(NotEmpty) for str;
    rule(self, input) {
        input.is_some_and(|text| {
            let text = if self.annotation().trim { text.trim() } else { text };
            !text.is_empty()
        })
    }
}

// ============================================================================
// LENGTH
// ============================================================================

crate::annotation! {
    /// Bounds the length of text, both ends inclusive.
    pub Length("length") {
        /// Minimum number of chars.
        min("min"): i32 = 0,
        /// Maximum number of chars.
        max("max"): i32 = i32::MAX,
        /// Measure after trimming surrounding whitespace.
        trim("trim"): bool = false,
    }
    message = "Invalid length";
}

/// Passes when present text has between `min` and `max` chars.
///
/// Construction fails if `min > max`.
#[derive(Debug, Clone)]
pub struct LengthRule {
    binding: AnnotationBinding<Length>,
}

impl LengthRule {
    /// Binds a new rule to `annotation`.
    pub fn new(annotation: Option<Arc<Length>>) -> Result<Self, RuleError> {
        let binding = AnnotationBinding::new(annotation)?;
        let Length { min, max, .. } = *binding.annotation();
        if min > max {
            return Err(RuleError::invalid_argument(format!(
                "length: min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { binding })
    }

    /// The bound annotation.
    pub fn annotation(&self) -> &Length {
        self.binding.annotation()
    }
}

impl Rule for LengthRule {
    type Input = str;

    fn is_valid(&self, value: Option<&str>) -> bool {
        let Some(text) = value else {
            return false;
        };
        let annotation = self.annotation();
        let text = if annotation.trim { text.trim() } else { text };
        let len = i64::try_from(text.chars().count()).unwrap_or(i64::MAX);
        len >= i64::from(annotation.min) && len <= i64::from(annotation.max)
    }

    fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError> {
        self.binding.message(resolver)
    }
}

impl AnnotationRule for LengthRule {
    type Annotation = Length;

    fn from_annotation(annotation: Option<Arc<Length>>) -> Result<Self, RuleError> {
        Self::new(annotation)
    }

    fn binding(&self) -> &AnnotationBinding<Length> {
        &self.binding
    }
}

// ============================================================================
// TESTS
// ============================================================================
