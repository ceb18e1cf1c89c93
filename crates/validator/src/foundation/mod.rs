//! Core rule types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Rule**: [`Rule`], the capability orchestration code evaluates
//! - **Binding**: [`AnnotationBinding`] and [`AnnotationRule`], rules built
//!   from one immutable annotation
//! - **Annotations**: [`Annotation`], [`DynamicAnnotation`] and the
//!   [`AttributeReader`]
//! - **Messages**: [`MessageResolver`] for resource-backed messages
//! - **Errors**: [`RuleError`], [`ReflectionError`]
//!
//! # Architecture
//!
//! ## 1. Declarative metadata
//!
//! A field declares its constraint as an annotation. The annotation carries
//! the rule's parameters and its failure message, either as literal text or
//! as a resource id:
//!
//! ```rust,ignore
//! let annotation = Length { min: 3, max: 20, ..Length::default() }
//!     .with_message_res_id(R_USERNAME_LENGTH);
//! ```
//!
//! ## 2. Bound rules
//!
//! A rule is constructed from exactly one annotation and keeps it for its
//! whole lifetime. Construction rejects an absent annotation:
//!
//! ```rust,ignore
//! let rule = LengthRule::new(Some(Arc::new(annotation)))?;
//! assert!(LengthRule::new(None).is_err());
//! ```
//!
//! ## 3. Evaluation and messages
//!
//! Evaluation is a pure boolean; the message is derived from the annotation
//! on demand:
//!
//! ```rust,ignore
//! if !rule.is_valid(Some("al")) {
//!     let text = rule.message(&resources)?;
//! }
//! ```

pub mod annotation;
pub mod binding;
pub mod dynamic;
pub mod error;
pub mod resolver;
pub mod rule;

pub use annotation::{
    Annotation, AttributeKind, AttributeReader, AttributeValue, DeclaredAnnotation, FromAttribute,
    MESSAGE, MESSAGE_RES_ID, NO_MESSAGE_RES_ID, ToAttribute,
};
pub use binding::{AnnotationBinding, AnnotationRule};
pub use dynamic::DynamicAnnotation;
pub use error::{ReflectionError, RuleError};
pub use resolver::{MessageResolver, NoResources};
pub use rule::Rule;

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for implementing rules.
pub mod prelude {
    pub use super::{
        Annotation, AnnotationBinding, AnnotationRule, AttributeReader, AttributeValue,
        DynamicAnnotation, MessageResolver, NoResources, ReflectionError, Rule, RuleError,
    };
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates `rule` and returns its message if `value` fails.
///
/// `Ok(None)` means the value passed.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_validator::foundation::check;
///
/// assert_eq!(check(&rule, Some(""), &NoResources)?, Some("This field is required".into()));
/// ```
pub fn check<R>(
    rule: &R,
    value: Option<&R::Input>,
    resolver: &dyn MessageResolver,
) -> Result<Option<String>, RuleError>
where
    R: Rule + ?Sized,
{
    if rule.is_valid(value) {
        Ok(None)
    } else {
        rule.message(resolver).map(Some)
    }
}

// ============================================================================
// TESTS
// ============================================================================
