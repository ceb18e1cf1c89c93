//! The rule capability
//!
//! [`Rule`] is the only surface orchestration code depends on. It never
//! needs to know which concrete rule or annotation sits behind it.

use std::sync::Arc;

use crate::foundation::error::RuleError;
use crate::foundation::resolver::MessageResolver;

/// A stateless unit of validation: judges a value and explains failure.
///
/// # Contract
///
/// - `is_valid` is pure and deterministic for a given (annotation, value)
///   pair. It never panics for a value of the declared type; an absent value
///   (`None`) yields a verdict like any other input.
/// - `message` can be called at any time, whether or not `is_valid` ran.
///
/// Rules hold no per-call state, so a single instance can be evaluated from
/// several threads at once.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_validator::prelude::*;
///
/// let rule = NotEmptyRule::new(Some(Arc::new(NotEmpty::default())))?;
/// if !rule.is_valid(Some("")) {
///     println!("{}", rule.message(&NoResources)?);
/// }
/// ```
pub trait Rule: Send + Sync {
    /// The type of value this rule judges.
    type Input: ?Sized;

    /// Returns `true` when `value` satisfies the rule.
    fn is_valid(&self, value: Option<&Self::Input>) -> bool;

    /// Returns the human-readable failure message.
    fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError>;
}

impl<R> Rule for Arc<R>
where
    R: Rule + ?Sized,
{
    type Input = R::Input;

    fn is_valid(&self, value: Option<&Self::Input>) -> bool {
        (**self).is_valid(value)
    }

    fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError> {
        (**self).message(resolver)
    }
}

impl<R> Rule for Box<R>
where
    R: Rule + ?Sized,
{
    type Input = R::Input;

    fn is_valid(&self, value: Option<&Self::Input>) -> bool {
        (**self).is_valid(value)
    }

    fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError> {
        (**self).message(resolver)
    }
}
