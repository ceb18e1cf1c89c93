//! Rules bound to an annotation
//!
//! [`AnnotationBinding`] is the state every annotation-backed rule carries:
//! a shared, immutable reference to the annotation it was built from. It
//! owns the message algorithm, so concrete rules only supply a predicate.

use std::fmt;
use std::sync::Arc;

use crate::foundation::annotation::{Annotation, NO_MESSAGE_RES_ID};
use crate::foundation::error::RuleError;
use crate::foundation::resolver::MessageResolver;
use crate::foundation::rule::Rule;

// ============================================================================
// ANNOTATION BINDING
// ============================================================================

/// A permanent binding between a rule and one annotation.
///
/// # Examples
///
/// ```rust,ignore
/// let binding = AnnotationBinding::new(Some(Arc::new(NotEmpty::default())))?;
/// assert_eq!(binding.message(&NoResources)?, "This field is required");
///
/// assert!(AnnotationBinding::<NotEmpty>::new(None).is_err());
/// ```
pub struct AnnotationBinding<A: ?Sized> {
    annotation: Arc<A>,
}

impl<A> AnnotationBinding<A>
where
    A: Annotation + ?Sized,
{
    /// Binds to `annotation`.
    ///
    /// Fails with [`RuleError::InvalidArgument`] when the annotation is absent.
    /// No other check is made here.
    pub fn new(annotation: Option<Arc<A>>) -> Result<Self, RuleError> {
        let annotation =
            annotation.ok_or_else(|| RuleError::invalid_argument("annotation cannot be absent"))?;
        Ok(Self { annotation })
    }

    /// The bound annotation.
    pub fn annotation(&self) -> &A {
        &self.annotation
    }

    /// The bound annotation as a shared handle.
    pub fn shared(&self) -> &Arc<A> {
        &self.annotation
    }

    /// Produces the failure message declared by the bound annotation.
    ///
    /// A readable `messageResId` other than [`NO_MESSAGE_RES_ID`] is resolved
    /// through `resolver` and wins. An unreadable `messageResId` counts as
    /// unset. Otherwise the literal `message` is returned untouched; failing
    /// to read it is an authoring error and is returned as
    /// [`RuleError::Reflection`].
    pub fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError> {
        let res_id = match self.annotation.message_res_id() {
            Ok(id) => id,
            Err(err) => {
                tracing::debug!(
                    annotation = self.annotation.kind(),
                    error = %err,
                    "messageResId unreadable, using literal message"
                );
                NO_MESSAGE_RES_ID
            }
        };

        if res_id != NO_MESSAGE_RES_ID {
            return resolver
                .resolve(res_id)
                .map(std::borrow::Cow::into_owned)
                .ok_or(RuleError::UnresolvedMessage { id: res_id });
        }

        Ok(self.annotation.message()?.into_owned())
    }
}

impl<A: ?Sized> Clone for AnnotationBinding<A> {
    fn clone(&self) -> Self {
        Self {
            annotation: Arc::clone(&self.annotation),
        }
    }
}

impl<A> fmt::Debug for AnnotationBinding<A>
where
    A: Annotation + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotationBinding")
            .field("annotation", &&*self.annotation)
            .finish()
    }
}

// ============================================================================
// ANNOTATION RULE
// ============================================================================

/// A [`Rule`] built from, and bound to, one annotation.
///
/// `from_annotation` is the uniform constructor the
/// [`RuleRegistry`](crate::registry::RuleRegistry) calls, so every variant can
/// be created without the caller naming its concrete type.
pub trait AnnotationRule: Rule + Sized {
    /// The annotation this rule is built from.
    type Annotation: Annotation + ?Sized;

    /// Builds the rule. Fails with [`RuleError::InvalidArgument`] on `None`
    /// and on annotation content the rule cannot work with.
    fn from_annotation(annotation: Option<Arc<Self::Annotation>>) -> Result<Self, RuleError>;

    /// The binding holding the annotation.
    fn binding(&self) -> &AnnotationBinding<Self::Annotation>;

    /// The bound annotation.
    fn annotation(&self) -> &Self::Annotation {
        self.binding().annotation()
    }
}
