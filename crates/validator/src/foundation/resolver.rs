//! Message resolution by resource id.

use std::borrow::Cow;

/// Maps an integer resource id to a localized string.
///
/// Returning `None` means the id is unknown; callers surface that as
/// [`RuleError::UnresolvedMessage`](crate::foundation::RuleError::UnresolvedMessage)
/// instead of substituting a placeholder.
///
/// Any `Fn(i32) -> Option<String>` is a resolver:
///
/// ```rust,ignore
/// let resolver = |id: i32| (id == 42).then(|| "Field is required".to_string());
/// assert_eq!(rule.message(&resolver)?, "Field is required");
/// ```
pub trait MessageResolver {
    /// Resolves `id`, or returns `None` if no string exists for it.
    fn resolve(&self, id: i32) -> Option<Cow<'_, str>>;
}

impl<F> MessageResolver for F
where
    F: Fn(i32) -> Option<String>,
{
    fn resolve(&self, id: i32) -> Option<Cow<'_, str>> {
        self(id).map(Cow::Owned)
    }
}

/// A resolver with no resources. Every lookup fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoResources;

impl MessageResolver for NoResources {
    fn resolve(&self, _id: i32) -> Option<Cow<'_, str>> {
        None
    }
}
