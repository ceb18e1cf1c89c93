//! Rule registry for resolving annotations by kind.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::foundation::{
    Annotation, AnnotationRule, DeclaredAnnotation, DynamicAnnotation, Rule, RuleError,
};
use crate::rules::{
    AssertFalseRule, AssertTrueRule, CheckedRule, DecimalMaxRule, DecimalMinRule, DigitsRule,
    EmailRule, LengthRule, MaxRule, MinRule, NotEmptyRule, PasswordRule, PatternRule, UrlRule,
};

/// A rule behind a trait object, as produced by the registry.
pub type BoxedRule<I> = Box<dyn Rule<Input = I>>;

/// Builds a rule from a dynamic annotation.
pub type RuleConstructor<I> =
    Arc<dyn Fn(Arc<DynamicAnnotation>) -> Result<BoxedRule<I>, RuleError> + Send + Sync>;

/// Maps annotation kinds to rule constructors for one input type.
///
/// Registration happens during setup; resolution only reads, so a built
/// registry can be shared behind an `Arc` without locking.
///
/// # Examples
///
/// ```rust,ignore
/// use vigil_validator::registry::RuleRegistry;
///
/// let registry = RuleRegistry::<str>::text();
/// let annotation = DynamicAnnotation::from_json(r#"{"kind":"length","min":3}"#)?;
/// let rule = registry.resolve(Arc::new(annotation))?;
/// assert!(!rule.is_valid(Some("al")));
/// ```
pub struct RuleRegistry<I: ?Sized + 'static> {
    constructors: HashMap<String, RuleConstructor<I>>,
}

impl<I: ?Sized + 'static> RuleRegistry<I> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor for `kind`.
    ///
    /// If a constructor for the same kind already exists, it is replaced.
    pub fn register<F>(&mut self, kind: impl Into<String>, constructor: F)
    where
        F: Fn(Arc<DynamicAnnotation>) -> Result<BoxedRule<I>, RuleError> + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self
            .constructors
            .insert(kind.clone(), Arc::new(constructor))
            .is_some()
        {
            tracing::info!(annotation_kind = %kind, "replaced rule constructor");
        } else {
            tracing::debug!(annotation_kind = %kind, "registered rule constructor");
        }
    }

    /// Register a typed rule under its annotation's kind.
    ///
    /// The dynamic attributes are deserialized into `R::Annotation`, then the
    /// rule is built with [`AnnotationRule::from_annotation`].
    pub fn register_rule<R>(&mut self)
    where
        R: AnnotationRule<Input = I> + 'static,
        R::Annotation: DeclaredAnnotation + DeserializeOwned,
    {
        self.register(
            <R::Annotation as DeclaredAnnotation>::KIND,
            |annotation: Arc<DynamicAnnotation>| {
                let typed = annotation.to_typed::<R::Annotation>()?;
                let rule = R::from_annotation(Some(Arc::new(typed)))?;
                Ok(Box::new(rule) as BoxedRule<I>)
            },
        );
    }

    /// Build the rule for `annotation`.
    ///
    /// Fails with [`RuleError::UnknownAnnotation`] if no constructor is
    /// registered for its kind, or with the constructor's own error.
    pub fn resolve(&self, annotation: Arc<DynamicAnnotation>) -> Result<BoxedRule<I>, RuleError> {
        let constructor = self
            .constructors
            .get(annotation.kind())
            .cloned()
            .ok_or_else(|| RuleError::UnknownAnnotation {
                kind: annotation.kind().to_owned(),
            })?;

        tracing::debug!(annotation_kind = annotation.kind(), "resolving rule");
        (*constructor)(annotation)
    }

    /// Build rules for every annotation, stopping at the first failure.
    pub fn resolve_all<T>(&self, annotations: T) -> Result<Vec<BoxedRule<I>>, RuleError>
    where
        T: IntoIterator<Item = Arc<DynamicAnnotation>>,
    {
        annotations
            .into_iter()
            .map(|annotation| self.resolve(annotation))
            .collect()
    }

    /// Check if a constructor is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: &str) -> bool {
        self.constructors.contains_key(kind)
    }

    /// Remove the constructor for `kind`. Returns whether one was registered.
    pub fn remove(&mut self, kind: &str) -> bool {
        self.constructors.remove(kind).is_some()
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }

    /// All registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.constructors.keys().cloned().collect();
        kinds.sort_unstable();
        kinds
    }
}

impl RuleRegistry<str> {
    /// Registry with every built-in text rule.
    #[must_use]
    pub fn text() -> Self {
        let mut registry = Self::new();
        registry.register_rule::<NotEmptyRule>();
        registry.register_rule::<LengthRule>();
        registry.register_rule::<PatternRule>();
        registry.register_rule::<EmailRule>();
        registry.register_rule::<UrlRule>();
        registry.register_rule::<DigitsRule>();
        registry.register_rule::<PasswordRule>();
        registry
    }
}

impl RuleRegistry<i64> {
    /// Registry with the built-in integer rules.
    #[must_use]
    pub fn integer() -> Self {
        let mut registry = Self::new();
        registry.register_rule::<MinRule>();
        registry.register_rule::<MaxRule>();
        registry
    }
}

impl RuleRegistry<f64> {
    /// Registry with the built-in decimal rules.
    #[must_use]
    pub fn decimal() -> Self {
        let mut registry = Self::new();
        registry.register_rule::<DecimalMinRule>();
        registry.register_rule::<DecimalMaxRule>();
        registry
    }
}

impl RuleRegistry<bool> {
    /// Registry with the built-in boolean rules.
    #[must_use]
    pub fn boolean() -> Self {
        let mut registry = Self::new();
        registry.register_rule::<AssertTrueRule>();
        registry.register_rule::<AssertFalseRule>();
        registry.register_rule::<CheckedRule>();
        registry
    }
}

impl<I: ?Sized + 'static> Default for RuleRegistry<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ?Sized + 'static> fmt::Debug for RuleRegistry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{MessageResolver, NoResources};

    struct Always(bool);

    impl Rule for Always {
        type Input = str;

        fn is_valid(&self, _value: Option<&str>) -> bool {
            self.0
        }

        fn message(&self, _resolver: &dyn MessageResolver) -> Result<String, RuleError> {
            Ok("always".to_string())
        }
    }

    #[test]
    fn register_and_resolve() {
        let mut registry = RuleRegistry::<str>::new();
        registry.register("always", |_| Ok(Box::new(Always(true)) as BoxedRule<str>));

        assert!(registry.contains("always"));
        assert_eq!(registry.len(), 1);

        let rule = registry
            .resolve(Arc::new(DynamicAnnotation::new("always")))
            .unwrap();
        assert!(rule.is_valid(None));
    }

    #[test]
    fn register_replaces_existing() {
        let mut registry = RuleRegistry::<str>::new();
        registry.register("always", |_| Ok(Box::new(Always(true)) as BoxedRule<str>));
        registry.register("always", |_| Ok(Box::new(Always(false)) as BoxedRule<str>));

        assert_eq!(registry.len(), 1);
        let rule = registry
            .resolve(Arc::new(DynamicAnnotation::new("always")))
            .unwrap();
        assert!(!rule.is_valid(Some("x")));
    }

    #[test]
    fn unknown_kind() {
        let registry = RuleRegistry::<str>::new();
        let err = registry
            .resolve(Arc::new(DynamicAnnotation::new("missing")))
            .err().unwrap();
        assert_eq!(
            err,
            RuleError::UnknownAnnotation {
                kind: "missing".into()
            }
        );
    }

    #[test]
    fn remove_kind() {
        let mut registry = RuleRegistry::<str>::text();
        assert!(registry.remove("email"));
        assert!(!registry.remove("email"));
        assert!(!registry.contains("email"));
    }

    #[test]
    fn builtin_kinds() {
        assert_eq!(
            RuleRegistry::<str>::text().kinds(),
            vec!["digits", "email", "length", "not_empty", "password", "pattern", "url"]
        );
        assert_eq!(RuleRegistry::<i64>::integer().kinds(), vec!["max", "min"]);
        assert_eq!(
            RuleRegistry::<f64>::decimal().kinds(),
            vec!["decimal_max", "decimal_min"]
        );
        assert_eq!(
            RuleRegistry::<bool>::boolean().kinds(),
            vec!["assert_false", "assert_true", "checked"]
        );
    }

    #[test]
    fn typed_rules_use_annotation_defaults() {
        let rule = RuleRegistry::<str>::text()
            .resolve(Arc::new(DynamicAnnotation::new("not_empty")))
            .unwrap();
        assert!(!rule.is_valid(Some("")));
        assert_eq!(rule.message(&NoResources).unwrap(), "This field is required");
    }

    #[test]
    fn rule_construction_errors_propagate() {
        let annotation = DynamicAnnotation::new("length")
            .with_attribute("min", 5)
            .with_attribute("max", 1);
        let err = RuleRegistry::<str>::text()
            .resolve(Arc::new(annotation))
            .err().unwrap();
        assert!(matches!(err, RuleError::InvalidArgument(_)));
    }
}
