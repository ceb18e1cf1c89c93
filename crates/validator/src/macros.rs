//! Macros for declaring annotations and rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`annotation!`] — Declare a typed annotation (struct + defaults + `Annotation` impl)
//! - [`annotation_rule!`] — Declare a rule bound to an annotation (struct + `Rule` impl)
//!
//! Both expand to code that names `serde`; invoking crates need it as a
//! dependency.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil_validator::{annotation, annotation_rule};
//!
//! annotation! {
//!     /// Requires the text to start with a prefix.
//!     pub StartsWith("starts_with") {
//!         prefix("prefix"): String = String::new(),
//!     }
//!     message = "Unexpected prefix";
//! }
//!
//! annotation_rule! {
//!     pub StartsWithRule(StartsWith) for str;
//!     rule(self, input) { input.is_some_and(|s| s.starts_with(&self.annotation().prefix)) }
//! }
//! ```

// ============================================================================
// ANNOTATION MACRO
// ============================================================================

/// Declares a typed annotation.
///
/// Generates a struct with the listed fields plus `message` and
/// `message_res_id`, a `Default` impl using the listed defaults (the
/// message defaults to the given literal, the resource id to
/// [`NO_MESSAGE_RES_ID`](crate::foundation::NO_MESSAGE_RES_ID)), serde
/// support with camelCase names (unknown attributes are rejected), and the `Annotation` /
/// `DeclaredAnnotation` impls. Each field is exposed as an attribute under
/// the quoted name.
///
/// ```rust,ignore
/// annotation! {
///     pub Length("length") {
///         min("min"): i32 = 0,
///         max("max"): i32 = i32::MAX,
///     }
///     message = "Invalid length";
/// }
/// ```
#[macro_export]
macro_rules! annotation {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($kind:literal) {
            $(
                $(#[$fmeta:meta])*
                $field:ident($attr:literal): $fty:ty = $default:expr
            ),* $(,)?
        }
        message = $message:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default, deny_unknown_fields)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $fty,
            )*
            /// Literal failure message, used while `message_res_id` is unset.
            pub message: String,
            /// Resource id of a localized failure message, `-1` when unset.
            pub message_res_id: i32,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                    message: String::from($message),
                    message_res_id: $crate::foundation::NO_MESSAGE_RES_ID,
                }
            }
        }

        impl $name {
            /// Message used when none is given.
            pub const DEFAULT_MESSAGE: &'static str = $message;

            /// Replaces the literal failure message.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.message = message.into();
                self
            }

            /// Sets the resource id of a localized failure message.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_message_res_id(mut self, id: i32) -> Self {
                self.message_res_id = id;
                self
            }
        }

        impl $crate::foundation::Annotation for $name {
            fn kind(&self) -> &str {
                $kind
            }

            fn attribute(&self, name: &str) -> Option<$crate::foundation::AttributeValue<'_>> {
                #[allow(unused_imports)]
                use $crate::foundation::ToAttribute as _;

                match name {
                    $($attr => Some(self.$field.to_attribute()),)*
                    $crate::foundation::MESSAGE => Some(self.message.to_attribute()),
                    $crate::foundation::MESSAGE_RES_ID => Some(self.message_res_id.to_attribute()),
                    _ => None,
                }
            }

            fn message_res_id(&self) -> Result<i32, $crate::foundation::ReflectionError> {
                Ok(self.message_res_id)
            }

            fn message(
                &self,
            ) -> Result<::std::borrow::Cow<'_, str>, $crate::foundation::ReflectionError> {
                Ok(::std::borrow::Cow::Borrowed(self.message.as_str()))
            }
        }

        impl $crate::foundation::DeclaredAnnotation for $name {
            const KIND: &'static str = $kind;
        }
    };
}

// ============================================================================
// ANNOTATION RULE MACRO
// ============================================================================

/// Declares a rule bound to an annotation.
///
/// Generates the struct (holding an
/// [`AnnotationBinding`](crate::foundation::AnnotationBinding)), a `new`
/// constructor that rejects an absent annotation, an inherent
/// `annotation()` accessor, and the `Rule` / `AnnotationRule` impls. The
/// predicate receives the value as `Option<&Input>`.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// ```rust,ignore
/// annotation_rule! {
///     /// Passes when the box is ticked.
///     pub AssertTrueRule(AssertTrue) for bool;
///     rule(self, input) { input.copied() == Some(true) }
/// }
/// ```
#[macro_export]
macro_rules! annotation_rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident($annotation:ty) for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            binding: $crate::foundation::AnnotationBinding<$annotation>,
        }

        impl $name {
            /// Binds a new rule to `annotation`.
            pub fn new(
                annotation: Option<::std::sync::Arc<$annotation>>,
            ) -> Result<Self, $crate::foundation::RuleError> {
                Ok(Self {
                    binding: $crate::foundation::AnnotationBinding::new(annotation)?,
                })
            }

            /// The bound annotation.
            pub fn annotation(&self) -> &$annotation {
                self.binding.annotation()
            }
        }

        impl $crate::foundation::Rule for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn is_valid(&$self_, $inp: Option<&Self::Input>) -> bool $rule

            fn message(
                &self,
                resolver: &dyn $crate::foundation::MessageResolver,
            ) -> Result<String, $crate::foundation::RuleError> {
                self.binding.message(resolver)
            }
        }

        impl $crate::foundation::AnnotationRule for $name {
            type Annotation = $annotation;

            fn from_annotation(
                annotation: Option<::std::sync::Arc<$annotation>>,
            ) -> Result<Self, $crate::foundation::RuleError> {
                Self::new(annotation)
            }

            fn binding(&self) -> &$crate::foundation::AnnotationBinding<$annotation> {
                &self.binding
            }
        }
    };
}
