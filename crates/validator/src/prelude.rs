//! Prelude module for convenient imports.
//!
//! Provides a single `use vigil_validator::prelude::*;` import that brings
//! in the rule traits, annotation types, built-in rules and the registry.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil_validator::prelude::*;
//!
//! let registry = RuleRegistry::<str>::text();
//! let rule = registry.resolve(Arc::new(DynamicAnnotation::new("email")))?;
//! ```

pub use std::sync::Arc;

// ============================================================================
// FOUNDATION: Core traits, annotations, errors
// ============================================================================

pub use crate::foundation::{
    Annotation, AnnotationBinding, AnnotationRule, AttributeReader, AttributeValue,
    DeclaredAnnotation, DynamicAnnotation, MessageResolver, NO_MESSAGE_RES_ID, NoResources,
    ReflectionError, Rule, RuleError, check,
};

// ============================================================================
// RULES: All built-in annotations and rules
// ============================================================================

pub use crate::rules::*;

// ============================================================================
// REGISTRY & RESOURCES
// ============================================================================

pub use crate::registry::{BoxedRule, RuleRegistry};
pub use crate::resources::{ResourceError, ResourceTable};
