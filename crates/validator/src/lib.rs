//! # vigil-validator
//!
//! Declarative field validation: fields carry annotations, annotations are
//! resolved into stateless rules, and rules judge values and explain
//! failures.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vigil_validator::prelude::*;
//!
//! let rule = NotEmptyRule::new(Some(Arc::new(NotEmpty::default())))?;
//! assert!(!rule.is_valid(Some("")));
//! assert_eq!(rule.message(&NoResources)?, "This field is required");
//! ```
//!
//! ## Messages
//!
//! Every annotation has a literal `message` and a `message_res_id`. When the
//! resource id is set (anything but `-1`) the message comes from a
//! [`MessageResolver`](foundation::MessageResolver) such as a
//! [`ResourceTable`](resources::ResourceTable); otherwise the literal is used.
//!
//! ## Creating Rules
//!
//! Use the [`annotation!`] and [`annotation_rule!`] macros for the common
//! case, or implement [`Rule`](foundation::Rule) and
//! [`AnnotationRule`](foundation::AnnotationRule) by hand when a rule needs
//! construction-time work (see [`PatternRule`](rules::PatternRule)).
//!
//! ## Built-in Rules
//!
//! - **Text**: [`NotEmptyRule`](rules::NotEmptyRule), [`LengthRule`](rules::LengthRule),
//!   [`PatternRule`](rules::PatternRule), [`EmailRule`](rules::EmailRule),
//!   [`UrlRule`](rules::UrlRule), [`DigitsRule`](rules::DigitsRule),
//!   [`PasswordRule`](rules::PasswordRule)
//! - **Numeric**: [`MinRule`](rules::MinRule), [`MaxRule`](rules::MaxRule),
//!   [`DecimalMinRule`](rules::DecimalMinRule), [`DecimalMaxRule`](rules::DecimalMaxRule)
//! - **Boolean**: [`AssertTrueRule`](rules::AssertTrueRule),
//!   [`AssertFalseRule`](rules::AssertFalseRule), [`CheckedRule`](rules::CheckedRule)

pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod resources;
pub mod rules;
