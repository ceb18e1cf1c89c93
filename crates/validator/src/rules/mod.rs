//! Built-in annotations and their rules
//!
//! Every annotation here is paired with exactly one rule. Rules fail an
//! absent value; wrap them at the orchestration layer if a field is optional.
//!
//! # Categories
//!
//! - **Text**: presence, length, regex, email, URL, digits, password
//! - **Numeric**: integer and decimal bounds
//! - **Boolean**: assertions and checkable controls
//!
//! # Examples
//!
//! ```rust,ignore
//! use vigil_validator::prelude::*;
//!
//! let rule = LengthRule::new(Some(Arc::new(Length { min: 3, max: 20, ..Length::default() })))?;
//! assert!(rule.is_valid(Some("alice")));
//! ```

// Text rules
pub mod format;
pub mod password;
pub mod text;

// Numeric rules
pub mod numeric;

// Boolean rules
pub mod boolean;

// ============================================================================
// RE-EXPORTS: Text rules
// ============================================================================

pub use format::{Digits, DigitsRule, Email, EmailRule, Pattern, PatternRule, Url, UrlRule};
pub use password::{Password, PasswordRule, PasswordScheme};
pub use text::{Length, LengthRule, NotEmpty, NotEmptyRule};

// ============================================================================
// RE-EXPORTS: Numeric rules
// ============================================================================

pub use numeric::{
    DecimalMax, DecimalMaxRule, DecimalMin, DecimalMinRule, Max, MaxRule, Min, MinRule,
};

// ============================================================================
// RE-EXPORTS: Boolean rules
// ============================================================================

pub use boolean::{
    AssertFalse, AssertFalseRule, AssertTrue, AssertTrueRule, Checked, CheckedRule,
};
