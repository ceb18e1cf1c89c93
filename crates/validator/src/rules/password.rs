//! Password strength rule

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::foundation::{AttributeValue, ToAttribute};

/// Character classes a password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordScheme {
    /// Anything non-empty.
    #[default]
    Any,
    /// Letters only.
    Alpha,
    /// Lowercase and uppercase letters.
    AlphaMixedCase,
    /// ASCII digits only.
    Numeric,
    /// At least one letter and one digit.
    AlphaNumeric,
    /// Lowercase, uppercase and a digit.
    AlphaNumericMixedCase,
    /// A letter, a digit and a symbol.
    AlphaNumericSymbols,
    /// Lowercase, uppercase, a digit and a symbol.
    AlphaNumericMixedCaseSymbols,
}

impl PasswordScheme {
    /// The name used in serialized annotations.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Alpha => "alpha",
            Self::AlphaMixedCase => "alpha_mixed_case",
            Self::Numeric => "numeric",
            Self::AlphaNumeric => "alpha_numeric",
            Self::AlphaNumericMixedCase => "alpha_numeric_mixed_case",
            Self::AlphaNumericSymbols => "alpha_numeric_symbols",
            Self::AlphaNumericMixedCaseSymbols => "alpha_numeric_mixed_case_symbols",
        }
    }

    fn accepts(self, text: &str) -> bool {
        let classes = CharClasses::of(text);
        match self {
            Self::Any => !text.is_empty(),
            Self::Alpha => !text.is_empty() && text.chars().all(char::is_alphabetic),
            Self::AlphaMixedCase => classes.lower && classes.upper,
            Self::Numeric => !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()),
            Self::AlphaNumeric => classes.letter() && classes.digit,
            Self::AlphaNumericMixedCase => classes.lower && classes.upper && classes.digit,
            Self::AlphaNumericSymbols => classes.letter() && classes.digit && classes.symbol,
            Self::AlphaNumericMixedCaseSymbols => {
                classes.lower && classes.upper && classes.digit && classes.symbol
            }
        }
    }
}

impl ToAttribute for PasswordScheme {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::Str(Cow::Borrowed(self.as_str()))
    }
}

#[derive(Debug, Default)]
struct CharClasses {
    lower: bool,
    upper: bool,
    other_letter: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn of(text: &str) -> Self {
        let mut classes = Self::default();
        for c in text.chars() {
            if c.is_lowercase() {
                classes.lower = true;
            } else if c.is_uppercase() {
                classes.upper = true;
            } else if c.is_alphabetic() {
                classes.other_letter = true;
            } else if c.is_ascii_digit() {
                classes.digit = true;
            } else if c != '_' {
                classes.symbol = true;
            }
        }
        classes
    }

    fn letter(&self) -> bool {
        self.lower || self.upper || self.other_letter
    }
}

crate::annotation! {
    /// Requires a password of a minimum length following a character scheme.
    pub Password("password") {
        /// Minimum number of chars.
        min("min"): i32 = 6,
        /// Required character classes.
        scheme("scheme"): PasswordScheme = PasswordScheme::Any,
    }
    message = "Invalid password";
}

crate::annotation_rule! {
    /// Passes when a present password is long enough and satisfies its scheme.
    pub PasswordRule(Password) for str;
    rule(self, input) {
        let Some(text) = input else {
            return false;
        };
        let annotation = self.annotation();
        let long_enough = i64::try_from(text.chars().count())
            .is_ok_and(|len| len >= i64::from(annotation.min));
        long_enough && annotation.scheme.accepts(text)
    }
}
