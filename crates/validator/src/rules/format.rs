//! Text format rules: regex, email, URL and digit counts

use std::sync::{Arc, LazyLock};

use regex::{Regex, RegexBuilder};

use crate::foundation::{AnnotationBinding, AnnotationRule, MessageResolver, Rule, RuleError};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

// Same as EMAIL_REGEX but the domain may be a single label, e.g. `root@localhost`.
static LOCAL_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

// ============================================================================
// PATTERN
// ============================================================================

crate::annotation! {
    /// Requires the whole text to match a regular expression.
    pub Pattern("pattern") {
        /// The expression. Implicitly anchored at both ends.
        regex("regex"): String = String::new(),
        /// Match letters case-sensitively.
        case_sensitive("caseSensitive"): bool = true,
    }
    message = "Invalid format";
}

/// Passes when present text matches the annotation's expression in full.
///
/// The expression is compiled once, at construction. An empty or invalid
/// expression is rejected there.
#[derive(Debug, Clone)]
pub struct PatternRule {
    binding: AnnotationBinding<Pattern>,
    compiled: Regex,
}

impl PatternRule {
    /// Binds a new rule to `annotation` and compiles its expression.
    pub fn new(annotation: Option<Arc<Pattern>>) -> Result<Self, RuleError> {
        let binding = AnnotationBinding::new(annotation)?;
        let annotation = binding.annotation();
        if annotation.regex.is_empty() {
            return Err(RuleError::invalid_argument("pattern: regex must not be empty"));
        }

        let compiled = RegexBuilder::new(&format!("^(?:{})$", annotation.regex))
            .case_insensitive(!annotation.case_sensitive)
            .build()
            .map_err(|err| RuleError::invalid_argument(format!("pattern: {err}")))?;

        Ok(Self { binding, compiled })
    }

    /// The bound annotation.
    pub fn annotation(&self) -> &Pattern {
        self.binding.annotation()
    }
}

impl Rule for PatternRule {
    type Input = str;

    fn is_valid(&self, value: Option<&str>) -> bool {
        value.is_some_and(|text| self.compiled.is_match(text))
    }

    fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError> {
        self.binding.message(resolver)
    }
}

impl AnnotationRule for PatternRule {
    type Annotation = Pattern;

    fn from_annotation(annotation: Option<Arc<Pattern>>) -> Result<Self, RuleError> {
        Self::new(annotation)
    }

    fn binding(&self) -> &AnnotationBinding<Pattern> {
        &self.binding
    }
}

// ============================================================================
// EMAIL
// ============================================================================

crate::annotation! {
    /// Requires an email address.
    pub Email("email") {
        /// Accept single-label domains such as `localhost`.
        allow_local("allowLocal"): bool = false,
    }
    message = "Invalid email";
}

crate::annotation_rule! {
    /// Passes when present text is shaped like an email address.
    pub EmailRule(Email) for str;
    rule(self, input) {
        let regex = if self.annotation().allow_local {
            &*LOCAL_EMAIL_REGEX
        } else {
            &*EMAIL_REGEX
        };
        input.is_some_and(|text| regex.is_match(text))
    }
}

// ============================================================================
// URL
// ============================================================================

crate::annotation! {
    /// Requires an absolute URL.
    pub Url("url") {
        /// Accepted schemes, compared case-insensitively.
        schemes("schemes"): Vec<String> = vec![
            String::from("http"),
            String::from("https"),
            String::from("ftp"),
        ],
        /// Accept URLs carrying a `#fragment`.
        allow_fragments("allowFragments"): bool = true,
    }
    message = "Invalid URL";
}

crate::annotation_rule! {
    /// Passes when present text parses as a URL with a host and an accepted scheme.
    pub UrlRule(Url) for str;
    rule(self, input) {
        let Some(Ok(parsed)) = input.map(url::Url::parse) else {
            return false;
        };
        let annotation = self.annotation();
        let scheme_ok = annotation
            .schemes
            .iter()
            .any(|scheme| scheme.eq_ignore_ascii_case(parsed.scheme()));
        let fragment_ok = annotation.allow_fragments || parsed.fragment().is_none();
        scheme_ok && fragment_ok && parsed.has_host()
    }
}

// ============================================================================
// DIGITS
// ============================================================================

crate::annotation! {
    /// Bounds the number of integral and fractional digits of a decimal number.
    pub Digits("digits") {
        /// Maximum integral digits.
        integer("integer"): i32 = 0,
        /// Maximum fractional digits.
        fraction("fraction"): i32 = 0,
    }
    message = "Should be a number";
}

/// Passes when present text is a decimal number within the digit limits.
///
/// A leading `+` or `-` is allowed; grouping separators and exponents are not.
/// Construction fails if either limit is negative.
#[derive(Debug, Clone)]
pub struct DigitsRule {
    binding: AnnotationBinding<Digits>,
}

impl DigitsRule {
    /// Binds a new rule to `annotation`.
    pub fn new(annotation: Option<Arc<Digits>>) -> Result<Self, RuleError> {
        let binding = AnnotationBinding::new(annotation)?;
        let Digits {
            integer, fraction, ..
        } = *binding.annotation();
        if integer < 0 || fraction < 0 {
            return Err(RuleError::invalid_argument(format!(
                "digits: limits must not be negative (integer {integer}, fraction {fraction})"
            )));
        }
        Ok(Self { binding })
    }

    /// The bound annotation.
    pub fn annotation(&self) -> &Digits {
        self.binding.annotation()
    }
}

/// Splits a decimal number into its integral and fractional digit counts.
fn count_digits(text: &str) -> Option<(usize, usize)> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integral, fractional) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integral.is_empty() && fractional.is_empty())
        || !all_digits(integral)
        || !all_digits(fractional)
    {
        return None;
    }

    Some((integral.len(), fractional.len()))
}

impl Rule for DigitsRule {
    type Input = str;

    fn is_valid(&self, value: Option<&str>) -> bool {
        let Some((integral, fractional)) = value.and_then(count_digits) else {
            return false;
        };
        let annotation = self.annotation();
        i64::try_from(integral).is_ok_and(|n| n <= i64::from(annotation.integer))
            && i64::try_from(fractional).is_ok_and(|n| n <= i64::from(annotation.fraction))
    }

    fn message(&self, resolver: &dyn MessageResolver) -> Result<String, RuleError> {
        self.binding.message(resolver)
    }
}

impl AnnotationRule for DigitsRule {
    type Annotation = Digits;

    fn from_annotation(annotation: Option<Arc<Digits>>) -> Result<Self, RuleError> {
        Self::new(annotation)
    }

    fn binding(&self) -> &AnnotationBinding<Digits> {
        &self.binding
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(regex: &str, case_sensitive: bool) -> Result<PatternRule, RuleError> {
        PatternRule::new(Some(Arc::new(Pattern {
            regex: regex.to_string(),
            case_sensitive,
            ..Pattern::default()
        })))
    }

    #[test]
    fn test_pattern_matches_whole_value() {
        let rule = pattern(r"\d{3}-\d{4}", true).unwrap();
        assert!(rule.is_valid(Some("123-4567")));
        assert!(!rule.is_valid(Some("x123-4567")));
        assert!(!rule.is_valid(Some("123-45678")));
        assert!(!rule.is_valid(None));
    }

    #[test]
    fn test_pattern_alternation_is_anchored() {
        let rule = pattern("cat|dog", true).unwrap();
        assert!(rule.is_valid(Some("dog")));
        assert!(!rule.is_valid(Some("catdog")));
    }

    #[test]
    fn test_pattern_case_insensitive() {
        let rule = pattern("[a-z]+", false).unwrap();
        assert!(rule.is_valid(Some("HeLLo")));
        assert!(!pattern("[a-z]+", true).unwrap().is_valid(Some("HeLLo")));
    }

    #[test]
    fn test_pattern_rejects_bad_expressions() {
        assert!(matches!(pattern("", true), Err(RuleError::InvalidArgument(_))));
        assert!(matches!(pattern("(unclosed", true), Err(RuleError::InvalidArgument(_))));
    }

    #[test]
    fn test_email() {
        let rule = EmailRule::new(Some(Arc::new(Email::default()))).unwrap();
        assert!(rule.is_valid(Some("user@example.com")));
        assert!(!rule.is_valid(Some("user@localhost")));
        assert!(!rule.is_valid(Some("invalid")));
        assert!(!rule.is_valid(Some("@example.com")));
        assert!(!rule.is_valid(Some("user@")));
        assert!(!rule.is_valid(None));
    }

    #[test]
    fn test_email_allow_local() {
        let annotation = Email {
            allow_local: true,
            ..Email::default()
        };
        let rule = EmailRule::new(Some(Arc::new(annotation))).unwrap();
        assert!(rule.is_valid(Some("user@localhost")));
        assert!(rule.is_valid(Some("user@example.com")));
    }

    #[test]
    fn test_url_default_schemes() {
        let rule = UrlRule::new(Some(Arc::new(Url::default()))).unwrap();
        assert!(rule.is_valid(Some("http://example.com")));
        assert!(rule.is_valid(Some("https://example.com/path?q=1#top")));
        assert!(rule.is_valid(Some("ftp://files.example.com")));
        assert!(!rule.is_valid(Some("mailto:user@example.com")));
        assert!(!rule.is_valid(Some("not a url")));
        assert!(!rule.is_valid(None));
    }

    #[test]
    fn test_url_restrictions() {
        let annotation = Url {
            schemes: vec!["HTTPS".to_string()],
            allow_fragments: false,
            ..Url::default()
        };
        let rule = UrlRule::new(Some(Arc::new(annotation))).unwrap();
        assert!(rule.is_valid(Some("https://example.com")));
        assert!(!rule.is_valid(Some("http://example.com")));
        assert!(!rule.is_valid(Some("https://example.com/#section")));
    }

    #[test]
    fn test_count_digits() {
        assert_eq!(count_digits("123"), Some((3, 0)));
        assert_eq!(count_digits("-12.50"), Some((2, 2)));
        assert_eq!(count_digits("+.5"), Some((0, 1)));
        assert_eq!(count_digits("7."), Some((1, 0)));
        assert_eq!(count_digits("."), None);
        assert_eq!(count_digits(""), None);
        assert_eq!(count_digits("1,000"), None);
        assert_eq!(count_digits("1e5"), None);
    }

    #[test]
    fn test_digits() {
        let annotation = Digits {
            integer: 3,
            fraction: 2,
            ..Digits::default()
        };
        let rule = DigitsRule::new(Some(Arc::new(annotation))).unwrap();
        assert!(rule.is_valid(Some("999.99")));
        assert!(rule.is_valid(Some("-1")));
        assert!(!rule.is_valid(Some("1000")));
        assert!(!rule.is_valid(Some("1.234")));
        assert!(!rule.is_valid(Some("abc")));
        assert!(!rule.is_valid(None));
    }

    #[test]
    fn test_digits_rejects_negative_limits() {
        let annotation = Digits {
            integer: -1,
            ..Digits::default()
        };
        assert!(matches!(
            DigitsRule::new(Some(Arc::new(annotation))),
            Err(RuleError::InvalidArgument(_))
        ));
    }
}
