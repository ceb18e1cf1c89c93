//! Rules configured from JSON through the registry.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use vigil_validator::prelude::*;
use vigil_validator::{annotation, annotation_rule};

annotation! {
    /// Requires text to start with a prefix.
    pub StartsWith("starts_with") {
        /// Required prefix.
        prefix("prefix"): String = String::new(),
    }
    message = "Unexpected prefix";
}

annotation_rule! {
    pub StartsWithRule(StartsWith) for str;
    rule(self, input) { input.is_some_and(|text| text.starts_with(&self.annotation().prefix)) }
}

#[fixture]
fn text() -> RuleRegistry<str> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    RuleRegistry::<str>::text()
}

fn annotation(json: &str) -> Arc<DynamicAnnotation> {
    Arc::new(DynamicAnnotation::from_json(json).unwrap())
}

#[rstest]
#[case::not_empty(r#"{"kind":"not_empty","trim":true}"#, "   ", false)]
#[case::length_short(r#"{"kind":"length","min":3,"max":5}"#, "al", false)]
#[case::length_ok(r#"{"kind":"length","min":3,"max":5}"#, "alice", true)]
#[case::pattern(r#"{"kind":"pattern","regex":"[a-z]+","caseSensitive":false}"#, "ABC", true)]
#[case::pattern_partial(r#"{"kind":"pattern","regex":"[a-z]+"}"#, "abc1", false)]
#[case::email(r#"{"kind":"email"}"#, "ada@example.com", true)]
#[case::email_local(r#"{"kind":"email","allowLocal":true}"#, "root@localhost", true)]
#[case::url_scheme(r#"{"kind":"url","schemes":["https"]}"#, "http://example.com", false)]
#[case::url_fragment(r#"{"kind":"url","allowFragments":false}"#, "https://example.com/#top", false)]
#[case::digits(r#"{"kind":"digits","integer":3,"fraction":2}"#, "123.45", true)]
#[case::digits_fraction(r#"{"kind":"digits","integer":3,"fraction":2}"#, "1.234", false)]
#[case::password(r#"{"kind":"password","min":8,"scheme":"alpha_numeric"}"#, "hunter22", true)]
#[case::password_scheme(
    r#"{"kind":"password","min":8,"scheme":"alpha_numeric"}"#,
    "hunterrr",
    false
)]
fn text_rules_from_json(
    text: RuleRegistry<str>,
    #[case] json: &str,
    #[case] value: &str,
    #[case] expected: bool,
) {
    let rule = text.resolve(annotation(json)).unwrap();

    assert_eq!(rule.is_valid(Some(value)), expected);
    assert!(!rule.is_valid(None));
}

#[rstest]
fn messages_come_from_json(text: RuleRegistry<str>) {
    let resources = ResourceTable::from_json_str(r#"{"10": "Pick a longer name"}"#).unwrap();
    let literal = text
        .resolve(annotation(r#"{"kind":"length","min":3,"message":"Too short"}"#))
        .unwrap();
    let localized = text
        .resolve(annotation(r#"{"kind":"length","min":3,"messageResId":10}"#))
        .unwrap();

    assert_eq!(literal.message(&resources).unwrap(), "Too short");
    assert_eq!(localized.message(&resources).unwrap(), "Pick a longer name");
}

#[rstest]
fn resolve_all_stops_at_first_failure(text: RuleRegistry<str>) {
    let rules = text
        .resolve_all([
            annotation(r#"{"kind":"not_empty"}"#),
            annotation(r#"{"kind":"email"}"#),
        ])
        .unwrap();
    assert_eq!(rules.len(), 2);

    let err = text
        .resolve_all([
            annotation(r#"{"kind":"not_empty"}"#),
            annotation(r#"{"kind":"credit_card"}"#),
        ])
        .err().unwrap();
    assert_eq!(
        err,
        RuleError::UnknownAnnotation {
            kind: "credit_card".into()
        }
    );
}

#[rstest]
#[case::invalid_regex(r#"{"kind":"pattern","regex":"("}"#)]
#[case::empty_regex(r#"{"kind":"pattern"}"#)]
#[case::inverted_length(r#"{"kind":"length","min":9,"max":1}"#)]
#[case::negative_digits(r#"{"kind":"digits","integer":-1}"#)]
fn invalid_content_is_rejected(text: RuleRegistry<str>, #[case] json: &str) {
    let err = text.resolve(annotation(json)).err().unwrap();

    assert!(matches!(err, RuleError::InvalidArgument(_)), "unexpected error: {err}");
}

#[rstest]
fn malformed_attributes_are_rejected(text: RuleRegistry<str>) {
    let err = text
        .resolve(annotation(r#"{"kind":"length","min":"three"}"#))
        .err().unwrap();

    assert!(matches!(err, RuleError::MalformedAnnotation { ref kind, .. } if kind == "length"));
}

#[rstest]
#[case::string_id(r#"{"kind":"not_empty","messageResId":"42","message":"Required"}"#)]
#[case::wide_id(r#"{"kind":"not_empty","messageResId":4294967296,"message":"Required"}"#)]
#[case::boolean_id(r#"{"kind":"not_empty","messageResId":true,"message":"Required"}"#)]
fn unreadable_resource_id_counts_as_unset(text: RuleRegistry<str>, #[case] json: &str) {
    let rule = text.resolve(annotation(json)).unwrap();

    assert_eq!(rule.message(&NoResources).unwrap(), "Required");
}

#[rstest]
fn misspelled_attributes_are_rejected(text: RuleRegistry<str>) {
    let err = text
        .resolve(annotation(r#"{"kind":"length","mni":3}"#))
        .err().unwrap();

    match err {
        RuleError::MalformedAnnotation { kind, reason } => {
            assert_eq!(kind, "length");
            assert!(reason.contains("mni"), "unexpected reason: {reason}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[rstest]
fn custom_rules_join_the_catalog(mut text: RuleRegistry<str>) {
    text.register_rule::<StartsWithRule>();
    assert!(text.contains("starts_with"));

    let rule = text
        .resolve(annotation(r#"{"kind":"starts_with","prefix":"+44"}"#))
        .unwrap();
    assert!(rule.is_valid(Some("+44 20 7946 0000")));
    assert!(!rule.is_valid(Some("020 7946 0000")));
    assert_eq!(rule.message(&NoResources).unwrap(), "Unexpected prefix");
}

#[test]
fn closures_can_read_attributes_directly() {
    let mut registry = RuleRegistry::<str>::new();
    registry.register("repeated_x", |annotation: Arc<DynamicAnnotation>| {
        let limit: i32 = AttributeReader::read(&*annotation, "limit")?;
        let rule = StartsWithRule::new(Some(Arc::new(StartsWith {
            prefix: "x".repeat(usize::try_from(limit).unwrap_or_default()),
            ..StartsWith::default()
        })))?;
        Ok(Box::new(rule) as BoxedRule<str>)
    });

    let rule = registry
        .resolve(annotation(r#"{"kind":"repeated_x","limit":2}"#))
        .unwrap();
    assert!(rule.is_valid(Some("xxy")));

    let err = registry
        .resolve(annotation(r#"{"kind":"repeated_x"}"#))
        .err().unwrap();
    assert!(err.is_reflection_failure());
}

#[test]
fn typed_registries() {
    let adult = RuleRegistry::<i64>::integer()
        .resolve(annotation(r#"{"kind":"min","value":18}"#))
        .unwrap();
    assert!(adult.is_valid(Some(&18)));
    assert!(!adult.is_valid(Some(&17)));

    let ratio = RuleRegistry::<f64>::decimal()
        .resolve(annotation(r#"{"kind":"decimal_max","value":1.0,"inclusive":false}"#))
        .unwrap();
    assert!(ratio.is_valid(Some(&0.5)));
    assert!(!ratio.is_valid(Some(&1.0)));

    let terms = RuleRegistry::<bool>::boolean()
        .resolve(annotation(r#"{"kind":"assert_true","message":"Accept the terms"}"#))
        .unwrap();
    assert!(!terms.is_valid(Some(&false)));
    assert_eq!(terms.message(&NoResources).unwrap(), "Accept the terms");
}

#[test]
fn resource_table_from_file() {
    let path = std::env::temp_dir().join(format!("vigil-strings-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"42": "Field is required"}"#).unwrap();

    let table = ResourceTable::from_path(&path);
    std::fs::remove_file(&path).unwrap();

    let rule = RuleRegistry::<str>::text()
        .resolve(annotation(r#"{"kind":"not_empty","messageResId":42}"#))
        .unwrap();
    assert_eq!(rule.message(&table.unwrap()).unwrap(), "Field is required");
}
