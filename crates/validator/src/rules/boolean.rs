//! Boolean rules

crate::annotation! {
    /// Requires the value to be `true`.
    pub AssertTrue("assert_true") {}
    message = "Should be true";
}

crate::annotation_rule! {
    /// Passes when the value is present and `true`.
    pub AssertTrueRule(AssertTrue) for bool;
    rule(self, input) { input.copied() == Some(true) }
}

crate::annotation! {
    /// Requires the value to be `false`.
    pub AssertFalse("assert_false") {}
    message = "Should be false";
}

crate::annotation_rule! {
    /// Passes when the value is present and `false`.
    pub AssertFalseRule(AssertFalse) for bool;
    rule(self, input) { input.copied() == Some(false) }
}

crate::annotation! {
    /// Requires a checkable control to be in a given state.
    pub Checked("checked") {
        /// The required state.
        value("value"): bool = true,
    }
    message = "Required";
}

crate::annotation_rule! {
    /// Passes when the value is present and equals the annotation's `value`.
    pub CheckedRule(Checked) for bool;
    rule(self, input) { input.copied() == Some(self.annotation().value) }
}
