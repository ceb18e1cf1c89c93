//! Numeric bound rules
//!
//! Integer bounds judge `i64` values; decimal bounds judge `f64` values and
//! treat `NaN` and infinities as failures.

crate::annotation! {
    /// Lower bound for an integer, inclusive.
    pub Min("min") {
        /// Smallest accepted value.
        value("value"): i64 = 0,
    }
    message = "Value is too small";
}

crate::annotation_rule! {
    /// Passes when a present integer is `>= value`.
    pub MinRule(Min) for i64;
    rule(self, input) { input.is_some_and(|n| *n >= self.annotation().value) }
}

crate::annotation! {
    /// Upper bound for an integer, inclusive.
    pub Max("max") {
        /// Largest accepted value.
        value("value"): i64 = 0,
    }
    message = "Value is too large";
}

crate::annotation_rule! {
    /// Passes when a present integer is `<= value`.
    pub MaxRule(Max) for i64;
    rule(self, input) { input.is_some_and(|n| *n <= self.annotation().value) }
}

crate::annotation! {
    /// Lower bound for a decimal number.
    pub DecimalMin("decimal_min") {
        /// The bound.
        value("value"): f64 = 0.0,
        /// Whether `value` itself is accepted.
        inclusive("inclusive"): bool = true,
    }
    message = "Value is too small";
}

crate::annotation_rule! {
    /// Passes when a present, finite number is above the bound.
    pub DecimalMinRule(DecimalMin) for f64;
    rule(self, input) {
        let annotation = self.annotation();
        input.is_some_and(|n| {
            n.is_finite()
                && if annotation.inclusive {
                    *n >= annotation.value
                } else {
                    *n > annotation.value
                }
        })
    }
}

crate::annotation! {
    /// Upper bound for a decimal number.
    pub DecimalMax("decimal_max") {
        /// The bound.
        value("value"): f64 = 0.0,
        /// Whether `value` itself is accepted.
        inclusive("inclusive"): bool = true,
    }
    message = "Value is too large";
}

crate::annotation_rule! {
    /// Passes when a present, finite number is below the bound.
    pub DecimalMaxRule(DecimalMax) for f64;
    rule(self, input) {
        let annotation = self.annotation();
        input.is_some_and(|n| {
            n.is_finite()
                && if annotation.inclusive {
                    *n <= annotation.value
                } else {
                    *n < annotation.value
                }
        })
    }
}
