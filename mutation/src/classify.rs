//! Mutability classification.
//!
//! Decides which declared constraint of a parameter can be violated. The
//! order of the checks is the dispatch priority: an enum-constrained leaf
//! escapes its allowed set even when it also carries length or numeric
//! bounds.

use tamper_core::{Parameter, ParameterKind};

/// The constraint a mutation will violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolableConstraint {
    /// Membership in the allowed value set.
    Enumeration,
    /// `minLength` / `maxLength` of a string.
    Length,
    /// `minimum` / `maximum` of a number.
    Bounds,
}

/// Pick the constraint to violate, or `None` when the parameter has none.
pub fn violable_constraint(parameter: &Parameter) -> Option<ViolableConstraint> {
    // Nothing to violate without a value
    if !parameter.has_value() {
        return None;
    }

    if parameter.is_leaf() && parameter.is_enum() {
        return Some(ViolableConstraint::Enumeration);
    }

    match &parameter.kind {
        // A minimum length of zero excludes nothing
        ParameterKind::String(c) => {
            let violable = c.max_length.is_some() || c.min_length.is_some_and(|min| min > 0);
            violable.then_some(ViolableConstraint::Length)
        }
        ParameterKind::Number(c) => {
            let violable = c.minimum.is_some() || c.maximum.is_some();
            violable.then_some(ViolableConstraint::Bounds)
        }
        ParameterKind::Boolean | ParameterKind::Object { .. } | ParameterKind::Array { .. } => None,
    }
}

/// Returns true if `parameter` declares a constraint that can be violated.
pub fn is_mutable(parameter: &Parameter) -> bool {
    violable_constraint(parameter).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tamper_core::Value;

    fn letters() -> Vec<Value> {
        vec![Value::from("A"), Value::from("B"), Value::from("C")]
    }

    #[test]
    fn test_null_value_is_never_mutable() {
        let p = Parameter::string("code")
            .with_max_length(5)
            .with_enum_values(letters());

        assert_eq!(violable_constraint(&p), None);
        assert!(!is_mutable(&p));
    }

    #[test]
    fn test_enum_takes_priority_over_bounds() {
        let s = Parameter::string("code")
            .with_max_length(5)
            .with_enum_values(letters())
            .with_value("A");
        let n = Parameter::integer("level")
            .with_minimum(1.0)
            .with_enum_values(vec![Value::Int(1), Value::Int(2)])
            .with_value(1i64);

        assert_eq!(violable_constraint(&s), Some(ViolableConstraint::Enumeration));
        assert_eq!(violable_constraint(&n), Some(ViolableConstraint::Enumeration));
    }

    #[test]
    fn test_boolean_enum_is_mutable() {
        let p = Parameter::boolean("flag")
            .with_enum_values(vec![Value::Bool(true)])
            .with_value(true);

        assert_eq!(violable_constraint(&p), Some(ViolableConstraint::Enumeration));
    }

    #[test]
    fn test_string_length_rules() {
        let max_only = Parameter::string("a").with_max_length(0).with_value("");
        let min_zero = Parameter::string("b").with_min_length(0).with_value("x");
        let min_one = Parameter::string("c").with_min_length(1).with_value("x");
        let none = Parameter::string("d").with_value("x");

        assert_eq!(violable_constraint(&max_only), Some(ViolableConstraint::Length));
        assert_eq!(violable_constraint(&min_zero), None);
        assert_eq!(violable_constraint(&min_one), Some(ViolableConstraint::Length));
        assert_eq!(violable_constraint(&none), None);
    }

    #[test]
    fn test_number_bound_rules() {
        let min_only = Parameter::number("a").with_minimum(0.0).with_value(1.0);
        let max_only = Parameter::integer("b").with_maximum(-4.0).with_value(-5i64);
        let none = Parameter::number("c").with_value(1.0);

        assert_eq!(violable_constraint(&min_only), Some(ViolableConstraint::Bounds));
        assert_eq!(violable_constraint(&max_only), Some(ViolableConstraint::Bounds));
        assert_eq!(violable_constraint(&none), None);
    }

    #[test]
    fn test_other_kinds_are_not_mutable() {
        let flag = Parameter::boolean("flag").with_value(true);
        let body = Parameter::object("body", vec![Parameter::string("x").with_max_length(1)]);

        assert!(!is_mutable(&flag));
        assert!(!is_mutable(&body));
    }

    #[test]
    fn test_classification_is_side_effect_free() {
        let p = Parameter::string("code").with_max_length(3).with_value("abc");
        let before = p.clone();

        let first = violable_constraint(&p);
        let second = violable_constraint(&p);

        assert_eq!(first, second);
        assert_eq!(p, before);
    }
}
