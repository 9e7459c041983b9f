//! Parameter nodes and their declared constraints.
//!
//! A request is described as a tree of parameters. Leaves (strings,
//! numbers, booleans) hold a concrete `Value`; objects and arrays only
//! group other parameters. Constraints live on the kind, so a leaf can
//! never carry constraints that do not apply to it.

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};
use crate::value::Value;

/// Length bounds of a string parameter, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StringConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Representation of a numeric parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// Whole numbers only.
    Integer,
    /// Any real number.
    #[default]
    Float,
}

/// Value bounds of a numeric parameter, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    pub format: NumberFormat,
}

/// The closed set of parameter kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ParameterKind {
    /// String leaf.
    String(StringConstraints),
    /// Numeric leaf.
    Number(NumberConstraints),
    /// Boolean leaf.
    Boolean,
    /// Object with named properties.
    Object {
        #[serde(default)]
        properties: Vec<Parameter>,
    },
    /// Array with item parameters.
    Array {
        #[serde(default)]
        items: Vec<Parameter>,
    },
}

impl ParameterKind {
    /// Returns true for kinds that hold a scalar value directly.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            ParameterKind::String(_) | ParameterKind::Number(_) | ParameterKind::Boolean
        )
    }

    /// Returns the type name of this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterKind::String(_) => "string",
            ParameterKind::Number(c) if c.format == NumberFormat::Integer => "integer",
            ParameterKind::Number(_) => "number",
            ParameterKind::Boolean => "boolean",
            ParameterKind::Object { .. } => "object",
            ParameterKind::Array { .. } => "array",
        }
    }
}

/// A node in a request-parameter tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name as it appears in the request.
    pub name: String,
    /// Concrete runtime value (`Null` when unset).
    #[serde(default)]
    pub value: Value,
    /// Kind and kind-specific constraints.
    #[serde(rename = "schema")]
    pub kind: ParameterKind,
    /// Allowed values; empty unless the parameter is an enumeration.
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
}

impl Parameter {
    /// Create a parameter of the given kind with no value.
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            value: Value::Null,
            kind,
            enum_values: Vec::new(),
        }
    }

    /// Create an unconstrained string parameter.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::String(StringConstraints::default()))
    }

    /// Create an unconstrained floating point parameter.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Number(NumberConstraints::default()))
    }

    /// Create an unconstrained integer parameter.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(
            name,
            ParameterKind::Number(NumberConstraints {
                format: NumberFormat::Integer,
                ..NumberConstraints::default()
            }),
        )
    }

    /// Create a boolean parameter.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::Boolean)
    }

    /// Create an object parameter.
    pub fn object(name: impl Into<String>, properties: Vec<Parameter>) -> Self {
        Self::new(name, ParameterKind::Object { properties })
    }

    /// Create an array parameter.
    pub fn array(name: impl Into<String>, items: Vec<Parameter>) -> Self {
        Self::new(name, ParameterKind::Array { items })
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_enum_values(mut self, values: Vec<Value>) -> Self {
        self.enum_values = values;
        self
    }

    /// Set the minimum length. Ignored on non-string kinds.
    pub fn with_min_length(mut self, min: usize) -> Self {
        if let ParameterKind::String(c) = &mut self.kind {
            c.min_length = Some(min);
        }
        self
    }

    /// Set the maximum length. Ignored on non-string kinds.
    pub fn with_max_length(mut self, max: usize) -> Self {
        if let ParameterKind::String(c) = &mut self.kind {
            c.max_length = Some(max);
        }
        self
    }

    /// Set the minimum. Ignored on non-numeric kinds.
    pub fn with_minimum(mut self, min: f64) -> Self {
        if let ParameterKind::Number(c) = &mut self.kind {
            c.minimum = Some(min);
        }
        self
    }

    /// Set the maximum. Ignored on non-numeric kinds.
    pub fn with_maximum(mut self, max: f64) -> Self {
        if let ParameterKind::Number(c) = &mut self.kind {
            c.maximum = Some(max);
        }
        self
    }

    /// Current concrete value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns true if a concrete value has been assigned.
    pub fn has_value(&self) -> bool {
        !self.value.is_null()
    }

    /// Replace the concrete value, returning the previous one.
    ///
    /// Constraints and kind are left untouched.
    pub fn set_value(&mut self, value: impl Into<Value>) -> Value {
        std::mem::replace(&mut self.value, value.into())
    }

    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Returns true if the parameter declares a non-empty set of allowed values.
    pub fn is_enum(&self) -> bool {
        !self.enum_values.is_empty()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    /// Length constraints if this is a string parameter.
    pub fn string_constraints(&self) -> Option<&StringConstraints> {
        match &self.kind {
            ParameterKind::String(c) => Some(c),
            _ => None,
        }
    }

    /// Bounds if this is a numeric parameter.
    pub fn number_constraints(&self) -> Option<&NumberConstraints> {
        match &self.kind {
            ParameterKind::Number(c) => Some(c),
            _ => None,
        }
    }

    /// Direct children of a composite parameter.
    pub fn children(&self) -> &[Parameter] {
        match &self.kind {
            ParameterKind::Object { properties } => properties,
            ParameterKind::Array { items } => items,
            _ => &[],
        }
    }

    /// All leaf parameters of this tree, depth first.
    pub fn leaves(&self) -> Vec<&Parameter> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Parameter>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        for child in self.children() {
            child.collect_leaves(out);
        }
    }

    /// All leaf parameters of this tree, depth first, mutably.
    pub fn leaves_mut(&mut self) -> Vec<&mut Parameter> {
        let mut out = Vec::new();
        self.collect_leaves_mut(&mut out);
        out
    }

    fn collect_leaves_mut<'a>(&'a mut self, out: &mut Vec<&'a mut Parameter>) {
        if self.is_leaf() {
            out.push(self);
            return;
        }
        if let ParameterKind::Object { properties: children }
        | ParameterKind::Array { items: children } = &mut self.kind
        {
            for child in children.iter_mut() {
                child.collect_leaves_mut(out);
            }
        }
    }

    /// Check that the declared constraints are consistent with each other
    /// and with the current value. Recurses into children.
    ///
    /// Numeric `minimum > maximum` is accepted: mutators report it themselves.
    pub fn validate(&self) -> ParameterResult<()> {
        match &self.kind {
            ParameterKind::String(c) => {
                if let (Some(min), Some(max)) = (c.min_length, c.max_length) {
                    if min > max {
                        return Err(ParameterError::inverted_length_bounds(&self.name, min, max));
                    }
                }
                self.expect_value(|v| v.is_string(), "String")
            }
            ParameterKind::Number(c) => {
                if c.minimum.is_some_and(|m| !m.is_finite()) {
                    return Err(ParameterError::non_finite_bound(&self.name, "minimum"));
                }
                if c.maximum.is_some_and(|m| !m.is_finite()) {
                    return Err(ParameterError::non_finite_bound(&self.name, "maximum"));
                }
                self.expect_value(|v| v.is_number(), "Int or Float")
            }
            ParameterKind::Boolean => self.expect_value(|v| v.as_bool().is_some(), "Bool"),
            ParameterKind::Object { .. } | ParameterKind::Array { .. } => {
                if self.is_enum() {
                    return Err(ParameterError::enum_on_composite(&self.name));
                }
                self.expect_value(|_| false, "Null")?;
                self.children().iter().try_for_each(Parameter::validate)
            }
        }
    }

    fn expect_value(
        &self,
        accepts: impl Fn(&Value) -> bool,
        expected: &str,
    ) -> ParameterResult<()> {
        if self.value.is_null() || accepts(&self.value) {
            Ok(())
        } else {
            Err(ParameterError::value_kind_mismatch(
                &self.name,
                expected,
                self.value.type_name(),
            ))
        }
    }
}
