//! Externally authored annotations
//!
//! A [`DynamicAnnotation`] is an annotation whose shape is not known at
//! compile time: a kind plus a bag of JSON attributes. It is how rule
//! metadata arrives from configuration, and it is the case the attribute
//! reader's failure modes exist for.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::annotation::{Annotation, AttributeValue, MESSAGE_RES_ID};
use crate::foundation::error::RuleError;

/// An annotation described by a kind and JSON attributes.
///
/// Deserializes from a flat object:
///
/// ```json
/// { "kind": "length", "min": 2, "max": 16, "message": "Between 2 and 16" }
/// ```
///
/// JSON values map onto [`AttributeValue`] as follows: booleans to `Bool`,
/// integers to `Int` when they fit in `i32` and `Long` otherwise, other
/// numbers to `Double`, strings to `Str`, and arrays of strings to
/// `StrList`. `null`, objects and mixed arrays have no attribute form and
/// read as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicAnnotation {
    kind: String,
    #[serde(flatten)]
    attributes: Map<String, Value>,
}

impl DynamicAnnotation {
    /// Creates an annotation of `kind` with no attributes.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attributes: Map::new(),
        }
    }

    /// Sets an attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Parses an annotation from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Raw attributes, excluding `kind`.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Converts the attributes into a typed annotation.
    ///
    /// Missing attributes take the typed annotation's defaults. A
    /// `messageResId` that is not an `i32` is dropped, so the typed
    /// annotation falls back to its literal message just as a directly bound
    /// dynamic annotation would.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, RuleError> {
        let mut attributes = self.attributes.clone();
        if let Err(err) = self.message_res_id()
            && attributes.remove(MESSAGE_RES_ID).is_some()
        {
            tracing::debug!(
                annotation = %self.kind,
                error = %err,
                "messageResId unreadable, dropped before typed conversion"
            );
        }

        serde_json::from_value(Value::Object(attributes)).map_err(|err| {
            RuleError::MalformedAnnotation {
                kind: self.kind.clone(),
                reason: err.to_string(),
            }
        })
    }
}

impl Annotation for DynamicAnnotation {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
        to_attribute(self.attributes.get(name)?)
    }
}

fn to_attribute(value: &Value) -> Option<AttributeValue<'_>> {
    match value {
        Value::Bool(b) => Some(AttributeValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i32::try_from(i).map_or(AttributeValue::Long(i), AttributeValue::Int))
            } else {
                n.as_f64().map(AttributeValue::Double)
            }
        }
        Value::String(s) => Some(AttributeValue::Str(Cow::Borrowed(s))),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .map(|list| AttributeValue::StrList(Cow::Owned(list))),
        Value::Null | Value::Object(_) => None,
    }
}
