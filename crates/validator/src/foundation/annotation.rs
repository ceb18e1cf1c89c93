//! Annotations and the attribute reader
//!
//! An annotation is the immutable descriptor a field carries to declare a
//! constraint. Every annotation exposes its attributes by name through
//! [`Annotation::attribute`], and [`AttributeReader`] turns such a lookup
//! into a typed value without either side knowing the other's concrete type.
//!
//! Built-in annotations are plain structs and override the typed
//! [`Annotation::message_res_id`] / [`Annotation::message`] accessors with
//! direct field reads. Externally authored annotations (see
//! [`DynamicAnnotation`](crate::foundation::DynamicAnnotation)) keep the
//! reflective defaults and may fail to produce an attribute.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::error::ReflectionError;

/// Name of the literal failure message attribute.
pub const MESSAGE: &str = "message";

/// Name of the message resource id attribute.
pub const MESSAGE_RES_ID: &str = "messageResId";

/// `messageResId` value meaning "no resource id, use the literal message".
pub const NO_MESSAGE_RES_ID: i32 = -1;

// ============================================================================
// ATTRIBUTE VALUES
// ============================================================================

/// Type tag of an [`AttributeValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// `bool`
    Bool,
    /// `i32`
    Int,
    /// `i64`
    Long,
    /// `f64`
    Double,
    /// UTF-8 string
    Str,
    /// list of strings
    StrList,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bool => "bool",
            Self::Int => "i32",
            Self::Long => "i64",
            Self::Double => "f64",
            Self::Str => "string",
            Self::StrList => "string list",
        })
    }
}

/// The value of one annotation attribute.
///
/// Borrowed from the annotation where possible.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue<'a> {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Str(Cow<'a, str>),
    StrList(Cow<'a, [String]>),
}

impl AttributeValue<'_> {
    /// Returns the type tag of this value.
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self {
            Self::Bool(_) => AttributeKind::Bool,
            Self::Int(_) => AttributeKind::Int,
            Self::Long(_) => AttributeKind::Long,
            Self::Double(_) => AttributeKind::Double,
            Self::Str(_) => AttributeKind::Str,
            Self::StrList(_) => AttributeKind::StrList,
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Types an attribute can be read as.
///
/// Conversion is exact: an `i32` is only produced from [`AttributeValue::Int`],
/// never widened or narrowed from another variant.
pub trait FromAttribute<'a>: Sized {
    /// The attribute type this conversion accepts.
    const KIND: AttributeKind;

    /// Extracts `Self`, or `None` when the value holds another type.
    fn from_attribute(value: AttributeValue<'a>) -> Option<Self>;
}

impl FromAttribute<'_> for bool {
    const KIND: AttributeKind = AttributeKind::Bool;

    fn from_attribute(value: AttributeValue<'_>) -> Option<Self> {
        match value {
            AttributeValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FromAttribute<'_> for i32 {
    const KIND: AttributeKind = AttributeKind::Int;

    fn from_attribute(value: AttributeValue<'_>) -> Option<Self> {
        match value {
            AttributeValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl FromAttribute<'_> for i64 {
    const KIND: AttributeKind = AttributeKind::Long;

    fn from_attribute(value: AttributeValue<'_>) -> Option<Self> {
        match value {
            AttributeValue::Long(v) => Some(v),
            _ => None,
        }
    }
}

impl FromAttribute<'_> for f64 {
    const KIND: AttributeKind = AttributeKind::Double;

    fn from_attribute(value: AttributeValue<'_>) -> Option<Self> {
        match value {
            AttributeValue::Double(v) => Some(v),
            _ => None,
        }
    }
}

impl<'a> FromAttribute<'a> for Cow<'a, str> {
    const KIND: AttributeKind = AttributeKind::Str;

    fn from_attribute(value: AttributeValue<'a>) -> Option<Self> {
        match value {
            AttributeValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl FromAttribute<'_> for String {
    const KIND: AttributeKind = AttributeKind::Str;

    fn from_attribute(value: AttributeValue<'_>) -> Option<Self> {
        match value {
            AttributeValue::Str(v) => Some(v.into_owned()),
            _ => None,
        }
    }
}

impl FromAttribute<'_> for Vec<String> {
    const KIND: AttributeKind = AttributeKind::StrList;

    fn from_attribute(value: AttributeValue<'_>) -> Option<Self> {
        match value {
            AttributeValue::StrList(v) => Some(v.into_owned()),
            _ => None,
        }
    }
}

/// Types a typed annotation field can expose as an attribute.
pub trait ToAttribute {
    /// Borrows the field as an attribute value.
    fn to_attribute(&self) -> AttributeValue<'_>;
}

impl ToAttribute for bool {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::Bool(*self)
    }
}

impl ToAttribute for i32 {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::Int(*self)
    }
}

impl ToAttribute for i64 {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::Long(*self)
    }
}

impl ToAttribute for f64 {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::Double(*self)
    }
}

impl ToAttribute for String {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::Str(Cow::Borrowed(self))
    }
}

impl ToAttribute for Vec<String> {
    fn to_attribute(&self) -> AttributeValue<'_> {
        AttributeValue::StrList(Cow::Borrowed(self))
    }
}

// ============================================================================
// ANNOTATION
// ============================================================================

/// An immutable validation descriptor that rules bind to.
///
/// At minimum an annotation exposes `message` (string) and `messageResId`
/// (`i32`, [`NO_MESSAGE_RES_ID`] when unset). Rule-specific attributes are
/// exposed under their own names.
///
/// # Examples
///
/// ```rust,ignore
/// use std::borrow::Cow;
/// use vigil_validator::foundation::{Annotation, AttributeValue};
///
/// #[derive(Debug)]
/// struct Required;
///
/// impl Annotation for Required {
///     fn kind(&self) -> &str {
///         "required"
///     }
///
///     fn attribute(&self, name: &str) -> Option<AttributeValue<'_>> {
///         match name {
///             "message" => Some(AttributeValue::Str(Cow::Borrowed("Required"))),
///             "messageResId" => Some(AttributeValue::Int(-1)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Annotation: fmt::Debug + Send + Sync {
    /// Identifier of the annotation kind, e.g. `"length"`.
    fn kind(&self) -> &str;

    /// Looks up an attribute by name.
    fn attribute(&self, name: &str) -> Option<AttributeValue<'_>>;

    /// Reads `messageResId`.
    fn message_res_id(&self) -> Result<i32, ReflectionError> {
        AttributeReader::read(self, MESSAGE_RES_ID)
    }

    /// Reads `message`.
    fn message(&self) -> Result<Cow<'_, str>, ReflectionError> {
        AttributeReader::read(self, MESSAGE)
    }
}

/// An annotation type with a kind fixed at compile time.
pub trait DeclaredAnnotation: Annotation {
    /// The kind every instance reports from [`Annotation::kind`].
    const KIND: &'static str;
}

// ============================================================================
// ATTRIBUTE READER
// ============================================================================

/// Reads named, typed attributes off any [`Annotation`].
pub struct AttributeReader;

impl AttributeReader {
    /// Reads attribute `name` as a `T`.
    ///
    /// Fails with [`ReflectionError::NotFound`] when the annotation has no such
    /// attribute and [`ReflectionError::TypeMismatch`] when it holds another type.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let max: i32 = AttributeReader::read(&annotation, "max")?;
    /// ```
    pub fn read<'a, T, A>(annotation: &'a A, name: &str) -> Result<T, ReflectionError>
    where
        T: FromAttribute<'a>,
        A: Annotation + ?Sized,
    {
        let value = annotation
            .attribute(name)
            .ok_or_else(|| ReflectionError::NotFound {
                annotation: annotation.kind().to_owned(),
                attribute: name.to_owned(),
            })?;

        let found = value.kind();
        T::from_attribute(value).ok_or_else(|| ReflectionError::TypeMismatch {
            annotation: annotation.kind().to_owned(),
            attribute: name.to_owned(),
            expected: T::KIND,
            found,
        })
    }
}
