//! Interpolation inputs.

use std::fmt;

use crate::{Fragment, Value};

/// A value supplied at an interpolation site.
///
/// [`compose`](crate::compose()) classifies each input: fragments splice in
/// place, scalars become one bound parameter each, deferred conversions
/// resolve first, and dynamic JSON composites are rejected.
pub enum SqlArg {
    /// A plain scalar, bound as one parameter.
    Value(Value),
    /// A previously built fragment, spliced in place.
    Fragment(Fragment),
    /// A deferred conversion, resolved at composition time.
    Defer(Box<dyn ToSql>),
    /// A dynamically typed value. JSON scalars (including null) bind as
    /// one parameter; arrays and objects fail composition.
    Json(serde_json::Value),
}

/// Lazily describe a domain value as SQL.
///
/// The extension point for interpolating domain types: a where-clause
/// builder, a sort spec, anything that knows how to phrase itself as a
/// fragment. The conversion may itself return another [`SqlArg::Defer`];
/// the composer keeps resolving until it reaches a fragment or a scalar,
/// giving up after [`MAX_CONVERSION_DEPTH`](crate::MAX_CONVERSION_DEPTH)
/// steps.
pub trait ToSql {
    /// Describe this value as SQL.
    fn to_sql(&self) -> SqlArg;
}

impl SqlArg {
    /// Wrap a conversion to be resolved during composition.
    pub fn defer(value: impl ToSql + 'static) -> Self {
        SqlArg::Defer(Box::new(value))
    }
}

impl fmt::Debug for SqlArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlArg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            SqlArg::Fragment(frag) => f.debug_tuple("Fragment").field(frag).finish(),
            SqlArg::Defer(_) => f.write_str("Defer(..)"),
            SqlArg::Json(v) => f.debug_tuple("Json").field(v).finish(),
        }
    }
}

impl From<Value> for SqlArg {
    fn from(v: Value) -> Self {
        SqlArg::Value(v)
    }
}

impl From<Fragment> for SqlArg {
    fn from(v: Fragment) -> Self {
        SqlArg::Fragment(v)
    }
}

impl From<serde_json::Value> for SqlArg {
    fn from(v: serde_json::Value) -> Self {
        SqlArg::Json(v)
    }
}

// Scalar conversions mirror the Value ladder.
impl From<bool> for SqlArg {
    fn from(v: bool) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<i16> for SqlArg {
    fn from(v: i16) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<i32> for SqlArg {
    fn from(v: i32) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<i64> for SqlArg {
    fn from(v: i64) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<f32> for SqlArg {
    fn from(v: f32) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<f64> for SqlArg {
    fn from(v: f64) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<String> for SqlArg {
    fn from(v: String) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<&str> for SqlArg {
    fn from(v: &str) -> Self {
        SqlArg::Value(v.into())
    }
}

impl From<Vec<u8>> for SqlArg {
    fn from(v: Vec<u8>) -> Self {
        SqlArg::Value(v.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for SqlArg {
    fn from(v: Option<T>) -> Self {
        SqlArg::Value(v.into())
    }
}
