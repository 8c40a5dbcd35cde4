//! Fragment composition.
//!
//! Flattens literal text and interpolated values into one normalized
//! fragment: every value becomes an ordered bound parameter, nested
//! fragments splice in flat, adjacent text merges into a single segment.

use crate::{Error, Fragment, Result, SqlArg, Value};

/// Upper bound on convert-until-fixed-point chains.
///
/// A [`ToSql`](crate::ToSql) impl may hand back another deferred
/// conversion. Resolution stops after this many steps and fails with
/// [`Error::ConversionOverflow`], so a cyclic impl cannot hang the caller.
pub const MAX_CONVERSION_DEPTH: usize = 32;

/// Accumulates alternating literal text and parameters, merging adjacent
/// text into a single segment.
pub(crate) struct Splicer {
    segments: Vec<String>,
    params: Vec<Value>,
    buffer: String,
}

impl Splicer {
    pub(crate) fn new() -> Self {
        Self {
            segments: Vec::new(),
            params: Vec::new(),
            buffer: String::new(),
        }
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Flush the running text as a completed segment and record `value`
    /// as the parameter that follows it.
    pub(crate) fn push_param(&mut self, value: Value) {
        self.segments.push(std::mem::take(&mut self.buffer));
        self.params.push(value);
    }

    /// Inline a nested fragment: its first segment joins the running
    /// buffer, and each later segment starts a fresh buffer after the
    /// parameter it follows.
    pub(crate) fn splice(&mut self, fragment: Fragment) {
        let (segments, params) = fragment.into_parts();
        let mut segments = segments.into_iter();
        if let Some(first) = segments.next() {
            self.buffer.push_str(&first);
        }
        for (value, segment) in params.into_iter().zip(segments) {
            self.push_param(value);
            self.buffer = segment;
        }
    }

    pub(crate) fn finish(mut self) -> Fragment {
        self.segments.push(self.buffer);
        Fragment::from_parts(self.segments, self.params)
    }
}

/// An interpolation input after deferred conversions have been resolved.
enum Resolved {
    Fragment(Fragment),
    Value(Value),
    Json(serde_json::Value),
}

/// Resolve deferred conversions until a fragment or value is reached.
fn resolve(mut arg: SqlArg) -> Result<Resolved> {
    let mut depth = 0;
    loop {
        match arg {
            SqlArg::Fragment(fragment) => return Ok(Resolved::Fragment(fragment)),
            SqlArg::Value(value) => return Ok(Resolved::Value(value)),
            SqlArg::Json(value) => return Ok(Resolved::Json(value)),
            SqlArg::Defer(lazy) => {
                if depth == MAX_CONVERSION_DEPTH {
                    return Err(Error::ConversionOverflow {
                        limit: MAX_CONVERSION_DEPTH,
                    });
                }
                depth += 1;
                arg = lazy.to_sql();
            }
        }
    }
}

/// Classify a dynamically typed value: scalars bind, composites do not.
fn classify_json(value: serde_json::Value) -> Result<Value> {
    use serde_json::Value as Json;

    match value {
        Json::Null => Ok(Value::Null),
        Json::Bool(b) => Ok(Value::Bool(b)),
        Json::String(s) => Ok(Value::String(s)),
        Json::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(Value::I64(i)),
            (None, Some(f)) => Ok(Value::F64(f)),
            (None, None) => Err(Error::UnsupportedInterpolation { kind: "number" }),
        },
        Json::Array(_) => Err(Error::UnsupportedInterpolation { kind: "array" }),
        Json::Object(_) => Err(Error::UnsupportedInterpolation { kind: "object" }),
    }
}

/// Compose literal text and interpolated values into one fragment.
///
/// `literals` and `args` interleave: text, value, text, value, ..., text.
/// Each argument is classified in place. Fragments, and values that
/// convert into fragments, splice in flat; scalars and null each become
/// one bound parameter; anything else fails with
/// [`Error::UnsupportedInterpolation`] and no partial fragment is
/// returned. The output preserves the exact left-to-right order of the
/// input, nested fragments included.
///
/// # Panics
///
/// Panics unless `literals.len() == args.len() + 1`. The [`sql!`](crate::sql)
/// macro guarantees this shape; hand-rolled calls must uphold it.
pub fn compose(literals: &[&str], args: Vec<SqlArg>) -> Result<Fragment> {
    assert_eq!(
        literals.len(),
        args.len() + 1,
        "compose needs exactly one more literal than interpolated values"
    );

    let mut splicer = Splicer::new();
    let mut args = args.into_iter();
    for literal in literals {
        splicer.push_text(literal);
        let Some(arg) = args.next() else { break };
        match resolve(arg)? {
            Resolved::Fragment(fragment) => splicer.splice(fragment),
            Resolved::Value(value) => splicer.push_param(value),
            Resolved::Json(json) => splicer.push_param(classify_json(json)?),
        }
    }
    Ok(splicer.finish())
}
