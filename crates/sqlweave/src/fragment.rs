//! The fragment value type.

use crate::Value;
use crate::compose::Splicer;

/// A safe, composable piece of SQL.
///
/// A fragment holds an ordered list of literal text segments and an
/// ordered list of bound parameter values. Segment `i` is the literal text
/// immediately before parameter `i`; the last segment is the trailing text
/// after the final parameter. There is always exactly one more segment
/// than there are parameters.
///
/// Fragments are immutable once built. Interpolating one into a later
/// composition splices its contents into the new fragment and leaves the
/// original alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    segments: Vec<String>,
    params: Vec<Value>,
}

impl Fragment {
    /// Build a fragment from raw segments and parameters.
    ///
    /// # Panics
    ///
    /// Panics unless `segments.len() == params.len() + 1`. Handing over
    /// mismatched lists is a caller bug, not a runtime data case.
    pub fn new(segments: Vec<String>, params: Vec<Value>) -> Self {
        assert_eq!(
            segments.len(),
            params.len() + 1,
            "fragment needs exactly one more segment than parameters"
        );
        Self { segments, params }
    }

    /// Constructor for internal callers that uphold the shape invariant.
    pub(crate) fn from_parts(segments: Vec<String>, params: Vec<Value>) -> Self {
        debug_assert_eq!(segments.len(), params.len() + 1);
        Self { segments, params }
    }

    /// The empty fragment: one empty segment, no parameters.
    pub fn empty() -> Self {
        Self {
            segments: vec![String::new()],
            params: Vec::new(),
        }
    }

    /// A fragment of raw SQL text with no parameters.
    ///
    /// Escape hatch: `text` lands in the query verbatim, so it must come
    /// from the program, never from user input.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            segments: vec![text.into()],
            params: Vec::new(),
        }
    }

    /// A fragment holding a single bound parameter and no text.
    pub fn bind(value: impl Into<Value>) -> Self {
        Self {
            segments: vec![String::new(), String::new()],
            params: vec![value.into()],
        }
    }

    /// Literal text segments, in order. Never empty.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Bound parameter values, in order.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Consume the fragment, yielding its segments and parameters.
    pub fn into_parts(self) -> (Vec<String>, Vec<Value>) {
        (self.segments, self.params)
    }

    /// Splice `parts` together with `separator` between neighbors.
    ///
    /// Parameters keep their input order and adjacent literal text merges,
    /// so the result never holds two consecutive text segments. An empty
    /// iterator yields [`Fragment::empty`].
    pub fn join(parts: impl IntoIterator<Item = Fragment>, separator: &str) -> Fragment {
        let mut splicer = Splicer::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                splicer.push_text(separator);
            }
            splicer.splice(part);
        }
        splicer.finish()
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}
