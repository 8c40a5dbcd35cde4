use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input resolved to a non-null object that is no fragment.
    /// Binding it would silently lose its structure or coerce it to an
    /// unintended string, so composition aborts instead.
    #[error("attempted to interpolate unsupported {kind} into SQL")]
    UnsupportedInterpolation { kind: &'static str },

    /// A conversion chain kept yielding deferred values without ever
    /// reaching a fragment or scalar.
    #[error("SQL conversion chain exceeded {limit} steps")]
    ConversionOverflow { limit: usize },
}
