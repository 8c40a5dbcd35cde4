//! Composable parameterized SQL fragments.
//!
//! Build SQL from literal text and interpolated values. Every interpolated
//! value is captured as an ordered bound parameter, never pasted into the
//! query text, and fragments nest: interpolating one into another splices
//! it in flat.
//!
//! ```
//! use sqlweave::{Value, sql};
//!
//! let min_age = 21i64;
//! let clause = sql!("age >= ", min_age, "")?;
//! let query = sql!("SELECT name FROM users WHERE ", clause, " ORDER BY name")?;
//!
//! assert_eq!(
//!     query.segments(),
//!     ["SELECT name FROM users WHERE age >= ", " ORDER BY name"]
//! );
//! assert_eq!(query.params(), [Value::I64(21)]);
//! # Ok::<(), sqlweave::Error>(())
//! ```
//!
//! Rendering placeholders (`$1`, `?`, ...) and talking to a driver are the
//! downstream executor's job; this crate only builds the fragment.

mod arg;
mod compose;
mod error;
mod fragment;
mod value;

pub use arg::{SqlArg, ToSql};
pub use compose::{MAX_CONVERSION_DEPTH, compose};
pub use error::Error;
pub use fragment::Fragment;
pub use value::Value;

/// Result type for composition.
pub type Result<T> = std::result::Result<T, Error>;

/// Build a fragment from alternating literal text and interpolated values.
///
/// Arguments alternate string literal, value, string literal, ... always
/// starting and ending with a literal, so the call site reads like the
/// query itself. Expands to a [`compose`] call whose literal/value shape
/// is correct by construction.
///
/// ```
/// use sqlweave::sql;
///
/// let active = true;
/// let frag = sql!("WHERE active = ", active, "")?;
/// assert_eq!(frag.segments(), ["WHERE active = ", ""]);
/// # Ok::<(), sqlweave::Error>(())
/// ```
#[macro_export]
macro_rules! sql {
    ($first:literal $(, $value:expr, $lit:literal)* $(,)?) => {
        $crate::compose(
            &[$first $(, $lit)*],
            ::std::vec![$($crate::SqlArg::from($value)),*],
        )
    };
}
