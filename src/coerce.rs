//! Built-in coercions, grouped by type category.
//!
//! Only a textual argument is ever parsed. Native values (booleans, counts
//! and lists handed over by the parser) are assigned as they are, provided
//! their shape fits the field.

use std::any::Any;
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::time::Duration;

use crate::duration::{DurationError, parse_duration};
use crate::error::FormatError;
use crate::value::ArgValue;

/// How a bound field turns an argument into a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Set to `true` whenever a value is present.
    Bool,
    /// Base-10 integer of the field's width.
    Integer,
    /// Duration literal, see [`parse_duration`](crate::parse_duration).
    Duration,
    /// Base-10 floating point.
    Float,
    /// Taken as-is.
    Text,
    /// Only accepts a native list from the parser.
    List,
    /// The type's own `FromStr`.
    Parsed,
    /// Needs a registered hook.
    Custom,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Bool => "boolean",
            Category::Integer => "integer",
            Category::Duration => "duration",
            Category::Float => "float",
            Category::Text => "string",
            Category::List => "list",
            Category::Parsed => "parsed value",
            Category::Custom => "custom value",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value refused by a coercion, before the key is attached.
#[derive(Debug)]
pub enum Rejection {
    /// Textual value that does not parse as the field's type.
    Format(FormatError),
    /// Native value whose shape does not fit the field.
    Mismatch {
        /// Category name of the field.
        expected: &'static str,
        /// Kind of the value that arrived.
        found: &'static str,
    },
    /// Custom field with no registered hook; carries the field's type name.
    NoHook(&'static str),
}

impl From<FormatError> for Rejection {
    fn from(e: FormatError) -> Self {
        Rejection::Format(e)
    }
}

impl From<ParseIntError> for Rejection {
    fn from(e: ParseIntError) -> Self {
        Rejection::Format(e.into())
    }
}

impl From<ParseFloatError> for Rejection {
    fn from(e: ParseFloatError) -> Self {
        Rejection::Format(e.into())
    }
}

impl From<DurationError> for Rejection {
    fn from(e: DurationError) -> Self {
        Rejection::Format(e.into())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Field types with a built-in coercion.
///
/// Implemented for `bool`, every primitive integer, `f32`, `f64`, `String`,
/// `Vec<String>`, [`Duration`] and `Option<T>` of any of those. Other types
/// go through [`Binding::parse`](crate::Binding::parse) or
/// [`Binding::custom`](crate::Binding::custom).
pub trait Coerce: Sized + Any + sealed::Sealed {
    const CATEGORY: Category;

    fn from_text(raw: &str) -> Result<Self, Rejection>;

    fn from_native(value: &ArgValue) -> Result<Self, Rejection>;
}

fn mismatch<T: Coerce>(value: &ArgValue) -> Rejection {
    Rejection::Mismatch {
        expected: T::CATEGORY.name(),
        found: value.kind(),
    }
}

impl sealed::Sealed for bool {}

impl Coerce for bool {
    const CATEGORY: Category = Category::Bool;

    fn from_text(_raw: &str) -> Result<Self, Rejection> {
        Ok(true)
    }

    fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
        match value {
            ArgValue::Bool(b) => Ok(*b),
            ArgValue::Count(n) => Ok(*n > 0),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

macro_rules! coerce_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Coerce for $ty {
            const CATEGORY: Category = Category::Integer;

            fn from_text(raw: &str) -> Result<Self, Rejection> {
                Ok(raw.parse::<$ty>()?)
            }

            fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
                match value {
                    ArgValue::Count(n) => <$ty>::try_from(*n).map_err(|_| {
                        Rejection::Format(FormatError::OutOfRange {
                            value: *n,
                            target: stringify!($ty),
                        })
                    }),
                    other => Err(mismatch::<Self>(other)),
                }
            }
        }
    )*};
}

coerce_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! coerce_float {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Coerce for $ty {
            const CATEGORY: Category = Category::Float;

            fn from_text(raw: &str) -> Result<Self, Rejection> {
                Ok(raw.parse::<$ty>()?)
            }

            fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
                match value {
                    ArgValue::Count(n) => Ok(*n as $ty),
                    other => Err(mismatch::<Self>(other)),
                }
            }
        }
    )*};
}

coerce_float!(f32, f64);

impl sealed::Sealed for Duration {}

impl Coerce for Duration {
    const CATEGORY: Category = Category::Duration;

    fn from_text(raw: &str) -> Result<Self, Rejection> {
        Ok(parse_duration(raw)?)
    }

    fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
        Err(mismatch::<Self>(value))
    }
}

impl sealed::Sealed for String {}

impl Coerce for String {
    const CATEGORY: Category = Category::Text;

    fn from_text(raw: &str) -> Result<Self, Rejection> {
        Ok(raw.to_string())
    }

    fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
        Err(mismatch::<Self>(value))
    }
}

impl sealed::Sealed for Vec<String> {}

impl Coerce for Vec<String> {
    const CATEGORY: Category = Category::List;

    fn from_text(raw: &str) -> Result<Self, Rejection> {
        Err(mismatch::<Self>(&ArgValue::Str(raw.to_string())))
    }

    fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
        match value {
            ArgValue::List(items) => Ok(items.clone()),
            other => Err(mismatch::<Self>(other)),
        }
    }
}

impl<T: Coerce> sealed::Sealed for Option<T> {}

impl<T: Coerce> Coerce for Option<T> {
    const CATEGORY: Category = T::CATEGORY;

    fn from_text(raw: &str) -> Result<Self, Rejection> {
        T::from_text(raw).map(Some)
    }

    fn from_native(value: &ArgValue) -> Result<Self, Rejection> {
        T::from_native(value).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format_err<T: Coerce + fmt::Debug>(raw: &str) -> FormatError {
        match T::from_text(raw) {
            Err(Rejection::Format(e)) => e,
            other => panic!("expected a format rejection, got {other:?}"),
        }
    }

    #[test]
    fn bool_from_any_text_is_true() {
        assert!(bool::from_text("").unwrap());
        assert!(bool::from_text("false").unwrap());
    }

    #[test]
    fn bool_from_native() {
        assert!(!bool::from_native(&ArgValue::Bool(false)).unwrap());
        assert!(bool::from_native(&ArgValue::Count(2)).unwrap());
        assert!(!bool::from_native(&ArgValue::Count(0)).unwrap());
    }

    #[test]
    fn integers_parse_at_their_width() {
        assert_eq!(i32::from_text("27").unwrap(), 27);
        assert_eq!(i64::from_text("-10").unwrap(), -10);
        assert_eq!(u8::from_text("+255").unwrap(), 255);
    }

    #[test]
    fn integer_overflow_is_a_format_error() {
        assert!(matches!(format_err::<i8>("128"), FormatError::Int(_)));
        assert!(matches!(format_err::<u16>("-1"), FormatError::Int(_)));
    }

    #[test]
    fn malformed_integer() {
        assert!(matches!(format_err::<i64>("abc"), FormatError::Int(_)));
        assert!(matches!(format_err::<i64>("1.5"), FormatError::Int(_)));
    }

    #[test]
    fn count_into_integer() {
        assert_eq!(u8::from_native(&ArgValue::Count(3)).unwrap(), 3);
        match u8::from_native(&ArgValue::Count(300)) {
            Err(Rejection::Format(FormatError::OutOfRange { value, target })) => {
                assert_eq!(value, 300);
                assert_eq!(target, "u8");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn floats() {
        assert_eq!(f32::from_text("1.25").unwrap(), 1.25);
        assert_eq!(f64::from_text("-0.5").unwrap(), -0.5);
        assert!(matches!(format_err::<f64>("pi"), FormatError::Float(_)));
    }

    #[test]
    fn duration_text() {
        assert_eq!(
            Duration::from_text("20s").unwrap(),
            Duration::from_secs(20)
        );
        assert!(matches!(
            format_err::<Duration>("20"),
            FormatError::Duration(_)
        ));
    }

    #[test]
    fn string_taken_verbatim() {
        assert_eq!(String::from_text(" Hello ").unwrap(), " Hello ");
    }

    #[test]
    fn list_only_from_native_list() {
        let list = ArgValue::from(vec!["A", "B"]);
        assert_eq!(Vec::<String>::from_native(&list).unwrap(), vec!["A", "B"]);
        assert!(matches!(
            Vec::<String>::from_text("A"),
            Err(Rejection::Mismatch {
                expected: "list",
                found: "string"
            })
        ));
    }

    #[test]
    fn native_shape_mismatch() {
        assert!(matches!(
            i64::from_native(&ArgValue::Bool(true)),
            Err(Rejection::Mismatch {
                expected: "integer",
                found: "boolean"
            })
        ));
        assert!(matches!(
            String::from_native(&ArgValue::from(vec!["a"])),
            Err(Rejection::Mismatch { .. })
        ));
    }

    #[test]
    fn option_wraps_inner_category() {
        assert_eq!(<Option<u16>>::CATEGORY, Category::Integer);
        assert_eq!(<Option<u16>>::from_text("8080").unwrap(), Some(8080));
        assert!(<Option<u16>>::from_text("x").is_err());
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Duration.to_string(), "duration");
        assert_eq!(Category::Custom.to_string(), "custom value");
    }
}
