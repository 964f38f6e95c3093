//! Binding tables: how an options struct declares which argument feeds which
//! field.
//!
//! Each options struct implements [`Options`] and lists its bindings in
//! declaration order. A binding is either a keyed field or a nested options
//! struct that the walker descends into:
//!
//! ```
//! use argbind::{Binding, Options};
//!
//! #[derive(Default)]
//! struct Position {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Options for Position {
//!     fn bindings(&mut self) -> Vec<Binding<'_>> {
//!         vec![
//!             Binding::field("<x>", &mut self.x),
//!             Binding::field("<y>", &mut self.y),
//!         ]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Move {
//!     ship: bool,
//!     position: Position,
//! }
//!
//! impl Options for Move {
//!     fn bindings(&mut self) -> Vec<Binding<'_>> {
//!         vec![
//!             Binding::field("ship", &mut self.ship),
//!             Binding::nested(&mut self.position),
//!         ]
//!     }
//! }
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::str::FromStr;

use crate::coerce::{Category, Coerce, Rejection};
use crate::error::FormatError;
use crate::value::ArgValue;

/// A struct whose fields can be filled from [`Arguments`](crate::Arguments).
pub trait Options {
    /// The struct's bindings, in declaration order.
    fn bindings(&mut self) -> Vec<Binding<'_>>;

    /// Name used in error messages. Defaults to the Rust type name.
    fn options_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// One entry of an options struct's binding table.
pub struct Binding<'a> {
    pub(crate) kind: BindingKind<'a>,
}

pub(crate) enum BindingKind<'a> {
    Field {
        key: &'static str,
        slot: Box<dyn Slot + 'a>,
    },
    Nested(&'a mut dyn Options),
}

impl<'a> Binding<'a> {
    /// Bind `key` to a field with a built-in coercion.
    pub fn field<T: Coerce>(key: &'static str, target: &'a mut T) -> Self {
        Self::keyed(key, Builtin(target))
    }

    /// Bind `key` to a field parsed with its `FromStr` implementation.
    pub fn parse<T>(key: &'static str, target: &'a mut T) -> Self
    where
        T: FromStr + Any,
        T::Err: fmt::Display,
    {
        Self::keyed(key, Parsed(target))
    }

    /// Bind `key` to a field that only a registered [`Hook`](crate::Hook)
    /// can fill.
    pub fn custom<T: Any>(key: &'static str, target: &'a mut T) -> Self {
        Self::keyed(key, Custom(target))
    }

    /// Descend into a nested options struct. The nested struct has no key of
    /// its own.
    pub fn nested<O: Options>(options: &'a mut O) -> Self {
        Self {
            kind: BindingKind::Nested(options),
        }
    }

    fn keyed(key: &'static str, slot: impl Slot + 'a) -> Self {
        Self {
            kind: BindingKind::Field {
                key,
                slot: Box::new(slot),
            },
        }
    }

    /// The bound key, or `None` for a nested struct.
    pub fn key(&self) -> Option<&'static str> {
        match &self.kind {
            BindingKind::Field { key, .. } => Some(*key),
            BindingKind::Nested(_) => None,
        }
    }

    /// How the bound field is coerced, or `None` for a nested struct.
    pub fn category(&self) -> Option<Category> {
        match &self.kind {
            BindingKind::Field { slot, .. } => Some(slot.category()),
            BindingKind::Nested(_) => None,
        }
    }
}

impl fmt::Debug for Binding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            BindingKind::Field { key, slot } => f
                .debug_struct("Field")
                .field("key", key)
                .field("type", &slot.target_name())
                .field("category", &slot.category())
                .finish(),
            BindingKind::Nested(options) => f
                .debug_tuple("Nested")
                .field(&options.options_name())
                .finish(),
        }
    }
}

/// A mutable handle on one bound field.
pub(crate) trait Slot {
    fn category(&self) -> Category;

    /// Type of the field itself, used for hook lookup.
    fn target_type(&self) -> TypeId;

    fn target_name(&self) -> &'static str;

    fn target_mut(&mut self) -> &mut dyn Any;

    fn set_text(&mut self, raw: &str) -> Result<(), Rejection>;

    fn set_native(&mut self, value: &ArgValue) -> Result<(), Rejection>;
}

struct Builtin<'a, T>(&'a mut T);

impl<T: Coerce> Slot for Builtin<'_, T> {
    fn category(&self) -> Category {
        T::CATEGORY
    }

    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn target_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn target_mut(&mut self) -> &mut dyn Any {
        &mut *self.0
    }

    fn set_text(&mut self, raw: &str) -> Result<(), Rejection> {
        *self.0 = T::from_text(raw)?;
        Ok(())
    }

    fn set_native(&mut self, value: &ArgValue) -> Result<(), Rejection> {
        *self.0 = T::from_native(value)?;
        Ok(())
    }
}

struct Parsed<'a, T>(&'a mut T);

impl<T> Slot for Parsed<'_, T>
where
    T: FromStr + Any,
    T::Err: fmt::Display,
{
    fn category(&self) -> Category {
        Category::Parsed
    }

    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn target_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn target_mut(&mut self) -> &mut dyn Any {
        &mut *self.0
    }

    fn set_text(&mut self, raw: &str) -> Result<(), Rejection> {
        *self.0 = raw
            .parse::<T>()
            .map_err(|e| FormatError::Parse(e.to_string()))?;
        Ok(())
    }

    fn set_native(&mut self, value: &ArgValue) -> Result<(), Rejection> {
        Err(Rejection::Mismatch {
            expected: Category::Parsed.name(),
            found: value.kind(),
        })
    }
}

struct Custom<'a, T>(&'a mut T);

impl<T: Any> Slot for Custom<'_, T> {
    fn category(&self) -> Category {
        Category::Custom
    }

    fn target_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn target_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn target_mut(&mut self) -> &mut dyn Any {
        &mut *self.0
    }

    fn set_text(&mut self, _raw: &str) -> Result<(), Rejection> {
        Err(Rejection::NoHook(std::any::type_name::<T>()))
    }

    fn set_native(&mut self, value: &ArgValue) -> Result<(), Rejection> {
        Err(Rejection::Mismatch {
            expected: Category::Custom.name(),
            found: value.kind(),
        })
    }
}
