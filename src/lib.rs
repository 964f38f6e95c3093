//! Bind parsed command-line arguments onto typed option structs.
//!
//! Argument parsers in the docopt tradition hand back a flat map: `--speed`
//! → `"30"`, `<name>` → `["A"]`, `ship` → `true`. argbind takes that map and
//! fills in a plain Rust struct, converting strings to integers, floats,
//! booleans and durations along the way.
//!
//! ```
//! use argbind::{Arguments, ArgValue, Binding, Options};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Move {
//!     ship: bool,
//!     name: Vec<String>,
//!     x: i64,
//!     y: i64,
//!     speed: i32,
//! }
//!
//! impl Options for Move {
//!     fn bindings(&mut self) -> Vec<Binding<'_>> {
//!         vec![
//!             Binding::field("ship", &mut self.ship),
//!             Binding::field("<name>", &mut self.name),
//!             Binding::field("<x>", &mut self.x),
//!             Binding::field("<y>", &mut self.y),
//!             Binding::field("--speed", &mut self.speed),
//!         ]
//!     }
//! }
//!
//! let mut arguments = Arguments::from([
//!     ("ship".to_string(), Some(ArgValue::Bool(true))),
//!     ("<name>".to_string(), Some(ArgValue::from(vec!["A"]))),
//!     ("<x>".to_string(), Some(ArgValue::from("10"))),
//!     ("<y>".to_string(), Some(ArgValue::from("20"))),
//!     ("--speed".to_string(), Some(ArgValue::from("30"))),
//! ]);
//!
//! let mut opts = Move::default();
//! argbind::unmarshal(&mut arguments, &mut opts)?;
//! assert_eq!(opts.speed, 30);
//! assert!(arguments.is_empty());
//! # Ok::<(), argbind::BindError>(())
//! ```
//!
//! # Design: a binding table instead of reflection
//!
//! Each options struct implements [`Options`] and returns its binding table:
//! one [`Binding`] per field, in declaration order. The table is the schema.
//!
//! - **[`Binding::field`]** binds a key to a field with a built-in coercion
//!   (`bool`, integers, floats, `String`, `Vec<String>`, [`Duration`],
//!   `Option` of any of these).
//! - **[`Binding::parse`]** binds a key to any `FromStr` type (`IpAddr`,
//!   `PathBuf`, your own enums).
//! - **[`Binding::custom`]** binds a key to a type only a [`Hook`] can fill.
//! - **[`Binding::nested`]** descends into an embedded options struct. Nested
//!   structs are walked depth-first and may nest to any depth.
//!
//! # Coercion
//!
//! Only textual values are parsed. Everything else the parser produced
//! (switch booleans, occurrence counts, repeated values as lists) is
//! assigned as-is, provided its shape fits the field.
//!
//! | Category | Textual value | Failure |
//! |----------|---------------|---------|
//! | boolean  | always `true` | never |
//! | integer  | base 10 at the field's width | [`BindError::Format`] |
//! | float    | base 10 | [`BindError::Format`] |
//! | duration | `1h30m`, `1.5s`, `300ms`, see [`parse_duration`] | [`BindError::Format`] |
//! | string   | taken verbatim | never |
//! | list     | not accepted | [`BindError::Mismatch`] |
//!
//! # Hooks
//!
//! A [`Hook`] overrides coercion for one exact type. Hooks live on an
//! [`Unmarshaller`] rather than in global state, and are keyed by
//! [`TypeId`](std::any::TypeId), so renaming a type never breaks its hook.
//! A hook for `i64` affects every `i64` field bound through that
//! unmarshaller, and nothing else.
//!
//! # Missing and leftover keys
//!
//! Both directions of schema drift are errors:
//!
//! - a binding whose key the map does not contain fails with
//!   [`BindError::MissingKey`]. Keys present with a `None` value are fine:
//!   the field keeps its current (default) value.
//! - after a successful walk every bound key is removed from the map. Keys
//!   still left fail with [`BindError::UnknownKey`], or
//!   [`BindError::UnknownKeys`] listing them all when there are several.
//!
//! Use [`Unmarshaller::walk`] directly to fill a struct without removing
//! keys or checking for leftovers.
//!
//! # Error handling
//!
//! All fallible operations return [`BindError`]. The first error aborts the
//! whole call; fields bound before it keep their new values.
//!
//! # Clap adapter
//!
//! With the `clap` feature (on by default), [`from_clap`] builds the
//! argument map from a `clap::Command` and its matches, naming keys the
//! docopt way. Without it, build [`Arguments`] yourself or load a JSON dump
//! with [`arguments_from_json`].
//!
//! [`Duration`]: std::time::Duration

pub mod error;

mod binding;
#[cfg(feature = "clap")]
mod cli;
mod coerce;
mod duration;
mod hooks;
mod unmarshal;
mod value;
mod walk;

#[cfg(test)]
mod fixtures;

pub use binding::{Binding, Options};
#[cfg(feature = "clap")]
pub use cli::from_clap;
pub use coerce::{Category, Coerce, Rejection};
pub use duration::{DurationError, parse_duration};
pub use error::{BindError, FormatError};
pub use hooks::{Hook, HookRegistry};
pub use unmarshal::{Unmarshaller, unmarshal};
pub use value::{ArgValue, Arguments, arguments_from_json};
