//! The structure walker.
//!
//! Visits an options struct's bindings depth-first, in declaration order.
//! Every keyed binding must find its key in the arguments; a textual value
//! goes through a registered hook or the field's built-in coercion, a native
//! value is assigned as-is. The first failure aborts the walk. Fields bound
//! before the failure keep their new values.

use crate::binding::{BindingKind, Options, Slot};
use crate::coerce::Rejection;
use crate::error::BindError;
use crate::unmarshal::Unmarshaller;
use crate::value::{ArgValue, Arguments};

impl Unmarshaller {
    /// Fill `options` from `arguments`, appending every key it binds to
    /// `consumed`.
    ///
    /// Unlike [`unmarshal`](Self::unmarshal) this leaves `arguments` alone and
    /// does not check for leftover keys, so callers can apply their own
    /// policy to whatever was not consumed.
    pub fn walk<O: Options + ?Sized>(
        &self,
        arguments: &Arguments,
        options: &mut O,
        consumed: &mut Vec<String>,
    ) -> Result<(), BindError> {
        let options_name = options.options_name();
        for binding in options.bindings() {
            match binding.kind {
                BindingKind::Field { key, mut slot } => {
                    self.bind_field(arguments, options_name, key, slot.as_mut())?;
                    consumed.push(key.to_string());
                }
                BindingKind::Nested(nested) => {
                    tracing::trace!(options = nested.options_name(), "descending into nested options");
                    self.walk(arguments, nested, consumed)?;
                }
            }
        }
        Ok(())
    }

    fn bind_field(
        &self,
        arguments: &Arguments,
        options: &'static str,
        key: &'static str,
        slot: &mut dyn Slot,
    ) -> Result<(), BindError> {
        let Some(value) = arguments.get(key) else {
            return Err(BindError::MissingKey {
                options,
                key: key.to_string(),
            });
        };
        let Some(value) = value else {
            tracing::trace!(key, "argument not given, field keeps its value");
            return Ok(());
        };

        let outcome = match value {
            ArgValue::Str(raw) => {
                if let Some(hook) = self.hooks().get(slot.target_type()) {
                    tracing::trace!(key, target_type = hook.type_name(), "applying coercion hook");
                    return hook
                        .apply(slot.target_mut(), raw)
                        .map_err(|message| BindError::Coercion {
                            key: key.to_string(),
                            message,
                        });
                }
                tracing::trace!(key, category = %slot.category(), "coercing argument");
                slot.set_text(raw)
            }
            native => slot.set_native(native),
        };

        outcome.map_err(|rejection| attach_key(key, rejection))
    }
}

fn attach_key(key: &str, rejection: Rejection) -> BindError {
    let key = key.to_string();
    match rejection {
        Rejection::Format(source) => BindError::Format { key, source },
        Rejection::Mismatch { expected, found } => BindError::Mismatch {
            key,
            expected,
            found,
        },
        Rejection::NoHook(type_name) => BindError::Coercion {
            key,
            message: format!("no hook registered for type {type_name}"),
        },
    }
}
