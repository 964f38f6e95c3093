//! Per-type coercion hooks.
//!
//! A hook replaces the built-in coercion for exactly one field type. Hooks
//! are keyed by [`TypeId`], so a hook for `i64` applies to every `i64` field
//! and to nothing else (not `Option<i64>`, not a newtype around `i64`).

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

type HookFn = dyn Fn(&mut dyn Any, &str) -> Result<(), String> + Send + Sync;

/// A coercion function for one target type.
pub struct Hook {
    type_id: TypeId,
    type_name: &'static str,
    apply: Box<HookFn>,
}

impl Hook {
    /// Build a hook for fields of type `T`.
    ///
    /// The hook receives the field and the raw argument text and is solely
    /// responsible for setting the field. An `Err` is reported as a coercion
    /// error for the argument's key.
    ///
    /// ```
    /// use argbind::Hook;
    ///
    /// #[derive(Default)]
    /// struct Celsius(f64);
    ///
    /// let hook = Hook::new(|field: &mut Celsius, raw: &str| {
    ///     let kelvin: f64 = raw.trim_end_matches('K').parse()?;
    ///     field.0 = kelvin - 273.15;
    ///     Ok::<_, std::num::ParseFloatError>(())
    /// });
    /// assert!(hook.type_name().ends_with("Celsius"));
    /// ```
    pub fn new<T, F, E>(f: F) -> Self
    where
        T: Any,
        F: Fn(&mut T, &str) -> Result<(), E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let type_name = std::any::type_name::<T>();
        Self {
            type_id: TypeId::of::<T>(),
            type_name,
            apply: Box::new(move |target: &mut dyn Any, raw: &str| {
                let field = target
                    .downcast_mut::<T>()
                    .ok_or_else(|| format!("hook for {type_name} applied to another type"))?;
                f(field, raw).map_err(|e| e.to_string())
            }),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn apply(&self, target: &mut dyn Any, raw: &str) -> Result<(), String> {
        (self.apply)(target, raw)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Hooks keyed by target type. Later registrations replace earlier ones.
#[derive(Debug, Default)]
pub struct HookRegistry {
    hooks: HashMap<TypeId, Hook>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `hook`, replacing any hook already registered for its type.
    pub fn register(&mut self, hook: Hook) {
        tracing::debug!(target_type = hook.type_name, "registering coercion hook");
        self.hooks.insert(hook.type_id, hook);
    }

    /// Register every hook in `hooks`.
    pub fn register_many(&mut self, hooks: impl IntoIterator<Item = Hook>) {
        for hook in hooks {
            self.register(hook);
        }
    }

    pub fn get(&self, type_id: TypeId) -> Option<&Hook> {
        self.hooks.get(&type_id)
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.hooks.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
