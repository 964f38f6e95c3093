use std::sync::LazyLock;

use crate::binding::Options;
use crate::error::BindError;
use crate::hooks::{Hook, HookRegistry};
use crate::value::Arguments;

static SHARED: LazyLock<Unmarshaller> = LazyLock::new(Unmarshaller::new);

/// Fill `options` from `arguments` using the shared, hook-free unmarshaller.
///
/// See [`Unmarshaller::unmarshal`].
pub fn unmarshal<O: Options + ?Sized>(
    arguments: &mut Arguments,
    options: &mut O,
) -> Result<(), BindError> {
    Unmarshaller::shared().unmarshal(arguments, options)
}

/// Binds argument maps onto options structs, with its own set of hooks.
///
/// ```
/// use argbind::{Arguments, ArgValue, Binding, Hook, Options, Unmarshaller};
///
/// #[derive(Default)]
/// struct Opts {
///     retries: u8,
/// }
///
/// impl Options for Opts {
///     fn bindings(&mut self) -> Vec<Binding<'_>> {
///         vec![Binding::field("--retries", &mut self.retries)]
///     }
/// }
///
/// let unmarshaller = Unmarshaller::new().with_hook(Hook::new(|n: &mut u8, raw: &str| {
///     *n = if raw == "max" { u8::MAX } else { raw.parse()? };
///     Ok::<_, std::num::ParseIntError>(())
/// }));
///
/// let mut arguments = Arguments::from([("--retries".to_string(), Some(ArgValue::from("max")))]);
/// let mut opts = Opts::default();
/// unmarshaller.unmarshal(&mut arguments, &mut opts).unwrap();
/// assert_eq!(opts.retries, 255);
/// assert!(arguments.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Unmarshaller {
    hooks: HookRegistry,
}

impl Unmarshaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide instance behind [`unmarshal`]. It has no hooks.
    pub fn shared() -> &'static Unmarshaller {
        &SHARED
    }

    /// Add a hook, replacing any earlier hook for the same type.
    pub fn with_hook(mut self, hook: Hook) -> Self {
        self.hooks.register(hook);
        self
    }

    /// Add several hooks at once.
    pub fn with_hooks(mut self, hooks: impl IntoIterator<Item = Hook>) -> Self {
        self.hooks.register_many(hooks);
        self
    }

    pub fn register(&mut self, hook: Hook) -> &mut Self {
        self.hooks.register(hook);
        self
    }

    pub fn register_many(&mut self, hooks: impl IntoIterator<Item = Hook>) -> &mut Self {
        self.hooks.register_many(hooks);
        self
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Fill `options` from `arguments`.
    ///
    /// On success every key an options field bound is removed from
    /// `arguments`. Keys left over afterwards mean the argument source
    /// produced something the options struct does not declare, which fails
    /// with [`BindError::UnknownKey`] (one key) or [`BindError::UnknownKeys`]
    /// (several, sorted). The leftover keys stay in `arguments`.
    ///
    /// On error `options` may be partially filled: fields bound before the
    /// failing one keep their new values.
    pub fn unmarshal<O: Options + ?Sized>(
        &self,
        arguments: &mut Arguments,
        options: &mut O,
    ) -> Result<(), BindError> {
        let mut consumed = Vec::new();
        self.walk(arguments, options, &mut consumed)?;

        for key in &consumed {
            arguments.remove(key);
        }

        let mut leftover: Vec<String> = arguments.keys().cloned().collect();
        leftover.sort();
        tracing::debug!(
            options = options.options_name(),
            consumed = consumed.len(),
            leftover = leftover.len(),
            "unmarshalled arguments"
        );

        match leftover.len() {
            0 => Ok(()),
            1 => Err(BindError::UnknownKey {
                key: leftover.remove(0),
            }),
            _ => Err(BindError::UnknownKeys(
                leftover
                    .into_iter()
                    .map(|key| BindError::UnknownKey { key })
                    .collect(),
            )),
        }
    }
}
