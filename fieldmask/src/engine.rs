//! The traversal engine.
//!
//! [`Masker`] owns a [`StrategyRegistry`] and produces masked copies of
//! records. Per field, in declaration order:
//!
//! 1. `String` field with a directive: parse it, look the method up, and
//!    replace the value with the strategy's output. Unknown methods copy the
//!    value unchanged.
//! 2. Nested field (`Option<R>`, `Box<R>`, `R`, containers): walk it through
//!    [`Maskable`]; absent values stay absent, present ones are rebuilt.
//! 3. Anything else: copy.
//!
//! The walk is synchronous and only reads the registry, so one masker can be
//! shared across threads. There is no cycle detection; inputs must be trees.

use std::{any::type_name, sync::Arc};

use crate::{
    directive::Directive,
    error::MaskError,
    record::{FieldDescriptor, Maskable},
    registry::StrategyRegistry,
    strategy::Strategy,
};

/// Mask character used when neither the field nor the masker sets one.
pub const DEFAULT_MASK_CHAR: &str = "*";

/// Masks records using a registry of named strategies.
///
/// ```
/// use fieldmask::{Mask, MaskExt, Masker};
///
/// #[derive(Mask)]
/// struct Contact {
///     #[mask("last,4", mask_char = "#")]
///     phone: String,
///     city: String,
/// }
///
/// let masker = Masker::new();
/// let contact = Contact { phone: "1234567890".into(), city: "Quito".into() };
/// let masked = contact.masked(&masker);
/// assert_eq!(masked.phone, "123456####");
/// assert_eq!(masked.city, "Quito");
/// assert_eq!(contact.phone, "1234567890");
/// ```
#[derive(Clone, Debug)]
pub struct Masker {
    registry: StrategyRegistry,
    default_mask_char: String,
}

impl Masker {
    /// A masker with the six built-in strategies and `*` as mask character.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a masker.
    #[must_use]
    pub fn builder() -> MaskerBuilder {
        MaskerBuilder::default()
    }

    /// A masker backed by an existing (possibly shared) registry.
    #[must_use]
    pub fn with_registry(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            default_mask_char: DEFAULT_MASK_CHAR.to_owned(),
        }
    }

    /// The strategy registry. Registrations made through it are visible to
    /// this masker and every clone.
    #[must_use]
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Mask character used for fields without a `mask_char` override.
    #[must_use]
    pub fn default_mask_char(&self) -> &str {
        &self.default_mask_char
    }

    /// Registers `strategy` under `name`, returning the strategy it replaced;
    /// see [`StrategyRegistry::register`].
    pub fn register<S>(&self, name: impl Into<String>, strategy: S) -> Option<Arc<dyn Strategy>>
    where
        S: Strategy + 'static,
    {
        self.registry.register(name, strategy)
    }

    /// Returns the strategy registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Strategy>, MaskError> {
        self.registry.lookup(name)
    }

    /// Returns a masked copy of `value`, leaving `value` untouched.
    ///
    /// `value` must be a record or a pointer-like wrapper of one (`Box<R>`,
    /// `Option<R>`, `Arc<R>`, `Rc<R>`); the output has the same shape.
    /// Any other root is rejected with [`MaskError::NotARecord`].
    pub fn mask<T: Maskable>(&self, value: &T) -> Result<T, MaskError> {
        if !T::IS_RECORD {
            return Err(MaskError::NotARecord {
                type_name: type_name::<T>(),
            });
        }
        Ok(value.mask_with(self))
    }

    /// Applies a field's directive to its value.
    ///
    /// Fields without a directive are copied. Called by the `String` impl of
    /// [`Maskable::mask_directed`].
    #[must_use]
    pub fn mask_field(&self, value: &str, field: &FieldDescriptor) -> String {
        match field.directive() {
            Some(directive) => self.apply(value, directive, field.mask_char(), field.name()),
            None => value.to_owned(),
        }
    }

    /// Applies a directive string to a single value.
    ///
    /// ```
    /// use fieldmask::Masker;
    ///
    /// let masker = Masker::new();
    /// assert_eq!(masker.mask_str("Wolfenstein", "between,2-3", None), "Wo******ein");
    /// assert_eq!(masker.mask_str("secret", "nope", None), "secret");
    /// ```
    #[must_use]
    pub fn mask_str(&self, value: &str, directive: &str, mask_char: Option<&str>) -> String {
        self.apply(value, directive, mask_char, "")
    }

    fn apply(&self, value: &str, raw: &str, mask_char: Option<&str>, field: &str) -> String {
        let directive = Directive::parse(raw);
        let mask_char = mask_char
            .filter(|mask_char| !mask_char.is_empty())
            .unwrap_or(self.default_mask_char.as_str());
        match self.registry.lookup(directive.method()) {
            Ok(strategy) => strategy.mask(value, mask_char, directive.options()),
            Err(err) => {
                tracing::debug!(field, directive = raw, error = %err, "field copied unmasked");
                value.to_owned()
            }
        }
    }
}

impl Default for Masker {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`Masker`].
///
/// ```
/// use fieldmask::Masker;
///
/// let masker = Masker::builder()
///     .default_mask_char("#")
///     .strategy_fn("redact", |_: &str, _: &str, _: &[&str]| "[REDACTED]".to_owned())
///     .build();
/// assert_eq!(masker.mask_str("abc", "all", None), "###");
/// assert_eq!(masker.mask_str("abc", "redact", None), "[REDACTED]");
/// ```
#[derive(Debug)]
pub struct MaskerBuilder {
    registry: Option<StrategyRegistry>,
    builtins: bool,
    default_mask_char: String,
    custom: StrategyRegistry,
}

impl Default for MaskerBuilder {
    fn default() -> Self {
        Self {
            registry: None,
            builtins: true,
            default_mask_char: DEFAULT_MASK_CHAR.to_owned(),
            custom: StrategyRegistry::new(),
        }
    }
}

impl MaskerBuilder {
    /// Mask character for fields without a `mask_char` override. An empty
    /// string keeps the current default.
    #[must_use]
    pub fn default_mask_char(mut self, mask_char: impl Into<String>) -> Self {
        let mask_char = mask_char.into();
        if !mask_char.is_empty() {
            self.default_mask_char = mask_char;
        }
        self
    }

    /// Skips seeding the built-in strategies.
    #[must_use]
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    /// Uses `registry` (and shares it with its other holders). Missing
    /// built-ins are still seeded unless [`Self::without_builtins`] is set;
    /// entries the registry already holds are left alone.
    #[must_use]
    pub fn registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Registers a custom strategy. Custom strategies are applied after the
    /// built-ins, so they can override them.
    #[must_use]
    pub fn strategy<S>(self, name: impl Into<String>, strategy: S) -> Self
    where
        S: Strategy + 'static,
    {
        self.custom.register(name, strategy);
        self
    }

    /// Registers a closure as a custom strategy.
    #[must_use]
    pub fn strategy_fn<F>(self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &str, &[&str]) -> String + Send + Sync + 'static,
    {
        self.custom.register_fn(name, f);
        self
    }

    /// Builds the masker.
    ///
    /// Built-ins are seeded only under names the registry does not hold yet,
    /// so overrides already in a shared registry survive. Custom strategies
    /// from this builder are registered last and always win.
    #[must_use]
    pub fn build(self) -> Masker {
        let registry = self.registry.unwrap_or_default();
        if self.builtins {
            registry.seed_builtins();
        }
        for name in self.custom.names() {
            if let Some(strategy) = self.custom.unregister(&name) {
                registry.register_arc(name, strategy);
            }
        }
        Masker {
            registry,
            default_mask_char: self.default_mask_char,
        }
    }
}
