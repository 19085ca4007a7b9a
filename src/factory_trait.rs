//! Core trait defining factory behavior.
//!
//! This module provides the `FactoryApi` trait with default implementations for
//! namespaced registration and tag-based construction.
//!
//! Every factory owns its table. Entries are keyed by canonical key
//! (`namespace.tag`) and are insert-only: a key that is present is never
//! overwritten.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, RwLock};

use tracing::{debug, warn};

use crate::tag::{self, join_key};
use crate::{FactoryError, FactoryEvent};

/// A registered constructor.
pub type Constructor<A, P> = Arc<dyn Fn(A) -> P + Send + Sync>;

/// Storage behind a factory: canonical key to constructor.
pub type FactoryTable<A, P> = LazyLock<RwLock<HashMap<String, Constructor<A, P>>>>;

/// Storage for a factory's trace callback.
pub type TraceSlot = LazyLock<Mutex<Option<Arc<dyn Fn(&FactoryEvent) + Send + Sync>>>>;

/// A type that knows how to build a factory's product.
///
/// The implementing type's name doubles as the default tag, see
/// [`FactoryApi::register`].
pub trait Construct<F: FactoryApi> {
    fn construct(args: F::Args) -> F::Product;
}

/// Core trait defining factory behavior.
///
/// Provides default implementations for all factory operations, requiring only
/// the namespace and two accessor methods (`storage` and `trace`) from the
/// implementor. [`define_factory!`](crate::define_factory) generates all of them.
pub trait FactoryApi: Sized + 'static {
    /// Argument passed to constructors. Use a tuple for several arguments.
    type Args;

    /// What constructors produce.
    type Product;

    /// Unique identity of this factory, usually its fully-qualified path.
    const NAMESPACE: &'static str;

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Access the trace callback static.
    fn trace() -> &'static TraceSlot;

    /// Set a callback invoked for every factory operation.
    ///
    /// # Safety Restrictions
    ///
    /// The callback must NOT call `set_trace_callback`, `clear_trace_callback`
    /// or any operation on the same factory, as this will deadlock on the
    /// trace lock.
    fn set_trace_callback(&self, callback: impl Fn(&FactoryEvent) + Send + Sync + 'static) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the trace callback.
    fn clear_trace_callback(&self) {
        let mut guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    /// Emit an event to the current callback, if any.
    ///
    /// Never called while the table lock is held.
    fn emit_event(&self, event: &FactoryEvent) {
        let guard = Self::trace().lock().unwrap_or_else(|p| p.into_inner());
        if let Some(callback) = guard.as_ref() {
            callback(event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Naming
    // -------------------------------------------------------------------------------------------------

    /// Namespace of this factory.
    fn namespace(&self) -> &'static str {
        Self::NAMESPACE
    }

    /// Tag used for `T` when no custom tag is given.
    fn default_tag<T: ?Sized>(&self) -> &'static str {
        tag::default_tag::<T>()
    }

    /// Canonical key of `tag` in this factory.
    fn canonicalize(&self, tag: &str) -> String {
        join_key(self.namespace(), tag)
    }

    // -------------------------------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------------------------------

    /// Access the storage static.
    fn storage() -> &'static FactoryTable<Self::Args, Self::Product>;

    /// Register `T` under `custom_tag`, or under its type name when `None`.
    ///
    /// Returns the canonical key.
    ///
    /// # Panics
    ///
    /// Duplicate registration is a configuration bug and aborts. Use
    /// [`try_register`](Self::try_register) when tags come from runtime input.
    fn register<T>(&self, custom_tag: Option<&str>) -> String
    where
        T: Construct<Self> + 'static,
    {
        self.try_register::<T>(custom_tag)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Register `T` under `custom_tag`, or under its type name when `None`.
    ///
    /// An empty custom tag counts as absent.
    ///
    /// # Errors
    ///
    /// [`FactoryError::DuplicateRegistration`] if the canonical key is taken.
    /// The existing entry is left untouched.
    fn try_register<T>(&self, custom_tag: Option<&str>) -> Result<String, FactoryError>
    where
        T: Construct<Self> + 'static,
    {
        let tag = custom_tag
            .filter(|tag| !tag.is_empty())
            .unwrap_or_else(|| self.default_tag::<T>());
        self.try_register_fn(tag, T::construct)
    }

    /// Register a closure or function under an explicit tag.
    ///
    /// # Panics
    ///
    /// On duplicate registration, like [`register`](Self::register).
    fn register_fn<F>(&self, tag: &str, constructor: F) -> String
    where
        F: Fn(Self::Args) -> Self::Product + Send + Sync + 'static,
    {
        self.try_register_fn(tag, constructor)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Register a closure or function under an explicit tag.
    ///
    /// # Errors
    ///
    /// [`FactoryError::DuplicateRegistration`] if the canonical key is taken.
    fn try_register_fn<F>(&self, tag: &str, constructor: F) -> Result<String, FactoryError>
    where
        F: Fn(Self::Args) -> Self::Product + Send + Sync + 'static,
    {
        let key = self.canonicalize(tag);

        // Check and insert under one write lock. Poisoning is recovered since
        // an insert-only map is never left half-updated.
        let inserted = {
            let mut table = Self::storage()
                .write()
                .unwrap_or_else(|p| p.into_inner());
            if table.contains_key(&key) {
                false
            } else {
                table.insert(key.clone(), Arc::new(constructor));
                true
            }
        };

        if !inserted {
            warn!(namespace = self.namespace(), tag, key = %key, "duplicate factory registration");
            self.emit_event(&FactoryEvent::Duplicate { key: key.clone() });
            return Err(FactoryError::DuplicateRegistration { key });
        }

        debug!(namespace = self.namespace(), tag, key = %key, "registered constructor");
        self.emit_event(&FactoryEvent::Register { key: key.clone() });
        Ok(key)
    }

    // -------------------------------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------------------------------

    /// Build a product with the constructor registered under `tag`.
    ///
    /// The table lock is released before the constructor runs, so
    /// constructors may call `create` themselves.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::NotRegistered`] if nothing is registered under `tag`
    /// - [`FactoryError::RegistryLock`] if the table lock is poisoned
    fn create(&self, tag: &str, args: Self::Args) -> Result<Self::Product, FactoryError> {
        let key = self.canonicalize(tag);
        let constructor = Self::storage()
            .read()
            .map_err(|_| FactoryError::RegistryLock)?
            .get(&key)
            .cloned();

        self.emit_event(&FactoryEvent::Create {
            key: key.clone(),
            found: constructor.is_some(),
        });

        match constructor {
            Some(constructor) => {
                debug!(namespace = self.namespace(), tag, "creating product");
                Ok(constructor(args))
            }
            None => {
                warn!(namespace = self.namespace(), tag, key = %key, "tag not registered");
                Err(FactoryError::NotRegistered {
                    tag: tag.to_owned(),
                    namespace: self.namespace(),
                    key,
                })
            }
        }
    }

    /// Check whether `tag` is registered in this factory.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::RegistryLock`] if the table lock is poisoned
    fn contains(&self, tag: &str) -> Result<bool, FactoryError> {
        let key = self.canonicalize(tag);
        let found = Self::storage()
            .read()
            .map(|table| table.contains_key(&key))
            .map_err(|_| FactoryError::RegistryLock)?;

        self.emit_event(&FactoryEvent::Contains { key, found });

        Ok(found)
    }

    /// Registered tags, namespace stripped, sorted.
    ///
    /// # Errors
    ///
    /// - [`FactoryError::RegistryLock`] if the table lock is poisoned
    fn tags(&self) -> Result<Vec<String>, FactoryError> {
        let table = Self::storage()
            .read()
            .map_err(|_| FactoryError::RegistryLock)?;
        let mut tags: Vec<String> = table
            .keys()
            .filter_map(|key| tag::strip_namespace(self.namespace(), key))
            .map(str::to_owned)
            .collect();
        drop(table);

        tags.sort_unstable();
        Ok(tags)
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
