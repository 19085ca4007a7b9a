//! Definition-time registration.
//!
//! [`auto_register!`](crate::auto_register) submits a [`PendingRegistration`]
//! next to the type it registers. The linker collects every submission and
//! [`install_pending`] feeds them through [`FactoryApi::register`] at startup.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::{Construct, FactoryApi, FactoryError};

/// A registration submitted with `auto_register!`, not yet installed.
pub struct PendingRegistration {
    namespace: &'static str,
    tag: Option<&'static str>,
    resolve: fn(Option<&'static str>) -> (String, bool),
    install: fn(Option<&'static str>) -> String,
}

impl PendingRegistration {
    #[doc(hidden)]
    pub const fn new(
        namespace: &'static str,
        tag: Option<&'static str>,
        resolve: fn(Option<&'static str>) -> (String, bool),
        install: fn(Option<&'static str>) -> String,
    ) -> Self {
        Self {
            namespace,
            tag,
            resolve,
            install,
        }
    }

    /// Namespace of the target factory.
    pub fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Custom tag, if one was given.
    pub fn tag(&self) -> Option<&'static str> {
        self.tag
    }
}

inventory::collect!(PendingRegistration);

/// Canonical key the registration would use, and whether the table holds it.
#[doc(hidden)]
pub fn resolve_one<F, T>(tag: Option<&'static str>) -> (String, bool)
where
    F: FactoryApi + Default,
    T: Construct<F> + 'static,
{
    let factory = F::default();
    let tag = tag
        .filter(|tag| !tag.is_empty())
        .unwrap_or_else(|| factory.default_tag::<T>());
    let key = factory.canonicalize(tag);
    let taken = F::storage()
        .read()
        .unwrap_or_else(|p| p.into_inner())
        .contains_key(&key);
    (key, taken)
}

#[doc(hidden)]
pub fn install_one<F, T>(tag: Option<&'static str>) -> String
where
    F: FactoryApi + Default,
    T: Construct<F> + 'static,
{
    F::default().register::<T>(tag)
}

/// Installs every `auto_register!` submission. Returns how many were installed.
///
/// Runs once per process; later calls return the same count without
/// registering anything.
///
/// Every submission is checked before any is inserted, so a conflict leaves
/// the tables untouched and a repeated call reports the same key.
///
/// # Panics
///
/// If two submissions resolve to the same canonical key, or a submission's
/// key is already registered.
pub fn install_pending() -> usize {
    static INSTALLED: OnceLock<usize> = OnceLock::new();

    *INSTALLED.get_or_init(|| {
        let pending: Vec<&PendingRegistration> =
            inventory::iter::<PendingRegistration>.into_iter().collect();

        let mut seen = HashSet::with_capacity(pending.len());
        for registration in &pending {
            let (key, taken) = (registration.resolve)(registration.tag);
            if taken || !seen.insert(key.clone()) {
                panic!("{}", FactoryError::DuplicateRegistration { key });
            }
        }

        let mut count = 0;
        for pending in pending {
            let key = (pending.install)(pending.tag);
            debug!(namespace = pending.namespace, key = %key, "installed pending registration");
            count += 1;
        }
        info!(count, "installed pending factory registrations");
        count
    })
}

/// Registers a [`Construct`] implementor with a factory at definition time.
///
/// Nothing is inserted until [`install_pending`] runs. The factory must
/// implement `Default`, which `define_factory!` derives.
///
/// # Examples
///
/// ```rust
/// use tag_factory::{auto_register, define_factory, install_pending, Construct, FactoryApi};
///
/// define_factory!(Greeters: &'static str => String);
///
/// struct Hello;
///
/// impl Construct<Greeters> for Hello {
///     fn construct(name: &'static str) -> String {
///         format!("Hello, {name}!")
///     }
/// }
///
/// auto_register!(Greeters, Hello);
/// auto_register!(Greeters, Hello, "hi");
///
/// install_pending();
/// assert_eq!(Greeters.create("Hello", "Ada").unwrap(), "Hello, Ada!");
/// assert_eq!(Greeters.create("hi", "Bob").unwrap(), "Hello, Bob!");
/// ```
#[macro_export]
macro_rules! auto_register {
    (@submit $factory:ty, $item:ty, $tag:expr) => {
        $crate::inventory::submit! {
            $crate::PendingRegistration::new(
                <$factory as $crate::FactoryApi>::NAMESPACE,
                $tag,
                $crate::auto::resolve_one::<$factory, $item>,
                $crate::auto::install_one::<$factory, $item>,
            )
        }
    };
    ($factory:ty, $item:ty $(,)?) => {
        $crate::auto_register!(@submit $factory, $item, ::std::option::Option::None);
    };
    ($factory:ty, $item:ty, $tag:expr $(,)?) => {
        $crate::auto_register!(@submit $factory, $item, ::std::option::Option::Some($tag));
    };
}
