use thiserror::Error;

/// Errors returned by factory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// The canonical key is already taken in this factory.
    #[error("Duplicate tag registration found! Tag {key} has already been registered")]
    DuplicateRegistration {
        /// Canonical key that was already present.
        key: String,
    },

    /// No constructor is registered under the tag in this factory's namespace.
    #[error("Tag {key} is not registered in the namespace {namespace}")]
    NotRegistered {
        /// Tag as passed by the caller.
        tag: String,
        /// Namespace of the factory that was asked.
        namespace: &'static str,
        /// Canonical key that was looked up.
        key: String,
    },

    /// The table lock was poisoned by a panicking thread.
    #[error("Failed to acquire factory lock")]
    RegistryLock,
}
