use thiserror::Error;

/// Errors raised by the observer registry on `register`/`deregister`.
///
/// All variants are contract violations by the caller, reported
/// synchronously at the call site; nothing is retried or recovered
/// internally. Out-of-bounds pointer coordinates are not errors and never
/// reach this type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The observer handle is dangling: every strong reference to it has
    /// already been dropped.
    #[error("observer handle is dangling")]
    InvalidArgument,

    /// The same observer instance is already in the registry.
    #[error("observer is already registered")]
    AlreadyRegistered,

    /// The observer instance was never registered, or was already removed.
    #[error("observer is not registered")]
    NotRegistered,

    /// Deregistration was attempted while no observers are registered.
    #[error("no observers are registered")]
    EmptyRegistry,
}
