use thiserror::Error;

/// Errors that can occur when reading the value out of an optional.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalError {
    /// The optional held no value.
    #[error("Accessed the value of an empty optional.")]
    EmptyAccess,
}
