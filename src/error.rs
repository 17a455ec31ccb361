use thiserror::Error;

/// Errors reported by [`Map`](crate::Map) operations.
///
/// Looking up or deleting a key that is not present is not an error; those operations return
/// `None` instead.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An entry was requested from an empty map by the named operation.
    #[error("map underflow: `{0}` called on an empty map")]
    Underflow(&'static str),
}

/// A specialized `Result` for map operations.
pub type Result<T> = std::result::Result<T, Error>;
