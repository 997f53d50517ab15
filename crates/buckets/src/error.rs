//! Error types for the bucket registry.

use snafu::Snafu;

/// Result type alias for bucket registry operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors surfaced by the registry and its capability views.
///
/// Both variants are recoverable. [`Error::KeyNotFound`] is an ordinary lookup
/// miss; [`Error::NotWritable`] means a mutation was attempted through a
/// read-only transaction.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum Error {
    /// No bucket is registered under the requested name.
    #[snafu(display("Bucket not found: {name}"))]
    KeyNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// Create or delete was attempted through a read-only view.
    #[snafu(display("Transaction is not writable"))]
    NotWritable,
}

impl Error {
    /// Returns true for a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }
}
