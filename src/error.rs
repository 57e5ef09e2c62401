//! Error types for building and searching a Network.

/// Errors that can occur while building a [`Network`](crate::Network).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A Station with this name was already added
    #[error("duplicate station: {0}")]
    DuplicateStation(String),

    /// A Link or Line refers to a Station that was never added
    #[error("unknown station: {0}")]
    UnknownStation(String),
}

/// Errors that can occur when searching a [`Network`](crate::Network).
///
/// Note that an unreachable Goal is not an Error. See [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start or end name is not a Station of the Network
    #[error("unknown station: {0}")]
    UnknownStation(String),
}
