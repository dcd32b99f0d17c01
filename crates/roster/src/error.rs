//! Error types for roster operations

use thiserror::Error;

/// Main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// A hire would duplicate a name already on the chain
    #[error("hire failed: {name} is already on the roster")]
    AlreadyEmployed {
        /// Name that collided
        name: String,
    },

    /// A dismissal named nobody on the chain
    #[error("dismiss failed: {name} is not on the roster")]
    NotOnRoster {
        /// Name that was looked for
        name: String,
    },
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;
