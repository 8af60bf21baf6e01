use thiserror::Error;

/// Failure of the fetch capability itself (network, credentials, DNS, undecodable body).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("client error: {0}")]
    Client(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// The inventory answered with a non-success status code.
    #[error("Failed to get runners. Status code: {status}")]
    InventoryUnavailable { status: u16 },

    #[error("transport error: {0}")]
    Transport(#[from] FetchError),
}

impl CoreError {
    /// Status code of an unavailable inventory, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::InventoryUnavailable { status } => Some(*status),
            CoreError::Transport(_) => None,
        }
    }
}
