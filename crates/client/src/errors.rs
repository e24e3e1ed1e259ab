use item_browser_domain::ItemId;
use thiserror::Error;

// =============================================================================
// TransportError
// =============================================================================

/// Failure talking to the server.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    /// The server answered with a 5xx status or the request failed mid-flight.
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The server refused the request with a 4xx status.
    #[error("Rejected with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),
}

// =============================================================================
// UnsyncedEdit
// =============================================================================

/// A local edit the server never acknowledged.
///
/// The local view keeps the edit, so it now disagrees with the server until
/// the next reset fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnsyncedEdit {
    Selection { id: ItemId, selected: bool },

    Reorder { ids: Vec<ItemId> },
}

// =============================================================================
// ClientError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// A page fetch failed; the local view is untouched.
    #[error("Fetching items failed: {0}")]
    Fetch(#[source] TransportError),

    /// A write failed after the local view already applied it.
    #[error("Local edit was not saved on the server: {source}")]
    UnsyncedEdit {
        edit: UnsyncedEdit,
        #[source]
        source: TransportError,
    },
}

impl ClientError {
    #[must_use]
    pub const fn transport_error(&self) -> &TransportError {
        match self {
            Self::Fetch(source) | Self::UnsyncedEdit { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    fn unsynced_edit_exposes_its_source() {
        let error = ClientError::UnsyncedEdit {
            edit: UnsyncedEdit::Selection {
                id: ItemId::new(4),
                selected: true,
            },
            source: TransportError::Timeout(10_000),
        };

        assert_eq!(error.transport_error(), &TransportError::Timeout(10_000));
        assert!(error.source().is_some());
        assert_eq!(
            error.to_string(),
            "Local edit was not saved on the server: Timeout after 10000ms"
        );
    }

    #[rstest]
    fn rejected_message_includes_status() {
        let error = TransportError::Rejected {
            status: 400,
            message: "bad page".to_string(),
        };

        assert_eq!(error.to_string(), "Rejected with HTTP 400: bad page");
    }
}
