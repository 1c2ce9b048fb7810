//! Shared ureq plumbing.

use leadsync_core::{remote::truncate_message, RemoteError};

/// Map a failed ureq call onto the remote error taxonomy. Non-2xx bodies are
/// read and truncated; unreadable bodies degrade to an empty message.
pub(crate) fn remote_error(err: ureq::Error) -> RemoteError {
    match err {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();
            RemoteError::Status {
                status,
                body: truncate_message(&body),
            }
        }
        ureq::Error::Transport(transport) => RemoteError::Transport(transport.to_string()),
    }
}

/// Map a JSON body read failure onto [`RemoteError::Decode`].
pub(crate) fn decode_error(err: std::io::Error) -> RemoteError {
    RemoteError::Decode(err.to_string())
}
