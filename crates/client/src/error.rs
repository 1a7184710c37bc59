//! Error surface of the API boundary.

use thiserror::Error;

/// Errors reported by [`Api`](crate::Api) implementations.
///
/// A failed call means the server state is unchanged as far as this client
/// knows; in particular the delete flow never touches the cache when it sees
/// one of these.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The request never completed (connection refused, timeout, …).
	#[error("transport failure: {0}")]
	Transport(String),

	/// The server answered with a failure status.
	#[error("server rejected the request (status {status})")]
	Server {
		/// HTTP-ish status code.
		status: u16,
	},

	/// The addressed record does not exist server-side.
	#[error("{kind} {id} not found")]
	NotFound {
		/// Record kind, e.g. `"post"`.
		kind: &'static str,
		/// Raw id that missed.
		id: u64,
	},
}

impl ApiError {
	/// Shorthand for a transport-level failure.
	pub fn transport(message: impl Into<String>) -> Self {
		Self::Transport(message.into())
	}
}
