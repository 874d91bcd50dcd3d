//! Client-level error types shared across the transport, session, and endpoint layers.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session-storage failure.
	#[error("{0}")]
	Session(
		#[from]
		#[source]
		crate::session::SessionError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] crate::config::ClientConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Backend rejected the request with a non-2xx status.
	#[error(transparent)]
	Rejected(#[from] ApiRejection),
	/// Token refresh failed; the session has been torn down.
	#[error(transparent)]
	SessionExpired(#[from] RefreshFailure),
	/// Response body could not be decoded.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Request body could not be serialized.
	#[error("Request body could not be serialized to JSON.")]
	EncodeBody {
		/// Underlying serialization failure.
		#[source]
		source: serde_json::Error,
	},
}
impl Error {
	/// Returns the HTTP status attached to the error, when one exists.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Rejected(rejection) => Some(rejection.status),
			Self::SessionExpired(failure) => failure.status,
			Self::Decode(decode) => Some(decode.status),
			_ => None,
		}
	}
}

/// Non-2xx response surfaced to the caller unmodified.
#[derive(Clone, Debug, ThisError)]
#[error("API rejected the request with status {status}.")]
pub struct ApiRejection {
	/// HTTP status code returned by the backend.
	pub status: u16,
	/// Backend-supplied `message` field, when the body carried one.
	pub message: Option<String>,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Terminal refresh failure fanned out to every request waiting on the flight.
///
/// The raw status and message of the refresh endpoint's rejection are preserved so
/// callers can distinguish a revoked session from a transport outage.
#[derive(Clone, Debug, ThisError)]
#[error("Session refresh failed: {message}")]
pub struct RefreshFailure {
	/// HTTP status of the refresh response, absent for transport failures.
	pub status: Option<u16>,
	/// Human-readable failure summary.
	pub message: String,
}

/// Response body decoding failure carrying the JSON path that failed.
#[derive(Debug, ThisError)]
#[error("Response body returned malformed JSON.")]
pub struct DecodeError {
	/// Structured parsing failure.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status of the response whose body failed to decode.
	pub status: u16,
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_accessor_reads_embedded_statuses() {
		let rejected: Error =
			ApiRejection { status: 409, message: None, retry_after: None }.into();
		let expired: Error =
			RefreshFailure { status: Some(403), message: "revoked".into() }.into();
		let transport: Error = TransportError::Io(std::io::Error::other("boom")).into();

		assert_eq!(rejected.status(), Some(409));
		assert_eq!(expired.status(), Some(403));
		assert_eq!(transport.status(), None);
	}

	#[test]
	fn refresh_failure_clones_for_fanout() {
		let failure = RefreshFailure { status: Some(403), message: "Refresh rejected.".into() };
		let fanned = failure.clone();

		assert_eq!(fanned.status, failure.status);
		assert_eq!(fanned.message, failure.message);
	}
}
