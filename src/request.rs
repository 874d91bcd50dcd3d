//! Request descriptors and raw responses exchanged with the transport layer.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{ApiRejection, DecodeError},
	session::SessionToken,
};

/// HTTP verbs used by the tracker API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
	/// HTTP GET.
	Get,
	/// HTTP POST.
	Post,
	/// HTTP PATCH.
	Patch,
	/// HTTP DELETE.
	Delete,
}
impl Method {
	/// Returns the canonical uppercase verb.
	pub const fn as_str(self) -> &'static str {
		match self {
			Method::Get => "GET",
			Method::Post => "POST",
			Method::Patch => "PATCH",
			Method::Delete => "DELETE",
		}
	}
}
impl Display for Method {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Caller-facing description of one API call.
///
/// The bearer credential is never part of the descriptor; the client injects the
/// current session token when the request is dispatched.
#[derive(Clone, Debug)]
pub struct RequestDescriptor {
	/// HTTP verb.
	pub method: Method,
	/// API path, with a leading slash, resolved against the configured base URL.
	pub path: String,
	/// Query-string pairs appended in order.
	pub query: Vec<(String, String)>,
	/// Optional JSON body.
	pub body: Option<serde_json::Value>,
}
impl RequestDescriptor {
	/// Creates a descriptor for the provided verb and path.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self { method, path: path.into(), query: Vec::new(), body: None }
	}

	/// Shorthand for a GET descriptor.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::Get, path)
	}

	/// Shorthand for a POST descriptor.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::Post, path)
	}

	/// Shorthand for a PATCH descriptor.
	pub fn patch(path: impl Into<String>) -> Self {
		Self::new(Method::Patch, path)
	}

	/// Shorthand for a DELETE descriptor.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::Delete, path)
	}

	/// Appends a query pair.
	pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		self.query.push((key.into(), value.to_string()));

		self
	}

	/// Appends a query pair when a value is present; skipped otherwise.
	pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
		match value {
			Some(value) => self.query(key, value),
			None => self,
		}
	}

	/// Attaches a pre-built JSON body.
	pub fn body(mut self, body: serde_json::Value) -> Self {
		self.body = Some(body);

		self
	}

	/// Serializes `payload` into the JSON body.
	pub fn json<B>(self, payload: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		let body = serde_json::to_value(payload).map_err(|source| Error::EncodeBody { source })?;

		Ok(self.body(body))
	}
}

/// Fully resolved request handed to the transport.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
	/// HTTP verb.
	pub method: Method,
	/// Absolute URL including the query string.
	pub url: Url,
	/// Bearer credential to attach, when a session exists.
	pub bearer: Option<SessionToken>,
	/// Optional JSON body.
	pub body: Option<serde_json::Value>,
	/// Per-request timeout; set for refresh calls only.
	pub timeout: Option<StdDuration>,
}

/// Transport-level response surfaced to the client core.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration, when the backend sent one.
	pub retry_after: Option<Duration>,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl RawResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Decodes the body as JSON, reporting the failing path on malformed payloads.
	pub fn json<T>(&self) -> Result<T, DecodeError>
	where
		T: DeserializeOwned,
	{
		let mut deserializer = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| DecodeError { source, status: self.status })
	}

	/// Builds the caller-facing rejection for a non-2xx response.
	pub(crate) fn rejection(&self) -> ApiRejection {
		#[derive(Deserialize)]
		struct Payload {
			message: Option<String>,
		}

		// Error bodies carry no guaranteed shape; a `message` field is extracted when present.
		let message =
			serde_json::from_slice::<Payload>(&self.body).ok().and_then(|payload| payload.message);

		ApiRejection { status: self.status, message, retry_after: self.retry_after }
	}
}
