//! Session persistence contracts and built-in stores for the bearer token.

pub mod file;
pub mod memory;

mod token;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use token::SessionToken;

// self
use crate::_prelude::*;

/// Boxed future type returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SessionError>> + 'a + Send>>;

/// Durable single-slot storage for the current session token.
///
/// The store is the crate's analogue of the browser's persisted token slot: it holds
/// at most one token, survives process restarts when the backend does, and is owned
/// exclusively by the client; callers never write to it directly.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Returns the persisted token, if a session exists.
	fn load(&self) -> StoreFuture<'_, Option<SessionToken>>;

	/// Persists (or replaces) the current token.
	fn save(&self, token: SessionToken) -> StoreFuture<'_, ()>;

	/// Removes the persisted token, ending the stored session.
	fn clear(&self) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
