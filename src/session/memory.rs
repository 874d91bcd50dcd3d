//! Thread-safe in-memory [`SessionStore`] for local development and tests.

// self
use crate::{
	_prelude::*,
	session::{SessionError, SessionStore, SessionToken, StoreFuture},
};

type Slot = Arc<RwLock<Option<SessionToken>>>;

/// Keeps the token slot in-process; nothing survives a restart.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Slot);
impl MemoryStore {
	fn load_now(slot: Slot) -> Option<SessionToken> {
		slot.read().clone()
	}

	fn save_now(slot: Slot, token: SessionToken) -> Result<(), SessionError> {
		*slot.write() = Some(token);

		Ok(())
	}

	fn clear_now(slot: Slot) -> Result<(), SessionError> {
		*slot.write() = None;

		Ok(())
	}
}
impl SessionStore for MemoryStore {
	fn load(&self) -> StoreFuture<'_, Option<SessionToken>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(Self::load_now(slot)) })
	}

	fn save(&self, token: SessionToken) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move { Self::save_now(slot, token) })
	}

	fn clear(&self) -> StoreFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move { Self::clear_now(slot) })
	}
}
