//! Login-redirect seam invoked when a session cannot be recovered.
//!
//! The client never reaches into ambient routing state. Whatever composes the
//! application hands it a [`LoginRedirect`] at construction time, and the client fires
//! it exactly once per failed refresh episode.

// self
use crate::_prelude::*;

/// Navigation hook fired when authentication is irrecoverably lost.
pub trait LoginRedirect
where
	Self: Send + Sync,
{
	/// Sends the user to the login view.
	fn redirect_to_login(&self);
}

/// Adapter that turns any `Fn()` closure into a [`LoginRedirect`].
pub struct FnRedirect<F>(F);
impl<F> FnRedirect<F>
where
	F: Fn() + Send + Sync,
{
	/// Wraps the provided closure.
	pub fn new(hook: F) -> Self {
		Self(hook)
	}
}
impl<F> LoginRedirect for FnRedirect<F>
where
	F: Fn() + Send + Sync,
{
	fn redirect_to_login(&self) {
		(self.0)()
	}
}
impl<F> Debug for FnRedirect<F> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FnRedirect(..)")
	}
}

/// No-op redirect for headless contexts without a login view.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRedirect;
impl LoginRedirect for NoRedirect {
	fn redirect_to_login(&self) {}
}
