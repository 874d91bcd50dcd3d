//! Authenticated API client with transparent 401 recovery.

pub mod refresh;

pub use refresh::RefreshMetrics;

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::RefreshFailure,
	http::HttpTransport,
	navigation::LoginRedirect,
	obs::{self, OpKind, OpOutcome, OpSpan},
	request::{PreparedRequest, RawResponse, RequestDescriptor},
	session::{SessionStore, SessionToken},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestApiClient = ApiClient<ReqwestTransport>;

/// Authenticated HTTP client for the tracker API.
///
/// The client owns the bearer session: it attaches the current token to every
/// outgoing request, intercepts the first `401` a request observes, recovers it
/// through a single-flight token refresh, and replays the request once. Callers see
/// either the (possibly delayed) response or a terminal authentication failure,
/// never the intermediate `401`.
///
/// All mutable state lives inside the instance; constructing a second client yields
/// a fully independent session, which is what makes the protocol testable.
#[derive(Clone)]
pub struct ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Transport used for every outbound call.
	pub transport: Arc<T>,
	/// Durable store holding the token across restarts.
	pub store: Arc<dyn SessionStore>,
	/// Hook fired once per failed refresh episode.
	pub redirect: Arc<dyn LoginRedirect>,
	/// Immutable configuration for this instance.
	pub config: ClientConfig,
	/// Counters for refresh episodes.
	pub refresh_metrics: Arc<RefreshMetrics>,
	pub(crate) bearer: Arc<Mutex<BearerState>>,
	pub(crate) flight: Arc<AsyncMutex<()>>,
}

/// Live bearer credential plus the episode bookkeeping the refresh protocol needs.
///
/// `epoch` increments on every token transition (login, refresh, teardown, logout).
/// A request records the epoch it dispatched under; a `401` whose epoch is already
/// stale means another request finished recovery first, so the outcome stored here is
/// reused instead of contacting the refresh endpoint again.
#[derive(Debug, Default)]
pub(crate) struct BearerState {
	pub epoch: u64,
	pub token: Option<SessionToken>,
	pub last_failure: Option<RefreshFailure>,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_transport(
		config: ClientConfig,
		transport: impl Into<Arc<T>>,
		store: Arc<dyn SessionStore>,
		redirect: Arc<dyn LoginRedirect>,
	) -> Self {
		Self {
			transport: transport.into(),
			store,
			redirect,
			config,
			refresh_metrics: Default::default(),
			bearer: Default::default(),
			flight: Default::default(),
		}
	}

	/// Loads the persisted token into the live session, if one exists.
	///
	/// Call once at startup; the equivalent of the SPA rehydrating its session from
	/// durable storage after a page reload.
	pub async fn restore_session(&self) -> Result<Option<SessionToken>> {
		let token = self.store.load().await?;

		if let Some(token) = token.clone() {
			self.install_token(token);
		}

		Ok(token)
	}

	/// Persists and installs a freshly issued token (login, registration, SSO).
	pub async fn set_session_token(&self, token: SessionToken) -> Result<()> {
		self.store.save(token.clone()).await?;
		self.install_token(token);

		Ok(())
	}

	/// Returns the in-memory session token, if authenticated.
	pub fn session_token(&self) -> Option<SessionToken> {
		self.bearer.lock().token.clone()
	}

	/// Ends the session: clears the store and the cached bearer.
	pub async fn logout(&self) -> Result<()> {
		self.store.clear().await?;

		let mut state = self.bearer.lock();

		state.epoch += 1;
		state.token = None;
		state.last_failure = None;

		Ok(())
	}

	pub(crate) fn install_token(&self, token: SessionToken) {
		let mut state = self.bearer.lock();

		state.epoch += 1;
		state.token = Some(token);
		state.last_failure = None;
	}

	/// Issues an API call with the current bearer attached.
	///
	/// A first `401` on an authenticated request is recovered through the single-flight
	/// refresh protocol and the request replayed once with the rotated token; a `401` on
	/// the replay, a `401` on an unauthenticated request (nothing to refresh), and every
	/// non-`401` error status, surface to the caller unmodified.
	pub async fn request(&self, descriptor: RequestDescriptor) -> Result<RawResponse> {
		const KIND: OpKind = OpKind::Request;

		let span = OpSpan::new(KIND, "request");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span
			.instrument(async move {
				let (bearer, epoch) = {
					let state = self.bearer.lock();

					(state.token.clone(), state.epoch)
				};
				let authenticated = bearer.is_some();
				let response = self.dispatch(&descriptor, bearer).await?;

				if response.status != 401 || !authenticated {
					return Self::settle(response);
				}

				// First 401: wait for (or perform) the refresh, then replay once.
				let token = self.recover_session(epoch).await?;
				let replayed = self.dispatch(&descriptor, Some(token)).await?;

				Self::settle(replayed)
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	/// Issues an API call and decodes the 2xx body as JSON.
	pub async fn request_json<R>(&self, descriptor: RequestDescriptor) -> Result<R>
	where
		R: DeserializeOwned,
	{
		Ok(self.request(descriptor).await?.json()?)
	}

	async fn dispatch(
		&self,
		descriptor: &RequestDescriptor,
		bearer: Option<SessionToken>,
	) -> Result<RawResponse> {
		let mut url = self.config.endpoint(&descriptor.path)?;

		if !descriptor.query.is_empty() {
			url.query_pairs_mut().extend_pairs(
				descriptor.query.iter().map(|(key, value)| (key.as_str(), value.as_str())),
			);
		}

		let request = PreparedRequest {
			method: descriptor.method,
			url,
			bearer,
			body: descriptor.body.clone(),
			timeout: None,
		};

		self.transport.execute(request).await.map_err(|err| Error::Transport(err.into()))
	}

	fn settle(response: RawResponse) -> Result<RawResponse> {
		if response.is_success() { Ok(response) } else { Err(response.rejection().into()) }
	}
}
#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
	/// Creates a client with the crate's default reqwest transport.
	pub fn new(
		config: ClientConfig,
		store: Arc<dyn SessionStore>,
		redirect: Arc<dyn LoginRedirect>,
	) -> Self {
		Self::with_transport(config, ReqwestTransport::default(), store, redirect)
	}
}
impl<T> Debug for ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.config.base_url)
			.field("authenticated", &self.bearer.lock().token.is_some())
			.finish()
	}
}
