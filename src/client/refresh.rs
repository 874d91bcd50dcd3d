//! Single-flight token refresh and the pending-request protocol around it.
//!
//! The first request to observe a `401` becomes the episode's trigger: it acquires
//! the flight guard, issues exactly one `PATCH /token/refresh`, and publishes the
//! outcome (rotated token or terminal failure) on the shared bearer state. Every
//! other request whose `401` lands during the episode waits on the guard's FIFO
//! queue (the crate's rendition of the pending-request queue) and, once admitted,
//! reuses the published outcome instead of contacting the refresh endpoint again.
//! A failed refresh tears the session down: the store is cleared, the login redirect
//! fires once, and every waiter rejects with the refresh endpoint's raw error.

mod metrics;

pub use metrics::RefreshMetrics;

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	error::RefreshFailure,
	http::HttpTransport,
	obs::{self, OpKind, OpOutcome, OpSpan},
	request::{Method, PreparedRequest},
	session::SessionToken,
};

const REFRESH_PATH: &str = "/token/refresh";

#[derive(Debug, Deserialize)]
struct RefreshPayload {
	token: String,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Recovers the session after a `401` observed under `observed_epoch`.
	///
	/// Returns the token to replay with, or the terminal failure that ended the
	/// episode. At most one refresh call leaves this method per episode, no matter
	/// how many requests entered it.
	pub(crate) async fn recover_session(&self, observed_epoch: u64) -> Result<SessionToken> {
		const KIND: OpKind = OpKind::Refresh;

		let span = OpSpan::new(KIND, "recover_session");

		obs::record_op_outcome(KIND, OpOutcome::Attempt);

		let result = span
			.instrument(async move {
				let _flight = self.flight.lock().await;

				// Waiters admitted after the flight settled reuse its outcome.
				{
					let state = self.bearer.lock();

					if state.epoch != observed_epoch {
						return match (&state.token, &state.last_failure) {
							(Some(token), _) => Ok(token.clone()),
							(None, Some(failure)) => Err(failure.clone().into()),
							(None, None) => Err(RefreshFailure {
								status: None,
								message: "session was cleared while awaiting token refresh".into(),
							}
							.into()),
						};
					}
				}

				self.refresh_metrics.record_attempt();

				let current = self.bearer.lock().token.clone();
				let request = PreparedRequest {
					method: Method::Patch,
					url: self.config.endpoint(REFRESH_PATH)?,
					bearer: current,
					body: None,
					timeout: Some(self.config.refresh_timeout),
				};

				match self.execute_refresh(request).await {
					Ok(token) => {
						self.install_token(token.clone());
						self.refresh_metrics.record_success();

						// The rotated session is already live; failing to persist it
						// degrades durability, not the episode.
						if let Err(e) = self.store.save(token.clone()).await {
							obs::record_store_failure("save_rotated_token", &e);
						}

						Ok(token)
					},
					Err(failure) => {
						// Teardown: the failure is sticky for every queued waiter.
						if let Err(e) = self.store.clear().await {
							obs::record_store_failure("clear_on_teardown", &e);
						}

						self.redirect.redirect_to_login();

						{
							let mut state = self.bearer.lock();

							state.epoch += 1;
							state.token = None;
							state.last_failure = Some(failure.clone());
						}

						self.refresh_metrics.record_failure();

						Err(failure.into())
					},
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(KIND, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(KIND, OpOutcome::Failure),
		}

		result
	}

	async fn execute_refresh(&self, request: PreparedRequest) -> Result<SessionToken, RefreshFailure> {
		let response = self
			.transport
			.execute(request)
			.await
			.map_err(|err| RefreshFailure { status: None, message: err.to_string() })?;

		if !response.is_success() {
			let rejection = response.rejection();

			return Err(RefreshFailure {
				status: Some(rejection.status),
				message: rejection
					.message
					.unwrap_or_else(|| format!("token refresh returned status {}", rejection.status)),
			});
		}

		let payload: RefreshPayload = response
			.json()
			.map_err(|err| RefreshFailure { status: Some(err.status), message: err.to_string() })?;

		Ok(SessionToken::new(payload.token))
	}
}
