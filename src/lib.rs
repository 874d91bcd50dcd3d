//! Async client for a manhwa reading-tracker API—bearer sessions, single-flight token refresh,
//! and transparent 401 retry in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod model;
pub mod navigation;
pub mod obs;
pub mod request;
pub mod session;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	#[cfg(feature = "reqwest")]
	use crate::{
		client::ApiClient,
		config::ClientConfig,
		http::ReqwestTransport,
		session::{MemoryStore, SessionStore},
	};
	use crate::navigation::LoginRedirect;

	/// Client type alias used by reqwest-backed integration tests.
	#[cfg(feature = "reqwest")]
	pub type ReqwestTestClient = ApiClient<ReqwestTransport>;

	/// Login-redirect stub that counts invocations for assertions.
	#[derive(Clone, Debug, Default)]
	pub struct RecordingRedirect(Arc<AtomicUsize>);
	impl RecordingRedirect {
		/// Returns how many times the redirect has fired.
		pub fn hits(&self) -> usize {
			self.0.load(Ordering::SeqCst)
		}
	}
	impl LoginRedirect for RecordingRedirect {
		fn redirect_to_login(&self) {
			self.0.fetch_add(1, Ordering::SeqCst);
		}
	}

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	#[cfg(feature = "reqwest")]
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	/// Constructs an [`ApiClient`] backed by an in-memory store, a recording redirect, and the
	/// reqwest transport used across integration tests.
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_client(
		config: ClientConfig,
	) -> (ReqwestTestClient, Arc<MemoryStore>, RecordingRedirect) {
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn SessionStore> = store_backend.clone();
		let redirect = RecordingRedirect::default();
		let client = ApiClient::with_transport(
			config,
			test_reqwest_transport(),
			store,
			Arc::new(redirect.clone()),
		);

		(client, store_backend, redirect)
	}
}

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::{Mutex, RwLock};
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use httpmock as _;
#[cfg(test)] use manhwa_client as _;
