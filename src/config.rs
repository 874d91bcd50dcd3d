//! Validated client configuration (base URL, refresh timeout, paging tunables).

// self
use crate::_prelude::*;

/// Errors raised while constructing or validating client configuration.
#[derive(Debug, ThisError)]
pub enum ClientConfigError {
	/// The API is only reachable over HTTPS, except on loopback hosts.
	#[error("The base URL must use HTTPS: {url}.")]
	InsecureBaseUrl {
		/// Base URL that failed validation.
		url: String,
	},
	/// Request paths must resolve against the base URL.
	#[error("Request path `{path}` does not resolve to a valid URL.")]
	InvalidPath {
		/// Offending path.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Page sizes must be positive.
	#[error("The {field} must be positive.")]
	ZeroPageSize {
		/// Which tunable failed validation.
		field: &'static str,
	},
	/// The refresh call needs a bounded wait.
	#[error("The refresh timeout must be positive.")]
	ZeroRefreshTimeout,
}

/// Immutable configuration shared by one [`ApiClient`](crate::client::ApiClient) instance.
#[derive(Clone, Debug)]
pub struct ClientConfig {
	/// Base URL of the tracker API; request paths are appended to it.
	pub base_url: Url,
	/// Upper bound on the refresh call's duration. A timed-out refresh is terminal.
	pub refresh_timeout: StdDuration,
	/// Page size applied to catalog searches when the caller passes none.
	pub default_page_size: u32,
	/// Page size applied to the reading-list dashboard when the caller passes none.
	pub dashboard_page_size: u32,
}
impl ClientConfig {
	/// Starts a builder seeded with the provided base URL.
	pub fn builder(base_url: Url) -> ClientConfigBuilder {
		ClientConfigBuilder::new(base_url)
	}

	/// Resolves an API path against the base URL, preserving any base path prefix.
	pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ClientConfigError> {
		let raw =
			format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path.trim_start_matches('/'));

		Url::parse(&raw)
			.map_err(|source| ClientConfigError::InvalidPath { path: path.to_string(), source })
	}
}

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// Base URL of the tracker API.
	pub base_url: Url,
	/// Refresh-call timeout; defaults to ten seconds.
	pub refresh_timeout: StdDuration,
	/// Catalog-search page size; defaults to 8.
	pub default_page_size: u32,
	/// Dashboard page size; defaults to 10.
	pub dashboard_page_size: u32,
}
impl ClientConfigBuilder {
	const DEFAULT_DASHBOARD_PAGE_SIZE: u32 = 10;
	const DEFAULT_PAGE_SIZE: u32 = 8;
	const DEFAULT_REFRESH_TIMEOUT: StdDuration = StdDuration::from_secs(10);

	/// Creates a new builder seeded with the provided base URL.
	pub fn new(base_url: Url) -> Self {
		Self {
			base_url,
			refresh_timeout: Self::DEFAULT_REFRESH_TIMEOUT,
			default_page_size: Self::DEFAULT_PAGE_SIZE,
			dashboard_page_size: Self::DEFAULT_DASHBOARD_PAGE_SIZE,
		}
	}

	/// Overrides the refresh-call timeout.
	pub fn refresh_timeout(mut self, timeout: StdDuration) -> Self {
		self.refresh_timeout = timeout;

		self
	}

	/// Overrides the catalog-search page size.
	pub fn default_page_size(mut self, size: u32) -> Self {
		self.default_page_size = size;

		self
	}

	/// Overrides the dashboard page size.
	pub fn dashboard_page_size(mut self, size: u32) -> Self {
		self.dashboard_page_size = size;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	///
	/// Plain HTTP is allowed only for loopback hosts (local development backends).
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		match self.base_url.scheme() {
			"https" => (),
			"http" if is_loopback(&self.base_url) => (),
			_ => return Err(ClientConfigError::InsecureBaseUrl { url: self.base_url.to_string() }),
		}
		if self.refresh_timeout.is_zero() {
			return Err(ClientConfigError::ZeroRefreshTimeout);
		}
		if self.default_page_size == 0 {
			return Err(ClientConfigError::ZeroPageSize { field: "default page size" });
		}
		if self.dashboard_page_size == 0 {
			return Err(ClientConfigError::ZeroPageSize { field: "dashboard page size" });
		}

		Ok(ClientConfig {
			base_url: self.base_url,
			refresh_timeout: self.refresh_timeout,
			default_page_size: self.default_page_size,
			dashboard_page_size: self.dashboard_page_size,
		})
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
		Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
		Some(url::Host::Domain(domain)) => domain == "localhost",
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn base_url() -> Url {
		Url::parse("https://api.example.com/v1").expect("Base URL fixture should parse.")
	}

	#[test]
	fn builder_applies_defaults() {
		let config = ClientConfig::builder(base_url()).build().expect("Defaults should validate.");

		assert_eq!(config.refresh_timeout, StdDuration::from_secs(10));
		assert_eq!(config.default_page_size, 8);
		assert_eq!(config.dashboard_page_size, 10);
	}

	#[test]
	fn builder_rejects_plain_http_off_loopback() {
		let url = Url::parse("http://api.example.com").expect("HTTP URL fixture should parse.");
		let err = ClientConfig::builder(url).build().expect_err("HTTP base URLs should fail.");

		assert!(matches!(err, ClientConfigError::InsecureBaseUrl { .. }));

		let url = Url::parse("http://127.0.0.1:3000").expect("Loopback URL fixture should parse.");

		assert!(ClientConfig::builder(url).build().is_ok());
	}

	#[test]
	fn builder_rejects_zero_tunables() {
		let err = ClientConfig::builder(base_url())
			.refresh_timeout(StdDuration::ZERO)
			.build()
			.expect_err("Zero timeouts should fail.");

		assert!(matches!(err, ClientConfigError::ZeroRefreshTimeout));

		let err = ClientConfig::builder(base_url())
			.default_page_size(0)
			.build()
			.expect_err("Zero page sizes should fail.");

		assert!(matches!(err, ClientConfigError::ZeroPageSize { .. }));
	}

	#[test]
	fn endpoint_preserves_base_path_prefix() {
		let config = ClientConfig::builder(base_url()).build().expect("Defaults should validate.");
		let url = config.endpoint("/user/manhwas").expect("Path should resolve.");

		assert_eq!(url.as_str(), "https://api.example.com/v1/user/manhwas");
	}
}
