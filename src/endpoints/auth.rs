//! Account and session endpoints (`/register`, `/sessions`, `/sso/google`, `/me`).

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::HttpTransport,
	model::UserProfile,
	request::RequestDescriptor,
	session::SessionToken,
};

/// Registration payload for `POST /register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterAccount {
	/// Display name.
	pub name: String,
	/// Unique handle.
	pub username: String,
	/// Account email.
	pub email: String,
	/// Plain-text password, sent over TLS only.
	pub password: String,
}

/// Login payload for `POST /sessions`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
	/// Account email.
	pub email: String,
	/// Plain-text password, sent over TLS only.
	pub password: String,
}

#[derive(Debug, Deserialize)]
struct SessionEnvelope {
	token: String,
}

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
	user: UserProfile,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates an account. The user logs in separately afterwards.
	pub async fn register(&self, account: &RegisterAccount) -> Result<()> {
		self.request(RequestDescriptor::post("/register").json(account)?).await?;

		Ok(())
	}

	/// Exchanges credentials for a bearer token and installs it as the live session.
	pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
		let payload: SessionEnvelope =
			self.request_json(RequestDescriptor::post("/sessions").json(credentials)?).await?;
		let token = SessionToken::new(payload.token);

		self.set_session_token(token.clone()).await?;

		Ok(token)
	}

	/// Exchanges a Google SSO credential for a session token and installs it.
	pub async fn google_sso(&self, id_token: &str) -> Result<SessionToken> {
		let payload: SessionEnvelope = self
			.request_json(
				RequestDescriptor::post("/sso/google")
					.body(serde_json::json!({ "token": id_token })),
			)
			.await?;
		let token = SessionToken::new(payload.token);

		self.set_session_token(token.clone()).await?;

		Ok(token)
	}

	/// Fetches the authenticated profile.
	pub async fn profile(&self) -> Result<UserProfile> {
		let envelope: ProfileEnvelope = self.request_json(RequestDescriptor::get("/me")).await?;

		Ok(envelope.user)
	}

	/// Updates the account's username.
	pub async fn update_profile(&self, username: &str) -> Result<UserProfile> {
		let envelope: ProfileEnvelope = self
			.request_json(
				RequestDescriptor::patch("/me").body(serde_json::json!({ "username": username })),
			)
			.await?;

		Ok(envelope.user)
	}
}
