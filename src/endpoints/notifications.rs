//! Release-notification endpoints backed by the messaging bot.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::HttpTransport,
	model::NotificationChannel,
	request::RequestDescriptor,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkingTokenEnvelope {
	telegram_linking_token: String,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Issues a one-time token that links the account to the Telegram bot.
	pub async fn telegram_linking_token(&self) -> Result<String> {
		let envelope: LinkingTokenEnvelope = self
			.request_json(
				RequestDescriptor::post("/user/telegram-linking-token")
					.body(serde_json::json!({})),
			)
			.await?;

		Ok(envelope.telegram_linking_token)
	}

	/// Unlinks the account from Telegram.
	pub async fn reset_telegram_linking(&self) -> Result<()> {
		self.request(
			RequestDescriptor::patch("/user/reset-telegram-linking").body(serde_json::json!({})),
		)
		.await?;

		Ok(())
	}

	/// Toggles Telegram release notifications account-wide.
	pub async fn set_telegram_notifications(&self, activate: bool) -> Result<()> {
		self.request(
			RequestDescriptor::patch("/user/telegram-notification")
				.body(serde_json::json!({ "activate": activate })),
		)
		.await?;

		Ok(())
	}

	/// Registers per-title release notifications on a channel.
	pub async fn register_manhwa_notification(
		&self,
		manhwa_id: &str,
		channel: NotificationChannel,
		enabled: bool,
	) -> Result<()> {
		self.request(RequestDescriptor::post("/user/notifications/register").body(
			serde_json::json!({ "manhwaId": manhwa_id, "channel": channel, "isEnabled": enabled }),
		))
		.await?;

		Ok(())
	}
}
