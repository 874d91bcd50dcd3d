//! Wire data model for the tracker API (camelCase JSON).

// self
use crate::_prelude::*;

/// Publication status reported by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManhwaStatus {
	/// Still releasing episodes.
	Ongoing,
	/// Finished its run.
	Completed,
	/// Paused by the author or publisher.
	Hiatus,
}
impl ManhwaStatus {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			ManhwaStatus::Ongoing => "ONGOING",
			ManhwaStatus::Completed => "COMPLETED",
			ManhwaStatus::Hiatus => "HIATUS",
		}
	}
}
impl Display for ManhwaStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Per-user reading status for a tracked title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadingStatus {
	/// Actively reading.
	Reading,
	/// Temporarily set aside.
	Paused,
	/// Abandoned.
	Dropped,
	/// Read to the end.
	Completed,
}
impl ReadingStatus {
	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			ReadingStatus::Reading => "READING",
			ReadingStatus::Paused => "PAUSED",
			ReadingStatus::Dropped => "DROPPED",
			ReadingStatus::Completed => "COMPLETED",
		}
	}
}
impl Display for ReadingStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Channels the backend can deliver release notifications on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
	/// Delivery through the linked Telegram bot.
	Telegram,
}

/// Authenticated user profile returned by `/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	/// Stable user identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Unique handle.
	pub username: String,
	/// Account email.
	pub email: String,
}

/// Catalog entry for a serialized title.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manhwa {
	/// Stable catalog identifier.
	pub id: String,
	/// Canonical title.
	pub name: String,
	/// Cover image URL.
	pub cover_image: String,
	/// Author credit.
	pub author: String,
	/// Synopsis.
	pub description: String,
	/// Publication status.
	pub status: ManhwaStatus,
	/// Origin site the entry was scraped from.
	pub source: String,
	/// Identifier on the origin site.
	#[serde(rename = "source_id")]
	pub source_id: String,
	/// Genre tags.
	pub genres: Vec<String>,
	/// Alternate titles, when known.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alternative_names: Option<Vec<String>>,
}

/// A tracked title joined with its provider link and the user's read progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedUserManhwa {
	/// Stable identifier of the tracking entry.
	pub id: String,
	/// Catalog identifier of the tracked title.
	pub manhwa_id: String,
	/// Canonical title.
	pub manhwa_name: String,
	/// Cover image URL.
	pub cover_image: String,
	/// Provider the user reads on.
	pub provider_id: String,
	/// Display name of that provider.
	pub provider_name: String,
	/// Latest episode the chosen provider has released.
	pub last_episode_released: f64,
	/// Latest episode released on any provider.
	pub last_episode_released_all_providers: f64,
	/// Reading URL on the chosen provider.
	pub manhwa_url_provider: String,
	/// User's reading status.
	pub status_reading: ReadingStatus,
	/// Publication status of the title.
	pub status_manhwa: ManhwaStatus,
	/// Latest episode the user has read.
	pub last_episode_read: f64,
	/// Latest episode the user was notified about.
	pub last_notified_episode: f64,
	/// Whether Telegram notifications are enabled for this title.
	pub is_telegram_notification_enabled: bool,
	/// Position in the user's list.
	pub order: u32,
	/// Last provider-side update, as reported by the backend.
	pub last_updated: String,
	/// Entry creation timestamp.
	pub created_at: String,
	/// Entry update timestamp.
	pub updated_at: String,
}

/// Source site that hosts episodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Provider {
	/// Stable provider identifier.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Site URL, when known.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Many-to-many manhwa/provider link with per-provider episode tracking.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaProvider {
	/// Stable link identifier.
	pub id: String,
	/// Catalog identifier of the linked title.
	pub manhwa_id: String,
	/// Canonical title, when the backend joins it in.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub manhwa_name: Option<String>,
	/// Linked provider identifier.
	pub provider_id: String,
	/// Display name of that provider, when joined in.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub provider_name: Option<String>,
	/// Latest episode this provider has released.
	pub last_episode_released: f64,
	/// Reading URL on this provider, when known.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Page of tracked titles returned by `/user/manhwas`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserManhwaPage {
	/// Entries on this page.
	pub user_manhwas: Vec<DetailedUserManhwa>,
	/// Total number of tracked titles matching the filters.
	pub total: u64,
}

/// Page of catalog search results returned by `/manhwa/list`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaSearchPage {
	/// Matches on this page.
	pub items: Vec<Manhwa>,
	/// Total number of pages for the query.
	pub total_pages: u32,
}

/// Page of provider links returned by `/manhwa-providers`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaProviderPage {
	/// Links on this page.
	pub manhwa_providers: Vec<ManhwaProvider>,
	/// Total number of pages; absent for unpaged lookups.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub total_pages: Option<u32>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn statuses_round_trip_their_wire_labels() {
		let status: ManhwaStatus = serde_json::from_str("\"ONGOING\"")
			.expect("Wire label should deserialize into ManhwaStatus.");

		assert_eq!(status, ManhwaStatus::Ongoing);
		assert_eq!(
			serde_json::to_string(&ReadingStatus::Dropped)
				.expect("ReadingStatus should serialize."),
			"\"DROPPED\""
		);
	}

	#[test]
	fn detailed_user_manhwa_decodes_camel_case() {
		let payload = r#"{
			"id": "um-1",
			"manhwaId": "m-1",
			"manhwaName": "Solo Farming",
			"coverImage": "https://cdn.example.com/m-1.jpg",
			"providerId": "p-1",
			"providerName": "Asura",
			"lastEpisodeReleased": 112,
			"lastEpisodeReleasedAllProviders": 114,
			"manhwaUrlProvider": "https://asura.example.com/m-1",
			"statusReading": "READING",
			"statusManhwa": "ONGOING",
			"lastEpisodeRead": 110,
			"lastNotifiedEpisode": 112,
			"isTelegramNotificationEnabled": true,
			"order": 3,
			"lastUpdated": "2024-11-02T10:00:00.000Z",
			"createdAt": "2024-01-15T08:30:00.000Z",
			"updatedAt": "2024-11-02T10:00:00.000Z"
		}"#;
		let entry: DetailedUserManhwa =
			serde_json::from_str(payload).expect("Camel-case payload should decode.");

		assert_eq!(entry.manhwa_name, "Solo Farming");
		assert_eq!(entry.status_reading, ReadingStatus::Reading);
		assert_eq!(entry.last_episode_read, 110.0);
	}

	#[test]
	fn manhwa_keeps_snake_case_source_id() {
		let payload = r#"{
			"id": "m-1",
			"name": "Tower Climber",
			"coverImage": "https://cdn.example.com/m-1.jpg",
			"author": "Anon",
			"description": "Climbs a tower.",
			"status": "HIATUS",
			"source": "asura",
			"source_id": "tower-climber",
			"genres": ["action"]
		}"#;
		let manhwa: Manhwa = serde_json::from_str(payload).expect("Catalog payload should decode.");

		assert_eq!(manhwa.source_id, "tower-climber");
		assert_eq!(manhwa.alternative_names, None);
	}
}
