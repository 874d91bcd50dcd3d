//! Reading-list endpoints under `/user`.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::HttpTransport,
	model::{ManhwaStatus, ReadingStatus, UserManhwaPage},
	request::RequestDescriptor,
};

/// Filter and paging parameters for the reading list.
#[derive(Clone, Debug, Default)]
pub struct LibraryQuery {
	/// 1-based page number.
	pub page: Option<u32>,
	/// Page size; the configured dashboard page size applies when absent.
	pub page_size: Option<u32>,
	/// Restricts results to a publication status.
	pub status: Option<ManhwaStatus>,
	/// Restricts results to a reading status.
	pub user_status: Option<ReadingStatus>,
	/// Substring match on the title.
	pub manhwa_name: Option<String>,
}
impl LibraryQuery {
	/// Sets the page number.
	pub fn page(mut self, page: u32) -> Self {
		self.page = Some(page);

		self
	}

	/// Overrides the page size.
	pub fn page_size(mut self, size: u32) -> Self {
		self.page_size = Some(size);

		self
	}

	/// Filters by publication status.
	pub fn status(mut self, status: ManhwaStatus) -> Self {
		self.status = Some(status);

		self
	}

	/// Filters by reading status.
	pub fn user_status(mut self, status: ReadingStatus) -> Self {
		self.user_status = Some(status);

		self
	}

	/// Filters by title substring.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.manhwa_name = Some(name.into());

		self
	}
}

/// Payload for `POST /user/add-manhwa`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddManhwa {
	/// Catalog identifier of the title to track.
	pub manhwa_id: String,
	/// Provider the user reads on.
	pub provider_id: String,
	/// Episode the user has read up to.
	pub last_episode_read: f64,
	/// Initial reading status.
	pub status_reading: ReadingStatus,
}

/// Partial update for `PATCH /user/manhwas/{id}`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserManhwaUpdate {
	/// New read progress.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_episode_read: Option<f64>,
	/// New reading status.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status_reading: Option<ReadingStatus>,
	/// Switches the provider the user reads on.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub provider_id: Option<String>,
	/// New position in the user's list.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub order: Option<u32>,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Fetches a page of the user's reading list.
	pub async fn user_manhwas(&self, query: &LibraryQuery) -> Result<UserManhwaPage> {
		let page_size = query.page_size.unwrap_or(self.config.dashboard_page_size);
		let descriptor = RequestDescriptor::get("/user/manhwas")
			.query_opt("page", query.page)
			.query("pageSize", page_size)
			.query_opt("status", query.status.map(ManhwaStatus::as_str))
			.query_opt("userStatus", query.user_status.map(ReadingStatus::as_str))
			.query_opt("manhwaName", query.manhwa_name.as_deref());

		self.request_json(descriptor).await
	}

	/// Starts tracking a title.
	pub async fn add_manhwa(&self, payload: &AddManhwa) -> Result<()> {
		self.request(RequestDescriptor::post("/user/add-manhwa").json(payload)?).await?;

		Ok(())
	}

	/// Stops tracking the provided titles.
	pub async fn remove_manhwas(&self, manhwa_ids: &[String]) -> Result<()> {
		self.request(
			RequestDescriptor::delete("/user/remove-manhwa")
				.body(serde_json::json!({ "manhwaId": manhwa_ids })),
		)
		.await?;

		Ok(())
	}

	/// Applies a partial update to one tracked title.
	pub async fn update_user_manhwa(&self, manhwa_id: &str, update: &UserManhwaUpdate) -> Result<()> {
		self.request(
			RequestDescriptor::patch(format!("/user/manhwas/{manhwa_id}")).json(update)?,
		)
		.await?;

		Ok(())
	}
}
