//! Admin endpoints managing the catalog, providers, and their links.

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::HttpTransport,
	model::{ManhwaProviderPage, ManhwaStatus},
	request::RequestDescriptor,
};

/// Catalog payload for `POST /manhwa/create` and `PATCH /manhwa/{id}/update`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaDraft {
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
	/// Alternate titles.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alternative_names: Option<Vec<String>>,
}

/// Provider payload for `POST /providers/create`.
#[derive(Clone, Debug, Serialize)]
pub struct ProviderDraft {
	/// Display name.
	pub name: String,
	/// Site URL.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Link payload for `POST /manhwa-provider/create` and `PATCH /manhwa-provider/{id}/update`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManhwaProviderDraft {
	/// Catalog identifier of the linked title.
	pub manhwa_id: String,
	/// Linked provider identifier.
	pub provider_id: String,
	/// Latest episode this provider has released.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_episode_released: Option<f64>,
	/// Reading URL on this provider.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
}

/// Paged, filtered listing parameters for `GET /manhwa-providers`.
#[derive(Clone, Debug, Default)]
pub struct ManhwaProviderQuery {
	/// 1-based page number.
	pub page: Option<u32>,
	/// Page size.
	pub page_size: Option<u32>,
	/// Substring match on the linked title.
	pub manhwa_name: Option<String>,
	/// Restricts results to one provider.
	pub provider_id: Option<String>,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a catalog entry.
	pub async fn create_manhwa(&self, draft: &ManhwaDraft) -> Result<()> {
		self.request(RequestDescriptor::post("/manhwa/create").json(draft)?).await?;

		Ok(())
	}

	/// Replaces a catalog entry.
	pub async fn update_manhwa(&self, manhwa_id: &str, draft: &ManhwaDraft) -> Result<()> {
		self.request(
			RequestDescriptor::patch(format!("/manhwa/{manhwa_id}/update")).json(draft)?,
		)
		.await?;

		Ok(())
	}

	/// Deletes a catalog entry.
	pub async fn delete_manhwa(&self, manhwa_id: &str) -> Result<()> {
		self.request(RequestDescriptor::delete(format!("/manhwa/{manhwa_id}"))).await?;

		Ok(())
	}

	/// Registers a new provider.
	pub async fn create_provider(&self, draft: &ProviderDraft) -> Result<()> {
		self.request(RequestDescriptor::post("/providers/create").json(draft)?).await?;

		Ok(())
	}

	/// Links a title to a provider.
	pub async fn create_manhwa_provider(&self, draft: &ManhwaProviderDraft) -> Result<()> {
		self.request(RequestDescriptor::post("/manhwa-provider/create").json(draft)?).await?;

		Ok(())
	}

	/// Updates a manhwa/provider link.
	pub async fn update_manhwa_provider(
		&self,
		link_id: &str,
		draft: &ManhwaProviderDraft,
	) -> Result<()> {
		self.request(
			RequestDescriptor::patch(format!("/manhwa-provider/{link_id}/update")).json(draft)?,
		)
		.await?;

		Ok(())
	}

	/// Removes a manhwa/provider link.
	pub async fn delete_manhwa_provider(&self, link_id: &str) -> Result<()> {
		self.request(RequestDescriptor::delete(format!("/manhwa-provider/{link_id}"))).await?;

		Ok(())
	}

	/// Lists manhwa/provider links with paging and filters.
	pub async fn manhwa_provider_index(
		&self,
		query: &ManhwaProviderQuery,
	) -> Result<ManhwaProviderPage> {
		let descriptor = RequestDescriptor::get("/manhwa-providers")
			.query_opt("page", query.page)
			.query_opt("pageSize", query.page_size)
			.query_opt("manhwaName", query.manhwa_name.as_deref())
			.query_opt("providerId", query.provider_id.as_deref());

		self.request_json(descriptor).await
	}
}
