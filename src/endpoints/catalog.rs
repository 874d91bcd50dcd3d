//! Catalog browsing endpoints (`/manhwa/*`, `/providers`, `/manhwa-providers`).

// self
use crate::{
	_prelude::*,
	client::ApiClient,
	http::HttpTransport,
	model::{Manhwa, ManhwaProvider, ManhwaProviderPage, ManhwaSearchPage, Provider},
	request::RequestDescriptor,
};

#[derive(Debug, Deserialize)]
struct ManhwaEnvelope {
	manhwa: Manhwa,
}

#[derive(Debug, Deserialize)]
struct ProviderListEnvelope {
	providers: Vec<Provider>,
}

#[derive(Debug, Deserialize)]
struct RandomManhwasEnvelope {
	manhwas: Vec<Manhwa>,
}

impl<T> ApiClient<T>
where
	T: ?Sized + HttpTransport,
{
	/// Searches the catalog by title.
	///
	/// The configured default page size applies when `limit` is absent.
	pub async fn search_manhwas(
		&self,
		name: &str,
		page: Option<u32>,
		limit: Option<u32>,
	) -> Result<ManhwaSearchPage> {
		let descriptor = RequestDescriptor::get("/manhwa/list")
			.query("manhwaName", name)
			.query("page", page.unwrap_or(1))
			.query("limit", limit.unwrap_or(self.config.default_page_size));

		self.request_json(descriptor).await
	}

	/// Fetches a single catalog entry.
	pub async fn manhwa_by_id(&self, manhwa_id: &str) -> Result<Manhwa> {
		let envelope: ManhwaEnvelope =
			self.request_json(RequestDescriptor::get(format!("/manhwa/{manhwa_id}"))).await?;

		Ok(envelope.manhwa)
	}

	/// Fetches a random sample of titles; works without a session.
	pub async fn random_manhwas(&self, count: u32) -> Result<Vec<Manhwa>> {
		let envelope: RandomManhwasEnvelope = self
			.request_json(RequestDescriptor::get("/manhwa/random").query("count", count))
			.await?;

		Ok(envelope.manhwas)
	}

	/// Lists providers, optionally filtered by a search term.
	pub async fn providers(&self, search_term: Option<&str>) -> Result<Vec<Provider>> {
		let envelope: ProviderListEnvelope = self
			.request_json(RequestDescriptor::get("/providers").query_opt("searchTerm", search_term))
			.await?;

		Ok(envelope.providers)
	}

	/// Lists provider links for one title.
	pub async fn manhwa_providers(&self, manhwa_id: &str) -> Result<Vec<ManhwaProvider>> {
		let page: ManhwaProviderPage = self
			.request_json(RequestDescriptor::get("/manhwa-providers").query("manhwaId", manhwa_id))
			.await?;

		Ok(page.manhwa_providers)
	}
}
