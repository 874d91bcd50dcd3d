#![cfg(feature = "reqwest")]

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use manhwa_client::{
	_preludet::*,
	config::ClientConfig,
	endpoints::{Credentials, LibraryQuery},
	model::{ManhwaStatus, ReadingStatus},
	session::{MemoryStore, SessionStore, SessionToken},
};

fn build_client(server: &MockServer) -> (ReqwestTestClient, Arc<MemoryStore>) {
	let base_url =
		Url::parse(&server.base_url()).expect("Mock server base URL should parse successfully.");
	let config =
		ClientConfig::builder(base_url).build().expect("Client configuration should validate.");
	let (client, store, _redirect) = build_reqwest_test_client(config);

	(client, store)
}

#[tokio::test]
async fn login_persists_and_installs_the_session_token() {
	let server = MockServer::start_async().await;
	let (client, store) = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/sessions")
				.json_body(json!({"email": "g@example.com", "password": "hunter2"}));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"issued-1"}"#);
		})
		.await;
	let token = client
		.login(&Credentials { email: "g@example.com".into(), password: "hunter2".into() })
		.await
		.expect("Login should resolve with the issued token.");

	mock.assert_async().await;

	assert_eq!(token.expose(), "issued-1");
	assert_eq!(
		client.session_token().expect("Client should be authenticated after login.").expose(),
		"issued-1"
	);

	let persisted = store
		.load()
		.await
		.expect("Session store load should succeed.")
		.expect("Session store should hold the issued token.");

	assert_eq!(persisted.expose(), "issued-1");
}

#[tokio::test]
async fn dashboard_page_size_defaults_to_ten() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_client(&server);

	client
		.set_session_token(SessionToken::new("live-1"))
		.await
		.expect("Seeding the session should succeed.");

	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/user/manhwas")
				.query_param("pageSize", "10")
				.header("authorization", "Bearer live-1");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"userManhwas": [{
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
					}],
					"total": 1
				}"#,
			);
		})
		.await;
	let page = client
		.user_manhwas(&LibraryQuery::default())
		.await
		.expect("Reading-list fetch should resolve with the page.");

	mock.assert_async().await;

	assert_eq!(page.total, 1);
	assert_eq!(page.user_manhwas.len(), 1);
	assert_eq!(page.user_manhwas[0].manhwa_name, "Solo Farming");
	assert_eq!(page.user_manhwas[0].status_reading, ReadingStatus::Reading);
}

#[tokio::test]
async fn catalog_search_defaults_page_and_limit() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/manhwa/list")
				.query_param("manhwaName", "tower")
				.query_param("page", "1")
				.query_param("limit", "8");
			then.status(200).header("content-type", "application/json").body(
				r#"{
					"items": [{
						"id": "m-1",
						"name": "Tower Climber",
						"coverImage": "https://cdn.example.com/m-1.jpg",
						"author": "Anon",
						"description": "Climbs a tower.",
						"status": "HIATUS",
						"source": "asura",
						"source_id": "tower-climber",
						"genres": ["action"]
					}],
					"totalPages": 5
				}"#,
			);
		})
		.await;
	let page = client
		.search_manhwas("tower", None, None)
		.await
		.expect("Catalog search should resolve with the page.");

	mock.assert_async().await;

	assert_eq!(page.total_pages, 5);
	assert_eq!(page.items.len(), 1);
	assert_eq!(page.items[0].status, ManhwaStatus::Hiatus);
	assert_eq!(page.items[0].source_id, "tower-climber");
}

#[tokio::test]
async fn backend_message_surfaces_in_the_rejection() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/sessions");
			then.status(401)
				.header("content-type", "application/json")
				.body(r#"{"message":"Invalid credentials."}"#);
		})
		.await;
	let err = client
		.login(&Credentials { email: "g@example.com".into(), password: "wrong".into() })
		.await
		.expect_err("Rejected logins should surface the backend message.");

	mock.assert_async().await;

	assert_eq!(err.status(), Some(401));
	assert!(matches!(
		err,
		Error::Rejected(ref rejection)
			if rejection.message.as_deref() == Some("Invalid credentials.")
	));
}

#[tokio::test]
async fn telegram_linking_token_unwraps_the_envelope() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_client(&server);

	client
		.set_session_token(SessionToken::new("live-1"))
		.await
		.expect("Seeding the session should succeed.");

	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/user/telegram-linking-token")
				.header("authorization", "Bearer live-1");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"telegramLinkingToken":"tg-1"}"#);
		})
		.await;
	let linking_token = client
		.telegram_linking_token()
		.await
		.expect("Linking-token request should resolve with the token.");

	mock.assert_async().await;

	assert_eq!(linking_token, "tg-1");
}
