#![cfg(feature = "reqwest")]

// std
use std::{env, fs, process};
// self
use manhwa_client::{
	_preludet::*,
	config::ClientConfig,
	session::{FileStore, MemoryStore, SessionStore, SessionToken},
};

fn build_client() -> (ReqwestTestClient, Arc<MemoryStore>, RecordingRedirect) {
	let base_url =
		Url::parse("https://api.example.com").expect("Base URL fixture should parse.");
	let config =
		ClientConfig::builder(base_url).build().expect("Client configuration should validate.");

	build_reqwest_test_client(config)
}

#[tokio::test]
async fn memory_store_round_trips_and_clears() {
	let store = MemoryStore::default();

	store
		.save(SessionToken::new("token-1"))
		.await
		.expect("Saving a token into the memory store should succeed.");

	let fetched = store
		.load()
		.await
		.expect("Loading from the memory store should succeed.")
		.expect("Stored token should remain present.");

	assert_eq!(fetched.expose(), "token-1");

	store.clear().await.expect("Clearing the memory store should succeed.");

	assert_eq!(store.load().await.expect("Loading from the memory store should succeed."), None);
}

#[tokio::test]
async fn file_store_survives_a_reopen() {
	let path = env::temp_dir().join(format!("manhwa_client_session_it_{}.json", process::id()));
	let store = FileStore::open(&path).expect("Opening the file store should succeed.");

	store
		.save(SessionToken::new("durable-1"))
		.await
		.expect("Saving a token into the file store should succeed.");
	drop(store);

	let reopened = FileStore::open(&path).expect("Reopening the file store should succeed.");
	let fetched = reopened
		.load()
		.await
		.expect("Loading from the reopened store should succeed.")
		.expect("The token should survive the reopen.");

	assert_eq!(fetched.expose(), "durable-1");

	reopened.clear().await.expect("Clearing the file store should succeed.");

	let emptied = FileStore::open(&path).expect("Reopening the cleared store should succeed.");

	assert_eq!(
		emptied.load().await.expect("Loading from the cleared store should succeed."),
		None
	);

	fs::remove_file(&path).expect("Removing the temporary session snapshot should succeed.");
}

#[tokio::test]
async fn restore_session_installs_the_persisted_token() {
	let (client, store, _redirect) = build_client();

	store
		.save(SessionToken::new("persisted-1"))
		.await
		.expect("Seeding the memory store should succeed.");

	let restored = client
		.restore_session()
		.await
		.expect("Restoring the session should succeed.")
		.expect("A persisted token should be restored.");

	assert_eq!(restored.expose(), "persisted-1");
	assert_eq!(
		client.session_token().expect("Client should be authenticated after restore.").expose(),
		"persisted-1"
	);
}

#[tokio::test]
async fn restore_session_with_an_empty_store_stays_unauthenticated() {
	let (client, _store, _redirect) = build_client();
	let restored = client.restore_session().await.expect("Restoring the session should succeed.");

	assert_eq!(restored, None);
	assert_eq!(client.session_token(), None);
}

#[tokio::test]
async fn logout_clears_the_store_and_the_live_session() {
	let (client, store, _redirect) = build_client();

	client
		.set_session_token(SessionToken::new("live-1"))
		.await
		.expect("Seeding the session should succeed.");

	assert!(client.session_token().is_some());

	client.logout().await.expect("Logging out should succeed.");

	assert_eq!(client.session_token(), None);
	assert_eq!(store.load().await.expect("Loading from the memory store should succeed."), None);
}
