//! End-to-end tests: the real client against the real router.

use std::sync::Arc;

use trove_api::app::{build_router, AppState};
use trove_client::{ApiClient, ItemFormData, ItemUpdateData, Phase, SessionState, UploadFile};
use trove_core::ItemType;
use trove_store::FileStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
    _dir: tempfile::TempDir,
}

impl TestServer {
    async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let uploads_dir = dir.path().join("uploads");
        std::fs::create_dir_all(&uploads_dir).unwrap();

        let state = Arc::new(AppState {
            store: Arc::new(FileStore::new(dir.path().join("items.json"))),
            uploads_dir,
        });
        let app = build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            handle,
            _dir: dir,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn cap_form() -> ItemFormData {
    ItemFormData {
        name: "Red Cap".to_string(),
        item_type: ItemType::Accessories,
        description: "Wool cap".to_string(),
        cover_image: UploadFile {
            filename: "cap.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: b"fake-png".to_vec(),
        },
        additional_images: Vec::new(),
    }
}

#[tokio::test]
async fn created_items_come_back_with_absolute_image_urls() {
    let server = TestServer::spawn().await;
    let client = ApiClient::new(server.base_url.as_str());

    let created = client.create_item(cap_form()).await;
    assert!(created.success);
    let item = created.data.unwrap();
    assert!(
        item.cover_image
            .starts_with(&format!("{}/uploads/coverImage-", server.base_url)),
        "cover image was not resolved: {}",
        item.cover_image
    );

    let listed = client.list_items().await;
    assert!(listed.success);
    let items = listed.data.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, item.id);
    assert!(items[0].cover_image.starts_with("http"));
}

#[tokio::test]
async fn session_refresh_against_a_live_server_lands_in_ready() {
    let server = TestServer::spawn().await;
    let client = ApiClient::new(server.base_url.as_str());
    client.create_item(cap_form()).await;

    let mut state = SessionState::new();
    let ticket = state.begin_refresh();
    let response = client.list_items().await;
    assert!(state.finish_refresh(ticket, response));

    assert_eq!(state.phase(), Phase::Ready);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].name, "Red Cap");
}

#[tokio::test]
async fn session_refresh_against_an_empty_server_uses_the_fallback() {
    let server = TestServer::spawn().await;
    let client = ApiClient::new(server.base_url.as_str());

    let mut state = SessionState::new();
    let ticket = state.begin_refresh();
    let response = client.list_items().await;
    state.finish_refresh(ticket, response);

    assert_eq!(state.phase(), Phase::ReadyWithFallback);
    assert_eq!(state.items().len(), 3);
}

#[tokio::test]
async fn session_refresh_against_a_dead_server_falls_back_with_advisory() {
    // Nothing listens here; the connect fails immediately.
    let client = ApiClient::new("http://127.0.0.1:1");

    let mut state = SessionState::new();
    let ticket = state.begin_refresh();
    let response = client.list_items().await;
    assert!(!response.success);
    state.finish_refresh(ticket, response);

    assert_eq!(state.phase(), Phase::ReadyWithFallback);
    assert_eq!(state.items().len(), 3);
    assert!(state.advisory().is_some());
}

#[tokio::test]
async fn failed_create_is_applied_through_a_synthesized_local_record() {
    let client = ApiClient::new("http://127.0.0.1:1");
    let form = cap_form();

    let response = client.create_item(form.clone()).await;
    assert!(!response.success);

    // The UI flow falls back to a locally synthesized record and applies it
    // through the reducer unconditionally.
    let item = match response.data {
        Some(item) => item,
        None => form.synthesize_local_item(),
    };
    let mut state = SessionState::new();
    state.add_item(item);

    assert_eq!(state.items().len(), 1);
    assert!(state.items()[0].cover_image.starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn update_round_trip_applies_the_server_record() {
    let server = TestServer::spawn().await;
    let client = ApiClient::new(server.base_url.as_str());

    let created = client.create_item(cap_form()).await.data.unwrap();

    let updated = client
        .update_item(
            &created.id,
            ItemUpdateData {
                name: Some("Blue Cap".to_string()),
                ..ItemUpdateData::default()
            },
        )
        .await;
    assert!(updated.success);
    let updated = updated.data.unwrap();
    assert_eq!(updated.name, "Blue Cap");
    assert_eq!(updated.description, created.description);

    let mut state = SessionState::new();
    state.replace_all(vec![created.clone()]);
    state.update_item(updated);
    assert_eq!(state.items()[0].name, "Blue Cap");
}

#[tokio::test]
async fn delete_round_trip_removes_the_record_everywhere() {
    let server = TestServer::spawn().await;
    let client = ApiClient::new(server.base_url.as_str());

    let created = client.create_item(cap_form()).await.data.unwrap();

    let deleted = client.delete_item(&created.id).await;
    assert!(deleted.success);

    let mut state = SessionState::new();
    state.replace_all(vec![created.clone()]);
    state.delete_item(&created.id);
    assert!(state.items().is_empty());

    let gone = client.get_item(&created.id).await;
    assert!(!gone.success);
    assert_eq!(gone.error.as_deref(), Some("Item not found"));
}
