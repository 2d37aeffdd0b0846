//! AdminClient against a local HTTP backend.

mod common;

use std::sync::Arc;

use blogadmin_lib::AdminClient;
use blogadmin_lib::EnvelopeKind;
use blogadmin_lib::api::DataService;
use blogadmin_lib::controller::MemoryNavigator;
use blogadmin_lib::controller::Navigator;
use blogadmin_lib::model::Resource;
use blogadmin_lib::model::dto::LoginDto;
use blogadmin_lib::storage::LocalStorage;
use common::MockBackend;
use common::dead_url;
use serde_json::json;

fn client(url: &str, storage: LocalStorage, navigator: Arc<MemoryNavigator>) -> AdminClient {
    AdminClient::builder()
        .url(url)
        .storage(storage)
        .shared_navigator(navigator)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_list_sends_bearer_token() {
    let backend = MockBackend::new()
        .json(
            "GET",
            "/api/article/getList",
            json!({
                "success": true,
                "message": "Articles listed",
                "data": [{"id": "a1", "title": "Hello", "viewsCount": 3}]
            }),
        )
        .start()
        .await;

    let storage = LocalStorage::in_memory();
    storage.set_access_token("secret").await.unwrap();
    let client = client(&backend.url(), storage, Arc::new(MemoryNavigator::default()));

    let envelope = client.list(Resource::Article).await;
    assert!(envelope.success);
    assert_eq!(envelope.message, "Articles listed");
    let records = envelope.into_data().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id().as_deref(), Some("a1"));

    let seen = backend.requests();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer secret"));
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_no_token_no_authorization_header() {
    let backend = MockBackend::new()
        .json("GET", "/api/user/getList", json!({"success": true, "data": []}))
        .start()
        .await;
    let client = client(&backend.url(), LocalStorage::in_memory(), Arc::new(MemoryNavigator::default()));

    let envelope = client.get_users().await;
    assert!(envelope.success);
    assert_eq!(envelope.data(), Some(&Vec::new()));
    assert_eq!(backend.requests()[0].authorization, None);
}

#[tokio::test]
async fn test_transport_failure_becomes_network_error() {
    let client = client(&dead_url().await, LocalStorage::in_memory(), Arc::new(MemoryNavigator::default()));

    let envelope = client.list(Resource::Category).await;
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Network error");
    assert_eq!(envelope.data(), None);
}

#[tokio::test]
async fn test_unauthorized_sentinel_redirects_to_login() {
    let backend = MockBackend::new()
        .json(
            "GET",
            "/api/article/getList",
            json!({"success": false, "message": "UnAuthorizedRequest"}),
        )
        .start()
        .await;
    let storage = LocalStorage::in_memory();
    let navigator = Arc::new(MemoryNavigator::new("/admin/articles"));
    let client = client(&backend.url(), storage.clone(), navigator.clone());

    let envelope = client.list(Resource::Article).await;
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Redirecting to login...");
    assert_eq!(envelope.kind(), EnvelopeKind::Failure);

    assert_eq!(navigator.current_path(), "/login");
    assert_eq!(
        storage.redirect_after_login().await.unwrap().as_deref(),
        Some("/admin/articles")
    );
}

#[tokio::test]
async fn test_http_401_redirects_to_login() {
    let backend = MockBackend::new()
        .reply("DELETE", "/api/user/delete/u1", 401, "")
        .start()
        .await;
    let navigator = Arc::new(MemoryNavigator::new("/admin/users"));
    let client = client(&backend.url(), LocalStorage::in_memory(), navigator.clone());

    let envelope = client.delete_user("u1").await;
    assert_eq!(envelope.message, "Redirecting to login...");
    assert_eq!(navigator.current_path(), "/login");
}

#[tokio::test]
async fn test_401_with_server_message_is_shown() {
    let backend = MockBackend::new()
        .reply(
            "POST",
            "/api/auth/login",
            401,
            r#"{"success":false,"message":"Wrong password"}"#,
        )
        .start()
        .await;
    let storage = LocalStorage::in_memory();
    let navigator = Arc::new(MemoryNavigator::new("/login"));
    let client = client(&backend.url(), storage.clone(), navigator.clone());

    let envelope = client
        .login(&LoginDto {
            email: "admin@example.com".to_string(),
            password: "nope".to_string(),
        })
        .await;
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Wrong password");

    assert_eq!(navigator.current_path(), "/login");
    assert_eq!(navigator.history().len(), 1);
    assert_eq!(storage.redirect_after_login().await.unwrap(), None);
    assert_eq!(storage.access_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_unparseable_body_is_empty_failure() {
    let backend = MockBackend::new()
        .reply("GET", "/api/category/getList", 500, "<html>Internal Server Error</html>")
        .start()
        .await;
    let client = client(&backend.url(), LocalStorage::in_memory(), Arc::new(MemoryNavigator::default()));

    let envelope = client.list(Resource::Category).await;
    assert!(!envelope.success);
    assert_eq!(envelope.message, "");
    assert_eq!(envelope.message_or("An error occurred"), "An error occurred");
}

#[tokio::test]
async fn test_server_failure_message_is_verbatim() {
    let backend = MockBackend::new()
        .json(
            "DELETE",
            "/api/category/delete/c1",
            json!({"success": false, "message": "Category has articles"}),
        )
        .start()
        .await;
    let client = client(&backend.url(), LocalStorage::in_memory(), Arc::new(MemoryNavigator::default()));

    let envelope = client.delete(Resource::Category, "c1").await;
    assert!(!envelope.success);
    assert_eq!(envelope.message, "Category has articles");
}

#[tokio::test]
async fn test_login_stores_token_for_later_requests() {
    let backend = MockBackend::new()
        .json(
            "POST",
            "/api/auth/login",
            json!({"success": true, "message": "Welcome", "data": {"token": "fresh", "expiration": null}}),
        )
        .json("GET", "/api/article/getList", json!({"success": true, "data": []}))
        .start()
        .await;
    let storage = LocalStorage::in_memory();
    let client = client(&backend.url(), storage.clone(), Arc::new(MemoryNavigator::default()));

    let envelope = client
        .login(&LoginDto {
            email: "admin@example.com".to_string(),
            password: "hunter2".to_string(),
        })
        .await;
    assert!(envelope.success);
    assert_eq!(storage.access_token().await.unwrap().as_deref(), Some("fresh"));

    client.get_articles().await;
    let seen = backend.requests();
    assert!(seen[0].body.contains("\"email\":\"admin@example.com\""));
    assert_eq!(seen[1].authorization.as_deref(), Some("Bearer fresh"));

    client.logout().await.unwrap();
    assert!(!client.is_logged_in().await.unwrap());
}

#[tokio::test]
async fn test_failed_login_keeps_no_token() {
    let backend = MockBackend::new()
        .json(
            "POST",
            "/api/auth/login",
            json!({"success": false, "message": "Wrong password"}),
        )
        .start()
        .await;
    let storage = LocalStorage::in_memory();
    let client = client(&backend.url(), storage.clone(), Arc::new(MemoryNavigator::default()));

    let envelope = client
        .login(&LoginDto {
            email: "admin@example.com".to_string(),
            password: "nope".to_string(),
        })
        .await;
    assert_eq!(envelope.message, "Wrong password");
    assert_eq!(storage.access_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_categories_with_and_without_parent() {
    let backend = MockBackend::new()
        .json(
            "GET",
            "/api/category/getList",
            json!({
                "success": true,
                "data": [
                    {"id": "c1", "name": "Genel", "parentCategoryId": null, "parentCategoryDto": null},
                    {
                        "id": "c2",
                        "name": "Rust",
                        "parentCategoryId": "c1",
                        "parentCategoryDto": {"id": "c1", "name": "Genel"}
                    }
                ]
            }),
        )
        .start()
        .await;
    let client = client(&backend.url(), LocalStorage::in_memory(), Arc::new(MemoryNavigator::default()));

    let envelope = client.get_categories().await;
    assert!(envelope.is_success());
    let categories = envelope.into_data().unwrap();
    assert_eq!(categories[0].parent_category_dto, None);
    assert_eq!(categories[1].parent_category_id.as_deref(), Some("c1"));
}

#[tokio::test]
async fn test_typed_deletes_hit_resource_endpoints() {
    let backend = MockBackend::new()
        .json("DELETE", "/api/article/delete/a1", json!({"success": true, "message": "Deleted"}))
        .json("DELETE", "/api/category/delete/c1", json!({"success": true, "message": "Deleted"}))
        .start()
        .await;
    let client = client(&backend.url(), LocalStorage::in_memory(), Arc::new(MemoryNavigator::default()));

    assert!(client.delete_article("a1").await.success);
    assert!(client.delete_category("c1").await.success);

    let paths: Vec<String> = backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/api/article/delete/a1", "/api/category/delete/c1"]);
}
