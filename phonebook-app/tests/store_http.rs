use phonebook_app::store::{ContactStore, HttpContactStore};
use phonebook_types::{Contact, ContactDraft};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn draft(name: &str, number: &str) -> ContactDraft {
    ContactDraft {
        name: name.to_string(),
        number: number.to_string(),
    }
}

fn store_for(server: &MockServer) -> HttpContactStore {
    HttpContactStore::new(&format!("{}/persons", server.uri()))
}

#[tokio::test]
async fn test_list_all_preserves_store_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/persons"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "2", "name": "Grace Hopper", "number": "555-0100"},
            {"id": "1", "name": "Ada Lovelace", "number": "040-123456"},
        ])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let contacts = store.list_all().await.unwrap();

    assert_eq!(
        contacts,
        vec![
            Contact {
                id: "2".to_string(),
                name: "Grace Hopper".to_string(),
                number: "555-0100".to_string(),
            },
            Contact {
                id: "1".to_string(),
                name: "Ada Lovelace".to_string(),
                number: "040-123456".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_create_posts_draft_and_returns_assigned_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/persons"))
        .and(body_json(json!({"name": "Ada", "number": "123"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "9", "name": "Ada", "number": "123",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    let created = store.create(&draft("Ada", "123")).await.unwrap();

    assert_eq!(created.id, "9");
    assert_eq!(created.name, "Ada");
}

#[tokio::test]
async fn test_update_puts_to_the_entry_path() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/persons/3"))
        .and(body_json(json!({"name": "Ada", "number": "999"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "3", "name": "Ada", "number": "999",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    let updated = store.update("3", &draft("Ada", "999")).await.unwrap();

    assert_eq!(updated.number, "999");
}

#[tokio::test]
async fn test_remove_hits_the_entry_path() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/persons/3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.remove("3").await.unwrap();
}

#[tokio::test]
async fn test_remove_propagates_a_missing_entry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/persons/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert!(store.remove("404").await.is_err());
}

#[tokio::test]
async fn test_create_propagates_a_store_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/persons"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store_for(&server);
    assert!(store.create(&draft("Ada", "123")).await.is_err());
}
