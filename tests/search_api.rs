//! Search operations and the general gateway endpoints (about,
//! configuration, health).

use mockito::{Matcher, Server};
use serde_json::json;
use signal_lib_rust::SignalClient;

fn client(server: &mockito::ServerGuard) -> SignalClient {
    SignalClient::new(server.url()).expect("client")
}

#[tokio::test]
async fn search_messages_passes_query_and_unwraps() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/search/+123/messages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".into(), "lunch".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"messages": [{"message": "lunch at noon?", "source": "+456"}]}"#)
        .create_async()
        .await;

    let messages = client(&server)
        .search()
        .search_messages("+123", "lunch", Some(10))
        .await
        .expect("messages");

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message.as_deref(), Some("lunch at noon?"));
    mock.assert_async().await;
}

#[tokio::test]
async fn search_contacts_and_groups_return_typed_lists() {
    let mut server = Server::new_async().await;
    let _contacts = server
        .mock("GET", "/v1/search/+123/contacts")
        .match_query(Matcher::UrlEncoded("query".into(), "ada".into()))
        .with_status(200)
        .with_body(r#"[{"number": "+456", "name": "Ada"}]"#)
        .create_async()
        .await;
    let _groups = server
        .mock("GET", "/v1/search/+123/groups")
        .match_query(Matcher::UrlEncoded("query".into(), "team".into()))
        .with_status(200)
        .with_body(r#"{"groups": [{"id": "g1", "name": "Team"}]}"#)
        .create_async()
        .await;

    let api = client(&server);
    let contacts = api
        .search()
        .search_contacts("+123", "ada", None)
        .await
        .expect("contacts");
    assert_eq!(contacts[0].name.as_deref(), Some("Ada"));

    let groups = api
        .search()
        .search_groups("+123", "team", None)
        .await
        .expect("groups");
    assert_eq!(groups[0].id, "g1");
}

#[tokio::test]
async fn search_all_fills_missing_sections_with_empty_lists() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/search/+123")
        .match_query(Matcher::UrlEncoded("query".into(), "ada".into()))
        .with_status(200)
        .with_body(r#"{"contacts": [{"number": "+456"}]}"#)
        .create_async()
        .await;

    let results = client(&server)
        .search()
        .search_all("+123", "ada", None)
        .await
        .expect("results");

    assert_eq!(results.contacts.len(), 1);
    assert!(results.messages.is_empty());
    assert!(results.groups.is_empty());
}

#[tokio::test]
async fn about_returns_gateway_metadata() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/about")
        .with_status(200)
        .with_body(
            r#"{
                "build": 2,
                "mode": "normal",
                "version": "0.80",
                "versions": ["v1", "v2"],
                "capabilities": {"v2/send": ["quotes"]}
            }"#,
        )
        .create_async()
        .await;

    let about = client(&server).about().await.expect("about");
    assert_eq!(about.build, Some(2));
    assert_eq!(about.version, "0.80");
    assert_eq!(about.versions, vec!["v1", "v2"]);
    assert_eq!(
        about.capabilities.get("v2/send"),
        Some(&vec!["quotes".to_string()])
    );
}

#[tokio::test]
async fn configuration_resolves_dual_cased_logging() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/configuration")
        .with_status(200)
        .with_body(r#"{"Logging": {"Level": "info"}}"#)
        .create_async()
        .await;

    let config = client(&server).configuration().await.expect("config");
    assert_eq!(config.logging.level, "info");
}

#[tokio::test]
async fn health_check_returns_acknowledgement() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/health")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let ack = client(&server).health_check().await.expect("health");
    assert_eq!(ack["status"], json!("ok"));
}
