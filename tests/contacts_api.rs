//! Contact, profile, and identity operations against a mock gateway.

use mockito::{Matcher, Server};
use serde_json::json;
use signal_lib_rust::models::TrustLevel;
use signal_lib_rust::SignalClient;

fn client(server: &mockito::ServerGuard) -> SignalClient {
    SignalClient::new(server.url()).expect("client")
}

#[tokio::test]
async fn get_contacts_handles_all_three_shapes() {
    let mut server = Server::new_async().await;
    let api = client(&server);

    let wrapped = server
        .mock("GET", "/v1/contacts/+123")
        .with_status(200)
        .with_body(r#"{"contacts": [{"number": "+456", "name": "Ada"}]}"#)
        .expect(1)
        .create_async()
        .await;
    let contacts = api.contacts().get_contacts("+123").await.expect("contacts");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name.as_deref(), Some("Ada"));
    wrapped.assert_async().await;

    let _bare = server
        .mock("GET", "/v1/contacts/+123")
        .with_status(200)
        .with_body(r#"[{"number": "+456"}, {"number": "+789"}]"#)
        .create_async()
        .await;
    let contacts = api.contacts().get_contacts("+123").await.expect("contacts");
    assert_eq!(contacts.len(), 2);

    let _single = server
        .mock("GET", "/v1/contacts/+123")
        .with_status(200)
        .with_body(r#"{"number": "+456"}"#)
        .create_async()
        .await;
    let contacts = api.contacts().get_contacts("+123").await.expect("contacts");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].number.as_deref(), Some("+456"));
}

#[tokio::test]
async fn add_contact_stringifies_expiration() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/contacts/+123")
        .match_body(Matcher::Json(json!({
            "contact": "+456",
            "name": "Ada",
            "expiration": "604800"
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    client(&server)
        .contacts()
        .add_contact("+123", "+456", Some("Ada"), Some(604800))
        .await
        .expect("ack");
    mock.assert_async().await;
}

#[tokio::test]
async fn block_and_blocked_list() {
    let mut server = Server::new_async().await;
    let block = server
        .mock("PUT", "/v1/contacts/+123/+456/block")
        .with_status(200)
        .with_body(r#"{"blocked": true}"#)
        .create_async()
        .await;
    let blocked = server
        .mock("GET", "/v1/contacts/+123/blocked")
        .with_status(200)
        .with_body(r#"{"contacts": [{"number": "+456", "blocked": true}]}"#)
        .create_async()
        .await;

    let api = client(&server);
    let ack = api
        .contacts()
        .block_contact("+123", "+456")
        .await
        .expect("block");
    assert_eq!(ack["blocked"], json!(true));

    let contacts = api
        .contacts()
        .get_blocked_contacts("+123")
        .await
        .expect("blocked");
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].blocked, Some(true));

    block.assert_async().await;
    blocked.assert_async().await;
}

#[tokio::test]
async fn get_profile_and_contact_profiles() {
    let mut server = Server::new_async().await;
    let _own = server
        .mock("GET", "/v1/profiles/+123")
        .with_status(200)
        .with_body(r#"{"name": "Ada", "about": "hi", "capabilities": ["stories"]}"#)
        .create_async()
        .await;
    let _all = server
        .mock("GET", "/v1/profiles/+123/contacts")
        .with_status(200)
        .with_body(r#"{"contacts": [{"number": "+456", "name": "Grace"}]}"#)
        .create_async()
        .await;

    let api = client(&server);
    let profile = api.profiles().get_profile("+123").await.expect("profile");
    assert_eq!(profile.name.as_deref(), Some("Ada"));
    assert_eq!(profile.capabilities, vec!["stories"]);

    let profiles = api
        .profiles()
        .get_contacts_profiles("+123")
        .await
        .expect("profiles");
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name.as_deref(), Some("Grace"));
}

#[tokio::test]
async fn update_profile_sends_only_provided_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/profiles/+123")
        .match_body(Matcher::Json(json!({ "name": "Ada", "emoji": "🦀" })))
        .with_status(204)
        .with_body("")
        .create_async()
        .await;

    client(&server)
        .profiles()
        .update_profile("+123", Some("Ada"), None, None, Some("🦀"))
        .await
        .expect("ack");
    mock.assert_async().await;
}

#[tokio::test]
async fn identities_unwrap_container_and_parse_trust() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/identities/+123")
        .with_status(200)
        .with_body(
            r#"{"identities": [{"number": "+456", "trust_level": "TRUSTED_VERIFIED", "safety_number": "012345"}]}"#,
        )
        .create_async()
        .await;

    let identities = client(&server)
        .identities()
        .get_identities("+123")
        .await
        .expect("identities");

    assert_eq!(identities.len(), 1);
    assert_eq!(identities[0].trust_level, Some(TrustLevel::TrustedVerified));
    assert_eq!(identities[0].safety_number.as_deref(), Some("012345"));
}

#[tokio::test]
async fn trust_identity_sends_camel_cased_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/v1/identities/+123/+456")
        .match_body(Matcher::Json(json!({
            "trustLevel": "TRUSTED_VERIFIED",
            "verifiedSafetyNumber": "012345"
        })))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client(&server)
        .identities()
        .trust_identity("+123", "+456", "TRUSTED_VERIFIED", Some("012345"))
        .await
        .expect("ack");
    mock.assert_async().await;
}

#[tokio::test]
async fn reset_identity_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/identities/+123/+456/session")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client(&server)
        .identities()
        .reset_identity_session("+123", "+456")
        .await
        .expect("ack");
    mock.assert_async().await;
}
