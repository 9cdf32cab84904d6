//! Binary transfer paths: attachment upload/download and sticker packs.
//! These bypass response normalization except for JSON acknowledgements.

use mockito::{Matcher, Server};
use serde_json::json;
use signal_lib_rust::modules::StickerUpload;
use signal_lib_rust::SignalClient;

fn client(server: &mockito::ServerGuard) -> SignalClient {
    SignalClient::new(server.url()).expect("client")
}

#[tokio::test]
async fn upload_attachment_coerces_acknowledgement() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/attachments/+123")
        .match_header("content-type", "image/png")
        .with_status(201)
        .with_body(r#"{"id": "att1", "content_type": "image/png", "size": 4}"#)
        .create_async()
        .await;

    let attachment = client(&server)
        .attachments()
        .upload_attachment("+123", vec![0x89, 0x50, 0x4e, 0x47], "image/png")
        .await
        .expect("attachment");

    assert_eq!(attachment.id, "att1");
    assert_eq!(attachment.content_type.as_deref(), Some("image/png"));
    assert_eq!(attachment.size, Some(4));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_attachment_returns_raw_bytes() {
    let mut server = Server::new_async().await;
    let payload: &[u8] = &[0x00, 0x01, 0xfe, 0xff];
    let _mock = server
        .mock("GET", "/v1/attachments/+123/att1")
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(payload)
        .create_async()
        .await;

    let bytes = client(&server)
        .attachments()
        .get_attachment("+123", "att1")
        .await
        .expect("bytes");

    assert_eq!(bytes.as_ref(), payload);
}

#[tokio::test]
async fn get_attachment_error_still_classifies_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/attachments/+123/missing")
        .with_status(404)
        .with_body(r#"{"error": "no such attachment"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .attachments()
        .get_attachment("+123", "missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("no such attachment"));
}

#[tokio::test]
async fn attachment_info_and_listing() {
    let mut server = Server::new_async().await;
    let _info = server
        .mock("GET", "/v1/attachments/+123/att1/info")
        .with_status(200)
        .with_body(r#"{"id": "att1", "filename": "cat.png", "width": 64, "height": 64}"#)
        .create_async()
        .await;
    let _list = server
        .mock("GET", "/v1/attachments/+123")
        .with_status(200)
        .with_body(r#"{"attachments": [{"id": "att1"}, {"id": "att2"}]}"#)
        .create_async()
        .await;

    let api = client(&server);
    let info = api
        .attachments()
        .get_attachment_info("+123", "att1")
        .await
        .expect("info");
    assert_eq!(info.filename.as_deref(), Some("cat.png"));
    assert_eq!(info.width, Some(64));

    let attachments = api
        .attachments()
        .get_attachments("+123")
        .await
        .expect("attachments");
    assert_eq!(attachments.len(), 2);
}

#[tokio::test]
async fn sticker_packs_unwrap_container() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/v1/stickers/+123")
        .with_status(200)
        .with_body(
            r#"{"stickers": [{"id": "pack1", "key": "k1", "title": "Cats", "stickers": [{"id": 0, "emoji": "😺"}]}]}"#,
        )
        .create_async()
        .await;

    let packs = client(&server)
        .stickers()
        .get_sticker_packs("+123")
        .await
        .expect("packs");

    assert_eq!(packs.len(), 1);
    assert_eq!(packs[0].id, "pack1");
    assert_eq!(packs[0].stickers[0].emoji.as_deref(), Some("😺"));
}

#[tokio::test]
async fn install_sticker_pack_uses_camel_cased_keys() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/stickers/+123")
        .match_body(Matcher::Json(json!({ "packId": "pack1", "packKey": "k1" })))
        .with_status(200)
        .with_body(r#"{"installed": true}"#)
        .create_async()
        .await;

    let ack = client(&server)
        .stickers()
        .install_sticker_pack("+123", "pack1", "k1")
        .await
        .expect("ack");
    assert_eq!(ack["installed"], json!(true));
    mock.assert_async().await;
}

#[tokio::test]
async fn upload_sticker_pack_posts_multipart_form() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/stickers/+123/upload")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .with_status(200)
        .with_body(r#"{"packId": "pack9", "packKey": "k9"}"#)
        .create_async()
        .await;

    let ack = client(&server)
        .stickers()
        .upload_sticker_pack(
            "+123",
            "Cats",
            "Ada",
            vec![1, 2, 3],
            vec![StickerUpload {
                image: vec![4, 5, 6],
                emoji: "😺".to_string(),
            }],
        )
        .await
        .expect("ack");

    assert_eq!(ack["packId"], json!("pack9"));
    mock.assert_async().await;
}

#[tokio::test]
async fn uninstall_sticker_pack() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v1/stickers/+123/pack1")
        .with_status(200)
        .with_body(r#"{"removed": true}"#)
        .create_async()
        .await;

    let ack = client(&server)
        .stickers()
        .uninstall_sticker_pack("+123", "pack1")
        .await
        .expect("ack");
    assert_eq!(ack["removed"], json!(true));
    mock.assert_async().await;
}
