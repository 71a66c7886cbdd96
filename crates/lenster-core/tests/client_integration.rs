//! Integration tests for LensClient against a mocked GraphQL endpoint

use lenster_core::{
    load_profile_settings, AppConfig, LensClient, LensterError, Picture, PictureEditor,
    ProfileSource, SettingsView,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

async fn client_for(server: &MockServer) -> LensClient {
    init_tracing();
    let config = AppConfig {
        api_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    LensClient::new(&config).unwrap()
}

fn profile_body(picture: serde_json::Value) -> serde_json::Value {
    profile_body_with_cover(serde_json::Value::Null, picture)
}

fn profile_body_with_cover(
    cover: serde_json::Value,
    picture: serde_json::Value,
) -> serde_json::Value {
    json!({
        "data": {
            "profiles": {
                "items": [{
                    "id": "0x01",
                    "name": "Alice",
                    "location": "Lisbon",
                    "website": null,
                    "twitter": "alice",
                    "bio": "gm",
                    "attributes": [{ "key": "app", "value": "Lenster" }],
                    "coverPicture": cover,
                    "picture": picture
                }]
            }
        }
    })
}

#[tokio::test]
async fn test_fetch_nft_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "variables": { "request": { "profileIds": ["0x01"] } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body(json!({
            "__typename": "NftImage",
            "uri": "ipfs://bafy",
            "tokenId": "12"
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let profile = client.fetch_profile("0x01").await.unwrap().unwrap();
    assert_eq!(profile.name.as_deref(), Some("Alice"));
    assert_eq!(
        profile.picture,
        Some(Picture::Nft {
            uri: "ipfs://bafy".into(),
            token_id: "12".into()
        })
    );
}

#[tokio::test]
async fn test_settings_view_for_media_profile() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body(json!({
            "__typename": "MediaSet",
            "original": { "url": "https://img.example/alice.png" }
        }))))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let view = load_profile_settings(&client, Some("0x01")).await;
    assert_eq!(view.picture_editor(), Some(PictureEditor::Standard));
}

#[tokio::test]
async fn test_empty_items_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "profiles": { "items": [] } } })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.fetch_profile("0x01").await.unwrap().is_none());
}

#[tokio::test]
async fn test_graphql_errors_surface() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Invalid profile id" }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_profile("bogus").await.unwrap_err();
    assert!(matches!(err, LensterError::GraphQl { ref messages } if messages == &["Invalid profile id"]));
}

#[tokio::test]
async fn test_server_error_fails_view() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let view = load_profile_settings(&client, Some("0x01")).await;
    assert_eq!(view.status_code(), Some(500));
    assert!(matches!(view, SettingsView::Failed(ref msg) if msg.contains("503")));
}

#[tokio::test]
async fn test_no_session_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let view = load_profile_settings(&client, None).await;
    assert_eq!(view, SettingsView::NotFound);
}

#[tokio::test]
async fn test_nft_cover_picture_is_ready() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body_with_cover(
            json!({ "__typename": "NftImage", "uri": "ipfs://cover", "tokenId": "7" }),
            json!({
                "__typename": "MediaSet",
                "original": { "url": "https://img.example/alice.png" }
            }),
        )))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let view = load_profile_settings(&client, Some("0x01")).await;
    assert_eq!(view.picture_editor(), Some(PictureEditor::Standard));
    let SettingsView::Ready { profile, .. } = view else {
        panic!("expected ready view");
    };
    assert_eq!(
        profile.cover_picture,
        Some(Picture::Nft {
            uri: "ipfs://cover".into(),
            token_id: "7".into()
        })
    );
}

#[tokio::test]
async fn test_query_requests_nft_cover_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "profiles": { "items": [] } } })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    client.fetch_profile("0x01").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let query = body["query"].as_str().unwrap();
    let cover = &query[query.find("coverPicture").unwrap()..query.find("picture {").unwrap()];
    assert!(cover.contains("... on NftImage"));
    assert!(cover.contains("tokenId"));
}

#[tokio::test]
async fn test_bad_request_without_errors_fails_view() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_profile("0x01").await.unwrap_err();
    assert!(matches!(err, LensterError::Server { status: 400, .. }));

    let view = load_profile_settings(&client, Some("0x01")).await;
    assert_eq!(view.status_code(), Some(500));
}

#[tokio::test]
async fn test_null_data_without_errors_fails_view() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.fetch_profile("0x01").await.unwrap_err();
    assert!(matches!(err, LensterError::Server { status: 200, .. }));

    let view = load_profile_settings(&client, Some("0x01")).await;
    assert!(matches!(view, SettingsView::Failed(_)));
}
