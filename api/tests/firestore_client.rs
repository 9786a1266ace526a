use api::{Fields, FirestoreStore, LeadStore, StoreConfig, StoreError};
use mockito::Matcher;
use serde_json::json;

fn lead() -> Fields {
    [
        ("name", "A"),
        ("phone", "123"),
        ("email", ""),
        ("village", "V"),
        ("district", "D"),
        ("requirement", "R"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn store_for(server: &mockito::Server) -> FirestoreStore {
    let config = StoreConfig {
        project_id: "demo-project".into(),
        api_key: Some("test-key".into()),
        ..StoreConfig::default()
    }
    .with_base_url(server.url());
    FirestoreStore::new(config)
}

#[tokio::test]
async fn posts_string_fields_to_collection() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock(
            "POST",
            "/v1/projects/demo-project/databases/(default)/documents/farmers",
        )
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::Json(json!({
            "fields": {
                "name": { "stringValue": "A" },
                "phone": { "stringValue": "123" },
                "email": { "stringValue": "" },
                "village": { "stringValue": "V" },
                "district": { "stringValue": "D" },
                "requirement": { "stringValue": "R" },
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"projects/demo-project/databases/(default)/documents/farmers/abc"}"#)
        .create_async()
        .await;

    let store = store_for(&server);
    assert_eq!(store.config().project_id, "demo-project");
    let result = store.append("farmers", lead()).await;

    assert!(result.is_ok(), "append should succeed: {result:?}");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_is_rejected() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock(
            "POST",
            "/v1/projects/demo-project/databases/(default)/documents/farmers",
        )
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error":{"status":"PERMISSION_DENIED"}}"#)
        .create_async()
        .await;

    let store = store_for(&server);
    let err = store.append("farmers", lead()).await.unwrap_err();

    match err {
        StoreError::Rejected { status, body } => {
            assert_eq!(status, 403);
            assert!(body.contains("PERMISSION_DENIED"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_host_is_http_error() {
    let config = StoreConfig::default().with_base_url("http://127.0.0.1:9");
    let store = FirestoreStore::new(config);

    let err = store.append("farmers", lead()).await.unwrap_err();
    assert!(matches!(err, StoreError::Http(_)), "{err:?}");
}
