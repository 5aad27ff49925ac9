use cobalt_relay::{
    Error,
    extract::{ExtractionClient, ExtractionResult, OptionValue, build_request},
};
use serde_json::json;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: Option<&str>) -> ExtractionClient {
    let base_url = Url::parse(&server.uri()).unwrap();
    ExtractionClient::new(base_url, api_key.map(str::to_string)).unwrap()
}

fn no_options() -> Vec<(&'static str, OptionValue)> {
    Vec::new()
}

#[tokio::test]
async fn submit_sends_minimal_payload_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "url": "https://x.com/v",
            "videoQuality": "1080",
            "downloadMode": "auto",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "redirect",
            "url": "https://media.example/v.mp4",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let result = client
        .submit(&build_request("https://x.com/v", no_options()))
        .await
        .unwrap();

    assert_eq!(result.status(), "redirect");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn submit_sends_api_key_and_set_options() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("authorization", "Api-Key secret"))
        .and(body_json(json!({
            "url": "https://x.com/v",
            "videoQuality": "max",
            "downloadMode": "audio",
            "audioFormat": "opus",
            "tiktokFullAudio": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "error": { "code": "error.api.fetch.empty" },
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = build_request(
        "https://x.com/v",
        [
            ("quality", OptionValue::from("max")),
            ("mode", OptionValue::from("audio")),
            ("audioFormat", OptionValue::from("opus")),
            ("tiktokFullAudio", OptionValue::from(true)),
            ("twitterGif", OptionValue::from(false)),
        ],
    );
    let result = client_for(&server, Some("secret"))
        .submit(&request)
        .await
        .unwrap();

    assert!(matches!(result, ExtractionResult::Error(ref e) if e.code == "error.api.fetch.empty"));
}

#[tokio::test]
async fn submit_non_success_status_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .submit(&build_request("https://x.com/v", no_options()))
        .await
        .unwrap_err();

    match err {
        Error::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn submit_malformed_body_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .submit(&build_request("https://x.com/v", no_options()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn submit_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "tunnel", "url": "https://t/x" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = ExtractionClient::with_client(http, Url::parse(&server.uri()).unwrap(), None);

    let err = client
        .submit(&build_request("https://x.com/v", no_options()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FetchTimeout(_)));
}

#[tokio::test]
async fn submit_connection_refused_is_network_error() {
    let client = ExtractionClient::new(Url::parse("http://127.0.0.1:1/").unwrap(), None).unwrap();

    let err = client
        .submit(&build_request("https://x.com/v", no_options()))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::FetchFailed { .. }));
}

#[tokio::test]
async fn fetch_prefers_explicit_filename() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media/clip.mp4"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", "attachment; filename=\"header.mp4\"")
                .set_body_bytes(b"video-bytes".to_vec()),
        )
        .mount(&server)
        .await;

    let url = format!("{}/media/clip.mp4", server.uri());
    let media = client_for(&server, None)
        .fetch(&url, Some("explicit.mp4"))
        .await
        .unwrap();

    assert_eq!(media.filename, "explicit.mp4");
    assert_eq!(&media.data[..], b"video-bytes");
}

#[tokio::test]
async fn fetch_uses_content_disposition_then_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/with-header"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-disposition", "attachment; filename=\"header.mp4\"")
                .set_body_bytes(b"a".to_vec()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/plain.webm"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"b".to_vec()))
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    let from_header = client
        .fetch(&format!("{}/with-header", server.uri()), None)
        .await
        .unwrap();
    assert_eq!(from_header.filename, "header.mp4");

    let from_url = client
        .fetch(&format!("{}/files/plain.webm?token=1", server.uri()), None)
        .await
        .unwrap();
    assert_eq!(from_url.filename, "plain.webm");
}

#[tokio::test]
async fn fetch_non_success_status_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch(&format!("{}/gone.mp4", server.uri()), None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnexpectedStatus { status: 404, .. }));
}

#[tokio::test]
async fn fetch_non_success_status_keeps_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("signature expired"))
        .mount(&server)
        .await;

    let err = client_for(&server, None)
        .fetch(&format!("{}/denied.mp4", server.uri()), None)
        .await
        .unwrap_err();

    match err {
        Error::UnexpectedStatus { status, body, .. } => {
            assert_eq!(status, 403);
            assert_eq!(body, "signature expired");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
