//! Integration tests for the HTTP inference client.
//!
//! A one-shot HTTP stub on a local port stands in for the hosted API.

use std::io::Cursor;
use std::time::Duration;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use herstory_gateway::{GatewayConfig, GatewayError, InferenceClient, InferenceGateway, TEXT_FALLBACK};

/// Canned reply for the stub server.
struct StubReply {
    status: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
    delay: Option<Duration>,
}

impl StubReply {
    fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: "200 OK",
            content_type,
            body: body.into(),
            delay: None,
        }
    }

    fn status(status: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay: None,
        }
    }

    fn hang(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::ok("application/json", "[]")
        }
    }
}

/// Serve exactly one request; the raw request text is sent on the channel.
async fn serve_once(reply: StubReply) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        let _ = tx.send(request);

        if let Some(delay) = reply.delay {
            tokio::time::sleep(delay).await;
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            reply.status,
            reply.content_type,
            reply.body.len()
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(&reply.body).await;
        let _ = socket.shutdown().await;
    });

    (base, rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn config_for(base: &str) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.api_base = format!("{}/models", base);
    config.image_model = "test/image".to_string();
    config.text_model = "test/text".to_string();
    config
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut png = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([1, 2, 3])))
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .unwrap();
    png
}

/// Test text generation sends the documented request and reads the first output.
#[tokio::test]
async fn test_generate_text_success() {
    let (base, request) = serve_once(StubReply::ok(
        "application/json",
        r#"[{"generated_text": "Start with a budget."}]"#,
    ))
    .await;

    let client = InferenceClient::new(config_for(&base).with_api_token("hf_test"));
    let answer = client.generate_text("You are Rosa Parks.").await;
    assert_eq!(answer, "Start with a budget.");

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /models/test/text HTTP/1.1"));
    assert!(request
        .to_lowercase()
        .contains("authorization: bearer hf_test"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "inputs": "You are Rosa Parks.",
            "parameters": { "max_new_tokens": 200 }
        })
    );
}

/// Test no Authorization header is sent without a token.
#[tokio::test]
async fn test_no_token_no_authorization_header() {
    let (base, request) = serve_once(StubReply::ok("image/png", png_bytes(2, 2))).await;

    let client = InferenceClient::new(config_for(&base));
    let avatar = client.generate_avatar("portrait").await;
    assert!(!avatar.is_placeholder());

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /models/test/image HTTP/1.1"));
    assert!(!request.to_lowercase().contains("authorization:"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(json, serde_json::json!({ "inputs": "portrait" }));
}

/// Test a decodable image becomes a generated avatar.
#[tokio::test]
async fn test_generate_avatar_success() {
    let (base, _request) = serve_once(StubReply::ok("image/png", png_bytes(16, 32))).await;

    let client = InferenceClient::new(config_for(&base));
    let image = client.try_generate_avatar("portrait").await.unwrap();
    assert_eq!((image.width(), image.height()), (16, 32));
}

/// Test a JSON error body in place of image bytes yields the placeholder.
#[tokio::test]
async fn test_generate_avatar_non_image_body() {
    let (base, _request) = serve_once(StubReply::ok(
        "application/json",
        r#"{"error": "Model is currently loading"}"#,
    ))
    .await;

    let client = InferenceClient::new(config_for(&base));
    let avatar = client.generate_avatar("portrait").await;
    assert!(avatar.is_placeholder());
    assert_eq!(avatar.dimensions(), (256, 512));
}

/// Test error statuses are typed on the client and absorbed by the gateway.
#[tokio::test]
async fn test_error_status() {
    let (base, _request) = serve_once(StubReply::status(
        "503 Service Unavailable",
        r#"{"error": "overloaded"}"#,
    ))
    .await;
    let client = InferenceClient::new(config_for(&base));
    let err = client.try_generate_text("q").await.unwrap_err();
    match err {
        GatewayError::Status { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("overloaded"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let (base, _request) = serve_once(StubReply::status("401 Unauthorized", "{}")).await;
    let client = InferenceClient::new(config_for(&base));
    assert_eq!(client.generate_text("q").await, TEXT_FALLBACK);
}

/// Test a malformed text payload falls back.
#[tokio::test]
async fn test_generate_text_malformed_payload() {
    let (base, _request) = serve_once(StubReply::ok("application/json", "[]")).await;

    let client = InferenceClient::new(config_for(&base));
    assert_eq!(client.generate_text("q").await, TEXT_FALLBACK);
}

/// Test a stalled server trips the timeout and falls back.
#[tokio::test]
async fn test_generate_text_timeout() {
    let (base, _request) = serve_once(StubReply::hang(Duration::from_secs(5))).await;

    let mut config = config_for(&base);
    config.text_timeout = Duration::from_millis(200);
    let client = InferenceClient::new(config);

    let err = client.try_generate_text("q").await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout(_)), "got {err}");
}

/// Test a stalled text model yields the fallback answer.
#[tokio::test]
async fn test_generate_text_timeout_falls_back() {
    let (base, _request) = serve_once(StubReply::hang(Duration::from_secs(5))).await;

    let mut config = config_for(&base);
    config.text_timeout = Duration::from_millis(200);
    let client = InferenceClient::new(config);

    assert_eq!(client.generate_text("q").await, TEXT_FALLBACK);
}

/// Test a stalled image model yields the placeholder avatar.
#[tokio::test]
async fn test_generate_avatar_timeout_falls_back() {
    let (base, _request) = serve_once(StubReply::hang(Duration::from_secs(5))).await;

    let mut config = config_for(&base);
    config.image_timeout = Duration::from_millis(200);
    let client = InferenceClient::new(config);

    let avatar = client.generate_avatar("portrait").await;
    assert!(avatar.is_placeholder());
    assert_eq!(avatar.dimensions(), (256, 512));
}

/// Test an unreachable endpoint yields both fallback values.
#[tokio::test]
async fn test_unreachable_endpoint_fallbacks() {
    // Bind then drop to get a port with nothing listening
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = InferenceClient::new(config_for(&base));

    let avatar = client.generate_avatar("portrait").await;
    assert!(avatar.is_placeholder());
    assert_eq!(avatar.dimensions(), (256, 512));

    assert_eq!(client.generate_text("q").await, TEXT_FALLBACK);
    assert!(matches!(
        client.try_generate_text("q").await,
        Err(GatewayError::Http(_))
    ));
}
