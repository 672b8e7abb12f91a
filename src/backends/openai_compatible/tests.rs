use mockito::Matcher;
use serde_json::json;

use super::*;

fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system().content("You are a doctor.").build(),
        ChatMessage::user().content("What helps a headache?").build(),
    ]
}

fn client_for(server: &mockito::ServerGuard) -> OpenAICompatible {
    OpenAICompatible::builder()
        .base_url(server.url())
        .api_key("test-key")
        .model("test-model")
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn sends_transcript_and_reads_first_choice() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::Json(json!({
            "model": "test-model",
            "stream": false,
            "messages": [
                {"role": "system", "content": "You are a doctor."},
                {"role": "user", "content": "What helps a headache?"}
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "  Rest and fluids.  "}},
                    {"message": {"role": "assistant", "content": "ignored"}}
                ],
                "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client_for(&server).chat(&conversation()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.text().as_deref(), Some("  Rest and fluids.  "));
    let usage = response.usage().expect("usage present");
    assert_eq!(usage.total_tokens, 16);
}

#[tokio::test]
async fn sampling_parameters_are_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "temperature": 0.5,
            "max_tokens": 100,
            "presence_penalty": 0.5
        })))
        .with_status(200)
        .with_body(json!({"choices": [{"message": {"content": "ok"}}]}).to_string())
        .create_async()
        .await;

    let client = OpenAICompatible::builder()
        .base_url(server.url())
        .api_key("test-key")
        .temperature(0.5)
        .max_tokens(100)
        .presence_penalty(0.5)
        .build()
        .unwrap();
    client.chat(&conversation()).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_status_maps_to_auth_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":"Invalid credentials"}"#)
        .create_async()
        .await;

    let err = client_for(&server).chat(&conversation()).await.unwrap_err();
    match err {
        ChatError::AuthError(message) => assert!(message.contains("Invalid credentials")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let err = client_for(&server).chat(&conversation()).await.unwrap_err();
    match err {
        ChatError::ProviderError(message) => {
            assert!(message.contains("503"));
            assert!(message.contains("overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_format_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server).chat(&conversation()).await.unwrap_err();
    match err {
        ChatError::ResponseFormatError { raw_response, .. } => {
            assert_eq!(raw_response, "<html>gateway</html>")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_api_key_fails_without_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let client = OpenAICompatible::builder()
        .base_url(server.url())
        .build()
        .unwrap();
    let err = client.chat(&conversation()).await.unwrap_err();

    assert!(matches!(err, ChatError::AuthError(_)));
    mock.assert_async().await;
}

#[test]
fn empty_choices_have_no_text() {
    let response: OpenAICompatibleChatResponse =
        serde_json::from_str(r#"{"choices": []}"#).unwrap();
    assert_eq!(response.text(), None);
    assert_eq!(response.to_string(), "No response content");
}

#[tokio::test]
async fn request_timeout_surfaces_as_http_error() {
    // Accepts connections but never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            open.push(socket);
        }
    });

    let client = OpenAICompatible::builder()
        .base_url(format!("http://{addr}/v1"))
        .api_key("test-key")
        .timeout_seconds(1)
        .build()
        .unwrap();

    let started = std::time::Instant::now();
    let err = client.chat(&conversation()).await.unwrap_err();

    assert!(matches!(err, ChatError::HttpError(_)), "{err:?}");
    assert!(started.elapsed() < Duration::from_secs(10));
    hold.abort();
}
