// Test the full request path against a local HTTP server
//
// Builds the service from configuration (base URL pointed at mockito) and
// checks request routing, headers and retry counts on the wire.

use anyhow::Result;
use medtutor::config::Config;
use medtutor::study::{mock_study_guide, StudyService};
use medtutor::GenerationError;

fn config_for(server: &mockito::ServerGuard) -> Config {
    let mut config = Config::new(Some("test-key".to_string()));
    config.gemini.base_url = server.url();
    config.retry.base_delay_ms = 0;
    config
}

fn text_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
    })
    .to_string()
}

#[tokio::test]
async fn test_study_guide_over_http() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let guide_json = serde_json::to_string(&mock_study_guide("Heart"))?;

    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .match_header("x-goog-api-key", "test-key")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"generationConfig":{"responseMimeType":"application/json"}}"#
                .to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(text_body(&guide_json))
        .expect(1)
        .create_async()
        .await;

    let service = StudyService::from_config(&config_for(&server));
    let guide = service.generate_study_guide("Heart").await?;

    mock.assert_async().await;
    assert_eq!(guide.topic, "Heart");
    assert_eq!(guide.sections.len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_server_errors_are_retried_then_returned() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
        .with_status(500)
        .with_body("internal")
        .expect(3)
        .create_async()
        .await;

    let service = StudyService::from_config(&config_for(&server));
    let err = service.generate_study_guide("Heart").await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, GenerationError::Api { status: 500, .. }));

    Ok(())
}

#[tokio::test]
async fn test_speech_over_http() -> Result<()> {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash-preview-tts:generateContent",
        )
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"generationConfig":{"responseModalities":["AUDIO"]}}"#.to_string(),
        ))
        .with_status(200)
        .with_body(
            serde_json::json!({
                "candidates": [{"content": {"parts": [
                    {"inlineData": {"mimeType": "audio/L16;rate=24000", "data": "UklGRg=="}}
                ]}}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = StudyService::from_config(&config_for(&server));
    let audio = service.generate_speech("Four chambers").await?;

    mock.assert_async().await;
    assert_eq!(audio.as_deref(), Some("UklGRg=="));

    Ok(())
}
