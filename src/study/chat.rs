// Multi-turn tutoring chat
//
// The REST API is stateless, so the session keeps the history and resends
// it with every turn.

use std::iter;
use std::sync::Arc;

use super::types::ChatReply;
use crate::errors::{GenerationError, Result};
use crate::providers::types::Content;
use crate::providers::{GenerateRequest, GenerativeProvider, Tool};

pub struct ChatSession {
    provider: Arc<dyn GenerativeProvider>,
    model: String,
    system_instruction: String,
    tools: Vec<Tool>,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(
        provider: Arc<dyn GenerativeProvider>,
        model: String,
        system_instruction: String,
        tools: Vec<Tool>,
    ) -> Self {
        Self {
            provider,
            model,
            system_instruction,
            tools,
            history: Vec::new(),
        }
    }

    /// Completed turns, alternating user and model
    pub fn history(&self) -> &[Content] {
        &self.history
    }

    /// Send one user message and wait for the tutor's reply
    ///
    /// Not retried. The history only changes once a reply arrives, so a failed
    /// or cancelled turn leaves it as it was before the call.
    pub async fn send_message(&mut self, text: &str) -> Result<ChatReply> {
        let turn = Content::user(text);
        let reply = self.exchange(&turn).await?;

        self.history.push(turn);
        self.history.push(Content::model(reply.text.clone()));
        Ok(reply)
    }

    async fn exchange(&self, turn: &Content) -> Result<ChatReply> {
        let contents = self
            .history
            .iter()
            .cloned()
            .chain(iter::once(turn.clone()))
            .collect();
        let request = GenerateRequest::new(self.model.clone(), contents)
            .with_system_instruction(self.system_instruction.clone())
            .with_tools(self.tools.clone());

        let response = self.provider.generate_content(&request).await?;
        let text = response
            .text()
            .ok_or(GenerationError::NoTextPayload("chat reply"))?;

        Ok(ChatReply {
            text,
            sources: response.web_sources(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::{
        Candidate, GenerateResponse, GroundingChunk, GroundingMetadata, WebSource,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Echoes the number of turns it was sent; fails or stalls when told to
    struct EchoProvider {
        fail: Mutex<bool>,
        stall: Mutex<bool>,
        seen: Mutex<Vec<GenerateRequest>>,
    }

    #[async_trait]
    impl GenerativeProvider for EchoProvider {
        async fn generate_content(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
            self.seen.lock().unwrap().push(request.clone());
            let stall = *self.stall.lock().unwrap();
            if stall {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }
            if *self.fail.lock().unwrap() {
                return Err(GenerationError::Api {
                    status: 503,
                    body: "unavailable".to_string(),
                });
            }

            Ok(GenerateResponse {
                candidates: vec![Candidate {
                    content: Some(Content::model(format!(
                        "turns: {}",
                        request.contents.len()
                    ))),
                    grounding_metadata: Some(GroundingMetadata {
                        grounding_chunks: vec![GroundingChunk {
                            web: Some(WebSource {
                                uri: "https://example.org/guideline".to_string(),
                                title: Some("Guideline".to_string()),
                            }),
                        }],
                    }),
                }],
            })
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    fn session(provider: Arc<EchoProvider>) -> ChatSession {
        ChatSession::new(
            provider,
            "gemini-2.5-flash".to_string(),
            "You are an expert medical tutor".to_string(),
            vec![Tool::google_search()],
        )
    }

    fn echo() -> Arc<EchoProvider> {
        Arc::new(EchoProvider {
            fail: Mutex::new(false),
            stall: Mutex::new(false),
            seen: Mutex::new(Vec::new()),
        })
    }

    #[tokio::test]
    async fn test_history_accumulates() {
        let provider = echo();
        let mut chat = session(provider.clone());

        let first = chat.send_message("What is the SA node?").await.unwrap();
        assert_eq!(first.text, "turns: 1");
        assert_eq!(first.sources.len(), 1);

        let second = chat.send_message("And the AV node?").await.unwrap();
        assert_eq!(second.text, "turns: 3");
        assert_eq!(chat.history().len(), 4);
        assert_eq!(chat.history()[1].role.as_deref(), Some("model"));

        let seen = provider.seen.lock().unwrap();
        let last = seen.last().unwrap();
        assert_eq!(last.tools, Some(vec![Tool::google_search()]));
        assert!(last.system_instruction.is_some());
    }

    #[tokio::test]
    async fn test_failed_turn_rolls_back() {
        let provider = echo();
        let mut chat = session(provider.clone());

        chat.send_message("First question").await.unwrap();
        *provider.fail.lock().unwrap() = true;

        let err = chat.send_message("Second question").await.unwrap_err();
        assert!(matches!(err, GenerationError::Api { status: 503, .. }));
        assert_eq!(chat.history().len(), 2);
        // No retry inside the session
        assert_eq!(provider.seen.lock().unwrap().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_turn_leaves_history_untouched() {
        let provider = echo();
        let mut chat = session(provider.clone());

        chat.send_message("First question").await.unwrap();
        *provider.stall.lock().unwrap() = true;

        let outcome =
            tokio::time::timeout(Duration::from_secs(1), chat.send_message("Abandoned")).await;
        assert!(outcome.is_err());
        assert_eq!(chat.history().len(), 2);

        *provider.stall.lock().unwrap() = false;
        let reply = chat.send_message("Second question").await.unwrap();
        assert_eq!(reply.text, "turns: 3");

        let seen = provider.seen.lock().unwrap();
        let roles: Vec<_> = seen
            .last()
            .unwrap()
            .contents
            .iter()
            .map(|content| content.role.as_deref())
            .collect();
        assert_eq!(roles, vec![Some("user"), Some("model"), Some("user")]);
    }
}
