// Study content requesters
//
// Each requester builds a prompt/schema pair, sends it through the retry
// wrapper and unwraps the typed result. Study guides and quizzes fall back
// to mock content without a credential; images, speech and chat need one.

use std::sync::Arc;
use std::time::Duration;

use super::chat::ChatSession;
use super::mock::{mock_quiz, mock_study_guide};
use super::prompts;
use super::schema::{quiz_schema, study_guide_schema};
use super::types::{Difficulty, QuizSession, StudyGuide};
use crate::config::{Config, GeminiSettings};
use crate::errors::{GenerationError, Result};
use crate::providers::{
    create_provider, with_retry, GenerateRequest, GenerationConfig, GenerativeProvider,
    RetryPolicy, Tool,
};

const STUDY_GUIDE_TEMPERATURE: f32 = 0.4;
const QUIZ_TEMPERATURE: f32 = 0.5;

/// Model names per kind of content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
    pub text: String,
    pub image: String,
    pub speech: String,
    pub voice: String,
}

impl Default for ModelSet {
    fn default() -> Self {
        Self::from(&GeminiSettings::default())
    }
}

impl From<&GeminiSettings> for ModelSet {
    fn from(settings: &GeminiSettings) -> Self {
        Self {
            text: settings.text_model.clone(),
            image: settings.image_model.clone(),
            speech: settings.speech_model.clone(),
            voice: settings.voice.clone(),
        }
    }
}

/// Entry point for generating study content
///
/// Holds the provider (or its absence), the model names and the retry policy.
/// All requesters take `&self`, so one service can serve concurrent callers.
pub struct StudyService {
    provider: Option<Arc<dyn GenerativeProvider>>,
    models: ModelSet,
    retry: RetryPolicy,
    offline_delay: Duration,
}

impl StudyService {
    /// Build the service from configuration; no credential means mock mode
    pub fn from_config(config: &Config) -> Self {
        Self {
            provider: create_provider(config),
            models: ModelSet::from(&config.gemini),
            retry: config.retry_policy(),
            offline_delay: config.offline_delay(),
        }
    }

    /// Use an explicit provider with default models and timing
    pub fn with_provider(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self {
            provider: Some(provider),
            ..Self::offline()
        }
    }

    /// Service with no provider: mock content only
    pub fn offline() -> Self {
        let defaults = Config::default();
        Self {
            provider: None,
            models: ModelSet::default(),
            retry: defaults.retry_policy(),
            offline_delay: defaults.offline_delay(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_offline_delay(mut self, delay: Duration) -> Self {
        self.offline_delay = delay;
        self
    }

    /// Whether requests go to a live provider
    pub fn is_online(&self) -> bool {
        self.provider.is_some()
    }

    fn require_provider(&self, operation: &'static str) -> Result<&Arc<dyn GenerativeProvider>> {
        self.provider
            .as_ref()
            .ok_or(GenerationError::MissingCredential(operation))
    }

    /// Generate a structured study guide for a topic
    pub async fn generate_study_guide(&self, topic: &str) -> Result<StudyGuide> {
        let Some(provider) = &self.provider else {
            tracing::info!("API key not available, using mock study guide for {}", topic);
            tokio::time::sleep(self.offline_delay).await;
            return Ok(mock_study_guide(topic));
        };

        let request = GenerateRequest::from_prompt(
            self.models.text.clone(),
            prompts::study_guide_prompt(topic),
        )
        .with_system_instruction(prompts::STUDY_GUIDE_SYSTEM_INSTRUCTION)
        .with_generation_config(GenerationConfig::json(
            study_guide_schema(),
            STUDY_GUIDE_TEMPERATURE,
        ));

        with_retry(&self.retry, || async {
            let response = provider.generate_content(&request).await?;
            let text = response
                .text()
                .ok_or(GenerationError::NoTextPayload("study guide"))?;
            let guide: StudyGuide = serde_json::from_str(&text)?;
            Ok::<_, GenerationError>(guide)
        })
        .await
    }

    /// Generate five vignette-style questions at the given difficulty
    pub async fn generate_quiz(&self, topic: &str, difficulty: Difficulty) -> Result<QuizSession> {
        let Some(provider) = &self.provider else {
            tracing::info!(
                "API key not available, using mock {} quiz for {}",
                difficulty,
                topic
            );
            tokio::time::sleep(self.offline_delay).await;
            return Ok(mock_quiz(topic, difficulty));
        };

        let request = GenerateRequest::from_prompt(
            self.models.text.clone(),
            prompts::quiz_prompt(topic, difficulty),
        )
        .with_generation_config(GenerationConfig::json(quiz_schema(), QUIZ_TEMPERATURE));

        with_retry(&self.retry, || async {
            let response = provider.generate_content(&request).await?;
            let text = response
                .text()
                .ok_or(GenerationError::NoTextPayload("quiz"))?;
            let quiz: QuizSession = serde_json::from_str(&text)?;
            quiz.validate()?;
            Ok::<_, GenerationError>(quiz)
        })
        .await
    }

    /// Generate a labeled anatomical diagram, returned as a data URI
    pub async fn generate_anatomy_image(&self, topic: &str, section: &str) -> Result<String> {
        let provider = self.require_provider("Image generation")?;

        let request = GenerateRequest::from_prompt(
            self.models.image.clone(),
            prompts::anatomy_image_prompt(topic, section),
        );

        with_retry(&self.retry, || async {
            let response = provider.generate_content(&request).await?;
            let inline = response
                .first_inline_data()
                .ok_or(GenerationError::NoImageGenerated)?;
            let mime_type = if inline.mime_type.is_empty() {
                "image/png"
            } else {
                inline.mime_type.as_str()
            };
            Ok::<_, GenerationError>(format!("data:{};base64,{}", mime_type, inline.data))
        })
        .await
    }

    /// Narrate text; returns the base64 audio payload
    ///
    /// A response without audio yields `Ok(None)` rather than an error.
    pub async fn generate_speech(&self, text: &str) -> Result<Option<String>> {
        let provider = self.require_provider("Speech generation")?;

        let request = GenerateRequest::from_prompt(self.models.speech.clone(), text)
            .with_generation_config(GenerationConfig::speech(self.models.voice.clone()));

        with_retry(&self.retry, || async {
            let response = provider.generate_content(&request).await?;
            let audio = response
                .parts()
                .first()
                .and_then(|part| part.inline_data.as_ref())
                .map(|inline| inline.data.clone());
            if audio.is_none() {
                tracing::debug!("Speech response carried no audio");
            }
            Ok::<_, GenerationError>(audio)
        })
        .await
    }

    /// Start a tutoring chat about a topic, grounded with Google Search
    pub fn create_chat_session(&self, topic: &str) -> Result<ChatSession> {
        let provider = self.require_provider("Tutor chat")?;

        Ok(ChatSession::new(
            Arc::clone(provider),
            self.models.text.clone(),
            prompts::tutor_system_instruction(topic),
            vec![Tool::google_search()],
        ))
    }
}
