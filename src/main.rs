// Medtutor - Clinical anatomy study content from the Gemini API
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

use medtutor::config::load_config;
use medtutor::errors::api_key_missing_error;
use medtutor::study::{Difficulty, StudyService};
use medtutor::GenerationError;

#[derive(Parser, Debug)]
#[command(name = "medtutor")]
#[command(about = "Clinical anatomy study guides, quizzes, diagrams and narration", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Generate a study guide (mock content without an API key)
    Guide {
        /// Topic, e.g. "Brachial Plexus"
        topic: String,
    },
    /// Generate a five-question quiz (mock content without an API key)
    Quiz {
        topic: String,

        /// easy, medium or hard
        #[arg(long, short, default_value = "medium")]
        difficulty: Difficulty,
    },
    /// Generate a labeled anatomical diagram as a data URI
    Image {
        topic: String,

        /// Section of the topic to draw
        section: String,

        /// Write the data URI to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Narrate text; prints the base64 audio payload
    Speak {
        text: String,

        /// Write the base64 payload to a file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Chat with a tutor about a topic (one message per line, EOF to quit)
    Chat { topic: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let config = load_config()?;
    let service = StudyService::from_config(&config);

    if !service.is_online() {
        tracing::info!("No Gemini API key configured, running in offline mode");
    }

    match args.command {
        Command::Guide { topic } => run_guide(&service, &topic).await,
        Command::Quiz { topic, difficulty } => run_quiz(&service, &topic, difficulty).await,
        Command::Image {
            topic,
            section,
            out,
        } => run_image(&service, &topic, &section, out.as_deref()).await,
        Command::Speak { text, out } => run_speak(&service, &text, out.as_deref()).await,
        Command::Chat { topic } => run_chat(&service, &topic).await,
    }
}

/// Log to stderr so stdout carries only generated content
///
/// Default: INFO level, can be overridden with RUST_LOG env var
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Attach setup instructions when the failure is a missing credential
fn explain(err: GenerationError) -> anyhow::Error {
    match err {
        GenerationError::MissingCredential(operation) => {
            anyhow::anyhow!(api_key_missing_error(operation))
        }
        other => other.into(),
    }
}

fn emit(contents: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", contents),
    }
    Ok(())
}

async fn run_guide(service: &StudyService, topic: &str) -> Result<()> {
    let guide = service
        .generate_study_guide(topic)
        .await
        .context("Failed to generate study guide")?;

    println!("{}", serde_json::to_string_pretty(&guide)?);
    Ok(())
}

async fn run_quiz(service: &StudyService, topic: &str, difficulty: Difficulty) -> Result<()> {
    let quiz = service
        .generate_quiz(topic, difficulty)
        .await
        .context("Failed to generate quiz")?;

    println!("{}", serde_json::to_string_pretty(&quiz)?);
    Ok(())
}

async fn run_image(
    service: &StudyService,
    topic: &str,
    section: &str,
    out: Option<&Path>,
) -> Result<()> {
    let uri = service
        .generate_anatomy_image(topic, section)
        .await
        .map_err(explain)?;

    emit(&uri, out)
}

async fn run_speak(service: &StudyService, text: &str, out: Option<&Path>) -> Result<()> {
    match service.generate_speech(text).await.map_err(explain)? {
        Some(audio) => emit(&audio, out),
        None => {
            eprintln!("The model returned no audio for this text");
            Ok(())
        }
    }
}

async fn run_chat(service: &StudyService, topic: &str) -> Result<()> {
    let mut session = service.create_chat_session(topic).map_err(explain)?;

    eprintln!("Tutor chat on \"{}\" (Ctrl-D to quit)", topic);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        eprint!("> ");
        io::stderr().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        match session.send_message(message).await {
            Ok(reply) => {
                println!("{}", reply.text);
                for source in &reply.sources {
                    match &source.title {
                        Some(title) => println!("  [{}] {}", title, source.uri),
                        None => println!("  {}", source.uri),
                    }
                }
            }
            // Keep the session alive; a failed turn leaves the history unchanged
            Err(e) => eprintln!("⚠️  {}", e),
        }
    }

    Ok(())
}
