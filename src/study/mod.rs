// Study content generation
// Public interface for guides, quizzes, diagrams, narration and tutor chat

mod chat;
pub mod mock;
pub mod prompts;
pub mod schema;
mod service;
mod types;

pub use chat::ChatSession;
pub use mock::{mock_quiz, mock_study_guide};
pub use service::StudyService;
pub use types::{
    ChatReply, Difficulty, MatchingPair, Question, QuizSession, Section, StudyGuide,
};
