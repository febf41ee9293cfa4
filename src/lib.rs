// Medtutor - Clinical anatomy study content from the Gemini API
// Library exports

pub mod config;
pub mod errors;
pub mod providers; // Generation backends, retry wrapper
pub mod study; // Requesters, mock content, chat

pub use errors::GenerationError;
pub use study::StudyService;
