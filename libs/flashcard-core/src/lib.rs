//! Core flashcard library used by the `flashcards` command-line program.
//!
//! Provides:
//! - Card registry with lookup by term and by definition
//! - Flat `term,definition,mistakes` import/export format
//! - Question rounds with mistake tracking
//! - Hardest-card statistics
//! - Session transcript and the interactive action handlers

pub mod actions;
pub mod card;
pub mod error;
pub mod format;
pub mod quiz;
pub mod registry;
pub mod session;
pub mod stats;
pub mod transcript;

pub use actions::{Action, Flashcards, ACTION_PROMPT};
pub use card::{parse_mistakes, parse_non_negative, Card};
pub use error::{FlashcardError, Result};
pub use format::{parse_records, render_records, CardRecord};
pub use quiz::{check_answer, parse_count, AnswerOutcome, QuizEngine, QuizSummary};
pub use registry::CardRegistry;
pub use session::Session;
pub use stats::{hardest, reset_all, HardestReport};
pub use transcript::SessionTranscript;
