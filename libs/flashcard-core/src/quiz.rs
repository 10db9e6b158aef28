//! Question rounds over the registry.
//!
//! Cards are asked round-robin in insertion order, with no weighting by
//! mistake history. Answers are compared by exact string equality.

use crate::card::parse_non_negative;
use crate::error::{FlashcardError, Result};
use crate::registry::CardRegistry;
use crate::session::Session;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};
use tracing::debug;

/// Result of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnswerOutcome {
    Correct,
    /// Wrong, and the answer is not any card's definition.
    Wrong { expected: String },
    /// Wrong, but the answer is the definition of another card.
    WrongOtherCard { expected: String, other_term: String },
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for AnswerOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "Correct!"),
            Self::Wrong { expected } => write!(f, "Wrong. The right answer is \"{}\".", expected),
            Self::WrongOtherCard { expected, other_term } => write!(
                f,
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other_term
            ),
        }
    }
}

/// Counts for one finished round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub asked: usize,
    pub correct: usize,
}

/// Check `answer` against the card `term` and count a mistake if wrong.
///
/// Only the asked card's counter changes, even when the answer matches
/// another card.
pub fn check_answer(registry: &mut CardRegistry, term: &str, answer: &str) -> Result<AnswerOutcome> {
    let card = registry
        .get(term)
        .ok_or_else(|| FlashcardError::NotFound(term.to_string()))?;

    if card.definition() == answer {
        return Ok(AnswerOutcome::Correct);
    }

    let expected = card.definition().to_string();
    let outcome = match registry.lookup_by_definition(answer) {
        Some(other) if other != term => AnswerOutcome::WrongOtherCard {
            expected,
            other_term: other.to_string(),
        },
        _ => AnswerOutcome::Wrong { expected },
    };

    let mistakes = registry.record_mistake(term)?;
    debug!(term = %term, mistakes, "wrong answer");
    Ok(outcome)
}

/// Parse the number of questions for a round.
pub fn parse_count(text: &str) -> Result<usize> {
    parse_non_negative(text)
}

/// Drives question rounds over a registry.
pub struct QuizEngine<'a> {
    registry: &'a mut CardRegistry,
}

impl<'a> QuizEngine<'a> {
    pub fn new(registry: &'a mut CardRegistry) -> Self {
        Self { registry }
    }

    /// Ask `count` questions, cycling through the cards in insertion order.
    ///
    /// An empty registry asks nothing.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        session: &mut Session<R, W>,
        count: usize,
    ) -> Result<QuizSummary> {
        let mut summary = QuizSummary::default();
        if self.registry.is_empty() {
            debug!("no cards to ask");
            return Ok(summary);
        }

        while summary.asked < count {
            let index = summary.asked % self.registry.len();
            let term = match self.registry.get_index(index) {
                Some(card) => card.term().to_string(),
                None => break,
            };

            let answer = session.input(&format!("Print the definition of \"{}\":", term))?;
            let outcome = check_answer(self.registry, &term, &answer)?;
            session.print(&outcome.to_string())?;

            summary.asked += 1;
            if outcome.is_correct() {
                summary.correct += 1;
            }
        }

        Ok(summary)
    }
}
