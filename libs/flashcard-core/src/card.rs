//! A single term/definition pair with its mistake counter.

use crate::error::{FlashcardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flashcard owned by a [`CardRegistry`](crate::registry::CardRegistry).
///
/// The term is fixed at creation. Definition and mistake count change only
/// through the registry, which keeps its definition index in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    term: String,
    definition: String,
    mistakes: u32,
}

impl Card {
    /// Create a card with zero mistakes.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_mistakes(term, definition, 0)
    }

    pub fn with_mistakes(term: impl Into<String>, definition: impl Into<String>, mistakes: u32) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn reset(&mut self) {
        self.mistakes = 0;
    }

    pub fn add_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    /// Replace definition and mistake count. Uniqueness of the new definition
    /// is the caller's concern.
    pub fn update(&mut self, definition: impl Into<String>, mistakes: u32) {
        self.definition = definition.into();
        self.mistakes = mistakes;
    }

    /// Serialize as a `term,definition,mistakes` line (without newline).
    pub fn to_record(&self) -> String {
        format!("{},{},{}", self.term, self.definition, self.mistakes)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\":\"{}\")", self.term, self.definition)
    }
}

/// Parse a mistake count given as text.
///
/// Only base-10 non-negative integers are accepted; anything else is an
/// error rather than a silent zero.
pub fn parse_mistakes(text: &str) -> Result<u32> {
    parse_non_negative(text)
}

/// Parse a base-10 digit string, ignoring surrounding whitespace.
///
/// Signs, decimals and values out of range for `T` are
/// [`FlashcardError::InvalidNumber`].
pub fn parse_non_negative<T: FromStr>(text: &str) -> Result<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FlashcardError::InvalidNumber(text.to_string()));
    }
    trimmed
        .parse::<T>()
        .map_err(|_| FlashcardError::InvalidNumber(text.to_string()))
}
