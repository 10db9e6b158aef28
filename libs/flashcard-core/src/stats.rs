//! Mistake statistics across the registry.

use crate::registry::CardRegistry;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The card(s) answered wrong most often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HardestReport {
    NoErrors,
    Single { term: String, mistakes: u32 },
    /// Tied terms, latest inserted first.
    Tied { terms: Vec<String>, mistakes: u32 },
}

impl fmt::Display for HardestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoErrors => write!(f, "There are no cards with errors."),
            Self::Single { term, mistakes } => write!(
                f,
                "The hardest card is \"{}\". You have {} errors answering it.",
                term, mistakes
            ),
            Self::Tied { terms, mistakes } => {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
                write!(
                    f,
                    "The hardest cards are {}. You have {} errors answering them.",
                    quoted.join(", "),
                    mistakes
                )
            }
        }
    }
}

/// Find the card(s) with the highest mistake count.
///
/// Ties are listed in reverse insertion order.
pub fn hardest(registry: &CardRegistry) -> HardestReport {
    let max = registry.iter().map(|c| c.mistakes()).max().unwrap_or(0);
    if max == 0 {
        return HardestReport::NoErrors;
    }

    let mut terms: Vec<String> = registry
        .iter()
        .filter(|c| c.mistakes() == max)
        .map(|c| c.term().to_string())
        .collect();
    terms.reverse();

    match terms.len() {
        1 => HardestReport::Single {
            term: terms.remove(0),
            mistakes: max,
        },
        _ => HardestReport::Tied { terms, mistakes: max },
    }
}

/// Zero every mistake counter.
pub fn reset_all(registry: &mut CardRegistry) {
    registry.reset_mistakes();
    tracing::info!(cards = registry.len(), "reset card statistics");
}
