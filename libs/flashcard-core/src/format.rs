//! Flat file format for importing and exporting cards.
//!
//! # Format
//! ```text
//! cat,a small domesticated feline,0
//! dog,canine,3
//! ```
//!
//! One card per line, fields `term,definition,mistakes`. Commas inside a term
//! or definition are not escaped, so such cards do not survive a round trip.

use crate::card::{parse_mistakes, Card};
use crate::error::{FlashcardError, Result};

const FIELD_COUNT: usize = 3;

/// A card as read from a file, before it is merged into a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub term: String,
    pub definition: String,
    pub mistakes: u32,
    pub line_number: usize,
}

/// Parse file content into records.
///
/// Blank lines are skipped. The first malformed line fails the whole parse.
pub fn parse_records(content: &str) -> Result<Vec<CardRecord>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        records.push(parse_line(trimmed, line_num)?);
    }

    Ok(records)
}

fn parse_line(line: &str, line_num: usize) -> Result<CardRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(FlashcardError::MalformedRecord {
            line: line_num,
            reason: format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
        });
    }

    let mistakes = parse_mistakes(fields[2]).map_err(|_| FlashcardError::MalformedRecord {
        line: line_num,
        reason: format!("invalid mistake count \"{}\"", fields[2]),
    })?;

    Ok(CardRecord {
        term: fields[0].to_string(),
        definition: fields[1].to_string(),
        mistakes,
        line_number: line_num,
    })
}

/// Render cards in the order given, one newline-terminated line each.
pub fn render_records<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&card.to_record());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_single_record() {
        let records = parse_records("cat,feline,2\n").unwrap();
        assert_eq!(
            records,
            vec![CardRecord {
                term: "cat".to_string(),
                definition: "feline".to_string(),
                mistakes: 2,
                line_number: 1,
            }]
        );
    }

    #[test]
    fn parse_skips_blank_lines_and_crlf() {
        let records = parse_records("cat,feline,0\r\n\r\ndog,canine,1\r\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].definition, "feline");
        assert_eq!(records[1].term, "dog");
        assert_eq!(records[1].line_number, 3);
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn reject_wrong_field_count() {
        let result = parse_records("cat,feline,0\na,b,c,1\n");
        assert!(matches!(
            result,
            Err(FlashcardError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn reject_non_integer_mistakes() {
        let result = parse_records("cat,feline,many");
        assert!(matches!(
            result,
            Err(FlashcardError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn render_in_given_order() {
        let cards = vec![
            Card::with_mistakes("dog", "canine", 1),
            Card::new("cat", "feline"),
        ];
        assert_eq!(render_records(&cards), "dog,canine,1\ncat,feline,0\n");
    }
}
