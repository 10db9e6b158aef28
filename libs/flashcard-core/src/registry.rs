//! Card registry with lookup by term and by definition.

use crate::card::Card;
use crate::error::{FlashcardError, Result};
use crate::format::{parse_records, render_records, CardRecord};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Owns every card of a session.
///
/// Cards are kept in insertion order. A second index maps each definition
/// back to the term that owns it; every mutation goes through this type so
/// the two never drift apart.
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: IndexMap<String, Card>,
    by_definition: HashMap<String, String>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.values()
    }

    pub fn get(&self, term: &str) -> Option<&Card> {
        self.cards.get(term)
    }

    /// Card at `index` in insertion order.
    pub fn get_index(&self, index: usize) -> Option<&Card> {
        self.cards.get_index(index).map(|(_, card)| card)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    pub fn contains_definition(&self, definition: &str) -> bool {
        self.by_definition.contains_key(definition)
    }

    /// Term whose definition is `definition`, if any.
    pub fn lookup_by_definition(&self, definition: &str) -> Option<&str> {
        self.by_definition.get(definition).map(String::as_str)
    }

    /// Add a new card with zero mistakes.
    pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>) -> Result<&Card> {
        let term = term.into();
        let definition = definition.into();

        if self.contains_term(&term) {
            return Err(FlashcardError::DuplicateTerm(term));
        }
        if self.contains_definition(&definition) {
            return Err(FlashcardError::DuplicateDefinition(definition));
        }

        debug!(term = %term, "adding card");
        self.insert(Card::new(term.clone(), definition));
        Ok(&self.cards[&term])
    }

    /// Remove a card and its definition entry.
    pub fn remove(&mut self, term: &str) -> Result<Card> {
        let card = self
            .cards
            .shift_remove(term)
            .ok_or_else(|| FlashcardError::NotFound(term.to_string()))?;

        self.unindex_definition(card.term(), card.definition());

        debug!(term = %term, "removed card");
        Ok(card)
    }

    /// Count one wrong answer against `term`.
    pub fn record_mistake(&mut self, term: &str) -> Result<u32> {
        let card = self
            .cards
            .get_mut(term)
            .ok_or_else(|| FlashcardError::NotFound(term.to_string()))?;
        card.add_mistake();
        Ok(card.mistakes())
    }

    /// Set every card's mistake count back to zero.
    pub fn reset_mistakes(&mut self) {
        for card in self.cards.values_mut() {
            card.reset();
        }
    }

    /// Apply parsed records in order.
    ///
    /// An existing term has its definition and mistakes overwritten; the new
    /// definition is not checked against other cards. If it collides, the
    /// definition index points to the card merged last.
    pub fn merge(&mut self, records: Vec<CardRecord>) -> usize {
        let mut count = 0;
        for record in records {
            match self.cards.get_mut(&record.term) {
                Some(card) => {
                    let old_definition = card.definition().to_string();
                    card.update(record.definition.clone(), record.mistakes);
                    self.unindex_definition(&record.term, &old_definition);
                    self.by_definition.insert(record.definition, record.term);
                }
                None => {
                    self.insert(Card::with_mistakes(record.term, record.definition, record.mistakes));
                }
            }
            count += 1;
        }
        count
    }

    /// Read records from `source` and merge them.
    ///
    /// The whole input is parsed before anything is applied, so a malformed
    /// record leaves the registry untouched.
    pub fn import_from<R: Read>(&mut self, mut source: R) -> Result<usize> {
        let mut content = String::new();
        source.read_to_string(&mut content)?;
        let records = parse_records(&content)?;
        Ok(self.merge(records))
    }

    /// Write every card as one record line, in insertion order.
    pub fn export_to<W: Write>(&self, mut sink: W) -> Result<usize> {
        sink.write_all(render_records(self.iter()).as_bytes())?;
        sink.flush()?;
        Ok(self.len())
    }

    /// Import from a file. A missing file is [`FlashcardError::FileNotFound`].
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FlashcardError::FileNotFound(path.display().to_string()));
        }
        let file = fs::File::open(path)?;
        let count = self.import_from(file)?;
        info!(path = %path.display(), count, "imported cards");
        Ok(count)
    }

    /// Export to a file, replacing its content.
    pub fn export_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let file = fs::File::create(path)?;
        let count = self.export_to(file)?;
        info!(path = %path.display(), count, "exported cards");
        Ok(count)
    }

    /// Whether the definition index agrees with the cards.
    ///
    /// Every entry must name a card holding that definition, and every card's
    /// definition must be indexed. A definition held by a single card must
    /// point at that card. Only an import can make cards share a definition.
    pub fn is_consistent(&self) -> bool {
        let mut holders: HashMap<&str, Vec<&str>> = HashMap::new();
        for card in self.cards.values() {
            holders.entry(card.definition()).or_default().push(card.term());
        }

        holders.len() == self.by_definition.len()
            && holders.iter().all(|(def, terms)| {
                self.by_definition
                    .get(*def)
                    .is_some_and(|owner| terms.contains(&owner.as_str()))
            })
    }

    /// Definitions held by more than one card, in insertion order of their
    /// first holder.
    pub fn shared_definitions(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for card in self.cards.values() {
            let count = seen.entry(card.definition()).or_insert(0);
            *count += 1;
            if *count == 2 {
                order.push(card.definition());
            }
        }
        order
    }

    fn insert(&mut self, card: Card) {
        self.by_definition
            .insert(card.definition().to_string(), card.term().to_string());
        self.cards.insert(card.term().to_string(), card);
    }

    /// Drop `term` as owner of `definition`. If another card still holds
    /// the definition, the entry moves to it.
    fn unindex_definition(&mut self, term: &str, definition: &str) {
        if self.by_definition.get(definition).map(String::as_str) != Some(term) {
            return;
        }
        self.by_definition.remove(definition);

        if let Some(other) = self
            .cards
            .values()
            .rev()
            .find(|c| c.term() != term && c.definition() == definition)
        {
            self.by_definition
                .insert(definition.to_string(), other.term().to_string());
        }
    }
}
