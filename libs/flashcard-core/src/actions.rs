//! Handlers for the interactive command vocabulary.

use crate::error::{FlashcardError, Result};
use crate::quiz::{parse_count, QuizEngine};
use crate::registry::CardRegistry;
use crate::session::Session;
use crate::stats;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

pub const ACTION_PROMPT: &str =
    "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";

/// One command the user can type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Self::Add,
        Self::Remove,
        Self::Import,
        Self::Export,
        Self::Ask,
        Self::Exit,
        Self::Log,
        Self::HardestCard,
        Self::ResetStats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Import => "import",
            Self::Export => "export",
            Self::Ask => "ask",
            Self::Exit => "exit",
            Self::Log => "log",
            Self::HardestCard => "hardest card",
            Self::ResetStats => "reset stats",
        }
    }

    /// Parse typed input. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.iter().copied().find(|a| a.as_str() == s)
    }
}

/// Registry plus session: everything one run of the program works on.
pub struct Flashcards<R, W> {
    registry: CardRegistry,
    session: Session<R, W>,
}

impl<R: BufRead, W: Write> Flashcards<R, W> {
    pub fn new(session: Session<R, W>) -> Self {
        Self {
            registry: CardRegistry::new(),
            session,
        }
    }

    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    pub fn session(&self) -> &Session<R, W> {
        &self.session
    }

    /// Ask for the next action until a known one is typed.
    pub fn next_action(&mut self) -> Result<Action> {
        loop {
            let typed = self.session.input(ACTION_PROMPT)?;
            match Action::parse(&typed) {
                Some(action) => return Ok(action),
                None => warn!(input = %typed, "unknown action"),
            }
        }
    }

    /// Run one action. `Exit` does nothing here; the caller decides how to
    /// shut down.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Add => self.add_card(),
            Action::Remove => self.remove_card(),
            Action::Import => self.import_cards(None),
            Action::Export => self.export_cards(None),
            Action::Ask => self.ask(),
            Action::Log => self.save_log(),
            Action::HardestCard => self.hardest_card(),
            Action::ResetStats => self.reset_stats(),
            Action::Exit => Ok(()),
        }
    }

    /// Run the action loop until `exit`, then export to `export_to` if set.
    ///
    /// Running out of input counts as `exit`.
    pub fn run(&mut self, export_to: Option<&Path>) -> Result<()> {
        loop {
            match self.next_action() {
                Ok(Action::Exit) | Err(FlashcardError::EndOfInput) => break,
                Ok(action) => match self.dispatch(action) {
                    Ok(()) => {}
                    Err(FlashcardError::EndOfInput) => break,
                    Err(e) => return Err(e),
                },
                Err(e) => return Err(e),
            }
        }

        if let Some(path) = export_to {
            self.export_cards(Some(path))?;
        }
        self.session.print("Bye bye!")
    }

    pub fn add_card(&mut self) -> Result<()> {
        let mut term = self.session.input("The card:")?;
        while self.registry.contains_term(&term) {
            term = self
                .session
                .input(&format!("The card \"{}\" already exists. Try again:", term))?;
        }

        let mut definition = self.session.input("The definition of the card:")?;
        while self.registry.contains_definition(&definition) {
            definition = self.session.input(&format!(
                "The definition \"{}\" already exists. Try again:",
                definition
            ))?;
        }

        let message = format!("The pair {} has been added.", self.registry.add(term, definition)?);
        self.session.print(&message)
    }

    pub fn remove_card(&mut self) -> Result<()> {
        let term = self.session.input("Which card?")?;
        match self.registry.remove(&term) {
            Ok(_) => self.session.print("The card has been removed."),
            Err(FlashcardError::NotFound(_)) => self
                .session
                .print(&format!("Can't remove \"{}\": there is no such card.", term)),
            Err(e) => Err(e),
        }
    }

    /// Import cards from `path`, or from a file name asked for.
    pub fn import_cards(&mut self, path: Option<&Path>) -> Result<()> {
        let file_name = match path {
            Some(p) => p.display().to_string(),
            None => self.session.input("File name:")?,
        };

        match self.registry.import_file(&file_name) {
            Ok(count) => self.session.print(&format!("{} cards have been loaded.", count)),
            Err(FlashcardError::FileNotFound(_)) => self.session.print("File not found."),
            Err(e @ (FlashcardError::MalformedRecord { .. } | FlashcardError::Io(_))) => {
                warn!(file = %file_name, error = %e, "import failed");
                self.session.print(&format!("Cannot import \"{}\": {}.", file_name, e))
            }
            Err(e) => Err(e),
        }
    }

    /// Export cards to `path`, or to a file name asked for.
    pub fn export_cards(&mut self, path: Option<&Path>) -> Result<()> {
        let file_name = match path {
            Some(p) => p.display().to_string(),
            None => self.session.input("File name:")?,
        };

        match self.registry.export_file(&file_name) {
            Ok(count) => self.session.print(&format!("{} cards have been saved.", count)),
            Err(FlashcardError::Io(e)) => {
                warn!(file = %file_name, error = %e, "export failed");
                self.session
                    .print(&format!("Cannot export to \"{}\": {}.", file_name, e))
            }
            Err(e) => Err(e),
        }
    }

    pub fn ask(&mut self) -> Result<()> {
        let typed = self.session.input("How many times to ask?")?;
        let count = match parse_count(&typed) {
            Ok(n) => n,
            Err(FlashcardError::InvalidNumber(_)) => {
                return self
                    .session
                    .print(&format!("\"{}\" is not a valid number.", typed));
            }
            Err(e) => return Err(e),
        };

        let summary = QuizEngine::new(&mut self.registry).run(&mut self.session, count)?;
        info!(asked = summary.asked, correct = summary.correct, "finished question round");
        Ok(())
    }

    /// Save the transcript, including the confirmation line, to a file.
    ///
    /// The confirmation is printed only once the file is written.
    pub fn save_log(&mut self) -> Result<()> {
        const SAVED: &str = "The log has been saved.";

        let file_name = self.session.input("File name:")?;
        let mut snapshot = self.session.transcript().clone();
        snapshot.record_output(SAVED);

        match snapshot.flush_to(&file_name) {
            Ok(()) => self.session.print(SAVED),
            Err(e) => {
                warn!(file = %file_name, error = %e, "saving log failed");
                self.session
                    .print(&format!("Cannot save the log to \"{}\": {}.", file_name, e))
            }
        }
    }

    pub fn hardest_card(&mut self) -> Result<()> {
        let report = stats::hardest(&self.registry);
        self.session.print(&report.to_string())
    }

    pub fn reset_stats(&mut self) -> Result<()> {
        stats::reset_all(&mut self.registry);
        self.session.print("Card statistics have been reset.")
    }
}
