//! End-to-end sessions driven through the action handlers.

use flashcard_core::{Card, CardRegistry, Flashcards, Session};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use std::path::Path;

type App = Flashcards<Cursor<Vec<u8>>, Vec<u8>>;

fn app(lines: &[String]) -> App {
    let mut input = lines.join("\n");
    input.push('\n');
    Flashcards::new(Session::new(Cursor::new(input.into_bytes()), Vec::new()))
}

fn script(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

fn printed(app: &App) -> Vec<String> {
    String::from_utf8_lossy(app.session().writer())
        .lines()
        .map(str::to_string)
        .collect()
}

fn triples(registry: &CardRegistry) -> Vec<(String, String, u32)> {
    registry
        .iter()
        .map(|c: &Card| (c.term().to_string(), c.definition().to_string(), c.mistakes()))
        .collect()
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn quiz_then_hardest_card() {
    let mut app = app(&script(&[
        "add",
        "cat",
        "feline",
        "add",
        "dog",
        "canine",
        "ask",
        "4",
        "canine",
        "canine",
        "feline",
        "wolf",
        "hardest card",
        "exit",
    ]));
    app.run(None).unwrap();

    let lines = printed(&app);
    assert!(lines.contains(
        &"Wrong. The right answer is \"feline\", but your definition is correct for \"dog\".".to_string()
    ));
    assert!(lines.contains(&"Wrong. The right answer is \"canine\".".to_string()));
    assert!(lines.contains(
        &"The hardest cards are \"dog\", \"cat\". You have 1 errors answering them.".to_string()
    ));
    assert_eq!(app.registry().get("cat").unwrap().mistakes(), 1);
    assert_eq!(app.registry().get("dog").unwrap().mistakes(), 1);
}

#[test]
fn export_import_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = path_str(&dir.path().join("cards.txt"));

    let mut first = app(&script(&[
        "add",
        "cat",
        "a small domesticated feline",
        "add",
        "dog",
        "canine",
        "ask",
        "1",
        "wrong",
        "export",
        &file,
        "exit",
    ]));
    first.run(None).unwrap();
    assert!(printed(&first).contains(&"2 cards have been saved.".to_string()));
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "cat,a small domesticated feline,1\ndog,canine,0\n"
    );

    let mut second = app(&script(&["import", &file, "exit"]));
    second.run(None).unwrap();
    assert!(printed(&second).contains(&"2 cards have been loaded.".to_string()));
    assert_eq!(triples(second.registry()), triples(first.registry()));
    assert!(second.registry().is_consistent());
}

#[test]
fn startup_import_and_exit_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "cat,feline,2\ndog,canine,5\n").unwrap();

    let mut app = app(&script(&["reset stats", "hardest card", "exit"]));
    app.import_cards(Some(&input)).unwrap();
    app.run(Some(&output)).unwrap();

    let lines = printed(&app);
    assert_eq!(lines[0], "2 cards have been loaded.");
    assert!(lines.contains(&"Card statistics have been reset.".to_string()));
    assert!(lines.contains(&"There are no cards with errors.".to_string()));
    assert_eq!(lines[lines.len() - 2], "2 cards have been saved.");
    assert_eq!(lines[lines.len() - 1], "Bye bye!");
    assert_eq!(fs::read_to_string(&output).unwrap(), "cat,feline,0\ndog,canine,0\n");
}

#[test]
fn malformed_import_is_reported_and_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("bad.txt");
    fs::write(&file, "cat,feline,0\ndog,canine,lots\n").unwrap();

    let mut app = app(&script(&["import", &path_str(&file), "exit"]));
    app.run(None).unwrap();

    assert!(app.registry().is_empty());
    assert!(printed(&app)
        .iter()
        .any(|l| l.starts_with("Cannot import") && l.contains("line 2")));
}

#[test]
fn log_contains_whole_conversation() {
    let dir = tempfile::tempdir().unwrap();
    let log = path_str(&dir.path().join("log.txt"));

    let mut app = app(&script(&["remove", "cat", "log", &log, "exit"]));
    app.run(None).unwrap();

    let saved = fs::read_to_string(&log).unwrap();
    assert!(saved.contains("Which card?\ncat\nCan't remove \"cat\": there is no such card.\n"));
    assert!(saved.ends_with("The log has been saved.\n"));
    // later activity keeps accumulating after the save
    let full = app.session().transcript().contents();
    assert!(full.starts_with(&saved));
    assert!(full.ends_with("Bye bye!\n"));
}
