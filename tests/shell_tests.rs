use flashcards_app::storage::DeckDirectory;
use flashcards_app::{App, Config, Deck, Flashcard};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn run_script(decks_dir: &std::path::Path, script: &str) -> String {
    let config = Config::builder().decks_dir(decks_dir).build();
    let mut output = Vec::new();
    App::new(&config, Cursor::new(script.to_string()), &mut output)
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_create_add_delete_scenario() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");

    let output = run_script(
        &dir,
        "1\nSpanish\n\
         2\nSpanish\n\
         2\nhola\nhello\n\
         2\ngato\ncat\n\
         4\n4\n",
    );
    assert!(output.contains("Deck 'Spanish' created!"));
    assert_eq!(output.matches("Flashcard added!").count(), 2);

    let decks = DeckDirectory::new(&dir);
    let deck = Deck::load("Spanish", &decks).unwrap();
    assert_eq!(
        deck.flashcards,
        vec![Flashcard::new("hola", "hello"), Flashcard::new("gato", "cat")]
    );

    let output = run_script(&dir, "2\nSpanish\n3\n0\n4\n4\n");
    assert!(output.contains("0: hola"));
    assert!(output.contains("1: gato"));
    assert!(output.contains("Flashcard deleted!"));

    let deck = Deck::load("Spanish", &decks).unwrap();
    assert_eq!(deck.flashcards, vec![Flashcard::new("gato", "cat")]);
}

#[test]
fn test_created_deck_file_is_empty_array() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");

    run_script(&dir, "1\nX\n4\n");

    let contents = fs::read_to_string(dir.join("X.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_study_session_through_shell() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("Capitals.json"),
        r#"[{"question": "France", "answer": "Paris"}, {"question": "Peru", "answer": "Lima"}]"#,
    )
    .unwrap();

    let output = run_script(&dir, "2\nCapitals\n1\n\n\n4\n4\n");

    assert!(output.contains("Q: France (press Enter to see the answer)"));
    assert!(output.contains("A: Paris"));
    assert!(output.contains("A: Lima"));
}

#[test]
fn test_list_and_load_unknown_deck() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("B.json"), "[]").unwrap();
    fs::write(dir.join("A.json"), "[]").unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let output = run_script(&dir, "3\n2\nC\n4\n");

    assert!(output.contains("Decks available: A, B"));
    assert!(output.contains("Available decks: A, B"));
    assert!(output.contains("Deck not found!"));
    assert!(!output.contains("notes"));
}

#[test]
fn test_bad_index_is_recoverable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");

    let output = run_script(
        &dir,
        "1\nSpanish\n2\nSpanish\n2\nhola\nhello\n3\nabc\n3\n7\n4\n4\n",
    );

    assert_eq!(output.matches("Invalid index!").count(), 2);
    assert!(!output.contains("Flashcard deleted!"));
    let deck = Deck::load("Spanish", &DeckDirectory::new(&dir)).unwrap();
    assert_eq!(deck.len(), 1);
}

#[test]
fn test_malformed_deck_is_recoverable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Broken.json"), "{ not json").unwrap();

    let output = run_script(&dir, "2\nBroken\n3\n4\n");

    assert!(output.contains("Cannot load deck 'Broken'"));
    assert!(output.contains("Decks available: Broken"));
    assert!(!output.contains("--- Deck: Broken ---"));
}

#[test]
fn test_non_utf8_deck_name_keeps_shell_running() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("decks");
    let config = Config::builder().decks_dir(&dir).build();
    let mut output = Vec::new();

    let result = App::new(&config, Cursor::new(b"1\nCaf\xe9\n3\n4\n".to_vec()), &mut output).run();

    assert!(result.is_ok());
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.matches("--- Flashcard App ---").count(), 3);
    assert!(text.contains("Decks available: Caf\u{FFFD}"));
}
