use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;

const BOOKS: [&str; 66] = [
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy", "Joshua", "Judges", "Ruth",
    "1 Samuel", "2 Samuel", "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles", "Ezra",
    "Nehemiah", "Esther", "Job", "Psalms", "Proverbs", "Ecclesiastes", "Song of Solomon",
    "Isaiah", "Jeremiah", "Lamentations", "Ezekiel", "Daniel", "Hosea", "Joel", "Amos",
    "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk", "Zephaniah", "Haggai", "Zechariah",
    "Malachi", "Matthew", "Mark", "Luke", "John", "Acts", "Romans", "1 Corinthians",
    "2 Corinthians", "Galatians", "Ephesians", "Philippians", "Colossians",
    "1 Thessalonians", "2 Thessalonians", "1 Timothy", "2 Timothy", "Titus", "Philemon",
    "Hebrews", "James", "1 Peter", "2 Peter", "1 John", "2 John", "3 John", "Jude",
    "Revelation",
];

/// One verse per book, plus a few real ones, written as `kjv.json` in `home`.
fn write_corpus(home: &Path) {
    write_rows(home, |book| match book {
        "Genesis" => vec![
            (1, 1, "In the beginning God created the heaven and the earth.".into()),
            (1, 2, "And the earth was without form, and void.".into()),
            (1, 3, "And God said, Let there be light: and there was light.".into()),
        ],
        "John" => vec![
            (1, 1, "In the beginning was the Word.".into()),
            (2, 1, "And the third day there was a marriage in Cana of Galilee.".into()),
            (
                3,
                16,
                "For God so loved the world, that he gave his only begotten Son.".into(),
            ),
        ],
        _ => vec![(1, 1, format!("Text of {} 1:1.", book))],
    });
}

/// Exactly one verse per book, so every random pick lands on a real verse.
fn write_single_verse_corpus(home: &Path) {
    write_rows(home, |book| vec![(1, 1, format!("Text of {} 1:1.", book))]);
}

fn write_rows<F: Fn(&str) -> Vec<(u32, u32, String)>>(home: &Path, rows_for: F) {
    let mut verses = Vec::new();
    for (n, book) in BOOKS.iter().enumerate() {
        for (chapter, verse, text) in rows_for(book) {
            verses.push(json!({
                "book_name": book,
                "book": n + 1,
                "chapter": chapter,
                "verse": verse,
                "text": text,
            }));
        }
    }
    let doc = json!({ "verses": verses });
    std::fs::write(home.join("kjv.json"), doc.to_string()).unwrap();
}

fn bible(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bible").unwrap();
    cmd.env("BIBLE_HOME", home)
        .env_remove("BIBLE_CORPUS")
        .env_remove("BIBLE_LOG")
        .env("NO_COLOR", "1")
        .arg("--width")
        .arg("80");
    cmd
}

fn setup() -> tempfile::TempDir {
    let home = tempfile::tempdir().unwrap();
    write_corpus(home.path());
    home
}

#[test]
fn no_arguments_lists_books() {
    let home = setup();
    bible(home.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Genesis, Exodus, Leviticus"))
        .stdout(predicate::str::contains("Jude, Revelation"));
}

#[test]
fn book_prints_chapter_count() {
    let home = setup();
    bible(home.path())
        .arg("John")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chapters in John: 3"));
}

#[test]
fn single_verse() {
    let home = setup();
    bible(home.path())
        .args(["John", "3", "16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("John 3:16\nFor God so loved the world"));
}

#[test]
fn verse_range_reports_missing_verses() {
    let home = setup();
    bible(home.path())
        .args(["Genesis", "1", "2-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis 1:2"))
        .stdout(predicate::str::contains("Genesis 1:3"))
        .stdout(predicate::str::contains("Genesis 1:4 not found"));
}

#[test]
fn whole_chapter() {
    let home = setup();
    bible(home.path())
        .args(["Genesis", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis 1:1"))
        .stdout(predicate::str::contains("Let there be light"));
}

#[test]
fn list_counts() {
    let home = setup();
    bible(home.path())
        .args(["-l", "Genesis", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verses in Genesis 1: 3"));
}

#[test]
fn search_is_case_insensitive() {
    let home = setup();
    bible(home.path())
        .args(["-s", "BEGINNING"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis 1:1"))
        .stdout(predicate::str::contains("John 1:1"));
}

#[test]
fn search_without_hits() {
    let home = setup();
    bible(home.path())
        .args(["-s", "leviathan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No verses found matching: leviathan"));
}

#[test]
fn random_prints_a_verse() {
    let home = tempfile::tempdir().unwrap();
    write_single_verse_corpus(home.path());
    bible(home.path())
        .arg("-r")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^.+ 1:1\nText of .+ 1:1\.").unwrap());
}

#[test]
fn corpus_flag_overrides_default_location() {
    let home = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    write_corpus(elsewhere.path());

    bible(home.path())
        .arg("--corpus")
        .arg(elsewhere.path().join("kjv.json"))
        .args(["Genesis", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("In the beginning"));
}

#[test]
fn missing_corpus_is_an_error() {
    let home = tempfile::tempdir().unwrap();
    bible(home.path())
        .args(["Genesis", "1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn interactive_bookmark_survives_restart() {
    let home = setup();
    bible(home.path())
        .arg("-i")
        .write_stdin("Genesis 1 1\nn\nb\ny\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter Book Chapter Verse (ie Genesis 1 1): "))
        .stdout(predicate::str::contains("Bookmarked Genesis 1:2"));

    bible(home.path())
        .arg("-i")
        .write_stdin("b\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Genesis 1:2\nAnd the earth"));
}

#[test]
fn interactive_quoted_book() {
    let home = setup();
    bible(home.path())
        .arg("-i")
        .write_stdin("'Song of Solomon' 1 1\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Song of Solomon 1:1"));
}

#[test]
fn interactive_end_of_input() {
    let home = setup();
    bible(home.path())
        .arg("-i")
        .write_stdin("Genesis 1 1\n")
        .assert()
        .success();
}

#[test]
fn favorites_listing() {
    let home = setup();
    bible(home.path())
        .arg("-f")
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites saved yet."));

    bible(home.path())
        .arg("-i")
        .write_stdin("John 3 16\nf\np\np\nf\nq\n")
        .assert()
        .success();

    bible(home.path())
        .arg("-f")
        .assert()
        .success()
        .stdout(predicate::str::contains("John 1:1"))
        .stdout(predicate::str::contains("John 3:16"));
}
