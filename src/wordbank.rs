use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::WORD_LENGTH;
use crate::error::{Result, SolverError};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Parse a word list of `word_length`-letter words.
///
/// Words may be separated by newlines, whitespace or commas. Entries are
/// lowercased; anything that is not exactly `word_length` ASCII letters is
/// skipped, as are repeats of a word already seen.
pub fn parse_wordbank(data: &str, word_length: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    data.split(|c: char| c == ',' || c.is_whitespace())
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|word| is_wordbank_entry(word, word_length))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

fn is_wordbank_entry(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Reject a caller-supplied word list holding anything the loader would not
/// have produced: every entry must be `word_length` lowercase ASCII letters.
pub fn check_wordbank<S: AsRef<str>>(words: &[S], word_length: usize) -> Result<()> {
    match words.iter().map(AsRef::as_ref).find(|w| !is_wordbank_entry(w, word_length)) {
        Some(word) => Err(SolverError::MalformedWord {
            word: word.to_string(),
            expected_len: word_length,
        }),
        None => Ok(()),
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    parse_wordbank(data, WORD_LENGTH)
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)?;
    Ok(load_wordbank_from_str(&data))
}

/// `<config dir>/wordle-solver/wordbank.txt`, when the platform has a config dir.
pub fn get_default_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordle-solver").join("wordbank.txt"))
}

/// Pick the word list for a session: an explicit file, else the user's
/// default file if present, else the embedded list.
pub fn resolve_wordbank(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => {
            log::info!("loading word bank from {}", path.display());
            load_wordbank_from_file(path)?
        }
        None => match get_default_wordbank_path().filter(|p| p.is_file()) {
            Some(default) => {
                log::info!("loading word bank from {}", default.display());
                load_wordbank_from_file(default)?
            }
            None => load_wordbank_from_str(EMBEDDED_WORDBANK),
        },
    };
    if words.is_empty() {
        return Err(SolverError::EmptyWordbank);
    }
    log::info!("{} words loaded", words.len());
    Ok(words)
}
