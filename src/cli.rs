use crate::batch::BatchReport;
use crate::feedback::Feedback;
use crate::game_state::{
    FeedbackAction, GameConfig, GameInterface, GameRecord, Outcome, Recommendation, UserAction,
};
use crate::solver::Weighting;
use crate::{MAX_TURNS, WORD_LENGTH};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;

const QUIT_TOKENS: [&str; 3] = ["Q", "QUIT", "EXIT"];
const MAX_CANDIDATES_DISPLAY: usize = 5;

/// Wordle solver: suggests guesses from the feedback seen so far
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a word list (one word per line, or comma separated)
    #[arg(short = 'i', long = "input", global = true)]
    pub wordbank_path: Option<PathBuf>,

    /// Guesses allowed per game
    #[arg(
        long,
        global = true,
        default_value_t = MAX_TURNS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_turns: usize,

    /// Score suggestions by distinct letters instead of distinct letters + 1
    #[arg(long, global = true)]
    pub legacy_weighting: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive game: you enter guesses and the colors you got back
    Play,
    /// Let the solver play against a known solution
    Solve {
        solution: String,
        /// First guess to play instead of the suggested one
        #[arg(long)]
        opening: Option<String>,
    },
    /// Autoplay every word of the word list and report statistics
    Batch {
        /// First guess to play instead of the suggested one
        #[arg(long)]
        opening: Option<String>,
        /// Worker threads (defaults to one per core)
        #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        jobs: Option<usize>,
        /// Print the per-word log, not just failures
        #[arg(long)]
        details: bool,
    },
}

impl Cli {
    pub fn game_config(&self, opening: Option<String>) -> GameConfig {
        GameConfig {
            word_length: WORD_LENGTH,
            max_turns: self.max_turns,
            opening,
            weighting: if self.legacy_weighting {
                Weighting::UniqueCount
            } else {
                Weighting::UniquePlusOne
            },
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Valid(String),
    Invalid,
    Quit,
}

pub enum FeedbackInput {
    Valid(Feedback),
    Invalid,
    Quit,
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_quit(input: &str) -> bool {
    QUIT_TOKENS.contains(&input.to_uppercase().as_str())
}

/// One trimmed line, or `None` at end of input or on a read error.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            log::warn!("failed to read input: {e}");
            None
        }
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R, turn: usize) -> GuessInput {
    if turn == 1 {
        println!("\nType your first guess ({WORD_LENGTH} letters, or 'q' to quit):");
    } else {
        println!("\nType guess #{turn}:");
    }
    let Some(input) = read_trimmed_line(reader) else {
        return GuessInput::Quit;
    };

    match input.as_str() {
        _ if is_quit(&input) => GuessInput::Quit,
        _ if is_valid_word(&input) => GuessInput::Valid(input.to_lowercase()),
        _ => {
            println!("Please enter a {WORD_LENGTH} letter word.");
            GuessInput::Invalid
        }
    }
}

pub fn read_feedback<R: BufRead>(reader: &mut R, turn: usize) -> FeedbackInput {
    println!("Type the colors of the letters in this guess.");
    if turn == 1 {
        println!("B for blank, Y for yellow, G for green. ex. BBYBG");
    }
    let Some(input) = read_trimmed_line(reader) else {
        return FeedbackInput::Quit;
    };

    if is_quit(&input) {
        return FeedbackInput::Quit;
    }
    match Feedback::parse(&input, WORD_LENGTH) {
        Ok(feedback) => FeedbackInput::Valid(feedback),
        Err(e) => {
            log::debug!("{e}");
            println!("Please enter {WORD_LENGTH} letters, using only the letters B, G, and Y.");
            FeedbackInput::Invalid
        }
    }
}

pub fn display_intro(word_count: usize, opening: Option<&str>) {
    println!("Starting a Wordle game! ({word_count} words loaded)");
    println!("You can enter Q at any time to quit.");
    if let Some(word) = opening {
        println!("Suggested starting word: {}", word.to_uppercase());
    }
}

pub fn display_candidates(candidates: &[&str]) {
    println!("{} remaining words", candidates.len());
    for word in candidates.iter().take(MAX_CANDIDATES_DISPLAY) {
        println!("  {}", word.to_uppercase());
    }
    if candidates.len() > MAX_CANDIDATES_DISPLAY {
        println!("  ...and {} more", candidates.len() - MAX_CANDIDATES_DISPLAY);
    }
}

pub fn display_recommendation(recommendation: &Recommendation) {
    println!(
        "Suggested word: {} (from {} candidates)",
        recommendation.guess.to_uppercase(),
        recommendation.remaining
    );
}

pub fn display_no_candidates_message() {
    println!("No candidates remain. Check your inputs.");
}

pub fn display_solution_found(turns: usize) {
    if turns == 1 {
        println!("Congratulations! You got it in 1 guess.");
    } else {
        println!("Congratulations! You got it in {turns} guesses.");
    }
}

pub fn display_failed(residual: &[String]) {
    println!("Uh oh, we didn't get it.");
    if !residual.is_empty() {
        println!("The remaining words were:");
        for word in residual {
            println!("{}", word.to_uppercase());
        }
    }
}

pub fn display_game_record(record: &GameRecord) {
    for (turn, (guess, feedback)) in record.guesses.iter().enumerate() {
        println!("{}. {} {}", turn + 1, guess.to_uppercase(), feedback);
    }
    match &record.outcome {
        Outcome::Solved { turns } => println!("Solved {} in {turns}.", record.solution.to_uppercase()),
        Outcome::Failed { residual, .. } => {
            println!("Failed to find {}.", record.solution.to_uppercase());
            display_failed(residual);
        }
        Outcome::NoCandidates { .. } => {
            println!("{} is not in the word list.", record.solution.to_uppercase());
            display_no_candidates_message();
        }
        Outcome::Aborted => {}
    }
}

pub fn display_batch_report(report: &BatchReport, details: bool) {
    if details {
        for entry in report.entries() {
            println!("{entry}");
        }
    } else {
        for entry in report.failed_entries() {
            println!("{entry}");
        }
    }
    println!("{report}");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_intro(&mut self, word_count: usize, opening: Option<&str>) {
        display_intro(word_count, opening);
    }

    fn read_guess(&mut self, turn: usize) -> Option<UserAction> {
        match read_guess(&mut self.reader, turn) {
            GuessInput::Valid(guess) => Some(UserAction::Guess(guess)),
            GuessInput::Quit => Some(UserAction::Quit),
            GuessInput::Invalid => None,
        }
    }

    fn read_feedback(&mut self, turn: usize) -> Option<FeedbackAction> {
        match read_feedback(&mut self.reader, turn) {
            FeedbackInput::Valid(feedback) => Some(FeedbackAction::Feedback(feedback)),
            FeedbackInput::Quit => Some(FeedbackAction::Quit),
            FeedbackInput::Invalid => None,
        }
    }

    fn display_candidates(&mut self, candidates: &[&str]) {
        display_candidates(candidates);
    }

    fn display_recommendation(&mut self, recommendation: &Recommendation) {
        display_recommendation(recommendation);
    }

    fn display_no_candidates_message(&mut self) {
        display_no_candidates_message();
    }

    fn display_solution_found(&mut self, turns: usize) {
        display_solution_found(turns);
    }

    fn display_failed(&mut self, residual: &[String]) {
        display_failed(residual);
    }
}
