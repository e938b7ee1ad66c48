// Library interface for wordle-solver
// Integration tests and the binary both go through these modules

pub mod batch;
pub mod cli;
pub mod constraints;
pub mod error;
pub mod feedback;
pub mod game_state;
pub mod letters;
pub mod logging;
pub mod solver;
pub mod wordbank;

/// Letters per word in the standard game.
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game in the standard game.
pub const MAX_TURNS: usize = 6;

// Re-export commonly used items for easier testing
pub use batch::{BatchReport, run_batch};
pub use constraints::{BlankEvidence, ConstraintState, validate_word};
pub use error::{Result, SolverError};
pub use feedback::{Feedback, LetterColor, compute_feedback};
pub use game_state::{GameConfig, GameInterface, GameRecord, Outcome, Simulator, game_loop};
pub use solver::{Weighting, filter_candidates, ranked_candidates, recommend_guess, recommend_guess_with};
pub use wordbank::{load_wordbank_from_file, load_wordbank_from_str};
