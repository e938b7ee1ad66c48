//! Turn-by-turn game flow.
//!
//! A [`Game`] owns the constraints of exactly one game and walks the turn
//! state machine:
//!
//! - `AwaitingGuess(t)` → `AwaitingFeedback(t, guess)` once a guess is given
//! - `AwaitingFeedback(t, guess)` → `Solved(t)` on all-green feedback
//! - `AwaitingFeedback(t, guess)` → `Failed(t)` when `t` is the last turn
//! - `AwaitingFeedback(t, guess)` → `AwaitingGuess(t + 1)` otherwise
//! - any waiting state → `Aborted` on quit
//!
//! [`game_loop`] drives a game from a [`GameInterface`] (a person at a
//! terminal); [`Simulator`] drives it against a known solution.

use crate::constraints::{ConstraintState, validate_word};
use crate::error::{Result, SolverError};
use crate::feedback::Feedback;
use crate::solver::{Weighting, filter_candidates, recommend_guess_with};
use crate::wordbank::check_wordbank;
use crate::{MAX_TURNS, WORD_LENGTH, debug_log, info_log};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_turns: usize,
    /// Fixed first guess for autoplay; the ranker picks one when unset.
    pub opening: Option<String>,
    pub weighting: Weighting,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: WORD_LENGTH,
            max_turns: MAX_TURNS,
            opening: None,
            weighting: Weighting::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnState {
    AwaitingGuess { turn: usize },
    AwaitingFeedback { turn: usize, guess: String },
    Solved { turn: usize },
    Failed { turn: usize },
    Aborted,
}

impl TurnState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved { .. } | Self::Failed { .. } | Self::Aborted)
    }
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { turns: usize },
    /// Out of turns; `residual` holds the words that were still possible.
    Failed { turns: usize, residual: Vec<String> },
    /// Autoplay had nothing left to guess after `turns` guesses.
    NoCandidates { turns: usize },
    Aborted,
}

impl Outcome {
    /// Guesses used, if the game was solved.
    pub fn solved_in(&self) -> Option<usize> {
        match self {
            Self::Solved { turns } => Some(*turns),
            _ => None,
        }
    }
}

/// A single game in progress.
#[derive(Debug)]
pub struct Game<'a> {
    config: &'a GameConfig,
    constraints: ConstraintState,
    candidates: Vec<&'a str>,
    state: TurnState,
}

impl<'a> Game<'a> {
    pub fn new(dictionary: &'a [String], config: &'a GameConfig) -> Self {
        let constraints = ConstraintState::new(config.word_length);
        let candidates = filter_candidates(dictionary, &constraints);
        Self {
            config,
            constraints,
            candidates,
            state: TurnState::AwaitingGuess { turn: 1 },
        }
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Words still consistent with every feedback seen so far.
    pub fn candidates(&self) -> &[&'a str] {
        &self.candidates
    }

    pub fn suggestion(&self) -> Option<&str> {
        recommend_guess_with(&self.candidates, self.config.weighting)
    }

    pub fn submit_guess(&mut self, guess: &str) -> Result<&TurnState> {
        let TurnState::AwaitingGuess { turn } = self.state else {
            return Err(SolverError::OutOfTurn("guess"));
        };
        let guess = validate_word(guess, self.config.word_length)?;
        self.state = TurnState::AwaitingFeedback { turn, guess };
        Ok(&self.state)
    }

    pub fn submit_feedback(&mut self, feedback: &Feedback) -> Result<&TurnState> {
        let TurnState::AwaitingFeedback { turn, guess } = &self.state else {
            return Err(SolverError::OutOfTurn("feedback"));
        };
        if feedback.len() != guess.len() {
            return Err(SolverError::LengthMismatch {
                guess: guess.len(),
                feedback: feedback.len(),
            });
        }
        let turn = *turn;

        if feedback.is_solved() {
            info_log!("solved with {} on turn {}", guess, turn);
            self.state = TurnState::Solved { turn };
            return Ok(&self.state);
        }

        self.constraints.apply(guess, feedback);
        // constraints only ever tighten, so narrowing the previous
        // candidates matches a fresh pass over the whole dictionary
        self.candidates.retain(|word| self.constraints.admits(word));
        debug_log!("turn {}: {} {} -> {} candidates", turn, guess, feedback, self.candidates.len());

        self.state = if turn >= self.config.max_turns {
            info_log!("out of turns with {} candidates left", self.candidates.len());
            TurnState::Failed { turn }
        } else {
            TurnState::AwaitingGuess { turn: turn + 1 }
        };
        Ok(&self.state)
    }

    pub fn quit(&mut self) {
        if !self.state.is_terminal() {
            self.state = TurnState::Aborted;
        }
    }

    /// Outcome of a finished game, `None` while it is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::Solved { turn } => Some(Outcome::Solved { turns: turn }),
            TurnState::Failed { turn } => Some(Outcome::Failed {
                turns: turn,
                residual: self.candidates.iter().map(|w| w.to_string()).collect(),
            }),
            TurnState::Aborted => Some(Outcome::Aborted),
            TurnState::AwaitingGuess { .. } | TurnState::AwaitingFeedback { .. } => None,
        }
    }
}

/// What the player typed at the guess prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Quit,
}

/// What the player typed at the feedback prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackAction {
    Feedback(Feedback),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub guess: String,
    pub remaining: usize,
}

/// Everything the interactive loop needs from the outside world.
///
/// `read_guess` and `read_feedback` return `None` for input that failed
/// validation; the loop then asks again without spending a turn.
pub trait GameInterface {
    fn display_intro(&mut self, word_count: usize, opening: Option<&str>);
    fn read_guess(&mut self, turn: usize) -> Option<UserAction>;
    fn read_feedback(&mut self, turn: usize) -> Option<FeedbackAction>;
    fn display_candidates(&mut self, candidates: &[&str]);
    fn display_recommendation(&mut self, recommendation: &Recommendation);
    fn display_no_candidates_message(&mut self);
    fn display_solution_found(&mut self, turns: usize);
    fn display_failed(&mut self, residual: &[String]);
}

/// Play one interactive game.
pub fn game_loop<I: GameInterface>(dictionary: &[String], config: &GameConfig, interface: &mut I) -> Outcome {
    let mut game = Game::new(dictionary, config);
    interface.display_intro(dictionary.len(), game.suggestion());

    loop {
        if let Some(outcome) = game.outcome() {
            match &outcome {
                Outcome::Solved { turns } => interface.display_solution_found(*turns),
                Outcome::Failed { residual, .. } => interface.display_failed(residual),
                // quitting ends the session without further output
                Outcome::Aborted | Outcome::NoCandidates { .. } => {}
            }
            return outcome;
        }

        match game.state().clone() {
            TurnState::AwaitingGuess { turn } => match interface.read_guess(turn) {
                Some(UserAction::Guess(guess)) => {
                    if let Err(e) = game.submit_guess(&guess) {
                        log::debug!("rejected guess: {e}");
                    }
                }
                Some(UserAction::Quit) => game.quit(),
                None => {}
            },
            TurnState::AwaitingFeedback { turn, .. } => match interface.read_feedback(turn) {
                Some(FeedbackAction::Feedback(feedback)) => match game
                    .submit_feedback(&feedback)
                    .map(|state| matches!(state, TurnState::AwaitingGuess { .. }))
                {
                    Ok(true) => {
                        interface.display_candidates(game.candidates());
                        match game.suggestion() {
                            Some(guess) => interface.display_recommendation(&Recommendation {
                                guess: guess.to_string(),
                                remaining: game.candidates().len(),
                            }),
                            None => interface.display_no_candidates_message(),
                        }
                    }
                    Ok(false) => {}
                    Err(e) => log::debug!("rejected feedback: {e}"),
                },
                Some(FeedbackAction::Quit) => game.quit(),
                None => {}
            },
            // reported through `game.outcome()` at the top of the loop
            TurnState::Solved { .. } | TurnState::Failed { .. } | TurnState::Aborted => {}
        }
    }
}

/// One autoplayed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub solution: String,
    pub guesses: Vec<(String, Feedback)>,
    pub outcome: Outcome,
}

/// Plays games against known solutions, choosing every guess itself.
#[derive(Debug, Clone)]
pub struct Simulator<'a> {
    dictionary: &'a [String],
    config: GameConfig,
    opening: Option<String>,
}

impl<'a> Simulator<'a> {
    /// The opening guess is resolved once here: the configured one if any,
    /// else the ranker's pick over the full dictionary. Every dictionary word
    /// must already be lowercase and `word_length` letters long.
    pub fn new(dictionary: &'a [String], config: GameConfig) -> Result<Self> {
        check_wordbank(dictionary, config.word_length)?;
        let opening = match &config.opening {
            Some(word) => Some(validate_word(word, config.word_length)?),
            None => recommend_guess_with(dictionary, config.weighting).map(str::to_string),
        };
        Ok(Self {
            dictionary,
            config,
            opening,
        })
    }

    pub fn opening(&self) -> Option<&str> {
        self.opening.as_deref()
    }

    pub fn play(&self, solution: &str) -> Result<GameRecord> {
        let solution = validate_word(solution, self.config.word_length)?;
        let mut game = Game::new(self.dictionary, &self.config);
        let mut guesses = Vec::new();

        let outcome = loop {
            if let Some(outcome) = game.outcome() {
                break outcome;
            }
            let guess = if guesses.is_empty() {
                self.opening.clone()
            } else {
                game.suggestion().map(str::to_string)
            };
            let Some(guess) = guess else {
                debug_log!("{}: no candidates after {} guesses", solution, guesses.len());
                break Outcome::NoCandidates { turns: guesses.len() };
            };

            let feedback = Feedback::compute(&solution, &guess);
            game.submit_guess(&guess)?;
            game.submit_feedback(&feedback)?;
            guesses.push((guess, feedback));
        };

        Ok(GameRecord {
            solution,
            guesses,
            outcome,
        })
    }
}
