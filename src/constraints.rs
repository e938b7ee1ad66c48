//! Accumulated knowledge about the solution.
//!
//! A [`ConstraintState`] starts empty at the beginning of every game and
//! absorbs one `(guess, feedback)` pair per turn. The candidate filter then
//! asks it, word by word, whether a dictionary entry is still possible.

use crate::debug_log;
use crate::error::{Result, SolverError};
use crate::feedback::{Feedback, LetterColor};
use crate::letters::{ALPHABET_SIZE, LetterSet, letter_counts, letter_index};

/// What the rest of a guess says about a letter that came back blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankEvidence {
    /// The same letter is yellow at another position of this guess, so the
    /// solution contains it, just not here.
    SeenAsYellowElsewhere,
    /// The same letter is green elsewhere and never yellow, so the solution
    /// holds it only at its green position(s).
    SeenAsGreenElsewhere,
    /// The letter earned no green or yellow anywhere in this guess.
    NeverSeen,
}

impl BlankEvidence {
    fn classify(greens: u8, yellows: u8) -> Self {
        if yellows > 0 {
            Self::SeenAsYellowElsewhere
        } else if greens > 0 {
            Self::SeenAsGreenElsewhere
        } else {
            Self::NeverSeen
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    known: Vec<Option<u8>>,
    excluded: Vec<LetterSet>,
    must_contain: LetterSet,
    must_contain_at_least_two: LetterSet,
    must_contain_at_least_three: LetterSet,
}

impl ConstraintState {
    /// An empty state for words of `word_length` letters.
    pub fn new(word_length: usize) -> Self {
        Self {
            known: vec![None; word_length],
            excluded: vec![LetterSet::new(); word_length],
            must_contain: LetterSet::new(),
            must_contain_at_least_two: LetterSet::new(),
            must_contain_at_least_three: LetterSet::new(),
        }
    }

    pub fn word_length(&self) -> usize {
        self.known.len()
    }

    /// Letter pinned at `position` by a green, if any.
    pub fn known(&self, position: usize) -> Option<u8> {
        self.known[position]
    }

    /// Letters ruled out at `position`.
    pub fn excluded(&self, position: usize) -> LetterSet {
        self.excluded[position]
    }

    pub fn must_contain(&self) -> LetterSet {
        self.must_contain
    }

    pub fn must_contain_at_least_two(&self) -> LetterSet {
        self.must_contain_at_least_two
    }

    pub fn must_contain_at_least_three(&self) -> LetterSet {
        self.must_contain_at_least_three
    }

    /// `true` when nothing has been learned yet.
    pub fn is_empty(&self) -> bool {
        self.must_contain.is_empty() && self.excluded.iter().all(|set| set.is_empty())
    }

    /// Fold the feedback for `guess` into the state.
    ///
    /// `guess` must be lowercase ASCII and the same length as `feedback` and
    /// the state; use [`ConstraintState::try_apply`] for unchecked input.
    pub fn apply(&mut self, guess: &str, feedback: &Feedback) {
        let guess = guess.as_bytes();
        debug_assert_eq!(guess.len(), feedback.len());
        debug_assert_eq!(guess.len(), self.word_length());

        let mut greens = [0u8; ALPHABET_SIZE];
        let mut yellows = [0u8; ALPHABET_SIZE];

        for (i, (&letter, &color)) in guess.iter().zip(feedback.colors()).enumerate() {
            match color {
                LetterColor::Green => {
                    self.must_contain.insert(letter);
                    self.known[i] = Some(letter);
                    greens[letter_index(letter)] += 1;
                }
                LetterColor::Yellow => {
                    self.must_contain.insert(letter);
                    self.excluded[i].insert(letter);
                    yellows[letter_index(letter)] += 1;
                }
                LetterColor::Blank => {}
            }
        }

        for (i, (&letter, &color)) in guess.iter().zip(feedback.colors()).enumerate() {
            if color != LetterColor::Blank {
                continue;
            }
            let idx = letter_index(letter);
            match BlankEvidence::classify(greens[idx], yellows[idx]) {
                BlankEvidence::SeenAsYellowElsewhere => {
                    self.excluded[i].insert(letter);
                }
                BlankEvidence::SeenAsGreenElsewhere => {
                    for (known, excluded) in self.known.iter().zip(self.excluded.iter_mut()) {
                        if *known != Some(letter) {
                            excluded.insert(letter);
                        }
                    }
                }
                BlankEvidence::NeverSeen => {
                    for excluded in &mut self.excluded {
                        excluded.insert(letter);
                    }
                }
            }
        }

        for letter in guess.iter().copied().collect::<LetterSet>().iter() {
            let idx = letter_index(letter);
            let scored = greens[idx] + yellows[idx];
            if scored > 1 {
                self.must_contain_at_least_two.insert(letter);
            }
            if scored > 2 {
                self.must_contain_at_least_three.insert(letter);
            }
        }

        debug_log!(
            "applied {} {}: must_contain={:?} known={:?}",
            String::from_utf8_lossy(guess),
            feedback,
            self.must_contain.iter().map(char::from).collect::<String>(),
            self.known
                .iter()
                .map(|k| k.map_or('.', char::from))
                .collect::<String>()
        );
    }

    /// Checked form of [`ConstraintState::apply`].
    pub fn try_apply(&mut self, guess: &str, feedback: &Feedback) -> Result<()> {
        let guess = validate_word(guess, self.word_length())?;
        if guess.len() != feedback.len() {
            return Err(SolverError::LengthMismatch {
                guess: guess.len(),
                feedback: feedback.len(),
            });
        }
        self.apply(&guess, feedback);
        Ok(())
    }

    /// Whether `word` is consistent with everything learned so far.
    /// Anything but lowercase ASCII letters of the right length is rejected.
    pub fn admits(&self, word: &str) -> bool {
        let word = word.as_bytes();
        if word.len() != self.word_length() || !word.iter().all(u8::is_ascii_lowercase) {
            return false;
        }

        let counts = letter_counts(word);
        let has_at_least = |set: LetterSet, n: u8| set.iter().all(|l| counts[letter_index(l)] >= n);
        if !has_at_least(self.must_contain, 1)
            || !has_at_least(self.must_contain_at_least_two, 2)
            || !has_at_least(self.must_contain_at_least_three, 3)
        {
            return false;
        }

        word.iter().enumerate().all(|(i, &letter)| {
            self.known[i].is_none_or(|k| k == letter) && !self.excluded[i].contains(letter)
        })
    }
}

/// Normalize `word` to lowercase, rejecting anything that is not exactly
/// `expected_len` ASCII letters.
pub fn validate_word(word: &str, expected_len: usize) -> Result<String> {
    let trimmed = word.trim();
    if trimmed.len() == expected_len && trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(trimmed.to_ascii_lowercase())
    } else {
        Err(SolverError::MalformedWord {
            word: trimmed.to_string(),
            expected_len,
        })
    }
}
