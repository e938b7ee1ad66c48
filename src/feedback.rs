//! Feedback calculation for a guess scored against a solution.
//!
//! Feedback is written with one character per position: `G` for green,
//! `Y` for yellow and `B` for blank.

use std::fmt;

use crate::error::{Result, SolverError};
use crate::letters::{ALPHABET_SIZE, letter_index};

/// The color of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterColor {
    /// Right letter, right position.
    Green,
    /// Letter is in the solution, but somewhere else.
    Yellow,
    /// Letter is absent, or every occurrence of it is already accounted for.
    Blank,
}

impl LetterColor {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Green),
            'Y' => Some(Self::Yellow),
            'B' => Some(Self::Blank),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blank => 'B',
        }
    }
}

/// The colors for every position of one guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterColor>);

impl Feedback {
    pub fn new(colors: Vec<LetterColor>) -> Self {
        Self(colors)
    }

    pub fn all_green(len: usize) -> Self {
        Self(vec![LetterColor::Green; len])
    }

    /// Parse feedback such as `"bbygb"`, case-insensitive.
    ///
    /// Surrounding whitespace is ignored; anything else that is not exactly
    /// `expected_len` characters from `B`, `G`, `Y` is rejected.
    pub fn parse(input: &str, expected_len: usize) -> Result<Self> {
        let trimmed = input.trim();
        let malformed = || SolverError::MalformedFeedback {
            input: trimmed.to_string(),
            expected_len,
        };
        if trimmed.chars().count() != expected_len {
            return Err(malformed());
        }
        let colors: Option<Vec<LetterColor>> = trimmed.chars().map(LetterColor::from_char).collect();
        colors.map(Self).ok_or_else(malformed)
    }

    /// Score `guess` against `solution`.
    ///
    /// Greens are resolved first and consume their letter from the solution;
    /// the remaining positions are then scanned left to right, each taking a
    /// yellow only while an unconsumed occurrence of its letter is left.
    pub fn compute(solution: &str, guess: &str) -> Self {
        let solution = solution.as_bytes();
        let guess = guess.as_bytes();
        debug_assert_eq!(solution.len(), guess.len());

        let mut colors = vec![LetterColor::Blank; guess.len()];
        let mut unconsumed = [0u8; ALPHABET_SIZE];

        for (i, (&s, &g)) in solution.iter().zip(guess).enumerate() {
            if s == g {
                colors[i] = LetterColor::Green;
            } else {
                unconsumed[letter_index(s)] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if colors[i] == LetterColor::Green {
                continue;
            }
            let remaining = &mut unconsumed[letter_index(g)];
            if *remaining > 0 {
                *remaining -= 1;
                colors[i] = LetterColor::Yellow;
            }
        }

        Self(colors)
    }

    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&c| c == LetterColor::Green)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[LetterColor] {
        &self.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.to_char())?;
        }
        Ok(())
    }
}

/// Free-function form of [`Feedback::compute`].
pub fn compute_feedback(solution: &str, guess: &str) -> Feedback {
    Feedback::compute(solution, guess)
}
