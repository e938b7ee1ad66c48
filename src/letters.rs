//! Compact letter bookkeeping shared by the constraint engine and the ranker.
//!
//! Words are ASCII lowercase byte strings once they leave the loader, so a
//! letter is just a byte in `b'a'..=b'z'` and a set of letters fits in a `u32`.

pub const ALPHABET_SIZE: usize = 26;

/// Index of a lowercase ASCII letter in `0..26`.
#[inline]
pub fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "not a lowercase letter: {letter}");
    (letter - b'a') as usize
}

/// Like [`letter_index`], but `None` for anything outside `b'a'..=b'z'`.
#[inline]
pub fn try_letter_index(letter: u8) -> Option<usize> {
    letter.is_ascii_lowercase().then(|| letter_index(letter))
}

/// A set of lowercase ASCII letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LetterSet(u32);

impl LetterSet {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        (self.0 >> letter_index(letter)) & 1 == 1
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// `true` when every letter of `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE as u8)
            .filter(move |i| (self.0 >> i) & 1 == 1)
            .map(|i| b'a' + i)
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Number of occurrences of every letter in `word`.
pub fn letter_counts(word: &[u8]) -> [u8; ALPHABET_SIZE] {
    let mut counts = [0u8; ALPHABET_SIZE];
    for &letter in word {
        counts[letter_index(letter)] += 1;
    }
    counts
}
