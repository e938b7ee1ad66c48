use crate::constraints::ConstraintState;
use crate::letters::{ALPHABET_SIZE, LetterSet, try_letter_index};

/// Words of `dictionary` still allowed by `state`, in dictionary order.
pub fn filter_candidates<'a, S: AsRef<str>>(dictionary: &'a [S], state: &ConstraintState) -> Vec<&'a str> {
    dictionary
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| state.admits(word))
        .collect()
}

/// How a word's distinct-letter count scales its frequency score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Weighting {
    /// `frequency * (1 + distinct letters)`
    #[default]
    UniquePlusOne,
    /// `frequency * distinct letters`, the older scoring.
    UniqueCount,
}

impl Weighting {
    fn multiplier(self, distinct: usize) -> usize {
        match self {
            Self::UniquePlusOne => distinct + 1,
            Self::UniqueCount => distinct,
        }
    }
}

/// Occurrences of every letter across all candidates, repeats included.
/// Bytes that are not lowercase ASCII letters are not counted.
pub fn build_freq_chart<S: AsRef<str>>(words: &[S]) -> [usize; ALPHABET_SIZE] {
    let mut freq = [0; ALPHABET_SIZE];
    for word in words {
        for index in word.as_ref().bytes().filter_map(try_letter_index) {
            freq[index] += 1;
        }
    }
    freq
}

pub fn score_word(word: &str, freq: &[usize; ALPHABET_SIZE], weighting: Weighting) -> usize {
    let frequency: usize = word.bytes().filter_map(try_letter_index).map(|i| freq[i]).sum();
    let distinct = word
        .bytes()
        .filter(u8::is_ascii_lowercase)
        .collect::<LetterSet>()
        .len();
    frequency * weighting.multiplier(distinct)
}

/// Candidates with their scores, best first; equal scores keep candidate order.
pub fn ranked_candidates<'a, S: AsRef<str>>(candidates: &'a [S], weighting: Weighting) -> Vec<(&'a str, usize)> {
    let freq = build_freq_chart(candidates);
    let mut scored: Vec<(&str, usize)> = candidates
        .iter()
        .map(|w| (w.as_ref(), score_word(w.as_ref(), &freq, weighting)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

/// Best next guess among `candidates`, or `None` when there are none.
pub fn recommend_guess<S: AsRef<str>>(candidates: &[S]) -> Option<&str> {
    recommend_guess_with(candidates, Weighting::default())
}

pub fn recommend_guess_with<S: AsRef<str>>(candidates: &[S], weighting: Weighting) -> Option<&str> {
    ranked_candidates(candidates, weighting)
        .into_iter()
        .next()
        .map(|(word, _)| word)
}
