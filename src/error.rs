use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("'{word}' is not a {expected_len}-letter word")]
    MalformedWord { word: String, expected_len: usize },

    #[error("'{input}' is not valid feedback; expected {expected_len} characters from B, G, Y")]
    MalformedFeedback { input: String, expected_len: usize },

    #[error("guess has {guess} letters but feedback has {feedback} colors")]
    LengthMismatch { guess: usize, feedback: usize },

    #[error("no {0} is expected at this point of the game")]
    OutOfTurn(&'static str),

    #[error("word bank contains no usable words")]
    EmptyWordbank,

    #[error("failed to read word bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, SolverError>;
