use rustyline::error::ReadlineError;

/// Why a line typed at a prompt was rejected. Always recovered by re-prompting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{0}")]
    Format(String),
    #[error("{0}")]
    Range(String),
    #[error("{0}")]
    Semantic(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Input closed")]
    Closed,
    #[error("Readline error: {0}")]
    Readline(#[from] ReadlineError),
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed network file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid network: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    #[error("Distance between {from} and {to} is not a finite number: {km}")]
    InvalidDistance { from: String, to: String, km: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
    #[error("Fare error: {0}")]
    Fare(#[from] FareError),
    #[error("Missing luggage fees for {0}")]
    MissingFees(String),
}
