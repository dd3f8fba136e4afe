use thiserror::Error;

/// Errors that may rise while browsing a catalog
#[derive(Error, Debug)]
pub enum Error {
    #[error("file i/o error")]
    Io(#[from] std::io::Error),
    #[error("parsing error")]
    Parsing(#[from] ParsingError),
}

/// Errors that may rise in the parsing process.
/// Any of these is fatal to the catalog being read:
/// no catalog is malformed-tolerant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParsingError {
    /// SSC header line is empty or does not start with a frame name
    #[error("malformed ssc header line")]
    MalformedHeader,
    /// "STATION POSITIONS AT EPOCH" should follow the frame name
    #[error("missing \"STATION POSITIONS AT EPOCH\" header label")]
    MissingPositionsLabel,
    /// "AND VELOCITIES" should follow the reference epoch
    #[error("missing \"AND VELOCITIES\" header label")]
    MissingVelocitiesLabel,
    #[error("failed to parse reference epoch from \"{0}\"")]
    ReferenceEpoch(String),
    /// Line ends before a mandatory field
    #[error("missing field at column {column}")]
    MissingField { column: usize },
    #[error("record line is too short")]
    LineTooShort,
    #[error("failed to parse float number from \"{0}\"")]
    FloatParsing(String),
    #[error("failed to parse integer number from \"{0}\"")]
    IntegerParsing(String),
    #[error("failed to parse date from \"{0}\"")]
    Date(String),
    /// Velocity line does not describe the same site as the position line
    #[error("domes mismatch: expecting \"{expected}\", got \"{found}\"")]
    DomesMismatch { expected: String, found: String },
    /// PSD component lines are expected in E, N, U order
    #[error("psd component mismatch: expecting '{expected}', got '{found}'")]
    ComponentMismatch { expected: char, found: char },
    #[error("invalid psd model \"{0}\"")]
    InvalidModel(String),
}
