//! Parse errors for date and time text

/// Errors produced by the free-text date and time parsers.
///
/// Input fields never surface these; they revert to the last committed value
/// instead. The parse functions return them so callers can tell why text was
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Text is empty or whitespace.
    #[error("empty input")]
    Empty,

    /// Text does not match any accepted date format.
    #[error("invalid date: '{0}'")]
    InvalidDate(String),

    /// Text is not an `HH:MM` time of day within range.
    #[error("invalid time: '{0}'")]
    InvalidTime(String),
}
