use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StoneError {
    #[error("Failed to parse stones: {reason}")]
    #[diagnostic(
        code(stones::parse_error),
        help("expected whitespace-separated non-negative integers")
    )]
    Parse { reason: String },

    #[error("Failed to read stones from standard input")]
    #[diagnostic(code(stones::read_error))]
    Read(#[from] std::io::Error),
}
