use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("unsupported input type: {0}")]
    UnsupportedType(&'static str),
    #[error("{0:?} is not an ASCII digit")]
    UnsupportedCharacter(char),
    #[error("cannot convert character {0:?}")]
    ConversionFailed(char),
    #[error("{0} is outside the open interval (0, 1)")]
    DomainError(f64),
    #[error("amount needs {digits} digit positions, only {max} are supported")]
    MagnitudeOverflow { digits: usize, max: usize },
    #[error("amount must be a finite, non-negative number, got {0}")]
    InvalidAmount(f64),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
