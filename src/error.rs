//! Error types for rational construction, parsing and arithmetic

use thiserror::Error;

/// Which part of a `n/d` literal could not be read.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("invalid numerator")]
    Numerator,

    #[error("invalid denominator")]
    Denominator,

    #[error("denominator is zero")]
    ZeroDenominator,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RationalError {
    #[error("invalid argument: denominator must be nonzero")]
    InvalidArgument,

    #[error("cannot parse {input:?} as a rational: {kind}")]
    Parse { input: String, kind: ParseErrorKind },

    #[error("division by zero")]
    DivisionByZero,
}

impl RationalError {
    pub(crate) fn parse(input: &str, kind: ParseErrorKind) -> Self {
        RationalError::Parse {
            input: input.to_string(),
            kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, RationalError>;
