use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::trace;
use num_bigint::BigInt;
use num_traits::One;

use super::Rational;
use crate::error::{ParseErrorKind, RationalError};

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Rational {
            numerator,
            denominator,
        } = self.normalize();

        if denominator.is_one() {
            write!(f, "{}", numerator)
        } else {
            write!(f, "{}/{}", numerator, denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    // `n` or `n/d`, split on the first `/`. The literal pair is kept unreduced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        trace!("parsing rational literal {:?}", s);

        let (numerator, denominator) = match s.split_once('/') {
            Some((numerator, denominator)) => (numerator, Some(denominator)),
            None => (s, None),
        };

        let numerator = parse_integer(numerator)
            .ok_or_else(|| RationalError::parse(s, ParseErrorKind::Numerator))?;
        let denominator = match denominator {
            Some(denominator) => parse_integer(denominator)
                .ok_or_else(|| RationalError::parse(s, ParseErrorKind::Denominator))?,
            None => BigInt::one(),
        };

        Rational::new(numerator, denominator)
            .map_err(|_| RationalError::parse(s, ParseErrorKind::ZeroDenominator))
    }
}

// optional leading `-`, then decimal digits only
fn parse_integer(text: &str) -> Option<BigInt> {
    let digits = text.strip_prefix('-').unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    BigInt::from_str(text).ok()
}

impl Rational {
    pub fn parse(text: &str) -> Result<Self, RationalError> {
        text.parse()
    }
}
