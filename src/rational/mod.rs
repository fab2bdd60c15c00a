//! Exact fractions over arbitrary-precision integers, kept unreduced until normalized.
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{RationalError, Result};

mod cmp;
mod fmt;
mod ops;

#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Creates `numerator / denominator` without reducing it.
    ///
    /// Fails with [`RationalError::InvalidArgument`] when `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            return Err(RationalError::InvalidArgument);
        }

        Ok(Rational {
            numerator,
            denominator,
        })
    }

    /// Creates a rational from any pair of integers that widen into `BigInt`.
    ///
    /// ```rust
    /// # use rational_repl::prelude::*;
    /// let half = Rational::from_ints(2i64, 4i64).unwrap();
    /// assert_eq!(half.to_string(), "1/2");
    /// ```
    pub fn from_ints<T: Into<BigInt>>(numerator: T, denominator: T) -> Result<Self> {
        Rational::new(numerator.into(), denominator.into())
    }

    /// Reduces and normalizes the sign. Callers guarantee `denominator != 0`.
    pub(crate) fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        Rational {
            numerator,
            denominator,
        }
        .normalize()
    }

    /// Returns the same value in lowest terms with a positive denominator.
    ///
    /// Zero always normalizes to `0/1`. The receiver is left untouched.
    pub fn normalize(&self) -> Rational {
        if self.numerator.is_zero() {
            return Rational::zero();
        }

        // gcd of BigInts is never negative
        let g = self.numerator.gcd(&self.denominator);
        let mut numerator = &self.numerator / &g;
        let mut denominator = &self.denominator / &g;

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        Rational {
            numerator,
            denominator,
        }
    }

    /// The numerator as stored, not necessarily reduced.
    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    /// The denominator as stored, possibly negative.
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_integer(&self) -> bool {
        self.normalize().denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        !self.numerator.is_zero() && self.numerator.is_negative() != self.denominator.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        !self.numerator.is_zero() && self.numerator.is_negative() == self.denominator.is_negative()
    }

    /// `-1`, `0` or `1` depending on the sign of the value.
    pub fn signum(&self) -> Rational {
        if self.is_negative() {
            -Rational::one()
        } else if self.is_positive() {
            Rational::one()
        } else {
            Rational::zero()
        }
    }

    pub fn abs(&self) -> Rational {
        Rational::reduced(self.numerator.abs(), self.denominator.abs())
    }

    /// `1 / self`, or [`RationalError::DivisionByZero`] for zero.
    pub fn recip(&self) -> Result<Rational> {
        if self.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(Rational::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }
}

macro_rules! define_integer_conversions {
    ($t:ty) => {
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Rational {
                    numerator: value.into(),
                    denominator: BigInt::one(),
                }
            }
        }
    };
}

define_integer_conversions!(i32);
define_integer_conversions!(i64);
define_integer_conversions!(BigInt);
