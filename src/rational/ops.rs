use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::Rational;
use crate::error::{RationalError, Result};

impl Rational {
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.denominator + &self.denominator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;

        Rational::reduced(numerator, denominator)
    }

    pub fn subtract(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.denominator - &self.denominator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;

        Rational::reduced(numerator, denominator)
    }

    pub fn multiply(&self, other: &Rational) -> Rational {
        let numerator = &self.numerator * &other.numerator;
        let denominator = &self.denominator * &other.denominator;

        Rational::reduced(numerator, denominator)
    }

    /// Fails with [`RationalError::DivisionByZero`] when `other` is zero.
    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        if other.numerator.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        let numerator = &self.numerator * &other.denominator;
        let denominator = &other.numerator * &self.denominator;

        Ok(Rational::reduced(numerator, denominator))
    }

    pub fn negate(&self) -> Rational {
        Rational::reduced(-&self.numerator, self.denominator.clone())
    }

    // backs the `/` operator, which has no way to report an error
    fn quotient(&self, other: &Rational) -> Rational {
        match self.divide(other) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{}", e),
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $inherent:ident) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational::$inherent(self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational::$inherent(self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                Rational::$inherent(&self, rhs)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                Rational::$inherent(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);
// Panics on a zero divisor, like integer division. Use `Rational::divide` to get an error instead.
forward_binop!(Div, div, quotient);

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational {
            numerator: BigInt::zero(),
            denominator: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational {
            numerator: BigInt::one(),
            denominator: BigInt::one(),
        }
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc * x)
    }
}
