use std::fmt::{Display, Formatter};

use crate::rational::Rational;

/// A closed interval `[start, end]` over any totally ordered type.
///
/// No ordering between the endpoints is enforced. A range whose `start` is
/// greater than its `end` is empty and contains nothing.
///
/// ```rust
/// # use rational_repl::prelude::*;
/// let range = RationalRange::new("1/3".parse().unwrap(), "2/3".parse().unwrap());
/// assert!(range.contains(&"1/2".parse().unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClosedRange<T>
where
    T: Ord,
{
    start: T,
    end: T,
}

pub type RationalRange = ClosedRange<Rational>;

impl<T> ClosedRange<T>
where
    T: Ord,
{
    pub fn new(start: T, end: T) -> Self {
        ClosedRange { start, end }
    }

    pub fn start(&self) -> &T {
        &self.start
    }

    pub fn end(&self) -> &T {
        &self.end
    }

    /// `start <= value <= end`.
    pub fn contains(&self, value: &T) -> bool {
        &self.start <= value && value <= &self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl<T> Display for ClosedRange<T>
where
    T: Ord + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
