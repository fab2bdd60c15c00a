use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use super::Rational;

impl Rational {
    /// Three-way comparison of the mathematical values.
    ///
    /// Both sides are normalized first so the denominators are positive and
    /// cross-multiplication keeps the direction of the comparison.
    pub fn compare(&self, other: &Rational) -> Ordering {
        let a = self.normalize();
        let b = other.normalize();

        (&a.numerator * &b.denominator).cmp(&(&b.numerator * &a.denominator))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let normalized = self.normalize();
        normalized.numerator.hash(state);
        normalized.denominator.hash(state);
    }
}
