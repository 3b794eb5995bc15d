//! Salary type for representing DFS salary amounts
//!
//! DFS sites assign whole-dollar salaries, so amounts are stored as an i64
//! dollar count. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A salary amount in whole dollars
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Salary(i64);

impl Salary {
    /// Create a salary from a dollar amount
    ///
    /// # Examples
    /// ```
    /// use dfs_lineup_export::models::Salary;
    /// let cap = Salary::from_dollars(50_000);
    /// ```
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars)
    }

    /// Create a zero salary
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in dollars
    pub const fn dollars(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Salary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Salary {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Salary {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Salary {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl std::iter::Sum for Salary {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Salary::zero(), |acc, s| acc + s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars() {
        let s = Salary::from_dollars(7500);
        assert_eq!(s.dollars(), 7500);
        assert!(!s.is_zero());
    }

    #[test]
    fn test_display_is_bare_integer() {
        assert_eq!(Salary::from_dollars(100).to_string(), "100");
        assert_eq!(Salary::zero().to_string(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Salary::from_dollars(6000);
        let b = Salary::from_dollars(4000);

        assert_eq!((a + b).dollars(), 10000);
        assert_eq!((a - b).dollars(), 2000);
    }

    #[test]
    fn test_sum() {
        let salaries = vec![
            Salary::from_dollars(5000),
            Salary::from_dollars(6200),
            Salary::from_dollars(4800),
        ];
        let total: Salary = salaries.into_iter().sum();
        assert_eq!(total.dollars(), 16000);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let s = Salary::from_dollars(50000);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "50000");

        let deserialized: Salary = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }
}
