//! Route costs split by move kind.

use std::cmp::Ordering;
use std::f64::consts::SQRT_2;
use std::ops::Add;

/// Accumulated cost of a route, kept as `straight + diagonal·√2`.
///
/// `straight` sums the entry costs of orthogonal moves and `diagonal` those
/// of diagonal moves. With integer cell costs both sums are exact, so two
/// routes of equal cost compare [`Equal`](Ordering::Equal) no matter in
/// which order their moves were added.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cost {
    pub straight: f64,
    pub diagonal: f64,
}

impl Cost {
    /// No cost.
    pub const ZERO: Self = Self {
        straight: 0.0,
        diagonal: 0.0,
    };

    /// Cost of an unreached cell.
    pub const INFINITE: Self = Self {
        straight: f64::INFINITY,
        diagonal: 0.0,
    };

    /// Entering a cell of cost `c` with an orthogonal move.
    #[inline]
    pub const fn straight(c: f64) -> Self {
        Self {
            straight: c,
            diagonal: 0.0,
        }
    }

    /// Entering a cell of cost `c` with a diagonal move.
    #[inline]
    pub const fn diagonal(c: f64) -> Self {
        Self {
            straight: 0.0,
            diagonal: c,
        }
    }

    /// The scalar value `straight + diagonal·√2`.
    #[inline]
    pub fn total(self) -> f64 {
        self.straight + self.diagonal * SQRT_2
    }

    /// Order two costs by their scalar value.
    ///
    /// Identical sums are equal. Otherwise the sign of the difference is
    /// taken from the per-kind differences, which are exact for integer
    /// cell costs.
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.straight == other.straight && self.diagonal == other.diagonal {
            return Ordering::Equal;
        }
        let d = (self.straight - other.straight) + (self.diagonal - other.diagonal) * SQRT_2;
        d.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
    }
}

impl Add for Cost {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            straight: self.straight + rhs.straight,
            diagonal: self.diagonal + rhs.diagonal,
        }
    }
}
