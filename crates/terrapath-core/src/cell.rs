//! Cell semantics: how a raw numeric cell value is read.

/// How the numeric values of a [`CostGrid`](crate::CostGrid) are
/// interpreted. Carried by the grid itself so consumers never guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CellSemantics {
    /// Binary obstacle mask: `0` is free, anything else is blocked.
    /// Free cells cost 1 to enter.
    #[default]
    Mask,
    /// Scalar traversal cost: the value is the cost of entering the cell.
    /// Negative values and `+inf` mark obstacles.
    Cost,
}

impl CellSemantics {
    /// Cost of entering a cell holding `value`, or `None` if the cell is an
    /// obstacle.
    #[inline]
    pub fn entry_cost(self, value: f64) -> Option<f64> {
        match self {
            Self::Mask => (value == 0.0).then_some(1.0),
            Self::Cost => (value >= 0.0 && value.is_finite()).then_some(value),
        }
    }

    /// Whether a cell holding `value` may be entered.
    #[inline]
    pub fn is_walkable(self, value: f64) -> bool {
        self.entry_cost(value).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_values() {
        let s = CellSemantics::Mask;
        assert_eq!(s.entry_cost(0.0), Some(1.0));
        assert_eq!(s.entry_cost(1.0), None);
        assert_eq!(s.entry_cost(255.0), None);
        assert_eq!(s.entry_cost(-3.0), None);
    }

    #[test]
    fn cost_values() {
        let s = CellSemantics::Cost;
        assert_eq!(s.entry_cost(0.0), Some(0.0));
        assert_eq!(s.entry_cost(2.5), Some(2.5));
        assert_eq!(s.entry_cost(-1.0), None);
        assert_eq!(s.entry_cost(f64::INFINITY), None);
        assert!(!s.is_walkable(f64::NAN));
    }
}
