use terrapath_core::Coord;

/// Which neighboring cells count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Connectivity {
    /// Up, down, left, right.
    #[default]
    Four,
    /// The four cardinal moves plus the four diagonals.
    Eight,
}

const CARDINAL: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
];

const ALL: [Coord; 8] = [
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(-1, 1),
    Coord::new(1, 1),
    Coord::new(1, -1),
    Coord::new(-1, -1),
];

impl Connectivity {
    /// Move offsets in enumeration order: up, right, down, left, then
    /// up-right, down-right, down-left, up-left.
    #[inline]
    pub fn offsets(self) -> &'static [Coord] {
        match self {
            Self::Four => &CARDINAL,
            Self::Eight => &ALL,
        }
    }

    /// Whether `a` and `b` are one move apart.
    #[inline]
    pub fn adjacent(self, a: Coord, b: Coord) -> bool {
        let d = b - a;
        self.offsets().contains(&d)
    }
}
