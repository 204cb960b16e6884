use crate::neighbors::Connectivity;

/// Default number of expansions between two cancellation polls.
pub const DEFAULT_CANCEL_POLL_INTERVAL: u32 = 256;

/// Configuration for a [`PathEngine`](crate::PathEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Which cells are adjacent.
    pub connectivity: Connectivity,
    /// With [`Connectivity::Eight`], allow a diagonal move even when one of
    /// the two orthogonal cells it passes between is blocked.
    pub corner_cutting: bool,
    /// Expansions between two polls of a [`CancelToken`](crate::CancelToken).
    /// `0` is treated as `1`.
    pub cancel_poll_interval: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Four,
            corner_cutting: false,
            cancel_poll_interval: DEFAULT_CANCEL_POLL_INTERVAL,
        }
    }
}

impl EngineConfig {
    /// Set the connectivity.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Shorthand for [`Connectivity::Eight`].
    pub fn with_diagonals(self) -> Self {
        self.with_connectivity(Connectivity::Eight)
    }

    /// Allow or forbid cutting corners on diagonal moves.
    pub fn with_corner_cutting(mut self, corner_cutting: bool) -> Self {
        self.corner_cutting = corner_cutting;
        self
    }

    /// Set the cancellation poll interval.
    pub fn with_cancel_poll_interval(mut self, interval: u32) -> Self {
        self.cancel_poll_interval = interval;
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let c: EngineConfig = serde_json::from_str(r#"{"connectivity":"eight"}"#).unwrap();
        assert_eq!(c.connectivity, Connectivity::Eight);
        assert!(!c.corner_cutting);
        assert_eq!(c.cancel_poll_interval, DEFAULT_CANCEL_POLL_INTERVAL);
    }
}
