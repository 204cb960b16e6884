//! Cooperative cancellation for long searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cloneable cancellation flag shared between a caller and a running
/// search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Counts expansions and polls an optional token before every `interval`-th
/// one. A cell refused by a poll is not counted.
pub(crate) struct Poller<'a> {
    token: Option<&'a CancelToken>,
    interval: u32,
    until_poll: u32,
    pub(crate) expanded: usize,
}

impl<'a> Poller<'a> {
    pub(crate) fn new(token: Option<&'a CancelToken>, interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            token,
            interval,
            until_poll: interval,
            expanded: 0,
        }
    }

    /// Ask to expand one more cell. Returns `true` if the search must stop
    /// instead; otherwise the expansion is counted.
    #[inline]
    pub(crate) fn tick(&mut self) -> bool {
        if let Some(token) = self.token {
            self.until_poll -= 1;
            if self.until_poll == 0 {
                self.until_poll = self.interval;
                log::trace!("cancellation poll after {} expansions", self.expanded);
                if token.is_cancelled() {
                    return true;
                }
            }
        }
        self.expanded += 1;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_flag() {
        let t = CancelToken::new();
        let u = t.clone();
        assert!(!u.is_cancelled());
        t.cancel();
        assert!(u.is_cancelled());
    }

    #[test]
    fn poller_without_token_never_stops() {
        let mut p = Poller::new(None, 1);
        for _ in 0..10 {
            assert!(!p.tick());
        }
        assert_eq!(p.expanded, 10);
    }

    #[test]
    fn poller_checks_on_interval() {
        let t = CancelToken::new();
        t.cancel();
        let mut p = Poller::new(Some(&t), 3);
        assert!(!p.tick());
        assert!(!p.tick());
        assert!(p.tick());
        assert_eq!(p.expanded, 2);
    }

    #[test]
    fn live_token_counts_every_expansion() {
        let t = CancelToken::new();
        let mut p = Poller::new(Some(&t), 4);
        for _ in 0..9 {
            assert!(!p.tick());
        }
        assert_eq!(p.expanded, 9);
    }

    #[test]
    fn zero_interval_polls_every_time() {
        let t = CancelToken::new();
        t.cancel();
        let mut p = Poller::new(Some(&t), 0);
        assert!(p.tick());
        assert_eq!(p.expanded, 0);
    }
}
