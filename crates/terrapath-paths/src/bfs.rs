use std::collections::VecDeque;

use crate::cancel::Poller;
use crate::cost::Cost;
use crate::search::{CellState, Outcome, SearchSpace};
use crate::traits::Pather;

impl SearchSpace {
    /// Breadth-first search from `start` to `goal` where every move costs
    /// `unit`.
    ///
    /// Each cell is reached once, by its first discoverer; the FIFO queue
    /// makes that the fewest-steps (hence cheapest) route.
    pub(crate) fn bfs<P: Pather>(
        &mut self,
        pather: &P,
        start: usize,
        goal: usize,
        unit: f64,
        poller: &mut Poller<'_>,
    ) -> Outcome {
        let mut queue: VecDeque<usize> = VecDeque::new();
        {
            let n = &mut self.nodes[start];
            n.cost = Cost::ZERO;
            n.steps = 0;
            n.state = CellState::Frontier;
        }
        queue.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            let Some(ci) = queue.pop_front() else {
                break Outcome::Exhausted;
            };
            if poller.tick() {
                break Outcome::Cancelled;
            }
            self.nodes[ci].state = CellState::Finalized;
            if ci == goal {
                break Outcome::Found;
            }

            let steps = self.nodes[ci].steps + 1;
            let cp = self.coord(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let n = &mut self.nodes[ni];
                if n.state != CellState::Unvisited {
                    continue;
                }
                n.steps = steps;
                n.cost = Cost::straight(f64::from(steps) * unit);
                n.parent = ci;
                n.state = CellState::Frontier;
                queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        outcome
    }
}
