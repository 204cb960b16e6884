use std::collections::BinaryHeap;

use crate::cancel::Poller;
use crate::cost::Cost;
use crate::search::{CellState, FrontierEntry, Outcome, SearchSpace};
use crate::traits::WeightedPather;

impl SearchSpace {
    /// Uniform-cost (Dijkstra) search from `start` to `goal`.
    ///
    /// Cells are finalized in `(cost, steps, push order)` order and never
    /// re-expanded. A back-pointer is replaced only when a strictly better
    /// `(cost, steps)` is found, so equal-cost alternatives keep the route
    /// discovered first. Costs compare through [`Cost::compare`]. Stops as
    /// soon as `goal` is dequeued.
    pub(crate) fn dijkstra<P: WeightedPather>(
        &mut self,
        pather: &P,
        start: usize,
        goal: usize,
        poller: &mut Poller<'_>,
    ) -> Outcome {
        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;
        {
            let n = &mut self.nodes[start];
            n.cost = Cost::ZERO;
            n.steps = 0;
            n.seq = seq;
            n.state = CellState::Frontier;
        }
        open.push(FrontierEntry {
            cost: Cost::ZERO,
            steps: 0,
            seq,
            idx: start,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let outcome = loop {
            let Some(current) = open.pop() else {
                break Outcome::Exhausted;
            };
            let ci = current.idx;

            // Skip stale entries.
            let cn = &self.nodes[ci];
            if cn.state == CellState::Finalized || cn.seq != current.seq {
                continue;
            }
            if poller.tick() {
                break Outcome::Cancelled;
            }
            self.nodes[ci].state = CellState::Finalized;
            if ci == goal {
                break Outcome::Found;
            }

            let cp = self.coord(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes[ni].state == CellState::Finalized {
                    continue;
                }
                let cost = current.cost + pather.cost(cp, np);
                let steps = current.steps + 1;
                if !self.nodes[ni].improved_by(cost, steps) {
                    continue;
                }
                seq += 1;
                let n = &mut self.nodes[ni];
                n.cost = cost;
                n.steps = steps;
                n.parent = ci;
                n.seq = seq;
                n.state = CellState::Frontier;
                open.push(FrontierEntry {
                    cost,
                    steps,
                    seq,
                    idx: ni,
                });
            }
        };

        self.nbuf = nbuf;
        outcome
    }
}
