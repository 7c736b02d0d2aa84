// Cost-Effective Lazy Forward selection (Leskovec et al., 2007)

use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap};
use std::iter;

use crate::debug;
use crate::error::Result;
use crate::graph::{Cascade, NodeId};
use crate::influence;

use super::{Selection, validate_k};

/// A cached marginal gain, valid for the round it was computed in.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    gain: u64,
    node: NodeId,
    round: usize,
}

// Heap order: larger gain first, then smaller NodeId, which is the naive scan's tie-break.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gain
            .cmp(&other.gain)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Lazy variant of [`super::select_seeds`] with the same result.
///
/// Reach totals are a sum of coverage functions, so a gain cached in an earlier round is
/// an upper bound on the current one. A heap top whose gain is fresh therefore beats every
/// other node, and the heap order resolves equal gains to the smallest `NodeId`.
pub fn select_seeds_lazy(
    universe: &BTreeSet<NodeId>,
    cascades: &[Cascade],
    k: usize,
) -> Result<Selection> {
    validate_k(k)?;

    let mut selection = Selection::default();
    let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(universe.len());

    for &u in universe {
        let gain = influence::total_reach(cascades, iter::once(&u))?;
        selection.evaluations += 1;
        heap.push(Candidate {
            gain,
            node: u,
            round: 0,
        });
    }

    let mut previous_total: u64 = 0;

    for round in 0..k {
        let chosen = loop {
            let Some(top) = heap.pop() else {
                break None;
            };
            if top.round == round {
                break Some(top);
            }

            let total = influence::total_reach(
                cascades,
                selection.seeds.iter().chain(iter::once(&top.node)),
            )?;
            selection.evaluations += 1;
            heap.push(Candidate {
                gain: total.saturating_sub(previous_total),
                node: top.node,
                round,
            });
        };

        let Some(chosen) = chosen else {
            debug!(info, "universe exhausted after {} of {} rounds", round, k);
            break;
        };

        previous_total += chosen.gain;
        selection.push(chosen.node, influence::average(previous_total, cascades.len()));
        debug!(
            debug,
            "round {}: picked {} (influence {:.4}, heap {})",
            round + 1,
            chosen.node,
            selection.influence,
            heap.len()
        );
    }

    debug!(
        info,
        "lazy greedy: {} seeds, influence {:.4}, {} evaluations",
        selection.len(),
        selection.influence,
        selection.evaluations
    );
    Ok(selection)
}
