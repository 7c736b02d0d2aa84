//! greedy/mod.rs
//! Greedy hill-climbing seed selection (Kempe, Kleinberg and Tardos)
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

// ================================================================================================

pub mod celf;
pub use celf::select_seeds_lazy;

use crate::debug;
use crate::error::{InfMaxError, Result};
use crate::graph::{Cascade, CascadeStore, NodeId, SeedSet};
use crate::influence;

use std::collections::BTreeSet;
use std::iter;

// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Re-evaluates every remaining node each round.
    #[default]
    Naive,
    /// CELF: caches marginal gains and only re-evaluates stale heap tops.
    Lazy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyConfig {
    pub k: usize,
    pub strategy: Strategy,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        GreedyConfig {
            k: 1,
            strategy: Strategy::Naive,
        }
    }
}

impl GreedyConfig {
    pub fn new(k: usize, strategy: Strategy) -> Self {
        GreedyConfig { k, strategy }
    }

    pub fn validate(&self) -> Result<()> {
        validate_k(self.k)
    }
}

/// One round of the selector: the node it added and what that did to the influence.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub node: NodeId,
    pub gain: f64,
    pub influence: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub seeds: SeedSet,
    /// Influence of `seeds`; 0.0 for the empty set.
    pub influence: f64,
    /// Rounds in selection order.
    pub rounds: Vec<Round>,
    /// How many candidate sets were scored.
    pub evaluations: usize,
}

impl Selection {
    /// Seeds in the order they were picked.
    pub fn order(&self) -> Vec<NodeId> {
        self.rounds.iter().map(|r| r.node).collect()
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    fn push(&mut self, node: NodeId, influence: f64) {
        let gain = influence - self.influence;
        self.seeds.insert(node);
        self.rounds.push(Round {
            node,
            gain,
            influence,
        });
        self.influence = influence;
    }
}

// ================================================================================================

pub fn run(store: &CascadeStore, config: &GreedyConfig) -> Result<Selection> {
    config.validate()?;
    match config.strategy {
        Strategy::Naive => select_seeds(store.universe(), store.cascades(), config.k),
        Strategy::Lazy => select_seeds_lazy(store.universe(), store.cascades(), config.k),
    }
}

/// Picks up to `k` seeds, one per round, each maximizing the marginal gain over the
/// seeds already chosen.
///
/// The universe is scanned in ascending order and a candidate replaces the round's best
/// only on a strictly larger gain, so the smallest `NodeId` wins ties. Gains are compared
/// on the undivided reach total, which orders candidates exactly like the averaged delta.
///
/// Stops early, without error, once every node is selected.
pub fn select_seeds(
    universe: &BTreeSet<NodeId>,
    cascades: &[Cascade],
    k: usize,
) -> Result<Selection> {
    validate_k(k)?;

    let mut selection = Selection::default();
    let mut previous_total: u64 = 0;

    for round in 0..k {
        // (gain, total, node); None sits below any gain
        let mut best: Option<(i64, u64, NodeId)> = None;

        for &u in universe {
            if selection.seeds.contains(&u) {
                continue;
            }

            let total =
                influence::total_reach(cascades, selection.seeds.iter().chain(iter::once(&u)))?;
            selection.evaluations += 1;

            let delta = total as i64 - previous_total as i64;
            if best.is_none_or(|(best_delta, _, _)| delta > best_delta) {
                best = Some((delta, total, u));
            }
        }

        let Some((_, total, node)) = best else {
            debug!(info, "universe exhausted after {} of {} rounds", round, k);
            break;
        };

        previous_total = total;
        selection.push(node, influence::average(total, cascades.len()));
        debug!(
            debug,
            "round {}: picked {} (influence {:.4})",
            round + 1,
            node,
            selection.influence
        );
    }

    debug!(
        info,
        "naive greedy: {} seeds, influence {:.4}, {} evaluations",
        selection.len(),
        selection.influence,
        selection.evaluations
    );
    Ok(selection)
}

pub(crate) fn validate_k(k: usize) -> Result<()> {
    if k == 0 {
        return Err(InfMaxError::InvalidParameter(
            "k must be a positive integer, got 0".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn store(cascades: &[&[(NodeId, NodeId)]]) -> CascadeStore {
        let mut store = CascadeStore::new();
        for edges in cascades {
            store.add_edges(edges.iter().copied());
        }
        store
    }

    fn random_store(rng: &mut ChaCha8Rng, nodes: i32, cascades: usize) -> CascadeStore {
        let mut store = CascadeStore::new();
        for _ in 0..cascades {
            let edges = rng.random_range(0..(nodes as usize * 2));
            let edges: Vec<(NodeId, NodeId)> = (0..edges)
                .map(|_| (rng.random_range(0..nodes), rng.random_range(0..nodes)))
                .collect();
            store.add_edges(edges);
        }
        store
    }

    #[test]
    fn test_single_cascade_picks_root() {
        let store = store(&[&[(1, 2), (1, 3), (2, 4)]]);

        let selection = select_seeds(store.universe(), store.cascades(), 1).unwrap();
        assert_eq!(selection.order(), vec![1]);
        assert_eq!(selection.influence, 4.0);
    }

    #[test]
    fn test_two_cascades_tie_goes_to_smallest_node() {
        // Nodes 1 and 3 both reach 2 nodes in their own cascade and 1 (themselves) in the other.
        let store = store(&[&[(1, 2)], &[(3, 4)]]);

        let first = select_seeds(store.universe(), store.cascades(), 1).unwrap();
        assert_eq!(first.order(), vec![1]);
        assert_eq!(first.influence, 1.5);

        let second = select_seeds(store.universe(), store.cascades(), 2).unwrap();
        assert_eq!(second.order(), vec![1, 3]);
        assert_eq!(second.influence, 2.5);
        assert_eq!(second.rounds[1].gain, 1.0);
    }

    #[test]
    fn test_k_larger_than_universe() {
        let store = store(&[&[(1, 2)]]);

        let selection = select_seeds(store.universe(), store.cascades(), 5).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.order(), vec![1, 2]);
        assert_eq!(selection.influence, 2.0);
    }

    #[test]
    fn test_zero_gain_round_still_picks_a_node() {
        // After 1, node 2 adds nothing but must still be selected.
        let store = store(&[&[(1, 2)]]);

        let selection = select_seeds(store.universe(), store.cascades(), 2).unwrap();
        assert_eq!(selection.rounds[1].node, 2);
        assert_eq!(selection.rounds[1].gain, 0.0);
    }

    #[test]
    fn test_empty_universe_is_empty_selection() {
        let store = CascadeStore::new();

        let selection = select_seeds(store.universe(), store.cascades(), 3).unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.influence, 0.0);
        assert_eq!(selection.evaluations, 0);
    }

    #[test]
    fn test_universe_without_cascades_is_error() {
        let universe: BTreeSet<NodeId> = [1, 2].into_iter().collect();

        let err = select_seeds(&universe, &[], 1).unwrap_err();
        assert!(matches!(err, InfMaxError::EmptyInput));
    }

    #[test]
    fn test_zero_k_is_invalid() {
        let store = store(&[&[(1, 2)]]);

        let err = select_seeds(store.universe(), store.cascades(), 0).unwrap_err();
        assert!(matches!(err, InfMaxError::InvalidParameter(_)));
        assert!(GreedyConfig::new(0, Strategy::Lazy).validate().is_err());
    }

    #[test]
    fn test_influence_never_decreases() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let store = random_store(&mut rng, 30, 6);

        let selection = select_seeds(store.universe(), store.cascades(), 10).unwrap();
        assert_eq!(selection.len(), store.num_nodes().min(10));
        for pair in selection.rounds.windows(2) {
            assert!(pair[0].influence <= pair[1].influence);
        }
        for round in &selection.rounds {
            assert!(round.gain >= 0.0);
        }
    }

    #[test]
    fn test_selection_is_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let store = random_store(&mut rng, 25, 4);

        let a = select_seeds(store.universe(), store.cascades(), 6).unwrap();
        let b = select_seeds(store.universe(), store.cascades(), 6).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_final_influence_matches_estimator() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let store = random_store(&mut rng, 20, 5);

        let selection = select_seeds(store.universe(), store.cascades(), 4).unwrap();
        let direct = influence::calculate_influence(store.cascades(), &selection.seeds).unwrap();
        assert_eq!(selection.influence, direct);
    }

    #[test]
    fn test_lazy_matches_naive() {
        let mut rng = ChaCha8Rng::seed_from_u64(2025);
        for _ in 0..20 {
            let nodes = rng.random_range(2..30);
            let cascades = rng.random_range(1..6);
            let k = rng.random_range(1..12);
            let store = random_store(&mut rng, nodes, cascades);

            let naive = run(&store, &GreedyConfig::new(k, Strategy::Naive)).unwrap();
            let lazy = run(&store, &GreedyConfig::new(k, Strategy::Lazy)).unwrap();
            assert_eq!(naive.order(), lazy.order());
            assert_eq!(naive.influence, lazy.influence);
            assert_eq!(naive.rounds, lazy.rounds);
            assert!(lazy.evaluations <= naive.evaluations);
        }
    }
}
