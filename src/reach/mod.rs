//! reach/mod.rs
//! Multi-source breadth-first reachability inside a single cascade
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html
//!
//! Edges are followed `from -> to` only. Seeds are reached by definition, even when they
//! are not part of the cascade, and a node is counted once no matter how many paths lead
//! to it, so cycles terminate.

use crate::graph::{Cascade, NodeId, SeedSet};
use rustc_hash::FxHashSet as HashSet;

/// Number of distinct nodes reachable from `seeds` in `cascade`, seeds included.
pub fn reachable_from(cascade: &Cascade, seeds: &SeedSet) -> usize {
    reach_count(cascade, seeds)
}

/// Same as [`reachable_from`], over any collection of seed references.
///
/// Lets the selector evaluate `S ∪ {u}` as `S.iter().chain(once(&u))` without cloning `S`.
pub fn reach_count<'a, I>(cascade: &Cascade, seeds: I) -> usize
where
    I: IntoIterator<Item = &'a NodeId>,
{
    bfs(cascade, seeds).len()
}

/// The reached nodes themselves.
pub fn reached_set<'a, I>(cascade: &Cascade, seeds: I) -> HashSet<NodeId>
where
    I: IntoIterator<Item = &'a NodeId>,
{
    bfs(cascade, seeds)
}

fn bfs<'a, I>(cascade: &Cascade, seeds: I) -> HashSet<NodeId>
where
    I: IntoIterator<Item = &'a NodeId>,
{
    let mut explored: HashSet<NodeId> = HashSet::default();
    let mut queue: Vec<NodeId> = Vec::new();

    for &seed in seeds {
        if explored.insert(seed) {
            queue.push(seed);
        }
    }

    let mut head = 0usize;
    while head < queue.len() {
        let current = queue[head];
        head += 1;
        for &next in cascade.successors(&current) {
            if explored.insert(next) {
                queue.push(next);
            }
        }
    }

    explored
}
