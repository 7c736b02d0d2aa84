//! graph/mod.rs
//! Cascade definitions and the store shared by every estimator call
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2024 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use rustc_hash::FxHashMap as HashMap;
use rustc_hash::FxHashSet as HashSet;

use std::collections::BTreeSet;

pub type NodeId = i32;
pub type SeedSet = BTreeSet<NodeId>;

/// One observed cascade: who directly influenced whom.
///
/// A node that never appears as a source has no entry in `adjacency_list`
/// and is treated as having no outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct Cascade {
    pub adjacency_list: HashMap<NodeId, Vec<NodeId>>,
    nodes: HashSet<NodeId>,
    num_edges: usize,
}

impl Cascade {
    pub fn new() -> Self {
        Cascade {
            adjacency_list: HashMap::default(),
            nodes: HashSet::default(),
            num_edges: 0,
        }
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut cascade = Cascade::new();
        for (from, to) in edges {
            cascade.add_edge(from, to);
        }
        cascade
    }

    /// Adds the directed edge `from -> to`. Duplicates are kept.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.adjacency_list.entry(from).or_default().push(to);
        self.num_edges += 1;
    }

    pub fn successors(&self, node: &NodeId) -> &[NodeId] {
        self.adjacency_list.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }
}

/// Every loaded cascade plus the vertex universe they span.
///
/// The universe is a `BTreeSet`, so enumeration is always ascending by `NodeId`.
/// The greedy tie-break depends on that order.
#[derive(Debug, Clone, Default)]
pub struct CascadeStore {
    cascades: Vec<Cascade>,
    universe: BTreeSet<NodeId>,
}

impl CascadeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cascade(&mut self, cascade: Cascade) {
        self.universe.extend(cascade.nodes().copied());
        self.cascades.push(cascade);
    }

    pub fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        self.add_cascade(Cascade::from_edges(edges));
    }

    pub fn cascades(&self) -> &[Cascade] {
        &self.cascades
    }

    pub fn universe(&self) -> &BTreeSet<NodeId> {
        &self.universe
    }

    pub fn num_cascades(&self) -> usize {
        self.cascades.len()
    }

    pub fn num_nodes(&self) -> usize {
        self.universe.len()
    }

    pub fn num_edges(&self) -> usize {
        self.cascades.iter().map(Cascade::num_edges).sum()
    }

    pub fn print(&self) {
        crate::debug!(
            info,
            "[graph/mod.rs]: cascades/nodes/edges: {}/{}/{}",
            self.num_cascades(),
            self.num_nodes(),
            self.num_edges()
        );
    }
}
