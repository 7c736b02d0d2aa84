//! utils/mod.rs
//! Conversions from Python graph objects into cascades
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use crate::{debug, graph::*};
use pyo3::prelude::*;
use pyo3::types::PyAny;

/// Edges of one cascade given as a networkx graph, an igraph graph or an iterable of pairs.
pub fn get_edges(cascade: &Bound<'_, PyAny>) -> PyResult<Vec<(NodeId, NodeId)>> {
    let edges_iter = match cascade.call_method0("edges") {
        // NetworkX: `edges()` returns an EdgeView
        Ok(nx_edges) => nx_edges.try_iter()?,
        Err(_) => match cascade.call_method0("get_edgelist") {
            // igraph: `get_edgelist()` returns a list of edge tuples
            Ok(ig_edges) => ig_edges.try_iter()?,
            Err(_) => {
                debug!(trace, "no graph methods found, reading cascade as a pair iterable");
                cascade.try_iter()?
            }
        },
    };

    let mut edges: Vec<(NodeId, NodeId)> = Vec::new();
    for edge_obj in edges_iter {
        let edge: Bound<'_, PyAny> = edge_obj?;
        let from: NodeId = edge.get_item(0)?.extract()?;
        let to: NodeId = edge.get_item(1)?.extract()?;
        edges.push((from, to));
    }

    Ok(edges)
}

pub fn build_store(cascades: &Bound<'_, PyAny>) -> PyResult<CascadeStore> {
    let mut store = CascadeStore::new();
    for cascade in cascades.try_iter()? {
        store.add_edges(get_edges(&cascade?)?);
    }
    Ok(store)
}

pub fn to_seed_set(seeds: &Bound<'_, PyAny>) -> PyResult<SeedSet> {
    let mut set = SeedSet::new();
    for node in seeds.try_iter()? {
        set.insert(node?.extract::<NodeId>()?);
    }
    Ok(set)
}
