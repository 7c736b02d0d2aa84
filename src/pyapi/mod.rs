//! pyapi/mod.rs
//! Functions exported to the `infmax` Python module
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use crate::error::InfMaxError;
use crate::graph::NodeId;
use crate::greedy::{self, GreedyConfig, Strategy};
use crate::{influence, loader, utils};

use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyAny;

impl From<InfMaxError> for PyErr {
    fn from(err: InfMaxError) -> PyErr {
        match err {
            InfMaxError::Io { .. } => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Greedy seed selection over a list of cascades.
///
/// Returns the seeds in selection order and their influence.
#[pyfunction]
#[pyo3(name = "greedy", signature = (cascades, k = 1, lazy = false))]
pub fn greedy_seeds(cascades: &Bound<'_, PyAny>, k: usize, lazy: bool) -> PyResult<(Vec<NodeId>, f64)> {
    let store = utils::build_store(cascades)?;
    let strategy = if lazy { Strategy::Lazy } else { Strategy::Naive };
    let selection = greedy::run(&store, &GreedyConfig::new(k, strategy))?;
    Ok((selection.order(), selection.influence))
}

/// Average reach of `seeds` across `cascades`.
#[pyfunction]
#[pyo3(name = "influence")]
pub fn estimate_influence(cascades: &Bound<'_, PyAny>, seeds: &Bound<'_, PyAny>) -> PyResult<f64> {
    let store = utils::build_store(cascades)?;
    let seeds = utils::to_seed_set(seeds)?;
    Ok(influence::calculate_influence(store.cascades(), &seeds)?)
}

/// Reads a directory of edge lists; one sorted list of `(from, to)` pairs per file.
#[pyfunction]
#[pyo3(signature = (path, extension = "txt"))]
pub fn load_cascades(path: &str, extension: &str) -> PyResult<Vec<Vec<(NodeId, NodeId)>>> {
    let config = loader::LoaderConfig {
        extension: extension.to_string(),
        ..loader::LoaderConfig::default()
    };
    let mut cascades = Vec::new();
    for file in loader::cascade_files(std::path::Path::new(path), &config)? {
        let cascade = loader::load_file(&file, &config)?;
        let mut edges: Vec<(NodeId, NodeId)> = cascade
            .adjacency_list
            .iter()
            .flat_map(|(&from, targets)| targets.iter().map(move |&to| (from, to)))
            .collect();
        edges.sort();
        cascades.push(edges);
    }
    Ok(cascades)
}
