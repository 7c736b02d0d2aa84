//! lib.rs
//! Greedy influence maximization over observed information cascades, usable as a Rust
//! library and, with the `python` feature, as a PyPI python library
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html
// ================================================================================================
pub mod error;
pub mod graph;
pub mod greedy;
pub mod influence;
pub mod loader;
mod macros;
pub mod reach;
pub mod report;

#[cfg(feature = "python")]
mod pyapi;
#[cfg(feature = "python")]
mod utils;
// ================================================================================================
pub use error::{InfMaxError, Result};
pub use graph::{Cascade, CascadeStore, NodeId, SeedSet};
pub use greedy::{GreedyConfig, Round, Selection, Strategy, select_seeds, select_seeds_lazy};
pub use influence::calculate_influence;
pub use reach::reachable_from;
// ================================================================================================

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// infmax selects the K most influential seed nodes from a set of observed cascades
/// using the greedy algorithm of Kempe, Kleinberg and Tardos.
#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "infmax")]
fn infmax(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pyapi::greedy_seeds, m)?)?;
    m.add_function(wrap_pyfunction!(pyapi::estimate_influence, m)?)?;
    m.add_function(wrap_pyfunction!(pyapi::load_cascades, m)?)?;
    Ok(())
}
