//! influence/mod.rs
//! Expected influence of a seed set as the mean reach over every observed cascade
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use crate::error::{InfMaxError, Result};
use crate::graph::{Cascade, NodeId, SeedSet};
use crate::reach;

/// Average number of nodes reached by `candidate` across `cascades`.
///
/// Errors with [`InfMaxError::EmptyInput`] when there is nothing to average over.
pub fn calculate_influence(cascades: &[Cascade], candidate: &SeedSet) -> Result<f64> {
    let total = total_reach(cascades, candidate)?;
    Ok(average(total, cascades.len()))
}

/// Sum of per-cascade reach counts, before dividing by the number of cascades.
pub fn total_reach<'a, I>(cascades: &[Cascade], seeds: I) -> Result<u64>
where
    I: IntoIterator<Item = &'a NodeId> + Clone,
{
    if cascades.is_empty() {
        return Err(InfMaxError::EmptyInput);
    }

    Ok(cascades
        .iter()
        .map(|cascade| reach::reach_count(cascade, seeds.clone()) as u64)
        .sum())
}

#[inline]
pub(crate) fn average(total: u64, num_cascades: usize) -> f64 {
    total as f64 / num_cascades as f64
}
