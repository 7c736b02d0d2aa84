//! report/mod.rs
//! Human readable summary of a finished selection
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use crate::graph::{NodeId, SeedSet};
use crate::greedy::Selection;

use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Report {
    pub seeds: SeedSet,
    pub influence: f64,
    pub elapsed: Duration,
    pub cascades: usize,
    pub requested: usize,
}

impl Report {
    pub fn new(selection: &Selection, cascades: usize, requested: usize, elapsed: Duration) -> Self {
        Report {
            seeds: selection.seeds.clone(),
            influence: selection.influence,
            elapsed,
            cascades,
            requested,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CASCADES READ! NUMBER OF CASCADES: {}", self.cascades)?;
        if self.seeds.len() < self.requested {
            writeln!(
                f,
                "ONLY {} DISTINCT NODES AVAILABLE ({} REQUESTED)",
                self.seeds.len(),
                self.requested
            )?;
        }
        writeln!(
            f,
            "APPROXIMATELY OPTIMAL SET (SIZE {}): {}",
            self.seeds.len(),
            format_set(&self.seeds)
        )?;
        writeln!(
            f,
            "INFLUENCE OF APPROX. OPTIMAL SET (NUMBER OF NODES): {:.6}",
            self.influence
        )?;
        write!(f, "TIME (SEC): {:.3}", self.elapsed.as_secs_f64())
    }
}

/// `{1, 2, 3}`, ascending.
pub fn format_set<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a NodeId>,
{
    let items: Vec<String> = nodes.into_iter().map(|n| n.to_string()).collect();
    format!("{{{}}}", items.join(", "))
}
