//! main.rs
//! Command line front end: load a cascade directory, run the greedy selector, print the result
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use anyhow::{Context, Result};
use clap::{Command, arg};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use infmax::greedy::{self, GreedyConfig, Strategy};
use infmax::loader::{self, LoaderConfig};
use infmax::report::Report;

fn cli() -> Command {
    Command::new("infmax")
        .about("Greedy influence maximization over a directory of cascade edge lists")
        .arg(
            arg!(<DIR> "Directory holding one edge-list file per cascade")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-k --k [K] "Number of seed nodes to select")
                .default_value("1")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(arg!(--lazy "Use lazy (CELF) evaluation of marginal gains"))
        .arg(
            arg!(--ext [EXT] "Extension of cascade files")
                .default_value("txt")
                .value_parser(clap::value_parser!(String)),
        )
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("INFMAX_LOG").unwrap_or_else(|_| EnvFilter::new("infmax=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    let dir = matches.get_one::<PathBuf>("DIR").unwrap().clone();
    let k = *matches.get_one::<usize>("k").unwrap();
    let strategy = if matches.get_flag("lazy") {
        Strategy::Lazy
    } else {
        Strategy::Naive
    };
    let loader_config = LoaderConfig {
        extension: matches.get_one::<String>("ext").unwrap().clone(),
        ..LoaderConfig::default()
    };
    let config = GreedyConfig::new(k, strategy);
    config.validate()?;

    println!("READING CASCADES...");
    let store = loader::load_dir(&dir, &loader_config)
        .with_context(|| format!("loading cascades from {}", dir.display()))?;
    store.print();

    println!("RUNNING GREEDY ALGORITHM...");
    let start = Instant::now();
    let selection = greedy::run(&store, &config)?;
    let report = Report::new(&selection, store.num_cascades(), k, start.elapsed());

    println!("GREEDY ALGORITHM FINISHED!");
    println!("{report}");
    Ok(())
}
