//! loader/mod.rs
//! Reads a directory of edge-list files, one cascade per file
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use crate::debug;
use crate::error::{InfMaxError, Result};
use crate::graph::{Cascade, CascadeStore, NodeId};

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// File extension (without the dot) a cascade file must have.
    pub extension: String,
    /// Lines starting with any of these are skipped.
    pub comment_markers: Vec<char>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            extension: "txt".into(),
            comment_markers: vec!['#', '%'],
        }
    }
}

/// Loads every matching file under `dir` as one cascade.
///
/// Files are read in sorted path order so the cascade order is reproducible.
pub fn load_dir(dir: impl AsRef<Path>, config: &LoaderConfig) -> Result<CascadeStore> {
    let mut store = CascadeStore::new();
    for path in cascade_files(dir.as_ref(), config)? {
        let cascade = load_file(&path, config)?;
        if cascade.num_edges() == 0 {
            debug!(warn, "{} holds no edges", path.display());
        }
        debug!(
            debug,
            "{}: {} nodes, {} edges",
            path.display(),
            cascade.num_nodes(),
            cascade.num_edges()
        );
        store.add_cascade(cascade);
    }
    Ok(store)
}

/// Matching files directly under `dir`, sorted.
pub fn cascade_files(dir: &Path, config: &LoaderConfig) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| InfMaxError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| InfMaxError::io(dir, e))?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext == config.extension.as_str());
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn load_file(path: &Path, config: &LoaderConfig) -> Result<Cascade> {
    let file = File::open(path).map_err(|e| InfMaxError::io(path, e))?;
    parse_cascade(BufReader::new(file), path, config)
}

/// Parses `from to` lines. Columns past the second are ignored.
pub fn parse_cascade<R: BufRead>(reader: R, origin: &Path, config: &LoaderConfig) -> Result<Cascade> {
    let mut cascade = Cascade::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InfMaxError::io(origin, e))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with(config.comment_markers.as_slice()) {
            continue;
        }

        let (from, to) = parse_edge(line).map_err(|message| InfMaxError::Parse {
            path: origin.to_path_buf(),
            line: idx + 1,
            message,
        })?;
        cascade.add_edge(from, to);
    }

    Ok(cascade)
}

fn parse_edge(line: &str) -> std::result::Result<(NodeId, NodeId), String> {
    let mut fields = line.split_whitespace();
    let (Some(from), Some(to)) = (fields.next(), fields.next()) else {
        return Err(format!("expected `from to`, got {line:?}"));
    };
    let from = from
        .parse::<NodeId>()
        .map_err(|e| format!("bad source node {from:?}: {e}"))?;
    let to = to
        .parse::<NodeId>()
        .map_err(|e| format!("bad target node {to:?}: {e}"))?;
    Ok((from, to))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<Cascade> {
        parse_cascade(Cursor::new(text), Path::new("inline.txt"), &LoaderConfig::default())
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let cascade = parse("# header\n% other\n\n1 2\n  \n1 3\n2 4\n").unwrap();

        assert_eq!(cascade.num_edges(), 3);
        assert_eq!(cascade.successors(&1), [2, 3]);
        assert_eq!(cascade.successors(&2), [4]);
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        let cascade = parse("1\t2\t1700000000\n").unwrap();

        assert_eq!(cascade.successors(&1), [2]);
    }

    #[test]
    fn test_parse_reports_line_number() {
        let err = parse("1 2\n# ok\n3\n").unwrap_err();

        match err {
            InfMaxError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(matches!(parse("a b\n"), Err(InfMaxError::Parse { .. })));
    }

    #[test]
    fn test_load_dir_reads_sorted_txt_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "3 4\n").unwrap();
        fs::write(dir.path().join("a.txt"), "# cascade a\n1 2\n2 3\n").unwrap();
        fs::write(dir.path().join("notes.md"), "9 9\n").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let store = load_dir(dir.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(store.num_cascades(), 2);
        assert_eq!(store.cascades()[0].num_edges(), 2);
        assert_eq!(store.cascades()[1].successors(&3), [4]);
        let universe: Vec<NodeId> = store.universe().iter().copied().collect();
        assert_eq!(universe, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_load_dir_keeps_empty_cascade() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "1 2\n").unwrap();
        fs::write(dir.path().join("b.txt"), "# nothing here\n").unwrap();

        let store = load_dir(dir.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(store.num_cascades(), 2);
    }

    #[test]
    fn test_load_dir_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.edges"), "1 2\n").unwrap();
        fs::write(dir.path().join("b.txt"), "3 4\n").unwrap();

        let config = LoaderConfig {
            extension: "edges".into(),
            ..LoaderConfig::default()
        };
        let store = load_dir(dir.path(), &config).unwrap();
        assert_eq!(store.num_cascades(), 1);
        assert!(store.universe().contains(&1));
    }

    #[test]
    fn test_load_dir_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let err = load_dir(&missing, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, InfMaxError::Io { .. }));
    }
}
