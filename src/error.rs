//! error.rs
//! Error type shared by the loader, the estimator and the selector
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, InfMaxError>;

#[derive(Debug, thiserror::Error)]
pub enum InfMaxError {
    /// Influence was requested over zero cascades.
    #[error("no cascades loaded: influence is undefined over an empty cascade collection")]
    EmptyInput,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl InfMaxError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InfMaxError::Io {
            path: path.into(),
            source,
        }
    }
}
