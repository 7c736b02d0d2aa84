//! macros.rs
//! Logging shorthand over `tracing`
//! This Source Code Form is subject to the terms of The GNU General Public License v3.0
//! Copyright 2025 - Guilherme Santos. If a copy of the MPL was not distributed with this
//! file, You can obtain one at https://www.gnu.org/licenses/gpl-3.0.html

/// `debug!(level, fmt, args...)` where level is one of `err`, `warn`, `info`, `debug`, `trace`.
#[macro_export]
macro_rules! debug {
    (err, $($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
    (warn, $($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
    (info, $($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
    (debug, $($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
    (trace, $($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}
