//! # odal
//!
//! Configuration files for rigs and tools.
//!
//! Every configuration is a plain serde struct stored as a TOML file at a fixed
//! [`Config::PATH`] relative to a configuration root. A second root, the overlay,
//! may contain a partial copy of the same file. Keys present in the overlay replace
//! the keys of the main file, tables are merged recursively.
//!
//! ```no_run
//! use odal::Config;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! struct Gait {
//!     step_height: f64,
//! }
//!
//! impl Config for Gait {
//!     const PATH: &'static str = "gait.toml";
//! }
//!
//! let gait = Gait::load_with_overlay("config/", "config/overlay/ers7/").unwrap();
//! ```
use std::{fs, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use toml::{Table, Value};

mod error;

pub use error::{ConfigKind, Error, ErrorKind, Result};

/// A configuration that can be loaded from a main root and an optional overlay root.
pub trait Config: Serialize + DeserializeOwned {
    /// Path of the file, relative to the configuration root.
    const PATH: &'static str;

    /// Load the configuration from `root`.
    fn load(root: impl AsRef<Path>) -> Result<Self> {
        let main = read_table::<Self>(root.as_ref(), ConfigKind::Main)?;
        from_table(main)
    }

    /// Load the configuration from `root`, with the file in `overlay` merged on top.
    fn load_with_overlay(root: impl AsRef<Path>, overlay: impl AsRef<Path>) -> Result<Self> {
        let main = read_table::<Self>(root.as_ref(), ConfigKind::Main)?;
        let overlay = read_table::<Self>(overlay.as_ref(), ConfigKind::Overlay)?;

        from_table(merge(main, overlay))
    }

    /// Store the complete configuration in `root`.
    fn store(&self, root: impl AsRef<Path>) -> Result<()> {
        let table = to_table(self)?;
        write_table::<Self>(root.as_ref(), &table)
    }

    /// Store only the keys in which `self` differs from `main` in `overlay`.
    fn save_as_overlay(&self, main: &Self, overlay: impl AsRef<Path>) -> Result<()> {
        let diff = extract_diff(&to_table(main)?, &to_table(self)?);
        write_table::<Self>(overlay.as_ref(), &diff)
    }
}

/// Merge `overlay` on top of `main`.
///
/// Tables present in both are merged recursively, any other value in `overlay`
/// replaces the value in `main`.
#[must_use]
pub fn merge(main: Table, overlay: Table) -> Table {
    let mut merged = main;

    for (key, value) in overlay {
        let value = match (merged.remove(&key), value) {
            (Some(Value::Table(main)), Value::Table(overlay)) => Value::Table(merge(main, overlay)),
            (_, value) => value,
        };
        merged.insert(key, value);
    }

    merged
}

/// Extract the keys of `changed` that differ from `main`.
///
/// Nested tables only end up in the result if they contain at least one change.
#[must_use]
pub fn extract_diff(main: &Table, changed: &Table) -> Table {
    let mut diff = Table::new();

    for (key, value) in changed {
        match (main.get(key), value) {
            (Some(Value::Table(main)), Value::Table(changed)) => {
                let nested = extract_diff(main, changed);
                if !nested.is_empty() {
                    diff.insert(key.clone(), Value::Table(nested));
                }
            }
            (Some(original), value) if original == value => {}
            (_, value) => {
                diff.insert(key.clone(), value.clone());
            }
        }
    }

    diff
}

fn name<T>() -> &'static str {
    std::any::type_name::<T>()
}

fn read_table<T: Config>(root: &Path, config_kind: ConfigKind) -> Result<Table> {
    let path = root.join(T::PATH);
    tracing::debug!("reading {config_kind} config `{}`", path.display());

    let contents = fs::read_to_string(&path).map_err(|source| {
        Error::new(
            name::<T>(),
            ErrorKind::Load {
                path: path.display().to_string(),
                config_kind,
                source,
            },
        )
    })?;

    contents.parse::<Table>().map_err(|source| {
        Error::new(
            name::<T>(),
            ErrorKind::Parse {
                path: path.display().to_string(),
                config_kind,
                source,
            },
        )
    })
}

fn write_table<T: Config>(root: &Path, table: &Table) -> Result<()> {
    let path = root.join(T::PATH);
    let contents = toml::to_string_pretty(table)
        .map_err(|e| Error::new(name::<T>(), ErrorKind::Serialize(e)))?;

    fs::create_dir_all(root)
        .and_then(|()| fs::write(&path, contents))
        .map_err(|source| {
            Error::new(
                name::<T>(),
                ErrorKind::Store {
                    path: path.display().to_string(),
                    source,
                },
            )
        })
}

fn from_table<T: Config>(table: Table) -> Result<T> {
    Value::Table(table)
        .try_into()
        .map_err(|e| Error::new(name::<T>(), ErrorKind::Deserialize(e)))
}

fn to_table<T: Config>(config: &T) -> Result<Table> {
    match Value::try_from(config) {
        Ok(Value::Table(table)) => Ok(table),
        Ok(_) => Err(Error::new(name::<T>(), ErrorKind::NotATable)),
        Err(e) => Err(Error::new(name::<T>(), ErrorKind::Serialize(e))),
    }
}

#[cfg(test)]
mod tests;
