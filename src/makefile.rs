//! In-place rewriting of `KEY = value` assignments in a project Makefile.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, trace};
use regex::{NoExpand, Regex};
use std::fmt;
use std::fs;
use std::path::Path;

/// Makefile settings that may be overridden when scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    Device,
    Clock,
    Programmer,
    Fuses,
}

impl SettingKey {
    /// All keys, in the order they are applied.
    pub const ALL: [SettingKey; 4] =
        [SettingKey::Device, SettingKey::Clock, SettingKey::Programmer, SettingKey::Fuses];

    /// Variable name as written in the Makefile.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Device => "DEVICE",
            SettingKey::Clock => "CLOCK",
            SettingKey::Programmer => "PROGRAMMER",
            SettingKey::Fuses => "FUSES",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values supplied by the caller for a subset of [`SettingKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: IndexMap<SettingKey, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from optional values; `None` and empty values contribute no entry.
    pub fn from_options(
        device: Option<String>,
        clock: Option<String>,
        programmer: Option<String>,
        fuses: Option<String>,
    ) -> Self {
        let mut overrides = Self::new();
        for (key, value) in SettingKey::ALL.into_iter().zip([device, clock, programmer, fuses]) {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                overrides.set(key, value);
            }
        }
        overrides
    }

    pub fn set<S: Into<String>>(&mut self, key: SettingKey, value: S) {
        self.values.insert(key, value.into());
        self.values.sort_keys();
    }

    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Entries in application order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

fn assignment_pattern(key: &str) -> Result<Regex> {
    Regex::new(&format!(r"(?m)^{}[ \t]*=[ \t]*.*$", regex::escape(key))).map_err(Error::RegexError)
}

/// Replaces the first `KEY = ...` line of `content` with `KEY = value`.
///
/// Returns `None` when no line assigns `key`. The value is inserted literally.
pub fn substitute(content: &str, key: &str, value: &str) -> Result<Option<String>> {
    let pattern = assignment_pattern(key)?;
    if !pattern.is_match(content) {
        return Ok(None);
    }
    let line = format!("{} = {}", key, value);
    Ok(Some(pattern.replacen(content, 1, NoExpand(&line)).into_owned()))
}

/// Applies `overrides` to the Makefile at `path`.
///
/// Each substitution is written back before the next key is tried, so a
/// failing key leaves the earlier ones applied.
///
/// # Errors
/// * `Error::KeyNotFound` for the first key without an assignment line
/// * `Error::IoError` if the file cannot be read or written
pub fn apply_overrides<P: AsRef<Path>>(path: P, overrides: &Overrides) -> Result<()> {
    let path = path.as_ref();
    if overrides.is_empty() {
        return Ok(());
    }

    let mut content = fs::read_to_string(path)?;
    for (key, value) in overrides.iter() {
        trace!("Setting {} = {} in {}", key, value, path.display());
        content = substitute(&content, key.as_str(), value)?.ok_or_else(|| {
            Error::KeyNotFound { key: key.to_string(), file: path.to_path_buf() }
        })?;
        fs::write(path, &content)?;
        debug!("Updated {} in {}", key, path.display());
    }
    Ok(())
}
