//! Static fixture data.
//!
//! A fixture directory holds four JSON files:
//!
//! | File                | Contents                         |
//! |---------------------|----------------------------------|
//! | `simple-array.json` | numbers mixed with falsy values  |
//! | `yoga.json`         | yoga class records               |
//! | `members.json`      | member records                   |
//! | `new-member.json`   | `[key, value]` pairs             |
//!
//! The loaded [`Fixtures`] value is handed to the collection functions by
//! the caller; nothing here is global.

use crate::collections::{KeyValuePair, Member, YogaClass};
use crate::error::{Result, ResultExt as _, RosterError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

pub const SIMPLE_ARRAY_FILE: &str = "simple-array.json";
pub const YOGA_FILE: &str = "yoga.json";
pub const MEMBERS_FILE: &str = "members.json";
pub const NEW_MEMBER_FILE: &str = "new-member.json";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub simple_array: Vec<Value>,
    pub yoga_classes: Vec<YogaClass>,
    pub members: Vec<Member>,
    pub new_member: Vec<KeyValuePair>,
}

impl Fixtures {
    /// Loads all four fixture files from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::InvalidPath`] if `dir` is not a directory, and
    /// the error of the first file that cannot be read or parsed otherwise.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(RosterError::InvalidPath(format!(
                "fixture directory {} does not exist",
                dir.display()
            )));
        }

        let fixtures = Self {
            simple_array: load_json(&dir.join(SIMPLE_ARRAY_FILE))?,
            yoga_classes: load_json(&dir.join(YOGA_FILE))?,
            members: load_json(&dir.join(MEMBERS_FILE))?,
            new_member: load_json(&dir.join(NEW_MEMBER_FILE))?,
        };

        log::info!(
            "Loaded fixtures from {}: {} classes, {} members",
            dir.display(),
            fixtures.yoga_classes.len(),
            fixtures.members.len()
        );
        Ok(fixtures)
    }
}

/// Reads and parses a single JSON fixture.
///
/// # Errors
///
/// I/O failures come back as [`RosterError::Io`], parse failures as
/// [`RosterError::Fixture`]. Both mention `path`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| path.display().to_string())
}
