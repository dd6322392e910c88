// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory settings document.
//!
//! This module provides the `Settings` type, an ordered nested mapping from
//! section name to key to typed value. Section and key iteration order
//! matches the order of first appearance in the source file.

use crate::domain::setting_value::SettingValue;
use indexmap::IndexMap;
use serde::Serialize;

/// One section of a settings document: key → typed value, in file order.
pub type SectionSettings = IndexMap<String, SettingValue>;

/// A fully classified settings document.
///
/// `Settings` is constructed once per load, is never mutated afterwards by
/// the loading code, and is discarded when the caller is done with it.
/// Re-reading a file produces a fresh, independent document.
///
/// # Examples
///
/// ```
/// use tabkit::domain::settings::Settings;
/// use tabkit::domain::setting_value::SettingValue;
///
/// let mut settings = Settings::new();
/// settings.insert("Export", "enabled", SettingValue::Bool(true));
///
/// assert_eq!(settings.get("Export", "enabled"), Some(&SettingValue::Bool(true)));
/// assert!(settings.get("Export", "missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Settings {
    sections: IndexMap<String, SectionSettings>,
}

impl Settings {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, creating the section on first use.
    ///
    /// Insertion order is preserved for both sections and keys.
    pub fn insert(&mut self, section: &str, key: &str, value: SettingValue) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Returns one section, if present.
    pub fn section(&self, section: &str) -> Option<&SectionSettings> {
        self.sections.get(section)
    }

    /// Returns one value, if both section and key are present.
    ///
    /// Keys are case-sensitive.
    pub fn get(&self, section: &str, key: &str) -> Option<&SettingValue> {
        self.sections.get(section).and_then(|keys| keys.get(key))
    }

    /// Iterates sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &SectionSettings)> {
        self.sections.iter().map(|(name, keys)| (name.as_str(), keys))
    }

    /// Returns the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
