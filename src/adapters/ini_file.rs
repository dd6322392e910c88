// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI settings file adapter.
//!
//! This module provides the document driver that reads an INI file and
//! classifies its raw values, plus the two loading conventions used by
//! callers: an absence-returning convention that logs failures, and a
//! validation convention that raises a caller-chosen error type and never
//! logs.

use crate::domain::settings::{SectionSettings, Settings};
use crate::domain::{ListSplitPolicy, Result, SettingValue, TabkitError, ValueParser};
use crate::ports::DiagnosticSink;
use configparser::ini::Ini;
use directories::ProjectDirs;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// A loaded INI settings file with on-demand value classification.
///
/// The document keeps the raw string values exactly as read, in file order,
/// and classifies them through the shared [`ValueParser`] when accessed.
/// Key interpolation is never applied: `%`-style syntax in values stays
/// literal text. Files are read as UTF-8.
///
/// Two result shapes are available from one document: per-key typed lookups
/// with a caller-supplied fallback ([`IniDocument::get_or`]), and a fully
/// classified nested mapping ([`IniDocument::to_settings`]).
///
/// # Examples
///
/// ```rust,no_run
/// use tabkit::adapters::ini_file::IniDocument;
/// use tabkit::adapters::tracing_sink::TracingSink;
/// use tabkit::domain::SettingValue;
///
/// # fn main() -> tabkit::domain::Result<()> {
/// let sink = TracingSink::new();
/// let document = IniDocument::from_file("settings.ini")?;
///
/// let enabled = document.get_or("Export", "enabled", SettingValue::Bool(false), &sink);
/// assert!(enabled.as_bool().is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct IniDocument {
    /// Path the document was read from
    path: PathBuf,
    /// Raw values by section and key, in file order
    sections: IndexMap<String, IndexMap<String, String>>,
    /// Shared value classifier
    parser: ValueParser,
}

impl IniDocument {
    /// Reads a settings file, failing on any problem.
    ///
    /// This is the strict core both loading conventions are built on.
    ///
    /// # Errors
    ///
    /// * [`TabkitError::FileNotFound`] - the path is not an existing regular file
    /// * [`TabkitError::LoadError`] - the file could not be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with_policy(path, ListSplitPolicy::default())
    }

    /// Reads a settings file with an explicit list-split policy.
    ///
    /// # Errors
    ///
    /// Same as [`IniDocument::from_file`].
    pub fn from_file_with_policy<P: AsRef<Path>>(
        path: P,
        list_policy: ListSplitPolicy,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.is_file() {
            return Err(TabkitError::FileNotFound { path });
        }

        // Case-sensitive reader; the crate performs no interpolation.
        let mut ini = Ini::new_cs();
        let raw_map = ini
            .load(&path)
            .map_err(|message| TabkitError::load(&path, message))?;

        let mut sections = IndexMap::new();
        for (section, keys) in raw_map {
            let mut raw_keys = IndexMap::new();
            for (key, value) in keys {
                // A key without a value reads as empty text.
                raw_keys.insert(key, value.unwrap_or_default());
            }
            sections.insert(section, raw_keys);
        }

        Ok(IniDocument {
            path,
            sections,
            parser: ValueParser::with_policy(list_policy),
        })
    }

    /// Reads the settings file from the default OS-appropriate location.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system and looks
    /// for `settings.ini` there.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use tabkit::adapters::ini_file::IniDocument;
    ///
    /// let document = IniDocument::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            TabkitError::invalid("Failed to determine project directories".to_string())
        })?;

        let settings_file = proj_dirs.config_dir().join("settings.ini");
        Self::from_file(settings_file)
    }

    /// Returns the path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns section names in file order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(|name| name.as_str())
    }

    /// Returns the raw, unclassified text of one value.
    pub fn get_raw(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|keys| keys.get(key))
            .map(|value| value.as_str())
    }

    /// Looks up and classifies one value.
    ///
    /// Returns `None` when the section or key is absent. A structured-looking
    /// value that fails to parse degrades per the classification rules and
    /// produces one warning on `sink` naming the section and key.
    pub fn get_structured(
        &self,
        section: &str,
        key: &str,
        sink: &dyn DiagnosticSink,
    ) -> Option<SettingValue> {
        let raw = self.get_raw(section, key)?;
        Some(self.classify(section, key, raw, sink))
    }

    /// Looks up one value, falling back when it is absent.
    ///
    /// A missing section or key is not an error at this level: the
    /// caller-supplied `fallback` is returned instead.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tabkit::adapters::ini_file::IniDocument;
    /// # use tabkit::adapters::tracing_sink::TracingSink;
    /// # use tabkit::domain::SettingValue;
    /// # let sink = TracingSink::new();
    /// # let document = IniDocument::from_file("settings.ini").unwrap();
    /// let retries = document.get_or("Export", "retries", SettingValue::Int(3), &sink);
    /// ```
    pub fn get_or(
        &self,
        section: &str,
        key: &str,
        fallback: SettingValue,
        sink: &dyn DiagnosticSink,
    ) -> SettingValue {
        self.get_structured(section, key, sink).unwrap_or(fallback)
    }

    /// Classifies one whole section, in key order.
    ///
    /// An absent section yields an empty mapping.
    pub fn section_settings(&self, section: &str, sink: &dyn DiagnosticSink) -> SectionSettings {
        let mut settings = SectionSettings::new();
        if let Some(keys) = self.sections.get(section) {
            for (key, raw) in keys {
                settings.insert(key.clone(), self.classify(section, key, raw, sink));
            }
        }
        settings
    }

    /// Classifies the whole document into a nested mapping.
    ///
    /// Sections and keys keep their file order.
    pub fn to_settings(&self, sink: &dyn DiagnosticSink) -> Settings {
        let mut settings = Settings::new();
        for (section, keys) in &self.sections {
            for (key, raw) in keys {
                settings.insert(section, key, self.classify(section, key, raw, sink));
            }
        }
        settings
    }

    fn classify(
        &self,
        section: &str,
        key: &str,
        raw: &str,
        sink: &dyn DiagnosticSink,
    ) -> SettingValue {
        let outcome = self.parser.parse(raw);
        if let Some(warning) = outcome.structural_warning {
            sink.warning(&format!(
                "Cannot parse value for '{}:{}' as structured data: {}",
                section, key, warning
            ));
        }
        outcome.value
    }
}

/// Loads a settings file into a nested mapping, absence-returning convention.
///
/// Any failure is reported once through `sink` at error level and surfaces
/// as `None`; nothing is raised. Call sites that need a typed error should
/// use [`load_document_validated`] instead.
///
/// # Examples
///
/// ```rust,no_run
/// use tabkit::adapters::ini_file::load_settings;
/// use tabkit::adapters::tracing_sink::TracingSink;
///
/// let sink = TracingSink::new();
/// if let Some(settings) = load_settings("settings.ini", &sink) {
///     for (section, keys) in settings.sections() {
///         println!("[{}] {} keys", section, keys.len());
///     }
/// }
/// ```
pub fn load_settings<P: AsRef<Path>>(path: P, sink: &dyn DiagnosticSink) -> Option<Settings> {
    match IniDocument::from_file(path) {
        Ok(document) => Some(document.to_settings(sink)),
        Err(err) => {
            sink.error(&format!("Failed to load settings: {}", err));
            None
        }
    }
}

/// Loads a settings file as a queryable document, absence-returning convention.
///
/// Like [`load_settings`], failures are logged and surface as `None`; a
/// successful load is reported at info level.
pub fn load_document<P: AsRef<Path>>(path: P, sink: &dyn DiagnosticSink) -> Option<IniDocument> {
    match IniDocument::from_file(path.as_ref()) {
        Ok(document) => {
            sink.info(&format!(
                "Settings file '{}' loaded successfully",
                document.path().display()
            ));
            Some(document)
        }
        Err(err) => {
            sink.error(&format!("Failed to load settings: {}", err));
            None
        }
    }
}

/// Loads a settings file, validation convention.
///
/// Failures are raised as the caller's error type and nothing is logged;
/// the caller owns all reporting. The error type only needs a
/// `From<TabkitError>` conversion, so call sites can surface load problems
/// in their own validation taxonomy.
///
/// # Errors
///
/// Whatever `E` converts [`TabkitError::FileNotFound`] and
/// [`TabkitError::LoadError`] into.
///
/// # Examples
///
/// ```rust,no_run
/// use tabkit::adapters::ini_file::{load_document_validated, IniDocument};
/// use tabkit::domain::TabkitError;
///
/// #[derive(Debug)]
/// struct ValidationError(String);
///
/// impl From<TabkitError> for ValidationError {
///     fn from(err: TabkitError) -> Self {
///         ValidationError(err.to_string())
///     }
/// }
///
/// let document: Result<IniDocument, ValidationError> =
///     load_document_validated("settings.ini");
/// ```
pub fn load_document_validated<E, P>(path: P) -> std::result::Result<IniDocument, E>
where
    E: From<TabkitError>,
    P: AsRef<Path>,
{
    IniDocument::from_file(path).map_err(E::from)
}
