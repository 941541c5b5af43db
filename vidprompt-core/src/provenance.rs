//! Field provenance
//!
//! Provenance is a sparse side-table keyed by parameter name, separate from the parameter values.
//! A parameter may have no entry (its source is unknown) and an entry may exist for a key that
//! has no parameter.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown for a field whose source is unknown.
pub const UNKNOWN_SOURCE: &str = "\u{2014}";

/// Where a parameter's current value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    User,
    Preset,
    Intent,
    Generated,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::User => "user",
            Source::Preset => "preset",
            Source::Intent => "intent",
            Source::Generated => "generated",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    pub source: Source,
    /// Preset or intent id that supplied the value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Set when the user edited a value that came from somewhere else
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<bool>,
}

impl ProvenanceEntry {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            origin: None,
            modified: None,
        }
    }

    pub fn user() -> Self {
        Self::new(Source::User)
    }

    /// The entry written when the user edits a field.
    pub fn user_edit() -> Self {
        Self::user().with_modified(true)
    }

    pub fn preset(origin: impl Into<String>) -> Self {
        Self::new(Source::Preset).with_origin(origin)
    }

    pub fn intent(origin: impl Into<String>) -> Self {
        Self::new(Source::Intent).with_origin(origin)
    }

    pub fn generated() -> Self {
        Self::new(Source::Generated)
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_modified(mut self, modified: bool) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn is_modified(&self) -> bool {
        self.modified == Some(true)
    }

    /// Origin id, treating an empty string as no origin.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref().filter(|o| !o.is_empty())
    }

    /// Compact per-field label: `source`, then ` (origin)` and ` (modified)` when they apply.
    /// A field without an entry shows the unknown-source placeholder.
    pub fn badge(entry: Option<&ProvenanceEntry>) -> String {
        let Some(entry) = entry else {
            return UNKNOWN_SOURCE.to_string();
        };
        let mut label = entry.source.to_string();
        if let Some(origin) = entry.origin() {
            label.push_str(&format!(" ({})", origin));
        }
        if entry.is_modified() {
            label.push_str(" (modified)");
        }
        label
    }
}

/// Ordered map from field name to provenance entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Provenance(IndexMap<String, ProvenanceEntry>);

impl Provenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, entry: ProvenanceEntry) {
        self.0.insert(field.into(), entry);
    }

    pub fn with(mut self, field: impl Into<String>, entry: ProvenanceEntry) -> Self {
        self.insert(field, entry);
        self
    }

    pub fn get(&self, field: &str) -> Option<&ProvenanceEntry> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProvenanceEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose value did not come straight from the user.
    pub fn tracked(&self) -> impl Iterator<Item = (&str, &ProvenanceEntry)> {
        self.iter().filter(|(_, entry)| entry.source != Source::User)
    }
}

impl<K: Into<String>> FromIterator<(K, ProvenanceEntry)> for Provenance {
    fn from_iter<I: IntoIterator<Item = (K, ProvenanceEntry)>>(iter: I) -> Self {
        Provenance(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
