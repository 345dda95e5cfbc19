//! Ordered label/value tables with explicit last-wins lookup.
//!
//! ```rust
//! use xstore::LabelTable;
//!
//! let table = LabelTable::from_pairs([("work", "sk-old"), ("home", "sk-home"), ("work", "sk-new")]);
//! assert_eq!(table.lookup("work"), Some("sk-new"));
//! assert_eq!(table.labels(), vec!["work", "home"]);
//! ```

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub label: String,
    pub value: String,
}

impl LabelEntry {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Append-only sequence of entries in write order.
///
/// A label may appear more than once; the most recently appended entry wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<L, V>(pairs: impl IntoIterator<Item = (L, V)>) -> Self
    where
        L: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, value)| LabelEntry::new(label, value))
                .collect(),
        }
    }

    pub fn push(&mut self, entry: LabelEntry) {
        self.entries.push(entry);
    }

    /// Value of the last entry with `label`.
    pub fn lookup(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.label == label)
            .map(|entry| entry.value.as_str())
    }

    /// Distinct labels in order of first appearance.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !labels.contains(&entry.label.as_str()) {
                labels.push(entry.label.as_str());
            }
        }
        labels
    }

    /// Value of the first entry's label, resolved with last-wins.
    pub fn first_value(&self) -> Option<&str> {
        self.entries
            .first()
            .and_then(|entry| self.lookup(&entry.label))
    }

    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .map(|entry| (entry.label.clone(), entry.value.clone()))
            .collect()
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
