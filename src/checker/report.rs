// src/checker/report.rs
// =============================================================================
// CheckReport is the result of running the checks: selector -> present?
//
// It keeps entries in the order selectors were checked. Because the selectors
// come in sorted, the JSON output is sorted too.
//
// A selector that appears twice only gets one entry (the later value wins,
// the earlier position is kept).
// =============================================================================

use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    entries: Vec<(String, bool)>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one check, overwriting an earlier one for the
    /// same selector.
    pub fn insert(&mut self, selector: &str, present: bool) {
        match self.entries.iter_mut().find(|(s, _)| s == selector) {
            Some(entry) => entry.1 = present,
            None => self.entries.push((selector.to_string(), present)),
        }
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(s, _)| s == selector)
            .map(|(_, present)| *present)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(s, present)| (s.as_str(), *present))
    }
}

// Serialized as a plain JSON object: {"h1": true, "#missing": false}
impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (selector, present) in &self.entries {
            map.serialize_entry(selector, present)?;
        }
        map.end()
    }
}
