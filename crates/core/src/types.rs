use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a UI select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

impl OptionEntry {
    pub fn new(tag: impl Into<String>) -> Self {
        let value = tag.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Distinct tags, remembered in the order they were first seen.
#[derive(Debug, Default, Clone)]
pub struct TagSet {
    tags: IndexSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the tag was not already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        if self.tags.contains(tag) {
            return false;
        }
        self.tags.insert(tag.to_string())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// First-seen order.
    pub fn into_vec(self) -> Vec<String> {
        self.tags.into_iter().collect()
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut tags = self.tags;
        tags.sort();
        tags.into_iter().collect()
    }
}

/// The fields kept from a watch-list video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedVideo {
    pub title: Value,
    pub length: Value,
    pub video_id: Value,
    pub set_video_id: Value,
    pub channel_url: Value,
    pub thumbnail_url: Value,
}

/// A list element that was not an object and was left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_set_keeps_first_seen_order() {
        let mut tags = TagSet::new();
        assert!(tags.insert("rust"));
        assert!(tags.insert("async"));
        assert!(!tags.insert("rust"));

        assert_eq!(tags.len(), 2);
        assert!(tags.contains("async"));
        assert_eq!(tags.clone().into_vec(), vec!["rust", "async"]);
        assert_eq!(tags.into_sorted_vec(), vec!["async", "rust"]);
    }

    #[test]
    fn sorting_does_not_reintroduce_duplicates() {
        let mut tags = TagSet::new();
        for tag in ["b", "a", "b", "c", "a"] {
            tags.insert(tag);
        }
        assert_eq!(tags.into_sorted_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn option_entry_label_mirrors_value() {
        let entry = OptionEntry::new("Gaming");
        assert_eq!(entry.value, entry.label);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"value":"Gaming","label":"Gaming"}"#
        );
    }
}
