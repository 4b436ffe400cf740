use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{
    config::OptionsConfig,
    error::Result,
    format::format_preview,
    record::{as_record, list_field},
    store::{ensure_parent_dir, read_list, write_pretty},
    types::{OptionEntry, SkippedRecord, TagSet},
};

pub const CATEGORIES_FIELD: &str = "categories";
pub const TOPICS_FIELD: &str = "topics";

/// Tags gathered from one pass over a video list.
#[derive(Debug, Default)]
pub struct CollectedTags {
    pub categories: TagSet,
    pub topics: TagSet,
    pub records: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Result of writing one option file.
#[derive(Debug)]
pub struct OutputOutcome {
    pub path: PathBuf,
    pub entries: usize,
    pub created_dir: Option<PathBuf>,
    pub result: Result<()>,
}

impl OutputOutcome {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub struct OptionsReport {
    pub records: usize,
    pub skipped: Vec<SkippedRecord>,
    pub categories: OutputOutcome,
    pub topics: OutputOutcome,
}

impl OptionsReport {
    pub fn all_written(&self) -> bool {
        self.categories.is_written() && self.topics.is_written()
    }
}

/// Trimmed, non-empty string entries of a tag list; everything else is dropped.
pub fn tag_values(list: &[Value]) -> impl Iterator<Item = &str> {
    list.iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}

fn add_field_tags(tags: &mut TagSet, record: &Map<String, Value>, field: &str) {
    for tag in tag_values(list_field(record, field)) {
        tags.insert(tag);
    }
}

/// Gather unique categories and topics across every object in `records`.
///
/// Non-object elements are recorded in `skipped` and otherwise ignored. A
/// missing or mistyped field only affects that field of that record.
pub fn collect_tags(records: &[Value]) -> CollectedTags {
    let mut collected = CollectedTags::default();

    for (index, item) in records.iter().enumerate() {
        let Some(record) = as_record(item) else {
            collected.skipped.push(SkippedRecord {
                index,
                preview: format_preview(item),
            });
            continue;
        };

        collected.records += 1;
        add_field_tags(&mut collected.categories, record, CATEGORIES_FIELD);
        add_field_tags(&mut collected.topics, record, TOPICS_FIELD);
    }

    collected
}

pub fn order_tags(tags: TagSet, sort_alphabetically: bool) -> Vec<String> {
    if sort_alphabetically {
        tags.into_sorted_vec()
    } else {
        tags.into_vec()
    }
}

pub fn format_options(tags: Vec<String>) -> Vec<OptionEntry> {
    tags.into_iter().map(OptionEntry::new).collect()
}

async fn write_options(path: &Path, entries: &[OptionEntry]) -> OutputOutcome {
    let mut created_dir = None;
    let result = async {
        if ensure_parent_dir(path).await? {
            created_dir = path.parent().map(Path::to_path_buf);
        }
        write_pretty(path, entries).await
    }
    .await;

    OutputOutcome {
        path: path.to_path_buf(),
        entries: entries.len(),
        created_dir,
        result,
    }
}

/// Read a video list and write its categories and topics as option lists.
///
/// A read failure returns `Err` before anything is written. Each output is
/// attempted on its own, so a failed categories write still lets the topics
/// file through; check [`OptionsReport::all_written`].
pub async fn extract_and_format_tags(config: &OptionsConfig) -> Result<OptionsReport> {
    let records = read_list(&config.input).await?;
    let collected = collect_tags(&records);

    let categories = format_options(order_tags(collected.categories, config.sort_alphabetically));
    let topics = format_options(order_tags(collected.topics, config.sort_alphabetically));

    let categories = write_options(&config.categories_output, &categories).await;
    let topics = write_options(&config.topics_output, &topics).await;

    Ok(OptionsReport {
        records: collected.records,
        skipped: collected.skipped,
        categories,
        topics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_values_drops_blank_and_non_strings() {
        let list = json!(["  rust ", "", "   ", 42, null, ["nested"], "async"]);
        let values: Vec<&str> = tag_values(list.as_array().unwrap()).collect();
        assert_eq!(values, vec!["rust", "async"]);
    }

    #[test]
    fn malformed_records_are_skipped_and_trimmed_duplicates_collapse() {
        let records = json!([
            {"categories": ["a"]},
            "not-an-object",
            {"categories": ["b", " a "]}
        ]);
        let collected = collect_tags(records.as_array().unwrap());

        assert_eq!(collected.records, 2);
        assert_eq!(collected.skipped.len(), 1);
        assert_eq!(collected.skipped[0].index, 1);
        assert_eq!(
            format_options(order_tags(collected.categories, true)),
            vec![OptionEntry::new("a"), OptionEntry::new("b")]
        );
    }

    #[test]
    fn wrong_field_type_only_affects_that_field() {
        let records = json!([
            {"categories": "Music", "topics": ["Guitar"]},
            {"categories": ["Music"], "topics": {"x": 1}}
        ]);
        let collected = collect_tags(records.as_array().unwrap());

        assert!(collected.skipped.is_empty());
        assert_eq!(collected.categories.into_vec(), vec!["Music"]);
        assert_eq!(collected.topics.into_vec(), vec!["Guitar"]);
    }

    #[test]
    fn unsorted_order_is_first_seen() {
        let records = json!([{"topics": ["zeta", "alpha"]}, {"topics": ["mid", "zeta"]}]);
        let collected = collect_tags(records.as_array().unwrap());
        assert_eq!(order_tags(collected.topics, false), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn sorting_is_lexicographic() {
        let mut tags = TagSet::new();
        for tag in ["beta", "Alpha", "alpha", "Ödland", "Zulu"] {
            tags.insert(tag);
        }
        assert_eq!(
            order_tags(tags, true),
            vec!["Alpha", "Zulu", "alpha", "beta", "Ödland"]
        );
    }
}
