use serde_json::Value;

use crate::types::SkippedRecord;

const PREVIEW_MAX_CHARS: usize = 80;

/// Compact one-line rendering of a JSON value, cut at a char boundary
pub fn format_preview(value: &Value) -> String {
    let compact = value.to_string();
    if compact.chars().count() <= PREVIEW_MAX_CHARS {
        return compact;
    }
    let mut cut: String = compact.chars().take(PREVIEW_MAX_CHARS - 1).collect();
    cut.push('…');
    cut
}

/// Warning line for a skipped list element
pub fn format_skipped(skipped: &SkippedRecord) -> String {
    format!(
        "Skipping item {} in list that is not an object: {}",
        skipped.index, skipped.preview
    )
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn long_previews_are_truncated() {
        let long = json!("x".repeat(200));
        let preview = format_preview(&long);
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
        assert!(preview.ends_with('…'));

        assert_eq!(format_preview(&json!("not-an-object")), "\"not-an-object\"");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "category", "categories"), "1 category");
        assert_eq!(pluralize(0, "topic", "topics"), "0 topics");
    }
}
