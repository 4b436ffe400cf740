use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{
    config::MergeConfig,
    error::{Result, VidtagsError},
    format::format_preview,
    record::{Step, as_record, describe, path_or_null},
    store::{ensure_parent_dir, expect_object, read_document, read_list, write_pretty},
    tags::{CATEGORIES_FIELD, TOPICS_FIELD},
    types::{ExtractedVideo, SkippedRecord},
};

pub const VIDEOS_FIELD: &str = "videos";
pub const TITLE_FIELD: &str = "title";

#[derive(Debug)]
pub struct ExtractReport {
    pub extracted: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// How many videos found a match during the join.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub matched: usize,
    pub unmatched: usize,
}

#[derive(Debug)]
pub struct MergeReport {
    pub stats: MergeStats,
    pub lookup_size: usize,
}

/// Pull the fields we keep out of a watch-list video. Missing paths become `null`.
pub fn project_video(video: &Value) -> ExtractedVideo {
    ExtractedVideo {
        title: path_or_null(video, &[Step::Key("titleLong")]),
        length: path_or_null(video, &[Step::Key("timeShort")]),
        video_id: path_or_null(video, &[Step::Key("id")]),
        set_video_id: path_or_null(video, &[Step::Key("setVideoId")]),
        channel_url: path_or_null(video, &[Step::Key("channel"), Step::Key("url")]),
        thumbnail_url: path_or_null(
            video,
            &[Step::Key("thumbnails"), Step::Index(0), Step::Key("url")],
        ),
    }
}

/// Project every object in the watch list's `videos` array.
pub fn project_videos(videos: &[Value]) -> (Vec<ExtractedVideo>, Vec<SkippedRecord>) {
    let mut extracted = Vec::with_capacity(videos.len());
    let mut skipped = Vec::new();

    for (index, video) in videos.iter().enumerate() {
        if as_record(video).is_none() {
            skipped.push(SkippedRecord {
                index,
                preview: format_preview(video),
            });
            continue;
        }
        extracted.push(project_video(video));
    }

    (extracted, skipped)
}

/// Read the watch-list export and write the slimmed-down video list to
/// `config.extracted`.
pub async fn extract_video_data(config: &MergeConfig) -> Result<ExtractReport> {
    let input = config.watch_list.as_path();
    let output = config.extracted.as_path();
    let document = read_document(input).await?;
    let mut watch_list = expect_object(input, document)?;

    let videos = match watch_list.remove(VIDEOS_FIELD) {
        Some(Value::Array(videos)) => videos,
        other => {
            return Err(VidtagsError::UnexpectedShape {
                path: input.to_path_buf(),
                expected: "a 'videos' list",
                found: other.as_ref().map(describe).unwrap_or("no 'videos' key"),
            });
        }
    };

    let (extracted, skipped) = project_videos(&videos);

    ensure_parent_dir(output).await?;
    write_pretty(output, &extracted).await?;

    Ok(ExtractReport {
        extracted: extracted.len(),
        skipped,
    })
}

/// Index records by their string `title`. A later duplicate replaces an earlier one.
pub fn build_lookup(extra: &[Value]) -> HashMap<&str, &Map<String, Value>> {
    extra
        .iter()
        .filter_map(as_record)
        .filter_map(|record| {
            let title = record.get(TITLE_FIELD)?.as_str()?;
            Some((title, record))
        })
        .collect()
}

fn list_or_empty(record: &Map<String, Value>, key: &str) -> Value {
    record
        .get(key)
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()))
}

/// Copy `categories` and `topics` from the matching lookup record into each video.
///
/// Matched videos take the match's fields, defaulting to `[]`. Unmatched
/// videos keep whatever they already carry and get `[]` for anything missing.
pub fn merge_tags(videos: &mut [Value], lookup: &HashMap<&str, &Map<String, Value>>) -> MergeStats {
    let mut stats = MergeStats::default();

    for video in videos.iter_mut() {
        let Some(record) = video.as_object_mut() else {
            continue;
        };

        let matched = record
            .get(TITLE_FIELD)
            .and_then(Value::as_str)
            .and_then(|title| lookup.get(title));

        match matched {
            Some(found) => {
                stats.matched += 1;
                record.insert(CATEGORIES_FIELD.into(), list_or_empty(found, CATEGORIES_FIELD));
                record.insert(TOPICS_FIELD.into(), list_or_empty(found, TOPICS_FIELD));
            }
            None => {
                stats.unmatched += 1;
                for field in [CATEGORIES_FIELD, TOPICS_FIELD] {
                    record
                        .entry(field)
                        .or_insert_with(|| Value::Array(Vec::new()));
                }
            }
        }
    }

    stats
}

/// Join the extracted videos with the transformed tag data and save the result.
pub async fn merge_videos(config: &MergeConfig) -> Result<MergeReport> {
    let mut videos = read_list(&config.extracted).await?;
    let extra = read_list(&config.transformed).await?;

    let lookup = build_lookup(&extra);
    let stats = merge_tags(&mut videos, &lookup);

    ensure_parent_dir(&config.merged).await?;
    write_pretty(&config.merged, &videos).await?;

    Ok(MergeReport {
        stats,
        lookup_size: lookup.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projection_defaults_missing_paths_to_null() {
        let video = json!({
            "titleLong": "Intro to Rust",
            "timeShort": "12:34",
            "id": "abc",
            "channel": {"url": "/@rustlang"},
            "thumbnails": []
        });
        let projected = project_video(&video);

        assert_eq!(projected.title, json!("Intro to Rust"));
        assert_eq!(projected.channel_url, json!("/@rustlang"));
        assert_eq!(projected.set_video_id, Value::Null);
        assert_eq!(projected.thumbnail_url, Value::Null);
    }

    #[test]
    fn projection_reads_first_thumbnail() {
        let video = json!({"thumbnails": [{"url": "hq.jpg"}, {"url": "lq.jpg"}]});
        assert_eq!(project_video(&video).thumbnail_url, json!("hq.jpg"));
    }

    #[test]
    fn join_fills_matches_and_defaults_the_rest() {
        let extra = json!([{"title": "A", "categories": ["c1"]}]);
        let lookup = build_lookup(extra.as_array().unwrap());
        let mut videos = vec![json!({"title": "A"}), json!({"title": "B"})];

        let stats = merge_tags(&mut videos, &lookup);

        assert_eq!(stats, MergeStats { matched: 1, unmatched: 1 });
        assert_eq!(
            Value::Array(videos),
            json!([
                {"title": "A", "categories": ["c1"], "topics": []},
                {"title": "B", "categories": [], "topics": []}
            ])
        );
    }

    #[test]
    fn duplicate_titles_last_write_wins() {
        let extra = json!([
            {"title": "A", "topics": ["old"]},
            {"title": "A", "topics": ["new"]},
            {"topics": ["untitled"]}
        ]);
        let lookup = build_lookup(extra.as_array().unwrap());
        assert_eq!(lookup.len(), 1);

        let mut videos = vec![json!({"title": "A"})];
        merge_tags(&mut videos, &lookup);
        assert_eq!(videos[0]["topics"], json!(["new"]));
    }

    #[test]
    fn unmatched_keeps_existing_tags() {
        let lookup = HashMap::new();
        let mut videos = vec![json!({"title": "C", "categories": ["kept"]})];
        merge_tags(&mut videos, &lookup);
        assert_eq!(videos[0], json!({"title": "C", "categories": ["kept"], "topics": []}));
    }
}
