//! Vidtags Core Library
//!
//! Builds `{value, label}` option lists from the tags in a video metadata
//! list, and extracts/merges watch-list exports keyed by title.

pub mod config;
pub mod error;
pub mod format;
pub mod merge;
pub mod record;
pub mod store;
pub mod tags;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{MergeConfig, OptionsConfig};
pub use error::{Result, VidtagsError};
pub use format::{format_preview, format_skipped, pluralize};
pub use merge::{
    ExtractReport, MergeReport, MergeStats, build_lookup, extract_video_data, merge_tags,
    merge_videos, project_video,
};
pub use tags::{
    OptionsReport, OutputOutcome, collect_tags, extract_and_format_tags, format_options,
    tag_values,
};
pub use types::{ExtractedVideo, OptionEntry, SkippedRecord, TagSet};
