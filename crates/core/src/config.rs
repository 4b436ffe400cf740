use std::path::PathBuf;

pub const DEFAULT_VIDEOS_PATH: &str = "../src/data/videos.json";
pub const DEFAULT_CATEGORY_OPTIONS_PATH: &str = "../src/data/categoryOptions.json";
pub const DEFAULT_TOPIC_OPTIONS_PATH: &str = "../src/data/topicOptions.json";

pub const DEFAULT_WATCH_LIST_PATH: &str = "ytwl.json";
pub const DEFAULT_EXTRACTED_PATH: &str = "extracted_videos.json";
pub const DEFAULT_TRANSFORMED_PATH: &str = "transformed_videos.json";
pub const DEFAULT_MERGED_PATH: &str = "merged_videos.json";

/// Where the tag extractor reads from and writes to.
#[derive(Debug, Clone)]
pub struct OptionsConfig {
    pub input: PathBuf,
    pub categories_output: PathBuf,
    pub topics_output: PathBuf,
    pub sort_alphabetically: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_VIDEOS_PATH),
            categories_output: PathBuf::from(DEFAULT_CATEGORY_OPTIONS_PATH),
            topics_output: PathBuf::from(DEFAULT_TOPIC_OPTIONS_PATH),
            sort_alphabetically: true,
        }
    }
}

/// File locations for the watch-list extraction and the title join.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub watch_list: PathBuf,
    pub extracted: PathBuf,
    pub transformed: PathBuf,
    pub merged: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            watch_list: PathBuf::from(DEFAULT_WATCH_LIST_PATH),
            extracted: PathBuf::from(DEFAULT_EXTRACTED_PATH),
            transformed: PathBuf::from(DEFAULT_TRANSFORMED_PATH),
            merged: PathBuf::from(DEFAULT_MERGED_PATH),
        }
    }
}
