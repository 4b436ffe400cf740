use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use vidtags_core::{
    MergeConfig, OptionsConfig, OutputOutcome, SkippedRecord, config, extract_and_format_tags,
    extract_video_data, format_skipped, merge_videos, pluralize,
};

#[derive(Parser)]
#[command(name = "vidtags")]
#[command(about = "Build tag option lists from video metadata and merge tags into watch-list exports")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write unique categories and topics as {value, label} option lists
    Options(OptionsArgs),
    /// Slim a watch-list export down to the fields the UI needs
    Extract(ExtractArgs),
    /// Join categories and topics into the extracted videos by title
    Merge(MergeArgs),
}

#[derive(Args)]
struct OptionsArgs {
    /// Video list to read tags from
    #[arg(short, long, default_value = config::DEFAULT_VIDEOS_PATH)]
    input: PathBuf,

    /// Where to write the category options
    #[arg(long, default_value = config::DEFAULT_CATEGORY_OPTIONS_PATH)]
    categories_out: PathBuf,

    /// Where to write the topic options
    #[arg(long, default_value = config::DEFAULT_TOPIC_OPTIONS_PATH)]
    topics_out: PathBuf,

    /// Keep first-seen order instead of sorting alphabetically
    #[arg(long)]
    no_sort: bool,
}

impl From<OptionsArgs> for OptionsConfig {
    fn from(args: OptionsArgs) -> Self {
        OptionsConfig {
            input: args.input,
            categories_output: args.categories_out,
            topics_output: args.topics_out,
            sort_alphabetically: !args.no_sort,
        }
    }
}

#[derive(Args)]
struct ExtractArgs {
    /// Watch-list export with a "videos" array
    #[arg(short, long, default_value = config::DEFAULT_WATCH_LIST_PATH)]
    input: PathBuf,

    #[arg(short, long, default_value = config::DEFAULT_EXTRACTED_PATH)]
    output: PathBuf,
}

impl From<ExtractArgs> for MergeConfig {
    fn from(args: ExtractArgs) -> Self {
        MergeConfig {
            watch_list: args.input,
            extracted: args.output,
            ..MergeConfig::default()
        }
    }
}

#[derive(Args)]
struct MergeArgs {
    /// Extracted video list to enrich
    #[arg(long, default_value = config::DEFAULT_EXTRACTED_PATH)]
    videos: PathBuf,

    /// Records carrying "title", "categories" and "topics"
    #[arg(long, default_value = config::DEFAULT_TRANSFORMED_PATH)]
    extra: PathBuf,

    #[arg(short, long, default_value = config::DEFAULT_MERGED_PATH)]
    output: PathBuf,
}

impl From<MergeArgs> for MergeConfig {
    fn from(args: MergeArgs) -> Self {
        MergeConfig {
            extracted: args.videos,
            transformed: args.extra,
            merged: args.output,
            ..MergeConfig::default()
        }
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{:.1}s", secs)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn print_error(e: &dyn std::fmt::Display) {
    eprintln!("{} {}", style("Error:").red().bold(), e);
}

fn print_skipped(skipped: &[SkippedRecord]) {
    for record in skipped {
        println!(
            "{} {}",
            style("Warning:").yellow().bold(),
            format_skipped(record)
        );
    }
}

/// Prints one line per output; returns whether it was written.
fn print_outcome(outcome: &OutputOutcome, singular: &str, plural: &str) -> bool {
    if let Some(dir) = &outcome.created_dir {
        println!(
            "{} Created directory: {}",
            style("✓").green().bold(),
            style(dir.display()).dim()
        );
    }

    match &outcome.result {
        Ok(()) => {
            println!(
                "{} Saved {} to {}",
                style("✓").green().bold(),
                pluralize(outcome.entries, &format!("unique {singular}"), &format!("unique {plural}")),
                style(outcome.path.display()).cyan()
            );
            true
        }
        Err(e) => {
            print_error(e);
            false
        }
    }
}

async fn run_options(args: OptionsArgs) -> bool {
    let config: OptionsConfig = args.into();
    let step_start = Instant::now();

    let spinner = create_spinner(&format!("Reading {}...", config.input.display()));
    let report = match extract_and_format_tags(&config).await {
        Ok(report) => report,
        Err(e) => {
            spinner.finish_and_clear();
            print_error(&e);
            return false;
        }
    };
    spinner.finish_with_message(format!(
        "{} Read {} {}",
        style("✓").green().bold(),
        pluralize(report.records, "record", "records"),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));

    print_skipped(&report.skipped);
    let categories_ok = print_outcome(&report.categories, "category", "categories");
    let topics_ok = print_outcome(&report.topics, "topic", "topics");
    categories_ok && topics_ok
}

async fn run_extract(args: ExtractArgs) -> bool {
    let config: MergeConfig = args.into();
    match extract_video_data(&config).await {
        Ok(report) => {
            print_skipped(&report.skipped);
            println!(
                "{} Extracted {} to {}",
                style("✓").green().bold(),
                pluralize(report.extracted, "video", "videos"),
                style(config.extracted.display()).cyan()
            );
            true
        }
        Err(e) => {
            print_error(&e);
            false
        }
    }
}

async fn run_merge(args: MergeArgs) -> bool {
    let config: MergeConfig = args.into();
    match merge_videos(&config).await {
        Ok(report) => {
            println!(
                "{} Merged {} ({} without a title match) into {}",
                style("✓").green().bold(),
                pluralize(report.stats.matched, "video", "videos"),
                report.stats.unmatched,
                style(config.merged.display()).cyan()
            );
            true
        }
        Err(e) => {
            print_error(&e);
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    println!(
        "\n{}  {}\n",
        style("vidtags").cyan().bold(),
        style("Video Tag Tools").dim()
    );

    let ok = match cli.command {
        Command::Options(args) => run_options(args).await,
        Command::Extract(args) => run_extract(args).await,
        Command::Merge(args) => run_merge(args).await,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
