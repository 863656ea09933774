// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::{Args, Parser, Subcommand};
use safepose::Arm;
use safepose::config::{DEFAULT_MIN_CONFIDENCE, DEFAULT_OVER_REACH_DEG, DEFAULT_TIGHT_GRIP_DEG};

/// CLI arguments parser.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = r#"Classify Options:
    --source, -s <SOURCE>      JSON-lines pose frames, or - for stdin [default: -]
    --conf <CONF>              Minimum arm keypoint confidence [default: 0.5]
    --over-reach <DEGREES>     Elbow angle above which the arm is over-reaching [default: 160]
    --tight-grip <DEGREES>     Elbow angle below which the grip is too tight [default: 50]
    --arm <ARM>                Arm to examine: left or right [default: right]
    --hide-empty               Do not print frames without people
    --verbose                  Show verbose output

Input format (one frame per line, 17 COCO keypoints per person):
    {"frame": 0, "skeletons": [[[x, y, conf], ...], ...]}

Examples:
    safepose classify --source poses.jsonl
    safepose classify -s poses.jsonl --conf 0.6 --arm left
    pose-exporter video.mp4 | safepose classify --hide-empty --verbose false"#)]
pub struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    pub command: Commands,
}

/// Commands for the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify arm posture for every person in a stream of pose frames
    Classify(ClassifyArgs),
}

/// Arguments for the classify command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// JSON-lines pose frames, or - for stdin
    #[arg(short, long, default_value = "-")]
    pub source: String,

    /// Minimum arm keypoint confidence
    #[arg(long, default_value_t = DEFAULT_MIN_CONFIDENCE)]
    pub conf: f32,

    /// Elbow angle (degrees) above which the arm is over-reaching
    #[arg(long, default_value_t = DEFAULT_OVER_REACH_DEG)]
    pub over_reach: f32,

    /// Elbow angle (degrees) below which the grip is too tight
    #[arg(long, default_value_t = DEFAULT_TIGHT_GRIP_DEG)]
    pub tight_grip: f32,

    /// Arm to examine (left or right)
    #[arg(long, default_value = "right")]
    pub arm: Arm,

    /// Do not print frames without people
    #[arg(long, default_value_t = false)]
    pub hide_empty: bool,

    /// Show verbose output
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub verbose: bool,
}
