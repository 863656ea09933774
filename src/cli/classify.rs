// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use safepose::render::format_summary;
use safepose::{
    ClassifierConfig, ConsoleRenderer, PostureClassifier, PostureMonitor, Result, Source, Summary,
    VERSION,
};

use crate::cli::args::ClassifyArgs;
use crate::{info, section, success, verbose, warn};

/// Build the classifier configuration from command-line flags.
pub fn config_from_args(args: &ClassifyArgs) -> ClassifierConfig {
    ClassifierConfig::new()
        .with_min_confidence(args.conf)
        .with_over_reach(args.over_reach)
        .with_tight_grip(args.tight_grip)
        .with_arm(args.arm)
}

/// Run posture classification over a pose source and print the verdicts.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the source cannot be read, or a
/// skeleton cannot be classified.
pub fn run_classify(args: &ClassifyArgs) -> Result<Summary> {
    let config = config_from_args(args);
    let classifier = PostureClassifier::new(config)?;
    let source = Source::from(args.source.as_str());

    info!("SafePose {VERSION} 🚀 arm posture classifier");
    verbose!(
        "source={}, arm={}, conf>={}, over-reach>{}deg, tight-grip<{}deg",
        source.name(),
        config.arm,
        config.min_confidence,
        config.over_reach_deg,
        config.tight_grip_deg
    );
    if source == Source::Stdin {
        verbose!("Reading pose frames from stdin (Ctrl-D to finish)");
    }

    let frames = source.open()?;
    let mut renderer = ConsoleRenderer::stdout().with_show_empty(!args.hide_empty);
    let mut monitor = PostureMonitor::new(classifier);
    let summary = monitor.run(frames, &mut renderer)?;

    section!("Summary");
    success!("{}", format_summary(&summary));
    if summary.risks() > 0 {
        warn!(
            "{} risky {} detected",
            summary.risks(),
            if summary.risks() == 1 { "posture" } else { "postures" }
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::{Cli, Commands};
    use clap::Parser;
    use safepose::{Arm, Severity};

    fn classify_args(argv: &[&str]) -> ClassifyArgs {
        let mut full = vec!["app", "classify"];
        full.extend_from_slice(argv);
        match Cli::parse_from(full).command {
            Commands::Classify(args) => args,
        }
    }

    #[test]
    fn test_config_from_args() {
        let config = config_from_args(&classify_args(&["--arm", "left", "--tight-grip", "40"]));
        assert_eq!(config.arm, Arm::Left);
        assert!((config.tight_grip_deg - 40.0).abs() < f32::EPSILON);
        assert!((config.over_reach_deg - 160.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_invalid_thresholds_fail() {
        let args = classify_args(&["--tight-grip", "170", "--source", "unused.jsonl"]);
        assert!(run_classify(&args).is_err());
    }

    #[test]
    fn test_run_classify_file() {
        let mut rows = vec![[0.0_f32, 0.0, 0.9]; 17];
        rows[6] = [100.0, 100.0, 0.9];
        rows[8] = [100.0, 200.0, 0.9];
        rows[10] = [100.0, 300.0, 0.9];
        let line = format!(
            "{{\"frame\": 0, \"skeletons\": [{}]}}\n",
            serde_json::to_string(&rows).unwrap()
        );
        let path = std::env::temp_dir().join(format!("safepose-cli-{}.jsonl", std::process::id()));
        std::fs::write(&path, line).unwrap();

        let path_str = path.to_string_lossy().to_string();
        let args = classify_args(&["--source", &path_str, "--hide-empty"]);
        let summary = run_classify(&args);
        std::fs::remove_file(&path).ok();

        let summary = summary.unwrap();
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.count(Severity::OverReach), 1);
    }
}
