use anyhow::Context;
use clap::Parser;
use generator::profile::{build_synthetic_session, SessionProfile};
use std::fs;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod input;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline gaze analytics driver")]
struct Args {
    /// Gaze recording JSON produced by the capture pipeline
    #[arg(long)]
    recording: Option<PathBuf>,
    /// AOI list JSON exported from the drawing UI
    #[arg(long)]
    aois: Option<PathBuf>,
    /// Load analysis parameters from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    #[arg(long, default_value_t = 0.03)]
    dispersion_threshold: f64,
    #[arg(long, default_value_t = 100.0)]
    min_duration_ms: f64,
    /// Stimulus start offset in seconds, subtracted from TTFF values
    #[arg(long, default_value_t = 0.0)]
    video_start: f64,
    /// Generate a seeded synthetic session instead of reading input files
    #[arg(long, default_value_t = false)]
    synthetic: bool,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Directory the report files are written into
    #[arg(long, default_value = "reports")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::from_args(args.dispersion_threshold, args.min_duration_ms, args.video_start)
    };

    let (recording, aois) = if args.synthetic {
        let profile = SessionProfile {
            seed: args.seed,
            ..Default::default()
        };
        build_synthetic_session(&profile)?
    } else {
        let recording_path = args
            .recording
            .context("either --recording or --synthetic is required")?;
        let recording = input::load_recording(&recording_path)?;
        let aois = match args.aois {
            Some(path) => input::load_aois(&path)?,
            None => Vec::new(),
        };
        (recording, aois)
    };

    let runner = Runner::new(workflow_config);
    let bundle = runner.execute(&recording, &aois)?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;
    for (file_name, contents) in [
        ("fixations.csv", &bundle.fixations_csv),
        ("dwell_time.csv", &bundle.dwell_time_csv),
        ("first_fixation.csv", &bundle.first_fixation_csv),
        ("scanpath_summary.csv", &bundle.scanpath_csv),
    ] {
        let path = args.out.join(file_name);
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    }

    let result_json =
        serde_json::to_string_pretty(&bundle.result).context("serializing analysis result")?;
    fs::write(args.out.join("analysis.json"), result_json)
        .context("writing analysis.json")?;
    let plot_json =
        serde_json::to_string_pretty(&bundle.plot).context("serializing scanpath plot")?;
    fs::write(args.out.join("scanpath_plot.json"), plot_json)
        .context("writing scanpath_plot.json")?;

    println!(
        "Analysis of '{}' -> fixations {}, dwell buckets {}, reports in {}",
        recording.metadata.name,
        bundle.result.fixations.len(),
        bundle.result.dwell_time.len(),
        args.out.display()
    );

    Ok(())
}
