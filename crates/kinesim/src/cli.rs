//! Command line interface for kinesim

use crate::config::{ConfigError, OutputConfig, OutputFormat, SimulationConfig};
use crate::controls::controls_for;
use crate::output;
use crate::physics::{
    ChartChannels, Comparison, ParamsError, PhysicsKind, PhysicsParams, Scalar, chart_series,
    compute, frames_with, horizon, trajectory_with,
};
use crate::samples::{SAMPLE_PROBLEMS, find_sample};
use clap::{Parser, Subcommand};
use std::fmt;
use std::io::{self, Read, Write};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")");

/// Prefix selecting a built-in sample instead of a file
const SAMPLE_PREFIX: &str = "sample:";

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// Parameters could not be read or failed validation
    Params(ParamsError),
    /// A `--set`/`--with` entry was malformed
    InvalidOverride(String),
    UnknownSample(String),
    /// `compare` was given neither a second scenario nor any edits
    NothingToCompare,
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "{err}"),
            CliError::Params(err) => write!(f, "{err}"),
            CliError::InvalidOverride(msg) => write!(f, "Invalid override: {msg}"),
            CliError::UnknownSample(label) => {
                let available: Vec<&str> = SAMPLE_PROBLEMS.iter().map(|s| s.label).collect();
                write!(
                    f,
                    "Unknown sample: '{label}'. Available samples: {}",
                    available.join(", ")
                )
            }
            CliError::NothingToCompare => {
                write!(f, "compare needs --against <PARAMS> or at least one --with KEY=VALUE")
            }
            CliError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(err) => Some(err),
            CliError::Params(err) => Some(err),
            CliError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<ParamsError> for CliError {
    fn from(err: ParamsError) -> Self {
        CliError::Params(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

/// kinesim - kinematics for classical-mechanics word problems
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where a scenario comes from and how to edit it before running
#[derive(clap::Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Parameter JSON file, `-` for stdin, or `sample:<label>`
    #[arg(value_name = "PARAMS")]
    pub params: String,

    /// Scenario kind (e.g., free_fall, shm, ramp); overrides the file
    #[arg(short, long, value_name = "KIND")]
    pub kind: Option<String>,

    /// Set a numeric parameter, e.g. --set gravity=1.6 (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the state at one instant
    Frame {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Time in seconds
        #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
        time: Scalar,
    },

    /// Print the natural duration of the scenario
    Horizon {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },

    /// Print every frame from t = 0 to the horizon
    Trajectory {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Seconds between frames (overrides config file)
        #[arg(long, value_name = "SECONDS")]
        step: Option<Scalar>,
    },

    /// Print the downsampled series behind the position and velocity charts
    Chart {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Keep every N-th frame (overrides config file)
        #[arg(long, value_name = "N")]
        stride: Option<usize>,

        /// Seconds between frames (overrides config file)
        #[arg(long, value_name = "SECONDS")]
        step: Option<Scalar>,
    },

    /// Compare a scenario with a second one or with an edited copy of itself
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Second scenario, in the same forms as PARAMS
        #[arg(long, value_name = "PARAMS")]
        against: Option<String>,

        /// Edit applied to the second scenario (repeatable)
        #[arg(short, long = "with", value_name = "KEY=VALUE")]
        with: Vec<String>,
    },

    /// List the sample problems
    Samples {
        /// Also print the parameters each sample describes
        #[arg(long)]
        params: bool,
    },

    /// List scenario kinds with their aliases and adjustable parameters
    Kinds,

    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the user configuration file
        #[arg(long)]
        save: bool,
    },
}

impl ScenarioArgs {
    /// Read, edit and validate the scenario
    pub fn load(&self) -> Result<PhysicsParams, CliError> {
        let mut params = read_params(&self.params)?;

        if let Some(kind) = &self.kind {
            params.kind = kind.parse()?;
            tracing::debug!("Overriding scenario kind to {}", params.kind);
        }

        apply_overrides(&mut params, &self.overrides)?;
        params.validate()?;
        Ok(params)
    }
}

/// Parameters from a JSON file, stdin (`-`), or a built-in sample
pub fn read_params(source: &str) -> Result<PhysicsParams, CliError> {
    if let Some(label) = source.strip_prefix(SAMPLE_PREFIX) {
        return find_sample(label)
            .map(|sample| sample.parameters())
            .ok_or_else(|| CliError::UnknownSample(label.to_string()));
    }

    let json = if source == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(source)?
    };

    Ok(PhysicsParams::from_parser_output(&json)?)
}

/// Apply `KEY=VALUE` entries in order
pub fn apply_overrides(params: &mut PhysicsParams, overrides: &[String]) -> Result<(), CliError> {
    for entry in overrides {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| CliError::InvalidOverride(format!("expected KEY=VALUE, got '{entry}'")))?;

        let value: Scalar = value.trim().parse().map_err(|_| {
            CliError::InvalidOverride(format!("'{}' is not a number for {}", value.trim(), key.trim()))
        })?;

        params.set_field(key.trim(), value)?;
        tracing::debug!("Overriding {} to {value}", key.trim());
    }
    Ok(())
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            SimulationConfig::load(Some(path))?
        }
        None => SimulationConfig::load_from_user_config()?,
    };

    if let Some(format) = args.format {
        config.output.format = format;
    }

    match config.to_toml() {
        Ok(toml_string) => {
            tracing::debug!("=== Current Configuration (TOML) ===\n{toml_string}");
        }
        Err(err) => tracing::warn!("Failed to serialize configuration to TOML: {err}"),
    }

    Ok(config)
}

/// Run the selected subcommand, writing results to stdout
pub fn run(args: &Args) -> Result<(), CliError> {
    let config = load_and_apply_config(args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&args.command, &config, &mut out)
}

/// Run `command` against `config`, writing to `out`
pub fn execute<W: Write>(
    command: &Command,
    config: &SimulationConfig,
    out: &mut W,
) -> Result<(), CliError> {
    let mut options = config.engine.trajectory_options();

    match command {
        Command::Frame { scenario, time } => {
            let params = scenario.load()?;
            output::write_frame(out, &config.output, &compute(&params, *time))?;
        }
        Command::Horizon { scenario } => {
            let params = scenario.load()?;
            output::write_scalar(out, &config.output, "horizon", horizon(&params))?;
        }
        Command::Trajectory { scenario, step } => {
            let params = scenario.load()?;
            if let Some(step) = step {
                options.step = *step;
            }
            let frames = frames_with(&params, &options);
            let (span, step) = (frames.horizon(), frames.step());
            let frames: Vec<_> = frames.collect();
            tracing::info!(
                "{} frames for {} over {span:.3} s at {step} s per frame",
                frames.len(),
                params.kind
            );
            output::write_frames(out, &config.output, &frames)?;
        }
        Command::Chart {
            scenario,
            stride,
            step,
        } => {
            let params = scenario.load()?;
            if let Some(step) = step {
                options.step = *step;
            }
            let frames = trajectory_with(&params, &options);
            let points = chart_series(&frames, stride.unwrap_or(config.engine.chart_stride));
            let channels = ChartChannels::for_kind(params.kind).all();
            output::write_chart(out, &config.output, &points, &channels)?;
        }
        Command::Compare {
            scenario,
            against,
            with,
        } => {
            if against.is_none() && with.is_empty() {
                return Err(CliError::NothingToCompare);
            }

            let primary = scenario.load()?;
            let mut other = match against {
                Some(source) => read_params(source)?,
                None => primary.clone(),
            };
            apply_overrides(&mut other, with)?;
            other.validate()?;

            let comparison = Comparison::new(primary, other, &options);
            write_comparison(out, &config.output, &comparison)?;
        }
        Command::Samples { params } => {
            for sample in &SAMPLE_PROBLEMS {
                writeln!(out, "{:<16}{}", sample.label, sample.text)?;
                if *params {
                    writeln!(out, "{}", sample.parameters().to_json_pretty()?)?;
                }
            }
        }
        Command::Kinds => write_kinds(out)?,
        Command::Config { save } => {
            write!(out, "{}", config.to_toml()?)?;
            if *save {
                let path = config.save_to_user_config()?;
                tracing::info!("Saved configuration to {}", path.display());
            }
        }
    }

    Ok(())
}

fn write_comparison<W: Write>(
    out: &mut W,
    output: &OutputConfig,
    comparison: &Comparison,
) -> io::Result<()> {
    let (primary, other) = comparison.summaries();

    if output.format == OutputFormat::Json {
        let report = serde_json::json!({
            "primary": primary,
            "other": other,
            "horizon": comparison.horizon(),
            "bounds": comparison.bounds,
        });
        serde_json::to_writer_pretty(&mut *out, &report)?;
        return writeln!(out);
    }

    let precision = output.precision;
    let separator = if output.format == OutputFormat::Csv { "," } else { "  " };
    let columns = ["scenario", "kind", "horizon", "frames", "end_time", "max_abs_x", "max_y"];
    writeln!(out, "{}", columns.join(separator))?;

    for (name, summary) in [("primary", &primary), ("other", &other)] {
        let row: [String; 7] = [
            name.to_string(),
            summary.kind.to_string(),
            format!("{:.precision$}", summary.horizon),
            summary.frames.to_string(),
            format!("{:.precision$}", summary.end_time),
            format!("{:.precision$}", summary.bounds.max_abs_x),
            format!("{:.precision$}", summary.bounds.max_y),
        ];
        writeln!(out, "{}", row.join(separator))?;
    }

    if output.format == OutputFormat::Table {
        writeln!(
            out,
            "\nshared bounds: |x| <= {:.precision$}, y <= {:.precision$} over {:.precision$} s",
            comparison.bounds.max_abs_x,
            comparison.bounds.max_y,
            comparison.horizon()
        )?;
    }
    Ok(())
}

fn write_kinds<W: Write>(out: &mut W) -> io::Result<()> {
    for kind in PhysicsKind::ALL {
        writeln!(out, "{} ({})", kind.name(), kind.display_name())?;
        writeln!(out, "  aliases: {}", kind.aliases().join(", "))?;
        for control in controls_for(kind) {
            writeln!(
                out,
                "  {:<22}{} to {} {}",
                control.field, control.min, control.max, control.unit
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(params: &str, overrides: &[&str]) -> ScenarioArgs {
        ScenarioArgs {
            params: params.to_string(),
            kind: None,
            overrides: overrides.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn run_to_string(command: Command, format: OutputFormat) -> Result<String, CliError> {
        let mut config = SimulationConfig::default();
        config.output.format = format;
        run_with_config(command, &config)
    }

    fn run_with_config(command: Command, config: &SimulationConfig) -> Result<String, CliError> {
        let mut buffer = Vec::new();
        execute(&command, config, &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_parse_frame_command() {
        let args = Args::try_parse_from([
            "kinesim", "frame", "sample:shm", "--time", "0.125", "--set", "amplitude=2",
        ])
        .unwrap();
        match args.command {
            Command::Frame { scenario, time } => {
                assert_eq!(time, 0.125);
                assert_eq!(scenario.params, "sample:shm");
                assert_eq!(scenario.overrides, vec!["amplitude=2"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args =
            Args::try_parse_from(["kinesim", "horizon", "-", "--format", "json", "-v"]).unwrap();
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert!(args.verbose);
    }

    #[test]
    fn test_negative_time_is_accepted() {
        let args = Args::try_parse_from(["kinesim", "frame", "-", "--time", "-0.5"]).unwrap();
        assert!(matches!(args.command, Command::Frame { time, .. } if time == -0.5));
    }

    #[test]
    fn test_sample_source() {
        let params = read_params("sample:Free Fall").unwrap();
        assert_eq!(params.kind, PhysicsKind::FreeFall);
        assert_eq!(params.initial_height, 45.0);

        let err = read_params("sample:pendulum").unwrap_err();
        assert!(err.to_string().contains("Vertical Throw"));
    }

    #[test]
    fn test_overrides_and_kind() {
        let mut args = scenario("sample:free fall", &["gravity=1.6", "initialHeight = 20"]);
        args.kind = Some("ramp".to_string());
        let params = args.load().unwrap();
        assert_eq!(params.kind, PhysicsKind::InclinedPlane);
        assert_eq!(params.gravity, 1.6);
        assert_eq!(params.initial_height, 20.0);
    }

    #[test]
    fn test_bad_overrides() {
        let mut params = PhysicsParams::default();
        for entry in ["gravity", "gravity=strong"] {
            let result = apply_overrides(&mut params, &[entry.to_string()]);
            assert!(matches!(result, Err(CliError::InvalidOverride(_))), "{entry}");
        }
        let result = apply_overrides(&mut params, &["colour=1".to_string()]);
        assert!(matches!(result, Err(CliError::Params(ParamsError::UnknownField(_)))));
    }

    #[test]
    fn test_validation_runs_after_overrides() {
        let err = scenario("sample:projectile", &["gravity=0"]).load().unwrap_err();
        assert!(matches!(
            err,
            CliError::Params(ParamsError::NonPositiveGravity(_))
        ));
    }

    #[test]
    fn test_horizon_command() {
        let text = run_to_string(
            Command::Horizon {
                scenario: scenario("sample:shm", &[]),
            },
            OutputFormat::Table,
        )
        .unwrap();
        assert_eq!(text, "horizon: 1.500\n");
    }

    #[test]
    fn test_chart_command_uses_kind_channels() {
        let text = run_to_string(
            Command::Chart {
                scenario: scenario("sample:shm", &[]),
                stride: None,
                step: None,
            },
            OutputFormat::Csv,
        )
        .unwrap();
        assert_eq!(text.lines().next(), Some("t,x,vx"));
        // 76 frames, every third kept
        assert_eq!(text.lines().count(), 1 + 26);
    }

    #[test]
    fn test_compare_requires_a_difference() {
        let result = run_to_string(
            Command::Compare {
                scenario: scenario("sample:free fall", &[]),
                against: None,
                with: vec![],
            },
            OutputFormat::Table,
        );
        assert!(matches!(result, Err(CliError::NothingToCompare)));
    }

    #[test]
    fn test_compare_json() {
        let text = run_to_string(
            Command::Compare {
                scenario: scenario("sample:free fall", &[]),
                against: None,
                with: vec!["gravity=1.6".to_string()],
            },
            OutputFormat::Json,
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["primary"]["kind"], "free_fall");
        assert!(report["other"]["horizon"].as_f64() > report["primary"]["horizon"].as_f64());
    }

    #[test]
    fn test_compare_uses_engine_config() {
        let mut config = SimulationConfig::default();
        config.output.format = OutputFormat::Json;
        config.engine.max_frames = Some(10);

        let trajectory = run_with_config(
            Command::Trajectory {
                scenario: scenario("sample:free fall", &[]),
                step: None,
            },
            &config,
        )
        .unwrap();
        let frames: Vec<serde_json::Value> = serde_json::from_str(&trajectory).unwrap();
        assert_eq!(frames.len(), 10);

        let text = run_with_config(
            Command::Compare {
                scenario: scenario("sample:free fall", &[]),
                against: None,
                with: vec!["gravity=1.6".to_string()],
            },
            &config,
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(report["primary"]["frames"], 10);
        assert_eq!(report["other"]["frames"], 10);
        assert_eq!(report["horizon"], report["other"]["horizon"]);
    }

    #[test]
    fn test_compare_uses_landing_epsilon() {
        let mut config = SimulationConfig::default();
        config.output.format = OutputFormat::Json;
        config.engine.landing_epsilon = 1.0;

        let text = run_with_config(
            Command::Compare {
                scenario: scenario("sample:vertical throw", &["initialVelocity=1"]),
                against: None,
                with: vec!["initialVelocity=2".to_string()],
            },
            &config,
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();
        // Both land well before t = 1 s; grounded frames inside the grace
        // period do not end either run
        for side in ["primary", "other"] {
            let end = report[side]["end_time"].as_f64().unwrap();
            assert!(end > 1.0 && end < 1.1, "{side} ended at {end}");
        }
    }

    #[test]
    fn test_config_command_prints_toml() {
        let text = run_to_string(Command::Config { save: false }, OutputFormat::Csv).unwrap();
        let parsed: SimulationConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.output.format, OutputFormat::Csv);
        assert_eq!(parsed.engine, SimulationConfig::default().engine);
    }

    #[test]
    fn test_kinds_lists_aliases() {
        let text = run_to_string(Command::Kinds, OutputFormat::Table).unwrap();
        assert!(text.contains("simple_harmonic_motion (Simple Harmonic Motion)"));
        assert!(text.contains("aliases: shm, spring, oscillator"));
    }
}
