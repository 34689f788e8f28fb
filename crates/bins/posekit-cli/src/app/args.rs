use crate::app::cli::{ComposeOptions, DistanceOptions, FollowOptions, ValidateOptions};
use std::path::PathBuf;

/// Posekit command line interface arguments.
#[derive(clap::Parser, Debug)]
#[clap(
    author,
    version,
    about = "Positions and orients rigid bodies with 4x4 transform matrices."
)]
pub struct CliArgs {
    /// Whether to print only results, without labels or log messages.
    #[clap(short, long, help = "Print bare results and errors only")]
    pub quiet: bool,

    /// Whether to print verbose information to stdout.
    #[clap(short, long, help = "Use verbose output (log level = 4)")]
    pub verbose: bool,

    /// Whether to show the timestamp in the log.
    #[clap(
        long,
        help = "Show timestamp for each log message in seconds since\nprogram starts"
    )]
    pub log_timestamp: bool,

    /// Verbosity level for the log.
    #[clap(
        long,
        help = "Setting logging verbosity level (higher for more\ndetails)\n  0 - error\n  1 - \
                warn + error\n  2 - info + warn + error\n  3 - debug + info + warn + error\n  4 - \
                trace + debug + info + warn + error\n\x08",
        default_value_t = 1
    )]
    pub log_level: u8,

    /// Path to the user config file. If not specified, posekit looks for
    /// `posekit.toml` in the working directory, then in the system
    /// configuration directory.
    #[clap(short, long, help = "Path to the user config file")]
    pub config: Option<PathBuf>,

    /// Command to execute.
    #[clap(subcommand)]
    pub command: SubCommand,
}

/// Posekit command.
#[derive(clap::Subcommand, Debug)]
pub enum SubCommand {
    /// Applies rotations and translations to the identity transform.
    Compose(ComposeOptions),

    /// Derives the transform of a camera following an object.
    Follow(FollowOptions),

    /// Checks a rotation matrix or a unit vector.
    Validate(ValidateOptions),

    /// Measures the distance between two points.
    Distance(DistanceOptions),

    /// Prints the effective configuration.
    #[clap(name = "info")]
    PrintInfo,
}
