//! rigorient command-line front end.
//!
//! Provides four modes of operation:
//! - `orient`: Orient a three-joint chain and print per-joint axes and joint orients
//! - `twist`: Lay out twist joints between a limb's start and end joint
//! - `rotate`: Apply a quick edit to one rotation channel
//! - `info`: Print crate versions

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rigorient_orient::prelude::*;
use rigorient_orient::rotate::{RotationEdit, apply_to_axis};

mod args;
mod output;

use args::parse_triple;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Joint-chain orientation tools for rigging.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Orient three joints (parent -> child -> grandchild).
    Orient {
        /// Parent joint position as X,Y,Z.
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        p1: [f64; 3],

        /// Child joint position as X,Y,Z.
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        p2: [f64; 3],

        /// Grandchild joint position as X,Y,Z.
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        p3: [f64; 3],

        /// Local axis aimed down the chain (overrides the config file).
        #[arg(long, allow_hyphen_values = true)]
        primary: Option<AxisChoice>,

        /// Local axis aligned with the plane normal (overrides the config file).
        #[arg(long, allow_hyphen_values = true)]
        secondary: Option<AxisChoice>,

        /// TOML file with axis choices and tolerances.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Lay out twist joints between a start (elbow/knee) and end (wrist/ankle) joint.
    Twist {
        /// Start joint position as X,Y,Z.
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        start: [f64; 3],

        /// End joint position as X,Y,Z.
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        end: [f64; 3],

        /// Start joint rotation as XYZ Euler degrees.
        #[arg(
            long,
            value_parser = parse_triple,
            allow_hyphen_values = true,
            default_value = "0,0,0"
        )]
        start_rot: [f64; 3],

        /// End joint rotation as XYZ Euler degrees.
        #[arg(
            long,
            value_parser = parse_triple,
            allow_hyphen_values = true,
            default_value = "0,0,0"
        )]
        end_rot: [f64; 3],

        /// Number of twist joints.
        #[arg(short = 'n', long, default_value_t = 3)]
        count: u32,

        /// Limb side (left or right).
        #[arg(long, default_value = "left")]
        side: Side,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Apply a quick edit to one rotation channel.
    Rotate {
        /// Rotation as XYZ Euler degrees.
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        rotation: [f64; 3],

        /// Channel to edit (x, y or z).
        #[arg(long)]
        axis: Axis,

        /// invert, flip180, plus90 or minus90.
        #[arg(long, allow_hyphen_values = true)]
        edit: RotationEdit,

        /// Wrap quarter turns into [0, 360).
        #[arg(long)]
        keep_minimal: bool,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

/// Load the config file (if any), apply command-line axis overrides and
/// validate the combination.
fn resolve_orient_config(
    config_path: Option<&Path>,
    primary: Option<AxisChoice>,
    secondary: Option<AxisChoice>,
) -> Result<OrientConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => {
            debug!("rigorient: loading config from {}", path.display());
            OrientConfig::from_file(path)?
        }
        None => OrientConfig::default(),
    };
    if let Some(axis) = primary {
        config.primary_axis = axis;
    }
    if let Some(axis) = secondary {
        config.secondary_axis = axis;
    }
    config.validate()?;
    Ok(config)
}

fn run_orient(
    positions: [[f64; 3]; 3],
    primary: Option<AxisChoice>,
    secondary: Option<AxisChoice>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<(), RigError> {
    let config = resolve_orient_config(config_path, primary, secondary)?;

    let [p1, p2, p3] = positions.map(Point3::from);
    let input = ChainInput::with_config(p1, p2, p3, &config);
    let result = ChainOrienter::new(config.tolerances).orient(&input)?;

    if json {
        output::print_json(&result);
    } else {
        output::print_orientation(&result);
    }
    Ok(())
}

fn run_twist(
    start: JointPose,
    end: JointPose,
    config: &TwistConfig,
    json: bool,
) -> Result<(), RigError> {
    let plan = distribute_twist(&start, &end, config)?;
    if json {
        output::print_json(&plan);
    } else {
        output::print_twist(&plan);
    }
    Ok(())
}

fn run_rotate(rotation: [f64; 3], axis: Axis, edit: RotationEdit, keep_minimal: bool) {
    let [rx, ry, rz] = apply_to_axis(rotation, axis, edit, keep_minimal);
    println!("{rx:.4} {ry:.4} {rz:.4}");
}

fn run_info() {
    println!("rigorient v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  rigorient-core       {}", env!("CARGO_PKG_VERSION"));
    println!("  rigorient-orient     {}", env!("CARGO_PKG_VERSION"));
    println!("  rigorient-cli        {}", env!("CARGO_PKG_VERSION"));
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Some(Commands::Orient {
            p1,
            p2,
            p3,
            primary,
            secondary,
            config,
            json,
        }) => run_orient([p1, p2, p3], primary, secondary, config.as_deref(), json),
        Some(Commands::Twist {
            start,
            end,
            start_rot,
            end_rot,
            count,
            side,
            json,
        }) => run_twist(
            JointPose::from_euler_degrees(Point3::from(start), start_rot),
            JointPose::from_euler_degrees(Point3::from(end), end_rot),
            &TwistConfig { count, side },
            json,
        ),
        Some(Commands::Rotate {
            rotation,
            axis,
            edit,
            keep_minimal,
        }) => {
            run_rotate(rotation, axis, edit, keep_minimal);
            Ok(())
        }
        Some(Commands::Info) | None => {
            run_info();
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
