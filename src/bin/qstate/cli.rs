use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "qstate",
    about = "Equilibrium charge-state distributions of stripped heavy ion beams",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Charge-state distribution of one projectile
    #[command(visible_alias = "d")]
    Dist(DistArgs),

    /// Mean charge and spread for every supported element
    #[command(visible_alias = "s")]
    Summary(SummaryArgs),

    /// List supported projectile elements
    #[command(visible_alias = "e")]
    Elements(ElementsArgs),
}

impl Command {
    pub fn quiet(&self) -> bool {
        match self {
            Command::Dist(args) => args.io.quiet,
            Command::Summary(args) => args.io.quiet,
            Command::Elements(args) => args.io.quiet,
        }
    }
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Suppress banner output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Beam kinematics shared by dist and summary.
#[derive(Args)]
#[command(next_help_heading = "Beam")]
pub struct BeamOptions {
    /// Kinetic energy per nucleon (MeV/u)
    #[arg(
        short,
        long,
        value_name = "MEV_U",
        default_value = "4.2",
        allow_hyphen_values = true
    )]
    pub energy: f64,

    /// Rest energy per nucleon (MeV)
    #[arg(
        long = "rest-energy",
        value_name = "MEV",
        default_value = "931.5",
        allow_hyphen_values = true
    )]
    pub rest_energy: f64,
}

/// Model options shared by dist and summary.
#[derive(Args)]
#[command(next_help_heading = "Model")]
pub struct ModelOptions {
    /// Custom model coefficients (TOML file)
    #[arg(long, value_name = "FILE")]
    pub coefficients: Option<PathBuf>,
}

#[derive(Args)]
pub struct DistArgs {
    /// Projectile: atomic number, symbol (Pb) or name (Lead)
    #[arg(value_name = "ELEMENT", allow_hyphen_values = true)]
    pub element: String,

    /// Charge states on each side of the mean (at most 10000)
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "5",
        allow_hyphen_values = true
    )]
    pub width: i32,

    #[command(flatten)]
    pub beam: BeamOptions,

    #[command(flatten)]
    pub model: ModelOptions,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub beam: BeamOptions,

    #[command(flatten)]
    pub model: ModelOptions,

    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Args)]
pub struct ElementsArgs {
    #[command(flatten)]
    pub io: IoOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Boxed text tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values
    Csv,
}

pub fn parse() -> Cli {
    Cli::parse()
}
