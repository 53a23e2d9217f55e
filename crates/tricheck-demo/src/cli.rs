#![forbid(unsafe_code)]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tricheck_core::GroupConfig;
use tricheck_widgets::TextCheckbox;
use tricheck_widgets::text::{ASCII, UNICODE};

use crate::error::Result;
use crate::session::{ClickTarget, Session};

#[derive(Debug, Parser)]
#[command(
    name = "tricheck-demo",
    about = "Replay clicks on a tri-state checkbox group and print each frame",
    version
)]
pub struct Cli {
    /// Group configuration file (TOML). Defaults to Parent / Child 1 / Child 2.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Checkbox glyphs.
    #[arg(long, global = true, value_enum, default_value_t = GlyphSet::Ascii)]
    pub glyphs: GlyphSet,

    /// Spaces before each child line (0-64).
    #[arg(
        long,
        global = true,
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(0..=64)
    )]
    pub indent: u16,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GlyphSet {
    Ascii,
    Unicode,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the group once.
    Show,

    /// Click the parent, then every child in order (default).
    Scenario,

    /// Click the given targets in order.
    Click {
        /// `parent` or a zero-based child index.
        #[arg(required = true)]
        targets: Vec<String>,
    },
}

pub fn run_from_env() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GroupConfig::from_toml_file(path)?,
        None => GroupConfig::reference(),
    };
    let glyphs = match cli.glyphs {
        GlyphSet::Ascii => ASCII,
        GlyphSet::Unicode => UNICODE,
    };
    let renderer = TextCheckbox::new().glyphs(glyphs).indent(usize::from(cli.indent));
    let mut session = Session::new(config, renderer)?;

    let targets = match cli.command.unwrap_or(Commands::Scenario) {
        Commands::Show => Vec::new(),
        Commands::Scenario => session.scenario_targets(),
        Commands::Click { targets } => targets
            .iter()
            .map(|t| t.parse::<ClickTarget>())
            .collect::<Result<Vec<_>>>()?,
    };
    session.replay(&targets, out)
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
