use clap::Parser;
use std::path::PathBuf;
use webfont_touchup::{correct_font, Result, WebFixConfig};

/// Post-build web font changes: fixed vertical metrics, web family naming
/// and a standard copyright notice
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Increase logging
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: usize,

    /// JSON file overriding the vertical metrics and copyright notice
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Font to read
    #[clap(value_parser)]
    pub source: PathBuf,

    /// Where to write the corrected font
    #[clap(value_parser)]
    pub target: PathBuf,

    /// Family name to give the font
    #[clap(value_parser)]
    pub family_name: String,
}

pub fn init_logging(verbose: usize) {
    env_logger::init_from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        },
    ));
}

pub fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => WebFixConfig::load(path)?,
        None => WebFixConfig::default(),
    };
    log::debug!("Using {:?}", config);
    correct_font(&args.source, &args.target, &args.family_name, &config)
}
