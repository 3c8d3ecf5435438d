mod plan;

use anyhow::{Result, bail};
use clap::Parser;
use markdown_rawguard_config::Config;
use markdown_rawguard_engine::prepare_with;
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use plan::{Mode, Selection};

#[derive(Parser, Debug)]
#[command(name = "markdown-rawguard", version)]
#[command(about = "Wraps markdown code in raw/endraw template directives")]
struct Args {
    /// Markdown files or directories. Reads stdin when omitted.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Write results under DIR, mirroring the input layout
    #[arg(short, long, value_name = "DIR", conflicts_with = "in_place")]
    output_dir: Option<PathBuf>,

    /// Rewrite files in place
    #[arg(short, long)]
    in_place: bool,

    /// Write nothing; exit with status 1 if any page would change
    #[arg(long, conflicts_with_all = ["in_place", "output_dir"])]
    check: bool,

    /// Render markers without inner padding ({%raw%})
    #[arg(long)]
    compact: bool,

    /// Config file to use instead of ~/.config/markdown-rawguard/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a config file with the default settings and exit
    #[arg(long, conflicts_with_all = ["paths", "check", "in_place", "output_dir"])]
    init_config: bool,

    /// Verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.init_config {
        return match init_config(args.config.as_deref()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err:#}");
                ExitCode::from(2)
            }
        };
    }

    match run(&args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(changed) => {
            log::info!("{changed} page(s) would change");
            ExitCode::from(1)
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            log::debug!("Config path: {}", path.display());
            Config::read(path)?
        }
        None => Config::read_default()?,
    };
    if config.is_none() {
        log::debug!("No config file, using defaults");
    }
    Ok(config.unwrap_or_default())
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let path = path.map_or_else(Config::default_path, Path::to_path_buf);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    Config::default().write(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Processes every page, returning how many changed under `--check`.
fn run(args: &Args) -> Result<usize> {
    let config = load_config(args.config.as_deref())?;

    let mut syntax = config.template.clone();
    if args.compact {
        syntax.padded = false;
    }

    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| config.output_dir.clone().filter(|_| !args.paths.is_empty()));
    let mode = Mode::select(args.check, args.in_place, output_dir);
    let exclude = config.exclude_patterns()?;
    let selection = Selection {
        extensions: &config.extensions,
        exclude: &exclude,
    };

    let sources = plan::sources(&args.paths, &selection, &mode)?;
    log::info!("Processing {} page(s)", sources.len());

    let mut changed = 0;
    for source in &sources {
        let input = source.read()?;
        let prepared = prepare_with(&input, &syntax);
        if prepared.raw_level.is_inside() {
            log::warn!("{}: ends inside an unclosed raw region", source.label());
        }
        log::info!(
            "{}: wrapped {} block(s), {} span(s)",
            source.label(),
            prepared.summary.wrapped_blocks,
            prepared.summary.wrapped_spans
        );

        if source.deliver(&mode, &input, &prepared.output)? && mode == Mode::Check {
            println!("{}", source.label());
            changed += 1;
        }
    }

    Ok(changed)
}
