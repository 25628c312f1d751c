//! xeno-reader CLI
//!
//! Command-line interface for browsing and extracting the hidden file table
//! on Xenogears disc images.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use env_logger::Target;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
use commands::cat::run_cat;
use commands::config::{run_config_path, run_config_show};
use commands::extract::run_extract;
use commands::info::run_info;
use commands::tree::run_tree;

fn main() {
    let cli = Cli::parse();
    // `cat` without --out owns stdout
    let stdout_is_data = matches!(cli.command, Commands::Cat { out: None, .. });
    init_logging(cli.quiet, cli.verbose, stdout_is_data);

    let result = match cli.command {
        Commands::Info { image } => run_info(&image),
        Commands::Tree { image } => run_tree(&image),
        Commands::Extract {
            image,
            output,
            dry_run,
            no_manifest,
            sha1,
        } => run_extract(&image, output, dry_run, no_manifest, sha1, cli.quiet),
        Commands::Cat {
            image,
            dir,
            index,
            out,
        } => run_cat(&image, &dir, index, out),
        Commands::Config { action } => match action {
            ConfigAction::Path => run_config_path(),
            ConfigAction::Show => run_config_show(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Install the logger. Normal output goes through `log::info!`, so the
/// default format is the bare message; `RUST_LOG` overrides the level.
fn init_logging(quiet: bool, verbose: bool, to_stderr: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.target(if to_stderr {
        Target::Stderr
    } else {
        Target::Stdout
    });
    if !verbose {
        builder.format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        });
    }
    builder.parse_default_env();
    builder.init();
}
