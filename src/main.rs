//! depreview - Interactive dependency upgrade review CLI tool
//!
//! Reads a precomputed version analysis, lets the operator pick which
//! outdated dependencies to upgrade, and patches the manifest in place.

use clap::Parser;
use depreview::cli::CliArgs;
use depreview::domain::{AnalysisSet, CategoryLabels};
use depreview::error::AppError;
use depreview::manifest::ManifestDocument;
use depreview::pipeline::{Pipeline, PipelineOutcome};
use depreview::prompt::{terminal_rows, AutoSelect, SelectionPrompt, TerminalPrompt};
use log::{debug, info};
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit code used when the operator cancels the prompt
const EXIT_CANCELLED: u8 = 130;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Err(e) = init_logger(args.verbose) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Run the main logic and handle errors
    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<AppError>() {
            Some(app_err) if app_err.is_cancelled() => {
                info!("cancelled by operator");
                ExitCode::from(EXIT_CANCELLED)
            }
            _ => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("depreview")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<PipelineOutcome> {
    let color = args.use_color();
    if !color {
        colored::control::set_override(false);
    }

    debug!("depreview v{}", env!("CARGO_PKG_VERSION"));
    debug!("analysis: {}", args.analysis.display());
    debug!("manifest: {}", args.manifest.display());
    if args.dry_run {
        debug!("mode: dry-run");
    }

    let analysis = AnalysisSet::load(&args.analysis).map_err(AppError::from)?;
    let document = ManifestDocument::load(&args.manifest)
        .map_err(AppError::from)?
        .with_output_path(args.output.clone());
    let document = {
        let display_path = document.target_path().display().to_string();
        document.with_display_path(display_path)
    };

    let labels = CategoryLabels::from_pairs(&args.label);
    let mut terminal = TerminalPrompt::new(color);
    let mut auto = AutoSelect;
    let prompt: &mut dyn SelectionPrompt = if args.is_interactive() {
        &mut terminal
    } else {
        &mut auto
    };

    let mut stdout = io::stdout().lock();
    let outcome = Pipeline::new(&labels, prompt)
        .with_dry_run(args.dry_run)
        .with_color(color)
        .with_terminal_rows(terminal_rows())
        .run(&analysis, document, &mut stdout)?;
    stdout.flush()?;

    debug!("finished: {:?}", outcome);
    Ok(outcome)
}
