mod cli;
mod config;
mod engine;
mod error;
mod report;
mod scanners;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use engine::{Pipeline, ScanRequest};

fn main() -> Result<()> {
    let raw_args: Vec<String> = std::env::args().collect();

    // ── Wizard / drag-drop detection (before clap parsing) ──────────
    if raw_args.len() == 1 {
        // No arguments at all → interactive wizard
        return cli::wizard::run_wizard();
    }

    if raw_args.len() == 2 {
        let candidate = std::path::Path::new(&raw_args[1]);
        // If the single argument is an existing directory AND not a known
        // subcommand, treat it as a drag-and-drop folder.
        let known_commands = [
            "scan",
            "list-scanners",
            "tool-help",
            "init",
            "help",
            "-h",
            "--help",
            "-V",
            "--version",
            "-v",
            "--verbose",
            "-q",
            "--quiet",
        ];
        if candidate.is_dir() && !known_commands.contains(&raw_args[1].as_str()) {
            return cli::wizard::run_drag_drop(candidate);
        }
    }

    // ── Normal clap flow ────────────────────────────────────────────
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("cocoon=debug")
    } else if cli.quiet {
        EnvFilter::new("cocoon=error")
    } else {
        EnvFilter::new("cocoon=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    info!("Cocoon v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        cli::Commands::Scan(args) => {
            let scanner = scanners::lookup(&args.scanner)?;

            let code_path = std::fs::canonicalize(&args.path)?;
            let config = config::CocoonConfig::load(&code_path).unwrap_or_default();

            let runtime = args
                .runtime
                .clone()
                .unwrap_or_else(|| config.runtime.binary.clone());
            let skip_pull = args.no_pull || config.runtime.skip_pull;
            let format = args
                .format
                .clone()
                .unwrap_or_else(|| config.output.format.clone());

            let request = ScanRequest::new(
                scanner,
                code_path.to_string_lossy().into_owned(),
                args.all,
                args.files.clone(),
                args.options.clone(),
            )?;
            let report = Pipeline::new(request, runtime, skip_pull).run()?;

            // Output the report
            match format.as_str() {
                "json" => {
                    let output = report::json::render(&report)?;
                    if let Some(ref path) = args.out {
                        std::fs::write(path, &output)?;
                        info!("Report written to {}", path.display());
                    } else {
                        println!("{}", output);
                    }
                }
                _ => {
                    report::terminal::render(&report);
                    if let Some(ref path) = args.out {
                        let json_output = report::json::render(&report)?;
                        std::fs::write(path, &json_output)?;
                        info!("JSON report also written to {}", path.display());
                    }
                }
            }
        }
        cli::Commands::ListScanners => {
            scanners::list_scanners();
        }
        cli::Commands::ToolHelp { scanner } => {
            let spec = scanners::lookup(scanner)?;
            let config = config::CocoonConfig::load(&std::env::current_dir()?).unwrap_or_default();
            info!("Showing help for {}...", spec.name);
            let text = engine::executor::help(&config.runtime.binary, spec)?;
            println!("{}", text);
        }
        cli::Commands::Init => {
            config::init_config()?;
        }
    }

    Ok(())
}
