use std::path::{Path, PathBuf};

use anyhow::Result;
use inquire::validator::ValueRequiredValidator;
use inquire::{Confirm, Select, Text};
use owo_colors::OwoColorize;

use crate::config::CocoonConfig;
use crate::engine::{Pipeline, ScanRequest};
use crate::report;
use crate::scanners::{self, ScannerSpec};

// ── Helpers ──────────────────────────────────────────────────────────

/// Print a horizontal separator.
fn separator() {
    println!("{}", "━".repeat(60));
}

// ── Prompts ──────────────────────────────────────────────────────────

fn prompt_scanner() -> Result<&'static ScannerSpec> {
    let choices: Vec<&'static ScannerSpec> = scanners::REGISTRY.iter().collect();
    let choice = Select::new("Which programming language do you want to scan?", choices).prompt()?;
    Ok(choice)
}

fn prompt_code_path() -> Result<String> {
    let path = Text::new("Absolute path of the code to be scanned:")
        .with_validator(ValueRequiredValidator::new("Code path cannot be empty"))
        .prompt()?;
    Ok(path.trim().to_string())
}

fn prompt_scan_all() -> Result<bool> {
    let scan_all = Confirm::new("Do you want to scan the whole codebase?")
        .with_default(true)
        .prompt()?;
    Ok(scan_all)
}

fn prompt_file_list() -> Result<Vec<String>> {
    let files = Text::new("Specific file paths (comma separated):")
        .with_validator(ValueRequiredValidator::new("You must enter at least one file"))
        .prompt()?;
    Ok(files.split(',').map(|f| f.trim().to_string()).collect())
}

fn prompt_extra_args(scanner: &ScannerSpec) -> Result<String> {
    let options = Text::new(&format!(
        "Additional options for {} (blank for none):",
        scanner.tool
    ))
    .prompt()?;
    Ok(options.trim().to_string())
}

// ── Scan execution (reuses the engine) ──────────────────────────────

/// Run the pipeline for a finished request and display the results.
fn execute_scan(request: ScanRequest, config: &CocoonConfig) -> Result<()> {
    let pipeline = Pipeline::new(
        request,
        config.runtime.binary.clone(),
        config.runtime.skip_pull,
    );
    let scan_report = pipeline.run()?;

    report::terminal::render(&scan_report);

    // Ask if the user wants a JSON report saved
    let save = Confirm::new("Save JSON report?")
        .with_default(false)
        .prompt()
        .unwrap_or(false);

    if save {
        let filename = Text::new("Filename:")
            .with_default("cocoon-report.json")
            .prompt()?;
        let json = report::json::render(&scan_report)?;
        std::fs::write(&filename, &json)?;
        println!("  {} Report written to {}", "✅".bold(), filename.green());
    }

    Ok(())
}

// ── Public entry-points ─────────────────────────────────────────────

/// Interactive wizard (no-args mode): the original prompt sequence.
pub fn run_wizard() -> Result<()> {
    init_quiet_logging();

    println!();
    separator();
    println!(
        "  {} {}",
        "🛡".bold(),
        format!("Welcome to Cocoon v{}", env!("CARGO_PKG_VERSION")).bold()
    );
    println!(
        "  {}",
        "Runs containerized security scanners and pretty-prints their reports.".dimmed()
    );
    separator();
    println!();

    let scanner = prompt_scanner()?;
    let code_path = prompt_code_path()?;
    let scan_all = prompt_scan_all()?;
    let file_list = if scan_all {
        Vec::new()
    } else {
        prompt_file_list()?
    };
    let extra_args = prompt_extra_args(scanner)?;

    let config = current_dir_config();
    let request = ScanRequest::new(scanner, code_path, scan_all, file_list, extra_args)?;
    execute_scan(request, &config)
}

/// Drag-and-drop mode: a single directory was passed without a subcommand.
pub fn run_drag_drop(path: &Path) -> Result<()> {
    init_quiet_logging();

    println!();
    separator();
    println!(
        "  {} {}",
        "🛡".bold(),
        format!("Cocoon v{}", env!("CARGO_PKG_VERSION")).bold()
    );
    separator();
    println!();
    println!("  Folder: {}", path.display().to_string().cyan());
    println!();

    let proceed = Confirm::new("Scan this folder?")
        .with_default(true)
        .prompt()
        .unwrap_or(false);

    if !proceed {
        println!("  {}", "Scan cancelled.".dimmed());
        return Ok(());
    }

    let scanner = prompt_scanner()?;
    let extra_args = prompt_extra_args(scanner)?;

    let code_path = std::fs::canonicalize(path)?.to_string_lossy().into_owned();
    let config = CocoonConfig::load(path).unwrap_or_default();
    let request = ScanRequest::new(scanner, code_path, true, Vec::new(), extra_args)?;
    execute_scan(request, &config)
}

fn current_dir_config() -> CocoonConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    CocoonConfig::load(&cwd).unwrap_or_default()
}

/// Set up minimal tracing so the pipeline can emit info lines without
/// the full CLI log initialisation (which requires the parsed Cli).
fn init_quiet_logging() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("cocoon=info"))
        .with_target(false)
        .without_time()
        .try_init(); // try_init to avoid panic if already initialised
}
