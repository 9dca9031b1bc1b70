use owo_colors::OwoColorize;

use crate::report::ScanReport;

/// Render a scan report to the terminal with colors.
pub fn render(report: &ScanReport) {
    println!();
    println!("{}", "======= Scan Results =========".bold());
    println!();
    println!(
        "  {} scan of {} via {} ({:.2}s)",
        report.scanner.bold(),
        report.scan_path.cyan(),
        report.image.dimmed(),
        report.duration_ms as f64 / 1000.0
    );
    if report.findings_reported {
        println!(
            "  {}",
            "The scanner exited non-zero: vulnerabilities were detected.".yellow()
        );
    }
    println!();

    if let Some(ref overview) = report.report.overview {
        println!("{}", "Overview:".bold().underline());
        println!("{}", overview.trim_end());
        println!();
    }

    println!("{}", "Warning Types:".bold().underline());
    match report.report.warning_types {
        Some(ref types) => println!("{}", types.trim_end()),
        None => println!("  {}", "No warning types found".dimmed()),
    }
    println!();

    println!("{}", "Warnings:".bold().underline());
    if report.report.warnings.is_empty() {
        println!("  {}", "No vulnerabilities found.".green());
    } else {
        for (index, warning) in report.report.warnings.iter().enumerate() {
            println!();
            println!(
                "  {} {}",
                format!("Warning {}:", index + 1).red().bold(),
                warning.id.dimmed()
            );
            println!("{}", warning.body.trim());
        }
    }
    println!();

    // Sectioning recognized nothing; show the report as the tool wrote it
    // rather than dropping it.
    if report.report.is_empty() && !report.raw_output.trim().is_empty() {
        println!("{}", "Raw scanner output:".bold().underline());
        println!("{}", report.raw_output.trim_end());
        println!();
    }

    println!("{}", "=============================".bold());
    println!();
}
