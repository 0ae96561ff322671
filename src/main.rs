use anyhow::Result;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::{Cli, Commands, OutputFormat, ReasonArg};

// Import from our library
use license_curator::config::load_config;
use license_curator::curation::{
    append_curation, default_curations_file_path, CurationsFile, LicenseFindingCuration,
};
use license_curator::findings::{find_findings_file, load_findings};
use license_curator::init::generate_curations_file;
use license_curator::output::format_table_output;
use license_curator::report::create_report;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Apply {
            findings,
            curations,
            format,
            output,
            verbose,
            quiet,
            fail_on_unused,
        } => handle_apply(
            findings,
            curations,
            format,
            output,
            verbose,
            quiet,
            fail_on_unused,
        ),
        Commands::Validate { curations } => handle_validate(curations),
        Commands::Init { path } => handle_init(path),
        Commands::Record {
            path,
            start_line,
            line_count,
            detected,
            concluded,
            reason,
            comment,
            curations,
        } => handle_record(
            path, start_line, line_count, detected, concluded, reason, comment, curations,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_apply(
    findings_path: Option<PathBuf>,
    curations_path: Option<PathBuf>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    verbose: bool,
    quiet: bool,
    fail_on_unused: bool,
) -> Result<()> {
    // Load configuration from license-curator.toml
    let config = load_config()?;

    // CLI arguments override config values
    let fail_on_unused = fail_on_unused || config.fail_on_unused.unwrap_or(false);

    // Locate scanner output
    let findings_path = match findings_path.or(config.findings_file) {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir()?;
            find_findings_file(&cwd).ok_or_else(|| {
                anyhow::anyhow!(
                    "No scan-results.json or findings.json found. Pass the scanner output path explicitly."
                )
            })?
        }
    };
    let scanner_report = load_findings(&findings_path)?;

    // Locate curations; a missing default file just means no overrides
    let explicit_curations = curations_path.is_some() || config.curations_file.is_some();
    let curations_path = curations_path
        .or(config.curations_file)
        .unwrap_or_else(default_curations_file_path);

    let curations = if curations_path.exists() {
        CurationsFile::load_from_file(&curations_path)?
    } else if explicit_curations {
        anyhow::bail!("Curations file not found: {}", curations_path.display());
    } else {
        if !quiet {
            eprintln!(
                "No curations file at {}, applying none",
                curations_path.display()
            );
        }
        CurationsFile::new()
    };

    let report = create_report(
        &scanner_report.license_findings,
        &curations.curations,
        scanner_report.scanner.clone(),
    );

    // Determine output format
    let format = format.unwrap_or_else(|| match config.format.as_deref() {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    });

    // Generate output
    let output_content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Table => format_table_output(&report, verbose),
    };

    match output {
        Some(path) => fs::write(path, output_content)?,
        None => {
            if !quiet {
                println!("{}", output_content);
            }
        }
    }

    if fail_on_unused && !report.summary.unused_curations.is_empty() {
        eprintln!(
            "{} curation(s) matched no finding",
            report.summary.unused_curations.len()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn handle_validate(curations_path: Option<PathBuf>) -> Result<()> {
    let curations_path = curations_path.unwrap_or_else(default_curations_file_path);

    match CurationsFile::load_from_file(&curations_path) {
        Ok(curations) => {
            println!(
                "Curations file is valid ({} rule(s))",
                curations.curations.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Curations validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn handle_init(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(default_curations_file_path);
    generate_curations_file(path)
}

#[allow(clippy::too_many_arguments)]
fn handle_record(
    path: String,
    start_lines: Vec<usize>,
    line_count: Option<usize>,
    detected: Option<String>,
    concluded: String,
    reason: ReasonArg,
    comment: String,
    curations_path: Option<PathBuf>,
) -> Result<()> {
    let curations_path = curations_path.unwrap_or_else(default_curations_file_path);

    let curation = LicenseFindingCuration {
        path,
        start_lines,
        line_count,
        detected_license: detected,
        concluded_license: concluded,
        reason: reason.into(),
        comment,
    };

    append_curation(&curations_path, &curation)?;

    println!(
        "✅ Recorded curation for '{}' in {}",
        curation.path,
        curations_path.display()
    );

    Ok(())
}
