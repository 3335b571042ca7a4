use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use polysecret::cli::{Cli, Commands, OutputFormat, solve_config};
use polysecret::codec;
use polysecret::commands::{self, CaseReport, describe_case, solve_files, solve_labeled};

const STDIN_LABEL: &str = "<stdin>";

/// Read one case record from piped stdin
fn read_stdin_case() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        bail!("No case files provided (pass file paths or pipe a case record on stdin)");
    }

    let mut text = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("Failed to read case record from stdin")?;

    if text.trim().is_empty() {
        bail!("No case record on stdin");
    }

    Ok(text)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("polysecret=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("polysecret=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_report(report: &CaseReport, format: OutputFormat) {
    match (format, &report.outcome) {
        (OutputFormat::Text, Ok(secret)) => println!("Secret for {}: {secret}", report.label),
        (OutputFormat::Text, Err(e)) => eprintln!("Error for {}: {e}", report.label),
        (OutputFormat::Json, Ok(secret)) => println!(
            "{}",
            json!({ "case": report.label, "secret": secret.to_string(), "error": null })
        ),
        (OutputFormat::Json, Err(e)) => println!(
            "{}",
            json!({
                "case": report.label,
                "secret": null,
                "error": { "kind": e.kind(), "message": e.to_string() },
            })
        ),
    }
}

fn inspect(path: &Path) -> Result<()> {
    let text = commands::read_case(path)?;
    let case = codec::decode_case_str(&text)
        .with_context(|| format!("Failed to decode {}", path.display()))?;
    print!("{}", describe_case(&case));
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Solve {
            files,
            format,
            allow_fraction,
            parallel,
        } => {
            let config = solve_config(allow_fraction, parallel);

            let reports = if files.is_empty() {
                let text = read_stdin_case()?;
                vec![solve_labeled(STDIN_LABEL, &text, &config)]
            } else {
                solve_files(&files, &config)
            };

            for report in &reports {
                print_report(report, format);
            }

            let failed = reports.iter().filter(|r| !r.is_ok()).count();
            if failed > 0 {
                bail!("{failed} of {} case(s) failed", reports.len());
            }
        }
        Commands::Inspect { file } => inspect(&file)?,
    }

    Ok(())
}
