//! prostata-report
//!
//! Builds a registry from a YAML manifest and prints its report on stdout.
//! Logs go to stderr, filtered by `RUST_LOG`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use prostata_report::{config, Report};

/// Print the metrics declared in a prostata manifest.
#[derive(Parser)]
#[command(name = "prostata-report")]
#[command(version)]
#[command(about = "Build a metrics registry from a manifest and print its report")]
struct Args {
    /// Path to the YAML manifest.
    manifest: PathBuf,

    /// Emit JSON instead of aligned text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&args.manifest, args.json) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let path = args.manifest.display();
            tracing::error!(%path, code = e.code(), error = %e, "report failed");
            eprintln!("{path}: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, json: bool) -> prostata_report::Result<String> {
    let manifest = config::load_from_file(path)?;
    let registry = manifest.build()?;
    tracing::info!(path = %path.display(), metrics = registry.len(), "registry built");

    let report = Report::capture(&registry);
    if json {
        let mut s = report.to_json()?;
        s.push('\n');
        Ok(s)
    } else {
        Ok(report.render_text())
    }
}
