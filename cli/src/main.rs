use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid profile {path}: {source}")]
    Profile {
        path: PathBuf,
        #[source]
        source: canvas::profile::ProfileError,
    },
    #[error("encoding failed: {0}")]
    Encode(#[from] canvas::profile::ProfileError),
    #[error("{path} failed validation: {problems} problem(s)")]
    Invalid { path: PathBuf, problems: usize },
}

#[derive(Parser, Debug)]
#[command(name = "linkboard", about = "Inspect, validate, and convert saved linkboard profiles")]
struct Cli {
    /// Log level for diagnostics on stderr.
    #[arg(long, env = "LINKBOARD_LOG", default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print box and connection counts and the canvas extent.
    Inspect { file: PathBuf },
    /// Fail when connections reference missing boxes or box ids repeat.
    Validate { file: PathBuf },
    /// Drop dangling connections, canonicalize opaque colors, and pretty-print.
    Normalize {
        file: PathBuf,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render the diagram as a standalone SVG.
    ExportSvg {
        file: PathBuf,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Inspect { file } => {
            let profile = commands::read_profile(&file)?;
            print!("{}", commands::inspect(&profile));
            Ok(())
        }
        Command::Validate { file } => {
            let profile = commands::read_profile(&file)?;
            let report = commands::validate(&profile);
            print!("{report}");
            if report.is_ok() {
                Ok(())
            } else {
                Err(CliError::Invalid { path: file, problems: report.problem_count() })
            }
        }
        Command::Normalize { file, output } => {
            let profile = commands::read_profile(&file)?;
            let (normalized, stats) = commands::normalize(profile);
            tracing::info!(
                dropped = stats.dropped_connections,
                recolored = stats.recolored_boxes,
                "normalized {}",
                file.display()
            );
            let mut json = normalized.to_json_pretty()?;
            json.push('\n');
            commands::write_output(output.as_deref(), &json)
        }
        Command::ExportSvg { file, output } => {
            let profile = commands::read_profile(&file)?;
            let (doc, _) = profile.into_doc();
            commands::write_output(output.as_deref(), &canvas::svg::render_svg(&doc))
        }
    }
}
