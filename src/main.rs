use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alps_breakdown::config::{self, OutputFormat, ProcessConfig};
use alps_breakdown::pipeline;

#[derive(Parser)]
#[command(name = "alps-breakdown", version)]
#[command(about = "Break the feature section of an ALPS document into a task list")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the feature section of a document into a task list
    Process {
        /// Path to the ALPS markdown document
        file_path: PathBuf,

        /// Output file path
        #[arg(short, long, env = config::OUTPUT_ENV, default_value = config::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,

        /// Output format
        #[arg(
            short,
            long,
            value_enum,
            ignore_case = true,
            env = config::FORMAT_ENV,
            default_value_t = OutputFormat::Yaml
        )]
        format: OutputFormat,

        /// Number of the section holding the features
        #[arg(short, long, default_value_t = config::DEFAULT_SECTION)]
        section: u32,
    },
    /// Check the feature section of a document for structural problems
    Validate {
        /// Path to the ALPS markdown document
        file_path: PathBuf,

        /// Number of the section holding the features
        #[arg(short, long, default_value_t = config::DEFAULT_SECTION)]
        section: u32,
    },
    /// Show version information
    Version,
}

/// Initialize tracing on stderr so stdout only carries user-facing output
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "alps_breakdown=debug"
    } else {
        "alps_breakdown=warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                ErrorKind::InvalidSubcommand => {
                    let _ = Cli::command().print_help();
                    ExitCode::FAILURE
                }
                _ => ExitCode::FAILURE,
            };
        }
    };

    let verbose = matches!(cli.command, Commands::Process { verbose: true, .. });
    init_tracing(verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Process {
            file_path,
            output,
            verbose,
            format,
            section,
        } => {
            let config = ProcessConfig::new(file_path)
                .with_output(output)
                .with_format(format)
                .with_verbose(verbose)
                .with_section(section);

            let outcome = pipeline::process(&config, &mut |line: &str| println!("{}", line))?;

            println!("✓ Complete! Output saved to: {}", outcome.output.display());
            println!("Features processed: {}", outcome.total_features);
            println!("Tasks generated: {}", outcome.total_tasks);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { file_path, section } => {
            let report = pipeline::validate(&file_path, section)?;
            if report.is_valid() {
                println!(
                    "✓ Section {} is valid ({} features)",
                    section, report.total_features
                );
                return Ok(ExitCode::SUCCESS);
            }

            println!("Section {} has {} issue(s):", section, report.issues.len());
            for issue in &report.issues {
                println!("  - {}", issue);
            }
            Ok(ExitCode::FAILURE)
        }
        Commands::Version => {
            println!("{} {}", alps_breakdown::NAME, alps_breakdown::VERSION);
            Ok(ExitCode::SUCCESS)
        }
    }
}
